mod common;

use std::collections::HashSet;
use std::sync::Arc;

use link_store::domain::connection::ConnectionProvider;
use link_store::error::StoreError;
use link_store::prelude::{LinkStore, PgConnectionProvider, PgLinkRepository};
use sqlx::PgPool;
use sqlx::postgres::PgConnectOptions;

#[sqlx::test]
async fn test_default_invocation_scenario(pool: PgPool) {
    let store = common::store_for(&pool);

    let short = store
        .create("http://example.com".to_string())
        .await
        .unwrap();

    assert_eq!(short.len(), 5);
    assert!(short.chars().all(|c| c.is_ascii_alphanumeric()));

    let url = store.resolve(&short).await.unwrap();
    assert_eq!(url.as_deref(), Some("http://example.com"));
}

#[sqlx::test]
async fn test_resolve_miss_returns_none(pool: PgPool) {
    let store = common::store_for(&pool);

    let url = store.resolve("nvrgn").await.unwrap();

    assert!(url.is_none());
}

#[sqlx::test]
async fn test_repeated_creates_yield_unique_tokens(pool: PgPool) {
    let store = common::store_for(&pool);
    let mut tokens = HashSet::new();

    for i in 0..10 {
        let url = format!("https://example.com/page/{i}");
        let short = store.create(url.clone()).await.unwrap();

        assert!(tokens.insert(short.clone()), "token {short} repeated");
        assert_eq!(store.resolve(&short).await.unwrap(), Some(url));
    }

    assert_eq!(common::count_links(&pool).await, 10);
}

#[sqlx::test]
async fn test_generation_avoids_populated_tokens(pool: PgPool) {
    // Alphabet "abc" at length 2 admits six permutation prefixes:
    // ab ac ba bc ca cb. Occupy four, leaving only ca and cb free.
    for taken in ["ab", "ac", "ba", "bc"] {
        common::insert_link(&pool, taken, "https://taken.example").await;
    }

    let store = common::store_for(&pool);

    for _ in 0..20 {
        let token = store.generate_unique_token_with("abc", 2).await.unwrap();
        assert!(
            token == "ca" || token == "cb",
            "generated occupied or malformed token {token}"
        );
    }
}

#[sqlx::test]
async fn test_saturated_space_exhausts(pool: PgPool) {
    // Alphabet "ab" at length 2 admits exactly ab and ba; occupy both.
    common::insert_link(&pool, "ab", "https://taken.example").await;
    common::insert_link(&pool, "ba", "https://taken.example").await;

    let store = common::store_for(&pool);

    let err = store
        .generate_unique_token_with("ab", 2)
        .await
        .unwrap_err();

    assert!(matches!(err, StoreError::TokenSpaceExhausted { .. }));
}

#[sqlx::test]
async fn test_token_shape_with_custom_alphabet(pool: PgPool) {
    let store = common::store_for(&pool);

    let token = store
        .generate_unique_token_with("xyz123", 4)
        .await
        .unwrap();

    assert_eq!(token.chars().count(), 4);
    assert!(token.chars().all(|c| "xyz123".contains(c)));
}

#[sqlx::test]
async fn test_generated_token_is_not_inserted(pool: PgPool) {
    let store = common::store_for(&pool);

    store.generate_unique_token().await.unwrap();

    assert_eq!(common::count_links(&pool).await, 0);
}

#[tokio::test]
async fn test_unreachable_store_fails_with_connection_error() {
    // Nothing listens on port 1; every operation must fail while dialing,
    // before any statement is attempted.
    let options = PgConnectOptions::new()
        .host("127.0.0.1")
        .port(1)
        .username("nobody")
        .database("nowhere");

    let provider = PgConnectionProvider::from_options(options.clone());
    let repository = PgLinkRepository::new(provider, "urls");
    let store = LinkStore::new(Arc::new(repository));

    let err = store
        .create("https://example.com".to_string())
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)));

    let err = store.resolve("abc12").await.unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)));

    let err = PgConnectionProvider::from_options(options)
        .acquire()
        .await
        .unwrap_err();
    assert!(matches!(err, StoreError::Connection(_)));
}
