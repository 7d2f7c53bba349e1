#![allow(dead_code)]

use std::sync::Arc;

use link_store::prelude::{LinkStore, PgConnectionProvider, PgLinkRepository};
use sqlx::PgPool;

pub const TEST_TABLE: &str = "urls";

/// Builds a per-call connection provider that dials the same ephemeral test
/// database as the `#[sqlx::test]` pool.
pub fn provider_for(pool: &PgPool) -> PgConnectionProvider {
    PgConnectionProvider::from_options((*pool.connect_options()).clone())
}

pub fn repository_for(pool: &PgPool) -> PgLinkRepository<PgConnectionProvider> {
    PgLinkRepository::new(provider_for(pool), TEST_TABLE)
}

pub fn store_for(pool: &PgPool) -> LinkStore<PgLinkRepository<PgConnectionProvider>> {
    LinkStore::new(Arc::new(repository_for(pool)))
}

pub async fn insert_link(pool: &PgPool, short: &str, url: &str) {
    sqlx::query("INSERT INTO urls (short, link) VALUES ($1, $2)")
        .bind(short)
        .bind(url)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}
