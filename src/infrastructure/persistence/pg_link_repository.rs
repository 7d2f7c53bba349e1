//! PostgreSQL implementation of the link repository.

use async_trait::async_trait;
use sqlx::Row;

use crate::domain::connection::ConnectionProvider;
use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::{StoreError, statement_error};

/// PostgreSQL repository for the `short -> link` table.
///
/// Every operation acquires a connection through the injected provider first,
/// so an unreachable store fails with [`StoreError::Connection`] before any
/// statement is prepared. Statements are bound at runtime; the table name is
/// the one configuration knob that is spliced into statement text, and it
/// must be a plain SQL identifier (see
/// [`crate::config::is_plain_identifier`]).
pub struct PgLinkRepository<P: ConnectionProvider> {
    provider: P,
    table: String,
}

impl<P: ConnectionProvider> PgLinkRepository<P> {
    /// Creates a new repository over a connection provider and target table.
    pub fn new(provider: P, table: impl Into<String>) -> Self {
        Self {
            provider,
            table: table.into(),
        }
    }
}

#[async_trait]
impl<P: ConnectionProvider> LinkRepository for PgLinkRepository<P> {
    async fn insert(&self, link: Link) -> Result<(), StoreError> {
        let mut conn = self.provider.acquire().await?;

        let sql = format!(
            r#"INSERT INTO "{}" (short, link) VALUES ($1, $2)"#,
            self.table
        );

        sqlx::query(&sql)
            .bind(&link.short)
            .bind(&link.long_url)
            .execute(&mut conn)
            .await
            .map_err(statement_error)?;

        Ok(())
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<Link>, StoreError> {
        let mut conn = self.provider.acquire().await?;

        let sql = format!(
            r#"SELECT short, link FROM "{}" WHERE short = $1 LIMIT 1"#,
            self.table
        );

        let row = sqlx::query(&sql)
            .bind(short)
            .fetch_optional(&mut conn)
            .await
            .map_err(statement_error)?;

        let Some(row) = row else {
            return Ok(None);
        };

        let short: String = row.try_get("short").map_err(statement_error)?;
        let long_url: String = row.try_get("link").map_err(statement_error)?;

        Ok(Some(Link { short, long_url }))
    }
}
