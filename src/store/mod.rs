//! Persistence layer.
//!
//! Each entity has a store trait and a PostgreSQL implementation that is handed
//! its connection pool at construction. Writes run inside an explicit
//! transaction; reads use the pool directly and report "no rows" as `None` or
//! an empty `Vec`.

pub mod account;
#[cfg(test)]
pub mod memory;
pub mod message;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::{StoreError, StoreResult};
use crate::models::{Account, Message, NewMessage};

pub use account::PgAccountStore;
pub use message::PgMessageStore;

#[async_trait]
pub trait AccountStore: Send + Sync {
    async fn insert(&self, username: &str, password_hash: &str) -> StoreResult<Account>;

    async fn find_by_id(&self, account_id: i32) -> StoreResult<Option<Account>>;

    /// All accounts registered under `username`. Several may exist as long as
    /// their passwords differ.
    async fn find_by_username(&self, username: &str) -> StoreResult<Vec<Account>>;

    async fn list(&self) -> StoreResult<Vec<Account>>;
}

#[async_trait]
pub trait MessageStore: Send + Sync {
    async fn insert(&self, message: &NewMessage) -> StoreResult<Message>;

    async fn find_by_id(&self, message_id: i32) -> StoreResult<Option<Message>>;

    async fn list(&self) -> StoreResult<Vec<Message>>;

    async fn list_by_author(&self, account_id: i32) -> StoreResult<Vec<Message>>;

    /// Overwrites the text of a message, returning the updated row or `None`
    /// if no message has this id.
    async fn update_text(&self, message_id: i32, message_text: &str)
        -> StoreResult<Option<Message>>;

    async fn delete(&self, message_id: i32) -> StoreResult<()>;
}

pub(crate) fn query_failed(operation: &'static str) -> impl FnOnce(sqlx::Error) -> StoreError {
    move |source| StoreError::Query { operation, source }
}

pub(crate) async fn begin(
    pool: &PgPool,
    operation: &'static str,
) -> StoreResult<Transaction<'static, Postgres>> {
    pool.begin().await.map_err(|source| {
        tracing::error!(operation, error = %source, "Failed to begin transaction");
        StoreError::Begin { operation, source }
    })
}

/// Commits `tx` if the statement succeeded, otherwise rolls it back.
///
/// A failed rollback is reported as [`StoreError::Rollback`], carrying both the
/// statement error and the rollback error.
pub(crate) async fn finish<T>(
    tx: Transaction<'static, Postgres>,
    operation: &'static str,
    result: Result<T, sqlx::Error>,
) -> StoreResult<T> {
    match result {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|source| StoreError::Commit { operation, source })?;
            Ok(value)
        }
        Err(cause) => {
            tracing::error!(operation, error = %cause, "Statement failed, rolling back");
            if let Err(rollback) = tx.rollback().await {
                tracing::error!(operation, error = %rollback, "Rollback failed");
                return Err(StoreError::Rollback {
                    operation,
                    cause,
                    rollback,
                });
            }
            Err(StoreError::Query {
                operation,
                source: cause,
            })
        }
    }
}
