use async_trait::async_trait;
use sqlx::PgPool;

use super::{begin, finish, query_failed, AccountStore};
use crate::error::StoreResult;
use crate::models::Account;

#[derive(Clone)]
pub struct PgAccountStore {
    pool: PgPool,
}

impl PgAccountStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AccountStore for PgAccountStore {
    async fn insert(&self, username: &str, password_hash: &str) -> StoreResult<Account> {
        const OP: &str = "insert account";

        let mut tx = begin(&self.pool, OP).await?;
        let result = sqlx::query_as::<_, Account>(
            r#"
            INSERT INTO account (username, password)
            VALUES ($1, $2)
            RETURNING account_id, username, password
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&mut *tx)
        .await;

        let account = finish(tx, OP, result).await?;
        tracing::debug!(account_id = account.account_id, "Inserted account");
        Ok(account)
    }

    async fn find_by_id(&self, account_id: i32) -> StoreResult<Option<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM account WHERE account_id = $1")
            .bind(account_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("select account by id"))
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Vec<Account>> {
        sqlx::query_as::<_, Account>(
            "SELECT * FROM account WHERE username = $1 ORDER BY account_id",
        )
        .bind(username)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("select accounts by username"))
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        sqlx::query_as::<_, Account>("SELECT * FROM account ORDER BY account_id")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("select all accounts"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;

    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn store() -> PgAccountStore {
        let pool = db::test_pool().await;
        PgAccountStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_assigns_id_and_reads_back() {
        let store = store().await;
        let username = format!("store-test-{}", std::process::id());

        let created = store.insert(&username, "digest").await.unwrap();
        assert!(created.account_id > 0);

        let found = store.find_by_id(created.account_id).await.unwrap();
        assert_eq!(found, Some(created.clone()));

        let by_name = store.find_by_username(&username).await.unwrap();
        assert!(by_name.contains(&created));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn duplicate_credentials_violate_constraint() {
        let store = store().await;
        let username = format!("dup-test-{}", std::process::id());

        store.insert(&username, "digest").await.unwrap();
        let err = store.insert(&username, "digest").await.unwrap_err();
        assert!(err.is_bad_input());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn missing_account_is_none() {
        let store = store().await;
        assert_eq!(store.find_by_id(i32::MAX).await.unwrap(), None);
    }
}
