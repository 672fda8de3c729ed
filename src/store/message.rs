use async_trait::async_trait;
use sqlx::PgPool;

use super::{begin, finish, query_failed, MessageStore};
use crate::error::StoreResult;
use crate::models::{Message, NewMessage};

#[derive(Clone)]
pub struct PgMessageStore {
    pool: PgPool,
}

impl PgMessageStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageStore for PgMessageStore {
    async fn insert(&self, message: &NewMessage) -> StoreResult<Message> {
        const OP: &str = "insert message";

        let mut tx = begin(&self.pool, OP).await?;
        let result = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO message (posted_by, message_text, time_posted_epoch)
            VALUES ($1, $2, $3)
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(message.posted_by)
        .bind(&message.message_text)
        .bind(message.time_posted_epoch)
        .fetch_one(&mut *tx)
        .await;

        finish(tx, OP, result).await
    }

    async fn find_by_id(&self, message_id: i32) -> StoreResult<Option<Message>> {
        sqlx::query_as::<_, Message>("SELECT * FROM message WHERE message_id = $1")
            .bind(message_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_failed("select message by id"))
    }

    async fn list(&self) -> StoreResult<Vec<Message>> {
        sqlx::query_as::<_, Message>("SELECT * FROM message ORDER BY message_id")
            .fetch_all(&self.pool)
            .await
            .map_err(query_failed("select all messages"))
    }

    async fn list_by_author(&self, account_id: i32) -> StoreResult<Vec<Message>> {
        sqlx::query_as::<_, Message>(
            "SELECT * FROM message WHERE posted_by = $1 ORDER BY message_id",
        )
        .bind(account_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed("select messages by author"))
    }

    async fn update_text(
        &self,
        message_id: i32,
        message_text: &str,
    ) -> StoreResult<Option<Message>> {
        const OP: &str = "update message text";

        let mut tx = begin(&self.pool, OP).await?;
        let result = sqlx::query_as::<_, Message>(
            r#"
            UPDATE message SET message_text = $1
            WHERE message_id = $2
            RETURNING message_id, posted_by, message_text, time_posted_epoch
            "#,
        )
        .bind(message_text)
        .bind(message_id)
        .fetch_optional(&mut *tx)
        .await;

        finish(tx, OP, result).await
    }

    async fn delete(&self, message_id: i32) -> StoreResult<()> {
        const OP: &str = "delete message";

        let mut tx = begin(&self.pool, OP).await?;
        let result = sqlx::query("DELETE FROM message WHERE message_id = $1")
            .bind(message_id)
            .execute(&mut *tx)
            .await;

        let done = finish(tx, OP, result).await?;
        tracing::debug!(message_id, rows = done.rows_affected(), "Deleted message");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db;
    use crate::store::{AccountStore, PgAccountStore};

    // Run with: DATABASE_URL=postgres://... cargo test -- --ignored

    async fn stores() -> (PgAccountStore, PgMessageStore) {
        let pool = db::test_pool().await;
        (PgAccountStore::new(pool.clone()), PgMessageStore::new(pool))
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn message_lifecycle() {
        let (accounts, messages) = stores().await;
        let author = accounts
            .insert(&format!("author-{}", std::process::id()), "digest")
            .await
            .unwrap();

        let created = messages
            .insert(&NewMessage {
                posted_by: author.account_id,
                message_text: "hello".into(),
                time_posted_epoch: 1000,
            })
            .await
            .unwrap();
        assert!(created.message_id > 0);

        let by_author = messages.list_by_author(author.account_id).await.unwrap();
        assert_eq!(by_author, vec![created.clone()]);

        let updated = messages
            .update_text(created.message_id, "edited")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.message_text, "edited");
        assert_eq!(updated.posted_by, created.posted_by);
        assert_eq!(updated.time_posted_epoch, created.time_posted_epoch);

        messages.delete(created.message_id).await.unwrap();
        assert_eq!(messages.find_by_id(created.message_id).await.unwrap(), None);

        // deleting twice is a no-op
        messages.delete(created.message_id).await.unwrap();
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn unknown_author_violates_foreign_key() {
        let (_, messages) = stores().await;
        let err = messages
            .insert(&NewMessage {
                posted_by: i32::MAX,
                message_text: "orphan".into(),
                time_posted_epoch: 1,
            })
            .await
            .unwrap_err();
        assert!(err.is_bad_input());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn update_of_missing_message_is_none() {
        let (_, messages) = stores().await;
        assert_eq!(messages.update_text(i32::MAX, "text").await.unwrap(), None);
    }
}
