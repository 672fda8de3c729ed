//! In-process stores used by the service and router tests.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{AccountStore, MessageStore};
use crate::error::{StoreError, StoreResult};
use crate::models::{Account, Message, NewMessage};

#[derive(Default)]
pub struct MemoryAccountStore {
    rows: Mutex<Vec<Account>>,
}

#[async_trait]
impl AccountStore for MemoryAccountStore {
    async fn insert(&self, username: &str, password_hash: &str) -> StoreResult<Account> {
        let mut rows = self.rows.lock().unwrap();
        let account = Account {
            account_id: rows.last().map_or(1, |a| a.account_id + 1),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
        };
        rows.push(account.clone());
        Ok(account)
    }

    async fn find_by_id(&self, account_id: i32) -> StoreResult<Option<Account>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|a| a.account_id == account_id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> StoreResult<Vec<Account>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|a| a.username == username).cloned().collect())
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        Ok(self.rows.lock().unwrap().clone())
    }
}

#[derive(Default)]
pub struct MemoryMessageStore {
    rows: Mutex<Vec<Message>>,
    next_id: Mutex<i32>,
}

#[async_trait]
impl MessageStore for MemoryMessageStore {
    async fn insert(&self, message: &NewMessage) -> StoreResult<Message> {
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let message = Message {
            message_id: *next_id,
            posted_by: message.posted_by,
            message_text: message.message_text.clone(),
            time_posted_epoch: message.time_posted_epoch,
        };
        self.rows.lock().unwrap().push(message.clone());
        Ok(message)
    }

    async fn find_by_id(&self, message_id: i32) -> StoreResult<Option<Message>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|m| m.message_id == message_id).cloned())
    }

    async fn list(&self) -> StoreResult<Vec<Message>> {
        Ok(self.rows.lock().unwrap().clone())
    }

    async fn list_by_author(&self, account_id: i32) -> StoreResult<Vec<Message>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().filter(|m| m.posted_by == account_id).cloned().collect())
    }

    async fn update_text(
        &self,
        message_id: i32,
        message_text: &str,
    ) -> StoreResult<Option<Message>> {
        let mut rows = self.rows.lock().unwrap();
        Ok(rows.iter_mut().find(|m| m.message_id == message_id).map(|m| {
            m.message_text = message_text.to_string();
            m.clone()
        }))
    }

    async fn delete(&self, message_id: i32) -> StoreResult<()> {
        self.rows.lock().unwrap().retain(|m| m.message_id != message_id);
        Ok(())
    }
}

/// Store whose every operation fails as if the pool were exhausted.
pub struct UnavailableStore;

fn unavailable<T>(operation: &'static str) -> StoreResult<T> {
    Err(StoreError::Begin {
        operation,
        source: sqlx::Error::PoolTimedOut,
    })
}

#[async_trait]
impl AccountStore for UnavailableStore {
    async fn insert(&self, _: &str, _: &str) -> StoreResult<Account> {
        unavailable("insert account")
    }

    async fn find_by_id(&self, _: i32) -> StoreResult<Option<Account>> {
        unavailable("select account by id")
    }

    async fn find_by_username(&self, _: &str) -> StoreResult<Vec<Account>> {
        unavailable("select accounts by username")
    }

    async fn list(&self) -> StoreResult<Vec<Account>> {
        unavailable("select all accounts")
    }
}

#[async_trait]
impl MessageStore for UnavailableStore {
    async fn insert(&self, _: &NewMessage) -> StoreResult<Message> {
        unavailable("insert message")
    }

    async fn find_by_id(&self, _: i32) -> StoreResult<Option<Message>> {
        unavailable("select message by id")
    }

    async fn list(&self) -> StoreResult<Vec<Message>> {
        unavailable("select all messages")
    }

    async fn list_by_author(&self, _: i32) -> StoreResult<Vec<Message>> {
        unavailable("select messages by author")
    }

    async fn update_text(&self, _: i32, _: &str) -> StoreResult<Option<Message>> {
        unavailable("update message text")
    }

    async fn delete(&self, _: i32) -> StoreResult<()> {
        unavailable("delete message")
    }
}
