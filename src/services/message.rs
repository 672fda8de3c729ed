use std::sync::Arc;

use super::validate_message_text;
use crate::error::{MessageError, StoreResult, ValidationError};
use crate::models::{Message, NewMessage};
use crate::requests::CreateMessageRequest;
use crate::store::{AccountStore, MessageStore};

#[derive(Clone)]
pub struct MessageService {
    messages: Arc<dyn MessageStore>,
    accounts: Arc<dyn AccountStore>,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageStore>, accounts: Arc<dyn AccountStore>) -> Self {
        Self { messages, accounts }
    }

    /// Stores a new message after checking its author exists and its text is
    /// between 1 and 255 characters.
    pub async fn create(&self, candidate: CreateMessageRequest) -> Result<Message, MessageError> {
        let author_exists = candidate.posted_by > 0
            && self.accounts.find_by_id(candidate.posted_by).await?.is_some();
        if !author_exists {
            tracing::warn!(posted_by = candidate.posted_by, "Message rejected: unknown author");
            return Err(ValidationError::UnknownAuthor(candidate.posted_by).into());
        }
        if let Err(e) = validate_message_text(&candidate.message_text) {
            tracing::warn!(posted_by = candidate.posted_by, "Message rejected: {}", e);
            return Err(e.into());
        }

        let message = self
            .messages
            .insert(&NewMessage {
                posted_by: candidate.posted_by,
                message_text: candidate.message_text,
                time_posted_epoch: candidate.time_posted_epoch,
            })
            .await?;
        tracing::info!(
            message_id = message.message_id,
            posted_by = message.posted_by,
            "Created message"
        );
        Ok(message)
    }

    /// Replaces the text of an existing message. Id, author and timestamp are
    /// left untouched.
    pub async fn update_text(&self, message_id: i32, new_text: &str) -> Result<Message, MessageError> {
        if let Err(e) = validate_message_text(new_text) {
            tracing::warn!(message_id, "Update rejected: {}", e);
            return Err(e.into());
        }
        if message_id <= 0 {
            return Err(MessageError::NotFound(message_id));
        }

        match self.messages.update_text(message_id, new_text).await? {
            Some(message) => {
                tracing::info!(message_id, "Updated message text");
                Ok(message)
            }
            None => {
                tracing::warn!(message_id, "Update rejected: message not found");
                Err(MessageError::NotFound(message_id))
            }
        }
    }

    /// Deletes the message if it exists. Deleting a missing id is a no-op.
    pub async fn delete_by_id(&self, message_id: i32) -> StoreResult<()> {
        if message_id <= 0 {
            return Ok(());
        }
        self.messages.delete(message_id).await
    }

    pub async fn get_by_id(&self, message_id: i32) -> StoreResult<Option<Message>> {
        if message_id <= 0 {
            return Ok(None);
        }
        self.messages.find_by_id(message_id).await
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Message>> {
        self.messages.list().await
    }

    pub async fn get_all_by_author(&self, account_id: i32) -> StoreResult<Vec<Message>> {
        if account_id <= 0 {
            return Ok(Vec::new());
        }
        self.messages.list_by_author(account_id).await
    }
}
