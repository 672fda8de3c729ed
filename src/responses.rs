use serde::Serialize;

use crate::models::{Account, Message};

/// Wire shape of an account: `{account_id, username, password}`.
///
/// Plaintext passwords are never stored, so `password` carries the
/// credential the client just submitted on register/login and the stored
/// digest everywhere else.
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub account_id: i32,
    pub username: String,
    pub password: String,
}

impl AccountResponse {
    pub fn with_credential(account: Account, password: String) -> Self {
        AccountResponse {
            account_id: account.account_id,
            username: account.username,
            password,
        }
    }
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        AccountResponse {
            account_id: account.account_id,
            username: account.username,
            password: account.password_hash,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message_id: i32,
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        MessageResponse {
            message_id: message.message_id,
            posted_by: message.posted_by,
            message_text: message.message_text,
            time_posted_epoch: message.time_posted_epoch,
        }
    }
}
