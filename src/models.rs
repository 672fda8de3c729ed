use sqlx::FromRow;

/// Maximum number of characters a message may hold.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Minimum number of characters an account password must have.
pub const MIN_PASSWORD_LEN: usize = 4;

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub account_id: i32,
    pub username: String,
    #[sqlx(rename = "password")]
    pub password_hash: String,
}

#[derive(FromRow, Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub message_id: i32,
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

/// A message that has passed validation but has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}
