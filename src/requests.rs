use serde::Deserialize;

/// Body of both `POST /register` and `POST /login`.
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct CreateMessageRequest {
    pub posted_by: i32,
    pub message_text: String,
    pub time_posted_epoch: i64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateMessageRequest {
    pub message_text: String,
}
