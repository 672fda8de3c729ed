use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::{
    error::ApiError,
    extract::{ApiJson, ApiPath},
    requests::{CreateMessageRequest, CredentialsRequest, UpdateMessageRequest},
    responses::{AccountResponse, MessageResponse},
    services::{AccountService, MessageService},
};

/// Body for lookups that found nothing: 200 with no content.
fn empty_body() -> Response {
    StatusCode::OK.into_response()
}

pub async fn register(
    State(accounts): State<AccountService>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = accounts.register(&request).await?;
    Ok(Json(AccountResponse::with_credential(account, request.password)))
}

pub async fn login(
    State(accounts): State<AccountService>,
    ApiJson(request): ApiJson<CredentialsRequest>,
) -> Result<Json<AccountResponse>, ApiError> {
    let account = accounts.authenticate(&request).await?;
    Ok(Json(AccountResponse::with_credential(account, request.password)))
}

pub async fn get_accounts(
    State(accounts): State<AccountService>,
) -> Result<Json<Vec<AccountResponse>>, ApiError> {
    let accounts = accounts.get_all().await?;
    Ok(Json(accounts.into_iter().map(AccountResponse::from).collect()))
}

pub async fn create_message(
    State(messages): State<MessageService>,
    ApiJson(request): ApiJson<CreateMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = messages.create(request).await?;
    Ok(Json(MessageResponse::from(message)))
}

pub async fn get_messages(
    State(messages): State<MessageService>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = messages.get_all().await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}

pub async fn get_message(
    State(messages): State<MessageService>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Response, ApiError> {
    match messages.get_by_id(id).await? {
        Some(message) => Ok(Json(MessageResponse::from(message)).into_response()),
        None => {
            tracing::debug!(message_id = id, "Message not found");
            Ok(empty_body())
        }
    }
}

pub async fn delete_message(
    State(messages): State<MessageService>,
    ApiPath(id): ApiPath<i32>,
) -> Result<Response, ApiError> {
    let Some(message) = messages.get_by_id(id).await? else {
        tracing::debug!(message_id = id, "Nothing to delete");
        return Ok(empty_body());
    };

    messages.delete_by_id(id).await?;
    tracing::info!(message_id = id, "Deleted message");
    Ok(Json(MessageResponse::from(message)).into_response())
}

pub async fn update_message(
    State(messages): State<MessageService>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(request): ApiJson<UpdateMessageRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    let message = messages.update_text(id, &request.message_text).await?;
    Ok(Json(MessageResponse::from(message)))
}

pub async fn get_account_messages(
    State(messages): State<MessageService>,
    ApiPath(account_id): ApiPath<i32>,
) -> Result<Json<Vec<MessageResponse>>, ApiError> {
    let messages = messages.get_all_by_author(account_id).await?;
    Ok(Json(messages.into_iter().map(MessageResponse::from).collect()))
}
