use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{auth::AppState, handlers};

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/register", post(handlers::register))
        .route("/login", post(handlers::login))
        .route("/accounts", get(handlers::get_accounts))
        .route("/accounts/{id}/messages", get(handlers::get_account_messages))
        .route(
            "/messages",
            get(handlers::get_messages).post(handlers::create_message),
        )
        .route(
            "/messages/{id}",
            get(handlers::get_message)
                .delete(handlers::delete_message)
                .patch(handlers::update_message),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
