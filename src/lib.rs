//! HTTP backend for user accounts and the short messages they post.
//!
//! Requests flow handler → service → store → PostgreSQL. Services enforce the
//! business rules; stores own the SQL and the transaction boundaries.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod models;
pub mod requests;
pub mod responses;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use sqlx::PgPool;

pub use auth::AppState;
pub use config::Config;

impl AppState {
    /// Wires PostgreSQL-backed stores and services around `pool`.
    pub fn from_pool(pool: PgPool) -> Self {
        let accounts = Arc::new(store::PgAccountStore::new(pool.clone()));
        let messages = Arc::new(store::PgMessageStore::new(pool));

        AppState {
            accounts: services::AccountService::new(accounts.clone()),
            messages: services::MessageService::new(messages, accounts),
        }
    }
}
