use std::sync::Arc;

use crate::auth::{hash_password, verify_password};
use crate::error::{AccountError, StoreResult, ValidationError};
use crate::models::{Account, MIN_PASSWORD_LEN};
use crate::requests::CredentialsRequest;
use crate::store::AccountStore;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
}

impl AccountService {
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// Registers a new account.
    ///
    /// Fails if the username is blank, the password is shorter than
    /// [`MIN_PASSWORD_LEN`], or the same username and password pair is
    /// already registered.
    pub async fn register(&self, candidate: &CredentialsRequest) -> Result<Account, AccountError> {
        if candidate.username.trim().is_empty() {
            tracing::warn!("Registration rejected: blank username");
            return Err(ValidationError::Blank { field: "username" }.into());
        }
        if candidate.password.chars().count() < MIN_PASSWORD_LEN {
            tracing::warn!(username = %candidate.username, "Registration rejected: password too short");
            return Err(ValidationError::TooShort {
                field: "password",
                min: MIN_PASSWORD_LEN,
            }
            .into());
        }
        if self.find_matching(candidate).await?.is_some() {
            tracing::warn!(username = %candidate.username, "Registration rejected: duplicate account");
            return Err(ValidationError::DuplicateAccount.into());
        }

        let account = self
            .store
            .insert(&candidate.username, &hash_password(&candidate.password))
            .await?;
        tracing::info!(account_id = account.account_id, username = %account.username, "Registered account");
        Ok(account)
    }

    pub async fn authenticate(&self, candidate: &CredentialsRequest) -> Result<Account, AccountError> {
        match self.find_matching(candidate).await? {
            Some(account) => {
                tracing::info!(account_id = account.account_id, "Login succeeded");
                Ok(account)
            }
            None => {
                tracing::warn!(username = %candidate.username, "Login failed");
                Err(AccountError::AuthenticationFailed)
            }
        }
    }

    pub async fn get_by_id(&self, account_id: i32) -> StoreResult<Option<Account>> {
        if account_id <= 0 {
            return Ok(None);
        }
        self.store.find_by_id(account_id).await
    }

    pub async fn get_all(&self) -> StoreResult<Vec<Account>> {
        self.store.list().await
    }

    async fn find_matching(&self, candidate: &CredentialsRequest) -> StoreResult<Option<Account>> {
        let accounts = self.store.find_by_username(&candidate.username).await?;
        Ok(accounts
            .into_iter()
            .find(|a| verify_password(&candidate.password, &a.password_hash)))
    }
}
