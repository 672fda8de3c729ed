//! Business rules sitting between the HTTP handlers and the stores.

pub mod account;
pub mod message;

pub use account::AccountService;
pub use message::MessageService;

use crate::error::ValidationError;
use crate::models::MAX_MESSAGE_LEN;

/// Checks that message text is non-blank and fits in a message row.
pub(crate) fn validate_message_text(text: &str) -> Result<(), ValidationError> {
    if text.trim().is_empty() {
        return Err(ValidationError::Blank {
            field: "message_text",
        });
    }
    if text.chars().count() > MAX_MESSAGE_LEN {
        return Err(ValidationError::TooLong {
            field: "message_text",
            max: MAX_MESSAGE_LEN,
        });
    }
    Ok(())
}
