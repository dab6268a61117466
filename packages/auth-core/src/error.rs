//! Wizard error taxonomy.
//!
//! Everything the wizard can fail with collapses into one user-facing
//! string via `user_message`; nothing here is fatal.

use thiserror::Error;

use crate::models::ValidationError;
use crate::session::StorageError;
use crate::wizard::WizardStep;

pub type Result<T> = std::result::Result<T, AuthError>;

pub const GENERIC_FALLBACK: &str = "Something went wrong. Please try again.";
pub const NOT_REGISTERED: &str = "Number not registered. Please Sign Up first.";

#[derive(Debug, Error)]
pub enum AuthError {
    /// Input failed a format check; no request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The backend answered and said no (`success: false` or a 4xx).
    #[error("{message}")]
    Rejected { message: String },

    /// Login was attempted for a number with no account.
    #[error("{}", NOT_REGISTERED)]
    NotRegistered,

    /// An authenticated call came back 401.
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    /// No usable reply (network, 5xx, unparseable body). `detail` is for logs.
    #[error("{}", GENERIC_FALLBACK)]
    Transport { detail: String },

    #[error("Please wait for the current request to finish.")]
    Busy,

    #[error("Not available at the {actual} step (expected {expected}).")]
    WrongStep {
        expected: WizardStep,
        actual: WizardStep,
    },

    #[error("Could not save your session. Please try again.")]
    Storage(#[from] StorageError),
}

impl AuthError {
    pub(crate) fn rejected(message: Option<String>) -> Self {
        AuthError::Rejected {
            message: message
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| GENERIC_FALLBACK.to_string()),
        }
    }

    /// The single transient message shown to the user.
    pub fn user_message(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, AuthError::Validation(_))
    }
}
