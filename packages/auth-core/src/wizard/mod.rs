//! Phone → OTP → (name) wizard.
//!
//! ```text
//! PhoneEntry --request_code--> OtpEntry --verify_code (known)--> Completed
//!                                 |
//!                                 +--verify_code (new)--> NameEntry --register--> Completed
//! ```
//!
//! Failures keep the current step and set the error message. `edit_phone`
//! is the only way back to `PhoneEntry`.

mod busy;
mod engine;
mod hydrate;
mod step;

pub use busy::{BusyFlag, BusyGuard};
pub use engine::OtpWizard;
pub use step::WizardStep;

use crate::session::Session;

/// Where one successful operation left the wizard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardProgress {
    /// Moved (or stayed, for a resend) at this step.
    Advanced(WizardStep),
    /// Session hydrated; the host should close the wizard and navigate.
    Completed(Session),
}

/// How a wizard run ended, for the host to dispatch on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardResult {
    Completed(Session),
    /// Closed by the user; nothing was persisted.
    Cancelled,
}
