//! Input values collected by the wizard, validated before any network call.

mod name;
mod otp;
mod phone;

pub use name::DisplayName;
pub use otp::OtpCode;
pub use phone::PhoneNumber;

use thiserror::Error;

/// Local validation failures. The display text is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid 10-digit phone number.")]
    InvalidPhone,

    #[error("Please enter a valid {len}-digit OTP.")]
    InvalidOtp { len: usize },

    #[error("Name must be at least {min_len} characters.")]
    NameTooShort { min_len: usize },
}
