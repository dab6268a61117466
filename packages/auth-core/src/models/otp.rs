use std::fmt;

use super::ValidationError;

/// One-time code as typed by the user. Never persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct OtpCode(String);

impl OtpCode {
    /// Accepts exactly `len` ASCII digits and nothing else.
    pub fn parse(input: &str, len: usize) -> Result<Self, ValidationError> {
        if input.len() == len && input.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::InvalidOtp { len })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("OtpCode(**redacted**)")
    }
}
