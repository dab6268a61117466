use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

use super::ValidationError;

lazy_static! {
    // ASCII digits only; `\d` would also accept other Unicode digits.
    static ref PHONE_RE: Regex = Regex::new(r"^[0-9]{10}$").expect("phone regex is valid");
}

/// Ten-digit phone number, stored without country code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Matches the raw input; hosts trim before calling if they want to.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if PHONE_RE.is_match(input) {
            Ok(Self(input.to_string()))
        } else {
            Err(ValidationError::InvalidPhone)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Last four digits only, for logs.
    pub fn masked(&self) -> String {
        format!("******{}", &self.0[self.0.len() - 4..])
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_ten_digits() {
        let phone = PhoneNumber::parse("9876543210").unwrap();
        assert_eq!(phone.as_str(), "9876543210");
    }

    #[test]
    fn test_rejects_surrounding_whitespace() {
        for input in ["  9876543210", "9876543210\n", " 9876543210 "] {
            assert_eq!(
                PhoneNumber::parse(input),
                Err(ValidationError::InvalidPhone),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_rejects_bad_numbers() {
        for input in [
            "",
            "98765",
            "98765432101",
            "+919876543210",
            "98765 43210",
            "98765-43210",
            "abcdefghij",
            "٩٨٧٦٥٤٣٢١٠", // Arabic-Indic digits
        ] {
            assert_eq!(
                PhoneNumber::parse(input),
                Err(ValidationError::InvalidPhone),
                "{input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_masked_keeps_last_four() {
        let phone = PhoneNumber::parse("9876543210").unwrap();
        assert_eq!(phone.masked(), "******3210");
    }

    #[test]
    fn test_error_message() {
        assert_eq!(
            ValidationError::InvalidPhone.to_string(),
            "Please enter a valid 10-digit phone number."
        );
    }
}
