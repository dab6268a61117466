use super::ValidationError;

/// Display name supplied at the name-entry step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayName(String);

impl DisplayName {
    /// Trims, then requires at least `min_len` characters.
    pub fn parse(input: &str, min_len: usize) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.chars().count() >= min_len {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ValidationError::NameTooShort { min_len })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trims_before_measuring() {
        assert_eq!(
            DisplayName::parse("  A  ", 2),
            Err(ValidationError::NameTooShort { min_len: 2 })
        );
        assert_eq!(DisplayName::parse("  Asha ", 2).unwrap().as_str(), "Asha");
    }

    #[test]
    fn test_minimum_is_inclusive() {
        assert!(DisplayName::parse("Al", 2).is_ok());
        assert!(DisplayName::parse("Al", 3).is_err());
        assert!(DisplayName::parse("Ali", 3).is_ok());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        // Three chars, nine bytes.
        assert!(DisplayName::parse("आशा", 3).is_ok());
        assert!(DisplayName::parse("आ", 2).is_err());
    }
}
