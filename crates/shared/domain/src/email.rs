//! Email lookup key rules.
//!
//! The lookup treats the email as an opaque key: it is matched byte for byte
//! against the store, with no format validation and no normalization.

use crate::constants::MAX_EMAIL_LENGTH;
use crate::error::{DomainError, DomainResult};

/// Check that `email` can be used as a lookup key.
///
/// Rejects blank keys and keys longer than [`MAX_EMAIL_LENGTH`] characters.
/// The key is returned unchanged on success.
pub fn validate_lookup_email(email: &str) -> DomainResult<&str> {
    if email.trim().is_empty() {
        return Err(DomainError::validation("Email must not be empty"));
    }

    if email.chars().count() > MAX_EMAIL_LENGTH {
        return Err(DomainError::validation(format!(
            "Email must be at most {} characters",
            MAX_EMAIL_LENGTH
        )));
    }

    Ok(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_key_unchanged() {
        assert_eq!(validate_lookup_email("a@x.com"), Ok("a@x.com"));
        // No format validation: anything non-blank is a key
        assert_eq!(validate_lookup_email("not-an-email"), Ok("not-an-email"));
        assert_eq!(validate_lookup_email(" A@X.com "), Ok(" A@X.com "));
    }

    #[test]
    fn rejects_blank_key() {
        assert!(matches!(
            validate_lookup_email(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            validate_lookup_email("   \t"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn enforces_length_limit() {
        let at_limit = format!("{}@x.com", "a".repeat(MAX_EMAIL_LENGTH - 6));
        assert!(validate_lookup_email(&at_limit).is_ok());

        let too_long = format!("{}@x.com", "a".repeat(MAX_EMAIL_LENGTH));
        assert!(matches!(
            validate_lookup_email(&too_long),
            Err(DomainError::Validation(_))
        ));
    }
}
