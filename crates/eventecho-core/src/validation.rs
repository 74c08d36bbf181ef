//! Input checks applied before a booking touches the log.

use crate::error::ValidationError;

/// Smallest guest count accepted from the planning form.
pub const MIN_GUESTS: u32 = 1;

/// Largest guest count accepted from the planning form.
pub const MAX_GUESTS: u32 = 10_000;

/// Accept an email that is non-blank and contains `@`.
///
/// Returns the trimmed address.
pub fn validate_email(email: &str) -> Result<&str, ValidationError> {
    let email = email.trim();
    if email.is_empty() || !email.contains('@') {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(email)
}

/// Reject blank values for fields the booking log cannot do without.
pub fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

/// Check a guest count against the bounds of the planning form.
pub fn validate_guest_count(value: u32) -> Result<u32, ValidationError> {
    if (MIN_GUESTS..=MAX_GUESTS).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::GuestCountOutOfRange {
            value,
            min: MIN_GUESTS,
            max: MAX_GUESTS,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        assert_eq!(validate_email(" host@example.com "), Ok("host@example.com"));
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("   "), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_require() {
        assert!(require("event type", "Wedding").is_ok());
        assert_eq!(
            require("event type", " "),
            Err(ValidationError::MissingField("event type"))
        );
    }

    #[test]
    fn test_guest_count_bounds() {
        assert_eq!(validate_guest_count(1), Ok(1));
        assert_eq!(validate_guest_count(10_000), Ok(10_000));
        assert!(validate_guest_count(0).is_err());
        assert!(validate_guest_count(10_001).is_err());
    }
}
