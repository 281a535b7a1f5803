use crate::error::DomainError;

/// Upper bound for titles and names, in characters.
pub const MAX_TITLE_LENGTH: usize = 256;

/// Upper bound for category slugs.
pub const MAX_SLUG_LENGTH: usize = 64;

/// Upper bound for usernames and personal names.
pub const MAX_NAME_LENGTH: usize = 150;

/// Field-level checks run before an entity is stored.
pub trait Validate {
    fn validate(&self) -> Result<(), DomainError>;
}

/// Check that a title-like field is present and fits the column.
pub fn validate_title(field: &str, value: &str) -> Result<(), DomainError> {
    validate_required(field, value, MAX_TITLE_LENGTH)
}

/// Non-blank and at most `max` characters.
pub fn validate_required(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    validate_max_length(field, value, max)
}

/// At most `max` characters; empty is fine.
pub fn validate_max_length(field: &str, value: &str, max: usize) -> Result<(), DomainError> {
    let length = value.chars().count();
    if length > max {
        return Err(DomainError::Validation(format!(
            "{field} must be at most {max} characters (got {length})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_bounds() {
        assert!(validate_title("title", "Hello").is_ok());
        assert!(validate_title("title", &"я".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title("title", &"я".repeat(MAX_TITLE_LENGTH + 1)).is_err());
        assert!(validate_title("title", "   ").is_err());
    }

    #[test]
    fn test_optional_field_may_be_empty() {
        assert!(validate_max_length("first_name", "", MAX_NAME_LENGTH).is_ok());
        assert!(validate_max_length("first_name", &"a".repeat(MAX_NAME_LENGTH + 1), MAX_NAME_LENGTH).is_err());
    }
}
