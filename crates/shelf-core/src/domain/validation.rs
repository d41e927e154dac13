use crate::domain::error::DomainError;

/// Centralized domain validation.
///
/// The entity and the use cases both call through here so the rule has a
/// single definition.
pub struct DomainValidator;

impl DomainValidator {
    /// A category name is valid when it is not the empty string.
    ///
    /// Whitespace is not trimmed: `" "` is accepted.
    pub fn validate_name(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_only_the_empty_string() {
        assert_eq!(DomainValidator::validate_name(""), Err(DomainError::EmptyName));
        assert!(DomainValidator::validate_name(" ").is_ok());
        assert!(DomainValidator::validate_name("Books").is_ok());
    }
}
