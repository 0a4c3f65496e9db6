use std::borrow::Cow;
use validator::ValidationError;

/// Custom validator rejecting empty or whitespace-only values.
///
/// - Valid: "Alice", "  Bob  "
/// - Invalid: "", "   ", "\t\n"
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Attach a client-facing message to a validation error
pub fn with_message(error: ValidationError, message: &'static str) -> ValidationError {
    error.with_message(Cow::Borrowed(message))
}
