//! Centralized validation helpers.

/// Longest sample or gene name accepted as a single path component
pub const MAX_IDENTIFIER_LENGTH: usize = 255;

/// Identifier validation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Empty {0} name")]
    Empty(&'static str),
    #[error("{0} name too long: exceeds {MAX_IDENTIFIER_LENGTH} characters")]
    TooLong(&'static str),
    #[error("Invalid {what} name '{name}': must be a single path component")]
    NotAPathComponent { what: &'static str, name: String },
    #[error("Invalid {what} name '{name}': contains control characters")]
    ControlCharacters { what: &'static str, name: String },
}

/// Check that a sample or gene name can be joined into a path as one component.
///
/// `what` names the identifier in error messages ("sample", "gene").
///
/// # Errors
///
/// Returns `ValidationError::Empty` for an empty name, `ValidationError::TooLong`
/// past [`MAX_IDENTIFIER_LENGTH`], `ValidationError::NotAPathComponent` for `.`,
/// `..`, or names containing `/` or `\`, and `ValidationError::ControlCharacters`
/// for NUL and other control characters.
///
/// # Examples
///
/// ```
/// use retrieve_sequences::utils::validation::validate_identifier;
///
/// assert!(validate_identifier("sample", "Artocarpus_altilis").is_ok());
/// assert!(validate_identifier("sample", "../etc").is_err());
/// assert!(validate_identifier("gene", "").is_err());
/// ```
pub fn validate_identifier(what: &'static str, name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Empty(what));
    }

    if name.len() > MAX_IDENTIFIER_LENGTH {
        return Err(ValidationError::TooLong(what));
    }

    if name == "." || name == ".." || name.contains('/') || name.contains('\\') {
        return Err(ValidationError::NotAPathComponent {
            what,
            name: name.to_string(),
        });
    }

    if name.chars().any(char::is_control) {
        return Err(ValidationError::ControlCharacters {
            what,
            name: name.to_string(),
        });
    }

    Ok(())
}
