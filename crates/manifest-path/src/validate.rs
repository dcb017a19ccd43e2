//! Validation functions for manifest paths.
//!
//! The patch engine itself never rejects a path. These checks are for callers
//! that want to vet patch files before applying them.

use thiserror::Error;

use crate::parse::scan;
use crate::types::Path;

/// Maximum allowed path depth.
pub const MAX_PATH_LENGTH: usize = 256;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("EMPTY_PATH")]
    EmptyPath,
    #[error("EMPTY_SEGMENT at step {0}")]
    EmptySegment(usize),
    #[error("PATH_TOO_LONG")]
    PathTooLong,
    #[error("UNTERMINATED_BRACKET at byte {0}")]
    UnterminatedBracket(usize),
}

/// Validate a path (array of segments).
///
/// # Errors
///
/// Returns an error if:
/// - The path has no segments
/// - Any segment is the empty string
/// - The path exceeds the maximum depth (256 segments)
///
/// # Example
///
/// ```
/// use manifest_path::validate_path;
///
/// validate_path(&["DestinyFooDefinition".to_string(), "123".to_string()]).unwrap();
/// validate_path(&[]).unwrap_err();
/// validate_path(&["a".to_string(), String::new()]).unwrap_err();
/// ```
pub fn validate_path(path: &[String]) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(ValidationError::EmptyPath);
    }
    if path.len() > MAX_PATH_LENGTH {
        return Err(ValidationError::PathTooLong);
    }
    if let Some(step) = path.iter().position(|s| s.is_empty()) {
        return Err(ValidationError::EmptySegment(step));
    }
    Ok(())
}

/// Parse and validate a delimited path string, returning its segments.
///
/// Unlike [`crate::parse_path`], an unterminated bracket is an error.
///
/// # Example
///
/// ```
/// use manifest_path::{validate_path_str, ValidationError};
///
/// assert_eq!(validate_path_str("a.b", '.').unwrap(), vec!["a", "b"]);
/// assert_eq!(validate_path_str("a..b", '.'), Err(ValidationError::EmptySegment(1)));
/// assert_eq!(validate_path_str("a[0", '.'), Err(ValidationError::UnterminatedBracket(1)));
/// ```
pub fn validate_path_str(path: &str, delimiter: char) -> Result<Path, ValidationError> {
    let segments = scan(path, delimiter, true)?;
    validate_path(&segments)?;
    Ok(segments)
}
