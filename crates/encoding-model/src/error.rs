//! Error types for encoding definitions.

use thiserror::Error;

/// Errors raised when an encoding definition violates a contract that
/// upstream validation should already have enforced.
#[derive(Debug, Error)]
pub enum EncodingError {
    /// A field type outside the closed set reached a classifier.
    #[error("Invalid field type \"{}\"", .field_type.as_deref().unwrap_or("undefined"))]
    InvalidFieldType { field_type: Option<String> },

    /// A channel token outside the closed channel enumeration.
    #[error("unknown encoding channel: {0}")]
    UnknownChannel(String),

    /// Malformed channel definition JSON.
    #[error("invalid channel definition: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EncodingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodingError::InvalidFieldType {
            field_type: Some("geojson".to_string()),
        };
        assert_eq!(err.to_string(), "Invalid field type \"geojson\"");

        let err = EncodingError::InvalidFieldType { field_type: None };
        assert_eq!(err.to_string(), "Invalid field type \"undefined\"");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: EncodingError = json_err.into();
        assert!(matches!(err, EncodingError::Json(_)));
    }
}
