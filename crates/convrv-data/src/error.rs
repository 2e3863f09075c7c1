//! Error types for fixture loading.

use thiserror::Error;

/// Result type for data-store operations.
pub type DataResult<T> = Result<T, DataError>;

/// Errors that can occur while loading fixtures.
#[derive(Error, Debug)]
pub enum DataError {
    /// A fixture file could not be read.
    #[error("failed to read fixture: {0}")]
    Io(#[from] std::io::Error),

    /// A fixture did not parse as the expected JSON shape.
    #[error("failed to parse fixture: {0}")]
    Parse(#[from] serde_json::Error),

    /// A record failed structural validation.
    #[error(transparent)]
    InvalidRecord(#[from] convrv_core::CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_conversion() {
        let err: DataError = serde_json::from_str::<Vec<i32>>("not json").unwrap_err().into();
        assert!(err.to_string().contains("parse"));
    }
}
