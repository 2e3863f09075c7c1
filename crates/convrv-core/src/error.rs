//! Error types for the core data model.

use thiserror::Error;

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while validating bond records.
#[derive(Error, Debug, Clone)]
pub enum CoreError {
    /// A record is structurally invalid.
    #[error("Invalid bond record '{isin}': {reason}")]
    InvalidRecord {
        /// The record's ISIN (may be empty when the ISIN itself is the problem).
        isin: String,
        /// The reason the record is invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: String,
    },
}

impl CoreError {
    /// Creates an invalid record error.
    #[must_use]
    pub fn invalid_record(isin: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            isin: isin.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Validates the structural invariants of a bond record.
///
/// The data source contract requires a non-empty ISIN and a non-negative
/// issue amount; everything else may legitimately be unknown.
pub fn validate_record(record: &crate::types::BondRecord) -> CoreResult<()> {
    if record.isin.trim().is_empty() {
        return Err(CoreError::missing_field("isin"));
    }
    if !record.amount_issued.is_finite() || record.amount_issued < 0.0 {
        return Err(CoreError::invalid_record(
            &record.isin,
            format!("amountIssued must be non-negative, got {}", record.amount_issued),
        ));
    }
    Ok(())
}
