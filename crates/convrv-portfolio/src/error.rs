//! Error types for portfolio queries and performance series.

use thiserror::Error;

/// Result type for portfolio operations.
pub type PortfolioResult<T> = Result<T, PortfolioError>;

/// Errors that can occur during portfolio operations.
#[derive(Error, Debug, Clone)]
pub enum PortfolioError {
    /// No bonds were selected.
    #[error("Portfolio selection is empty")]
    EmptyPortfolio,

    /// No price history exists for a selected bond.
    #[error("No price history for '{isin}'")]
    NoHistory {
        /// The ISIN without history.
        isin: String,
    },

    /// Invalid pagination parameters.
    #[error("Invalid page request: page {page}, page size {page_size}")]
    InvalidPage {
        /// The requested page (1-based).
        page: usize,
        /// The requested page size.
        page_size: usize,
    },
}

impl PortfolioError {
    /// Creates a no-history error.
    #[must_use]
    pub fn no_history(isin: impl Into<String>) -> Self {
        Self::NoHistory { isin: isin.into() }
    }
}
