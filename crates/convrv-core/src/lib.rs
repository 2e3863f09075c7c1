//! # Convrv Core
//!
//! Data model and classification utilities for convertible bond analytics.
//!
//! This crate provides the shared building blocks the rest of the workspace
//! computes over:
//!
//! - [`types::BondRecord`] / [`types::PricePoint`]: the instrument and
//!   price-history data model
//! - [`types::RatingTier`] / [`types::standardize_rating`]: S&P and Moody's
//!   rating normalization
//! - [`types::RiskBucket`]: IG / HY / NR credit-risk classification
//! - [`types::MarketCapBucket`]: issue-size bucketing
//! - [`types::MaturityBucket`]: residual-maturity bucketing against an
//!   explicit evaluation date
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: every classification is a stateless function of
//!   its inputs; derived values are recomputed on each read, never cached
//! - **Explicit clocks**: time-dependent classifications take the
//!   evaluation date as a parameter
//! - **Null propagation**: unknown numeric fields stay unknown (`None`),
//!   they are never coerced to zero

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod types;

pub use error::{validate_record, CoreError, CoreResult};

pub use types::{
    numeric, standardize_rating, BondRecord, MarketCapBucket, MaturityBucket, PricePoint,
    RatingTier, RiskBucket,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{CoreError, CoreResult};
    pub use crate::types::{
        numeric, standardize_rating, BondRecord, MarketCapBucket, MaturityBucket, PricePoint,
        RatingTier, RiskBucket,
    };
    pub use chrono::NaiveDate;
}
