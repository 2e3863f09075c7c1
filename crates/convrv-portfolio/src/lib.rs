//! # Convrv Portfolio
//!
//! Aggregation, cross-tabulation and query helpers over a convertible bond
//! collection, plus the rebased portfolio performance series.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no caching; every query takes the bond
//!   collection and the evaluation date explicitly
//! - **Current labels only**: bucket labels are recomputed at query time
//!   because maturity buckets drift with the evaluation date
//!
//! ## Quick Start
//!
//! ```
//! use chrono::NaiveDate;
//! use convrv_core::types::BondRecord;
//! use convrv_portfolio::bucketing::{bucket_by, Dimension};
//!
//! let bonds = vec![
//!     BondRecord::new("B1").with_sector("Technology").with_amount_issued(1.0e9),
//!     BondRecord::new("B2").with_sector("Technology").with_amount_issued(2.0e9),
//! ];
//!
//! let as_of = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
//! let by_sector = bucket_by(&bonds, Dimension::Sector, |b| b.delta, as_of);
//! assert_eq!(by_sector["Technology"].count, 2);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod bucketing;
pub mod error;
pub mod performance;
pub mod query;

pub use error::{PortfolioError, PortfolioResult};

pub use bucketing::{bucket_by, cross_tab, BucketMetrics, CrossTab, Dimension};
pub use performance::{
    performance_summary, portfolio_price_path, rebased_portfolio_series, PerformanceSummary,
};
pub use query::{paginate, sort_bonds, BondFilter, Page, SortDirection, SortKey};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bucketing::{bucket_by, cross_tab, BucketMetrics, CrossTab, Dimension};
    pub use crate::error::{PortfolioError, PortfolioResult};
    pub use crate::performance::{
        performance_summary, portfolio_price_path, rebased_portfolio_series, PerformanceSummary,
    };
    pub use crate::query::{paginate, sort_bonds, BondFilter, Page, SortDirection, SortKey};
    pub use convrv_core::prelude::*;
}
