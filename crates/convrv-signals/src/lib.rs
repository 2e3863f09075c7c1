//! # Convrv Signals
//!
//! Volatility mispricing and relative-value signal engine for convertible
//! bonds.
//!
//! Per bond, the engine derives a volatility spread (implied minus
//! historical), a categorical valuation situation, a vega-scaled downside
//! risk, and — against the batch's peer population — a spread-to-average,
//! a z-score, and a categorical trading observation. It also provides the
//! time-series transforms (base-100 rebasing, YTD/MTD/3M performance) used
//! for portfolio history charting.
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: no I/O, no shared state, re-entrant
//! - **Batch-consistent statistics**: [`PeerVolStats`] is recomputed for
//!   exactly the collection being scored, never cached across batches
//! - **Degrade, never fault**: unknown inputs and degenerate denominators
//!   yield `None` / neutral output, not errors (a bond with unknown
//!   implied vol is never silently scored)
//!
//! ## Quick Start
//!
//! ```
//! use convrv_core::types::BondRecord;
//! use convrv_signals::enhance_all;
//!
//! let universe = vec![
//!     BondRecord::new("B1").with_vols(35.0, 30.0).with_vega(0.5),
//!     BondRecord::new("B2").with_vols(28.0, 30.0).with_vega(0.4),
//! ];
//!
//! let metrics = enhance_all(&universe);
//! assert_eq!(metrics[0].vol_spread, Some(5.0));
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod metrics;
pub mod peer;
pub mod timeseries;

pub use metrics::{
    downside_risk, enhance, enhance_all, observe, vol_spread, EnhancedMetrics, Observation,
    RelativeSituation,
};
pub use peer::{PeerVolStats, VEGA_ELIGIBILITY_MIN};
pub use timeseries::{
    mtd_performance, performance_since, periodic_performance, rebase_to_base100,
    reference_on_or_before, three_month_performance, ytd_performance,
};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::metrics::{
        downside_risk, enhance, enhance_all, vol_spread, EnhancedMetrics, Observation,
        RelativeSituation,
    };
    pub use crate::peer::{PeerVolStats, VEGA_ELIGIBILITY_MIN};
    pub use crate::timeseries::{
        mtd_performance, periodic_performance, rebase_to_base100, three_month_performance,
        ytd_performance,
    };
    pub use convrv_core::prelude::*;
}
