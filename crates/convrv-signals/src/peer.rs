//! Peer-population volatility spread statistics.

use convrv_core::types::BondRecord;
use serde::{Deserialize, Serialize};

use crate::metrics::vol_spread;

/// Minimum vega for a bond to enter the peer population.
///
/// Low-vega bonds carry almost no volatility exposure, so their implied
/// vol marks are too noisy to anchor cross-sectional statistics.
pub const VEGA_ELIGIBILITY_MIN: f64 = 0.25;

/// Cross-sectional vol spread statistics over an eligible bond population.
///
/// Computed once per batch and reused for every bond in that batch. The
/// statistics must always come from the *same* filtered collection the
/// per-bond metrics are computed over; recompute whenever the eligible set
/// changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PeerVolStats {
    /// Mean vol spread over the eligible population.
    pub mean_spread: Option<f64>,

    /// Population standard deviation of the vol spread.
    pub std_dev_spread: Option<f64>,

    /// Number of bonds in the eligible population.
    pub eligible_count: usize,
}

impl PeerVolStats {
    /// Computes spread statistics over a batch of bonds.
    ///
    /// Eligibility requires `vega > 0.25` and a computable vol spread
    /// (finite implied and historical vol). An empty eligible set yields
    /// `{None, None, 0}` rather than an error: consumers treat a missing
    /// mean/stddev as "no signal computable".
    ///
    /// The standard deviation is the population form (sum of squared
    /// deviations over `n`, not `n - 1`).
    #[must_use]
    pub fn compute(bonds: &[BondRecord]) -> Self {
        let spreads: Vec<f64> = bonds
            .iter()
            .filter(|b| b.vega().is_some_and(|v| v > VEGA_ELIGIBILITY_MIN))
            .filter_map(|b| vol_spread(b.implied_vol(), b.historical_vol()))
            .collect();

        if spreads.is_empty() {
            return Self::default();
        }

        let count = spreads.len();
        let mean = spreads.iter().sum::<f64>() / count as f64;
        let variance = spreads.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / count as f64;

        Self {
            mean_spread: Some(mean),
            std_dev_spread: Some(variance.sqrt()),
            eligible_count: count,
        }
    }

    /// Returns true if no eligible population was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.eligible_count == 0
    }
}
