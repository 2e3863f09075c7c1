//! Per-bond volatility mispricing metrics.
//!
//! Four chained pure steps run per bond: vol spread, valuation situation,
//! downside risk, and (against a batch's [`PeerVolStats`]) the peer-relative
//! spread, z-score, and trading observation. Unknown inputs propagate as
//! `None` through every step; a bond with unknown implied vol is never
//! silently scored.

use convrv_core::types::{numeric, BondRecord};
use serde::{Deserialize, Serialize};

use crate::peer::PeerVolStats;

/// Situation boundary: spreads below this are underpriced.
const FAIR_VALUE_MIN: f64 = 0.0;
/// Situation boundary: fair value ends (exclusive) here.
const OVERPRICED_MIN: f64 = 4.0;
/// Situation boundary: overpriced ends (exclusive) here.
const EXPENSIVE_MIN: f64 = 8.0;

/// Peer-relative spread magnitude required before any observation fires.
const OBSERVATION_SPREAD_MIN: f64 = 2.0;
/// Z-score magnitude required before any observation fires.
const OBSERVATION_Z_MIN: f64 = 1.0;

/// Implied minus historical volatility, in percentage points.
///
/// Unknown or non-finite inputs yield `None`; the spread is never clamped.
#[must_use]
pub fn vol_spread(implied: Option<f64>, historical: Option<f64>) -> Option<f64> {
    match (numeric(implied), numeric(historical)) {
        (Some(i), Some(h)) => Some(i - h),
        _ => None,
    }
}

/// Categorical valuation of a bond's vol spread against its own history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RelativeSituation {
    /// Implied below historical (negative spread)
    Underpriced,
    /// Spread in [0, 4)
    FairValue,
    /// Spread in [4, 8)
    Overpriced,
    /// Spread of 8 or more
    Expensive,
}

impl RelativeSituation {
    /// Maps a vol spread to its valuation category.
    #[must_use]
    pub fn from_spread(spread: f64) -> Self {
        if spread < FAIR_VALUE_MIN {
            Self::Underpriced
        } else if spread < OVERPRICED_MIN {
            Self::FairValue
        } else if spread < EXPENSIVE_MIN {
            Self::Overpriced
        } else {
            Self::Expensive
        }
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underpriced => "underpriced",
            Self::FairValue => "fair value",
            Self::Overpriced => "overpriced",
            Self::Expensive => "expensive",
        }
    }

    /// Returns true for the cheap side of the scale.
    #[must_use]
    pub fn is_cheap_or_fair(&self) -> bool {
        matches!(self, Self::Underpriced | Self::FairValue)
    }

    /// Returns true for the rich side of the scale.
    #[must_use]
    pub fn is_rich(&self) -> bool {
        matches!(self, Self::Overpriced | Self::Expensive)
    }
}

impl std::fmt::Display for RelativeSituation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Vega-scaled correction risk for a bond priced rich to its own history.
///
/// Defined only for a strictly positive vol spread: a cheap bond has no
/// vol-richness correction to suffer, so the result is `None` rather than
/// a negative number.
#[must_use]
pub fn downside_risk(vol_spread: Option<f64>, vega: Option<f64>) -> Option<f64> {
    match (numeric(vol_spread), numeric(vega)) {
        (Some(s), Some(v)) if s > 0.0 => Some(s * v),
        _ => None,
    }
}

/// Categorical trading signal on a bond's peer-relative vol spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Observation {
    /// Cheap outright and cheap to peers, beyond the z-score threshold.
    Rebound,
    /// Rich outright and rich to peers, beyond the z-score threshold.
    Downside,
}

impl Observation {
    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rebound => "High probability of a rebound",
            Self::Downside => "High probability of downside",
        }
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Derives the trading observation, if any.
///
/// Only evaluated when the peer-relative spread exceeds 2 points in
/// magnitude. The sign of the peer-relative spread must agree with the
/// outright valuation category (a bond can be individually underpriced yet
/// show no rebound signal if it is not also cheap *to peers*), and the
/// z-score must exceed 1 in magnitude.
#[must_use]
pub fn observe(
    situation: Option<RelativeSituation>,
    spread_to_average: Option<f64>,
    z_score: Option<f64>,
) -> Option<Observation> {
    let situation = situation?;
    let s2a = spread_to_average?;
    let z = z_score?;

    if s2a.abs() <= OBSERVATION_SPREAD_MIN || z.abs() <= OBSERVATION_Z_MIN {
        return None;
    }

    if situation.is_cheap_or_fair() && s2a < 0.0 {
        Some(Observation::Rebound)
    } else if situation.is_rich() && s2a > 0.0 {
        Some(Observation::Downside)
    } else {
        None
    }
}

/// All derived mispricing metrics for one bond.
///
/// Every field degrades to `None` when its inputs are unknown; nothing in
/// this struct is ever a fault. The two `*_label` accessors give the
/// empty-string presentation form the display layer consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnhancedMetrics {
    /// ISIN of the bond these metrics belong to.
    pub isin: String,

    /// Implied minus historical volatility.
    pub vol_spread: Option<f64>,

    /// Valuation category of the vol spread.
    pub relative_situation: Option<RelativeSituation>,

    /// Vega-scaled correction risk (positive spreads only).
    pub downside_risk: Option<f64>,

    /// Vol spread relative to the peer-population mean.
    pub spread_to_average: Option<f64>,

    /// Peer-relative spread in population standard deviations.
    pub z_score: Option<f64>,

    /// Trading observation, when the signal conditions are met.
    pub observation: Option<Observation>,
}

impl EnhancedMetrics {
    /// Situation label, empty when the spread is unknown.
    #[must_use]
    pub fn situation_label(&self) -> &'static str {
        self.relative_situation.map_or("", |s| s.label())
    }

    /// Observation label, empty when no signal fires.
    #[must_use]
    pub fn observation_label(&self) -> &'static str {
        self.observation.map_or("", |o| o.label())
    }
}

/// Computes all derived metrics for one bond against a batch's peer stats.
///
/// The statistics must come from the same batch the bond belongs to; see
/// [`enhance_all`] for the batch entry point that guarantees this.
#[must_use]
pub fn enhance(bond: &BondRecord, stats: &PeerVolStats) -> EnhancedMetrics {
    let spread = vol_spread(bond.implied_vol(), bond.historical_vol());
    let situation = spread.map(RelativeSituation::from_spread);
    let risk = downside_risk(spread, bond.vega());

    let spread_to_average = match (spread, stats.mean_spread) {
        (Some(s), Some(mean)) => Some(s - mean),
        _ => None,
    };

    let z_score = match (spread_to_average, stats.std_dev_spread) {
        (Some(s2a), Some(sd)) if sd != 0.0 => Some(s2a / sd),
        _ => None,
    };

    let observation = observe(situation, spread_to_average, z_score);

    EnhancedMetrics {
        isin: bond.isin.clone(),
        vol_spread: spread,
        relative_situation: situation,
        downside_risk: risk,
        spread_to_average,
        z_score,
        observation,
    }
}

/// Computes metrics for every bond in a batch.
///
/// Peer statistics are recomputed for exactly this batch, so metrics are
/// always consistent with the collection they were derived from. Callers
/// re-filtering the universe call this again on the filtered slice.
#[must_use]
pub fn enhance_all(bonds: &[BondRecord]) -> Vec<EnhancedMetrics> {
    let stats = PeerVolStats::compute(bonds);
    bonds.iter().map(|b| enhance(b, &stats)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_vol_spread() {
        assert_relative_eq!(vol_spread(Some(35.0), Some(30.0)).unwrap(), 5.0);
        assert_relative_eq!(vol_spread(Some(25.0), Some(30.0)).unwrap(), -5.0);
        assert_eq!(vol_spread(None, Some(30.0)), None);
        assert_eq!(vol_spread(Some(35.0), None), None);
        assert_eq!(vol_spread(Some(f64::NAN), Some(30.0)), None);
    }

    #[test]
    fn test_relative_situation_boundaries() {
        assert_eq!(
            RelativeSituation::from_spread(-0.1),
            RelativeSituation::Underpriced
        );
        assert_eq!(
            RelativeSituation::from_spread(0.0),
            RelativeSituation::FairValue
        );
        assert_eq!(
            RelativeSituation::from_spread(3.99),
            RelativeSituation::FairValue
        );
        assert_eq!(
            RelativeSituation::from_spread(4.0),
            RelativeSituation::Overpriced
        );
        assert_eq!(
            RelativeSituation::from_spread(5.0),
            RelativeSituation::Overpriced
        );
        assert_eq!(
            RelativeSituation::from_spread(8.0),
            RelativeSituation::Expensive
        );
        assert_eq!(
            RelativeSituation::from_spread(10.0),
            RelativeSituation::Expensive
        );
    }

    #[test]
    fn test_downside_risk() {
        assert_relative_eq!(downside_risk(Some(5.0), Some(0.3)).unwrap(), 1.5);
        assert_eq!(downside_risk(Some(-5.0), Some(0.3)), None);
        assert_eq!(downside_risk(Some(0.0), Some(0.3)), None);
        assert_eq!(downside_risk(None, Some(0.3)), None);
        assert_eq!(downside_risk(Some(5.0), None), None);
    }

    #[test]
    fn test_observe_requires_magnitude_and_sign_agreement() {
        // Cheap to peers, cheap outright, significant: rebound.
        assert_eq!(
            observe(
                Some(RelativeSituation::Underpriced),
                Some(-3.0),
                Some(-1.5)
            ),
            Some(Observation::Rebound)
        );
        assert_eq!(
            observe(Some(RelativeSituation::FairValue), Some(-2.5), Some(-1.2)),
            Some(Observation::Rebound)
        );

        // Rich to peers, rich outright, significant: downside.
        assert_eq!(
            observe(Some(RelativeSituation::Expensive), Some(3.0), Some(1.5)),
            Some(Observation::Downside)
        );
        assert_eq!(
            observe(Some(RelativeSituation::Overpriced), Some(2.5), Some(1.2)),
            Some(Observation::Downside)
        );

        // |spread to average| at or below 2: nothing fires.
        assert_eq!(
            observe(Some(RelativeSituation::Expensive), Some(2.0), Some(5.0)),
            None
        );

        // |z| at or below 1: nothing fires.
        assert_eq!(
            observe(Some(RelativeSituation::Expensive), Some(3.0), Some(1.0)),
            None
        );

        // Underpriced outright but rich to peers: sign disagreement, no signal.
        assert_eq!(
            observe(Some(RelativeSituation::Underpriced), Some(3.0), Some(1.5)),
            None
        );

        // Missing z-score (null stddev upstream): no signal.
        assert_eq!(
            observe(Some(RelativeSituation::Expensive), Some(3.0), None),
            None
        );
    }

    #[test]
    fn test_enhance_unknown_vol_degrades_to_none() {
        let bond = convrv_core::types::BondRecord::new("B1").with_vega(0.5);
        let stats = PeerVolStats {
            mean_spread: Some(2.0),
            std_dev_spread: Some(1.0),
            eligible_count: 10,
        };

        let m = enhance(&bond, &stats);
        assert_eq!(m.vol_spread, None);
        assert_eq!(m.relative_situation, None);
        assert_eq!(m.downside_risk, None);
        assert_eq!(m.spread_to_average, None);
        assert_eq!(m.z_score, None);
        assert_eq!(m.observation, None);
        assert_eq!(m.situation_label(), "");
        assert_eq!(m.observation_label(), "");
    }

    #[test]
    fn test_enhance_zero_std_dev_yields_null_z() {
        let bond = convrv_core::types::BondRecord::new("B1")
            .with_vols(35.0, 30.0)
            .with_vega(0.5);
        let stats = PeerVolStats {
            mean_spread: Some(2.0),
            std_dev_spread: Some(0.0),
            eligible_count: 3,
        };

        let m = enhance(&bond, &stats);
        assert_relative_eq!(m.spread_to_average.unwrap(), 3.0);
        assert_eq!(m.z_score, None);
        assert_eq!(m.observation, None);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RelativeSituation::Overpriced.label(), "overpriced");
        assert_eq!(Observation::Rebound.label(), "High probability of a rebound");
        assert_eq!(
            Observation::Downside.label(),
            "High probability of downside"
        );
    }
}
