//! Market capitalization bucket classification.

use serde::{Deserialize, Serialize};

/// Upper bound (exclusive) of the small-cap bucket, in EUR.
pub const SMALL_CAP_MAX: f64 = 2.5e9;

/// Upper bound (exclusive) of the mid-cap bucket, in EUR.
pub const MID_CAP_MAX: f64 = 6.9e9;

/// Market-cap size bucket, keyed off the issue amount in EUR.
///
/// Boundaries are closed on the upper tier: exactly 2.5B is mid cap,
/// exactly 6.9B is large cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MarketCapBucket {
    /// Under 2.5B EUR
    SmallCap,
    /// 2.5B to 6.9B EUR
    MidCap,
    /// 6.9B EUR and above
    LargeCap,
}

impl MarketCapBucket {
    /// Classifies an issue amount (EUR) into a size bucket.
    #[must_use]
    pub fn from_amount(amount_eur: f64) -> Self {
        if amount_eur < SMALL_CAP_MAX {
            Self::SmallCap
        } else if amount_eur < MID_CAP_MAX {
            Self::MidCap
        } else {
            Self::LargeCap
        }
    }

    /// Returns the label for this bucket.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::SmallCap => "Small Cap",
            Self::MidCap => "Mid Cap",
            Self::LargeCap => "Large Cap",
        }
    }

    /// Returns all buckets in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::SmallCap, Self::MidCap, Self::LargeCap]
    }
}

impl std::fmt::Display for MarketCapBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_amount() {
        assert_eq!(
            MarketCapBucket::from_amount(1_000_000_000.0),
            MarketCapBucket::SmallCap
        );
        assert_eq!(
            MarketCapBucket::from_amount(3_000_000_000.0),
            MarketCapBucket::MidCap
        );
        assert_eq!(
            MarketCapBucket::from_amount(10_000_000_000.0),
            MarketCapBucket::LargeCap
        );
    }

    #[test]
    fn test_boundaries_closed_on_upper_tier() {
        assert_eq!(
            MarketCapBucket::from_amount(2_500_000_000.0),
            MarketCapBucket::MidCap
        );
        assert_eq!(
            MarketCapBucket::from_amount(6_900_000_000.0),
            MarketCapBucket::LargeCap
        );
    }

    #[test]
    fn test_zero_amount() {
        assert_eq!(MarketCapBucket::from_amount(0.0), MarketCapBucket::SmallCap);
    }

    #[test]
    fn test_labels() {
        assert_eq!(MarketCapBucket::SmallCap.label(), "Small Cap");
        assert_eq!(MarketCapBucket::MidCap.label(), "Mid Cap");
        assert_eq!(MarketCapBucket::LargeCap.label(), "Large Cap");
    }
}
