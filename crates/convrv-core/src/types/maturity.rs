//! Residual maturity bucket classification.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Residual-maturity bucket, measured from an explicit evaluation date.
///
/// The bucket is a function of time *remaining*, so the same bond lands in
/// different buckets on different evaluation dates. Callers must pass the
/// evaluation date explicitly and must not cache the result beyond a single
/// evaluation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MaturityBucket {
    /// One year or less remaining
    UnderOneYear,
    /// More than 1 year, up to 2
    OneToTwo,
    /// More than 2 years, up to 5
    TwoToFive,
    /// More than 5 years
    OverFive,
}

impl MaturityBucket {
    /// Classifies a residual maturity in years (boundaries closed-right).
    #[must_use]
    pub fn from_years(years: f64) -> Self {
        if years <= 1.0 {
            Self::UnderOneYear
        } else if years <= 2.0 {
            Self::OneToTwo
        } else if years <= 5.0 {
            Self::TwoToFive
        } else {
            Self::OverFive
        }
    }

    /// Classifies by maturity date as of an evaluation date.
    ///
    /// Residual maturity is day-count based (`days / 365`), not
    /// calendar-aware year counting. Already-matured bonds fall in the
    /// shortest bucket.
    #[must_use]
    pub fn from_dates(maturity: NaiveDate, as_of: NaiveDate) -> Self {
        let years = (maturity - as_of).num_days() as f64 / 365.0;
        Self::from_years(years)
    }

    /// Returns the label for this bucket.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnderOneYear => "<1Y",
            Self::OneToTwo => "]1,2]",
            Self::TwoToFive => "]2,5]",
            Self::OverFive => ">5Y",
        }
    }

    /// Returns all buckets in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::UnderOneYear,
            Self::OneToTwo,
            Self::TwoToFive,
            Self::OverFive,
        ]
    }
}

impl std::fmt::Display for MaturityBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
