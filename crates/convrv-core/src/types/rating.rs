//! Credit rating normalization and risk bucketing.
//!
//! This module folds vendor rating strings down to letter tiers:
//!
//! - [`RatingTier`]: Normalized letter tier (AAA to C, plus NR)
//! - [`RiskBucket`]: IG / HY / NR credit-risk grouping
//! - [`standardize_rating`]: String-in/string-out normalizer with the
//!   legacy echo fallback for unrecognized input

use serde::{Deserialize, Serialize};

/// Normalized rating letter tier (agency-agnostic, notches discarded).
///
/// Both S&P-style notched ratings (`"A+"`, `"BBB-"`) and Moody's-style
/// notched ratings (`"A1"`, `"Baa2"`) fold down to the same tier.
///
/// # Examples
///
/// ```
/// use convrv_core::types::RatingTier;
///
/// let tier = RatingTier::parse("Baa3").unwrap();
/// assert_eq!(tier, RatingTier::BBB);
/// assert_eq!(tier.label(), "BBB");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
pub enum RatingTier {
    /// Highest quality
    AAA,
    /// AA+, AA, AA- / Aa1..Aa3
    AA,
    /// A+, A, A- / A1..A3
    A,
    /// BBB+, BBB, BBB- / Baa1..Baa3 (lowest investment grade)
    BBB,
    /// BB+, BB, BB- / Ba1..Ba3
    BB,
    /// B+, B, B- / B1..B3
    B,
    /// CCC+, CCC, CCC- / Caa1..Caa3
    CCC,
    /// CC / Ca
    CC,
    /// C
    C,
    /// Not rated
    #[default]
    NotRated,
}

impl RatingTier {
    /// Parses a rating from S&P or Moody's notched notation.
    ///
    /// The match is strictly case-sensitive on the exact vendor literals
    /// (`"Baa2"` parses, `"BAA2"` does not). Bare tier names are valid
    /// S&P no-notch forms, so parsing is idempotent over its own output.
    /// Returns `None` for anything outside the table; callers that need
    /// the legacy echo behavior use [`standardize_rating`] instead.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "AAA+" | "AAA" | "AAA-" | "Aaa" | "Aaa1" | "Aaa2" | "Aaa3" => Some(Self::AAA),
            "AA+" | "AA" | "AA-" | "Aa1" | "Aa2" | "Aa3" => Some(Self::AA),
            "A+" | "A" | "A-" | "A1" | "A2" | "A3" => Some(Self::A),
            "BBB+" | "BBB" | "BBB-" | "Baa1" | "Baa2" | "Baa3" => Some(Self::BBB),
            "BB+" | "BB" | "BB-" | "Ba1" | "Ba2" | "Ba3" => Some(Self::BB),
            "B+" | "B" | "B-" | "B1" | "B2" | "B3" => Some(Self::B),
            "CCC+" | "CCC" | "CCC-" | "Caa1" | "Caa2" | "Caa3" => Some(Self::CCC),
            "CC+" | "CC" | "CC-" | "Ca" | "Ca1" | "Ca2" | "Ca3" => Some(Self::CC),
            "C+" | "C" | "C-" | "C1" | "C2" | "C3" => Some(Self::C),
            "NR" | "Not Rated" => Some(Self::NotRated),
            _ => None,
        }
    }

    /// Returns the tier label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::AAA => "AAA",
            Self::AA => "AA",
            Self::A => "A",
            Self::BBB => "BBB",
            Self::BB => "BB",
            Self::B => "B",
            Self::CCC => "CCC",
            Self::CC => "CC",
            Self::C => "C",
            Self::NotRated => "NR",
        }
    }

    /// Returns the credit risk bucket for this tier.
    #[must_use]
    pub fn risk_bucket(&self) -> RiskBucket {
        match self {
            Self::NotRated => RiskBucket::NotRated,
            Self::AAA | Self::AA | Self::A | Self::BBB => RiskBucket::InvestmentGrade,
            Self::BB | Self::B | Self::CCC | Self::CC | Self::C => RiskBucket::HighYield,
        }
    }

    /// Returns all tiers in order of credit quality.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[
            Self::AAA,
            Self::AA,
            Self::A,
            Self::BBB,
            Self::BB,
            Self::B,
            Self::CCC,
            Self::CC,
            Self::C,
            Self::NotRated,
        ]
    }
}

impl std::fmt::Display for RatingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Normalizes a raw vendor rating string to its letter tier label.
///
/// Recognized S&P/Moody's notched forms map to the bare tier name
/// (`"A+"` -> `"A"`, `"Baa3"` -> `"BBB"`). Unrecognized input is logged
/// and echoed back trimmed-but-unchanged: downstream classifiers then see
/// the raw string, which is the historical contract of this engine and is
/// preserved as-is. [`RatingTier::parse`] is the typed alternative that
/// surfaces the unrecognized case instead of hiding it.
#[must_use]
pub fn standardize_rating(raw: &str) -> String {
    let trimmed = raw.trim();
    match RatingTier::parse(trimmed) {
        Some(tier) => tier.label().to_string(),
        None => {
            log::warn!("unrecognized rating format: '{trimmed}'");
            trimmed.to_string()
        }
    }
}

/// Credit risk bucket (Investment Grade / High Yield / Not Rated).
///
/// # Examples
///
/// ```
/// use convrv_core::types::RiskBucket;
///
/// assert_eq!(RiskBucket::from_label("BBB"), RiskBucket::InvestmentGrade);
/// assert_eq!(RiskBucket::from_label("BB"), RiskBucket::HighYield);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskBucket {
    /// AAA through BBB
    InvestmentGrade,
    /// BB through C
    HighYield,
    /// Not rated
    NotRated,
}

impl RiskBucket {
    /// Classifies a standardized rating label into a risk bucket.
    ///
    /// Operates on strings rather than [`RatingTier`] because the
    /// standardizer's echo fallback means arbitrary vendor strings can
    /// reach this point: `NR` prefix wins, then any `A*` tier or exactly
    /// `BBB` is investment grade, everything else is high yield.
    #[must_use]
    pub fn from_label(standardized: &str) -> Self {
        if standardized.starts_with("NR") {
            Self::NotRated
        } else if standardized.starts_with('A') || standardized == "BBB" {
            Self::InvestmentGrade
        } else {
            Self::HighYield
        }
    }

    /// Returns the bucket label.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::InvestmentGrade => "IG",
            Self::HighYield => "HY",
            Self::NotRated => "NR",
        }
    }

    /// Returns all buckets in order.
    #[must_use]
    pub fn all() -> &'static [Self] {
        &[Self::InvestmentGrade, Self::HighYield, Self::NotRated]
    }
}

impl std::fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sp_notches() {
        assert_eq!(RatingTier::parse("A+"), Some(RatingTier::A));
        assert_eq!(RatingTier::parse("A"), Some(RatingTier::A));
        assert_eq!(RatingTier::parse("A-"), Some(RatingTier::A));
        assert_eq!(RatingTier::parse("BBB-"), Some(RatingTier::BBB));
        assert_eq!(RatingTier::parse("CCC+"), Some(RatingTier::CCC));
    }

    #[test]
    fn test_parse_moodys_notches() {
        assert_eq!(RatingTier::parse("Aaa"), Some(RatingTier::AAA));
        assert_eq!(RatingTier::parse("Aa1"), Some(RatingTier::AA));
        assert_eq!(RatingTier::parse("Baa3"), Some(RatingTier::BBB));
        assert_eq!(RatingTier::parse("Ba1"), Some(RatingTier::BB));
        assert_eq!(RatingTier::parse("Caa2"), Some(RatingTier::CCC));
        assert_eq!(RatingTier::parse("Ca"), Some(RatingTier::CC));
    }

    #[test]
    fn test_parse_edge_tier_notches() {
        assert_eq!(RatingTier::parse("AAA+"), Some(RatingTier::AAA));
        assert_eq!(RatingTier::parse("AAA-"), Some(RatingTier::AAA));
        assert_eq!(RatingTier::parse("Aaa2"), Some(RatingTier::AAA));
        assert_eq!(RatingTier::parse("CC+"), Some(RatingTier::CC));
        assert_eq!(RatingTier::parse("CC-"), Some(RatingTier::CC));
        assert_eq!(RatingTier::parse("Ca2"), Some(RatingTier::CC));
        assert_eq!(RatingTier::parse("C+"), Some(RatingTier::C));
        assert_eq!(RatingTier::parse("C-"), Some(RatingTier::C));
        assert_eq!(RatingTier::parse("C1"), Some(RatingTier::C));
        assert_eq!(standardize_rating("AAA+"), "AAA");
        assert_eq!(standardize_rating("Ca3"), "CC");
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert_eq!(RatingTier::parse("BAA2"), None);
        assert_eq!(RatingTier::parse("aaa"), None);
        assert_eq!(RatingTier::parse("bbb+"), None);
    }

    #[test]
    fn test_parse_not_rated() {
        assert_eq!(RatingTier::parse("NR"), Some(RatingTier::NotRated));
        assert_eq!(RatingTier::parse("Not Rated"), Some(RatingTier::NotRated));
    }

    #[test]
    fn test_standardize_recognized() {
        assert_eq!(standardize_rating("A+"), "A");
        assert_eq!(standardize_rating("Baa3"), "BBB");
        assert_eq!(standardize_rating("Ba1"), "BB");
        assert_eq!(standardize_rating("  AA- "), "AA");
        assert_eq!(standardize_rating("NR"), "NR");
    }

    #[test]
    fn test_standardize_echoes_unrecognized() {
        assert_eq!(standardize_rating("WR"), "WR");
        assert_eq!(standardize_rating(" BAA2 "), "BAA2");
        assert_eq!(standardize_rating(""), "");
    }

    #[test]
    fn test_standardize_idempotent() {
        for tier in RatingTier::all() {
            let once = standardize_rating(tier.label());
            assert_eq!(standardize_rating(&once), once);
        }
        // Unrecognized input is a fixed point too.
        assert_eq!(
            standardize_rating(&standardize_rating("withdrawn")),
            "withdrawn"
        );
    }

    #[test]
    fn test_risk_bucket_from_label() {
        assert_eq!(RiskBucket::from_label("NR"), RiskBucket::NotRated);
        assert_eq!(RiskBucket::from_label("AAA"), RiskBucket::InvestmentGrade);
        assert_eq!(RiskBucket::from_label("AA"), RiskBucket::InvestmentGrade);
        assert_eq!(RiskBucket::from_label("A"), RiskBucket::InvestmentGrade);
        assert_eq!(RiskBucket::from_label("BBB"), RiskBucket::InvestmentGrade);
        assert_eq!(RiskBucket::from_label("BB"), RiskBucket::HighYield);
        assert_eq!(RiskBucket::from_label("CCC"), RiskBucket::HighYield);
        assert_eq!(RiskBucket::from_label("C"), RiskBucket::HighYield);
    }

    #[test]
    fn test_risk_bucket_tier_and_label_agree() {
        for tier in RatingTier::all() {
            assert_eq!(RiskBucket::from_label(tier.label()), tier.risk_bucket());
        }
    }

    #[test]
    fn test_serde() {
        let tier = RatingTier::BBB;
        let json = serde_json::to_string(&tier).unwrap();
        let parsed: RatingTier = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, tier);
    }
}
