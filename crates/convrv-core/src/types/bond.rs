//! Bond record and price history types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::market_cap::MarketCapBucket;
use super::maturity::MaturityBucket;
use super::rating::{standardize_rating, RiskBucket};

/// Filters a numeric field down to a usable value.
///
/// Absent and non-finite values both mean "unknown" and must propagate as
/// `None` through every derived metric, never coerce to zero.
#[must_use]
pub fn numeric(value: Option<f64>) -> Option<f64> {
    value.filter(|v| v.is_finite())
}

/// One convertible bond instrument, as supplied by the data source.
///
/// The record is immutable for the duration of a computation pass. Derived
/// classifications (rating tier, risk bucket, size bucket, maturity bucket)
/// are recomputed on every accessor call; nothing is cached on the record.
///
/// # Examples
///
/// ```
/// use convrv_core::types::{BondRecord, RiskBucket};
///
/// let bond = BondRecord::new("FR0013330529")
///     .with_issuer_rating("Baa2")
///     .with_amount_issued(500_000_000.0);
///
/// assert_eq!(bond.standardized_rating(), "BBB");
/// assert_eq!(bond.risk_bucket(), RiskBucket::InvestmentGrade);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BondRecord {
    /// ISIN, unique within a collection.
    pub isin: String,

    /// Bloomberg ticker, if known.
    pub bloomberg_code: Option<String>,

    /// Issuer name.
    pub issuer: Option<String>,

    /// Raw issuer sector string from the data vendor.
    pub sector: Option<String>,

    /// Caller-assigned profile label (e.g. "Defensive", "Balanced").
    pub profile: Option<String>,

    /// Free-text issuer rating in S&P or Moody's notation, or "NR".
    #[serde(default = "default_rating")]
    pub issuer_rating: String,

    /// Bond maturity date.
    pub maturity_date: Option<NaiveDate>,

    /// Amount issued in EUR (market-cap proxy).
    pub amount_issued: f64,

    /// Implied volatility, in percentage points.
    pub implied_vol: Option<f64>,

    /// Historical (realized) volatility, in percentage points.
    pub volatility: Option<f64>,

    /// Price sensitivity to a 1-point volatility move.
    pub vega: Option<f64>,

    /// Equity sensitivity.
    pub delta: Option<f64>,

    /// Current convertible market price, in percent of par.
    pub cb_market_price_percent: Option<f64>,
}

// Records without an issuerRating field are not-rated, not empty-rated;
// matches what `BondRecord::new` produces.
fn default_rating() -> String {
    "NR".to_string()
}

impl BondRecord {
    /// Creates a record with the given ISIN and no market data.
    #[must_use]
    pub fn new(isin: impl Into<String>) -> Self {
        Self {
            isin: isin.into(),
            issuer_rating: "NR".to_string(),
            ..Self::default()
        }
    }

    /// Sets the Bloomberg ticker.
    #[must_use]
    pub fn with_bloomberg_code(mut self, code: &str) -> Self {
        self.bloomberg_code = Some(code.to_string());
        self
    }

    /// Sets the issuer name.
    #[must_use]
    pub fn with_issuer(mut self, issuer: &str) -> Self {
        self.issuer = Some(issuer.to_string());
        self
    }

    /// Sets the raw sector string.
    #[must_use]
    pub fn with_sector(mut self, sector: &str) -> Self {
        self.sector = Some(sector.to_string());
        self
    }

    /// Sets the profile label.
    #[must_use]
    pub fn with_profile(mut self, profile: &str) -> Self {
        self.profile = Some(profile.to_string());
        self
    }

    /// Sets the raw issuer rating string.
    #[must_use]
    pub fn with_issuer_rating(mut self, rating: &str) -> Self {
        self.issuer_rating = rating.to_string();
        self
    }

    /// Sets the maturity date.
    #[must_use]
    pub fn with_maturity_date(mut self, maturity: NaiveDate) -> Self {
        self.maturity_date = Some(maturity);
        self
    }

    /// Sets the amount issued in EUR.
    #[must_use]
    pub fn with_amount_issued(mut self, amount: f64) -> Self {
        self.amount_issued = amount;
        self
    }

    /// Sets implied and historical volatility.
    #[must_use]
    pub fn with_vols(mut self, implied: f64, historical: f64) -> Self {
        self.implied_vol = Some(implied);
        self.volatility = Some(historical);
        self
    }

    /// Sets vega.
    #[must_use]
    pub fn with_vega(mut self, vega: f64) -> Self {
        self.vega = Some(vega);
        self
    }

    /// Sets delta.
    #[must_use]
    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = Some(delta);
        self
    }

    /// Implied volatility, `None` when absent or non-finite.
    #[must_use]
    pub fn implied_vol(&self) -> Option<f64> {
        numeric(self.implied_vol)
    }

    /// Historical volatility, `None` when absent or non-finite.
    #[must_use]
    pub fn historical_vol(&self) -> Option<f64> {
        numeric(self.volatility)
    }

    /// Vega, `None` when absent or non-finite.
    #[must_use]
    pub fn vega(&self) -> Option<f64> {
        numeric(self.vega)
    }

    /// Standardized rating label (echo fallback for unrecognized input).
    #[must_use]
    pub fn standardized_rating(&self) -> String {
        standardize_rating(&self.issuer_rating)
    }

    /// Credit risk bucket, via the standardized rating label.
    #[must_use]
    pub fn risk_bucket(&self) -> RiskBucket {
        RiskBucket::from_label(&self.standardized_rating())
    }

    /// Market-cap size bucket.
    #[must_use]
    pub fn market_cap_bucket(&self) -> MarketCapBucket {
        MarketCapBucket::from_amount(self.amount_issued)
    }

    /// Residual-maturity bucket as of an evaluation date.
    ///
    /// `None` when the maturity date is unknown. Time-dependent: do not
    /// cache across evaluation passes.
    #[must_use]
    pub fn maturity_bucket(&self, as_of: NaiveDate) -> Option<MaturityBucket> {
        self.maturity_date
            .map(|m| MaturityBucket::from_dates(m, as_of))
    }
}

/// One point of a bond's market price history.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    /// Quote date.
    pub date: NaiveDate,

    /// Convertible market price, in percent of par.
    pub cb_market_price_percent: f64,
}

impl PricePoint {
    /// Creates a price point.
    #[must_use]
    pub fn new(date: NaiveDate, price: f64) -> Self {
        Self {
            date,
            cb_market_price_percent: price,
        }
    }
}
