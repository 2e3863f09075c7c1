//! Filtering, sorting and pagination over a bond collection.

use chrono::NaiveDate;
use convrv_core::types::{BondRecord, MarketCapBucket, MaturityBucket, RiskBucket};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{PortfolioError, PortfolioResult};

/// Composable bond filter.
///
/// Unset criteria match everything; set criteria are combined with AND.
/// Classification criteria are evaluated against the *current* bucket
/// labels (maturity buckets shift with the evaluation date).
///
/// # Examples
///
/// ```
/// use convrv_core::types::{BondRecord, RiskBucket};
/// use convrv_portfolio::query::BondFilter;
/// use chrono::NaiveDate;
///
/// let filter = BondFilter::new()
///     .with_risk_buckets(&[RiskBucket::InvestmentGrade])
///     .with_min_vega(0.25);
///
/// let bond = BondRecord::new("B1").with_issuer_rating("A+").with_vega(0.5);
/// let as_of = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// assert!(filter.matches(&bond, as_of));
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BondFilter {
    /// Accepted raw sector strings.
    pub sectors: Option<Vec<String>>,

    /// Accepted credit-risk buckets.
    pub risk_buckets: Option<Vec<RiskBucket>>,

    /// Accepted market-cap buckets.
    pub market_cap_buckets: Option<Vec<MarketCapBucket>>,

    /// Accepted maturity buckets (bonds without a maturity date never match).
    pub maturity_buckets: Option<Vec<MaturityBucket>>,

    /// Restrict to this ISIN set (e.g. the user's selected portfolio).
    pub isins: Option<HashSet<String>>,

    /// Minimum vega (exclusive); bonds with unknown vega never match.
    pub min_vega: Option<f64>,
}

impl BondFilter {
    /// Creates a filter that matches everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts to the given sectors.
    #[must_use]
    pub fn with_sectors(mut self, sectors: &[&str]) -> Self {
        self.sectors = Some(sectors.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Restricts to the given risk buckets.
    #[must_use]
    pub fn with_risk_buckets(mut self, buckets: &[RiskBucket]) -> Self {
        self.risk_buckets = Some(buckets.to_vec());
        self
    }

    /// Restricts to the given market-cap buckets.
    #[must_use]
    pub fn with_market_cap_buckets(mut self, buckets: &[MarketCapBucket]) -> Self {
        self.market_cap_buckets = Some(buckets.to_vec());
        self
    }

    /// Restricts to the given maturity buckets.
    #[must_use]
    pub fn with_maturity_buckets(mut self, buckets: &[MaturityBucket]) -> Self {
        self.maturity_buckets = Some(buckets.to_vec());
        self
    }

    /// Restricts to the given ISINs.
    #[must_use]
    pub fn with_isins(mut self, isins: &[&str]) -> Self {
        self.isins = Some(isins.iter().map(|s| (*s).to_string()).collect());
        self
    }

    /// Requires vega strictly above the given floor.
    #[must_use]
    pub fn with_min_vega(mut self, min_vega: f64) -> Self {
        self.min_vega = Some(min_vega);
        self
    }

    /// Returns true if the bond passes every set criterion.
    #[must_use]
    pub fn matches(&self, bond: &BondRecord, as_of: NaiveDate) -> bool {
        if let Some(isins) = &self.isins {
            if !isins.contains(&bond.isin) {
                return false;
            }
        }
        if let Some(sectors) = &self.sectors {
            match &bond.sector {
                Some(s) if sectors.iter().any(|accepted| accepted == s) => {}
                _ => return false,
            }
        }
        if let Some(buckets) = &self.risk_buckets {
            if !buckets.contains(&bond.risk_bucket()) {
                return false;
            }
        }
        if let Some(buckets) = &self.market_cap_buckets {
            if !buckets.contains(&bond.market_cap_bucket()) {
                return false;
            }
        }
        if let Some(buckets) = &self.maturity_buckets {
            match bond.maturity_bucket(as_of) {
                Some(b) if buckets.contains(&b) => {}
                _ => return false,
            }
        }
        if let Some(floor) = self.min_vega {
            match bond.vega() {
                Some(v) if v > floor => {}
                _ => return false,
            }
        }
        true
    }

    /// Returns the matching bonds, in input order.
    #[must_use]
    pub fn apply<'a>(&self, bonds: &'a [BondRecord], as_of: NaiveDate) -> Vec<&'a BondRecord> {
        bonds.iter().filter(|b| self.matches(b, as_of)).collect()
    }
}

/// Sortable bond fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortKey {
    /// ISIN (lexicographic).
    Isin,
    /// Issuer name.
    Issuer,
    /// Amount issued.
    AmountIssued,
    /// Implied volatility.
    ImpliedVol,
    /// Historical volatility.
    HistoricalVol,
    /// Vega.
    Vega,
    /// Delta.
    Delta,
    /// Maturity date.
    MaturityDate,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

/// Sorts bonds by a field; stable, with unknown values last either way.
pub fn sort_bonds(bonds: &mut [BondRecord], key: SortKey, direction: SortDirection) {
    bonds.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
    // Unknown values go last regardless of direction; re-partition after
    // the directional sort so Descending does not float them to the top.
    bonds.sort_by_key(|b| field_missing(b, key));
}

fn field_missing(bond: &BondRecord, key: SortKey) -> bool {
    match key {
        SortKey::Isin | SortKey::AmountIssued => false,
        SortKey::Issuer => bond.issuer.is_none(),
        SortKey::ImpliedVol => bond.implied_vol().is_none(),
        SortKey::HistoricalVol => bond.historical_vol().is_none(),
        SortKey::Vega => bond.vega().is_none(),
        SortKey::Delta => convrv_core::numeric(bond.delta).is_none(),
        SortKey::MaturityDate => bond.maturity_date.is_none(),
    }
}

fn compare(a: &BondRecord, b: &BondRecord, key: SortKey) -> Ordering {
    match key {
        SortKey::Isin => a.isin.cmp(&b.isin),
        SortKey::Issuer => a.issuer.cmp(&b.issuer),
        SortKey::AmountIssued => compare_f64(Some(a.amount_issued), Some(b.amount_issued)),
        SortKey::ImpliedVol => compare_f64(a.implied_vol(), b.implied_vol()),
        SortKey::HistoricalVol => compare_f64(a.historical_vol(), b.historical_vol()),
        SortKey::Vega => compare_f64(a.vega(), b.vega()),
        SortKey::Delta => compare_f64(
            convrv_core::numeric(a.delta),
            convrv_core::numeric(b.delta),
        ),
        SortKey::MaturityDate => a.maturity_date.cmp(&b.maturity_date),
    }
}

fn compare_f64(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// One page of a larger result set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Page<'a, T> {
    /// The items on this page (empty when past the end).
    pub items: &'a [T],

    /// 1-based page number.
    pub page: usize,

    /// Requested page size.
    pub page_size: usize,

    /// Total items across all pages.
    pub total_items: usize,

    /// Total number of pages (0 for an empty result set).
    pub total_pages: usize,
}

/// Slices one page out of a result set (1-based page numbers).
///
/// A page past the end yields an empty page with the totals intact; page 0
/// or a zero page size is a caller bug and reports as an error.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> PortfolioResult<Page<'_, T>> {
    if page == 0 || page_size == 0 {
        return Err(PortfolioError::InvalidPage { page, page_size });
    }

    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size);
    let start = (page - 1).saturating_mul(page_size).min(total_items);
    let end = start.saturating_add(page_size).min(total_items);

    Ok(Page {
        items: &items[start..end],
        page,
        page_size,
        total_items,
        total_pages,
    })
}
