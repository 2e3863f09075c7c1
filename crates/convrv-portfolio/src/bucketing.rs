//! Bucketing and cross-tabulation over a bond collection.
//!
//! Group-by-one-or-two-dimensions with count, market-cap and
//! average-metric rollups. Labels are recomputed from the records at query
//! time: maturity buckets depend on the evaluation date, so a cached label
//! from an earlier pass would silently go stale.

use chrono::NaiveDate;
use convrv_core::types::BondRecord;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A grouping dimension for bucketing and cross-tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Raw vendor sector string.
    Sector,
    /// IG / HY / NR credit-risk bucket (via rating standardization).
    RiskBucket,
    /// Small / Mid / Large cap size bucket.
    MarketCap,
    /// Residual-maturity bucket (time-dependent).
    Maturity,
    /// Caller-assigned profile label.
    Profile,
}

impl Dimension {
    /// Returns the bucket label of one bond along this dimension.
    ///
    /// Bonds missing the underlying field land in an explicit catch-all
    /// label rather than being dropped from the rollup.
    #[must_use]
    pub fn label_for(&self, bond: &BondRecord, as_of: NaiveDate) -> String {
        match self {
            Self::Sector => bond
                .sector
                .clone()
                .unwrap_or_else(|| "Unclassified".to_string()),
            Self::RiskBucket => bond.risk_bucket().label().to_string(),
            Self::MarketCap => bond.market_cap_bucket().label().to_string(),
            Self::Maturity => bond
                .maturity_bucket(as_of)
                .map_or_else(|| "Unknown".to_string(), |b| b.label().to_string()),
            Self::Profile => bond
                .profile
                .clone()
                .unwrap_or_else(|| "Unassigned".to_string()),
        }
    }
}

/// Rollup for one bucket: count, market-cap sum and a running metric mean.
///
/// The metric mean is over the bonds whose metric is known; unknown values
/// do not drag the average toward zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BucketMetrics {
    /// Number of bonds in this bucket.
    pub count: usize,

    /// Sum of amount issued (EUR) over the bucket.
    pub total_market_cap: f64,

    /// Sum of the selected metric over bonds where it is known.
    pub metric_sum: f64,

    /// Number of bonds contributing to `metric_sum`.
    pub metric_count: usize,
}

impl BucketMetrics {
    /// Adds one bond's contribution.
    pub fn add(&mut self, bond: &BondRecord, metric: Option<f64>) {
        self.count += 1;
        self.total_market_cap += bond.amount_issued;
        if let Some(value) = metric.filter(|v| v.is_finite()) {
            self.metric_sum += value;
            self.metric_count += 1;
        }
    }

    /// Mean of the selected metric, `None` when no bond supplied it.
    #[must_use]
    pub fn average_metric(&self) -> Option<f64> {
        if self.metric_count == 0 {
            None
        } else {
            Some(self.metric_sum / self.metric_count as f64)
        }
    }

    /// Returns true if this bucket is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Groups bonds along one dimension.
///
/// `metric` selects the per-bond value averaged within each bucket (pass
/// `|_| None` when no metric rollup is wanted). The map is ordered by
/// label for stable presentation.
pub fn bucket_by<F>(
    bonds: &[BondRecord],
    dimension: Dimension,
    metric: F,
    as_of: NaiveDate,
) -> BTreeMap<String, BucketMetrics>
where
    F: Fn(&BondRecord) -> Option<f64>,
{
    let mut buckets: BTreeMap<String, BucketMetrics> = BTreeMap::new();
    for bond in bonds {
        let label = dimension.label_for(bond, as_of);
        buckets.entry(label).or_default().add(bond, metric(bond));
    }
    buckets
}

/// Two-dimensional cross-tabulation of a bond collection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrossTab {
    /// Cell rollups keyed by (row label, column label).
    pub cells: BTreeMap<(String, String), BucketMetrics>,

    /// Row totals.
    pub row_totals: BTreeMap<String, BucketMetrics>,

    /// Column totals.
    pub column_totals: BTreeMap<String, BucketMetrics>,

    /// Grand total over all bonds.
    pub total: BucketMetrics,
}

impl CrossTab {
    /// Returns the cell rollup, if the cell is populated.
    #[must_use]
    pub fn cell(&self, row: &str, column: &str) -> Option<&BucketMetrics> {
        self.cells.get(&(row.to_string(), column.to_string()))
    }

    /// Returns the ordered row labels.
    #[must_use]
    pub fn row_labels(&self) -> Vec<&str> {
        self.row_totals.keys().map(String::as_str).collect()
    }

    /// Returns the ordered column labels.
    #[must_use]
    pub fn column_labels(&self) -> Vec<&str> {
        self.column_totals.keys().map(String::as_str).collect()
    }
}

/// Cross-tabulates bonds along two dimensions.
pub fn cross_tab<F>(
    bonds: &[BondRecord],
    rows: Dimension,
    columns: Dimension,
    metric: F,
    as_of: NaiveDate,
) -> CrossTab
where
    F: Fn(&BondRecord) -> Option<f64>,
{
    let mut tab = CrossTab::default();
    for bond in bonds {
        let row = rows.label_for(bond, as_of);
        let column = columns.label_for(bond, as_of);
        let value = metric(bond);

        tab.cells
            .entry((row.clone(), column.clone()))
            .or_default()
            .add(bond, value);
        tab.row_totals.entry(row).or_default().add(bond, value);
        tab.column_totals.entry(column).or_default().add(bond, value);
        tab.total.add(bond, value);
    }
    tab
}
