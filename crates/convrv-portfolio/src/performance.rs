//! Portfolio performance series: averaged price path, base-100 rebasing
//! and periodic performance summaries.

use chrono::NaiveDate;
use convrv_core::types::PricePoint;
use convrv_signals::timeseries::{
    mtd_performance, rebase_to_base100, three_month_performance, ytd_performance,
};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{PortfolioError, PortfolioResult};

/// Equal-weight average price path over the selected bonds.
///
/// Takes the union of quote dates; on each date the path averages the
/// members that quote there, so gappy histories still contribute where
/// they have data. The result is chronologically ordered.
#[must_use]
pub fn portfolio_price_path(
    histories: &HashMap<String, Vec<PricePoint>>,
    isins: &[String],
) -> Vec<PricePoint> {
    let mut by_date: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();
    for isin in isins {
        let Some(points) = histories.get(isin) else {
            continue;
        };
        for point in points {
            let entry = by_date.entry(point.date).or_insert((0.0, 0));
            entry.0 += point.cb_market_price_percent;
            entry.1 += 1;
        }
    }

    by_date
        .into_iter()
        .map(|(date, (sum, count))| PricePoint::new(date, sum / count as f64))
        .collect()
}

/// Averaged portfolio path rebased so its first point equals 100.
///
/// An empty selection or a selection with no history at all is a caller
/// error; a selection where only *some* members have history degrades to
/// the members that do.
pub fn rebased_portfolio_series(
    histories: &HashMap<String, Vec<PricePoint>>,
    isins: &[String],
) -> PortfolioResult<Vec<PricePoint>> {
    if isins.is_empty() {
        return Err(PortfolioError::EmptyPortfolio);
    }

    let path = portfolio_price_path(histories, isins);
    if path.is_empty() {
        // Surface the first missing ISIN for the diagnostic.
        let missing = isins
            .iter()
            .find(|isin| !histories.contains_key(*isin))
            .cloned()
            .unwrap_or_else(|| isins[0].clone());
        return Err(PortfolioError::no_history(missing));
    }

    let values: Vec<f64> = path.iter().map(|p| p.cb_market_price_percent).collect();
    let rebased = rebase_to_base100(&values, 0);

    Ok(path
        .iter()
        .zip(rebased)
        .map(|(p, v)| PricePoint::new(p.date, v))
        .collect())
}

/// Point-to-point performance summary over a price path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceSummary {
    /// Year-to-date performance, percent.
    pub ytd: Option<f64>,

    /// Month-to-date performance, percent.
    pub mtd: Option<f64>,

    /// Three-month performance, percent.
    pub three_month: Option<f64>,
}

/// Computes the standard performance windows over a price path.
#[must_use]
pub fn performance_summary(path: &[PricePoint], as_of: NaiveDate) -> PerformanceSummary {
    PerformanceSummary {
        ytd: ytd_performance(path, as_of),
        mtd: mtd_performance(path, as_of),
        three_month: three_month_performance(path, as_of),
    }
}
