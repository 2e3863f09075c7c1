//! Price series transforms: base-100 rebasing and periodic performance.

use chrono::{Datelike, Months, NaiveDate};
use convrv_core::types::PricePoint;

/// Rebases a price series so the element at `base_index` equals 100.
///
/// Degenerate inputs have explicit fallbacks rather than faults: an empty
/// series or out-of-range base index yields an empty output, and a zero
/// base value yields a flat-100 series (no division by zero).
#[must_use]
pub fn rebase_to_base100(series: &[f64], base_index: usize) -> Vec<f64> {
    let Some(&base) = series.get(base_index) else {
        return Vec::new();
    };

    if base == 0.0 {
        return vec![100.0; series.len()];
    }

    series.iter().map(|v| v / base * 100.0).collect()
}

/// Point-to-point performance, in percent.
///
/// A zero reference yields 0% rather than a fault.
#[must_use]
pub fn periodic_performance(current: f64, reference: f64) -> f64 {
    if reference == 0.0 {
        return 0.0;
    }
    (current / reference - 1.0) * 100.0
}

/// Closest available point at or before `target`.
///
/// Falls back to the earliest point when the target predates all history.
/// Expects `points` ordered by date; returns `None` only for an empty
/// series.
#[must_use]
pub fn reference_on_or_before(points: &[PricePoint], target: NaiveDate) -> Option<&PricePoint> {
    points
        .iter()
        .rev()
        .find(|p| p.date <= target)
        .or_else(|| points.first())
}

/// Performance from the reference point at-or-before `target` to the
/// latest point at-or-before `as_of`.
#[must_use]
pub fn performance_since(
    points: &[PricePoint],
    target: NaiveDate,
    as_of: NaiveDate,
) -> Option<f64> {
    let current = reference_on_or_before(points, as_of)?;
    let reference = reference_on_or_before(points, target)?;
    Some(periodic_performance(
        current.cb_market_price_percent,
        reference.cb_market_price_percent,
    ))
}

/// Year-to-date performance (reference: start of the `as_of` year).
#[must_use]
pub fn ytd_performance(points: &[PricePoint], as_of: NaiveDate) -> Option<f64> {
    let start_of_year = NaiveDate::from_ymd_opt(as_of.year(), 1, 1)?;
    performance_since(points, start_of_year, as_of)
}

/// Month-to-date performance (reference: first of the `as_of` month).
#[must_use]
pub fn mtd_performance(points: &[PricePoint], as_of: NaiveDate) -> Option<f64> {
    let start_of_month = NaiveDate::from_ymd_opt(as_of.year(), as_of.month(), 1)?;
    performance_since(points, start_of_month, as_of)
}

/// Three-month performance (reference: 3 calendar months before `as_of`).
#[must_use]
pub fn three_month_performance(points: &[PricePoint], as_of: NaiveDate) -> Option<f64> {
    let target = as_of.checked_sub_months(Months::new(3))?;
    performance_since(points, target, as_of)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Rebasing is invariant under uniform scaling of the input series.
        #[test]
        fn rebase_scale_invariance(
            series in prop::collection::vec(1.0..500.0f64, 1..20),
            scale in prop::sample::select(vec![0.25f64, 0.5, 2.0, 4.0, 8.0]),
        ) {
            let scaled: Vec<f64> = series.iter().map(|v| v * scale).collect();
            let a = rebase_to_base100(&series, 0);
            let b = rebase_to_base100(&scaled, 0);
            for (x, y) in a.iter().zip(b.iter()) {
                prop_assert!((x - y).abs() < 1e-9 * x.abs().max(1.0));
            }
        }

        #[test]
        fn rebase_base_element_is_100(series in prop::collection::vec(0.5..500.0f64, 1..20)) {
            let out = rebase_to_base100(&series, 0);
            prop_assert!((out[0] - 100.0).abs() < 1e-9);
        }
    }
}
