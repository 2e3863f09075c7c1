//! End-to-end scenarios for the signal engine over a small constructed
//! universe.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use convrv_core::types::{standardize_rating, BondRecord, MarketCapBucket, PricePoint};
use convrv_signals::{
    enhance_all, rebase_to_base100, ytd_performance, Observation, PeerVolStats, RelativeSituation,
};

fn bond(isin: &str, implied: f64, historical: f64, vega: f64) -> BondRecord {
    BondRecord::new(isin)
        .with_vols(implied, historical)
        .with_vega(vega)
}

/// Spreads 0, 1, 1, 2, 8, -6 around historical vol 30: mean 1, population
/// stddev sqrt(100/6) ~= 4.08.
fn universe() -> Vec<BondRecord> {
    vec![
        bond("FLAT", 30.0, 30.0, 0.5),
        bond("MILD1", 31.0, 30.0, 0.5),
        bond("MILD2", 31.0, 30.0, 0.5),
        bond("WARM", 32.0, 30.0, 0.5),
        bond("RICH", 38.0, 30.0, 0.5),
        bond("CHEAP", 24.0, 30.0, 0.5),
    ]
}

#[test]
fn peer_stats_over_universe() {
    let stats = PeerVolStats::compute(&universe());
    assert_eq!(stats.eligible_count, 6);
    assert_relative_eq!(stats.mean_spread.unwrap(), 1.0);
    assert_relative_eq!(
        stats.std_dev_spread.unwrap(),
        (100.0_f64 / 6.0).sqrt(),
        epsilon = 1e-12
    );
}

#[test]
fn rich_outlier_signals_downside() {
    let metrics = enhance_all(&universe());
    let rich = metrics.iter().find(|m| m.isin == "RICH").unwrap();

    assert_relative_eq!(rich.vol_spread.unwrap(), 8.0);
    assert_eq!(rich.relative_situation, Some(RelativeSituation::Expensive));
    assert_relative_eq!(rich.downside_risk.unwrap(), 4.0); // 8 * 0.5
    assert_relative_eq!(rich.spread_to_average.unwrap(), 7.0);
    assert!(rich.z_score.unwrap() > 1.0);
    assert_eq!(rich.observation, Some(Observation::Downside));
    assert_eq!(rich.observation_label(), "High probability of downside");
}

#[test]
fn cheap_outlier_signals_rebound() {
    let metrics = enhance_all(&universe());
    let cheap = metrics.iter().find(|m| m.isin == "CHEAP").unwrap();

    assert_relative_eq!(cheap.vol_spread.unwrap(), -6.0);
    assert_eq!(cheap.relative_situation, Some(RelativeSituation::Underpriced));
    assert_eq!(cheap.downside_risk, None); // negative spread: undefined
    assert_relative_eq!(cheap.spread_to_average.unwrap(), -7.0);
    assert!(cheap.z_score.unwrap() < -1.0);
    assert_eq!(cheap.observation, Some(Observation::Rebound));
    assert_eq!(cheap.observation_label(), "High probability of a rebound");
}

#[test]
fn mid_pack_bonds_show_no_signal() {
    let metrics = enhance_all(&universe());
    for isin in ["FLAT", "MILD1", "MILD2", "WARM"] {
        let m = metrics.iter().find(|m| m.isin == isin).unwrap();
        assert_eq!(m.observation, None, "{isin} should carry no signal");
        assert_eq!(m.observation_label(), "");
    }
}

#[test]
fn filtered_batch_gets_fresh_statistics() {
    // Dropping the outliers reshapes the peer population; the same bonds
    // must be scored against the new batch, not the old one.
    let full = enhance_all(&universe());
    let filtered: Vec<BondRecord> = universe()
        .into_iter()
        .filter(|b| b.isin != "RICH" && b.isin != "CHEAP")
        .collect();
    let partial = enhance_all(&filtered);

    let warm_full = full.iter().find(|m| m.isin == "WARM").unwrap();
    let warm_partial = partial.iter().find(|m| m.isin == "WARM").unwrap();

    assert_relative_eq!(warm_full.spread_to_average.unwrap(), 1.0);
    assert_relative_eq!(warm_partial.spread_to_average.unwrap(), 1.0); // mean still 1
    assert!(
        (warm_full.z_score.unwrap() - warm_partial.z_score.unwrap()).abs() > 0.1,
        "z-score must reflect the filtered population's dispersion"
    );
}

#[test]
fn unknown_vols_never_score() {
    let mut universe = universe();
    let mut blank = BondRecord::new("BLANK").with_vega(0.9);
    blank.implied_vol = None;
    universe.push(blank);

    let stats = PeerVolStats::compute(&universe);
    assert_eq!(stats.eligible_count, 6); // BLANK excluded despite high vega

    let metrics = enhance_all(&universe);
    let blank = metrics.iter().find(|m| m.isin == "BLANK").unwrap();
    assert_eq!(blank.vol_spread, None);
    assert_eq!(blank.z_score, None);
    assert_eq!(blank.situation_label(), "");
}

#[test]
fn self_check_scenarios() {
    // Scenarios carried over from the engine's original self-check.
    assert_eq!(standardize_rating("A+"), "A");
    assert_eq!(standardize_rating("Baa3"), "BBB");
    assert_eq!(standardize_rating("Ba1"), "BB");

    assert_eq!(
        MarketCapBucket::from_amount(1_000_000_000.0).label(),
        "Small Cap"
    );
    assert_eq!(
        MarketCapBucket::from_amount(6_900_000_000.0).label(),
        "Large Cap"
    );

    assert_relative_eq!(
        convrv_signals::vol_spread(Some(35.0), Some(30.0)).unwrap(),
        5.0
    );
    assert_eq!(RelativeSituation::from_spread(5.0).label(), "overpriced");
    assert_eq!(RelativeSituation::from_spread(10.0).label(), "expensive");

    assert_relative_eq!(
        convrv_signals::downside_risk(Some(5.0), Some(0.3)).unwrap(),
        1.5
    );
    assert_eq!(convrv_signals::downside_risk(Some(-5.0), Some(0.3)), None);

    let rebased = rebase_to_base100(&[120.0, 125.0, 130.0, 128.0, 135.0], 0);
    for (got, want) in rebased
        .iter()
        .zip([100.0, 104.17, 108.33, 106.67, 112.5].iter())
    {
        assert_relative_eq!(got, want, epsilon = 5e-3);
    }

    let points = vec![
        PricePoint::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), 120.0),
        PricePoint::new(NaiveDate::from_ymd_opt(2025, 6, 10).unwrap(), 135.0),
    ];
    let ytd = ytd_performance(&points, NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
    assert_relative_eq!(ytd, 12.5);
}
