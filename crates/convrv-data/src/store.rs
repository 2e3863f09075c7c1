//! Parse-once fixture store for the bond universe and price histories.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use convrv_core::types::{BondRecord, PricePoint};
use convrv_core::validate_record;
use serde::{Deserialize, Serialize};

use crate::error::DataResult;

/// Per-bond price history as it appears in the history fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// ISIN this history belongs to.
    pub isin: String,

    /// Price points, in fixture order (sorted on load).
    pub history: Vec<PricePoint>,
}

/// In-memory store over the two JSON fixtures.
///
/// Built once at startup and passed by reference to consumers. The store
/// owns the parsed data; consumers compute derived metrics fresh on every
/// query, so there is no invalidation protocol.
#[derive(Debug, Clone, Default)]
pub struct FixtureStore {
    bonds: Vec<BondRecord>,
    history: HashMap<String, Vec<PricePoint>>,
}

impl FixtureStore {
    /// Loads both fixtures from disk.
    pub fn load(
        universe_path: impl AsRef<Path>,
        history_path: impl AsRef<Path>,
    ) -> DataResult<Self> {
        let universe = fs::read_to_string(universe_path)?;
        let history = fs::read_to_string(history_path)?;
        Self::from_json(&universe, &history)
    }

    /// Builds a store from in-memory JSON (tests, embedded fixtures).
    ///
    /// Each bond's history is sorted by date so time-series consumers can
    /// rely on chronological order. Records failing structural validation
    /// abort the load: a fixture with broken identifiers is a deployment
    /// problem, not a per-record degradation.
    pub fn from_json(universe_json: &str, history_json: &str) -> DataResult<Self> {
        let bonds: Vec<BondRecord> = serde_json::from_str(universe_json)?;
        for bond in &bonds {
            validate_record(bond)?;
        }

        let records: Vec<HistoryRecord> = serde_json::from_str(history_json)?;
        let mut history: HashMap<String, Vec<PricePoint>> = HashMap::with_capacity(records.len());
        for mut record in records {
            record.history.sort_by_key(|p| p.date);
            history.insert(record.isin, record.history);
        }

        log::info!(
            "loaded {} bonds, {} price histories",
            bonds.len(),
            history.len()
        );

        Ok(Self { bonds, history })
    }

    /// The full bond universe.
    #[must_use]
    pub fn bonds(&self) -> &[BondRecord] {
        &self.bonds
    }

    /// Ordered price history for one bond, if present.
    #[must_use]
    pub fn history_for(&self, isin: &str) -> Option<&[PricePoint]> {
        self.history.get(isin).map(Vec::as_slice)
    }

    /// All price histories, keyed by ISIN.
    #[must_use]
    pub fn histories(&self) -> &HashMap<String, Vec<PricePoint>> {
        &self.history
    }

    /// Looks a bond up by ISIN.
    #[must_use]
    pub fn bond(&self, isin: &str) -> Option<&BondRecord> {
        self.bonds.iter().find(|b| b.isin == isin)
    }
}
