//! # Convrv Data
//!
//! Parse-once JSON fixture store for the convertible bond analytics
//! workspace.
//!
//! The "backend" of this system is two static JSON fixtures: the bond
//! universe and the per-bond price histories. [`FixtureStore`] parses both
//! once at startup and is then passed by reference to consumers — an
//! explicit injected cache instead of ambient module-level state.
//!
//! ```no_run
//! use convrv_data::FixtureStore;
//!
//! let store = FixtureStore::load("data/universe.json", "data/history.json")?;
//! for bond in store.bonds() {
//!     println!("{} {}", bond.isin, bond.standardized_rating());
//! }
//! # Ok::<(), convrv_data::DataError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod store;

pub use error::{DataError, DataResult};
pub use store::{FixtureStore, HistoryRecord};
