//! Core types for convertible bond analytics.

mod bond;
mod market_cap;
mod maturity;
mod rating;

pub use bond::{numeric, BondRecord, PricePoint};
pub use market_cap::{MarketCapBucket, MID_CAP_MAX, SMALL_CAP_MAX};
pub use maturity::MaturityBucket;
pub use rating::{standardize_rating, RatingTier, RiskBucket};
