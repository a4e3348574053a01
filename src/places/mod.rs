//! Place data model
//!
//! A [`Place`] is a candidate point of interest as returned by a place
//! provider. Summary searches fill the core fields; detail lookups also fill
//! the extended ones (address, phone, photos, reviews, website).
//!
//! Absent provider data is always modeled as `Option`/empty collections so
//! every consumer applies the same absent-field policy.

pub mod category;
pub mod types;

pub use category::Category;
pub use types::{Place, PhotoRef, PriceLevel, Review};
