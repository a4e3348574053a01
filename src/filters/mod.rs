//! Filtering and ranking of candidate places
//!
//! This module turns the raw candidate list returned by a place search into
//! the ordered list shown to the user.
//!
//! # Pipeline
//!
//! 1. **Rating filter**: drop places below `min_rating` (skipped when it is 0)
//! 2. **Price filter**: keep only the requested price level (skipped for "any")
//! 3. **Open-now filter**: keep only open places (skipped unless requested)
//! 4. **Sort**: stable sort by distance, rating or popularity
//!
//! # Examples
//!
//! ```
//! use nearby::filters::{rank, FilterCriteria, SortKey};
//! use nearby::geo::Coordinate;
//! use nearby::places::Place;
//!
//! let here = Coordinate::new(28.6139, 77.2090).unwrap();
//! let places = vec![
//!     Place::new("a", "Far", Coordinate::new(28.62, 77.21).unwrap()).with_rating(4.5, 200),
//!     Place::new("b", "Near", Coordinate::new(28.614, 77.209).unwrap()).with_rating(3.9, 15),
//! ];
//!
//! let criteria = FilterCriteria::builder().min_rating(4.0).build();
//! let ranked = rank(&places, &criteria, SortKey::Distance, &here);
//! assert_eq!(ranked.len(), 1);
//! assert_eq!(ranked[0].id, "a");
//! ```

pub mod error;
pub mod pipeline;
pub mod types;

pub use error::FilterError;
pub use pipeline::{passes_filters, rank};
pub use types::{FilterCriteria, FilterCriteriaBuilder, SortKey, DEFAULT_RADIUS_METERS};
