//! Place provider port
//!
//! The core never talks to a places service directly. Searches and detail
//! lookups go through the [`PlaceSearch`] trait; [`JsonFileProvider`] is the
//! offline adapter used by the command-line tool.

pub mod error;
pub mod json_file;

pub use error::ProviderError;
pub use json_file::JsonFileProvider;

use crate::geo::Coordinate;
use crate::places::{Category, Place};

/// Parameters of a nearby search
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    pub center: Coordinate,
    pub radius_meters: u32,
    /// Provider type string, e.g. `restaurant`
    pub place_type: Option<String>,
    /// Free-text keyword
    pub keyword: Option<String>,
}

impl SearchRequest {
    #[must_use]
    pub const fn new(center: Coordinate, radius_meters: u32) -> Self {
        Self {
            center,
            radius_meters,
            place_type: None,
            keyword: None,
        }
    }

    #[must_use]
    pub fn with_category(mut self, category: Category) -> Self {
        self.place_type = Some(category.provider_type().to_string());
        self
    }

    /// Set the keyword; blank keywords are dropped
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        let keyword = keyword.into();
        self.keyword = (!keyword.trim().is_empty()).then_some(keyword);
        self
    }
}

/// Source of candidate places
pub trait PlaceSearch {
    /// Places within `request.radius_meters` of `request.center`
    ///
    /// Zero results is `Ok` with an empty vector.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError` on transport, quota or data failures.
    fn nearby_search(&self, request: &SearchRequest) -> Result<Vec<Place>, ProviderError>;

    /// Full record for one place, extended fields included
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::NotFound` for an unknown id, or another
    /// `ProviderError` if the lookup fails.
    fn details(&self, place_id: &str) -> Result<Place, ProviderError>;
}
