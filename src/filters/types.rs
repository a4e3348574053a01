//! Filter criteria and sort key types
//!
//! - `FilterCriteria`: the user-chosen filters applied to a candidate list
//! - `FilterCriteriaBuilder`: builder for `FilterCriteria`
//! - `SortKey`: the ordering applied after filtering

use super::error::FilterError;
use crate::places::PriceLevel;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Radius used when none is configured
pub const DEFAULT_RADIUS_METERS: u32 = 5000;

/// Filter criteria for one search
///
/// A criterion at its no-op value (`min_rating == 0`, `price_level == None`,
/// `open_now_only == false`) does not filter anything.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Search radius forwarded to the place provider
    #[serde(default = "default_radius")]
    pub radius_meters: u32,

    /// Minimum rating; 0 disables the rating filter
    #[serde(default)]
    pub min_rating: f64,

    /// Exact price level to keep; `None` means any price
    #[serde(default)]
    pub price_level: Option<PriceLevel>,

    /// Keep only places reported open right now
    #[serde(default)]
    pub open_now_only: bool,
}

const fn default_radius() -> u32 {
    DEFAULT_RADIUS_METERS
}

impl FilterCriteria {
    /// Create a new filter criteria builder
    #[must_use]
    pub fn builder() -> FilterCriteriaBuilder {
        FilterCriteriaBuilder::default()
    }

    /// Whether the rating filter is active
    #[must_use]
    pub fn filters_rating(&self) -> bool {
        self.min_rating > 0.0
    }

    /// Whether any of the rating, price or open-now filters is active
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.filters_rating() || self.price_level.is_some() || self.open_now_only
    }

    /// Validate the criteria
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The radius is zero
    /// - The minimum rating is not a finite value in `[0, 5]`
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.radius_meters == 0 {
            return Err(FilterError::InvalidRadius);
        }

        if !self.min_rating.is_finite() || !(0.0..=5.0).contains(&self.min_rating) {
            return Err(FilterError::InvalidMinRating(self.min_rating));
        }

        Ok(())
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            radius_meters: DEFAULT_RADIUS_METERS,
            min_rating: 0.0,
            price_level: None,
            open_now_only: false,
        }
    }
}

/// Builder for `FilterCriteria`
#[derive(Debug, Clone, Default)]
pub struct FilterCriteriaBuilder {
    radius_meters: Option<u32>,
    min_rating: f64,
    price_level: Option<PriceLevel>,
    open_now_only: bool,
}

impl FilterCriteriaBuilder {
    /// Set the search radius in meters
    #[must_use]
    pub const fn radius_meters(mut self, radius: u32) -> Self {
        self.radius_meters = Some(radius);
        self
    }

    /// Set the minimum rating (0 disables the filter)
    #[must_use]
    pub const fn min_rating(mut self, rating: f64) -> Self {
        self.min_rating = rating;
        self
    }

    /// Keep only places at exactly this price level
    #[must_use]
    pub const fn price_level(mut self, level: PriceLevel) -> Self {
        self.price_level = Some(level);
        self
    }

    /// Accept any price level
    #[must_use]
    pub const fn any_price(mut self) -> Self {
        self.price_level = None;
        self
    }

    /// Keep only places that are open now
    #[must_use]
    pub const fn open_now_only(mut self, enabled: bool) -> Self {
        self.open_now_only = enabled;
        self
    }

    /// Build the `FilterCriteria`
    #[must_use]
    pub fn build(self) -> FilterCriteria {
        FilterCriteria {
            radius_meters: self.radius_meters.unwrap_or(DEFAULT_RADIUS_METERS),
            min_rating: self.min_rating,
            price_level: self.price_level,
            open_now_only: self.open_now_only,
        }
    }

    /// Build and validate the `FilterCriteria`
    ///
    /// # Errors
    ///
    /// Returns `FilterError` if the resulting criteria are invalid.
    pub fn try_build(self) -> Result<FilterCriteria, FilterError> {
        let criteria = self.build();
        criteria.validate()?;
        Ok(criteria)
    }
}

/// Ordering applied to the filtered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Nearest first
    #[default]
    Distance,
    /// Highest rated first
    Rating,
    /// Most ratings first
    Popularity,
}

impl FromStr for SortKey {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "distance" => Ok(Self::Distance),
            "rating" => Ok(Self::Rating),
            "popularity" => Ok(Self::Popularity),
            _ => Err(FilterError::UnknownSortKey(s.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Distance => "distance",
            Self::Rating => "rating",
            Self::Popularity => "popularity",
        })
    }
}

impl fmt::Display for FilterCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.radius_meters >= 1000 && self.radius_meters % 1000 == 0 {
            writeln!(f, "Radius: {}km", self.radius_meters / 1000)?;
        } else {
            writeln!(f, "Radius: {}m", self.radius_meters)?;
        }

        if self.filters_rating() {
            writeln!(f, "Rating: {}+ stars", self.min_rating)?;
        } else {
            writeln!(f, "Rating: any")?;
        }

        match self.price_level {
            Some(level) => writeln!(f, "Price: {} ({})", level.symbols(), level)?,
            None => writeln!(f, "Price: any")?,
        }

        if self.open_now_only {
            writeln!(f, "Open now only")?;
        }

        Ok(())
    }
}
