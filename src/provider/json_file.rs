//! Offline place provider backed by a JSON file
//!
//! The file holds a JSON array of places in the crate's own serialization
//! format. Searches apply the radius, type and keyword the way a live
//! provider would and return matches in file order.

use super::{PlaceSearch, ProviderError, SearchRequest};
use crate::geo;
use crate::places::Place;
use std::fs;
use std::path::Path;

/// Place provider over a fixed list of places
#[derive(Debug, Clone, Default)]
pub struct JsonFileProvider {
    places: Vec<Place>,
}

impl JsonFileProvider {
    /// Read places from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Io` if the file cannot be read and
    /// `ProviderError::Parse` if it is not a JSON array of places.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ProviderError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let provider = Self::from_json(&contents)?;
        log::debug!(
            "Loaded {} place(s) from {}",
            provider.places.len(),
            path.as_ref().display()
        );
        Ok(provider)
    }

    /// Parse places from JSON text
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::Parse` if the text is not a JSON array of places.
    pub fn from_json(json: &str) -> Result<Self, ProviderError> {
        let places: Vec<Place> = serde_json::from_str(json)?;
        Ok(Self { places })
    }

    #[must_use]
    pub const fn from_places(places: Vec<Place>) -> Self {
        Self { places }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.places.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    fn matches(place: &Place, request: &SearchRequest) -> bool {
        if geo::distance(&request.center, &place.location) > f64::from(request.radius_meters) {
            return false;
        }

        if let Some(place_type) = &request.place_type
            && !place.types.iter().any(|t| t == place_type)
        {
            return false;
        }

        if let Some(keyword) = &request.keyword {
            let needle = keyword.trim().to_lowercase();
            let mut haystacks = std::iter::once(place.name.as_str())
                .chain(place.vicinity.as_deref())
                .chain(place.types.iter().map(String::as_str));
            if !haystacks.any(|h| h.to_lowercase().contains(&needle)) {
                return false;
            }
        }

        true
    }
}

impl PlaceSearch for JsonFileProvider {
    fn nearby_search(&self, request: &SearchRequest) -> Result<Vec<Place>, ProviderError> {
        if request.radius_meters == 0 {
            return Err(ProviderError::InvalidRequest("radius must be positive".into()));
        }

        Ok(self
            .places
            .iter()
            .filter(|place| Self::matches(place, request))
            .cloned()
            .collect())
    }

    fn details(&self, place_id: &str) -> Result<Place, ProviderError> {
        self.places
            .iter()
            .find(|p| p.id == place_id)
            .cloned()
            .ok_or_else(|| ProviderError::NotFound(place_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::Category;
    use crate::testing::{coord, offset_north, place};
    use std::io::Write;

    fn provider() -> (JsonFileProvider, geo::Coordinate) {
        let center = coord(28.6139, 77.2090);
        let mut cafe = place("cafe", offset_north(&center, 200.0)).with_vicinity("Janpath");
        cafe.name = "Indian Coffee House".into();
        cafe.types = vec!["cafe".into(), "food".into()];

        let mut diner = place("diner", offset_north(&center, 800.0));
        diner.name = "Saravana Bhavan".into();
        diner.types = vec!["restaurant".into(), "food".into()];

        let mut far = place("far", offset_north(&center, 20_000.0));
        far.types = vec!["cafe".into()];

        (JsonFileProvider::from_places(vec![cafe, diner, far]), center)
    }

    fn ids(places: &[Place]) -> Vec<&str> {
        places.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn test_radius_limits_results() {
        let (provider, center) = provider();
        let near = provider.nearby_search(&SearchRequest::new(center, 500)).unwrap();
        assert_eq!(ids(&near), ["cafe"]);

        let wide = provider.nearby_search(&SearchRequest::new(center, 50_000)).unwrap();
        assert_eq!(ids(&wide), ["cafe", "diner", "far"]);
    }

    #[test]
    fn test_category_and_keyword() {
        let (provider, center) = provider();

        let cafes = provider
            .nearby_search(&SearchRequest::new(center, 5000).with_category(Category::Cafe))
            .unwrap();
        assert_eq!(ids(&cafes), ["cafe"]);

        let keyword = provider
            .nearby_search(&SearchRequest::new(center, 5000).with_keyword("bhavan"))
            .unwrap();
        assert_eq!(ids(&keyword), ["diner"]);

        let by_vicinity = provider
            .nearby_search(&SearchRequest::new(center, 5000).with_keyword("JANPATH"))
            .unwrap();
        assert_eq!(ids(&by_vicinity), ["cafe"]);
    }

    #[test]
    fn test_zero_results_is_success() {
        let (provider, center) = provider();
        let none = provider
            .nearby_search(&SearchRequest::new(center, 5000).with_category(Category::Hospital))
            .unwrap();
        assert!(none.is_empty());
    }

    #[test]
    fn test_blank_keyword_is_dropped() {
        let request = SearchRequest::new(coord(0.0, 0.0), 100).with_keyword("  ");
        assert!(request.keyword.is_none());
    }

    #[test]
    fn test_details() {
        let (provider, _) = provider();
        assert_eq!(provider.details("diner").unwrap().name, "Saravana Bhavan");
        assert!(matches!(provider.details("ghost"), Err(ProviderError::NotFound(id)) if id == "ghost"));
    }

    #[test]
    fn test_open_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "x", "name": "X", "location": {{"lat": 1.0, "lng": 1.0}}, "rating": 4.1}}]"#
        )
        .unwrap();

        let provider = JsonFileProvider::open(file.path()).unwrap();
        assert_eq!(provider.len(), 1);
        assert_eq!(provider.details("x").unwrap().rating, Some(4.1));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(matches!(JsonFileProvider::from_json("{}"), Err(ProviderError::Parse(_))));
        assert!(matches!(
            JsonFileProvider::open("/definitely/not/here.json"),
            Err(ProviderError::Io(_))
        ));
    }
}
