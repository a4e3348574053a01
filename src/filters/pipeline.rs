//! The filter-then-sort ranking pipeline

use super::types::{FilterCriteria, SortKey};
use crate::geo::{self, Coordinate};
use crate::places::Place;
use std::cmp::Ordering;

/// Check a single place against the rating, price and open-now filters
///
/// Filters are conjunctive. An absent rating, price level or open-now flag
/// fails the corresponding filter whenever that filter is active.
#[must_use]
pub fn passes_filters(place: &Place, criteria: &FilterCriteria) -> bool {
    if criteria.filters_rating() {
        match place.rating {
            Some(rating) if rating >= criteria.min_rating => {}
            _ => return false,
        }
    }

    if let Some(level) = criteria.price_level
        && place.price_level != Some(level)
    {
        return false;
    }

    if criteria.open_now_only && place.open_now != Some(true) {
        return false;
    }

    true
}

/// Filter and order candidate places
///
/// The sort is stable: places that tie on the sort key keep their relative
/// order from `candidates`. Pure and deterministic; empty input gives empty
/// output.
#[must_use]
pub fn rank(
    candidates: &[Place],
    criteria: &FilterCriteria,
    sort_key: SortKey,
    reference: &Coordinate,
) -> Vec<Place> {
    let filtered = candidates
        .iter()
        .filter(|place| passes_filters(place, criteria));

    match sort_key {
        SortKey::Distance => {
            let mut keyed: Vec<(f64, &Place)> = filtered
                .map(|place| (geo::distance(reference, &place.location), place))
                .collect();
            keyed.sort_by(|(a, _), (b, _)| a.total_cmp(b));
            keyed.into_iter().map(|(_, place)| place.clone()).collect()
        }
        SortKey::Rating => {
            let mut ranked: Vec<Place> = filtered.cloned().collect();
            ranked.sort_by(|a, b| descending(a.rating.unwrap_or(0.0), b.rating.unwrap_or(0.0)));
            ranked
        }
        SortKey::Popularity => {
            let mut ranked: Vec<Place> = filtered.cloned().collect();
            ranked.sort_by(|a, b| {
                b.rating_count.unwrap_or(0).cmp(&a.rating_count.unwrap_or(0))
            });
            ranked
        }
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.total_cmp(&a)
}
