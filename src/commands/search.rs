//! Search command - rank places around a location and print one page

use crate::{
    NearbyError,
    cli::SearchArgs,
    config::NearbyConfig,
    favorites::FavoritesStore,
    filters::FilterCriteria,
    geo::Coordinate,
    location::{self, FixedLocation, LocationSource},
    output,
    places::PriceLevel,
    recent::{RecentLocations, RecentSearches},
    search::{SearchSession, SearchStatus},
    storage::KeyValueStore,
};
use colored::Colorize;
use std::sync::Arc;

type Result<T> = std::result::Result<T, NearbyError>;

/// Filter criteria from the arguments, with config defaults for the radius
///
/// # Errors
///
/// Returns `NearbyError` if the price level or any criterion is invalid.
pub fn criteria(args: &SearchArgs, config: &NearbyConfig) -> Result<FilterCriteria> {
    let mut builder = FilterCriteria::builder()
        .radius_meters(args.radius.unwrap_or(config.default_radius_meters))
        .min_rating(args.min_rating.unwrap_or(0.0))
        .open_now_only(args.open_now);

    if let Some(level) = args.price {
        builder = builder.price_level(PriceLevel::try_from(level).map_err(NearbyError::InvalidInput)?);
    }

    Ok(builder.try_build()?)
}

/// Search centre: explicit coordinates, a saved label, the most recent
/// saved location, or the configured default, in that order
///
/// Explicit coordinates are saved when `--save-as` is given; a saved label
/// moves to the front of the recent locations.
///
/// # Errors
///
/// Returns `NearbyError` if the coordinates are invalid or the label is unknown.
pub fn resolve_center(args: &SearchArgs, recent: &RecentLocations, config: &NearbyConfig) -> Result<Coordinate> {
    if let Some(label) = &args.at {
        let entry = recent
            .get(label)
            .ok_or_else(|| NearbyError::InvalidInput(format!("No saved location '{label}'")))?;
        recent.record(entry.label, entry.location);
        return Ok(entry.location);
    }

    let explicit = match (args.lat, args.lng) {
        (Some(lat), Some(lng)) => Some(FixedLocation(Coordinate::new(lat, lng)?)),
        _ => None,
    };
    if let (Some(FixedLocation(center)), Some(label)) = (explicit, &args.save_as) {
        recent.record(label.as_str(), center);
    }

    let source: &dyn LocationSource = match &explicit {
        Some(fixed) => fixed,
        None => recent,
    };
    Ok(location::position_or(source, config.default_center))
}

/// Execute the search command
pub fn execute(args: &SearchArgs, config: &NearbyConfig, backend: Arc<dyn KeyValueStore>, quiet: bool) -> Result<()> {
    let provider = super::open_provider(args.provider.places.as_deref(), config)?;

    let recent = RecentLocations::locations(Arc::clone(&backend), config.recent_locations_capacity);
    let center = resolve_center(args, &recent, config)?;

    let mut session = SearchSession::new(center, criteria(args, config)?, args.sort, config.page_size)?;

    let mut request = session.request();
    if let Some(category) = args.category {
        request = request.with_category(category);
    }
    if let Some(query) = &args.query {
        request = request.with_keyword(query.as_str());
        RecentSearches::searches(Arc::clone(&backend), config.recent_searches_capacity).record(query.trim());
    }

    let count = match session.search(&provider, &request)? {
        SearchStatus::Applied { count } => count,
        SearchStatus::Empty => {
            if !quiet {
                println!("No places found nearby.");
            }
            return Ok(());
        }
        SearchStatus::Stale => return Ok(()),
    };

    let favorites = FavoritesStore::load(backend);
    session.go_to_page(args.page);
    let page = session.current_page();

    if !quiet {
        println!(
            "{} around {} sorted by {}",
            format!("{count} place(s)").bold(),
            center,
            args.sort
        );
        if session.criteria().is_active() {
            print!("{}", session.criteria().to_string().dimmed());
        }
    }

    let offset = (page.page_number - 1) * config.page_size;
    for (i, place) in page.items.iter().enumerate() {
        let distance = center.distance_to(&place.location);
        let favorite = favorites.is_favorite(&place.id);
        println!("{}", output::place_row(offset + i + 1, place, distance, favorite, quiet));
    }

    if !quiet {
        println!("\n{}", output::page_footer(&page, count).dimmed());
    }

    Ok(())
}
