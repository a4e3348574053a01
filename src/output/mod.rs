//! Output formatting for CLI display
//!
//! Rows for ranked places, favorites and saved locations, and the detail
//! view of a single place. In quiet mode rows collapse to tab-separated
//! id and name so they can be piped.

use crate::favorites::FavoriteRecord;
use crate::geo::format_distance;
use crate::pagination::Page;
use crate::places::Place;
use crate::recent::RecentEntry;
use colored::Colorize;

/// Rating with its count, e.g. `★ 4.5 (200)`
#[must_use]
pub fn rating(rating: Option<f64>, count: Option<u32>) -> String {
    match (rating, count) {
        (Some(r), Some(c)) => format!("★ {r:.1} ({c})"),
        (Some(r), None) => format!("★ {r:.1}"),
        (None, _) => "no rating".to_string(),
    }
}

/// Open/closed label, empty when the provider did not say
#[must_use]
pub fn open_status(open_now: Option<bool>) -> String {
    match open_now {
        Some(true) => "Open".green().to_string(),
        Some(false) => "Closed".red().to_string(),
        None => String::new(),
    }
}

/// One ranked place
///
/// `position` is the 1-based rank across all pages.
#[must_use]
pub fn place_row(position: usize, place: &Place, distance_meters: f64, favorite: bool, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", place.id, place.name);
    }

    let marker = if favorite { "♥".red().to_string() } else { " ".to_string() };
    let mut row = format!(
        "{position:>3}. {marker} {}  {}  {}",
        place.name.bold(),
        format_distance(distance_meters).cyan(),
        rating(place.rating, place.rating_count).yellow(),
    );

    if let Some(level) = place.price_level
        && !level.symbols().is_empty()
    {
        row.push_str(&format!("  {}", level.symbols()));
    }

    let status = open_status(place.open_now);
    if !status.is_empty() {
        row.push_str(&format!("  {status}"));
    }

    if let Some(address) = place.address() {
        row.push_str(&format!("\n       {}", address.dimmed()));
    }
    row.push_str(&format!("\n       {}", place.id.dimmed()));

    row
}

/// Footer naming the page, e.g. `Page 2 of 3 (25 places)`
#[must_use]
pub fn page_footer<T>(page: &Page<'_, T>, total: usize) -> String {
    let mut footer = format!("Page {} of {} ({total} places)", page.page_number, page.page_count);
    if page.has_next() {
        footer.push_str(&format!(", next: --page {}", page.page_number + 1));
    }
    footer
}

/// Full description of a place
#[must_use]
pub fn place_details(place: &Place, favorite: bool) -> String {
    let mut lines = Vec::new();

    let heart = if favorite { format!(" {}", "♥".red()) } else { String::new() };
    lines.push(format!("{}{heart}", place.name.bold()));
    lines.push(format!("  {}", rating(place.rating, place.rating_count).yellow()));

    if let Some(level) = place.price_level {
        lines.push(format!("  Price: {} {}", level.symbols(), level));
    }
    let status = open_status(place.open_now);
    if !status.is_empty() {
        lines.push(format!("  {status}"));
    }
    if let Some(address) = place.address() {
        lines.push(format!("  Address: {address}"));
    }
    if let Some(phone) = &place.phone {
        lines.push(format!("  Phone: {phone}"));
    }
    if let Some(website) = &place.website {
        lines.push(format!("  Website: {website}"));
    }
    lines.push(format!("  Location: {}", place.location));

    if !place.weekday_hours.is_empty() {
        lines.push("  Hours:".to_string());
        lines.extend(place.weekday_hours.iter().map(|h| format!("    {h}")));
    }

    if !place.photos.is_empty() {
        lines.push(format!("  Photos: {}", place.photos.len()));
    }

    if !place.reviews.is_empty() {
        lines.push("  Reviews:".to_string());
        for review in &place.reviews {
            let when = review
                .relative_time
                .as_deref()
                .map(|t| format!(", {t}"))
                .unwrap_or_default();
            lines.push(format!("    {} ({:.1}{when})", review.author.bold(), review.rating));
            if !review.text.is_empty() {
                lines.push(format!("      {}", review.text));
            }
        }
    }

    lines.join("\n")
}

/// One favorite
#[must_use]
pub fn favorite_row(record: &FavoriteRecord, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", record.place_id, record.name);
    }

    let address = record.address.as_deref().unwrap_or("");
    format!(
        "  {} {}  {}  {}\n    {}  added {}",
        "♥".red(),
        record.name.bold(),
        rating(record.rating, None).yellow(),
        address.dimmed(),
        record.place_id.dimmed(),
        record.added_at.format("%Y-%m-%d %H:%M UTC"),
    )
}

/// One saved location
#[must_use]
pub fn location_row(entry: &RecentEntry, quiet: bool) -> String {
    if quiet {
        entry.label.clone()
    } else {
        format!("  {} ({})", entry.label.bold(), entry.location)
    }
}
