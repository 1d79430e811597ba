use std::fmt::Write;

use time::{macros::format_description, UtcOffset};

use crate::record::Record;

use super::state::PlaceList;

/// Renders with creation time in the machine's local offset, falling back to UTC
/// when the offset cannot be read (e.g. from a multi-threaded process on Unix).
pub fn render_card(record: &Record) -> String {
    let offset = UtcOffset::current_local_offset().unwrap_or(UtcOffset::UTC);
    render_card_at(record, offset)
}

pub fn render_card_at(record: &Record, offset: UtcOffset) -> String {
    let mut card = String::new();
    let _ = writeln!(card, "{}", record.title);
    let _ = writeln!(card, "  {}", record.description);
    let _ = writeln!(
        card,
        "  Lat: {:.5} | Lng: {:.5}",
        record.location.latitude, record.location.longitude
    );
    if let Some(photo) = record.photo.as_deref().filter(|photo| !photo.is_empty()) {
        let kind = if photo.starts_with("data:") { "inline image" } else { photo };
        let _ = writeln!(card, "  Photo: {kind}");
    }
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    if let Ok(created) = record.created_at.to_offset(offset).format(&format) {
        let _ = writeln!(card, "  {created}");
    }
    card
}

pub fn render_list(places: &PlaceList) -> String {
    if places.is_empty() {
        return "No places registered yet.\n".to_owned();
    }

    places
        .items()
        .iter()
        .map(render_card)
        .collect::<Vec<_>>()
        .join("\n")
}
