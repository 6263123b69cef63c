use std::fmt::Write;

use super::cards::ActivityCard;
use crate::types::Itinerary;

/// Plain-text rendering for terminals and logs.
pub fn render_text(itinerary: &Itinerary, city: &str) -> String {
    let mut out = String::new();

    for day in itinerary {
        let _ = writeln!(out, "=== Day {} ===", day.day);
        for activity in &day.activities {
            let card = ActivityCard::from_activity(activity, city);
            let _ = write!(out, "  [{}] {}", card.time, card.place);
            if !card.category.is_empty() {
                let _ = write!(out, " ({})", card.category);
            }
            out.push('\n');
            if !card.description.is_empty() {
                let _ = writeln!(out, "      {}", card.description);
            }
            let _ = writeln!(out, "      {}", card.maps_url);
        }
        if !day.notes.is_empty() {
            let _ = writeln!(out, "  Notes: {}", day.notes);
        }
        out.push('\n');
    }

    out
}
