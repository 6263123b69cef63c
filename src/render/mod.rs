//! Presentation of a finished itinerary: activity cards, per-day maps, an
//! HTML page and a plain-text view.

pub mod cards;
pub mod map;
pub mod page;
pub mod text;

pub use cards::{maps_search_url, ActivityCard};
pub use map::{build_day_map, marker_color, DayMap, Marker, DEFAULT_CENTER};
pub use page::{render_page, DayView};
pub use text::render_text;

use crate::{tools::Geocoder, types::Itinerary};

/// Build the per-day display models. Maps are only built when a geocoder is given.
pub async fn build_day_views(
    itinerary: &Itinerary,
    city: &str,
    geocoder: Option<&dyn Geocoder>,
) -> Vec<DayView> {
    let mut views = Vec::with_capacity(itinerary.len());
    for day in itinerary {
        let map = match geocoder {
            Some(geocoder) => Some(build_day_map(day, city, geocoder).await),
            None => None,
        };
        views.push(DayView {
            day: day.day,
            cards: day
                .activities
                .iter()
                .map(|activity| ActivityCard::from_activity(activity, city))
                .collect(),
            notes: day.notes.clone(),
            map,
        });
    }
    views
}
