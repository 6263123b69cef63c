use serde::Serialize;
use tracing::debug;

use crate::{
    tools::{Coordinates, Geocoder},
    types::{Day, UNKNOWN_PLACE},
};

/// Map center used when the city itself cannot be geocoded (Mumbai).
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(19.0760, 72.8777);
pub const DEFAULT_ZOOM: u8 = 12;
pub const MARKER_COLORS: [&str; 7] = [
    "red",
    "blue",
    "green",
    "purple",
    "orange",
    "darkred",
    "cadetblue",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    pub title: String,
    pub description: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayMap {
    pub center: Coordinates,
    pub zoom: u8,
    pub markers: Vec<Marker>,
}

/// Marker colour for a 1-based day number, cycling through [`MARKER_COLORS`].
pub fn marker_color(day: u32) -> &'static str {
    let idx = day.saturating_sub(1) as usize % MARKER_COLORS.len();
    MARKER_COLORS[idx]
}

/// Geocode the city and each of the day's places.
///
/// Places that fail to geocode are skipped; a city that fails falls back to
/// [`DEFAULT_CENTER`].
pub async fn build_day_map(day: &Day, city: &str, geocoder: &dyn Geocoder) -> DayMap {
    let center = match geocoder.locate(city).await {
        Some(center) => center,
        None => {
            debug!(city, "city not geocoded; using default map center");
            DEFAULT_CENTER
        }
    };

    let color = marker_color(day.day);
    let mut markers = Vec::new();
    for activity in &day.activities {
        let place = activity.place_name.trim();
        if is_placeholder(place) {
            continue;
        }

        if let Some(coords) = geocoder.locate(&format!("{}, {}", place, city)).await {
            markers.push(Marker {
                lat: coords.latitude,
                lon: coords.longitude,
                title: place.to_string(),
                description: activity.description.clone(),
                color,
            });
        }
    }

    DayMap {
        center,
        zoom: DEFAULT_ZOOM,
        markers,
    }
}

fn is_placeholder(place: &str) -> bool {
    place.is_empty() || place == UNKNOWN_PLACE || place == "Unknown"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Activity;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Default)]
    struct FakeGeocoder {
        queries: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Geocoder for FakeGeocoder {
        async fn locate(&self, query: &str) -> Option<Coordinates> {
            self.queries.lock().unwrap().push(query.to_string());
            match query {
                "Paris" => Some(Coordinates::new(48.85, 2.35)),
                "Louvre, Paris" => Some(Coordinates::new(48.86, 2.33)),
                _ => None,
            }
        }
    }

    #[test]
    fn test_marker_color_cycles() {
        assert_eq!(marker_color(1), "red");
        assert_eq!(marker_color(7), "cadetblue");
        assert_eq!(marker_color(8), "red");
        assert_eq!(marker_color(0), "red");
    }

    #[tokio::test]
    async fn test_build_day_map() {
        let geocoder = FakeGeocoder::default();
        let day = Day::new(
            2,
            vec![
                Activity::new("09:00", "Louvre", "Culture", "Art"),
                Activity::new("12:00", "Nowhere Cafe", "Food", "Lunch"),
                Activity::new("15:00", "", "Nature", "Stroll"),
            ],
            "",
        );

        let map = build_day_map(&day, "Paris", &geocoder).await;

        assert_eq!(map.center, Coordinates::new(48.85, 2.35));
        assert_eq!(map.zoom, DEFAULT_ZOOM);
        assert_eq!(map.markers.len(), 1);
        assert_eq!(map.markers[0].title, "Louvre");
        assert_eq!(map.markers[0].color, "blue");
        assert_eq!(
            *geocoder.queries.lock().unwrap(),
            vec!["Paris", "Louvre, Paris", "Nowhere Cafe, Paris"]
        );
    }

    #[tokio::test]
    async fn test_unknown_city_uses_default_center() {
        let geocoder = FakeGeocoder::default();
        let day = Day::new(1, Vec::new(), "");
        let map = build_day_map(&day, "Atlantis", &geocoder).await;
        assert_eq!(map.center, DEFAULT_CENTER);
        assert!(map.markers.is_empty());
    }
}
