use reqwest::Url;
use serde::Serialize;

use crate::types::{Activity, UNKNOWN_PLACE};

const MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/";

/// Display model for one activity card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityCard {
    pub time: String,
    pub place: String,
    pub category: String,
    pub description: String,
    pub maps_url: String,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity, city: &str) -> Self {
        let place = display_place(activity);
        Self {
            maps_url: maps_search_url(&place, city),
            time: activity.time.clone(),
            category: activity
                .category_kind()
                .map(|category| category.label().to_string())
                .unwrap_or_else(|| activity.category.clone()),
            description: activity.description.clone(),
            place,
        }
    }
}

/// Place name to show, substituting the placeholder for blanks.
pub fn display_place(activity: &Activity) -> String {
    let place = activity.place_name.trim();
    if place.is_empty() {
        UNKNOWN_PLACE.to_string()
    } else {
        place.to_string()
    }
}

/// Map-search deep link for `"<place>, <city>"`.
pub fn maps_search_url(place: &str, city: &str) -> String {
    let query = format!("{}, {}", place, city);
    match Url::parse_with_params(MAPS_SEARCH_URL, [("api", "1"), ("query", query.as_str())]) {
        Ok(url) => url.into(),
        Err(_) => MAPS_SEARCH_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maps_url_encodes_query() {
        let url = maps_search_url("Café de Flore", "Paris");
        assert!(url.starts_with("https://www.google.com/maps/search/?api=1&query="));

        let parsed = Url::parse(&url).unwrap();
        let query = parsed
            .query_pairs()
            .find(|(key, _)| key == "query")
            .map(|(_, value)| value.into_owned());
        assert_eq!(query.as_deref(), Some("Café de Flore, Paris"));
    }

    #[test]
    fn test_card_from_activity() {
        let activity = Activity::new("09:00 AM", "  ", "sightseeing", "Walk");
        let card = ActivityCard::from_activity(&activity, "Mumbai");

        assert_eq!(card.place, UNKNOWN_PLACE);
        assert_eq!(card.category, "Sightseeing");
        assert!(card.maps_url.contains("Mumbai"));
    }

    #[test]
    fn test_free_text_category_kept() {
        let activity = Activity::new("", "Spa", "Wellness", "");
        assert_eq!(ActivityCard::from_activity(&activity, "Bali").category, "Wellness");
    }
}
