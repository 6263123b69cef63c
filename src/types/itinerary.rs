use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Placeholder shown wherever an activity arrives without a place.
pub const UNKNOWN_PLACE: &str = "Unknown Place";

/// Day-by-day plan for a whole trip, serialized as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Itinerary(Vec<Day>);

impl Itinerary {
    pub fn new(days: Vec<Day>) -> Self {
        Self(days)
    }

    pub fn days(&self) -> &[Day] {
        &self.0
    }

    pub fn days_mut(&mut self) -> &mut [Day] {
        &mut self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_days(self) -> Vec<Day> {
        self.0
    }

    /// Pretty JSON used when handing the plan back to the model.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<Vec<Day>> for Itinerary {
    fn from(days: Vec<Day>) -> Self {
        Self(days)
    }
}

impl IntoIterator for Itinerary {
    type Item = Day;
    type IntoIter = std::vec::IntoIter<Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Itinerary {
    type Item = &'a Day;
    type IntoIter = std::slice::Iter<'a, Day>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// One calendar day of the trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Day {
    /// 1-based day counter within the itinerary
    pub day: u32,
    /// Scheduled activities in the order they should happen
    #[serde(default)]
    pub activities: Vec<Activity>,
    /// Local advice for the day, later suffixed with a weather annotation
    #[serde(default)]
    pub notes: String,
}

impl Day {
    pub fn new(day: u32, activities: Vec<Activity>, notes: impl Into<String>) -> Self {
        Self {
            day,
            activities,
            notes: notes.into(),
        }
    }

    /// Append the weather annotation, dropping stray separators at either end.
    pub fn annotate_weather(&mut self, summary: &str) {
        let combined = format!("{} | Weather: {}", self.notes, summary);
        self.notes = combined
            .trim_matches(|c: char| c == ' ' || c == '|')
            .to_string();
    }
}

/// A single scheduled happening within a day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Activity {
    /// Free-text time label such as "10:30 AM"
    #[serde(default)]
    pub time: String,
    /// Specific location (museum, park, restaurant, ...)
    #[serde(default = "default_place_name")]
    pub place_name: String,
    /// Advisory category label, see [`Category`]
    #[serde(default)]
    pub category: String,
    /// What to see or do there
    #[serde(default)]
    pub description: String,
}

impl Activity {
    pub fn new(
        time: impl Into<String>,
        place_name: impl Into<String>,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            time: time.into(),
            place_name: place_name.into(),
            category: category.into(),
            description: description.into(),
        }
    }

    /// The category label mapped onto the known vocabulary, if it matches.
    pub fn category_kind(&self) -> Option<Category> {
        Category::from_label(&self.category)
    }
}

fn default_place_name() -> String {
    UNKNOWN_PLACE.to_string()
}

/// Advisory category vocabulary requested from the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub enum Category {
    Sightseeing,
    Food,
    Shopping,
    Culture,
    Nature,
    Nightlife,
    Adventure,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Sightseeing,
        Category::Food,
        Category::Shopping,
        Category::Culture,
        Category::Nature,
        Category::Nightlife,
        Category::Adventure,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Sightseeing => "Sightseeing",
            Category::Food => "Food",
            Category::Shopping => "Shopping",
            Category::Culture => "Culture",
            Category::Nature => "Nature",
            Category::Nightlife => "Nightlife",
            Category::Adventure => "Adventure",
        }
    }

    /// Case-insensitive lookup; unknown labels yield `None`.
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(wanted))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
