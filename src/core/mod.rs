pub mod planner;

pub use crate::services::generation::{annotate_weather, generate_itinerary};
pub use crate::services::review::review_itinerary;
pub use planner::TripPlanner;
