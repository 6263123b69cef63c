//! trip-planner-rs: day-by-day travel itineraries from an LLM
//!
//! The pipeline asks a chat model for an itinerary, normalizes whatever comes
//! back into a typed [`Itinerary`], annotates each day with live weather, and
//! lets a second model pass review the result. Rendering helpers turn the
//! itinerary into activity cards, per-day maps and an HTML page.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use trip_planner_rs::{TripPlanner, TripRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let planner = TripPlanner::from_env();
//!     let request = TripRequest::new("Mumbai", 3, "street food, history")?;
//!
//!     let itinerary = planner.plan(&request).await?;
//!     for day in &itinerary {
//!         println!("Day {}: {} activities", day.day, day.activities.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod error;
pub mod render;
pub mod schemas;
pub(crate) mod services;
pub mod tools;
pub mod types;

pub use crate::core::{annotate_weather, generate_itinerary, review_itinerary, TripPlanner};
pub use error::{PlannerError, Result};
pub use schemas::{itinerary_schema, shape_issues, SchemaHandle};
pub use services::chat_client::{ChatClient, ChatMessage, ChatModel, Role};
pub use services::prompts::{generation_messages, generation_prompt, review_messages};
pub use services::response_parser::{
    coerce_itinerary, normalize_response, parse_llm_json, strip_code_fences, ParsedResponse,
};
pub use tools::{Coordinates, Geocoder, NominatimGeocoder, WeatherSource, WttrWeather};
pub use types::{Activity, Category, Day, Itinerary, TripRequest};

#[cfg(feature = "cli")]
pub mod cli;
