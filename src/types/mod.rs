pub mod itinerary;
pub mod request;

pub use itinerary::{Activity, Category, Day, Itinerary, UNKNOWN_PLACE};
pub use request::{TripRequest, DAY_RANGE, EMPTY_CITY_MESSAGE};
