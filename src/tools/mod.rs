//! External lookups the pipeline and the map rendering depend on

pub mod geocoding;
pub mod rate_limit;
pub mod weather;

pub use geocoding::{Coordinates, Geocoder, NominatimGeocoder};
pub use rate_limit::RateLimiter;
pub use weather::{WeatherSource, WttrWeather, WEATHER_UNAVAILABLE};
