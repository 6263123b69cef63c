//! Forward geocoding of place names through Nominatim (OpenStreetMap).
//! Free and keyless, but the usage policy asks for at most one request per second.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::rate_limit::RateLimiter;
use crate::error::{PlannerError, Result};

pub const DEFAULT_NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const MIN_REQUEST_SPACING: Duration = Duration::from_secs(1);
const USER_AGENT: &str = concat!("trip-planner-rs/", env!("CARGO_PKG_VERSION"));

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// Resolves a free-text place query to its best match.
#[async_trait]
pub trait Geocoder: Send + Sync + std::fmt::Debug {
    /// `None` when nothing matched or the lookup failed.
    async fn locate(&self, query: &str) -> Option<Coordinates>;
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug)]
pub struct NominatimGeocoder {
    client: Client,
    base_url: String,
    limiter: RateLimiter,
}

impl NominatimGeocoder {
    pub fn new() -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            base_url: DEFAULT_NOMINATIM_URL.to_string(),
            limiter: RateLimiter::new(MIN_REQUEST_SPACING),
        })
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_min_spacing(mut self, spacing: Duration) -> Self {
        self.limiter = RateLimiter::new(spacing);
        self
    }

    fn search_url(&self, query: &str) -> Result<Url> {
        let base = format!("{}/search", self.base_url.trim_end_matches('/'));
        Url::parse_with_params(&base, [("q", query), ("format", "json"), ("limit", "1")])
            .map_err(|err| PlannerError::Config(format!("Invalid geocoding URL: {err}")))
    }

    /// Single rate-limited attempt; `Ok(None)` means the service found no match.
    pub async fn search(&self, query: &str) -> Result<Option<Coordinates>> {
        let url = self.search_url(query)?;
        self.limiter.acquire().await;

        let hits: Vec<SearchHit> = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let Some(hit) = hits.into_iter().next() else {
            return Ok(None);
        };

        let latitude = hit
            .lat
            .parse::<f64>()
            .map_err(|err| PlannerError::Geocoding(format!("Bad latitude {:?}: {err}", hit.lat)))?;
        let longitude = hit
            .lon
            .parse::<f64>()
            .map_err(|err| PlannerError::Geocoding(format!("Bad longitude {:?}: {err}", hit.lon)))?;

        Ok(Some(Coordinates::new(latitude, longitude)))
    }
}

#[async_trait]
impl Geocoder for NominatimGeocoder {
    async fn locate(&self, query: &str) -> Option<Coordinates> {
        match self.search(query).await {
            Ok(Some(coords)) => {
                debug!(query, lat = coords.latitude, lon = coords.longitude, "geocoded");
                Some(coords)
            }
            Ok(None) => {
                debug!(query, "no geocoding match");
                None
            }
            Err(err) => {
                warn!(query, error = %err, "geocoding failed");
                None
            }
        }
    }
}
