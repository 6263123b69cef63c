use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{PlannerError, Result};

pub const WEATHER_UNAVAILABLE: &str = "Weather data unavailable";
pub const DEFAULT_WTTR_URL: &str = "https://wttr.in";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Source of a one-line current-conditions summary for a city.
#[async_trait]
pub trait WeatherSource: Send + Sync + std::fmt::Debug {
    /// Summary such as "Sunny, 30°C", or [`WEATHER_UNAVAILABLE`] when the lookup fails.
    async fn current_summary(&self, city: &str) -> String;
}

#[derive(Debug, Deserialize)]
struct WttrReport {
    current_condition: Vec<CurrentCondition>,
}

#[derive(Debug, Deserialize)]
struct CurrentCondition {
    #[serde(rename = "weatherDesc")]
    weather_desc: Vec<TextValue>,
    #[serde(rename = "temp_C")]
    temp_c: String,
}

#[derive(Debug, Deserialize)]
struct TextValue {
    value: String,
}

/// Current conditions from the public wttr.in JSON endpoint.
#[derive(Debug, Clone)]
pub struct WttrWeather {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl Default for WttrWeather {
    fn default() -> Self {
        Self::new()
    }
}

impl WttrWeather {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_WTTR_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn report_url(&self, city: &str) -> Result<Url> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|err| PlannerError::Config(format!("Invalid weather URL: {err}")))?;
        url.path_segments_mut()
            .map_err(|_| PlannerError::Config("Weather URL cannot take a path".to_string()))?
            .pop_if_empty()
            .push(city);
        url.query_pairs_mut().append_pair("format", "j1");
        Ok(url)
    }

    /// Single attempt; every failure is returned as an error.
    pub async fn fetch(&self, city: &str) -> Result<String> {
        let url = self.report_url(city)?;
        debug!(%url, "fetching weather");

        let response = self
            .client
            .get(url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        let report: WttrReport = response.json().await?;
        summarize(&report)
            .ok_or_else(|| PlannerError::Weather("Report has no current condition".to_string()))
    }
}

fn summarize(report: &WttrReport) -> Option<String> {
    let condition = report.current_condition.first()?;
    let description = condition.weather_desc.first()?;
    Some(format!(
        "{}, {}°C",
        description.value.trim(),
        condition.temp_c.trim()
    ))
}

#[async_trait]
impl WeatherSource for WttrWeather {
    async fn current_summary(&self, city: &str) -> String {
        match self.fetch(city).await {
            Ok(summary) => summary,
            Err(err) => {
                warn!(city, error = %err, "weather lookup failed");
                WEATHER_UNAVAILABLE.to_string()
            }
        }
    }
}
