use std::sync::Arc;

use crate::{
    error::Result,
    services::{
        chat_client::{ChatClient, ChatModel},
        generation::generate_itinerary,
        review::review_itinerary,
    },
    tools::{WeatherSource, WttrWeather},
    types::{Itinerary, TripRequest},
};

/// Entry point for itinerary generation.
///
/// Holds the one long-lived model client shared by the generation and review
/// passes, plus the weather source used for day notes.
#[derive(Debug, Clone)]
pub struct TripPlanner {
    llm: Arc<dyn ChatModel>,
    weather: Arc<dyn WeatherSource>,
}

impl TripPlanner {
    pub fn new(llm: Arc<dyn ChatModel>, weather: Arc<dyn WeatherSource>) -> Self {
        Self { llm, weather }
    }

    /// Groq client configured from the environment plus wttr.in weather.
    pub fn from_env() -> Self {
        Self::new(
            Arc::new(ChatClient::from_env()),
            Arc::new(WttrWeather::new()),
        )
    }

    pub fn with_weather(mut self, weather: Arc<dyn WeatherSource>) -> Self {
        self.weather = weather;
        self
    }

    /// Run the full pipeline for an already validated request.
    pub async fn plan(&self, request: &TripRequest) -> Result<Itinerary> {
        generate_itinerary(self.llm.as_ref(), self.weather.as_ref(), request).await
    }

    /// Validate raw form input, then plan. Invalid input never reaches the network.
    pub async fn plan_trip(
        &self,
        city: &str,
        days: u32,
        interests: &str,
    ) -> Result<(TripRequest, Itinerary)> {
        let request = TripRequest::new(city, days, interests)?;
        let itinerary = self.plan(&request).await?;
        Ok((request, itinerary))
    }

    /// Run only the review pass over an existing itinerary.
    pub async fn review(&self, itinerary: Itinerary) -> Itinerary {
        review_itinerary(self.llm.as_ref(), itinerary).await
    }
}
