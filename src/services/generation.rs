use tracing::{debug, info};

use crate::{
    error::Result,
    schemas::{itinerary_schema, shape_issues},
    services::{
        chat_client::ChatModel,
        prompts::generation_messages,
        response_parser::{coerce_itinerary, parse_llm_json},
        review::review_itinerary,
    },
    tools::WeatherSource,
    types::{Itinerary, TripRequest},
};

/// Generate, weather-annotate and review an itinerary.
///
/// Only the generation call can fail; weather and review degrade to fallbacks.
pub async fn generate_itinerary(
    llm: &dyn ChatModel,
    weather: &dyn WeatherSource,
    request: &TripRequest,
) -> Result<Itinerary> {
    info!(
        city = request.city(),
        days = request.days(),
        "generating itinerary"
    );

    let reply = llm.complete(&generation_messages(request)).await?;
    debug!(reply_len = reply.len(), "generation reply received");

    let value = parse_llm_json(&reply).into_value();
    let issues = shape_issues(itinerary_schema(), &value);
    if !issues.is_empty() {
        debug!(
            target: "trip_planner::schema",
            issues = %issues.join("; "),
            "generation reply needs coercion"
        );
    }

    let mut itinerary = coerce_itinerary(value);

    let summary = weather.current_summary(request.city()).await;
    annotate_weather(&mut itinerary, &summary);

    Ok(review_itinerary(llm, itinerary).await)
}

/// Suffix every day's notes with the weather summary.
pub fn annotate_weather(itinerary: &mut Itinerary, summary: &str) {
    for day in itinerary.days_mut() {
        day.annotate_weather(summary);
    }
}
