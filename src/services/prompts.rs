use crate::{
    services::chat_client::ChatMessage,
    types::{Category, Itinerary, TripRequest},
};

/// System + user messages asking for a fresh itinerary.
pub fn generation_messages(request: &TripRequest) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(generation_prompt(request)),
        ChatMessage::user("Generate the itinerary."),
    ]
}

/// System + user messages asking the model to review an existing itinerary.
pub fn review_messages(itinerary_json: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(
            "You are a travel expert. Review and fix the following itinerary for realism, \
             logical flow, and accurate place naming. Keep the same JSON structure and \
             return only the corrected JSON array, with no commentary or markdown.",
        ),
        ChatMessage::user(format!("Here is the itinerary:\n{}", itinerary_json)),
    ]
}

/// Convenience wrapper serializing the itinerary for [`review_messages`].
pub fn review_messages_for(itinerary: &Itinerary) -> serde_json::Result<Vec<ChatMessage>> {
    Ok(review_messages(&itinerary.to_pretty_json()?))
}

pub fn generation_prompt(request: &TripRequest) -> String {
    let city = request.city();
    let days = request.days();
    let interests = if request.interests().is_empty() {
        "no specific preferences"
    } else {
        request.interests()
    };
    let categories = Category::ALL
        .iter()
        .map(|category| format!("\"{}\"", category.label()))
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        r#"You are a professional travel planner and local guide.
Create a realistic, well-paced {days}-day travel itinerary for {city},
tailored to the traveler's interests: {interests}.

Guidelines:
1. Realism and local knowledge
- Use real, well-known locations and verified attractions in {city}. No generic or fictional places.
- Reflect local culture, geography and travel flow.
- Respect opening hours, peak times and local customs (lunch around 1 PM, dinner after 7 PM, markets closing by 9 PM).

2. Daily schedule
- Start around 8:00-9:00 AM and finish by 9:00-10:00 PM.
- Plan 3-5 key activities per day, balancing sightseeing, food, rest and exploration.
- Keep each day's route geographically logical, without crossing the city back and forth.
- Leave short travel breaks or meal stops between activities.

3. Mandatory fields for every activity
- "time": realistic local time (e.g. "10:30 AM")
- "place_name": a specific location (museum, park, restaurant, ...)
- "category": one of [{categories}]
- "description": 3-4 sentences on what to see or do and why it suits {interests}

4. Notes per day
Add a "notes" field with short local advice: best transport or tickets, weather or clothing tips, etiquette or timing.

5. Output format
Return strictly valid JSON only, shaped like:
[
  {{
    "day": 1,
    "activities": [
      {{
        "time": "09:00 AM",
        "place_name": "Gateway of India",
        "category": "Sightseeing",
        "description": "Start your trip at the historic monument overlooking the Arabian Sea..."
      }}
    ],
    "notes": "Use a ferry pass early to avoid queues; great photo spot at sunrise."
  }}
]

6. Rules
- Do not write any text, commentary or markdown outside the JSON.
- Avoid repeating places across days unless they serve a new purpose.
- The itinerary must feel authentic, local and logically ordered."#
    )
}
