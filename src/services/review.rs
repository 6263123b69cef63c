use serde_json::Value;
use tracing::{info, warn};

use crate::{
    services::{
        chat_client::ChatModel,
        prompts::review_messages_for,
        response_parser::{coerce_itinerary, parse_llm_json, ParsedResponse},
    },
    types::Itinerary,
};

/// Second model pass over a finished itinerary.
///
/// Best effort: the revision is accepted only when the reply is a non-empty
/// JSON array. Any error or other reply shape returns `itinerary` untouched.
pub async fn review_itinerary(llm: &dyn ChatModel, itinerary: Itinerary) -> Itinerary {
    let messages = match review_messages_for(&itinerary) {
        Ok(messages) => messages,
        Err(err) => {
            warn!(error = %err, "could not serialize itinerary for review");
            return itinerary;
        }
    };

    let reply = match llm.complete(&messages).await {
        Ok(reply) => reply,
        Err(err) => {
            warn!(error = %err, code = err.error_code(), "review call failed; keeping original itinerary");
            return itinerary;
        }
    };

    match parse_llm_json(&reply) {
        ParsedResponse::Structured(Value::Array(days)) if !days.is_empty() => {
            let revised = coerce_itinerary(Value::Array(days));
            info!(days = revised.len(), "review accepted");
            revised
        }
        ParsedResponse::Structured(other) => {
            warn!(
                kind = json_kind(&other),
                "review reply is not a day sequence; keeping original itinerary"
            );
            itinerary
        }
        ParsedResponse::Unparseable(_) => {
            warn!("review reply is not JSON; keeping original itinerary");
            itinerary
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "empty array",
        Value::Object(_) => "object",
    }
}
