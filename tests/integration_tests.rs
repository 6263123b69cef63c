use std::{sync::Arc, time::Duration};

use mockito::Matcher;
use serde_json::json;
use trip_planner_rs::{
    tools::WEATHER_UNAVAILABLE, ChatClient, ChatMessage, ChatModel, Coordinates, Geocoder,
    NominatimGeocoder, PlannerError, TripPlanner, TripRequest, WeatherSource, WttrWeather,
};

const WTTR_BODY: &str = r#"{
    "current_condition": [{
        "temp_C": "30",
        "weatherDesc": [{"value": "Sunny"}]
    }]
}"#;

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

#[tokio::test]
async fn test_weather_summary_from_wttr() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/Mumbai")
        .match_query(Matcher::UrlEncoded("format".into(), "j1".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(WTTR_BODY)
        .create_async()
        .await;

    let weather = WttrWeather::new().with_base_url(server.url());
    assert_eq!(weather.current_summary("Mumbai").await, "Sunny, 30°C");

    mock.assert_async().await;
}

#[tokio::test]
async fn test_weather_server_error_returns_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/Paris")
        .match_query(Matcher::Any)
        .with_status(503)
        .create_async()
        .await;

    let weather = WttrWeather::new().with_base_url(server.url());
    assert_eq!(weather.current_summary("Paris").await, WEATHER_UNAVAILABLE);

    // Exactly one request: no retry
    mock.assert_async().await;
}

#[tokio::test]
async fn test_weather_malformed_body_returns_sentinel() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/Oslo")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"current_condition": []}"#)
        .create_async()
        .await;

    let weather = WttrWeather::new().with_base_url(server.url());
    assert_eq!(weather.current_summary("Oslo").await, WEATHER_UNAVAILABLE);
}

#[tokio::test]
async fn test_weather_unreachable_returns_sentinel() {
    let weather = WttrWeather::new()
        .with_base_url("http://127.0.0.1:9")
        .with_timeout(Duration::from_millis(500));
    assert_eq!(weather.current_summary("Lima").await, WEATHER_UNAVAILABLE);
}

#[tokio::test]
async fn test_chat_client_returns_message_content() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/chat/completions")
        .match_header("authorization", "Bearer test-key")
        .match_body(Matcher::PartialJson(json!({
            "model": "llama-3.3-70b-versatile",
            "messages": [{"role": "system", "content": "rules"}, {"role": "user", "content": "go"}]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("[]"))
        .create_async()
        .await;

    let client = ChatClient::new(Some("test-key".to_string())).with_base_url(server.url());
    let reply = client
        .complete(&[ChatMessage::system("rules"), ChatMessage::user("go")])
        .await
        .unwrap();

    assert_eq!(reply, "[]");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_chat_client_surfaces_api_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/chat/completions")
        .with_status(401)
        .with_header("content-type", "application/json")
        .with_body(r#"{"error": {"message": "Invalid API Key"}}"#)
        .create_async()
        .await;

    let client = ChatClient::new(None).with_base_url(server.url());
    let err = client
        .complete(&[ChatMessage::user("hello")])
        .await
        .unwrap_err();

    assert!(matches!(err, PlannerError::Llm(_)));
    assert_eq!(err.error_code(), "LLM_ERROR");
    assert!(err.to_string().contains("Invalid API Key"));
}

#[tokio::test]
async fn test_geocoder_best_match() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("q".into(), "Gateway of India, Mumbai".into()),
            Matcher::UrlEncoded("format".into(), "json".into()),
            Matcher::UrlEncoded("limit".into(), "1".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"lat": "18.9220", "lon": "72.8347", "display_name": "Gateway of India"}]"#)
        .create_async()
        .await;

    let geocoder = NominatimGeocoder::new()
        .unwrap()
        .with_base_url(server.url())
        .with_min_spacing(Duration::ZERO);

    let coords = geocoder.locate("Gateway of India, Mumbai").await;
    assert_eq!(coords, Some(Coordinates::new(18.9220, 72.8347)));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_geocoder_no_match_and_failure() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "Nowhere".into()))
        .with_status(200)
        .with_body("[]")
        .create_async()
        .await;
    server
        .mock("GET", "/search")
        .match_query(Matcher::UrlEncoded("q".into(), "Broken".into()))
        .with_status(500)
        .create_async()
        .await;

    let geocoder = NominatimGeocoder::new()
        .unwrap()
        .with_base_url(server.url())
        .with_min_spacing(Duration::ZERO);

    assert_eq!(geocoder.locate("Nowhere").await, None);
    assert!(matches!(geocoder.search("Nowhere").await, Ok(None)));
    assert_eq!(geocoder.locate("Broken").await, None);
}

#[tokio::test]
async fn test_full_pipeline_over_http() {
    let mut server = mockito::Server::new_async().await;
    let generation = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("Generate the itinerary".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body(
            "```json\n[{\"day\":1,\"activities\":[{\"time\":\"09:00 AM\",\"place_name\":\"Gateway of India\",\"category\":\"Sightseeing\",\"description\":\"Harbour walk\"}],\"notes\":\"\"}]\n```",
        ))
        .create_async()
        .await;
    let review = server
        .mock("POST", "/chat/completions")
        .match_body(Matcher::Regex("Review and fix".into()))
        .with_status(500)
        .with_body("upstream unavailable")
        .create_async()
        .await;
    let weather = server
        .mock("GET", "/Mumbai")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(WTTR_BODY)
        .create_async()
        .await;

    let planner = TripPlanner::new(
        Arc::new(ChatClient::new(Some("key".to_string())).with_base_url(server.url())),
        Arc::new(WttrWeather::new().with_base_url(server.url())),
    );
    let request = TripRequest::new("Mumbai", 1, "history").unwrap();
    let itinerary = planner.plan(&request).await.unwrap();

    assert_eq!(itinerary.len(), 1);
    let day = &itinerary.days()[0];
    assert_eq!(day.activities[0].place_name, "Gateway of India");
    assert_eq!(day.notes, "Weather: Sunny, 30°C");

    generation.assert_async().await;
    review.assert_async().await;
    weather.assert_async().await;
}

#[test]
fn test_error_payload() {
    let error = PlannerError::InvalidInput("Please enter a valid city name.".to_string());
    assert_eq!(error.error_code(), "INVALID_INPUT");

    let payload = error.to_error_payload();
    assert_eq!(payload["error"]["code"], "INVALID_INPUT");
    assert_eq!(payload["error"]["user_error"], true);

    let llm = PlannerError::Llm("boom".to_string());
    assert_eq!(llm.to_error_payload()["error"]["user_error"], false);
}
