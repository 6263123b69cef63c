use crate::{
    render::{build_day_views, render_page, render_text},
    services::chat_client::{ChatClient, DEFAULT_BASE_URL, DEFAULT_MODEL},
    tools::{Geocoder, NominatimGeocoder, WttrWeather},
    PlannerError, TripPlanner, TripRequest,
};
use anyhow::Context;
use clap::{value_parser, Arg, ArgAction, Command};
use std::{env, path::PathBuf, sync::Arc, time::Duration};
use tracing::{error, info, warn};

/// CLI entry point for the trip-planner tool
pub async fn run() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let matches = Command::new("trip-planner")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Plan a day-by-day trip itinerary with an LLM, live weather and maps")
        .arg(
            Arg::new("city")
                .short('c')
                .long("city")
                .value_name("CITY")
                .help("Destination city, e.g. Tokyo, Mumbai, Paris")
                .required(true),
        )
        .arg(
            Arg::new("days")
                .short('d')
                .long("days")
                .value_name("DAYS")
                .help("Trip duration in days (1-7)")
                .value_parser(value_parser!(u32).range(1..=7))
                .default_value("3"),
        )
        .arg(
            Arg::new("interests")
                .short('i')
                .long("interests")
                .value_name("TEXT")
                .help("Comma-separated interests, e.g. food, culture, nature")
                .default_value(""),
        )
        .arg(
            Arg::new("model")
                .short('m')
                .long("model")
                .value_name("MODEL")
                .help("Chat model to use (or set TRIP_PLANNER_MODEL)"),
        )
        .arg(
            Arg::new("api-key")
                .short('k')
                .long("api-key")
                .value_name("KEY")
                .help("LLM API key (or set GROQ_API_KEY env var)"),
        )
        .arg(
            Arg::new("base-url")
                .short('u')
                .long("base-url")
                .value_name("URL")
                .help("OpenAI-compatible base URL (or set GROQ_BASE_URL)"),
        )
        .arg(
            Arg::new("temperature")
                .long("temperature")
                .value_name("TEMP")
                .help("Sampling temperature")
                .value_parser(value_parser!(f32))
                .default_value("0.6"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .value_name("SECONDS")
                .help("LLM request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("120"),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .value_name("FILE")
                .help("Where to write the HTML itinerary with maps")
                .value_parser(value_parser!(PathBuf))
                .default_value("itinerary.html"),
        )
        .arg(
            Arg::new("no-map")
                .long("no-map")
                .help("Skip geocoding and the HTML page")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let city = matches.get_one::<String>("city").cloned().unwrap_or_default();
    let days = matches.get_one::<u32>("days").copied().unwrap_or(3);
    let interests = matches
        .get_one::<String>("interests")
        .cloned()
        .unwrap_or_default();

    // Reject bad input before any client is built
    let request = match TripRequest::new(city, days, interests) {
        Ok(request) => request,
        Err(PlannerError::InvalidInput(message)) => anyhow::bail!(message),
        Err(err) => return Err(err.into()),
    };

    let api_key = matches
        .get_one::<String>("api-key")
        .cloned()
        .or_else(|| env::var("GROQ_API_KEY").ok());
    if api_key.is_none() {
        warn!("No API key configured; the LLM provider will likely reject the request");
    }

    let base_url = matches
        .get_one::<String>("base-url")
        .cloned()
        .or_else(|| env::var("GROQ_BASE_URL").ok())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    let model = matches
        .get_one::<String>("model")
        .cloned()
        .or_else(|| env::var("TRIP_PLANNER_MODEL").ok())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());
    let temperature = matches.get_one::<f32>("temperature").copied().unwrap_or(0.6);
    let timeout_seconds = matches.get_one::<u64>("timeout").copied().unwrap_or(120);

    let llm = ChatClient::new(api_key)
        .with_base_url(base_url.clone())
        .with_model(model.clone())
        .with_temperature(temperature)
        .with_timeout(Duration::from_secs(timeout_seconds));

    info!("Using model: {}", model);
    info!("Base URL: {}", base_url);

    let planner = TripPlanner::new(Arc::new(llm), Arc::new(WttrWeather::new()));

    info!(
        "Creating your {}-day plan for {}...",
        request.days(),
        request.city()
    );
    let itinerary = match planner.plan(&request).await {
        Ok(itinerary) => itinerary,
        Err(e) => {
            error!(code = e.error_code(), "Itinerary generation failed: {}", e);
            return Err(anyhow::Error::new(e).context("failed to generate itinerary"));
        }
    };

    println!(
        "\nYour {}-day itinerary for {} is ready!\n",
        request.days(),
        request.city()
    );
    println!("{}", render_text(&itinerary, request.city()));

    if matches.get_flag("no-map") {
        return Ok(());
    }

    let geocoder = NominatimGeocoder::new()?;
    let views = build_day_views(
        &itinerary,
        request.city(),
        Some(&geocoder as &dyn Geocoder),
    )
    .await;
    let html = render_page(request.city(), &views)?;

    let output = matches
        .get_one::<PathBuf>("output")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("itinerary.html"));
    tokio::fs::write(&output, html)
        .await
        .with_context(|| format!("failed to write {}", output.display()))?;
    println!("Map view written to {}", output.display());

    Ok(())
}
