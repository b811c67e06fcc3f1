use std::io::Read;
use team_matcher::config::Settings;
use team_matcher::{MatchMode, MatchTeamsRequest, MatchingError, TeamMatcher, UuidGenerator};
use thiserror::Error;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use validator::Validate;

/// Errors that stop the command line runner
#[derive(Debug, Error)]
enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Matching(#[from] MatchingError),
}

fn init_logging(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    // Logs go to stderr so stdout carries only the result
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if settings.logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.json().init();
    }
}

/// Read the request from the first argument, the configured input path, or stdin
fn read_request(settings: &Settings) -> Result<MatchTeamsRequest, AppError> {
    let path = std::env::args().nth(1).or_else(|| settings.matching.input_path.clone());

    let raw = match path {
        Some(path) => {
            info!("Reading participants from {}", path);
            std::fs::read_to_string(path)?
        }
        None => {
            let mut raw = String::new();
            std::io::stdin().read_to_string(&mut raw)?;
            raw
        }
    };

    Ok(serde_json::from_str(&raw)?)
}

fn run(settings: &Settings) -> Result<(), AppError> {
    let request = read_request(settings)?;
    request
        .validate()
        .map_err(|e| MatchingError::InvalidRequest(e.to_string()))?;

    let matcher = TeamMatcher::new(
        settings.strict_weights(),
        settings.relaxed_weights(),
        settings.overflow_policy(),
    );
    info!("Matcher initialized with weights: {:?}", settings.strict_weights());

    let mode = MatchMode::from(request.relaxed_mode || settings.matching.relaxed_mode);
    let result = matcher.match_teams(&request.participants, mode, &UuidGenerator)?;

    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

fn main() {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(2);
        }
    };

    init_logging(&settings);
    info!("Starting team matcher...");

    if let Err(e) = run(&settings) {
        error!("Matching failed: {}", e);
        std::process::exit(1);
    }
}
