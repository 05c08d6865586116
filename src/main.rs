use std::env;
use std::fs;
use std::process::ExitCode;

use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

use homematch_algo::config::Settings;
use homematch_algo::core::{RecommendError, Recommender};
use homematch_algo::models::{Property, RecommendResponse, UserPreferences};

#[derive(Debug, Error)]
enum CliError {
    #[error("usage: homematch-algo <preferences.json> <properties.json> [top_n]")]
    Usage,

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },

    #[error("failed to serialize response: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error(transparent)]
    Engine(#[from] RecommendError),
}

fn main() -> ExitCode {
    if let Err(e) = run() {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn run() -> Result<(), CliError> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::load()?;

    // Initialize logging; env vars win over the config file
    let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| settings.logging.level.clone());
    let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| settings.logging.format.clone());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_writer(std::io::stderr);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    let mut args = env::args().skip(1);
    let preferences_path = args.next().ok_or(CliError::Usage)?;
    let properties_path = args.next().ok_or(CliError::Usage)?;
    let top_n = match args.next() {
        Some(raw) => raw.parse::<usize>().map_err(|_| CliError::Usage)?,
        None => settings.engine.default_top_n,
    };
    // Cap the requested size like any other untrusted input
    let top_n = top_n.min(settings.engine.max_top_n);

    let preferences: UserPreferences = read_json(&preferences_path)?;
    let candidates: Vec<Property> = read_json(&properties_path)?;
    let total_candidates = candidates.len();

    let recommender = Recommender::new(
        settings.scoring.weights.clone().into(),
        settings.scoring.thresholds.clone().into(),
    );

    info!(
        "Scoring {} candidates against budget {} (top {})",
        total_candidates, preferences.budget, top_n
    );

    // Small requests are not worth the fan-out overhead
    let recommendations = if total_candidates >= settings.engine.parallel_threshold {
        recommender.recommend_parallel(&preferences, candidates, top_n)?
    } else {
        recommender.recommend(&preferences, candidates, top_n)?
    };

    info!("Returning {} recommendations", recommendations.len());

    let response = RecommendResponse {
        recommendations,
        total_candidates,
        generated_at: chrono::Utc::now(),
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let raw = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| CliError::Parse {
        path: path.to_string(),
        source,
    })
}
