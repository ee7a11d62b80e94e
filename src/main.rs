use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use district_weather::config::Config;
use district_weather::location::GeocodeResolver;
use district_weather::server::{self, AppState};
use district_weather::weather::WeatherService;

/// District Weather: weather for Korean administrative districts.
///
/// Resolves "Province-County-Neighborhood" names to coordinates through
/// OpenWeatherMap's geocoder, trying progressively broader queries.
///
/// Examples:
///   district-weather resolve 서울특별시-종로구-청운동
///   district-weather candidates 대전광역시-서구-가수원동
///   district-weather weather --lat 37.5915 --lon 126.9684
///   district-weather serve --port 3000 --districts korea_districts.json
#[derive(Parser)]
#[command(name = "district-weather", version, about, long_about = None)]
struct Cli {
    /// OpenWeatherMap API key (overrides OPENWEATHERMAP_API_KEY).
    #[arg(long, global = true)]
    api_key: Option<String>,

    /// Per-request timeout in seconds (overrides GEOCODE_ATTEMPT_TIMEOUT_SECS).
    #[arg(long, global = true)]
    timeout_secs: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API.
    Serve {
        /// Bind address (overrides HOST).
        #[arg(long)]
        host: Option<String>,

        /// Port (overrides PORT).
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// JSON array of district names for /api/districts (overrides DISTRICTS_FILE).
        #[arg(long)]
        districts: Option<PathBuf>,
    },

    /// Resolve a district name to coordinates and print them as JSON.
    Resolve {
        /// e.g. 서울특별시-종로구-청운동
        query: String,
    },

    /// Print the geocoder queries that would be tried, in order (no network).
    Candidates { query: String },

    /// Fetch weather for a coordinate and print it as JSON.
    Weather {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "district_weather=info,tower_http=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(key) = cli.api_key.filter(|k| !k.is_empty()) {
        config.api_key = Some(key);
    }
    if let Some(secs) = cli.timeout_secs.filter(|&s| s > 0) {
        config.attempt_timeout = Duration::from_secs(secs);
    }

    match cli.command {
        Command::Serve { host, port, districts } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            if districts.is_some() {
                config.districts_file = districts;
            }
            serve(config).await;
        }
        Command::Resolve { query } => {
            let resolver = GeocodeResolver::from_config(&config);
            let result = tokio::task::spawn_blocking(move || resolver.resolve(&query)).await;
            match result {
                Ok(Ok(loc)) => print_json(&loc),
                Ok(Err(e)) => fail(&e.to_string()),
                Err(e) => fail(&e.to_string()),
            }
        }
        Command::Candidates { query } => {
            let resolver = GeocodeResolver::from_config(&config);
            for (i, candidate) in resolver.candidates(&query).iter().enumerate() {
                println!("{:>2}. {}", i + 1, candidate);
            }
        }
        Command::Weather { lat, lon } => {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                fail("Invalid coordinates. Lat: -90..90, Lon: -180..180");
            }
            let service = WeatherService::from_config(&config);
            let today = Utc::now().date_naive();
            let result = tokio::task::spawn_blocking(move || service.lookup(lat, lon, today)).await;
            match result {
                Ok(Ok(data)) => print_json(&data),
                Ok(Err(e)) => fail(&e.to_string()),
                Err(e) => fail(&e.to_string()),
            }
        }
    }
}

async fn serve(config: Config) {
    if config.api_key.is_none() {
        tracing::warn!("OPENWEATHERMAP_API_KEY is not set; lookups will fail with INTERNAL_ERROR");
    }

    let state = AppState::from_config(&config).unwrap_or_else(|e| fail(&e.to_string()));

    if let Err(e) = server::start(&config.host, config.port, Arc::new(state)).await {
        fail(&format!("server error on {}:{}: {}", config.host, config.port, e));
    }
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{}", s),
        Err(e) => fail(&e.to_string()),
    }
}

fn fail(msg: &str) -> ! {
    eprintln!("Error: {}", msg);
    std::process::exit(1);
}
