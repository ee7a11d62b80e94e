use std::env;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_GEO_URL: &str = "http://api.openweathermap.org";
pub const DEFAULT_API_URL: &str = "https://api.openweathermap.org";
const DEFAULT_ATTEMPT_TIMEOUT_SECS: u64 = 5;
const DEFAULT_PORT: u16 = 3000;

/// Application configuration parsed from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap credential. Absence is reported per request, not at startup.
    pub api_key: Option<String>,
    pub geo_url: String,
    pub api_url: String,
    /// Upper bound on a single outbound request, including one geocode attempt.
    pub attempt_timeout: Duration,
    pub districts_file: Option<PathBuf>,
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Parse configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Parse configuration from an arbitrary variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let api_key = non_empty("OPENWEATHERMAP_API_KEY");

        let geo_url = non_empty("OPENWEATHER_GEO_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_GEO_URL.to_string());

        let api_url = non_empty("OPENWEATHER_API_URL")
            .map(|u| u.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        let timeout_secs = non_empty("GEOCODE_ATTEMPT_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&s| s > 0)
            .unwrap_or(DEFAULT_ATTEMPT_TIMEOUT_SECS);

        let districts_file = non_empty("DISTRICTS_FILE").map(PathBuf::from);

        let host = non_empty("HOST").unwrap_or_else(|| "127.0.0.1".to_string());

        let port = non_empty("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            api_key,
            geo_url,
            api_url,
            attempt_timeout: Duration::from_secs(timeout_secs),
            districts_file,
            host,
            port,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_vars(|_| None)
    }
}
