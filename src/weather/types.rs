//! Weather payloads: what OpenWeatherMap sends and what the API returns.

use serde::{Deserialize, Serialize};

// ─── Outbound (API response) ─────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherData {
    pub current: WeatherCurrent,
    pub today: WeatherToday,
    pub hourly: Vec<WeatherHourly>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherCurrent {
    pub temp: f64,
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeatherToday {
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherHourly {
    /// RFC 3339 UTC timestamp, e.g. `2024-01-15T12:00:00.000Z`.
    pub time: String,
    pub temp: f64,
    pub icon: String,
}

// ─── Inbound (OpenWeatherMap payloads) ───────────────────────────

/// `data/2.5/weather` response. `main` may be absent or null when the
/// provider has nothing for the coordinates.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeatherPayload {
    #[serde(default)]
    pub main: Option<Readings>,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Readings {
    pub temp: f64,
    pub temp_min: f64,
    pub temp_max: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: String,
}

/// `data/2.5/forecast` response (3-hour steps).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastPayload {
    #[serde(default)]
    pub list: Vec<ForecastItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ForecastItem {
    /// Unix seconds.
    pub dt: i64,
    pub main: Readings,
    #[serde(default)]
    pub weather: Vec<Condition>,
    /// `"YYYY-MM-DD HH:MM:SS"` in UTC.
    pub dt_txt: String,
}

/// Weather lookup errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WeatherError {
    #[error("Weather provider is not configured: {0}")]
    Configuration(String),
    #[error("Weather provider error: {0}")]
    Api(String),
    #[error("No weather data for these coordinates")]
    NotFound,
}
