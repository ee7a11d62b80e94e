//! Weather lookup for resolved coordinates (OpenWeatherMap current + forecast).

pub mod client;
pub mod transform;
pub mod types;

pub use client::{OpenWeatherClient, WeatherProvider, WeatherService};
pub use types::{WeatherCurrent, WeatherData, WeatherError, WeatherHourly, WeatherToday};
