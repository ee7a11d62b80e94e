//! Weather provider seam, OpenWeatherMap client, and the lookup service.

use chrono::NaiveDate;
use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tracing::{debug, error};

use super::transform;
use super::types::{CurrentWeatherPayload, ForecastPayload, WeatherData, WeatherError};
use crate::config::Config;
use crate::provider::{self, TransportError};

/// Forecast steps requested from the provider (3-hour steps → 3 days).
const FORECAST_COUNT: &str = "24";

pub trait WeatherProvider: Send + Sync {
    fn current(&self, lat: f64, lon: f64) -> Result<CurrentWeatherPayload, TransportError>;
    fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastPayload, TransportError>;

    fn is_configured(&self) -> bool {
        true
    }
}

/// OpenWeatherMap `data/2.5` client (metric units, Korean descriptions).
pub struct OpenWeatherClient {
    agent: ureq::Agent,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherClient {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            agent: provider::build_agent(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }

    fn get<T: serde::de::DeserializeOwned>(
        &self,
        endpoint: &str,
        lat: f64,
        lon: f64,
        extra: &[(&str, &str)],
    ) -> Result<T, TransportError> {
        let url = format!("{}/data/2.5/{}", self.base_url, endpoint);
        let lat = lat.to_string();
        let lon = lon.to_string();
        let key = self.api_key.as_deref().unwrap_or_default();

        let mut params = vec![
            ("lat", lat.as_str()),
            ("lon", lon.as_str()),
            ("appid", key),
            ("units", "metric"),
            ("lang", "kr"),
        ];
        params.extend_from_slice(extra);
        provider::get_json(&self.agent, &url, &params)
    }
}

impl WeatherProvider for OpenWeatherClient {
    fn current(&self, lat: f64, lon: f64) -> Result<CurrentWeatherPayload, TransportError> {
        self.get("weather", lat, lon, &[])
    }

    fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastPayload, TransportError> {
        self.get("forecast", lat, lon, &[("cnt", FORECAST_COUNT)])
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Current conditions, today's range, and the next 24 hours for a coordinate.
#[derive(Clone)]
pub struct WeatherService {
    provider: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Arc<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(OpenWeatherClient::new(
            &config.api_url,
            config.api_key.clone(),
            config.attempt_timeout,
        )))
    }

    /// Fetch current + forecast concurrently and merge them. `today` is the
    /// UTC date used for the min/max window.
    pub fn lookup(&self, lat: f64, lon: f64, today: NaiveDate) -> Result<WeatherData, WeatherError> {
        if !self.provider.is_configured() {
            error!("OPENWEATHERMAP_API_KEY is not set");
            return Err(WeatherError::Configuration(
                "OPENWEATHERMAP_API_KEY is not set".into(),
            ));
        }

        let provider = &self.provider;
        let (current, forecast) = thread::scope(|s| {
            let forecast = s.spawn(|| provider.forecast(lat, lon));
            let current = provider.current(lat, lon);
            (current, forecast.join())
        });

        let forecast = forecast
            .map_err(|_| WeatherError::Api("forecast request panicked".into()))?;

        let (current, forecast) = match (current, forecast) {
            (Ok(c), Ok(f)) => (c, f),
            (c, f) => {
                let describe = |e: Option<&TransportError>| {
                    e.map(ToString::to_string).unwrap_or_else(|| "ok".into())
                };
                let current_err = describe(c.as_ref().err());
                let forecast_err = describe(f.as_ref().err());
                error!(current = %current_err, forecast = %forecast_err, "OpenWeatherMap API error");
                return Err(WeatherError::Api(format!(
                    "current={}, forecast={}",
                    current_err, forecast_err
                )));
            }
        };

        debug!(lat, lon, steps = forecast.list.len(), "weather payloads received");
        transform::build(&current, &forecast, today).ok_or(WeatherError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::types::{Condition, ForecastItem, Readings};
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeWeather {
        current: Result<CurrentWeatherPayload, TransportError>,
        forecast: Result<ForecastPayload, TransportError>,
        configured: bool,
        calls: AtomicUsize,
    }

    impl FakeWeather {
        fn new(
            current: Result<CurrentWeatherPayload, TransportError>,
            forecast: Result<ForecastPayload, TransportError>,
        ) -> Self {
            Self { current, forecast, configured: true, calls: AtomicUsize::new(0) }
        }
    }

    impl WeatherProvider for FakeWeather {
        fn current(&self, _lat: f64, _lon: f64) -> Result<CurrentWeatherPayload, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.current.clone()
        }

        fn forecast(&self, _lat: f64, _lon: f64) -> Result<ForecastPayload, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.forecast.clone()
        }

        fn is_configured(&self) -> bool {
            self.configured
        }
    }

    fn sunny() -> CurrentWeatherPayload {
        CurrentWeatherPayload {
            main: Some(Readings { temp: 12.5, temp_min: 10.0, temp_max: 15.0 }),
            weather: vec![Condition { description: "맑음".into(), icon: "01d".into() }],
        }
    }

    fn one_step() -> ForecastPayload {
        ForecastPayload {
            list: vec![ForecastItem {
                dt: 1705320000,
                main: Readings { temp: 11.0, temp_min: 8.0, temp_max: 16.0 },
                weather: vec![Condition { description: String::new(), icon: "02d".into() }],
                dt_txt: "2024-01-15 12:00:00".into(),
            }],
        }
    }

    fn jan15() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
    }

    #[test]
    fn test_lookup_success() {
        let svc = WeatherService::new(Arc::new(FakeWeather::new(Ok(sunny()), Ok(one_step()))));
        let data = svc.lookup(37.5326, 127.0246, jan15()).unwrap();
        assert_eq!(data.current.icon, "01d");
        assert_eq!(data.today.min, 8.0);
        assert_eq!(data.today.max, 16.0);
        assert_eq!(data.hourly.len(), 1);
    }

    #[test]
    fn test_lookup_api_error_when_either_fails() {
        let svc = WeatherService::new(Arc::new(FakeWeather::new(
            Ok(sunny()),
            Err(TransportError::Status(500)),
        )));
        assert!(matches!(svc.lookup(0.0, 0.0, jan15()), Err(WeatherError::Api(_))));

        let svc = WeatherService::new(Arc::new(FakeWeather::new(
            Err(TransportError::Network("timed out".into())),
            Ok(one_step()),
        )));
        assert!(matches!(svc.lookup(0.0, 0.0, jan15()), Err(WeatherError::Api(_))));
    }

    #[test]
    fn test_lookup_not_found_on_empty_current() {
        let svc = WeatherService::new(Arc::new(FakeWeather::new(
            Ok(CurrentWeatherPayload::default()),
            Ok(ForecastPayload::default()),
        )));
        assert_eq!(svc.lookup(0.0, 0.0, jan15()), Err(WeatherError::NotFound));
    }

    #[test]
    fn test_lookup_unconfigured_makes_no_calls() {
        let mut fake = FakeWeather::new(Ok(sunny()), Ok(one_step()));
        fake.configured = false;
        let fake = Arc::new(fake);
        let svc = WeatherService::new(fake.clone());
        assert!(matches!(svc.lookup(0.0, 0.0, jan15()), Err(WeatherError::Configuration(_))));
        assert_eq!(fake.calls.load(Ordering::SeqCst), 0);
    }
}
