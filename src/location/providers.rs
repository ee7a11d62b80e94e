//! Geocoding providers: the direct-geocoding seam and its OpenWeatherMap implementation.

use serde::Deserialize;
use std::collections::HashMap;
use std::time::Duration;

use crate::provider::{self, TransportError};

/// One entry of a direct-geocoding response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeocodeHit {
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub local_names: Option<HashMap<String, String>>,
}

/// Free-text address → coordinates lookup against an external service.
pub trait GeocodeProvider: Send + Sync {
    /// Look up `query`, returning at most `limit` hits in provider order.
    fn direct(&self, query: &str, limit: usize) -> Result<Vec<GeocodeHit>, TransportError>;

    /// Whether the credentials needed to call the provider are present.
    fn is_configured(&self) -> bool {
        true
    }
}

/// OpenWeatherMap `geo/1.0/direct` client.
pub struct OpenWeatherGeocoder {
    agent: ureq::Agent,
    base_url: String,
    api_key: Option<String>,
}

impl OpenWeatherGeocoder {
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            agent: provider::build_agent(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        }
    }
}

impl GeocodeProvider for OpenWeatherGeocoder {
    fn direct(&self, query: &str, limit: usize) -> Result<Vec<GeocodeHit>, TransportError> {
        let key = self.api_key.as_deref().unwrap_or_default();
        let url = format!("{}/geo/1.0/direct", self.base_url);
        let limit = limit.to_string();
        provider::get_json(
            &self.agent,
            &url,
            &[("q", query), ("limit", &limit), ("appid", key)],
        )
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}
