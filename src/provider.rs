//! Blocking JSON-over-HTTP plumbing shared by the OpenWeatherMap clients.

use serde::de::DeserializeOwned;
use std::time::Duration;

const USER_AGENT: &str = "DistrictWeather/0.1 (district-weather-lookup)";

/// A single outbound request that did not yield a usable body.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    #[error("provider returned status {0}")]
    Status(u16),
    #[error("network error: {0}")]
    Network(String),
    #[error("invalid response body: {0}")]
    InvalidBody(String),
}

/// Build the agent used for every call to one provider.
///
/// The timeout covers the whole request (connect + read), so an expired
/// attempt surfaces as `TransportError::Network`.
pub fn build_agent(timeout: Duration) -> ureq::Agent {
    ureq::AgentBuilder::new()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
}

/// GET `url` with URL-encoded query `params` and decode the JSON body.
pub fn get_json<T: DeserializeOwned>(
    agent: &ureq::Agent,
    url: &str,
    params: &[(&str, &str)],
) -> Result<T, TransportError> {
    let request = params
        .iter()
        .fold(agent.get(url), |req, (key, value)| req.query(key, value));

    let response = match request.call() {
        Ok(r) => r,
        Err(ureq::Error::Status(code, _)) => return Err(TransportError::Status(code)),
        Err(ureq::Error::Transport(t)) => return Err(TransportError::Network(t.to_string())),
    };

    response
        .into_json()
        .map_err(|e| TransportError::InvalidBody(e.to_string()))
}
