//! Location resolver: walks the candidate list against the geocoder.
//!
//! Flow:  MissingQuery? → ConfigurationError? → candidate 1 → candidate 2 → … → NotFound
//!
//! Candidates are tried strictly one after another and the first one that
//! yields a result wins. A failed attempt (bad status, network error, timeout,
//! garbage body) counts as "no result" and the walk continues.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, error, info};

use super::providers::{GeocodeProvider, OpenWeatherGeocoder};
use super::romanization::{TransliterationTable, KOREA};
use super::types::{GeoLocation, LocationError, ResolutionOutcome};
use super::variations;
use crate::config::Config;

/// Shared flag telling an in-progress resolution to stop before its next attempt.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Guard that cancels the flag when dropped.
    pub fn drop_guard(&self) -> CancelOnDrop {
        CancelOnDrop(self.clone())
    }
}

/// Cancels its flag on drop; hold it for as long as the caller still wants the answer.
pub struct CancelOnDrop(CancelFlag);

impl Drop for CancelOnDrop {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

/// The geocode resolver with its fallback pipeline.
#[derive(Clone)]
pub struct GeocodeResolver {
    provider: Arc<dyn GeocodeProvider>,
    table: TransliterationTable,
}

impl GeocodeResolver {
    pub fn new(provider: Arc<dyn GeocodeProvider>) -> Self {
        Self::with_table(provider, KOREA)
    }

    /// Create a resolver with a specific romanization table (for testing).
    pub fn with_table(provider: Arc<dyn GeocodeProvider>, table: TransliterationTable) -> Self {
        Self { provider, table }
    }

    /// Resolver backed by OpenWeatherMap, as configured.
    pub fn from_config(config: &Config) -> Self {
        Self::new(Arc::new(OpenWeatherGeocoder::new(
            &config.geo_url,
            config.api_key.clone(),
            config.attempt_timeout,
        )))
    }

    /// Candidate queries for `query`, in the order they would be attempted.
    pub fn candidates(&self, query: &str) -> Vec<String> {
        variations::generate(query, &self.table)
    }

    /// Resolve a district name through the full fallback chain.
    pub fn resolve(&self, query: &str) -> Result<GeoLocation, LocationError> {
        self.resolve_with_cancel(query, &CancelFlag::new())
    }

    /// Resolve, giving up before the next attempt once `cancel` is set.
    pub fn resolve_with_cancel(
        &self,
        query: &str,
        cancel: &CancelFlag,
    ) -> Result<GeoLocation, LocationError> {
        if query.is_empty() {
            return Err(LocationError::MissingQuery);
        }

        if !self.provider.is_configured() {
            error!("OPENWEATHERMAP_API_KEY is not set");
            return Err(LocationError::Configuration(
                "OPENWEATHERMAP_API_KEY is not set".into(),
            ));
        }

        let candidates = self.candidates(query);
        match self.search(&candidates, cancel)? {
            ResolutionOutcome::Found(loc) => Ok(loc),
            ResolutionOutcome::NotFound => {
                info!(query, attempts = candidates.len(), "no candidate matched");
                Err(LocationError::NotFound(query.to_string()))
            }
        }
    }

    /// Try `candidates` in order, stopping at the first match.
    pub fn search(
        &self,
        candidates: &[String],
        cancel: &CancelFlag,
    ) -> Result<ResolutionOutcome, LocationError> {
        for (i, candidate) in candidates.iter().enumerate() {
            if cancel.is_cancelled() {
                debug!(attempted = i, "resolution cancelled");
                return Err(LocationError::Cancelled);
            }

            debug!(attempt = i + 1, candidate = %candidate, "trying geocode candidate");
            if let Some(loc) = self.attempt(candidate) {
                info!(
                    attempt = i + 1,
                    candidate = %candidate,
                    name = %loc.name,
                    lat = loc.lat,
                    lon = loc.lon,
                    "geocode candidate matched"
                );
                return Ok(ResolutionOutcome::Found(loc));
            }
        }

        Ok(ResolutionOutcome::NotFound)
    }

    /// One provider round trip. Transport failures collapse into `None`.
    pub fn attempt(&self, candidate: &str) -> Option<GeoLocation> {
        match self.provider.direct(candidate, 1) {
            Ok(hits) => hits.into_iter().next().map(|hit| GeoLocation {
                lat: hit.lat,
                lon: hit.lon,
                name: hit.name,
            }),
            Err(e) => {
                debug!(candidate = %candidate, error = %e, "geocode attempt failed");
                None
            }
        }
    }
}
