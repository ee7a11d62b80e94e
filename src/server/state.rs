use tracing::{info, warn};

use crate::config::Config;
use crate::districts::{Gazetteer, GazetteerError};
use crate::location::GeocodeResolver;
use crate::weather::WeatherService;

pub struct AppState {
    pub resolver: GeocodeResolver,
    pub weather: WeatherService,
    pub gazetteer: Gazetteer,
}

impl AppState {
    pub fn from_config(config: &Config) -> Result<Self, GazetteerError> {
        let gazetteer = match &config.districts_file {
            Some(path) => {
                let g = Gazetteer::load(path)?;
                if g.is_empty() {
                    warn!(path = %path.display(), "district list is empty; /api/districts will return nothing");
                }
                info!(path = %path.display(), districts = g.len(), "loaded district list");
                g
            }
            None => Gazetteer::default(),
        };

        Ok(Self {
            resolver: GeocodeResolver::from_config(config),
            weather: WeatherService::from_config(config),
            gazetteer,
        })
    }
}
