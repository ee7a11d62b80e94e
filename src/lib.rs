//! District Weather: Korean district name to coordinates to weather.
//!
//! `location` resolves `"Province-County-Neighborhood"` names through a
//! fallback ladder of geocoder queries; `weather` fetches conditions for the
//! resulting coordinates; `server` exposes both over HTTP.

pub mod config;
pub mod districts;
pub mod location;
pub mod provider;
pub mod server;
pub mod weather;
