//! Location subsystem: turns a Korean district name into coordinates.
//!
//! Builds a ladder of geocoder queries from the district hierarchy (Korean
//! and romanized spellings) and asks the provider for each in turn.

pub mod providers;
pub mod resolver;
pub mod romanization;
pub mod types;
pub mod variations;

pub use providers::{GeocodeHit, GeocodeProvider, OpenWeatherGeocoder};
pub use resolver::{CancelFlag, CancelOnDrop, GeocodeResolver};
pub use romanization::{TransliterationTable, KOREA};
pub use types::{GeoLocation, HierarchicalPlaceName, LocationError, ResolutionOutcome};
