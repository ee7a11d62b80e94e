//! Core types for the location subsystem.

use serde::{Deserialize, Serialize};

/// Separator between administrative levels in a district name.
pub const SEGMENT_SEPARATOR: char = '-';

/// A district name such as `"서울특별시-종로구-청운동"`, most-general level first.
///
/// Empty segments (from leading, trailing or doubled separators) are dropped,
/// so every stored segment is non-empty and separator-free.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchicalPlaceName {
    segments: Vec<String>,
}

impl HierarchicalPlaceName {
    pub fn parse(raw: &str) -> Self {
        let segments = raw
            .split(SEGMENT_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        Self { segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Province or metropolitan city (first level).
    pub fn province(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    /// County, city or district (second level).
    pub fn county(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }
}

/// Coordinates returned by a successful resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
    /// Display name as reported by the provider.
    pub name: String,
}

/// Result of walking the candidate list.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolutionOutcome {
    Found(GeoLocation),
    NotFound,
}

/// Location resolution errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LocationError {
    #[error("No location specified")]
    MissingQuery,
    #[error("Geocoding provider is not configured: {0}")]
    Configuration(String),
    #[error("Location not found: '{0}'")]
    NotFound(String),
    #[error("Resolution cancelled")]
    Cancelled,
    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_three_levels() {
        let name = HierarchicalPlaceName::parse("서울특별시-종로구-청운동");
        assert_eq!(name.segments().len(), 3);
        assert_eq!(name.province(), Some("서울특별시"));
        assert_eq!(name.county(), Some("종로구"));
        assert_eq!(name.segments().last().map(String::as_str), Some("청운동"));
    }

    #[test]
    fn test_parse_drops_empty_segments() {
        let name = HierarchicalPlaceName::parse("-부산광역시--해운대구-");
        assert_eq!(name.segments(), &["부산광역시".to_string(), "해운대구".to_string()]);
    }

    #[test]
    fn test_parse_empty() {
        assert!(HierarchicalPlaceName::parse("").segments().is_empty());
        assert!(HierarchicalPlaceName::parse("---").segments().is_empty());
        assert_eq!(HierarchicalPlaceName::parse("").province(), None);
    }

    #[test]
    fn test_geolocation_json_shape() {
        let loc = GeoLocation { lat: 37.5915, lon: 126.9684, name: "Cheongwun-dong".into() };
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "lat": 37.5915, "lon": 126.9684, "name": "Cheongwun-dong" })
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            LocationError::NotFound("대전광역시-서구".into()).to_string(),
            "Location not found: '대전광역시-서구'"
        );
    }
}
