use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

use crate::districts::DEFAULT_MAX_RESULTS;
use crate::location::{CancelFlag, GeoLocation, LocationError};
use crate::weather::{WeatherData, WeatherError};

use super::state::AppState;

const MAX_DISTRICT_LIMIT: usize = 100;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: &'static str,
}

/// HTTP status plus the machine-readable code sent as `{ "error": code }`.
#[derive(Debug)]
pub struct ApiError(StatusCode, &'static str);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.0, Json(ApiErrorBody { error: self.1 })).into_response()
    }
}

fn api_error(status: StatusCode, code: &'static str) -> ApiError {
    ApiError(status, code)
}

fn internal_error() -> ApiError {
    api_error(StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
}

impl From<LocationError> for ApiError {
    fn from(e: LocationError) -> Self {
        match e {
            LocationError::MissingQuery => api_error(StatusCode::BAD_REQUEST, "MISSING_QUERY"),
            LocationError::NotFound(_) => api_error(StatusCode::NOT_FOUND, "NOT_FOUND"),
            LocationError::Configuration(_) | LocationError::Cancelled | LocationError::Unexpected(_) => {
                internal_error()
            }
        }
    }
}

impl From<WeatherError> for ApiError {
    fn from(e: WeatherError) -> Self {
        match e {
            WeatherError::Configuration(_) => internal_error(),
            WeatherError::Api(_) => api_error(StatusCode::INTERNAL_SERVER_ERROR, "API_ERROR"),
            WeatherError::NotFound => api_error(StatusCode::NOT_FOUND, "NOT_FOUND"),
        }
    }
}

// ─── GET /health ─────────────────────────────────────────────────

pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

// ─── GET /api/geocode ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct GeocodeQuery {
    pub q: Option<String>,
}

pub async fn geocode(
    State(state): State<Arc<AppState>>,
    Query(params): Query<GeocodeQuery>,
) -> Result<Json<GeoLocation>, ApiError> {
    let start = Instant::now();
    let query = params.q.unwrap_or_default();

    // Dropping this future (client gone) drops the guard, which stops the
    // blocking resolver before its next attempt.
    let cancel = CancelFlag::new();
    let _guard = cancel.drop_guard();

    let task_query = query.clone();
    let task_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        task_state.resolver.resolve_with_cancel(&task_query, &cancel)
    })
    .await
    .unwrap_or_else(|e| {
        error!(error = %e, "geocode task failed");
        Err(LocationError::Unexpected(e.to_string()))
    });

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    match result {
        Ok(loc) => {
            info!(query = %query, name = %loc.name, elapsed_ms, "GET /api/geocode");
            Ok(Json(loc))
        }
        Err(e) => {
            info!(query = %query, outcome = %e, elapsed_ms, "GET /api/geocode");
            Err(e.into())
        }
    }
}

// ─── GET /api/weather ────────────────────────────────────────────

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

pub async fn weather(
    State(state): State<Arc<AppState>>,
    Query(params): Query<WeatherQuery>,
) -> Result<Json<WeatherData>, ApiError> {
    let start = Instant::now();
    let (lat, lon) = parse_coordinates(params.lat.as_deref(), params.lon.as_deref())?;
    let today = Utc::now().date_naive();

    let task_state = state.clone();
    let result = tokio::task::spawn_blocking(move || task_state.weather.lookup(lat, lon, today))
        .await
        .map_err(|e| {
            error!(error = %e, "weather task failed");
            internal_error()
        })?;

    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    match result {
        Ok(data) => {
            info!(lat, lon, elapsed_ms, "GET /api/weather");
            Ok(Json(data))
        }
        Err(e) => {
            info!(lat, lon, outcome = %e, elapsed_ms, "GET /api/weather");
            Err(e.into())
        }
    }
}

fn parse_coordinates(lat: Option<&str>, lon: Option<&str>) -> Result<(f64, f64), ApiError> {
    let (lat, lon) = match (lat.map(str::trim), lon.map(str::trim)) {
        (Some(lat), Some(lon)) if !lat.is_empty() && !lon.is_empty() => (lat, lon),
        _ => return Err(api_error(StatusCode::BAD_REQUEST, "MISSING_COORDINATES")),
    };

    let invalid = || api_error(StatusCode::BAD_REQUEST, "INVALID_COORDINATES");
    let lat: f64 = lat.parse().map_err(|_| invalid())?;
    let lon: f64 = lon.parse().map_err(|_| invalid())?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
        return Err(invalid());
    }
    Ok((lat, lon))
}

// ─── GET /api/districts ──────────────────────────────────────────

#[derive(Deserialize)]
pub struct DistrictsQuery {
    pub q: Option<String>,
    pub limit: Option<String>,
}

#[derive(Serialize)]
pub struct DistrictsResponse {
    pub districts: Vec<String>,
    #[serde(rename = "hasMore")]
    pub has_more: bool,
}

pub async fn districts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DistrictsQuery>,
) -> Json<DistrictsResponse> {
    // Unparseable limits (`abc`, `-1`) fall back to the default.
    let limit = params
        .limit
        .and_then(|l| l.trim().parse::<usize>().ok())
        .unwrap_or(DEFAULT_MAX_RESULTS)
        .clamp(1, MAX_DISTRICT_LIMIT);
    let query = params.q.unwrap_or_default();

    let mut found = state.gazetteer.search(&query, limit + 1);
    let has_more = found.len() > limit;
    found.truncate(limit);
    let districts = found.into_iter().map(str::to_string).collect();

    Json(DistrictsResponse { districts, has_more })
}
