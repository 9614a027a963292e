//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tracing::warn;

use crate::domain::StopId;
use crate::hood::{NeighborhoodQuery, QueryError, Resolver};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/location", get(location))
        .route("/stations", get(stations))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plain-text index listing the endpoints.
async fn index() -> &'static str {
    "subway neighborhood server\n\
     \n\
     GET /location?latitude=40.7347179&longitude=-73.9911541&count=20\n\
     GET /stations?ids=A46,L14\n\
     GET /health\n"
}

/// Resolve the neighborhood around a point.
async fn location(
    State(state): State<AppState>,
    Query(req): Query<LocationRequest>,
) -> Result<Json<LocationResponse>, AppError> {
    let latitude = parse_coordinate(req.latitude.as_deref(), "latitude")?;
    let longitude = parse_coordinate(req.longitude.as_deref(), "longitude")?;
    let count = req
        .count
        .unwrap_or(NeighborhoodQuery::DEFAULT_RESULT_COUNT);

    let query = NeighborhoodQuery::with_count(latitude, longitude, count);
    let resolver = Resolver::new(&state.directory, &state.topology);
    let neighborhood = resolver.resolve(&query)?;

    Ok(Json(LocationResponse::from_neighborhood(&neighborhood)))
}

/// Look up station records by id.
async fn stations(
    State(state): State<AppState>,
    Query(req): Query<StationsRequest>,
) -> Result<Json<StationsResponse>, AppError> {
    let ids = req.ids.as_deref().ok_or_else(|| AppError::BadRequest {
        message: "please provide a comma-separated ids parameter: /stations?ids=A46,L14"
            .to_string(),
    })?;

    let stations = ids
        .split(',')
        .filter_map(|raw| {
            let id = StopId::parse(raw.trim()).ok()?;
            state.directory.lookup(&id)
        })
        .map(StationResult::from_record)
        .collect();

    Ok(Json(StationsResponse { stations }))
}

/// Parse a required coordinate parameter.
fn parse_coordinate(value: Option<&str>, field: &'static str) -> Result<f64, AppError> {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .ok_or_else(|| AppError::BadRequest {
            message: format!(
                "please provide a proper query string with latitude and longitude: \
                 /location?latitude=40.7347179&longitude=-73.9911541 (bad {field})"
            ),
        })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Internal { message: String },
}

impl From<QueryError> for AppError {
    fn from(e: QueryError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
