use crate::api::error::ApiError;
use crate::models::{AppState, ClubId, ClubParseError, EstimateBody, EstimateParams, EstimateResponse};
use crate::services::estimate;
use axum::extract::{Json, Query, State};
use log::{info, warn};

/// Picks the requested club, falling back to the configured default when
/// the request leaves it out or blank.
pub fn resolve_club(requested: Option<&str>, default: ClubId) -> Result<ClubId, ClubParseError> {
    match requested.map(str::trim) {
        None | Some("") => Ok(default),
        Some(id) => id.parse(),
    }
}

fn respond(state: &AppState, params: EstimateParams) -> Result<Json<EstimateResponse>, ApiError> {
    let club = resolve_club(params.club.as_deref(), state.config.default_club).map_err(|e| {
        warn!("Rejected estimate request: {}", e);
        e
    })?;
    let result = estimate(club, params.yards.as_deref());
    info!("Estimate for club {}: {}", club, result);

    Ok(Json(EstimateResponse::new(club, &result)))
}

pub async fn estimate_query_handler(
    State(state): State<AppState>,
    Query(params): Query<EstimateParams>,
) -> Result<Json<EstimateResponse>, ApiError> {
    respond(&state, params)
}

pub async fn estimate_body_handler(
    State(state): State<AppState>,
    Json(body): Json<EstimateBody>,
) -> Result<Json<EstimateResponse>, ApiError> {
    respond(&state, body.into())
}
