use super::estimate::resolve_club;
use crate::models::{AppState, EstimateParams};
use crate::services::{estimate, parse_yardage};
use crate::utils::{render_error_page, render_page};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use log::warn;

// Calculator form, answers its own submissions through the query string
pub async fn page_handler(
    State(state): State<AppState>,
    Query(params): Query<EstimateParams>,
) -> Response {
    let club = match resolve_club(params.club.as_deref(), state.config.default_club) {
        Ok(club) => club,
        Err(e) => {
            warn!("Rejected page request: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Html(render_error_page(
                    "Unknown club. Pick one of 4, 5, 6, 7, 8, 9 or PW.",
                )),
            )
                .into_response();
        }
    };

    let raw_yards = params.yards.as_deref();
    let result = raw_yards.map(|raw| estimate(club, Some(raw)));
    let echo = raw_yards.and_then(parse_yardage);

    Html(render_page(club, echo, result.as_ref())).into_response()
}
