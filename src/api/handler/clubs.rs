use crate::models::{profiles, ClubProfile};
use axum::Json;

pub async fn clubs_handler() -> Json<&'static [ClubProfile]> {
    Json(profiles())
}

pub async fn health_handler() -> &'static str {
    "OK"
}
