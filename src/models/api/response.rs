use crate::models::{ClubId, EstimationResult, SpeedStatus};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Error,
    Normal,
}

// JSON shape of an estimation, absent fields are omitted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub kind: ResultKind,
    pub club: ClubId,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<SpeedStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed_mph: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delta_mph: Option<i64>,
}

impl EstimateResponse {
    pub fn new(club: ClubId, result: &EstimationResult) -> Self {
        match *result {
            EstimationResult::Joke(joke) => EstimateResponse {
                kind: ResultKind::Error,
                club,
                label: joke.label().to_string(),
                message: Some(joke.message().to_string()),
                status: None,
                speed_mph: None,
                delta_mph: None,
            },
            EstimationResult::Normal {
                club,
                speed_mph,
                delta_mph,
                status,
            } => EstimateResponse {
                kind: ResultKind::Normal,
                club,
                label: speed_mph.to_string(),
                message: None,
                status: Some(status),
                speed_mph: Some(speed_mph),
                delta_mph: Some(delta_mph),
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
