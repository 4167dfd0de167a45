// src/models/mod.rs

pub mod api;
pub mod app;
pub mod club;
pub mod estimate;

pub use api::{EstimateBody, EstimateParams, EstimateResponse, ErrorResponse, ResultKind};
pub use app::AppState;
pub use club::{profiles, ClubId, ClubParseError, ClubProfile};
pub use estimate::{EstimationResult, Joke, SpeedStatus};
