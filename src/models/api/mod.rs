// src/models/api/mod.rs

pub mod params;
pub mod response;

pub use params::{EstimateBody, EstimateParams, RawYardage};
pub use response::{ErrorResponse, EstimateResponse, ResultKind};
