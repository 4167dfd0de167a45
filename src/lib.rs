//! Iron Speed Calc: estimates golf clubhead speed from an iron's carry
//! distance and serves the calculator over HTTP.

pub mod api;
pub mod config;
pub mod models;
pub mod services;
pub mod utils;

pub use config::{Config, ConfigError};
pub use models::{ClubId, EstimationResult, SpeedStatus};
pub use services::estimate;
