pub mod result;

pub use result::{EstimationResult, Joke, SpeedStatus};
