pub mod speed_service;

pub use speed_service::{estimate, parse_yardage};
