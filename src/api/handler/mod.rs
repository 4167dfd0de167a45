pub mod clubs;
pub mod estimate;
pub mod page;

pub use clubs::{clubs_handler, health_handler};
pub use estimate::{estimate_body_handler, estimate_query_handler, resolve_club};
pub use page::page_handler;
