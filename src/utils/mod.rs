pub mod render;

pub use render::{render_error_page, render_page, render_result};
