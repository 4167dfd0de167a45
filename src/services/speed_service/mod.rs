pub mod estimate;
pub mod yardage;

pub use estimate::estimate;
pub use yardage::parse_yardage;
