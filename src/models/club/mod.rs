pub mod club;

pub use club::{profiles, ClubId, ClubParseError, ClubProfile};
