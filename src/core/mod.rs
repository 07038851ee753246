pub mod card;
pub mod checkin;
pub mod classifier;
pub mod deadline;
pub mod export;
pub mod highlight;
pub mod log;
pub mod punch;
pub mod session;
pub mod status;

pub use card::CardLogic;
pub use classifier::classify;
pub use highlight::{HighlightEvent, HighlightSpec, plan_highlights};
pub use punch::{MatchResult, PunchLogic};
