pub mod messages;
pub mod panel;
