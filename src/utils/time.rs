//! Time utilities: parsing HH:MM and formatting check-in instants.

use chrono::{NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t, "%H:%M").ok()
}

/// "HH:MM:SS" for today's panel, "--:--:--" when never checked in.
pub fn format_check_in(t: Option<NaiveDateTime>) -> String {
    t.map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "--:--:--".to_string())
}
