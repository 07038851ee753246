use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_time;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Parse the operator's cutoff time ("HH:MM").
pub fn parse_cutoff(s: &str) -> AppResult<NaiveTime> {
    parse_time(s.trim()).ok_or_else(|| AppError::InvalidTime(s.to_string()))
}

pub fn deadline_for(date: NaiveDate, cutoff: NaiveTime) -> NaiveDateTime {
    date.and_time(cutoff)
}

/// Deadline on today's date. Rebuilt for every scan since a session may
/// run past midnight.
pub fn deadline_today(cutoff: NaiveTime) -> NaiveDateTime {
    deadline_for(Local::now().date_naive(), cutoff)
}
