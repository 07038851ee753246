//! Formatting utilities used for CLI outputs.

use unicode_width::UnicodeWidthStr;

/// Pad to a display width, counting wide (CJK) characters as two columns.
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        ""
    };

    if short {
        // +02:25 / -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // +02h 25m / -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}
