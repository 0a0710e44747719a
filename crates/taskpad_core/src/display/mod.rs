//! Display helpers shared by presentation layers.
//!
//! # Responsibility
//! - Render creation timestamps for human consumption.
//! - Escape user-supplied titles before they reach any markup sink.
//!
//! # Invariants
//! - `format_timestamp` never panics; bad input degrades to a sentinel.
//! - Titles are rendered as plain text only. Raw interpolation of a title
//!   into markup is a script-injection hole and must not come back.

use chrono::{LocalResult, TimeZone, Utc};

/// Sentinel for a missing timestamp.
pub const NO_DATE: &str = "no date";
/// Sentinel for a timestamp outside the representable range.
pub const INVALID_DATE: &str = "invalid date";

/// Formats an epoch-milliseconds timestamp for display.
///
/// `None` yields [`NO_DATE`]; an out-of-range value yields [`INVALID_DATE`].
pub fn format_timestamp(epoch_ms: Option<i64>) -> String {
    let Some(ms) = epoch_ms else {
        return NO_DATE.to_string();
    };
    match Utc.timestamp_millis_opt(ms) {
        LocalResult::Single(moment) => moment.format("%-d %B %Y, %H:%M").to_string(),
        _ => INVALID_DATE.to_string(),
    }
}

/// Escapes markup-significant characters in a user-supplied title.
pub fn escape_title(title: &str) -> String {
    let mut escaped = String::with_capacity(title.len());
    for ch in title.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}
