//! src/timestamp.rs
//! Local-time timestamp rendering with a bounded degradation path.

use std::fmt::Write as _;

use chrono::{DateTime, Local};

/// Timestamp format applied to every line until reconfigured.
///
/// strftime semantics: time of day, two spaces, day-month-year.
pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%T  %d-%m-%Y";

/// Renders `now` into `buf` using the strftime-style `format`.
///
/// The buffer is cleared first so it only ever holds the current call's
/// timestamp. The format string is not validated anywhere; if it contains a
/// specifier chrono cannot render, the timestamp field for that line degrades
/// to empty rather than failing the write.
pub(crate) fn render_into(buf: &mut String, format: &str, now: &DateTime<Local>) {
    buf.clear();
    if write!(buf, "{}", now.format(format)).is_err() {
        buf.clear();
    }
}
