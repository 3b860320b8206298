//! Calendar-day helpers shared across the crate.
//!
//! All habit history is kept at day granularity. Days parse from and
//! render to `YYYY-MM-DD`; differences are whole-day counts.

use chrono::NaiveDate;

use crate::error::Result;

/// Canonical day format for user input and rendered output.
pub const DAY_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar day.
///
/// Non-existent dates such as `2024-02-30` are rejected.
pub fn parse_day(input: &str) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(input, DAY_FORMAT)?)
}

/// Signed number of whole days from `earlier` to `later`.
///
/// Positive when `later` is after `earlier`, negative when before.
pub fn days_between(earlier: NaiveDate, later: NaiveDate) -> i64 {
    (later - earlier).num_days()
}
