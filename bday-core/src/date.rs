//! Birthday date arithmetic.
//!
//! All functions take the reference date ("today") as an explicit parameter
//! rather than reading the clock, so results are deterministic and testable.
//! A birthday recurs on its (month, day) pair; the stored year only matters
//! for age.
//!
//! Leap-day rule: a Feb 29 birthday falls on Feb 28 in common years. Age
//! ticks over on Feb 28, and the yearly occurrence never lands on Mar 1.

use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{BdayError, BdayResult};

/// Output style for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFormat {
    /// "Mar 15"
    Short,
    /// "Friday, March 15, 2024"
    Long,
}

/// Parse an ISO `YYYY-MM-DD` birthday string.
pub fn parse_birthday(input: &str) -> BdayResult<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| BdayError::Parse(format!("Invalid date '{input}'. Expected YYYY-MM-DD")))
}

/// The anniversary of `birthday` within `year`, applying the leap-day rule.
fn anniversary_in_year(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day()).unwrap_or_else(|| {
        // Only reachable for Feb 29 in a common year
        NaiveDate::from_ymd_opt(year, 2, 28).unwrap()
    })
}

/// Completed years from `birthday` to `today`.
pub fn age(birthday: NaiveDate, today: NaiveDate) -> i32 {
    let years = today.year() - birthday.year();
    if today < anniversary_in_year(birthday, today.year()) {
        years - 1
    } else {
        years
    }
}

/// The next calendar date sharing `birthday`'s (month, day) at or after `today`.
pub fn next_occurrence(birthday: NaiveDate, today: NaiveDate) -> NaiveDate {
    let this_year = anniversary_in_year(birthday, today.year());
    if this_year < today {
        anniversary_in_year(birthday, today.year() + 1)
    } else {
        this_year
    }
}

/// Days from `today` to the next occurrence of `birthday`. 0 means today.
pub fn days_until_next_occurrence(birthday: NaiveDate, today: NaiveDate) -> i64 {
    (next_occurrence(birthday, today) - today).num_days()
}

/// Whether `birthday`'s yearly occurrence falls on `date`, ignoring year.
pub fn occurs_on(birthday: NaiveDate, date: NaiveDate) -> bool {
    anniversary_in_year(birthday, date.year()) == date
}

/// Human-readable label for how far away the next occurrence is:
/// "Today", "Tomorrow", "In N days" (under a week), "In N weeks" (under a
/// month, rounded up), else the short-formatted date.
pub fn relative_label(birthday: NaiveDate, today: NaiveDate) -> String {
    let days = days_until_next_occurrence(birthday, today);
    match days {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        2..=6 => format!("In {days} days"),
        7..=29 => format!("In {} weeks", (days + 6) / 7),
        _ => format_date(next_occurrence(birthday, today), DateFormat::Short),
    }
}

/// Format a date for display.
pub fn format_date(date: NaiveDate, format: DateFormat) -> String {
    match format {
        DateFormat::Short => date.format("%b %-d").to_string(),
        DateFormat::Long => date.format("%A, %B %-d, %Y").to_string(),
    }
}

/// Sunday at or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

/// Saturday at or after `date`.
pub fn end_of_week(date: NaiveDate) -> NaiveDate {
    date + Duration::days(6 - date.weekday().num_days_from_sunday() as i64)
}
