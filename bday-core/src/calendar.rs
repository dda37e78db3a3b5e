//! Month grid generation for the calendar view.
//!
//! Produces whole weeks (Sunday through Saturday) covering a month, with
//! each day carrying the reminders whose birthday falls on it. Callers
//! render the grid; this module only computes it.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::date::{end_of_week, occurs_on, start_of_week};
use crate::error::{BdayError, BdayResult};
use crate::reminder::Reminder;

/// Column headers for a Sunday-first week.
pub const WEEKDAY_LABELS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// One cell of the month grid.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: NaiveDate,
    /// False for the leading/trailing days padding the first and last week.
    pub is_current_month: bool,
    pub is_today: bool,
    pub reminders: Vec<Reminder>,
}

/// Build the grid of days shown for `year`/`month`: from the Sunday at or
/// before the 1st through the Saturday at or after the month's last day.
/// The result length is always a multiple of 7.
pub fn month_grid(
    year: i32,
    month: u32,
    today: NaiveDate,
    reminders: &[Reminder],
) -> BdayResult<Vec<CalendarDay>> {
    let month_start = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| BdayError::Validation(format!("Invalid month {year}-{month:02}")))?;
    let month_end = last_day_of_month(month_start);

    let grid_start = start_of_week(month_start);
    let grid_end = end_of_week(month_end);

    let mut days = Vec::with_capacity(42);
    let mut date = grid_start;
    loop {
        days.push(CalendarDay {
            date,
            is_current_month: date.month() == month && date.year() == year,
            is_today: date == today,
            reminders: reminders
                .iter()
                .filter(|r| occurs_on(r.birthday, date))
                .cloned()
                .collect(),
        });
        if date == grid_end {
            break;
        }
        date = match date.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(days)
}

fn last_day_of_month(month_start: NaiveDate) -> NaiveDate {
    let (year, month) = (month_start.year(), month_start.month());
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    // The first of the next month always exists and has a predecessor
    next_month_start.and_then(|d| d.pred_opt()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reminder::Relationship;
    use chrono::{TimeZone, Utc};

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn reminder(id: &str, birthday: NaiveDate) -> Reminder {
        Reminder {
            id: id.to_string(),
            user_id: "usr-1".to_string(),
            person_name: "Test Person".to_string(),
            relationship: Relationship::Friend,
            birthday,
            notes: None,
            phone: None,
            send_reminder: true,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_grid_is_whole_weeks() {
        // March 2024: Fri Mar 1 through Sun Mar 31 -> Feb 25 to Apr 6, 6 weeks
        let days = month_grid(2024, 3, d(2024, 3, 15), &[]).unwrap();
        assert_eq!(days.len() % 7, 0);
        assert_eq!(days.len(), 42);
        assert_eq!(days.first().unwrap().date, d(2024, 2, 25));
        assert_eq!(days.last().unwrap().date, d(2024, 4, 6));
    }

    #[test]
    fn test_grid_exact_weeks_when_month_aligns() {
        // June 2025: Sun Jun 1 through Mon Jun 30 -> 5 weeks ending Jul 5
        let days = month_grid(2025, 6, d(2025, 6, 1), &[]).unwrap();
        assert_eq!(days.len(), 35);
        assert_eq!(days.first().unwrap().date, d(2025, 6, 1));
        assert_eq!(days.last().unwrap().date, d(2025, 7, 5));
    }

    #[test]
    fn test_grid_membership_and_today_flags() {
        let days = month_grid(2024, 3, d(2024, 3, 15), &[]).unwrap();
        let feb_day = days.iter().find(|day| day.date == d(2024, 2, 29)).unwrap();
        assert!(!feb_day.is_current_month);
        let mar_day = days.iter().find(|day| day.date == d(2024, 3, 15)).unwrap();
        assert!(mar_day.is_current_month);
        assert!(mar_day.is_today);
        assert_eq!(days.iter().filter(|day| day.is_today).count(), 1);
        assert_eq!(days.iter().filter(|day| day.is_current_month).count(), 31);
    }

    #[test]
    fn test_grid_places_reminders_by_birthday() {
        let reminders = vec![
            reminder("rem-1", d(1990, 3, 15)),
            reminder("rem-2", d(1985, 3, 15)),
            reminder("rem-3", d(2000, 7, 4)),
        ];
        let days = month_grid(2024, 3, d(2024, 3, 1), &reminders).unwrap();
        let ides = days.iter().find(|day| day.date == d(2024, 3, 15)).unwrap();
        assert_eq!(ides.reminders.len(), 2);
        assert!(days
            .iter()
            .filter(|day| day.date != d(2024, 3, 15))
            .all(|day| day.reminders.is_empty()));
    }

    #[test]
    fn test_grid_leap_birthday_on_feb_28_in_common_year() {
        let reminders = vec![reminder("rem-1", d(2000, 2, 29))];
        let days = month_grid(2023, 2, d(2023, 2, 1), &reminders).unwrap();
        let feb28 = days.iter().find(|day| day.date == d(2023, 2, 28)).unwrap();
        assert_eq!(feb28.reminders.len(), 1);
    }

    #[test]
    fn test_grid_rejects_invalid_month() {
        assert!(matches!(
            month_grid(2024, 13, d(2024, 3, 1), &[]),
            Err(BdayError::Validation(_))
        ));
    }
}
