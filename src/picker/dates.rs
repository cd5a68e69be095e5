//!
//! Calendar arithmetic.
//!
//! Months are 0-based (0 = January) throughout the picker,
//! days are 1-based.
//!

use chrono::{Datelike, NaiveDate};
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// Default weekday labels, starting with Sunday.
pub const WEEKDAYS: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Default month labels.
pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Week rows of the day grid.
/// Six rows fit any month with any starting weekday.
pub const MAX_ROWS: usize = 6;
/// Day columns of the day grid.
pub const MAX_COLUMNS: usize = 7;
/// Number of slots in the day grid.
pub const GRID_SLOTS: usize = MAX_ROWS * MAX_COLUMNS;

/// First column of the week.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

/// Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days for the 0-based month.
///
/// Returns 0 for a month outside 0..12.
pub fn days_in_month(month: u32, year: i32) -> u32 {
    match month {
        0 | 2 | 4 | 6 | 7 | 9 | 11 => 31,
        3 | 5 | 8 | 10 => 30,
        1 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// First day of the 0-based month.
pub fn first_of_month(month: u32, year: i32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)
}

/// Number of blank slots before the first day of the month.
pub fn weekday_offset(month: u32, year: i32, start: WeekStart) -> usize {
    let Some(first) = first_of_month(month, year) else {
        return 0;
    };
    match start {
        WeekStart::Sunday => first.weekday().num_days_from_sunday() as usize,
        WeekStart::Monday => first.weekday().num_days_from_monday() as usize,
    }
}

/// Default weekday labels in display order.
pub fn default_weekdays(start: WeekStart) -> [&'static str; 7] {
    let mut labels = WEEKDAYS;
    if start == WeekStart::Monday {
        labels.rotate_left(1);
    }
    labels
}

/// Clamps the day to 1..=days_in_month.
pub(crate) fn clamp_day(month: u32, year: i32, day: u32) -> u32 {
    day.clamp(1, days_in_month(month, year).max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leap() {
        assert!(is_leap_year(2024));
        assert!(is_leap_year(2000));
        assert!(!is_leap_year(1900));
        assert!(!is_leap_year(2023));
    }

    #[test]
    fn test_days_against_chrono() {
        for year in [1899, 1900, 1999, 2000, 2023, 2024, 2100] {
            for month in 0..12 {
                let first = first_of_month(month, year).expect("date");
                let next = if month == 11 {
                    NaiveDate::from_ymd_opt(year + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(year, month + 2, 1)
                }
                .expect("date");
                let n = next.signed_duration_since(first).num_days() as u32;
                assert_eq!(days_in_month(month, year), n, "{}-{}", year, month);
            }
        }
    }

    #[test]
    fn test_clamp_day() {
        assert_eq!(clamp_day(1, 2024, 31), 29);
        assert_eq!(clamp_day(1, 2023, 31), 28);
        assert_eq!(clamp_day(0, 2024, 31), 31);
        assert_eq!(clamp_day(0, 2024, 0), 1);
    }
}
