use chrono::{Datelike, NaiveDate};
use rat_calendar_picker::picker::dates::{
    days_in_month, default_weekdays, first_of_month, is_leap_year, weekday_offset, WeekStart,
    WEEKDAYS,
};

#[test]
fn test_leap_rule() {
    assert!(is_leap_year(1996));
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert!(!is_leap_year(2023));
}

#[test]
fn test_days_in_month() {
    assert_eq!(days_in_month(0, 2024), 31);
    assert_eq!(days_in_month(1, 2024), 29);
    assert_eq!(days_in_month(1, 2023), 28);
    assert_eq!(days_in_month(1, 1900), 28);
    assert_eq!(days_in_month(1, 2000), 29);
    assert_eq!(days_in_month(3, 2024), 30);
    assert_eq!(days_in_month(11, 2024), 31);
    assert_eq!(days_in_month(12, 2024), 0);
}

#[test]
fn test_first_of_month() {
    assert_eq!(
        first_of_month(1, 2024),
        NaiveDate::from_ymd_opt(2024, 2, 1)
    );
    assert_eq!(first_of_month(12, 2024), None);
}

#[test]
fn test_offset() {
    // 2024-09-01 is a sunday
    assert_eq!(weekday_offset(8, 2024, WeekStart::Sunday), 0);
    assert_eq!(weekday_offset(8, 2024, WeekStart::Monday), 6);
    // 2024-02-01 is a thursday
    assert_eq!(weekday_offset(1, 2024, WeekStart::Sunday), 4);
    assert_eq!(weekday_offset(1, 2024, WeekStart::Monday), 3);
}

#[test]
fn test_offset_matches_chrono() {
    for year in 2020..2030 {
        for month in 0..12 {
            let first = NaiveDate::from_ymd_opt(year, month + 1, 1).expect("date");
            assert_eq!(
                weekday_offset(month, year, WeekStart::Sunday),
                first.weekday().num_days_from_sunday() as usize
            );
        }
    }
}

#[test]
fn test_weekdays() {
    assert_eq!(default_weekdays(WeekStart::Sunday), WEEKDAYS);
    assert_eq!(
        default_weekdays(WeekStart::Monday),
        ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"]
    );
}
