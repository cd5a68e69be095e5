use chrono::NaiveDate;
use rat_calendar_picker::picker::dates::WeekStart;
use rat_calendar_picker::picker::{DayOverflow, PickerConfig, PickerMetrics};

#[test]
fn test_config() -> Result<(), anyhow::Error> {
    let config = PickerConfig::new()
        .min_date(NaiveDate::from_ymd_opt(2024, 1, 1).expect("date"))
        .start_from_monday(true)
        .highlighted_days([1, 15])
        .day_overflow(DayOverflow::Rollover);

    let json = serde_json::to_string(&config)?;
    let back: PickerConfig = serde_json::from_str(&json)?;
    assert_eq!(back, config);
    assert_eq!(back.week_start, WeekStart::Monday);
    assert!(back.max_date.is_none());
    Ok(())
}

#[test]
fn test_config_from_file() -> Result<(), anyhow::Error> {
    let json = r#"{
        "min_date": null,
        "max_date": "2024-12-31",
        "week_start": "Sunday",
        "highlighted_days": [24],
        "day_overflow": "Clamp"
    }"#;
    let config: PickerConfig = serde_json::from_str(json)?;
    config.validate()?;
    assert!(config.is_highlighted(24));
    assert!(!config.is_highlighted(25));
    assert_eq!(config.max_date, NaiveDate::from_ymd_opt(2024, 12, 31));
    Ok(())
}

#[test]
fn test_metrics() -> Result<(), anyhow::Error> {
    let metrics = PickerMetrics::scaled(1.5);
    let json = serde_json::to_string(&metrics)?;
    let back: PickerMetrics = serde_json::from_str(&json)?;
    assert_eq!(back, metrics);
    Ok(())
}
