use crate::picker::dates::WeekStart;
use crate::picker::error::PickerError;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// What happens to the selected day when the month or the year
/// changes and the new month is shorter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOverflow {
    /// Clamp the day to the last day of the new month.
    /// 31st of January + 1 month gives the 29th/28th of February.
    #[default]
    Clamp,
    /// Keep the day and let the date run over into the
    /// following month.
    /// 31st of January + 1 month gives the 2nd/3rd of March.
    ///
    /// Only the selected date runs over. The displayed month stays
    /// on the month that was navigated to, the header label shows the
    /// unclamped day ("February 31, 2024") and the grid has no
    /// selected day.
    Rollover,
}

/// Behavioural configuration for a [CalendarPickerState](crate::picker::CalendarPickerState).
///
/// The config is fixed for the lifetime of the state.
/// It's checked when the state is created, see [PickerConfig::validate].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PickerConfig {
    /// Earliest selectable date. Inclusive.
    pub min_date: Option<NaiveDate>,
    /// Latest selectable date. Inclusive.
    pub max_date: Option<NaiveDate>,
    /// First column of the week.
    pub week_start: WeekStart,
    /// Highlighted days of the month. These are highlighted
    /// in every month that is displayed.
    pub highlighted_days: Vec<u32>,
    /// Day overflow policy.
    pub day_overflow: DayOverflow,
}

impl PickerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Earliest selectable date.
    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    /// Latest selectable date.
    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    /// Weeks start with Monday.
    pub fn start_from_monday(mut self, monday: bool) -> Self {
        self.week_start = if monday {
            WeekStart::Monday
        } else {
            WeekStart::Sunday
        };
        self
    }

    /// Days of the month that get highlighted.
    pub fn highlighted_days(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.highlighted_days = days.into_iter().collect();
        self
    }

    /// Day overflow policy.
    pub fn day_overflow(mut self, overflow: DayOverflow) -> Self {
        self.day_overflow = overflow;
        self
    }

    /// Checks the bounds and the highlighted days.
    pub fn validate(&self) -> Result<(), PickerError> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(PickerError::InvalidBounds { min, max });
            }
        }
        if let Some(day) = self
            .highlighted_days
            .iter()
            .find(|v| !(1..=31).contains(*v))
        {
            return Err(PickerError::InvalidHighlight(*day));
        }
        Ok(())
    }

    /// Is the date within min_date/max_date.
    pub fn in_bounds(&self, date: NaiveDate) -> bool {
        if let Some(min) = self.min_date {
            if date < min {
                return false;
            }
        }
        if let Some(max) = self.max_date {
            if date > max {
                return false;
            }
        }
        true
    }

    /// Is the day of month highlighted.
    pub fn is_highlighted(&self, day: u32) -> bool {
        self.highlighted_days.contains(&day)
    }
}
