use chrono::NaiveDate;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Invalid picker configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerError {
    /// min_date is after max_date.
    InvalidBounds { min: NaiveDate, max: NaiveDate },
    /// A highlighted day outside 1..=31.
    InvalidHighlight(u32),
}

impl Display for PickerError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            PickerError::InvalidBounds { min, max } => {
                write!(f, "invalid bounds: min date {} is after max date {}", min, max)
            }
            PickerError::InvalidHighlight(day) => {
                write!(f, "invalid highlighted day: {}", day)
            }
        }
    }
}

impl Error for PickerError {}
