//!
//! Calendar date-picker.
//!
//! There's one widget [CalendarPicker] that renders a month page
//! with a header, a row of weekday labels and the day grid.
//! All the state lives in [CalendarPickerState], which is the
//! single source of truth for the selected date and the displayed
//! month.
//!
//! The parts are usable on their own too: [DayCell], [DayGrid],
//! [WeekdayLabels] and [HeaderControls].
//!

mod config;
pub mod dates;
mod day;
mod error;
pub(crate) mod event;
mod grid;
mod header;
#[allow(clippy::module_inception)]
mod picker;
mod style;
mod weekdays;

pub use config::*;
pub use day::*;
pub use error::*;
pub use grid::*;
pub use header::*;
pub use picker::*;
pub use style::*;
pub use weekdays::*;
