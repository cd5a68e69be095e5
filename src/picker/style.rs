use crate::_private::NonExhaustive;
use ratatui::style::{Style, Stylize};
use ratatui::widgets::Block;
#[cfg(feature = "serde")]
use serde_derive::{Deserialize, Serialize};

/// The default metrics are made for this screen width.
/// Other widths scale from here.
pub const REFERENCE_WIDTH: u16 = 28;

/// Sizes of the parts of the picker.
///
/// These are derived from a scale factor, see [PickerMetrics::scaled].
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickerMetrics {
    /// Width of one day cell.
    /// The last column of a cell is the highlight marker.
    pub day_width: u16,
    /// Height of one week row.
    pub row_height: u16,
    /// Height of the header.
    pub header_height: u16,
    /// Height of the weekday labels.
    pub weekday_height: u16,
}

impl Default for PickerMetrics {
    fn default() -> Self {
        Self::scaled(1.0)
    }
}

impl PickerMetrics {
    /// Metrics for a scale factor. 1.0 gives a 28 column wide grid.
    pub fn scaled(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        // 7 * day_width and header + weekday + 6 * row must fit in u16.
        let limit = (u16::MAX / 7) as f32;
        let rows = scale.round().min(limit) as u16;
        Self {
            day_width: ((4.0 * scale).round().min(limit) as u16).max(3),
            row_height: rows.max(1),
            header_height: rows.max(1),
            weekday_height: 1,
        }
    }

    /// Scale factor for a given screen width.
    pub fn scale_for_width(width: u16) -> f32 {
        width as f32 / REFERENCE_WIDTH as f32
    }

    /// Width of the grid.
    pub fn width(&self) -> u16 {
        self.day_width.saturating_mul(7)
    }

    /// Height of header + weekdays + grid.
    pub fn height(&self) -> u16 {
        self.header_height
            .saturating_add(self.weekday_height)
            .saturating_add(self.row_height.saturating_mul(6))
    }
}

/// Composite style for the picker.
#[derive(Debug, Clone)]
pub struct PickerStyle {
    pub style: Style,
    /// Header line.
    pub header: Option<Style>,
    /// Month label in the header.
    pub title: Option<Style>,
    /// Previous/next controls.
    pub nav: Option<Style>,
    /// Weekday labels.
    pub weekday: Option<Style>,
    /// Regular day.
    pub day: Option<Style>,
    /// Selected day.
    pub select: Option<Style>,
    /// Today.
    pub today: Option<Style>,
    /// Days outside of min/max and disabled controls.
    pub disabled: Option<Style>,
    /// Highlight marker.
    pub highlight: Option<Style>,
    /// Focused widget.
    pub focus: Option<Style>,
    pub block: Option<Block<'static>>,
    pub metrics: PickerMetrics,
    pub non_exhaustive: NonExhaustive,
}

impl Default for PickerStyle {
    fn default() -> Self {
        Self {
            style: Default::default(),
            header: None,
            title: None,
            nav: None,
            weekday: None,
            day: None,
            select: None,
            today: None,
            disabled: None,
            highlight: None,
            focus: None,
            block: None,
            metrics: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

/// Signature of a style generator.
pub type MakeStyles = fn(f32) -> PickerStyle;

/// The default style generator.
pub fn make_styles(scale: f32) -> PickerStyle {
    PickerStyle {
        style: Style::new(),
        header: Some(Style::new()),
        title: Some(Style::new().bold()),
        nav: Some(Style::new().cyan()),
        weekday: Some(Style::new().gray()),
        day: Some(Style::new()),
        select: Some(Style::new().black().on_green()),
        today: Some(Style::new().bold().underlined()),
        disabled: Some(Style::new().dark_gray()),
        highlight: Some(Style::new().yellow()),
        focus: Some(Style::new().black().on_cyan()),
        block: None,
        metrics: PickerMetrics::scaled(scale),
        non_exhaustive: NonExhaustive,
    }
}
