use crate::util::fallback_disabled_style;
use chrono::NaiveDate;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::WidgetRef;
use ratatui::widgets::Widget;

/// Marker rendered in the last column of a highlighted day.
pub const HIGHLIGHT_MARKER: &str = "•";

/// Render state of a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayKind {
    /// Filler before the first or after the last day.
    Blank,
    /// The selected day.
    Selected,
    /// Outside of min/max.
    Disabled,
    /// Any other day.
    Enabled,
}

/// Renders one day of the grid.
///
/// Everything is derived from the inputs, the state is resolved
/// in the order blank, selected, disabled, enabled.
/// Disabled days without a disabled style fall back to dark gray.
/// The highlight marker is added on top of any of those.
#[derive(Debug, Default, Clone)]
pub struct DayCell {
    day: Option<u32>,
    date: Option<NaiveDate>,
    selected: bool,
    today: bool,
    highlighted: bool,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,

    style: Style,
    day_style: Option<Style>,
    select_style: Option<Style>,
    today_style: Option<Style>,
    disabled_style: Option<Style>,
    highlight_style: Option<Style>,
}

impl DayCell {
    /// Day with its date.
    pub fn new(day: u32, date: NaiveDate) -> Self {
        Self {
            day: Some(day),
            date: Some(date),
            ..Default::default()
        }
    }

    /// Empty slot.
    pub fn blank() -> Self {
        Self::default()
    }

    #[inline]
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    #[inline]
    pub fn today(mut self, today: bool) -> Self {
        self.today = today;
        self
    }

    #[inline]
    pub fn highlighted(mut self, highlighted: bool) -> Self {
        self.highlighted = highlighted;
        self
    }

    /// Selectable range.
    #[inline]
    pub fn bounds(mut self, min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        self.min_date = min_date;
        self.max_date = max_date;
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[inline]
    pub fn day_style(mut self, style: Option<Style>) -> Self {
        self.day_style = style;
        self
    }

    #[inline]
    pub fn select_style(mut self, style: Option<Style>) -> Self {
        self.select_style = style;
        self
    }

    #[inline]
    pub fn today_style(mut self, style: Option<Style>) -> Self {
        self.today_style = style;
        self
    }

    #[inline]
    pub fn disabled_style(mut self, style: Option<Style>) -> Self {
        self.disabled_style = style;
        self
    }

    #[inline]
    pub fn highlight_style(mut self, style: Option<Style>) -> Self {
        self.highlight_style = style;
        self
    }

    /// Resolved render state.
    pub fn kind(&self) -> DayKind {
        if self.day.is_none() {
            DayKind::Blank
        } else if self.selected {
            DayKind::Selected
        } else if self.is_out_of_bounds() {
            DayKind::Disabled
        } else {
            DayKind::Enabled
        }
    }

    fn is_out_of_bounds(&self) -> bool {
        let Some(date) = self.date else {
            return false;
        };
        self.min_date.map(|v| date < v).unwrap_or(false)
            || self.max_date.map(|v| date > v).unwrap_or(false)
    }

    /// Does a tap do anything.
    pub fn is_interactive(&self) -> bool {
        matches!(self.kind(), DayKind::Selected | DayKind::Enabled)
    }

    /// Tap the cell. Returns the day number for an interactive cell.
    pub fn tap(&self) -> Option<u32> {
        if self.is_interactive() {
            self.day
        } else {
            None
        }
    }

    /// Style of the day number.
    pub fn text_style(&self) -> Style {
        let base = self.style.patch(self.day_style.unwrap_or_default());
        let today = if self.today {
            self.today_style.unwrap_or_default()
        } else {
            Style::default()
        };
        match self.kind() {
            DayKind::Blank => self.style,
            DayKind::Selected => base.patch(self.select_style.unwrap_or_default()),
            DayKind::Disabled => base
                .patch(fallback_disabled_style(
                    self.disabled_style.unwrap_or_default(),
                ))
                .patch(today),
            DayKind::Enabled => base.patch(today),
        }
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl WidgetRef for DayCell {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        render_ref(self, area, buf);
    }
}

impl Widget for DayCell {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_ref(&self, area, buf);
    }
}

fn render_ref(widget: &DayCell, area: Rect, buf: &mut Buffer) {
    if area.is_empty() {
        return;
    }

    let Some(day) = widget.day else {
        buf.set_style(area, widget.style);
        return;
    };

    let style = widget.text_style();
    buf.set_style(area, style);

    let text_y = area.y + area.height / 2;
    let text_width = area.width.saturating_sub(1);
    let text_area = Rect::new(area.x, text_y, text_width, 1);
    Span::from(format!("{:>1$}", day, text_width as usize))
        .style(style)
        .render(text_area, buf);

    if widget.highlighted {
        let marker_area = Rect::new(area.x + text_width, text_y, 1, 1);
        Span::from(HIGHLIGHT_MARKER)
            .style(style.patch(widget.highlight_style.unwrap_or_default()))
            .render(marker_area, buf);
    }
}
