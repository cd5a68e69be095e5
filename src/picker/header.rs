use crate::_private::NonExhaustive;
use crate::picker::dates::MONTHS;
use crate::picker::style::PickerStyle;
use crate::util::fallback_disabled_style;
use chrono::{Datelike, NaiveDate};
use rat_reloc::{relocate_area, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::StatefulWidgetRef;
use ratatui::widgets::{StatefulWidget, Widget};
use std::iter;

/// Default title of the previous control.
pub const PREVIOUS_TITLE: &str = "Previous";
/// Default title of the next control.
pub const NEXT_TITLE: &str = "Next";

/// Change notifications of one month step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Stepped from December to January.
    NextYear,
    /// Stepped from January to December.
    PrevYear,
    /// The new 0-based month.
    MonthChanged(u32),
}

/// Result of stepping the displayed month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavStep {
    /// Year rollover, if any.
    pub year: Option<NavEvent>,
    /// New 0-based month.
    pub month: u32,
}

impl NavStep {
    /// Notifications in the order they must be applied:
    /// the year change first, then the month change.
    pub fn events(&self) -> impl Iterator<Item = NavEvent> {
        self.year
            .into_iter()
            .chain(iter::once(NavEvent::MonthChanged(self.month)))
    }
}

/// Next month. Wraps from 11 to 0 with a year increment.
pub fn next_month(month: u32) -> NavStep {
    if month >= 11 {
        NavStep {
            year: Some(NavEvent::NextYear),
            month: 0,
        }
    } else {
        NavStep {
            year: None,
            month: month + 1,
        }
    }
}

/// Previous month. Wraps from 0 to 11 with a year decrement.
pub fn prev_month(month: u32) -> NavStep {
    if month == 0 {
        NavStep {
            year: Some(NavEvent::PrevYear),
            month: 11,
        }
    } else {
        NavStep {
            year: None,
            month: month - 1,
        }
    }
}

/// The previous control is disabled at or before the month of min_date.
pub fn is_prev_disabled(year: i32, month: u32, min_date: Option<NaiveDate>) -> bool {
    let Some(min_date) = min_date else {
        return false;
    };
    year < min_date.year() || (year == min_date.year() && month <= min_date.month0())
}

/// The next control is disabled at or after the month of max_date.
pub fn is_next_disabled(year: i32, month: u32, max_date: Option<NaiveDate>) -> bool {
    let Some(max_date) = max_date else {
        return false;
    };
    year > max_date.year() || (year == max_date.year() && month >= max_date.month0())
}

/// Header with previous/next controls and the month label.
///
/// All the values are plain configuration, the
/// [CalendarPickerState](crate::picker::CalendarPickerState) owns them.
#[derive(Debug, Default, Clone)]
pub struct HeaderControls<'a> {
    month: u32,
    year: i32,
    day: u32,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,

    months: Option<&'a [String; 12]>,
    previous_title: Option<Line<'a>>,
    next_title: Option<Line<'a>>,

    style: Style,
    title_style: Option<Style>,
    nav_style: Option<Style>,
    disabled_style: Option<Style>,
}

/// Areas of the header.
#[derive(Debug, Clone)]
pub struct HeaderState {
    /// Total area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Previous control.
    /// __readonly__. renewed for each render.
    pub area_prev: Rect,
    /// Month label.
    /// __readonly__. renewed for each render.
    pub area_label: Rect,
    /// Next control.
    /// __readonly__. renewed for each render.
    pub area_next: Rect,

    pub non_exhaustive: NonExhaustive,
}

impl<'a> HeaderControls<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Displayed 0-based month and year.
    #[inline]
    pub fn month(mut self, month: u32, year: i32) -> Self {
        self.month = month;
        self.year = year;
        self
    }

    /// Selected day for the label.
    #[inline]
    pub fn day(mut self, day: u32) -> Self {
        self.day = day;
        self
    }

    /// Bounds for the controls.
    #[inline]
    pub fn bounds(mut self, min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) -> Self {
        self.min_date = min_date;
        self.max_date = max_date;
        self
    }

    /// Custom month names.
    #[inline]
    pub fn months(mut self, months: &'a [String; 12]) -> Self {
        self.months = Some(months);
        self
    }

    /// Title of the previous control.
    #[inline]
    pub fn previous_title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.previous_title = Some(title.into());
        self
    }

    /// Title of the next control.
    #[inline]
    pub fn next_title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.next_title = Some(title.into());
        self
    }

    /// Set the composite style.
    #[inline]
    pub fn styles(mut self, s: PickerStyle) -> Self {
        self.style = s.style;
        if let Some(header) = s.header {
            self.style = self.style.patch(header);
        }
        if s.title.is_some() {
            self.title_style = s.title;
        }
        if s.nav.is_some() {
            self.nav_style = s.nav;
        }
        if s.disabled.is_some() {
            self.disabled_style = s.disabled;
        }
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn is_prev_disabled(&self) -> bool {
        is_prev_disabled(self.year, self.month, self.min_date)
    }

    pub fn is_next_disabled(&self) -> bool {
        is_next_disabled(self.year, self.month, self.max_date)
    }

    /// Text of the center label.
    pub fn label(&self) -> String {
        let idx = self.month as usize;
        let month = if let Some(months) = self.months {
            months.get(idx).map(|v| v.as_str()).unwrap_or_default()
        } else {
            MONTHS.get(idx).copied().unwrap_or_default()
        };
        format!("{} {}, {}", month, self.day, self.year)
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl<'a> StatefulWidgetRef for HeaderControls<'a> {
    type State = HeaderState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for HeaderControls<'_> {
    type State = HeaderState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &HeaderControls<'_>, area: Rect, buf: &mut Buffer, state: &mut HeaderState) {
    state.area = area;
    buf.set_style(area, widget.style);

    let nav_style = widget.style.patch(widget.nav_style.unwrap_or_default());
    let disabled_style = widget
        .style
        .patch(fallback_disabled_style(widget.disabled_style.unwrap_or_default()));
    let title_style = widget.style.patch(widget.title_style.unwrap_or_default());

    let prev = widget
        .previous_title
        .clone()
        .unwrap_or_else(|| Line::from(PREVIOUS_TITLE));
    let next = widget
        .next_title
        .clone()
        .unwrap_or_else(|| Line::from(NEXT_TITLE));

    let y = area.y + area.height.saturating_sub(1) / 2;
    let prev_width = (prev.width() as u16).min(area.width);
    let next_width = (next.width() as u16).min(area.width.saturating_sub(prev_width));

    state.area_prev = Rect::new(area.x, y, prev_width, 1).intersection(area);
    state.area_next = Rect::new(
        area.right().saturating_sub(next_width),
        y,
        next_width,
        1,
    )
    .intersection(area);
    state.area_label = Rect::new(
        state.area_prev.right(),
        y,
        state.area_next.x.saturating_sub(state.area_prev.right()),
        1,
    )
    .intersection(area);

    let prev_style = if widget.is_prev_disabled() {
        disabled_style
    } else {
        nav_style
    };
    prev.patch_style(prev_style).render(state.area_prev, buf);

    let next_style = if widget.is_next_disabled() {
        disabled_style
    } else {
        nav_style
    };
    next.patch_style(next_style).render(state.area_next, buf);

    Line::from(widget.label())
        .style(title_style)
        .alignment(Alignment::Center)
        .render(state.area_label, buf);
}

impl Default for HeaderState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            area_prev: Default::default(),
            area_label: Default::default(),
            area_next: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl RelocatableState for HeaderState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.area_prev = relocate_area(self.area_prev, shift, clip);
        self.area_label = relocate_area(self.area_label, shift, clip);
        self.area_next = relocate_area(self.area_next, shift, clip);
    }
}

impl HeaderState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit the previous control.
    pub fn is_prev_at(&self, x: u16, y: u16) -> bool {
        self.area_prev.contains((x, y).into())
    }

    /// Hit the next control.
    pub fn is_next_at(&self, x: u16, y: u16) -> bool {
        self.area_next.contains((x, y).into())
    }
}
