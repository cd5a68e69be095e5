use crate::_private::NonExhaustive;
use crate::picker::dates::{
    days_in_month, first_of_month, weekday_offset, WeekStart, GRID_SLOTS, MAX_COLUMNS, MAX_ROWS,
};
use crate::picker::day::DayCell;
use crate::picker::style::{PickerMetrics, PickerStyle};
use chrono::{Datelike, Days, NaiveDate};
use rat_event::util::item_at;
use rat_reloc::{relocate_area, relocate_areas, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::StatefulWidgetRef;
use ratatui::widgets::{StatefulWidget, Widget};

/// One position of the 6x7 grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum GridSlot {
    /// Before the first or after the last day of the month.
    #[default]
    Blank,
    /// A day of the displayed month.
    Day { day: u32, date: NaiveDate },
}

impl GridSlot {
    pub fn is_blank(&self) -> bool {
        matches!(self, GridSlot::Blank)
    }

    pub fn day(&self) -> Option<u32> {
        match self {
            GridSlot::Blank => None,
            GridSlot::Day { day, .. } => Some(*day),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            GridSlot::Blank => None,
            GridSlot::Day { date, .. } => Some(*date),
        }
    }
}

/// Reported when a day is pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayChange {
    pub day: u32,
}

/// Calculates the full page for the 0-based month.
///
/// The slots before the weekday offset stay blank, then the days
/// follow in order. Everything after the last day stays blank.
pub fn month_slots(month: u32, year: i32, start: WeekStart) -> [GridSlot; GRID_SLOTS] {
    let mut slots = [GridSlot::Blank; GRID_SLOTS];
    let Some(first) = first_of_month(month, year) else {
        return slots;
    };
    let offset = weekday_offset(month, year, start);
    let days = days_in_month(month, year);

    let mut slots_acc = 0;
    let mut current_day = 0;
    for row in 0..MAX_ROWS {
        for col in 0..MAX_COLUMNS {
            if slots_acc >= offset && current_day < days {
                slots[row * MAX_COLUMNS + col] = GridSlot::Day {
                    day: current_day + 1,
                    date: first + Days::new(current_day as u64),
                };
                current_day += 1;
            }
            slots_acc += 1;
        }
    }

    slots
}

/// Renders the days of one month.
///
/// The month itself, the bounds and the selection come from the
/// [DayGridState].
#[derive(Debug, Default, Clone)]
pub struct DayGrid<'a> {
    style: Style,
    day_style: Option<Style>,
    select_style: Option<Style>,
    today_style: Option<Style>,
    disabled_style: Option<Style>,
    highlight_style: Option<Style>,
    metrics: PickerMetrics,

    today: Option<NaiveDate>,
    highlighted_days: &'a [u32],
}

/// State & event-handling.
#[derive(Debug, Clone)]
pub struct DayGridState {
    /// Total area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Areas of the 42 slots.
    /// __readonly__. renewed for each render.
    pub area_slots: [Rect; GRID_SLOTS],

    /// Displayed month, 0-based.
    month: u32,
    /// Displayed year.
    year: i32,
    week_start: WeekStart,
    min_date: Option<NaiveDate>,
    max_date: Option<NaiveDate>,
    slots: [GridSlot; GRID_SLOTS],

    /// One flag for each day of the month.
    /// __readonly__
    pub selected_states: Vec<bool>,

    pub non_exhaustive: NonExhaustive,
}

impl<'a> DayGrid<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the composite style.
    #[inline]
    pub fn styles(mut self, s: PickerStyle) -> Self {
        self.style = s.style;
        if s.day.is_some() {
            self.day_style = s.day;
        }
        if s.select.is_some() {
            self.select_style = s.select;
        }
        if s.today.is_some() {
            self.today_style = s.today;
        }
        if s.disabled.is_some() {
            self.disabled_style = s.disabled;
        }
        if s.highlight.is_some() {
            self.highlight_style = s.highlight;
        }
        self.metrics = s.metrics;
        self
    }

    /// Base style.
    #[inline]
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Style for the selected day.
    #[inline]
    pub fn select_style(mut self, style: Style) -> Self {
        self.select_style = Some(style);
        self
    }

    /// Style for days outside min/max.
    #[inline]
    pub fn disabled_style(mut self, style: Style) -> Self {
        self.disabled_style = Some(style);
        self
    }

    /// Cell sizes.
    #[inline]
    pub fn metrics(mut self, metrics: PickerMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Marks this date as today.
    #[inline]
    pub fn today(mut self, today: NaiveDate) -> Self {
        self.today = Some(today);
        self
    }

    /// Highlighted days of the month.
    #[inline]
    pub fn highlighted_days(mut self, days: &'a [u32]) -> Self {
        self.highlighted_days = days;
        self
    }

    /// Inherent width of the widget.
    #[inline]
    pub fn width(&self) -> u16 {
        self.metrics.width()
    }

    /// Inherent height of the widget.
    #[inline]
    pub fn height(&self) -> u16 {
        self.metrics.row_height.saturating_mul(MAX_ROWS as u16)
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl<'a> StatefulWidgetRef for DayGrid<'a> {
    type State = DayGridState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for DayGrid<'_> {
    type State = DayGridState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(widget: &DayGrid<'_>, area: Rect, buf: &mut Buffer, state: &mut DayGridState) {
    state.area = area;
    buf.set_style(area, widget.style);

    let dw = widget.metrics.day_width;
    let rh = widget.metrics.row_height;

    for row in 0..MAX_ROWS {
        for col in 0..MAX_COLUMNS {
            let idx = row * MAX_COLUMNS + col;
            let slot_area = Rect::new(
                area.x.saturating_add((col as u16).saturating_mul(dw)),
                area.y.saturating_add((row as u16).saturating_mul(rh)),
                dw,
                rh,
            )
            .intersection(area);
            state.area_slots[idx] = slot_area;

            state
                .cell(idx, widget.today, widget.highlighted_days)
                .style(widget.style)
                .day_style(widget.day_style)
                .select_style(widget.select_style)
                .today_style(widget.today_style)
                .disabled_style(widget.disabled_style)
                .highlight_style(widget.highlight_style)
                .render(slot_area, buf);
        }
    }
}

impl Default for DayGridState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            area_slots: [Rect::default(); GRID_SLOTS],
            month: 0,
            year: 1970,
            week_start: Default::default(),
            min_date: None,
            max_date: None,
            slots: month_slots(0, 1970, WeekStart::Sunday),
            selected_states: Default::default(),
            non_exhaustive: NonExhaustive,
        }
    }
}

impl RelocatableState for DayGridState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        relocate_areas(&mut self.area_slots, shift, clip);
    }
}

impl DayGridState {
    /// Grid for the 0-based month.
    pub fn new(month: u32, year: i32) -> Self {
        let mut s = Self::default();
        s.set_month(month, year);
        s
    }

    /// Displayed month, 0-based.
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn week_start(&self) -> WeekStart {
        self.week_start
    }

    /// Change the displayed month.
    ///
    /// This doesn't touch the selected states, they are
    /// rebuilt by the next [DayGridState::update_selected_states].
    pub fn set_month(&mut self, month: u32, year: i32) {
        self.month = month;
        self.year = year;
        self.slots = month_slots(self.month, self.year, self.week_start);
    }

    /// First column of the week.
    pub fn set_week_start(&mut self, week_start: WeekStart) {
        self.week_start = week_start;
        self.slots = month_slots(self.month, self.year, self.week_start);
    }

    /// Selectable range.
    pub fn set_bounds(&mut self, min_date: Option<NaiveDate>, max_date: Option<NaiveDate>) {
        self.min_date = min_date;
        self.max_date = max_date;
    }

    /// All 42 slots.
    pub fn slots(&self) -> &[GridSlot; GRID_SLOTS] {
        &self.slots
    }

    /// Slot at index.
    pub fn slot(&self, idx: usize) -> GridSlot {
        self.slots.get(idx).copied().unwrap_or_default()
    }

    /// Slot index of the given day of the displayed month.
    pub fn slot_of_day(&self, day: u32) -> Option<usize> {
        self.slots.iter().position(|v| v.day() == Some(day))
    }

    /// Rebuilds the selected states for the day.
    /// Exactly this day will be selected, if it exists in
    /// the displayed month.
    pub fn update_selected_states(&mut self, day: u32) {
        let days = days_in_month(self.month, self.year);
        self.selected_states = (1..=days).map(|i| i == day).collect();
    }

    /// Is this day selected.
    pub fn is_selected(&self, day: u32) -> bool {
        day >= 1
            && self
                .selected_states
                .get(day as usize - 1)
                .copied()
                .unwrap_or(false)
    }

    /// The selected day.
    pub fn selected_day(&self) -> Option<u32> {
        self.selected_states
            .iter()
            .position(|v| *v)
            .map(|v| v as u32 + 1)
    }

    /// Select the day and report the change.
    pub fn press_day(&mut self, day: u32) -> DayChange {
        self.update_selected_states(day);
        DayChange { day }
    }

    /// The cell for this slot.
    /// Styling is left to the caller.
    pub fn cell(&self, idx: usize, today: Option<NaiveDate>, highlighted_days: &[u32]) -> DayCell {
        match self.slot(idx) {
            GridSlot::Blank => DayCell::blank(),
            GridSlot::Day { day, date } => DayCell::new(day, date)
                .selected(self.is_selected(day))
                .today(today == Some(date))
                .highlighted(highlighted_days.contains(&date.day()))
                .bounds(self.min_date, self.max_date),
        }
    }

    /// Tap the slot. Only interactive cells select a day.
    pub fn tap_slot(&mut self, idx: usize) -> Option<DayChange> {
        let day = self.cell(idx, None, &[]).tap()?;
        Some(self.press_day(day))
    }

    /// Slot at the screen position.
    pub fn slot_at(&self, x: u16, y: u16) -> Option<usize> {
        item_at(&self.area_slots, x, y)
    }
}
