use crate::_private::NonExhaustive;
use crate::picker::config::{DayOverflow, PickerConfig};
use crate::picker::dates::{clamp_day, days_in_month, first_of_month};
use crate::picker::error::PickerError;
use crate::picker::event::PickerOutcome;
use crate::picker::grid::{DayGrid, DayGridState};
use crate::picker::header::{
    is_next_disabled, is_prev_disabled, next_month, prev_month, HeaderControls, HeaderState,
    NavEvent, NavStep, NEXT_TITLE, PREVIOUS_TITLE,
};
use crate::picker::style::{make_styles, MakeStyles, PickerMetrics, PickerStyle};
use crate::picker::weekdays::WeekdayLabels;
use crate::util::{revert_style, set_area_style};
use chrono::{Datelike, Days, Local, NaiveDate};
use log::{debug, warn};
use rat_event::{ct_event, flow, HandleEvent, MouseOnly, Regular};
use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use rat_reloc::{relocate_area, RelocatableState};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::StatefulWidgetRef;
use ratatui::widgets::{Block, StatefulWidget, Widget};
use std::fmt::{Debug, Formatter};

/// Space for the longest default label "September 30, 2024" plus padding.
const LABEL_WIDTH: u16 = 20;

/// Date picker for a single month.
///
/// Renders the header with the previous/next controls, the weekday
/// labels and the day grid. Everything that changes lives in the
/// [CalendarPickerState].
///
/// Styling is resolved per render and per instance:
/// * an explicit [CalendarPicker::styles] wins,
/// * otherwise the style generator ([make_styles] or the one given
///   with [CalendarPicker::make_styles]) is called with the scale factor.
///   The scale factor is given directly or derived from
///   the screen width.
#[derive(Debug, Default, Clone)]
pub struct CalendarPicker<'a> {
    weekdays: Option<&'a [String; 7]>,
    months: Option<&'a [String; 12]>,
    previous_title: Option<Line<'a>>,
    next_title: Option<Line<'a>>,

    selected_day_color: Option<Color>,
    selected_day_text_color: Option<Color>,
    text_style: Option<Style>,

    styles: Option<PickerStyle>,
    scale_factor: Option<f32>,
    screen_width: Option<u16>,
    make_styles: Option<MakeStyles>,

    block: Option<Block<'a>>,
}

/// State & event-handling.
///
/// This is the single source of truth for the selected date
/// and the displayed month.
pub struct CalendarPickerState {
    /// Total area.
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Area inside the block.
    /// __readonly__. renewed for each render.
    pub inner: Rect,
    /// Header.
    /// __readonly__. renewed for each render.
    pub header: HeaderState,
    /// Day grid.
    /// __readonly__. kept in sync with the selected date.
    pub grid: DayGridState,

    /// Selected day, 1-based.
    day: u32,
    /// Displayed and selected month, 0-based.
    month: u32,
    /// Displayed and selected year.
    year: i32,
    /// Last date computed from day/month/year.
    date: NaiveDate,
    /// Today
    today: NaiveDate,

    config: PickerConfig,
    on_change: Option<Box<dyn FnMut(NaiveDate)>>,

    /// Focus
    /// __read+write__
    pub focus: FocusFlag,

    pub non_exhaustive: NonExhaustive,
}

impl<'a> CalendarPicker<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom weekday labels in display order.
    #[inline]
    pub fn weekdays(mut self, weekdays: &'a [String; 7]) -> Self {
        self.weekdays = Some(weekdays);
        self
    }

    /// Custom month names.
    #[inline]
    pub fn months(mut self, months: &'a [String; 12]) -> Self {
        self.months = Some(months);
        self
    }

    /// Title for the previous control.
    #[inline]
    pub fn previous_title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.previous_title = Some(title.into());
        self
    }

    /// Title for the next control.
    #[inline]
    pub fn next_title(mut self, title: impl Into<Line<'a>>) -> Self {
        self.next_title = Some(title.into());
        self
    }

    /// Background of the selected day.
    #[inline]
    pub fn selected_day_color(mut self, color: Color) -> Self {
        self.selected_day_color = Some(color);
        self
    }

    /// Text color of the selected day.
    #[inline]
    pub fn selected_day_text_color(mut self, color: Color) -> Self {
        self.selected_day_text_color = Some(color);
        self
    }

    /// Style for all texts. It's applied on top of the
    /// regular styles, but below selected/disabled/today.
    #[inline]
    pub fn text_style(mut self, style: Style) -> Self {
        self.text_style = Some(style);
        self
    }

    /// Set the composite style.
    /// This disables the style generator.
    #[inline]
    pub fn styles(mut self, styles: PickerStyle) -> Self {
        self.styles = Some(styles);
        self
    }

    /// Scale factor for the style generator.
    #[inline]
    pub fn scale_factor(mut self, scale: f32) -> Self {
        self.scale_factor = Some(scale);
        self
    }

    /// Derive the scale factor from this width.
    /// An explicit scale factor wins.
    #[inline]
    pub fn screen_width(mut self, width: u16) -> Self {
        self.screen_width = Some(width);
        self
    }

    /// Replace the style generator.
    #[inline]
    pub fn make_styles(mut self, make: MakeStyles) -> Self {
        self.make_styles = Some(make);
        self
    }

    /// Block
    #[inline]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Scale factor used for the style generator.
    pub fn scale(&self) -> f32 {
        if let Some(scale) = self.scale_factor {
            scale
        } else if let Some(width) = self.screen_width {
            PickerMetrics::scale_for_width(width)
        } else {
            1.0
        }
    }

    /// Styles after applying all the overrides.
    pub fn resolved_styles(&self) -> PickerStyle {
        let mut styles = if let Some(styles) = &self.styles {
            styles.clone()
        } else {
            let make = self.make_styles.unwrap_or(make_styles);
            make(self.scale())
        };

        if let Some(text_style) = self.text_style {
            styles.day = Some(styles.day.unwrap_or_default().patch(text_style));
            styles.weekday = Some(styles.weekday.unwrap_or_default().patch(text_style));
            styles.title = Some(styles.title.unwrap_or_default().patch(text_style));
            styles.nav = Some(styles.nav.unwrap_or_default().patch(text_style));
        }

        let mut select = styles.select.unwrap_or_else(|| revert_style(styles.style));
        if let Some(color) = self.selected_day_color {
            select = select.bg(color);
        }
        if let Some(color) = self.selected_day_text_color {
            select = select.fg(color);
        }
        styles.select = Some(select);

        styles
    }

    /// Inherent width of the widget.
    pub fn width(&self) -> u16 {
        let styles = self.resolved_styles();
        let block = self.block.as_ref().or(styles.block.as_ref());
        let border = block
            .map(|v| v.inner(Rect::new(0, 0, 20, 20)))
            .map(|v| 20 - v.width)
            .unwrap_or_default();
        let prev = self
            .previous_title
            .as_ref()
            .map(|v| v.width() as u16)
            .unwrap_or(PREVIOUS_TITLE.len() as u16);
        let next = self
            .next_title
            .as_ref()
            .map(|v| v.width() as u16)
            .unwrap_or(NEXT_TITLE.len() as u16);
        let header = prev.saturating_add(LABEL_WIDTH).saturating_add(next);
        styles.metrics.width().max(header).saturating_add(border)
    }

    /// Inherent height of the widget.
    pub fn height(&self) -> u16 {
        let styles = self.resolved_styles();
        let block = self.block.as_ref().or(styles.block.as_ref());
        let border = block
            .map(|v| v.inner(Rect::new(0, 0, 20, 20)))
            .map(|v| 20 - v.height)
            .unwrap_or_default();
        styles.metrics.height().saturating_add(border)
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl<'a> StatefulWidgetRef for CalendarPicker<'a> {
    type State = CalendarPickerState;

    fn render_ref(&self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(self, area, buf, state);
    }
}

impl StatefulWidget for CalendarPicker<'_> {
    type State = CalendarPickerState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        render_ref(&self, area, buf, state);
    }
}

fn render_ref(
    widget: &CalendarPicker<'_>,
    area: Rect,
    buf: &mut Buffer,
    state: &mut CalendarPickerState,
) {
    state.area = area;

    let mut styles = widget.resolved_styles();
    if state.is_focused() {
        if let Some(focus) = styles.focus {
            styles.title = Some(styles.title.unwrap_or_default().patch(focus));
        }
    }
    let metrics = styles.metrics;

    let block = widget.block.clone().or(styles.block.clone());
    set_area_style(buf, area, styles.style);
    state.inner = if let Some(block) = block {
        let inner = block.inner(area);
        block.render(area, buf);
        inner
    } else {
        area
    };

    let inner = state.inner;
    let width = metrics.width().min(inner.width);
    let header_area =
        Rect::new(inner.x, inner.y, inner.width, metrics.header_height).intersection(inner);
    let weekday_area = Rect::new(
        inner.x,
        header_area.bottom(),
        width,
        metrics.weekday_height,
    )
    .intersection(inner);
    let grid_area = Rect::new(
        inner.x,
        weekday_area.bottom(),
        width,
        metrics.row_height.saturating_mul(6),
    )
    .intersection(inner);

    let mut header = HeaderControls::new()
        .month(state.month, state.year)
        .day(state.day)
        .bounds(state.config.min_date, state.config.max_date)
        .styles(styles.clone());
    if let Some(months) = widget.months {
        header = header.months(months);
    }
    if let Some(title) = widget.previous_title.clone() {
        header = header.previous_title(title);
    }
    if let Some(title) = widget.next_title.clone() {
        header = header.next_title(title);
    }
    header.render(header_area, buf, &mut state.header);

    let mut weekdays = WeekdayLabels::new()
        .week_start(state.config.week_start)
        .styles(styles.clone());
    if let Some(labels) = widget.weekdays {
        weekdays = weekdays.labels(labels);
    }
    weekdays.render(weekday_area, buf);

    DayGrid::new()
        .styles(styles)
        .today(state.today)
        .highlighted_days(&state.config.highlighted_days)
        .render(grid_area, buf, &mut state.grid);
}

impl Debug for CalendarPickerState {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarPickerState")
            .field("area", &self.area)
            .field("inner", &self.inner)
            .field("header", &self.header)
            .field("grid", &self.grid)
            .field("day", &self.day)
            .field("month", &self.month)
            .field("year", &self.year)
            .field("date", &self.date)
            .field("today", &self.today)
            .field("config", &self.config)
            .field("on_change", &self.on_change.as_ref().map(|_| "dyn FnMut()"))
            .field("focus", &self.focus)
            .finish()
    }
}

impl Default for CalendarPickerState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}

impl HasFocus for CalendarPickerState {
    fn build(&self, builder: &mut FocusBuilder) {
        builder.leaf_widget(self);
    }

    #[inline]
    fn focus(&self) -> FocusFlag {
        self.focus.clone()
    }

    #[inline]
    fn area(&self) -> Rect {
        self.area
    }
}

impl RelocatableState for CalendarPickerState {
    fn relocate(&mut self, shift: (i16, i16), clip: Rect) {
        self.area = relocate_area(self.area, shift, clip);
        self.inner = relocate_area(self.inner, shift, clip);
        self.header.relocate(shift, clip);
        self.grid.relocate(shift, clip);
    }
}

impl CalendarPickerState {
    /// New picker with the initial date and no restrictions.
    pub fn new(date: NaiveDate) -> Self {
        let mut s = Self {
            area: Default::default(),
            inner: Default::default(),
            header: Default::default(),
            grid: Default::default(),
            day: date.day(),
            month: date.month0(),
            year: date.year(),
            date,
            today: Local::now().date_naive(),
            config: Default::default(),
            on_change: None,
            focus: Default::default(),
            non_exhaustive: NonExhaustive,
        };
        s.sync_grid();
        s
    }

    /// New picker with a configuration.
    ///
    /// Fails if the configuration is invalid, see [PickerConfig::validate].
    pub fn with_config(date: NaiveDate, config: PickerConfig) -> Result<Self, PickerError> {
        config.validate()?;
        if !config.in_bounds(date) {
            warn!(
                "initial date {} outside of {:?}..{:?}",
                date, config.min_date, config.max_date
            );
        }

        let mut s = Self::new(date);
        s.config = config;
        s.sync_grid();
        Ok(s)
    }

    /// New picker with a named focus flag.
    pub fn named(name: &str, date: NaiveDate) -> Self {
        let mut s = Self::new(date);
        s.focus = FocusFlag::new().with_name(name);
        s
    }

    /// Configuration.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Listener for date changes.
    ///
    /// It's called with the new date after each change of the
    /// day, the month or the year.
    pub fn set_on_change(&mut self, on_change: impl FnMut(NaiveDate) + 'static) {
        self.on_change = Some(Box::new(on_change));
    }

    /// Remove the listener.
    pub fn clear_on_change(&mut self) {
        self.on_change = None;
    }

    /// Today. Defaults to the local date at creation time.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Selected date.
    pub fn selected_date(&self) -> NaiveDate {
        self.date
    }

    /// Selected day of the month.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Displayed month, 0-based.
    pub fn displayed_month(&self) -> u32 {
        self.month
    }

    /// Displayed year.
    pub fn displayed_year(&self) -> i32 {
        self.year
    }

    /// Set the selected date without notifying the listener.
    pub fn set_selected_date(&mut self, date: NaiveDate) -> bool {
        let old = self.date;
        self.day = date.day();
        self.month = date.month0();
        self.year = date.year();
        self.date = date;
        self.sync_grid();
        old != date
    }

    /// The previous control is disabled.
    pub fn is_prev_disabled(&self) -> bool {
        is_prev_disabled(self.year, self.month, self.config.min_date)
    }

    /// The next control is disabled.
    pub fn is_next_disabled(&self) -> bool {
        is_next_disabled(self.year, self.month, self.config.max_date)
    }

    /// Is the month within the bounds of the config.
    pub fn can_display(&self, month: u32, year: i32) -> bool {
        let after_min = self
            .config
            .min_date
            .map(|v| (year, month) >= (v.year(), v.month0()))
            .unwrap_or(true);
        let before_max = self
            .config
            .max_date
            .map(|v| (year, month) <= (v.year(), v.month0()))
            .unwrap_or(true);
        after_min && before_max
    }

    /// A day was picked.
    pub fn on_day_change(&mut self, day: u32) -> PickerOutcome {
        self.commit(day, self.month, self.year)
    }

    /// The month was changed.
    pub fn on_month_change(&mut self, month: u32) -> PickerOutcome {
        self.commit(self.day, month, self.year)
    }

    /// Next year.
    pub fn advance_year(&mut self) -> PickerOutcome {
        self.commit(self.day, self.month, self.year.saturating_add(1))
    }

    /// Previous year.
    pub fn retreat_year(&mut self) -> PickerOutcome {
        self.commit(self.day, self.month, self.year.saturating_sub(1))
    }

    /// Next month, with a year rollover after December.
    pub fn advance_month(&mut self) -> PickerOutcome {
        self.apply_nav(next_month(self.month))
    }

    /// Previous month, with a year rollover before January.
    pub fn retreat_month(&mut self) -> PickerOutcome {
        self.apply_nav(prev_month(self.month))
    }

    /// Apply a month step.
    ///
    /// The year change is applied before the month change.
    /// The listener is called once with the final date.
    pub fn apply_nav(&mut self, step: NavStep) -> PickerOutcome {
        let mut month = self.month;
        let mut year = self.year;
        for event in step.events() {
            match event {
                NavEvent::NextYear => year = year.saturating_add(1),
                NavEvent::PrevYear => year = year.saturating_sub(1),
                NavEvent::MonthChanged(m) => month = m,
            }
        }
        self.commit(self.day, month, year)
    }

    /// Builds the date from day/month/year, stores it and
    /// notifies the listener.
    pub fn recompute(&mut self) -> PickerOutcome {
        self.commit(self.day, self.month, self.year)
    }

    /// Day/month/year are only stored if they give a valid date.
    /// Otherwise everything stays as it was.
    fn commit(&mut self, day: u32, month: u32, year: i32) -> PickerOutcome {
        let (mut day, date) = match self.config.day_overflow {
            DayOverflow::Clamp => {
                let day = clamp_day(month, year, day);
                let date = month
                    .checked_add(1)
                    .and_then(|m| NaiveDate::from_ymd_opt(year, m, day));
                (day, date)
            }
            DayOverflow::Rollover => {
                let date = first_of_month(month, year)
                    .and_then(|v| v.checked_add_days(Days::new(day.saturating_sub(1) as u64)));
                (day, date)
            }
        };
        let Some(mut date) = date else {
            warn!("invalid date {}-{}-{}", year, month.saturating_add(1), day);
            return PickerOutcome::Unchanged;
        };

        // stay inside the bounds when landing in a bound month.
        if let Some(min) = self.config.min_date {
            if date < min && (year, month) == (min.year(), min.month0()) {
                day = min.day();
                date = min;
            }
        }
        if let Some(max) = self.config.max_date {
            if date > max && (year, month) == (max.year(), max.month0()) {
                day = max.day();
                date = max;
            }
        }

        self.day = day;
        self.month = month;
        self.year = year;
        self.date = date;
        self.sync_grid();

        debug!("picker date {}", date);
        if let Some(on_change) = self.on_change.as_mut() {
            on_change(date);
        }
        PickerOutcome::Selected
    }

    fn sync_grid(&mut self) {
        self.grid.set_week_start(self.config.week_start);
        self.grid
            .set_bounds(self.config.min_date, self.config.max_date);
        self.grid.set_month(self.month, self.year);
        self.grid.update_selected_states(self.day);
    }

    /// Move the selection by n days within the displayed month.
    pub fn move_day(&mut self, n: i64) -> PickerOutcome {
        let day = self.day as i64 + n;
        if day < 1 || day > days_in_month(self.month, self.year) as i64 {
            return PickerOutcome::Unchanged;
        }
        let day = day as u32;
        if !self.is_day_selectable(day) {
            return PickerOutcome::Unchanged;
        }
        self.on_day_change(day)
    }

    /// Select the first selectable day of the displayed month.
    pub fn select_first(&mut self) -> PickerOutcome {
        let days = days_in_month(self.month, self.year);
        match (1..=days).find(|v| self.is_day_selectable(*v)) {
            Some(day) if day != self.day => self.on_day_change(day),
            _ => PickerOutcome::Unchanged,
        }
    }

    /// Select the last selectable day of the displayed month.
    pub fn select_last(&mut self) -> PickerOutcome {
        let days = days_in_month(self.month, self.year);
        match (1..=days).rev().find(|v| self.is_day_selectable(*v)) {
            Some(day) if day != self.day => self.on_day_change(day),
            _ => PickerOutcome::Unchanged,
        }
    }

    /// Jump to today if it's inside the bounds.
    pub fn move_to_today(&mut self) -> PickerOutcome {
        let today = self.today;
        if !self.config.in_bounds(today) {
            return PickerOutcome::Unchanged;
        }
        if today == self.date {
            return PickerOutcome::Unchanged;
        }
        self.commit(today.day(), today.month0(), today.year())
    }

    /// Next month, if the bounds allow it.
    pub fn try_advance_month(&mut self) -> PickerOutcome {
        if self.is_next_disabled() {
            PickerOutcome::Unchanged
        } else {
            self.advance_month()
        }
    }

    /// Previous month, if the bounds allow it.
    pub fn try_retreat_month(&mut self) -> PickerOutcome {
        if self.is_prev_disabled() {
            PickerOutcome::Unchanged
        } else {
            self.retreat_month()
        }
    }

    /// Next year, if the bounds allow it.
    pub fn try_advance_year(&mut self) -> PickerOutcome {
        if self.can_display(self.month, self.year + 1) {
            self.advance_year()
        } else {
            PickerOutcome::Unchanged
        }
    }

    /// Previous year, if the bounds allow it.
    pub fn try_retreat_year(&mut self) -> PickerOutcome {
        if self.can_display(self.month, self.year - 1) {
            self.retreat_year()
        } else {
            PickerOutcome::Unchanged
        }
    }

    fn is_day_selectable(&self, day: u32) -> bool {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, day)
            .map(|v| self.config.in_bounds(v))
            .unwrap_or(false)
    }
}

impl HandleEvent<crossterm::event::Event, Regular, PickerOutcome> for CalendarPickerState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: Regular) -> PickerOutcome {
        if self.is_focused() {
            flow!(match event {
                ct_event!(keycode press CONTROL-Home) => self.move_to_today(),
                ct_event!(keycode press CONTROL-PageUp) => self.try_retreat_year(),
                ct_event!(keycode press CONTROL-PageDown) => self.try_advance_year(),
                ct_event!(keycode press PageUp) => self.try_retreat_month(),
                ct_event!(keycode press PageDown) => self.try_advance_month(),
                ct_event!(keycode press Home) => self.select_first(),
                ct_event!(keycode press End) => self.select_last(),
                ct_event!(keycode press Up) => self.move_day(-7),
                ct_event!(keycode press Down) => self.move_day(7),
                ct_event!(keycode press Left) => self.move_day(-1),
                ct_event!(keycode press Right) => self.move_day(1),
                _ => PickerOutcome::Continue,
            });
        }

        self.handle(event, MouseOnly)
    }
}

impl HandleEvent<crossterm::event::Event, MouseOnly, PickerOutcome> for CalendarPickerState {
    fn handle(&mut self, event: &crossterm::event::Event, _qualifier: MouseOnly) -> PickerOutcome {
        match event {
            ct_event!(mouse down Left for x, y) if self.header.is_prev_at(*x, *y) => {
                self.try_retreat_month()
            }
            ct_event!(mouse down Left for x, y) if self.header.is_next_at(*x, *y) => {
                self.try_advance_month()
            }
            ct_event!(mouse down Left for x, y) => {
                if let Some(idx) = self.grid.slot_at(*x, *y) {
                    if let Some(change) = self.grid.tap_slot(idx) {
                        self.on_day_change(change.day)
                    } else {
                        PickerOutcome::Continue
                    }
                } else {
                    PickerOutcome::Continue
                }
            }
            ct_event!(scroll up for x, y) if self.grid.area.contains((*x, *y).into()) => {
                self.try_retreat_month()
            }
            ct_event!(scroll down for x, y) if self.grid.area.contains((*x, *y).into()) => {
                self.try_advance_month()
            }
            _ => PickerOutcome::Continue,
        }
    }
}
