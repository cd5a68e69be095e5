use crate::picker::dates::{default_weekdays, WeekStart};
use crate::picker::style::{PickerMetrics, PickerStyle};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Span;
#[cfg(feature = "unstable-widget-ref")]
use ratatui::widgets::WidgetRef;
use ratatui::widgets::Widget;

/// Row of weekday names above the grid.
#[derive(Debug, Default, Clone)]
pub struct WeekdayLabels<'a> {
    labels: Option<&'a [String; 7]>,
    week_start: WeekStart,
    style: Style,
    weekday_style: Option<Style>,
    metrics: PickerMetrics,
}

impl<'a> WeekdayLabels<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Custom labels. They are used in the given order,
    /// so they must match the week start.
    #[inline]
    pub fn labels(mut self, labels: &'a [String; 7]) -> Self {
        self.labels = Some(labels);
        self
    }

    /// Week start for the default labels.
    #[inline]
    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Set the composite style.
    #[inline]
    pub fn styles(mut self, s: PickerStyle) -> Self {
        self.style = s.style;
        if s.weekday.is_some() {
            self.weekday_style = s.weekday;
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

    /// Cell sizes.
    #[inline]
    pub fn metrics(mut self, metrics: PickerMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Labels in display order.
    pub fn display_labels(&self) -> [&str; 7] {
        if let Some(labels) = self.labels {
            labels.each_ref().map(String::as_str)
        } else {
            default_weekdays(self.week_start)
        }
    }
}

#[cfg(feature = "unstable-widget-ref")]
impl<'a> WidgetRef for WeekdayLabels<'a> {
    fn render_ref(&self, area: Rect, buf: &mut Buffer) {
        render_ref(self, area, buf);
    }
}

impl Widget for WeekdayLabels<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        render_ref(&self, area, buf);
    }
}

fn render_ref(widget: &WeekdayLabels<'_>, area: Rect, buf: &mut Buffer) {
    let style = widget.style.patch(widget.weekday_style.unwrap_or_default());
    buf.set_style(area, style);

    let dw = widget.metrics.day_width;
    let text_width = dw.saturating_sub(1) as usize;
    for (col, label) in widget.display_labels().iter().enumerate() {
        let label_x = area.x.saturating_add((col as u16).saturating_mul(dw));
        let label_area = Rect::new(label_x, area.y, dw, 1).intersection(area);
        if label_area.is_empty() {
            continue;
        }
        Span::from(format!("{:>1$}", label, text_width))
            .style(style)
            .render(label_area, buf);
    }
}
