use chrono::NaiveDate;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use rat_calendar_picker::event::{HandleEvent, MouseOnly, PickerOutcome, Regular};
use rat_calendar_picker::picker::{CalendarPicker, CalendarPickerState, PickerConfig};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::StatefulWidget;
use std::cell::RefCell;
use std::rc::Rc;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

fn click(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn scroll_down(x: u16, y: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::ScrollDown,
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    })
}

fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

fn render(state: &mut CalendarPickerState) {
    let mut buf = Buffer::empty(Rect::new(0, 0, 40, 8));
    CalendarPicker::new().render(buf.area, &mut buf, state);
}

fn picker(config: PickerConfig) -> (CalendarPickerState, Rc<RefCell<Vec<NaiveDate>>>) {
    let mut state =
        CalendarPickerState::with_config(date(2024, 2, 15), config).expect("valid config");
    let rec = Rc::new(RefCell::new(Vec::new()));
    let rec2 = rec.clone();
    state.set_on_change(move |d| rec2.borrow_mut().push(d));
    render(&mut state);
    (state, rec)
}

#[test]
fn test_click_day() {
    let (mut state, rec) = picker(PickerConfig::new());

    // day 20 is at row 3, col 2
    let r = state.handle(&click(9, 5), MouseOnly);
    assert_eq!(r, PickerOutcome::Selected);
    assert_eq!(*rec.borrow(), vec![date(2024, 2, 20)]);
    assert_eq!(state.grid.selected_day(), Some(20));

    // blank slot before the 1st
    let r = state.handle(&click(1, 2), MouseOnly);
    assert_eq!(r, PickerOutcome::Continue);
    assert_eq!(rec.borrow().len(), 1);
}

#[test]
fn test_click_disabled() {
    let (mut state, rec) = picker(PickerConfig::new().min_date(date(2024, 2, 10)));

    // day 5 is at row 1, col 1
    let r = state.handle(&click(5, 3), Regular);
    assert_eq!(r, PickerOutcome::Continue);
    assert!(rec.borrow().is_empty());
    assert_eq!(state.selected_date(), date(2024, 2, 15));
}

#[test]
fn test_click_nav() {
    let (mut state, rec) = picker(PickerConfig::new());

    let r = state.handle(&click(1, 0), MouseOnly);
    assert_eq!(r, PickerOutcome::Selected);
    assert_eq!(state.selected_date(), date(2024, 1, 15));

    let r = state.handle(&click(38, 0), MouseOnly);
    assert_eq!(r, PickerOutcome::Selected);
    assert_eq!(state.selected_date(), date(2024, 2, 15));

    // month label
    let r = state.handle(&click(20, 0), MouseOnly);
    assert_eq!(r, PickerOutcome::Continue);

    assert_eq!(*rec.borrow(), vec![date(2024, 1, 15), date(2024, 2, 15)]);
}

#[test]
fn test_click_nav_disabled() {
    let (mut state, rec) = picker(
        PickerConfig::new()
            .min_date(date(2024, 2, 1))
            .max_date(date(2024, 2, 29)),
    );

    assert_eq!(state.handle(&click(1, 0), MouseOnly), PickerOutcome::Unchanged);
    assert_eq!(state.handle(&click(38, 0), MouseOnly), PickerOutcome::Unchanged);
    assert_eq!(state.handle(&scroll_down(5, 5), MouseOnly), PickerOutcome::Unchanged);
    assert!(rec.borrow().is_empty());
}

#[test]
fn test_scroll() {
    let (mut state, _rec) = picker(PickerConfig::new());

    let r = state.handle(&scroll_down(5, 5), MouseOnly);
    assert_eq!(r, PickerOutcome::Selected);
    assert_eq!(state.selected_date(), date(2024, 3, 15));

    let r = state.handle(&scroll_down(60, 60), MouseOnly);
    assert_eq!(r, PickerOutcome::Continue);
}

#[test]
fn test_keys() {
    let (mut state, rec) = picker(PickerConfig::new());

    // not focused
    let r = state.handle(&key(KeyCode::Left, KeyModifiers::NONE), Regular);
    assert_eq!(r, PickerOutcome::Continue);

    state.focus.set(true);

    let r = state.handle(&key(KeyCode::Left, KeyModifiers::NONE), Regular);
    assert_eq!(r, PickerOutcome::Selected);
    assert_eq!(state.selected_date(), date(2024, 2, 14));

    state.handle(&key(KeyCode::Down, KeyModifiers::NONE), Regular);
    assert_eq!(state.selected_date(), date(2024, 2, 21));

    state.handle(&key(KeyCode::End, KeyModifiers::NONE), Regular);
    assert_eq!(state.selected_date(), date(2024, 2, 29));

    state.handle(&key(KeyCode::PageDown, KeyModifiers::NONE), Regular);
    assert_eq!(state.selected_date(), date(2024, 3, 29));

    state.handle(&key(KeyCode::PageUp, KeyModifiers::CONTROL), Regular);
    assert_eq!(state.selected_date(), date(2023, 3, 29));

    state.set_today(date(2024, 6, 1));
    state.handle(&key(KeyCode::Home, KeyModifiers::CONTROL), Regular);
    assert_eq!(state.selected_date(), date(2024, 6, 1));

    assert_eq!(rec.borrow().len(), 6);
}
