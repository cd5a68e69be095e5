use chrono::NaiveDate;
use rat_calendar_picker::picker::dates::{days_in_month, WeekStart, GRID_SLOTS};
use rat_calendar_picker::picker::{
    month_slots, DayCell, DayChange, DayGridState, DayKind, GridSlot,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("date")
}

#[test]
fn test_slots_layout() {
    for start in [WeekStart::Sunday, WeekStart::Monday] {
        for year in [1900, 2000, 2023, 2024] {
            for month in 0..12 {
                let slots = month_slots(month, year, start);
                assert_eq!(slots.len(), GRID_SLOTS);

                let days = slots.iter().filter(|v| !v.is_blank()).count();
                assert_eq!(days as u32, days_in_month(month, year));

                let first = slots.iter().position(|v| !v.is_blank()).expect("first");
                let last = slots.iter().rposition(|v| !v.is_blank()).expect("last");
                assert!(slots[first..=last].iter().all(|v| !v.is_blank()));
                for (i, slot) in slots[first..=last].iter().enumerate() {
                    assert_eq!(slot.day(), Some(i as u32 + 1));
                }
            }
        }
    }
}

#[test]
fn test_slots_february() {
    let slots = month_slots(1, 2024, WeekStart::Sunday);
    assert_eq!(slots[3], GridSlot::Blank);
    assert_eq!(
        slots[4],
        GridSlot::Day {
            day: 1,
            date: date(2024, 2, 1)
        }
    );
    assert_eq!(slots[32].date(), Some(date(2024, 2, 29)));
    assert_eq!(slots[33], GridSlot::Blank);
}

#[test]
fn test_select_one() {
    let mut state = DayGridState::new(1, 2024);
    state.update_selected_states(15);
    assert_eq!(state.selected_states.len(), 29);
    assert_eq!(state.selected_states.iter().filter(|v| **v).count(), 1);
    assert!(state.is_selected(15));
    assert_eq!(state.selected_day(), Some(15));

    state.update_selected_states(20);
    assert!(!state.is_selected(15));
    assert!(state.selected_states[19]);
    assert_eq!(state.selected_states.iter().filter(|v| **v).count(), 1);
}

#[test]
fn test_tap_disabled() {
    let mut state = DayGridState::new(1, 2024);
    state.set_bounds(Some(date(2024, 2, 10)), Some(date(2024, 2, 20)));
    state.update_selected_states(15);

    let idx = state.slot_of_day(5).expect("slot");
    assert_eq!(state.tap_slot(idx), None);
    assert_eq!(state.selected_day(), Some(15));

    let idx = state.slot_of_day(21).expect("slot");
    assert_eq!(state.tap_slot(idx), None);

    let idx = state.slot_of_day(20).expect("slot");
    assert_eq!(state.tap_slot(idx), Some(DayChange { day: 20 }));
    assert_eq!(state.selected_day(), Some(20));

    // blank slot
    assert_eq!(state.tap_slot(0), None);
}

#[test]
fn test_cell_kind() {
    let d = date(2024, 2, 15);
    assert_eq!(DayCell::blank().kind(), DayKind::Blank);
    assert_eq!(DayCell::new(15, d).kind(), DayKind::Enabled);
    assert_eq!(
        DayCell::new(15, d).selected(true).kind(),
        DayKind::Selected
    );
    assert_eq!(
        DayCell::new(15, d)
            .bounds(Some(date(2024, 2, 16)), None)
            .kind(),
        DayKind::Disabled
    );
    // selected wins over disabled
    assert_eq!(
        DayCell::new(15, d)
            .selected(true)
            .bounds(None, Some(date(2024, 2, 1)))
            .kind(),
        DayKind::Selected
    );
    assert_eq!(
        DayCell::new(15, d)
            .bounds(Some(date(2024, 2, 16)), None)
            .tap(),
        None
    );
    assert_eq!(DayCell::new(15, d).tap(), Some(15));
}
