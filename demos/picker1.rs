use anyhow::anyhow;
use chrono::{Local, NaiveDate};
use crossterm::cursor::{DisableBlinking, SetCursorStyle};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use rat_calendar_picker::event::{ct_event, HandleEvent, Outcome, PickerOutcome, Regular};
use rat_calendar_picker::focus::{Focus, FocusBuilder};
use rat_calendar_picker::picker::{CalendarPicker, CalendarPickerState, PickerConfig};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, StatefulWidget, Widget};
use ratatui::{Frame, Terminal};
use std::cell::RefCell;
use std::fs;
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

fn main() -> Result<(), anyhow::Error> {
    setup_logging()?;

    let today = Local::now().date_naive();
    let min = today - chrono::Months::new(3);
    let max = today + chrono::Months::new(3);

    let config = PickerConfig::new()
        .min_date(min)
        .max_date(max)
        .start_from_monday(true)
        .highlighted_days([1, 15]);

    let picked = Rc::new(RefCell::new(today));

    let mut state = State {
        picker: CalendarPickerState::with_config(today, config)?,
        picked: picked.clone(),
        quit: false,
    };
    state
        .picker
        .set_on_change(move |date| *picked.borrow_mut() = date);
    state.picker.focus.set(true);

    run_ui(&mut state)
}

struct State {
    picker: CalendarPickerState,
    picked: Rc<RefCell<NaiveDate>>,
    quit: bool,
}

fn run_ui(state: &mut State) -> Result<(), anyhow::Error> {
    stdout().execute(EnterAlternateScreen)?;
    stdout().execute(EnableMouseCapture)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;
    terminal.clear()?;
    terminal.draw(|f| repaint(f, state))?;

    let r = 'l: loop {
        let o = match crossterm::event::poll(Duration::from_millis(10)) {
            Ok(true) => match crossterm::event::read() {
                Ok(event) => handle(&event, state),
                Err(e) => break 'l Err(anyhow!(e)),
            },
            Ok(false) => continue,
            Err(e) => break 'l Err(anyhow!(e)),
        };

        if state.quit {
            break 'l Ok(());
        }

        if o != Outcome::Continue && o != Outcome::Unchanged {
            if let Err(e) = terminal.draw(|f| repaint(f, state)) {
                break 'l Err(anyhow!(e));
            }
        }
    };

    disable_raw_mode()?;
    stdout().execute(DisableMouseCapture)?;
    stdout().execute(SetCursorStyle::DefaultUserShape)?;
    stdout().execute(DisableBlinking)?;
    stdout().execute(LeaveAlternateScreen)?;

    r
}

fn repaint(frame: &mut Frame<'_>, state: &mut State) {
    let picker = CalendarPicker::new()
        .screen_width(frame.area().width / 2)
        .selected_day_color(Color::LightBlue)
        .previous_title("<<")
        .next_title(">>")
        .block(Block::bordered().border_type(BorderType::Rounded));

    let l = Layout::vertical([
        Constraint::Length(picker.height()),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .split(frame.area());
    let l_picker = Layout::horizontal([Constraint::Length(picker.width()), Constraint::Fill(1)])
        .split(l[0]);

    picker.render(l_picker[0], frame.buffer_mut(), &mut state.picker);

    Line::from(format!(
        "picked {}   q to quit",
        state.picked.borrow().format("%Y-%m-%d")
    ))
    .style(Style::new().gray())
    .render(Rect::new(l[1].x, l[1].y, l[1].width, 1), frame.buffer_mut());
}

fn handle(event: &crossterm::event::Event, state: &mut State) -> Outcome {
    match event {
        ct_event!(key press 'q') => {
            state.quit = true;
            return Outcome::Changed;
        }
        ct_event!(resized) => return Outcome::Changed,
        _ => {}
    }

    let mut builder = FocusBuilder::new(None);
    builder.widget(&state.picker);
    let mut focus: Focus = builder.build();
    let f = focus.handle(event, Regular);

    let r: PickerOutcome = state.picker.handle(event, Regular);
    if r == PickerOutcome::Selected {
        log::debug!("selected {}", state.picker.selected_date());
    }
    Outcome::from(r).max(f)
}

fn setup_logging() -> Result<(), anyhow::Error> {
    _ = fs::remove_file("log.log");
    fern::Dispatch::new()
        .format(|out, message, _record| out.finish(format_args!("{}", message)))
        .level(log::LevelFilter::Debug)
        .chain(fern::log_file("log.log")?)
        .apply()?;
    Ok(())
}
