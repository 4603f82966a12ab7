//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the calculator,
//! and translates button activation (mouse clicks or the key printed on a
//! button) into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Loop
//!
//! The loop owns the single `CalculatorState`. Every action replaces it
//! wholesale with the value returned by `update()`. The screen is only
//! redrawn after events arrive; idle polls sleep up to 500ms.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Position, Rect};

use crate::core::action::{Action, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::CalculatorState;
use crate::tui::component::EventHandler;
use crate::tui::components::Keypad;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of the calculator logic)
pub struct TuiState {
    pub keypad: Keypad,
    pub separator: char,
    pub show_hints: bool,
}

impl TuiState {
    pub fn new(separator: char, show_hints: bool) -> Self {
        Self {
            keypad: Keypad::new(),
            separator,
            show_hints,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

/// What the loop should do after one event.
#[derive(Debug, PartialEq)]
enum Step {
    Continue,
    Dispatch(Action),
    Quit,
}

/// The area a click lands in: the terminal's current size, not the last
/// drawn frame, so a resize earlier in the same batch is already accounted for.
fn viewport<B: Backend>(terminal: &Terminal<B>) -> Result<Rect, B::Error> {
    Ok(Rect::from((Position::ORIGIN, terminal.size()?)))
}

fn route(event: &TuiEvent, tui: &mut TuiState, frame_area: Rect) -> Step {
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Step::Quit,
        TuiEvent::Resize => Step::Continue,
        TuiEvent::MouseClick(column, row) => {
            match ui::hit_test_button(frame_area, tui.show_hints, *column, *row) {
                Some(index) => tui.keypad.press(index).map_or(Step::Continue, Step::Dispatch),
                None => Step::Continue,
            }
        }
        _ => tui
            .keypad
            .handle_event(event)
            .map_or(Step::Continue, Step::Dispatch),
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let mut state = CalculatorState::new();
    let mut tui = TuiState::new(config.thousands_separator, config.show_hints);

    let mut terminal = ratatui::init();
    let result = (|| -> std::io::Result<()> {
        let _terminal_mode_guard = TerminalModeGuard::new()?;
        let mut needs_redraw = true; // Force first frame

        loop {
            if needs_redraw {
                terminal.draw(|f| ui::draw_ui(f, &state, &mut tui))?;
                needs_redraw = false;
            }

            let Some(first_event) = poll_event_timeout(IDLE_POLL)? else {
                continue;
            };
            needs_redraw = true;

            // Process first event + drain ALL pending events before next draw
            let mut pending = vec![first_event];
            while let Some(event) = poll_event_immediate()? {
                pending.push(event);
            }

            for event in pending {
                let frame_area = viewport(&terminal)?;
                match route(&event, &mut tui, frame_area) {
                    Step::Continue => {}
                    Step::Dispatch(action) => {
                        debug!("Dispatching {:?}", action);
                        state = update(&state, action);
                    }
                    Step::Quit => {
                        info!("Quit requested");
                        return Ok(());
                    }
                }
            }
        }
    })();

    ratatui::restore();
    result
}
