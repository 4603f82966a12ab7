use crate::core::state::CalculatorState;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::display::DISPLAY_HEIGHT;
use crate::tui::components::{Display, TitleBar, keypad};

use ratatui::Frame;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

/// Width of the calculator column. Narrower terminals get the full width.
pub const CALCULATOR_WIDTH: u16 = 36;

pub const HINTS: &str = "q quit · esc AC · ⌫ DEL · enter =";

/// Screen regions, shared by drawing and mouse hit testing.
pub struct UiAreas {
    pub title: Rect,
    pub display: Rect,
    pub keypad: Rect,
    pub hints: Rect,
}

pub fn layout(frame_area: Rect, show_hints: bool) -> UiAreas {
    use Constraint::{Length, Min};

    let [column] = Layout::horizontal([Length(CALCULATOR_WIDTH)])
        .flex(Flex::Center)
        .areas(frame_area);

    let hints_height = if show_hints { 1 } else { 0 };
    let [title, display, keypad, hints] = Layout::vertical([
        Length(1),
        Length(DISPLAY_HEIGHT),
        Min(keypad::BUTTON_HEIGHT * keypad::ROWS.len() as u16),
        Length(hints_height),
    ])
    .areas(column);

    UiAreas {
        title,
        display,
        keypad,
        hints,
    }
}

pub fn draw_ui(frame: &mut Frame, state: &CalculatorState, tui: &mut TuiState) {
    let areas = layout(frame.area(), tui.show_hints);

    TitleBar::new(status_for(state).to_string()).render(frame, areas.title);
    Display::new(&state.readout(tui.separator)).render(frame, areas.display);
    tui.keypad.render(frame, areas.keypad);

    if tui.show_hints {
        let hints = Span::styled(HINTS, Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(hints, areas.hints);
    }
}

/// Hit test: given a screen cell, find which keypad button (if any) is there.
pub fn hit_test_button(frame_area: Rect, show_hints: bool, column: u16, row: u16) -> Option<usize> {
    let areas = layout(frame_area, show_hints);
    keypad::hit_test(areas.keypad, column, row)
}

/// Explains results the reducer represents as special strings.
pub fn status_for(state: &CalculatorState) -> &'static str {
    match state.current_operand.as_deref() {
        Some("Infinity" | "-Infinity") => "Division by zero",
        Some("NaN") => "Undefined result",
        Some("") => "Not a number",
        _ => "",
    }
}
