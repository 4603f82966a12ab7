//! # Keypad Component
//!
//! The button grid, laid out like the classic four-column calculator:
//!
//! ```text
//! ┌─────────────┬──────┬──────┐
//! │     AC      │ DEL  │  ÷   │
//! ├──────┬──────┼──────┼──────┤
//! │  1   │  2   │  3   │  *   │
//! │  4   │  5   │  6   │  +   │
//! │  7   │  8   │  9   │  -   │
//! ├──────┼──────┼──────┴──────┤
//! │  .   │  0   │      =      │
//! └──────┴──────┴─────────────┘
//! ```
//!
//! Buttons are activated by a mouse click or by typing what is printed on
//! them. `Esc` doubles as `AC`, `Backspace` as `DEL`, `Enter` as `=`.
//! The last activated button stays highlighted until another one is pressed.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::core::action::Action;
use crate::core::keys::{CLEAR_LABEL, DELETE_LABEL, EVALUATE_LABEL};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

/// Borders (2) plus one label line per button row.
pub const BUTTON_HEIGHT: u16 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    /// Relative width within its row.
    pub span: u16,
}

const fn button(label: &'static str, span: u16) -> Button {
    Button { label, span }
}

pub static ROWS: [&[Button]; 5] = [
    &[button(CLEAR_LABEL, 2), button(DELETE_LABEL, 1), button("÷", 1)],
    &[button("1", 1), button("2", 1), button("3", 1), button("*", 1)],
    &[button("4", 1), button("5", 1), button("6", 1), button("+", 1)],
    &[button("7", 1), button("8", 1), button("9", 1), button("-", 1)],
    &[button(".", 1), button("0", 1), button(EVALUATE_LABEL, 2)],
];

/// Every button in reading order.
pub fn buttons() -> impl Iterator<Item = &'static Button> {
    ROWS.iter().flat_map(|row| row.iter())
}

pub fn button_count() -> usize {
    ROWS.iter().map(|row| row.len()).sum()
}

/// Index of the button that fires `action`, for highlighting.
pub fn index_of(action: Action) -> Option<usize> {
    buttons().position(|b| Action::from_label(b.label) == Some(action))
}

/// Screen rectangles of every button, in the same order as `buttons()`.
pub fn button_areas(area: Rect) -> Vec<Rect> {
    let row_areas = Layout::vertical(ROWS.iter().map(|_| Constraint::Fill(1))).split(area);
    ROWS.iter()
        .zip(row_areas.iter())
        .flat_map(|(row, row_area)| {
            Layout::horizontal(row.iter().map(|b| Constraint::Fill(b.span)))
                .split(*row_area)
                .to_vec()
        })
        .collect()
}

/// The button under a screen cell, if any.
pub fn hit_test(area: Rect, column: u16, row: u16) -> Option<usize> {
    let position = Position::new(column, row);
    button_areas(area).iter().position(|r| r.contains(position))
}

pub struct Keypad {
    /// Index of the most recently activated button.
    pub pressed: Option<usize>,
}

impl Keypad {
    pub fn new() -> Self {
        Self { pressed: None }
    }

    /// Fires the button at `index` and remembers it for highlighting.
    pub fn press(&mut self, index: usize) -> Option<Action> {
        let button = buttons().nth(index)?;
        self.pressed = Some(index);
        Action::from_label(button.label)
    }

    fn highlight(&mut self, action: Action) -> Action {
        self.pressed = index_of(action);
        action
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler for Keypad {
    type Event = Action;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Action> {
        let action = match event {
            TuiEvent::Key(c) => Action::from_key(*c)?,
            TuiEvent::Backspace => Action::DeleteDigit,
            TuiEvent::Enter => Action::Evaluate,
            TuiEvent::Escape => Action::Clear,
            // Clicks need the frame layout and are resolved by the event loop
            _ => return None,
        };
        Some(self.highlight(action))
    }
}

impl Component for Keypad {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        for (index, (button, button_area)) in buttons().zip(button_areas(area)).enumerate() {
            let mut style = match Action::from_label(button.label) {
                Some(Action::ChooseOperation(_)) => Style::default().fg(Color::Yellow),
                Some(Action::Evaluate) => Style::default().fg(Color::Green),
                Some(Action::Clear | Action::DeleteDigit) => Style::default().fg(Color::Red),
                _ => Style::default(),
            };
            if self.pressed == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }

            // Vertically centre the label inside taller buttons
            let top_padding = button_area.height.saturating_sub(BUTTON_HEIGHT) / 2;
            let mut text = vec![""; top_padding as usize];
            text.push(button.label);

            let paragraph = Paragraph::new(text.join("\n"))
                .block(Block::bordered().border_style(style))
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(paragraph, button_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::operation::Operation;
    use crate::test_support::{buffer_text, digit};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_every_label_maps_to_an_action() {
        assert_eq!(button_count(), 18);
        for b in buttons() {
            assert!(Action::from_label(b.label).is_some(), "label {}", b.label);
        }
    }

    #[test]
    fn test_button_areas_cover_the_grid() {
        let area = Rect::new(0, 0, 40, 15);
        let areas = button_areas(area);
        assert_eq!(areas.len(), button_count());
        // AC spans two columns
        assert_eq!(areas[0].width, 20);
        assert_eq!(areas[1].width, 10);
        // Last row: ".", "0", "=" (span 2)
        assert_eq!(areas[17].width, 20);
        assert_eq!(areas[17].x, 20);
        assert_eq!(areas[17].y, 12);
    }

    #[test]
    fn test_hit_test() {
        let area = Rect::new(0, 0, 40, 15);
        assert_eq!(hit_test(area, 1, 1), Some(0)); // AC
        assert_eq!(hit_test(area, 35, 1), Some(2)); // ÷
        assert_eq!(hit_test(area, 1, 4), Some(3)); // 1
        assert_eq!(hit_test(area, 39, 14), Some(17)); // =
        assert_eq!(hit_test(area, 41, 1), None);
        assert_eq!(hit_test(area, 1, 15), None);
    }

    #[test]
    fn test_press_highlights_and_fires() {
        let mut keypad = Keypad::new();
        assert_eq!(keypad.press(2), Some(Action::ChooseOperation(Operation::Divide)));
        assert_eq!(keypad.pressed, Some(2));
        assert_eq!(keypad.press(3), Some(Action::AddDigit(digit('1'))));
        assert_eq!(keypad.pressed, Some(3));
        assert_eq!(keypad.press(99), None);
    }

    #[test]
    fn test_keys_map_to_buttons() {
        let mut keypad = Keypad::new();
        assert_eq!(
            keypad.handle_event(&TuiEvent::Key('7')),
            Some(Action::AddDigit(digit('7')))
        );
        assert_eq!(keypad.pressed, index_of(Action::AddDigit(digit('7'))));
        assert_eq!(keypad.handle_event(&TuiEvent::Backspace), Some(Action::DeleteDigit));
        assert_eq!(keypad.handle_event(&TuiEvent::Enter), Some(Action::Evaluate));
        assert_eq!(keypad.handle_event(&TuiEvent::Escape), Some(Action::Clear));
        assert_eq!(keypad.pressed, Some(0));
        assert_eq!(keypad.handle_event(&TuiEvent::Key('?')), None);
        assert_eq!(keypad.handle_event(&TuiEvent::MouseClick(0, 0)), None);
    }

    #[test]
    fn test_slash_highlights_divide() {
        let mut keypad = Keypad::new();
        keypad.handle_event(&TuiEvent::Key('/'));
        assert_eq!(keypad.pressed, Some(2));
    }

    #[test]
    fn test_grid_indices_follow_reading_order() {
        let labels: Vec<&str> = buttons().map(|b| b.label).collect();
        assert_eq!(
            labels,
            vec![
                "AC", "DEL", "÷", "1", "2", "3", "*", "4", "5", "6", "+", "7", "8", "9", "-", ".",
                "0", "=",
            ]
        );
        assert_eq!(index_of(Action::Evaluate), Some(17));
        assert_eq!(index_of(Action::ChooseOperation(Operation::Divide)), Some(2));
    }

    #[test]
    fn test_highlight_survives_redraws() {
        let backend = TestBackend::new(40, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut keypad = Keypad::new();
        keypad.press(2);

        for _ in 0..3 {
            terminal.draw(|f| keypad.render(f, f.area())).unwrap();
        }

        assert_eq!(keypad.pressed, Some(2));
        let cell = &terminal.backend().buffer()[(35, 1)];
        assert!(cell.modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_keypad_renders_all_labels() {
        let backend = TestBackend::new(40, 15);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut keypad = Keypad::new();

        terminal.draw(|f| keypad.render(f, f.area())).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        for b in buttons() {
            assert!(text.contains(b.label), "missing {}", b.label);
        }
    }
}
