//! # TitleBar Component
//!
//! Top status bar: the application name plus an optional status message
//! (e.g. "Division by zero" while the readout shows `∞`).
//!
//! Purely presentational. All data arrives as props.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

pub struct TitleBar {
    /// Status message (empty = none)
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    pub fn text(&self) -> String {
        if self.status_message.is_empty() {
            "Abacus".to_string()
        } else {
            format!("Abacus | {}", self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(Span::raw(self.text()), area);
    }
}
