//! # Display Component
//!
//! The calculator's readout: previous operand and pending operation on the
//! upper line (dimmed), the operand being typed on the lower line (bold).
//! Both lines are right-aligned like a hardware calculator.
//!
//! Numbers wider than the panel keep their least significant digits and are
//! cut on the left, with `…` marking the cut.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::state::Readout;
use crate::tui::component::Component;

/// Borders (2) plus two text lines.
pub const DISPLAY_HEIGHT: u16 = 4;

pub struct Display {
    pub previous_line: String,
    pub current_line: String,
}

impl Display {
    pub fn new(readout: &Readout) -> Self {
        Self {
            previous_line: readout.previous_line(),
            current_line: readout.current_line().to_string(),
        }
    }
}

impl Component for Display {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let inner_width = area.width.saturating_sub(2) as usize;
        let lines = vec![
            Line::styled(
                fit_width(&self.previous_line, inner_width),
                Style::default().add_modifier(Modifier::DIM),
            ),
            Line::styled(
                fit_width(&self.current_line, inner_width),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ];
        let paragraph = Paragraph::new(lines)
            .block(Block::bordered())
            .alignment(Alignment::Right);
        frame.render_widget(paragraph, area);
    }
}

/// Keeps the rightmost characters of `text` that fit in `width` columns.
pub fn fit_width(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    // Reserve one column for the ellipsis
    let budget = width - 1;
    let mut used = 0;
    let mut start = text.len();
    for (idx, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }
    format!("…{}", &text[start..])
}
