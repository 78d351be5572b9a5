//! Order confirmation view.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, DIM_TEXT, STATUS_OK};

#[derive(Default)]
pub struct Success {
    total: u64,
}

impl Success {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        vec![
            Line::from(Span::styled(
                "Order placed!",
                Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                format!("{} cr. written off", self.total),
                Style::default().fg(DIM_TEXT),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Back to catalog [Enter]",
                Style::default().fg(ACCENT),
            )),
        ]
    }
}
