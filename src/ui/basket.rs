//! Basket view: indexed item rows, total, checkout button.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, HEADER_TEXT};

#[derive(Debug, Clone)]
pub struct BasketRow {
    pub id: String,
    pub index: usize,
    pub title: String,
    pub price_text: String,
}

#[derive(Default)]
pub struct Basket {
    rows: Vec<BasketRow>,
    total: u64,
    cursor: usize,
}

impl Basket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, rows: Vec<BasketRow>) {
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        self.rows = rows;
    }

    pub fn set_total(&mut self, total: u64) {
        self.total = total;
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.rows.get(self.cursor).map(|row| row.id.as_str())
    }

    /// Checkout is possible only for a non-empty basket.
    pub fn checkout_enabled(&self) -> bool {
        !self.rows.is_empty()
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines: Vec<Line<'static>> = if self.rows.is_empty() {
            vec![Line::from(Span::styled(
                "Basket is empty",
                Style::default().fg(DIM_TEXT),
            ))]
        } else {
            self.rows
                .iter()
                .enumerate()
                .map(|(i, row)| {
                    let base = if i == self.cursor {
                        Style::default().bg(ACTIVE_HIGHLIGHT)
                    } else {
                        Style::default()
                    };
                    Line::from(vec![
                        Span::styled(format!("{:>2}. ", row.index), base.fg(DIM_TEXT)),
                        Span::styled(format!("{:<32}", row.title), base.fg(HEADER_TEXT)),
                        Span::styled(row.price_text.clone(), base.fg(DIM_TEXT)),
                    ])
                })
                .collect()
        };
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("Total: {} cr.", self.total),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        )));
        let checkout_style = if self.checkout_enabled() {
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(DIM_TEXT)
        };
        lines.push(Line::from(Span::styled(
            "Checkout [Enter]   Remove [d]",
            checkout_style,
        )));
        lines
    }
}
