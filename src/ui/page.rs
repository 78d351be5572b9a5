//! Main page: catalog listing plus the basket counter.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::ui::theme::{ACTIVE_HIGHLIGHT, DIM_TEXT, HEADER_TEXT};

/// One pre-formatted catalog entry (the card owns the formatting).
#[derive(Debug, Clone)]
pub struct CatalogRow {
    pub id: String,
    pub title: String,
    pub category: String,
    pub price_text: String,
    pub color: ratatui::style::Color,
}

#[derive(Default)]
pub struct Page {
    rows: Vec<CatalogRow>,
    cursor: usize,
    counter: usize,
    /// Set while the modal is open; freezes catalog navigation, the
    /// terminal analogue of the page scroll lock.
    locked: bool,
}

impl Page {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_catalog(&mut self, rows: Vec<CatalogRow>) {
        self.cursor = self.cursor.min(rows.len().saturating_sub(1));
        self.rows = rows;
    }

    pub fn set_counter(&mut self, counter: usize) {
        self.counter = counter;
    }

    pub fn counter(&self) -> usize {
        self.counter
    }

    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    pub fn locked(&self) -> bool {
        self.locked
    }

    pub fn move_cursor(&mut self, delta: isize) {
        if self.locked || self.rows.is_empty() {
            return;
        }
        let last = self.rows.len() - 1;
        self.cursor = self
            .cursor
            .saturating_add_signed(delta)
            .min(last);
    }

    pub fn cursor_id(&self) -> Option<&str> {
        self.rows.get(self.cursor).map(|row| row.id.as_str())
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        if self.rows.is_empty() {
            return vec![Line::from(Span::styled(
                "  Loading catalog...",
                Style::default().fg(DIM_TEXT),
            ))];
        }
        self.rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let selected = i == self.cursor;
                let marker = if selected { "> " } else { "  " };
                let base = if selected {
                    Style::default().bg(ACTIVE_HIGHLIGHT)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(marker.to_string(), base.fg(HEADER_TEXT)),
                    Span::styled(
                        format!("{:<32}", row.title),
                        base.fg(HEADER_TEXT).add_modifier(if selected {
                            Modifier::BOLD
                        } else {
                            Modifier::empty()
                        }),
                    ),
                    Span::styled(format!("{:<14}", row.category), base.fg(row.color)),
                    Span::styled(row.price_text.clone(), base.fg(DIM_TEXT)),
                ])
            })
            .collect()
    }
}
