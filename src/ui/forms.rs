//! Two-step checkout forms.
//!
//! Step 1 collects the payment method and delivery address, step 2 the
//! contact fields. The forms are dumb: every edit is published as a
//! field-change event and the validity/error text they display is handed
//! back to them by the orchestrator. They never validate anything.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::events::FormField;
use crate::ui::theme::{ACCENT, DIM_TEXT, HEADER_TEXT, STATUS_ERROR};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl PaymentMethod {
    /// Value sent over the wire and through field-change events.
    pub const fn wire(self) -> &'static str {
        match self {
            PaymentMethod::Card => "card",
            PaymentMethod::Cash => "cash",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            PaymentMethod::Card => "Card",
            PaymentMethod::Cash => "Cash",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderFocus {
    #[default]
    Payment,
    Address,
}

/// Step 1: payment method (mutually exclusive toggle) + address.
#[derive(Default)]
pub struct OrderForm {
    payment: Option<PaymentMethod>,
    address: String,
    valid: bool,
    errors: String,
    focus: OrderFocus,
}

impl OrderForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selecting a method deselects the other. Returns the wire value
    /// for the field-change event.
    pub fn set_payment(&mut self, method: PaymentMethod) -> &'static str {
        self.payment = Some(method);
        method.wire()
    }

    pub fn push_char(&mut self, ch: char) -> String {
        self.address.push(ch);
        self.address.clone()
    }

    pub fn backspace(&mut self) -> String {
        self.address.pop();
        self.address.clone()
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            OrderFocus::Payment => OrderFocus::Address,
            OrderFocus::Address => OrderFocus::Payment,
        };
    }

    pub fn focus(&self) -> OrderFocus {
        self.focus
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn set_errors(&mut self, errors: String) {
        self.errors = errors;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            focus_label("Payment", self.focus == OrderFocus::Payment),
            payment_toggle(self.payment),
            Line::from(""),
            focus_label("Address", self.focus == OrderFocus::Address),
            input_line(&self.address, self.focus == OrderFocus::Address),
            Line::from(""),
        ];
        lines.extend(footer_lines(&self.errors, self.valid, "Next [Enter]"));
        lines
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactFocus {
    #[default]
    Email,
    Phone,
}

impl ContactFocus {
    pub const fn field(self) -> FormField {
        match self {
            ContactFocus::Email => FormField::Email,
            ContactFocus::Phone => FormField::Phone,
        }
    }
}

/// Step 2: email + phone.
#[derive(Default)]
pub struct ContactsForm {
    email: String,
    phone: String,
    valid: bool,
    errors: String,
    focus: ContactFocus,
}

impl ContactsForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Edit the focused field; returns (field, new value) for the
    /// field-change event.
    pub fn push_char(&mut self, ch: char) -> (FormField, String) {
        let slot = self.focused_mut();
        slot.push(ch);
        (self.focus.field(), self.focused().to_string())
    }

    pub fn backspace(&mut self) -> (FormField, String) {
        let slot = self.focused_mut();
        slot.pop();
        (self.focus.field(), self.focused().to_string())
    }

    fn focused(&self) -> &str {
        match self.focus {
            ContactFocus::Email => &self.email,
            ContactFocus::Phone => &self.phone,
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            ContactFocus::Email => &mut self.email,
            ContactFocus::Phone => &mut self.phone,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            ContactFocus::Email => ContactFocus::Phone,
            ContactFocus::Phone => ContactFocus::Email,
        };
    }

    pub fn set_valid(&mut self, valid: bool) {
        self.valid = valid;
    }

    pub fn valid(&self) -> bool {
        self.valid
    }

    pub fn set_errors(&mut self, errors: String) {
        self.errors = errors;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            focus_label("Email", self.focus == ContactFocus::Email),
            input_line(&self.email, self.focus == ContactFocus::Email),
            Line::from(""),
            focus_label("Phone", self.focus == ContactFocus::Phone),
            input_line(&self.phone, self.focus == ContactFocus::Phone),
            Line::from(""),
        ];
        lines.extend(footer_lines(&self.errors, self.valid, "Pay [Enter]"));
        lines
    }
}

fn focus_label(label: &str, focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_TEXT)
    };
    Line::from(Span::styled(format!("{label}:"), style))
}

fn input_line(value: &str, focused: bool) -> Line<'static> {
    let caret = if focused { "_" } else { "" };
    Line::from(Span::styled(
        format!("  {value}{caret}"),
        Style::default().fg(HEADER_TEXT),
    ))
}

fn payment_toggle(selected: Option<PaymentMethod>) -> Line<'static> {
    let spans = [PaymentMethod::Card, PaymentMethod::Cash]
        .iter()
        .enumerate()
        .map(|(i, method)| {
            let active = selected == Some(*method);
            let style = if active {
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DIM_TEXT)
            };
            let mark = if active { "[x]" } else { "[ ]" };
            Span::styled(format!("  {mark} {}. {}", i + 1, method.label()), style)
        })
        .collect::<Vec<_>>();
    Line::from(spans)
}

fn footer_lines(errors: &str, valid: bool, submit: &str) -> Vec<Line<'static>> {
    let submit_style = if valid {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DIM_TEXT)
    };
    vec![
        Line::from(Span::styled(
            errors.to_string(),
            Style::default().fg(STATUS_ERROR),
        )),
        Line::from(Span::styled(submit.to_string(), submit_style)),
        Line::from(Span::styled(
            "Switch field [Tab]",
            Style::default().fg(DIM_TEXT),
        )),
    ]
}
