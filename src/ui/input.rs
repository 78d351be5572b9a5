//! Key routing: turns terminal keys into intent events.
//!
//! The modal owns the keyboard while it is open; Escape is only
//! consulted then. Text keys go to whichever form field has focus,
//! everything else maps to navigation intents on the bus.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::ui::app::App;
use crate::ui::forms::{OrderFocus, PaymentMethod};
use crate::ui::modal::ModalContent;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    if app.modal().is_open() {
        handle_modal_key(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('b') => app.open_basket(),
        KeyCode::Up => app.move_catalog_cursor(-1),
        KeyCode::Down => app.move_catalog_cursor(1),
        KeyCode::Enter => app.select_cursor_card(),
        _ => {}
    }
}

fn handle_modal_key(app: &mut App, key: KeyEvent) {
    if matches!(key.code, KeyCode::Esc) {
        app.close_modal();
        return;
    }

    match app.modal().content() {
        ModalContent::Preview => {
            if matches!(key.code, KeyCode::Enter) {
                app.preview_add_to_basket();
            }
        }
        ModalContent::Basket => match key.code {
            KeyCode::Up => app.move_basket_cursor(-1),
            KeyCode::Down => app.move_basket_cursor(1),
            KeyCode::Char('d') | KeyCode::Delete => app.basket_remove_selected(),
            KeyCode::Enter => app.basket_checkout(),
            _ => {}
        },
        ModalContent::OrderForm => handle_order_form_key(app, key),
        ModalContent::ContactsForm => match key.code {
            KeyCode::Tab => app.contacts_toggle_focus(),
            KeyCode::Enter => app.contacts_submit(),
            KeyCode::Backspace => app.contacts_backspace(),
            KeyCode::Char(ch) => app.contacts_edit_char(ch),
            _ => {}
        },
        ModalContent::Success => {
            if matches!(key.code, KeyCode::Enter) {
                app.success_close();
            }
        }
        ModalContent::None => {}
    }
}

fn handle_order_form_key(app: &App, key: KeyEvent) {
    match key.code {
        KeyCode::Tab => app.order_toggle_focus(),
        KeyCode::Enter => app.order_submit_step(),
        _ => match app.order_focus() {
            OrderFocus::Payment => match key.code {
                KeyCode::Char('1') | KeyCode::Left => {
                    app.order_set_payment(PaymentMethod::Card)
                }
                KeyCode::Char('2') | KeyCode::Right => {
                    app.order_set_payment(PaymentMethod::Cash)
                }
                _ => {}
            },
            OrderFocus::Address => match key.code {
                KeyCode::Backspace => app.order_backspace(),
                KeyCode::Char(ch) => app.order_edit_char(ch),
                _ => {}
            },
        },
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char(ch)
}
