//! Modal overlay state machine: {closed, open}.
//!
//! `render` sets content and opens; `close` clears content. Re-opening
//! while already open replaces the content and keeps the single active
//! flag. The Escape handling lives in the input layer and is only
//! consulted while the modal is open.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::EventBus;
use crate::events::{BusEvent, Payload};

/// Which view currently owns the modal body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalContent {
    #[default]
    None,
    Preview,
    Basket,
    OrderForm,
    ContactsForm,
    Success,
}

#[derive(Default)]
struct ModalState {
    active: bool,
    content: ModalContent,
}

#[derive(Clone)]
pub struct Modal {
    inner: Rc<RefCell<ModalState>>,
    bus: EventBus,
}

impl Modal {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ModalState::default())),
            bus,
        }
    }

    /// Raise the active flag and announce the open. Idempotent on the
    /// flag; the announcement fires on every call, like the DOM original.
    pub fn open(&self) {
        self.inner.borrow_mut().active = true;
        self.bus.emit(BusEvent::ModalOpen, &Payload::None);
    }

    /// Drop the active flag and clear the content.
    pub fn close(&self) {
        {
            let mut state = self.inner.borrow_mut();
            state.active = false;
            state.content = ModalContent::None;
        }
        self.bus.emit(BusEvent::ModalClose, &Payload::None);
    }

    /// Set content, then open. Always ends in the open state.
    pub fn render(&self, content: ModalContent) {
        self.inner.borrow_mut().content = content;
        self.open();
    }

    pub fn is_open(&self) -> bool {
        self.inner.borrow().active
    }

    pub fn content(&self) -> ModalContent {
        self.inner.borrow().content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn render_transitions_to_open_and_sets_content() {
        let modal = Modal::new(EventBus::new());
        assert!(!modal.is_open());

        modal.render(ModalContent::Basket);
        assert!(modal.is_open());
        assert_eq!(modal.content(), ModalContent::Basket);
    }

    #[test]
    fn reopening_replaces_content_with_one_active_flag() {
        let modal = Modal::new(EventBus::new());
        modal.render(ModalContent::Preview);
        modal.render(ModalContent::Basket);

        assert!(modal.is_open());
        assert_eq!(modal.content(), ModalContent::Basket);

        modal.close();
        assert!(!modal.is_open(), "a single close undoes repeated opens");
    }

    #[test]
    fn close_clears_content_and_publishes() {
        let bus = EventBus::new();
        let closes = Rc::new(Cell::new(0));
        let clone = Rc::clone(&closes);
        bus.on(BusEvent::ModalClose, move |_, _| clone.set(clone.get() + 1));

        let modal = Modal::new(bus);
        modal.render(ModalContent::Success);
        modal.close();

        assert_eq!(modal.content(), ModalContent::None);
        assert_eq!(closes.get(), 1);
    }

    #[test]
    fn every_open_announces_for_the_scroll_lock() {
        let bus = EventBus::new();
        let opens = Rc::new(Cell::new(0));
        let clone = Rc::clone(&opens);
        bus.on(BusEvent::ModalOpen, move |_, _| clone.set(clone.get() + 1));

        let modal = Modal::new(bus);
        modal.render(ModalContent::Preview);
        modal.render(ModalContent::Basket);

        assert_eq!(opens.get(), 2);
    }
}
