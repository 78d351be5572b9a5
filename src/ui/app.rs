//! Orchestration: wires state changes to view re-renders and
//! view-emitted intents to state mutations.
//!
//! `App` is the explicit application context: bus, state, gateway, and
//! views are constructed once here and handed to whoever needs them.
//! Views never read the state; every read below happens in a bus handler
//! or an input-action method, which is orchestration code.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use regex::Regex;
use tracing::{debug, info};

use crate::bus::EventBus;
use crate::events::{
    field_change_name, BusEvent, FormErrors, FormField, Payload, FIELD_CHANGE_PATTERN,
};
use crate::net::{NetEvent, ShopGateway};
use crate::state::AppState;
use crate::ui::basket::{Basket, BasketRow};
use crate::ui::card::{self, Card};
use crate::ui::forms::{ContactsForm, OrderForm, OrderFocus, PaymentMethod};
use crate::ui::modal::{Modal, ModalContent};
use crate::ui::page::Page;
use crate::ui::success::Success;

pub struct App {
    bus: EventBus,
    state: AppState,
    gateway: Rc<dyn ShopGateway>,
    modal: Modal,
    page: Rc<RefCell<Page>>,
    card: Rc<RefCell<Card>>,
    basket: Rc<RefCell<Basket>>,
    order_form: Rc<RefCell<OrderForm>>,
    contacts_form: Rc<RefCell<ContactsForm>>,
    success: Rc<RefCell<Success>>,
    should_quit: bool,
}

impl App {
    pub fn new(bus: EventBus, gateway: Rc<dyn ShopGateway>) -> Self {
        let state = AppState::new(bus.clone());
        let app = Self {
            state,
            gateway,
            modal: Modal::new(bus.clone()),
            page: Rc::new(RefCell::new(Page::new())),
            card: Rc::new(RefCell::new(Card::new())),
            basket: Rc::new(RefCell::new(Basket::new())),
            order_form: Rc::new(RefCell::new(OrderForm::new())),
            contacts_form: Rc::new(RefCell::new(ContactsForm::new())),
            success: Rc::new(RefCell::new(Success::new())),
            should_quit: false,
            bus,
        };
        app.wire();
        app
    }

    /// Kick off the startup catalog fetch.
    pub fn start(&self) {
        self.gateway.fetch_catalog();
    }

    /// Register every state↔view subscription. Called once from `new`.
    fn wire(&self) {
        let bus = &self.bus;

        // Diagnostics tap over everything that crosses the bus.
        bus.subscribe_all(|name, payload| debug!(event = name, payload = ?payload, "bus"));

        // User opened a card -> record the preview target.
        {
            let state = self.state.clone();
            bus.on(BusEvent::CardSelected, move |_, payload| {
                if let Payload::Product(product) = payload {
                    state.set_preview(product);
                }
            });
        }

        // Preview changed -> fetch the full description; the modal opens
        // once the detail arrives (see `on_net`). A cleared preview just
        // closes the modal.
        {
            let gateway = Rc::clone(&self.gateway);
            let modal = self.modal.clone();
            bus.on(BusEvent::PreviewChanged, move |_, payload| match payload {
                Payload::Product(product) => gateway.fetch_product(product.id.clone()),
                _ => modal.close(),
            });
        }

        // Add intent -> mutate the order, dismiss the detail modal.
        {
            let state = self.state.clone();
            let modal = self.modal.clone();
            bus.on(BusEvent::AddToBasket, move |_, payload| {
                if let Payload::Product(product) = payload {
                    state.add_to_order(product);
                    modal.close();
                }
            });
        }

        {
            let state = self.state.clone();
            bus.on(BusEvent::RemoveFromBasket, move |_, payload| {
                if let Payload::Product(product) = payload {
                    state.remove_from_order(product);
                }
            });
        }

        // Any order mutation -> rebuild basket rows, total, counter.
        {
            let state = self.state.clone();
            let basket = Rc::clone(&self.basket);
            let page = Rc::clone(&self.page);
            bus.on(BusEvent::BasketChanged, move |_, _| {
                let items = state.order_items();
                let rows = items
                    .iter()
                    .enumerate()
                    .map(|(i, product)| BasketRow {
                        id: product.id.clone(),
                        index: i + 1,
                        title: product.title.clone(),
                        price_text: card::format_price(product.price),
                    })
                    .collect();
                let total = state.get_total();
                {
                    let mut basket = basket.borrow_mut();
                    basket.set_items(rows);
                    basket.set_total(total);
                }
                page.borrow_mut().set_counter(items.len());
            });
        }

        // Catalog replaced -> rebuild the page grid.
        {
            let page = Rc::clone(&self.page);
            bus.on(BusEvent::CatalogChanged, move |_, payload| {
                if let Payload::Catalog(items) = payload {
                    page.borrow_mut()
                        .set_catalog(items.iter().map(card::catalog_row).collect());
                }
            });
        }

        // Scroll lock while the modal is up.
        {
            let page = Rc::clone(&self.page);
            bus.on(BusEvent::ModalOpen, move |_, _| {
                page.borrow_mut().set_locked(true);
            });
        }
        {
            let page = Rc::clone(&self.page);
            bus.on(BusEvent::ModalClose, move |_, _| {
                page.borrow_mut().set_locked(false);
            });
        }

        // Navigation intents.
        {
            let state = self.state.clone();
            let basket = Rc::clone(&self.basket);
            let modal = self.modal.clone();
            bus.on(BusEvent::BasketOpen, move |_, _| {
                let total = state.get_total();
                basket.borrow_mut().set_total(total);
                modal.render(ModalContent::Basket);
            });
        }
        {
            let modal = self.modal.clone();
            bus.on(BusEvent::OrderOpen, move |_, _| {
                modal.render(ModalContent::OrderForm);
            });
        }
        {
            let modal = self.modal.clone();
            bus.on(BusEvent::OrderSubmit, move |_, _| {
                modal.render(ModalContent::ContactsForm);
            });
        }

        // One handler for every field edit of both checkout steps.
        {
            let state = self.state.clone();
            let pattern =
                Regex::new(FIELD_CHANGE_PATTERN).expect("field change pattern is valid");
            bus.subscribe_pattern(pattern, move |_, payload| {
                if let Payload::Field { field, value } = payload {
                    state.set_order_field(*field, value);
                }
            });
        }

        // Validation results back into the forms.
        {
            let order_form = Rc::clone(&self.order_form);
            bus.on(BusEvent::DeliveryErrorsChanged, move |_, payload| {
                if let Payload::Errors(errors) = payload {
                    let mut form = order_form.borrow_mut();
                    form.set_valid(errors.is_empty());
                    form.set_errors(join_errors(errors));
                }
            });
        }
        {
            let contacts_form = Rc::clone(&self.contacts_form);
            bus.on(BusEvent::ContactErrorsChanged, move |_, payload| {
                if let Payload::Errors(errors) = payload {
                    let mut form = contacts_form.borrow_mut();
                    form.set_valid(errors.is_empty());
                    form.set_errors(join_errors(errors));
                }
            });
        }

        // Checkout completion: submit, then wait for `on_net`.
        {
            let state = self.state.clone();
            let gateway = Rc::clone(&self.gateway);
            bus.on(BusEvent::SuccessOpen, move |_, _| {
                gateway.submit_order(state.build_order_payload());
            });
        }
        {
            let modal = self.modal.clone();
            bus.on(BusEvent::SuccessClose, move |_, _| modal.close());
        }
    }

    /// A network completion arrived on the UI channel.
    pub fn on_net(&self, event: NetEvent) {
        match event {
            NetEvent::Catalog(items) => {
                info!(count = items.len(), "catalog loaded");
                self.state.set_catalog(items);
            }
            NetEvent::ProductDetail(product) => {
                let updated = self
                    .state
                    .set_product_description(&product.id, &product.description)
                    .unwrap_or_else(|| product.clone());
                // Only show the card if this product is still previewed.
                if self.state.preview().as_deref() == Some(product.id.as_str()) {
                    let in_basket = self.state.contains(&product.id);
                    self.card.borrow_mut().render(updated, in_basket);
                    self.modal.render(ModalContent::Preview);
                }
            }
            NetEvent::OrderAccepted(receipt) => {
                info!(order_id = %receipt.id, total = receipt.total, "order accepted");
                let total = self.state.get_total();
                self.success.borrow_mut().set_total(total);
                self.state.clear_order();
                self.order_form.borrow_mut().reset();
                self.contacts_form.borrow_mut().reset();
                self.modal.render(ModalContent::Success);
            }
        }
    }

    // ── input actions ────────────────────────────────────────────────

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn move_catalog_cursor(&self, delta: isize) {
        self.page.borrow_mut().move_cursor(delta);
    }

    pub fn select_cursor_card(&self) {
        let id = match self.page.borrow().cursor_id() {
            Some(id) => id.to_string(),
            None => return,
        };
        if let Some(product) = self.state.product(&id) {
            self.bus
                .emit(BusEvent::CardSelected, &Payload::Product(product));
        }
    }

    pub fn open_basket(&self) {
        self.bus.emit(BusEvent::BasketOpen, &Payload::None);
    }

    pub fn close_modal(&self) {
        self.modal.close();
    }

    pub fn preview_add_to_basket(&self) {
        let (product, enabled) = {
            let card = self.card.borrow();
            (card.product().cloned(), card.button_enabled())
        };
        if !enabled {
            return;
        }
        if let Some(product) = product {
            self.bus
                .emit(BusEvent::AddToBasket, &Payload::Product(product));
        }
    }

    pub fn move_basket_cursor(&self, delta: isize) {
        self.basket.borrow_mut().move_cursor(delta);
    }

    pub fn basket_remove_selected(&self) {
        let id = match self.basket.borrow().selected_id() {
            Some(id) => id.to_string(),
            None => return,
        };
        if let Some(product) = self.state.order_items().into_iter().find(|p| p.id == id) {
            self.bus
                .emit(BusEvent::RemoveFromBasket, &Payload::Product(product));
        }
    }

    pub fn basket_checkout(&self) {
        if self.basket.borrow().checkout_enabled() {
            self.bus.emit(BusEvent::OrderOpen, &Payload::None);
        }
    }

    pub fn order_focus(&self) -> OrderFocus {
        self.order_form.borrow().focus()
    }

    pub fn order_toggle_focus(&self) {
        self.order_form.borrow_mut().toggle_focus();
    }

    pub fn order_set_payment(&self, method: PaymentMethod) {
        let value = self.order_form.borrow_mut().set_payment(method);
        self.publish_field(FormField::Payment, value);
    }

    pub fn order_edit_char(&self, ch: char) {
        let value = self.order_form.borrow_mut().push_char(ch);
        self.publish_field(FormField::Address, &value);
    }

    pub fn order_backspace(&self) {
        let value = self.order_form.borrow_mut().backspace();
        self.publish_field(FormField::Address, &value);
    }

    /// Step-1 submit: only past a clean delivery validation.
    pub fn order_submit_step(&self) {
        if self.order_form.borrow().valid() {
            self.bus.emit(BusEvent::OrderSubmit, &Payload::None);
        }
    }

    pub fn contacts_toggle_focus(&self) {
        self.contacts_form.borrow_mut().toggle_focus();
    }

    pub fn contacts_edit_char(&self, ch: char) {
        let (field, value) = self.contacts_form.borrow_mut().push_char(ch);
        self.publish_field(field, &value);
    }

    pub fn contacts_backspace(&self) {
        let (field, value) = self.contacts_form.borrow_mut().backspace();
        self.publish_field(field, &value);
    }

    /// Step-2 submit: triggers the order POST via `success:open`.
    pub fn contacts_submit(&self) {
        if self.contacts_form.borrow().valid() {
            self.bus.emit(BusEvent::SuccessOpen, &Payload::None);
        }
    }

    pub fn success_close(&self) {
        self.bus.emit(BusEvent::SuccessClose, &Payload::None);
    }

    fn publish_field(&self, field: FormField, value: &str) {
        self.bus.publish(
            &field_change_name(field),
            &Payload::Field {
                field,
                value: value.to_string(),
            },
        );
    }

    // ── render accessors ─────────────────────────────────────────────

    pub fn modal(&self) -> &Modal {
        &self.modal
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn bus(&self) -> &EventBus {
        &self.bus
    }

    pub fn page(&self) -> Ref<'_, Page> {
        self.page.borrow()
    }

    pub fn card_view(&self) -> Ref<'_, Card> {
        self.card.borrow()
    }

    pub fn basket_view(&self) -> Ref<'_, Basket> {
        self.basket.borrow()
    }

    pub fn order_form_view(&self) -> Ref<'_, OrderForm> {
        self.order_form.borrow()
    }

    pub fn contacts_form_view(&self) -> Ref<'_, ContactsForm> {
        self.contacts_form.borrow()
    }

    pub fn success_view(&self) -> Ref<'_, Success> {
        self.success.borrow()
    }
}

/// Single display string out of a domain's error map, original style.
fn join_errors(errors: &FormErrors) -> String {
    errors.values().cloned().collect::<Vec<_>>().join(" and ")
}
