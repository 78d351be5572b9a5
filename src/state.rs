//! Application state: the single source of truth for the catalog, the
//! order-in-progress, the preview selection, and form validation.
//!
//! `AppState` is a cheap handle over shared interior state, created once
//! at startup. Every mutation publishes its change event *after* the
//! internal borrow is released, so a subscriber reacting to the event may
//! read the state again while the bus is still dispatching.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::EventBus;
use crate::catalog::{OrderPayload, Product};
use crate::events::{BusEvent, FormDomain, FormErrors, FormField, Payload};

const ERR_ADDRESS: &str = "Delivery address is required";
const ERR_PAYMENT: &str = "Select a payment method";
const ERR_EMAIL: &str = "Email address is required";
const ERR_PHONE: &str = "Phone number is required";

/// The mutable order-in-progress aggregate: checkout fields plus the
/// basket items. `items` holds no duplicate product ids; `total` is
/// recomputed from `items` whenever it is read for display or submission.
#[derive(Debug, Clone, Default)]
pub struct OrderDraft {
    pub payment: String,
    pub address: String,
    pub email: String,
    pub phone: String,
    pub items: Vec<Product>,
    pub total: u64,
}

#[derive(Default)]
struct Inner {
    catalog: Vec<Product>,
    preview: Option<String>,
    draft: OrderDraft,
    delivery_errors: FormErrors,
    contact_errors: FormErrors,
}

#[derive(Clone)]
pub struct AppState {
    inner: Rc<RefCell<Inner>>,
    bus: EventBus,
}

impl AppState {
    pub fn new(bus: EventBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner::default())),
            bus,
        }
    }

    /// Replace the catalog wholesale and announce the new contents.
    pub fn set_catalog(&self, items: Vec<Product>) {
        self.inner.borrow_mut().catalog = items.clone();
        self.bus
            .emit(BusEvent::CatalogChanged, &Payload::Catalog(items));
    }

    /// Record the product shown in the detail modal.
    pub fn set_preview(&self, product: &Product) {
        self.inner.borrow_mut().preview = Some(product.id.clone());
        self.bus
            .emit(BusEvent::PreviewChanged, &Payload::Product(product.clone()));
    }

    /// Backfill a catalog product's description from the detail fetch.
    /// Returns the updated product, if the id is still in the catalog.
    pub fn set_product_description(&self, id: &str, description: &str) -> Option<Product> {
        let mut inner = self.inner.borrow_mut();
        let product = inner.catalog.iter_mut().find(|p| p.id == id)?;
        product.description = description.to_string();
        Some(product.clone())
    }

    /// Append a product to the order. Idempotent by id: a product already
    /// present is left alone and no event fires.
    pub fn add_to_order(&self, product: &Product) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.draft.items.iter().any(|p| p.id == product.id) {
                return;
            }
            inner.draft.items.push(product.clone());
        }
        self.bus.emit(BusEvent::BasketChanged, &Payload::None);
    }

    /// Drop every order item matching the product's id. Publishes even
    /// when nothing was removed, so views can refresh unconditionally.
    pub fn remove_from_order(&self, product: &Product) {
        self.inner
            .borrow_mut()
            .draft
            .items
            .retain(|p| p.id != product.id);
        self.bus.emit(BusEvent::BasketChanged, &Payload::None);
    }

    pub fn clear_order(&self) {
        self.inner.borrow_mut().draft.items.clear();
        self.bus.emit(BusEvent::BasketChanged, &Payload::None);
    }

    /// Recompute the total from current items, store it, and return it.
    /// Priceless items count as zero.
    pub fn get_total(&self) -> u64 {
        let mut inner = self.inner.borrow_mut();
        let total = inner
            .draft
            .items
            .iter()
            .map(|p| p.price.unwrap_or(0))
            .sum();
        inner.draft.total = total;
        total
    }

    /// Write one checkout field, then revalidate that field's domain.
    /// The domain's errors event always fires; `order:ready` fires
    /// additionally when the domain came out fully valid.
    pub fn set_order_field(&self, field: FormField, value: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            let slot = match field {
                FormField::Payment => &mut inner.draft.payment,
                FormField::Address => &mut inner.draft.address,
                FormField::Email => &mut inner.draft.email,
                FormField::Phone => &mut inner.draft.phone,
            };
            *slot = value.to_string();
        }
        let valid = match field.domain() {
            FormDomain::Delivery => self.validate_delivery(),
            FormDomain::Contact => self.validate_contacts(),
        };
        if valid {
            self.bus
                .emit(BusEvent::OrderReady, &Payload::Order(self.build_order_payload()));
        }
    }

    /// Recompute the delivery-domain (payment + address) error map.
    /// Publishes the map regardless of outcome and returns "is valid".
    pub fn validate_delivery(&self) -> bool {
        let mut errors = FormErrors::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.draft.address.is_empty() {
                errors.insert(FormField::Address, ERR_ADDRESS.to_string());
            }
            if inner.draft.payment.is_empty() {
                errors.insert(FormField::Payment, ERR_PAYMENT.to_string());
            }
            inner.delivery_errors = errors.clone();
        }
        let valid = errors.is_empty();
        self.bus
            .emit(BusEvent::DeliveryErrorsChanged, &Payload::Errors(errors));
        valid
    }

    /// Recompute the contact-domain (email + phone) error map.
    pub fn validate_contacts(&self) -> bool {
        let mut errors = FormErrors::new();
        {
            let mut inner = self.inner.borrow_mut();
            if inner.draft.email.is_empty() {
                errors.insert(FormField::Email, ERR_EMAIL.to_string());
            }
            if inner.draft.phone.is_empty() {
                errors.insert(FormField::Phone, ERR_PHONE.to_string());
            }
            inner.contact_errors = errors.clone();
        }
        let valid = errors.is_empty();
        self.bus
            .emit(BusEvent::ContactErrorsChanged, &Payload::Errors(errors));
        valid
    }

    /// Project the order-in-progress into the wire shape: item ids in
    /// basket order and a freshly computed total.
    pub fn build_order_payload(&self) -> OrderPayload {
        let total = self.get_total();
        let inner = self.inner.borrow();
        OrderPayload {
            payment: inner.draft.payment.clone(),
            email: inner.draft.email.clone(),
            phone: inner.draft.phone.clone(),
            address: inner.draft.address.clone(),
            total,
            items: inner.draft.items.iter().map(|p| p.id.clone()).collect(),
        }
    }

    pub fn products(&self) -> Vec<Product> {
        self.inner.borrow().catalog.clone()
    }

    pub fn product(&self, id: &str) -> Option<Product> {
        self.inner.borrow().catalog.iter().find(|p| p.id == id).cloned()
    }

    pub fn order_items(&self) -> Vec<Product> {
        self.inner.borrow().draft.items.clone()
    }

    pub fn item_count(&self) -> usize {
        self.inner.borrow().draft.items.len()
    }

    /// O(n) scan; fine at catalog scale.
    pub fn contains(&self, id: &str) -> bool {
        self.inner.borrow().draft.items.iter().any(|p| p.id == id)
    }

    pub fn preview(&self) -> Option<String> {
        self.inner.borrow().preview.clone()
    }

    pub fn delivery_errors(&self) -> FormErrors {
        self.inner.borrow().delivery_errors.clone()
    }

    pub fn contact_errors(&self) -> FormErrors {
        self.inner.borrow().contact_errors.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product;
    use std::cell::Cell;

    fn state() -> AppState {
        AppState::new(EventBus::new())
    }

    fn basket_change_counter(bus: &EventBus) -> Rc<Cell<usize>> {
        let hits = Rc::new(Cell::new(0));
        let clone = Rc::clone(&hits);
        bus.on(BusEvent::BasketChanged, move |_, _| {
            clone.set(clone.get() + 1)
        });
        hits
    }

    #[test]
    fn add_is_idempotent_by_id() {
        let bus = EventBus::new();
        let state = AppState::new(bus.clone());
        let hits = basket_change_counter(&bus);

        let item = product("a", "Thing", Some(100));
        state.add_to_order(&item);
        state.add_to_order(&item);

        assert_eq!(state.item_count(), 1);
        assert_eq!(hits.get(), 1, "duplicate add publishes nothing");
    }

    #[test]
    fn remove_of_absent_item_still_publishes() {
        let bus = EventBus::new();
        let state = AppState::new(bus.clone());
        state.add_to_order(&product("a", "Thing", Some(100)));
        let hits = basket_change_counter(&bus);

        state.remove_from_order(&product("ghost", "Nope", Some(1)));

        assert_eq!(state.item_count(), 1);
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn total_is_sum_of_prices_and_zero_when_empty() {
        let state = state();
        assert_eq!(state.get_total(), 0);

        state.add_to_order(&product("a", "A", Some(100)));
        state.add_to_order(&product("b", "B", Some(50)));
        state.add_to_order(&product("c", "Priceless", None));

        assert_eq!(state.get_total(), 150);
    }

    #[test]
    fn payload_projects_ids_in_basket_order() {
        let state = state();
        state.add_to_order(&product("b", "B", Some(50)));
        state.add_to_order(&product("a", "A", Some(100)));
        state.set_order_field(FormField::Payment, "card");
        state.set_order_field(FormField::Address, "5 Main St");

        let payload = state.build_order_payload();
        assert_eq!(payload.items, vec!["b".to_string(), "a".to_string()]);
        assert_eq!(payload.total, 150);
        assert_eq!(payload.payment, "card");
        assert_eq!(payload.address, "5 Main St");
    }

    #[test]
    fn delivery_validation_reports_missing_fields_only() {
        let state = state();
        state.set_order_field(FormField::Payment, "cash");

        assert!(!state.validate_delivery());
        let errors = state.delivery_errors();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains_key(&FormField::Address));

        state.set_order_field(FormField::Payment, "");
        let errors = state.delivery_errors();
        assert!(errors.contains_key(&FormField::Address));
        assert!(errors.contains_key(&FormField::Payment));
    }

    #[test]
    fn errors_event_fires_even_when_valid() {
        let bus = EventBus::new();
        let state = AppState::new(bus.clone());
        let maps = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&maps);
        bus.on(BusEvent::DeliveryErrorsChanged, move |_, payload| {
            if let Payload::Errors(errors) = payload {
                sink.borrow_mut().push(errors.clone());
            }
        });

        state.set_order_field(FormField::Payment, "card");
        state.set_order_field(FormField::Address, "5 Main St");

        let maps = maps.borrow();
        assert_eq!(maps.len(), 2);
        assert!(!maps[0].is_empty(), "first edit leaves address missing");
        assert!(maps[1].is_empty(), "valid domain still publishes, empty map");
    }

    #[test]
    fn order_ready_fires_only_when_domain_valid() {
        let bus = EventBus::new();
        let state = AppState::new(bus.clone());
        let ready = Rc::new(Cell::new(0));
        let clone = Rc::clone(&ready);
        bus.on(BusEvent::OrderReady, move |_, _| clone.set(clone.get() + 1));

        state.set_order_field(FormField::Email, "a@b.c");
        assert_eq!(ready.get(), 0, "phone still missing");
        state.set_order_field(FormField::Phone, "+100");
        assert_eq!(ready.get(), 1);
    }

    #[test]
    fn contact_validation_is_independent_of_delivery() {
        let bus = EventBus::new();
        let state = AppState::new(bus.clone());
        let contact_maps = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&contact_maps);
        bus.on(BusEvent::ContactErrorsChanged, move |_, payload| {
            if let Payload::Errors(errors) = payload {
                sink.borrow_mut().push(errors.clone());
            }
        });

        state.set_order_field(FormField::Email, "a@b.c");

        let maps = contact_maps.borrow();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0].len(), 1);
        assert!(maps[0].contains_key(&FormField::Phone));
        assert_eq!(state.contact_errors(), maps[0], "stored map matches published");
        assert!(state.delivery_errors().is_empty(), "delivery untouched");
    }

    #[test]
    fn description_backfill_updates_catalog_product() {
        let state = state();
        state.set_catalog(vec![product("a", "A", Some(10))]);

        let updated = state.set_product_description("a", "long form text");
        assert_eq!(updated.map(|p| p.description), Some("long form text".into()));
        assert!(state.set_product_description("ghost", "x").is_none());
    }

    #[test]
    fn basket_change_handler_may_read_state_during_dispatch() {
        let bus = EventBus::new();
        let state = AppState::new(bus.clone());
        let observed = Rc::new(Cell::new(0u64));
        let reader = state.clone();
        let sink = Rc::clone(&observed);
        bus.on(BusEvent::BasketChanged, move |_, _| {
            sink.set(reader.get_total());
        });

        state.add_to_order(&product("a", "A", Some(100)));
        assert_eq!(observed.get(), 100);
    }
}
