//! Canonical event names and payloads flowing over the bus.
//!
//! Every cross-component interaction is one of these events. Views and
//! state never call each other directly; the orchestrator in `ui::app`
//! wires publishers to subscribers.

use std::collections::BTreeMap;

use crate::catalog::{OrderPayload, Product};

/// The canonical event set at the state↔view boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusEvent {
    /// Catalog replaced wholesale. Carries the new catalog.
    CatalogChanged,
    /// Detail view target changed. Carries the full product.
    PreviewChanged,
    /// Order items mutated.
    BasketChanged,
    /// User opened the detail view for a product.
    CardSelected,
    /// User requested adding a product to the basket.
    AddToBasket,
    /// User requested removing a product from the basket.
    RemoveFromBasket,
    BasketOpen,
    OrderOpen,
    OrderSubmit,
    /// A validation domain became fully valid. Carries the order snapshot.
    OrderReady,
    /// Delivery-domain (payment + address) error map recomputed.
    DeliveryErrorsChanged,
    /// Contact-domain (email + phone) error map recomputed.
    ContactErrorsChanged,
    ModalOpen,
    ModalClose,
    SuccessOpen,
    SuccessClose,
}

impl BusEvent {
    pub const fn name(self) -> &'static str {
        match self {
            BusEvent::CatalogChanged => "catalog:changed",
            BusEvent::PreviewChanged => "preview:changed",
            BusEvent::BasketChanged => "basket:changed",
            BusEvent::CardSelected => "card:select",
            BusEvent::AddToBasket => "basket:item-add",
            BusEvent::RemoveFromBasket => "basket:remove",
            BusEvent::BasketOpen => "basket:open",
            BusEvent::OrderOpen => "order:open",
            BusEvent::OrderSubmit => "order:submit",
            BusEvent::OrderReady => "order:ready",
            BusEvent::DeliveryErrorsChanged => "form-errors.delivery:changed",
            BusEvent::ContactErrorsChanged => "form-errors.contacts:changed",
            BusEvent::ModalOpen => "modal:open",
            BusEvent::ModalClose => "modal:close",
            BusEvent::SuccessOpen => "success:open",
            BusEvent::SuccessClose => "success:close",
        }
    }
}

/// One checkout field. Fields group into two independently validated
/// domains; editing a field revalidates only its own domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FormField {
    Payment,
    Address,
    Email,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormDomain {
    Delivery,
    Contact,
}

impl FormField {
    pub const fn as_str(self) -> &'static str {
        match self {
            FormField::Payment => "payment",
            FormField::Address => "address",
            FormField::Email => "email",
            FormField::Phone => "phone",
        }
    }

    pub const fn domain(self) -> FormDomain {
        match self {
            FormField::Payment | FormField::Address => FormDomain::Delivery,
            FormField::Email | FormField::Phone => FormDomain::Contact,
        }
    }
}

/// Mapping from field to human-readable message; empty ⇔ valid.
pub type FormErrors = BTreeMap<FormField, String>;

/// Event name for a single field edit, e.g. `order.address:change` or
/// `contacts.phone:change`. Matched wholesale by [`FIELD_CHANGE_PATTERN`].
pub fn field_change_name(field: FormField) -> String {
    let form = match field.domain() {
        FormDomain::Delivery => "order",
        FormDomain::Contact => "contacts",
    };
    format!("{form}.{}:change", field.as_str())
}

/// Pattern capturing every field edit of both checkout steps.
pub const FIELD_CHANGE_PATTERN: &str = r"^(order|contacts)\..+:change$";

/// Payload attached to a published event.
///
/// The bus does not inspect payloads; subscribers match on the variant
/// they expect and ignore the rest.
#[derive(Debug, Clone, Default)]
pub enum Payload {
    #[default]
    None,
    Product(Product),
    Catalog(Vec<Product>),
    Field { field: FormField, value: String },
    Errors(FormErrors),
    Order(OrderPayload),
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn field_change_names_follow_form_prefix() {
        assert_eq!(field_change_name(FormField::Address), "order.address:change");
        assert_eq!(field_change_name(FormField::Payment), "order.payment:change");
        assert_eq!(field_change_name(FormField::Email), "contacts.email:change");
        assert_eq!(field_change_name(FormField::Phone), "contacts.phone:change");
    }

    #[test]
    fn pattern_matches_every_field_change() {
        let re = Regex::new(FIELD_CHANGE_PATTERN).unwrap();
        for field in [
            FormField::Payment,
            FormField::Address,
            FormField::Email,
            FormField::Phone,
        ] {
            assert!(re.is_match(&field_change_name(field)));
        }
        assert!(!re.is_match(BusEvent::BasketChanged.name()));
        assert!(!re.is_match("order:open"));
    }

    #[test]
    fn domains_split_delivery_and_contact() {
        assert_eq!(FormField::Payment.domain(), FormDomain::Delivery);
        assert_eq!(FormField::Address.domain(), FormDomain::Delivery);
        assert_eq!(FormField::Email.domain(), FormDomain::Contact);
        assert_eq!(FormField::Phone.domain(), FormDomain::Contact);
    }
}
