//! End-to-end wiring scenarios: bus, state, views, and orchestration,
//! with the backend replaced by a recording fake.

use std::cell::RefCell;
use std::rc::Rc;

use lavka::bus::EventBus;
use lavka::catalog::{OrderPayload, OrderReceipt, Product};
use lavka::events::{FormField, Payload};
use lavka::net::{NetEvent, ShopGateway};
use lavka::ui::app::App;
use lavka::ui::forms::PaymentMethod;
use lavka::ui::modal::ModalContent;

#[derive(Debug, PartialEq, Eq)]
enum Call {
    Catalog,
    Product(String),
    Order(OrderPayload),
}

#[derive(Default)]
struct FakeGateway {
    calls: RefCell<Vec<Call>>,
}

impl FakeGateway {
    fn order_calls(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Order(_)))
            .count()
    }
}

impl ShopGateway for FakeGateway {
    fn fetch_catalog(&self) {
        self.calls.borrow_mut().push(Call::Catalog);
    }

    fn fetch_product(&self, id: String) {
        self.calls.borrow_mut().push(Call::Product(id));
    }

    fn submit_order(&self, payload: OrderPayload) {
        self.calls.borrow_mut().push(Call::Order(payload));
    }
}

fn product(id: &str, price: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        title: format!("Product {id}"),
        description: String::new(),
        image: format!("/{id}.png"),
        category: "other".to_string(),
        price,
    }
}

fn app_with_gateway() -> (App, Rc<FakeGateway>) {
    let gateway = Rc::new(FakeGateway::default());
    let app = App::new(EventBus::new(), Rc::clone(&gateway) as Rc<dyn ShopGateway>);
    (app, gateway)
}

fn publish_field(app: &App, name: &str, field: FormField, value: &str) {
    app.bus().publish(
        name,
        &Payload::Field {
            field,
            value: value.to_string(),
        },
    );
}

#[test]
fn startup_fetches_catalog_and_populates_state() {
    let (app, gateway) = app_with_gateway();
    app.start();
    assert_eq!(gateway.calls.borrow()[0], Call::Catalog);

    app.on_net(NetEvent::Catalog(vec![product("a", Some(100))]));
    assert_eq!(app.state().products().len(), 1);
    assert_eq!(app.state().products()[0].id, "a");
}

#[test]
fn browse_add_and_remove_round_trip() {
    let (app, gateway) = app_with_gateway();
    app.on_net(NetEvent::Catalog(vec![product("a", Some(100))]));

    // Opening the card triggers the detail fetch; the modal waits for it.
    app.select_cursor_card();
    assert_eq!(gateway.calls.borrow()[0], Call::Product("a".to_string()));
    assert!(!app.modal().is_open());

    let mut detailed = product("a", Some(100));
    detailed.description = "full description".to_string();
    app.on_net(NetEvent::ProductDetail(detailed));
    assert!(app.modal().is_open());
    assert_eq!(app.modal().content(), ModalContent::Preview);

    // Adding closes the modal and lands in the order.
    app.preview_add_to_basket();
    assert!(!app.modal().is_open());
    assert_eq!(app.state().item_count(), 1);
    assert_eq!(app.state().get_total(), 100);
    assert_eq!(app.page().counter(), 1);

    // Removing from the basket view empties the order again.
    app.open_basket();
    assert_eq!(app.modal().content(), ModalContent::Basket);
    app.basket_remove_selected();
    assert_eq!(app.state().item_count(), 0);
    assert_eq!(app.state().get_total(), 0);
    assert_eq!(app.page().counter(), 0);
}

#[test]
fn adding_twice_keeps_one_item() {
    let (app, _gateway) = app_with_gateway();
    app.on_net(NetEvent::Catalog(vec![product("a", Some(100))]));

    let mut detailed = product("a", Some(100));
    detailed.description = "d".to_string();
    app.select_cursor_card();
    app.on_net(NetEvent::ProductDetail(detailed.clone()));
    app.preview_add_to_basket();

    // Re-open the preview: the button now reflects "already in basket"
    // and a second add does not go through.
    app.select_cursor_card();
    app.on_net(NetEvent::ProductDetail(detailed));
    app.preview_add_to_basket();

    assert_eq!(app.state().item_count(), 1);
}

#[test]
fn incomplete_contacts_block_the_order_post() {
    let (app, gateway) = app_with_gateway();
    app.on_net(NetEvent::Catalog(vec![product("a", Some(100))]));

    publish_field(&app, "contacts.email:change", FormField::Email, "a@b.c");
    assert!(!app.contacts_form_view().valid(), "phone still missing");

    app.contacts_submit();
    assert_eq!(gateway.order_calls(), 0, "submit must not reach the backend");
}

#[test]
fn full_checkout_posts_ids_and_resets() {
    let (app, gateway) = app_with_gateway();
    app.on_net(NetEvent::Catalog(vec![
        product("a", Some(100)),
        product("b", Some(50)),
    ]));

    let a = app.state().product("a").unwrap();
    let b = app.state().product("b").unwrap();
    app.state().add_to_order(&a);
    app.state().add_to_order(&b);

    app.open_basket();
    app.basket_checkout();
    assert_eq!(app.modal().content(), ModalContent::OrderForm);

    app.order_set_payment(PaymentMethod::Card);
    assert!(!app.order_form_view().valid(), "address still missing");
    for ch in "5 Main St".chars() {
        app.order_edit_char(ch);
    }
    assert!(app.order_form_view().valid());
    app.order_submit_step();
    assert_eq!(app.modal().content(), ModalContent::ContactsForm);

    for ch in "a@b.c".chars() {
        app.contacts_edit_char(ch);
    }
    app.contacts_toggle_focus();
    for ch in "+100".chars() {
        app.contacts_edit_char(ch);
    }
    assert!(app.contacts_form_view().valid());
    app.contacts_submit();

    let calls = gateway.calls.borrow();
    let Some(Call::Order(payload)) = calls.last() else {
        panic!("expected an order submission, got {calls:?}");
    };
    assert_eq!(payload.items, vec!["a".to_string(), "b".to_string()]);
    assert_eq!(payload.total, 150);
    assert_eq!(payload.payment, "card");
    assert_eq!(payload.email, "a@b.c");
    assert_eq!(payload.phone, "+100");
    drop(calls);

    app.on_net(NetEvent::OrderAccepted(OrderReceipt {
        id: "order-1".to_string(),
        total: 150,
    }));
    assert_eq!(app.modal().content(), ModalContent::Success);
    assert_eq!(app.state().item_count(), 0);
    assert_eq!(app.page().counter(), 0);

    app.success_close();
    assert!(!app.modal().is_open());
}

#[test]
fn modal_open_locks_the_page() {
    let (app, _gateway) = app_with_gateway();
    app.on_net(NetEvent::Catalog(vec![
        product("a", Some(1)),
        product("b", Some(2)),
    ]));

    app.open_basket();
    assert!(app.page().locked());
    app.move_catalog_cursor(1);
    assert_eq!(app.page().cursor_id(), Some("a"), "navigation frozen");

    app.close_modal();
    assert!(!app.page().locked());
    app.move_catalog_cursor(1);
    assert_eq!(app.page().cursor_id(), Some("b"));
}
