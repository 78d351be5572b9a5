//! Bridges the async HTTP client to the synchronous UI loop.
//!
//! Each request is spawned on the tokio runtime; its completion lands in
//! the UI event channel as a [`NetEvent`]. There is no cancellation,
//! timeout, or retry: a failed request is logged and the operation
//! silently does not complete.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use tokio::runtime::Handle;
use tracing::error;

use crate::api::ShopApi;
use crate::catalog::{OrderPayload, OrderReceipt, Product};
use crate::ui::events::AppEvent;

/// A network completion delivered to the UI loop.
#[derive(Debug)]
pub enum NetEvent {
    Catalog(Vec<Product>),
    ProductDetail(Product),
    OrderAccepted(OrderReceipt),
}

/// The orchestrator's seam to the backend. Fire-and-forget: results come
/// back through the UI event channel, failures are logged and dropped.
pub trait ShopGateway {
    fn fetch_catalog(&self);
    fn fetch_product(&self, id: String);
    fn submit_order(&self, payload: OrderPayload);
}

#[derive(Clone)]
pub struct NetRunner {
    api: Arc<ShopApi>,
    handle: Handle,
    tx: Sender<AppEvent>,
}

impl NetRunner {
    pub fn new(api: Arc<ShopApi>, handle: Handle, tx: Sender<AppEvent>) -> Self {
        Self { api, handle, tx }
    }
}

impl ShopGateway for NetRunner {
    /// Startup catalog fetch. On failure the catalog simply stays empty.
    fn fetch_catalog(&self) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            match api.product_list().await {
                Ok(items) => {
                    let _ = tx.send(AppEvent::Net(NetEvent::Catalog(items)));
                }
                Err(err) => error!(op = "product_list", %err, "catalog fetch failed"),
            }
        });
    }

    /// Detail fetch for the previewed product. On failure the modal
    /// simply never opens.
    fn fetch_product(&self, id: String) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            match api.product(&id).await {
                Ok(item) => {
                    let _ = tx.send(AppEvent::Net(NetEvent::ProductDetail(item)));
                }
                Err(err) => error!(op = "product", %id, %err, "detail fetch failed"),
            }
        });
    }

    /// Order submission. On failure the checkout stays where it is.
    fn submit_order(&self, payload: OrderPayload) {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        self.handle.spawn(async move {
            match api.submit_order(&payload).await {
                Ok(receipt) => {
                    let _ = tx.send(AppEvent::Net(NetEvent::OrderAccepted(receipt)));
                }
                Err(err) => error!(op = "submit_order", %err, "order submission failed"),
            }
        });
    }
}
