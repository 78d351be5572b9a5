//! Catalog entities and the wire shapes exchanged with the shop backend.

use serde::{Deserialize, Serialize};

/// A single catalog item.
///
/// Identity is the `id`; everything else is presentation data. A product
/// is immutable once fetched, except for the `description` backfill that
/// happens when the detail endpoint resolves for the previewed item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub image: String,
    pub category: String,
    /// `None` marks a priceless item: it can sit in the basket but
    /// contributes nothing to the total.
    pub price: Option<u64>,
}

/// Response body of `GET /product`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductList {
    pub items: Vec<Product>,
}

/// Wire projection of the order-in-progress sent to `POST /order`.
///
/// The backend receives product ids only, never nested product objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub payment: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total: u64,
    pub items: Vec<String>,
}

/// Response body of a successful `POST /order`.
#[derive(Debug, Clone, Deserialize)]
pub struct OrderReceipt {
    pub id: String,
    pub total: u64,
}

#[cfg(test)]
pub(crate) fn product(id: &str, title: &str, price: Option<u64>) -> Product {
    Product {
        id: id.to_string(),
        title: title.to_string(),
        description: String::new(),
        image: format!("/{id}.png"),
        category: "other".to_string(),
        price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_deserializes_null_price() {
        let raw = r#"{
            "id": "p1",
            "title": "Mystery box",
            "description": "who knows",
            "image": "/p1.svg",
            "category": "other",
            "price": null
        }"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.price, None);
        assert_eq!(product.id, "p1");
    }

    #[test]
    fn product_deserializes_without_description() {
        let raw = r#"{"id":"p2","title":"Gadget","image":"/p2.svg","category":"hard","price":50}"#;
        let product: Product = serde_json::from_str(raw).unwrap();
        assert_eq!(product.description, "");
        assert_eq!(product.price, Some(50));
    }

    #[test]
    fn order_payload_serializes_ids_only() {
        let payload = OrderPayload {
            payment: "card".to_string(),
            email: "a@b.c".to_string(),
            phone: "+1".to_string(),
            address: "somewhere".to_string(),
            total: 150,
            items: vec!["a".to_string(), "b".to_string()],
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["items"], serde_json::json!(["a", "b"]));
        assert_eq!(value["total"], 150);
        assert!(value["items"][0].is_string());
    }
}
