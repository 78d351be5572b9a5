//! HTTP client for the shop backend.
//!
//! Three endpoints: catalog list, single product detail, order
//! submission. Product image paths are rewritten against the CDN base
//! URL before they enter the catalog.

use reqwest::Client;
use thiserror::Error;

use crate::catalog::{OrderPayload, OrderReceipt, Product, ProductList};

/// Errors that can occur when talking to the shop backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Transport-level failure (connect, TLS, body decode).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("unexpected status {status} from {path}")]
    Status { status: u16, path: String },
}

pub struct ShopApi {
    client: Client,
    base_url: String,
    cdn_url: String,
}

impl ShopApi {
    pub fn new(base_url: &str, cdn_url: &str) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            cdn_url: cdn_url.trim_end_matches('/').to_string(),
        })
    }

    /// `GET /product`: the whole catalog, images CDN-prefixed.
    pub async fn product_list(&self) -> Result<Vec<Product>, ApiError> {
        let path = "/product";
        let response = self.get(path).await?;
        let list: ProductList = response.json().await?;
        Ok(list.items.into_iter().map(|p| self.with_cdn(p)).collect())
    }

    /// `GET /product/{id}`: one product with its full description.
    pub async fn product(&self, id: &str) -> Result<Product, ApiError> {
        let path = format!("/product/{id}");
        let response = self.get(&path).await?;
        let product: Product = response.json().await?;
        Ok(self.with_cdn(product))
    }

    /// `POST /order`: submit the wire-shaped order.
    pub async fn submit_order(&self, payload: &OrderPayload) -> Result<OrderReceipt, ApiError> {
        let path = "/order";
        let response = self
            .client
            .post(self.url(path))
            .json(payload)
            .send()
            .await?;
        let response = Self::check_status(response, path)?;
        Ok(response.json().await?)
    }

    async fn get(&self, path: &str) -> Result<reqwest::Response, ApiError> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::check_status(response, path)
    }

    fn check_status(
        response: reqwest::Response,
        path: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
            });
        }
        Ok(response)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn with_cdn(&self, mut product: Product) -> Product {
        product.image = join_cdn(&self.cdn_url, &product.image);
        product
    }
}

fn join_cdn(cdn: &str, image: &str) -> String {
    format!("{}/{}", cdn, image.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::product;

    #[test]
    fn cdn_join_normalizes_slashes() {
        assert_eq!(join_cdn("https://cdn.example", "/a.png"), "https://cdn.example/a.png");
        assert_eq!(join_cdn("https://cdn.example", "a.png"), "https://cdn.example/a.png");
    }

    #[test]
    fn api_urls_build_from_trimmed_base() {
        let api = ShopApi::new("http://127.0.0.1:8081/api/", "http://cdn/").unwrap();
        assert_eq!(api.url("/product"), "http://127.0.0.1:8081/api/product");
        assert_eq!(api.url("/product/p1"), "http://127.0.0.1:8081/api/product/p1");
    }

    #[test]
    fn with_cdn_rewrites_image_only() {
        let api = ShopApi::new("http://base", "http://cdn").unwrap();
        let rewritten = api.with_cdn(product("a", "A", Some(10)));
        assert_eq!(rewritten.image, "http://cdn/a.png");
        assert_eq!(rewritten.id, "a");
    }
}
