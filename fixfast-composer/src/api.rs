//! Transport seam between the engine and the backend
//!
//! The engine never talks to `reqwest` directly; it goes through [`StoreApi`]
//! so tests can drive the full flow against an in-memory backend.

use async_trait::async_trait;
use shared::Result;
use shared::models::{Order, OrderCreate, Product};

/// Backend operations the composer engine depends on
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Fetch the full product catalog
    async fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Fetch all confirmed orders
    async fn fetch_orders(&self) -> Result<Vec<Order>>;

    /// Fetch one confirmed order by id
    async fn fetch_order(&self, id: i64) -> Result<Order>;

    /// Create an order; all-or-nothing from the client's perspective
    async fn create_order(&self, order: &OrderCreate) -> Result<Order>;
}

/// Map a transport failure into the engine taxonomy, surfacing the backend
/// message verbatim.
fn into_remote(err: fixfast_client::ClientError) -> shared::Error {
    shared::Error::remote(err.message())
}

#[async_trait]
impl StoreApi for fixfast_client::HttpClient {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        fixfast_client::HttpClient::fetch_products(self)
            .await
            .map_err(into_remote)
    }

    async fn fetch_orders(&self) -> Result<Vec<Order>> {
        fixfast_client::HttpClient::fetch_orders(self)
            .await
            .map_err(into_remote)
    }

    async fn fetch_order(&self, id: i64) -> Result<Order> {
        fixfast_client::HttpClient::fetch_order(self, id)
            .await
            .map_err(into_remote)
    }

    async fn create_order(&self, order: &OrderCreate) -> Result<Order> {
        fixfast_client::HttpClient::create_order(self, order)
            .await
            .map_err(into_remote)
    }
}
