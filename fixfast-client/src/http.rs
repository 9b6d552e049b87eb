//! HTTP client for network-based API calls

use crate::{ClientConfig, ClientError, ClientResult};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::models::{Order, OrderCreate, Product, ProductCreate, ProductUpdate};

/// HTTP client for making network requests to the FixFast backend
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client from configuration
    pub fn new(config: &ClientConfig) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let response = self.client.get(self.url(path)).send().await?;
        Self::handle_response(response).await
    }

    /// Make a POST request with JSON body
    pub async fn post<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.post(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: DeserializeOwned, B: serde::Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let response = self.client.put(self.url(path)).json(body).send().await?;
        Self::handle_response(response).await
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> ClientResult<()> {
        let response = self.client.delete(self.url(path)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Self::backend_error(status.as_u16(), response).await);
        }
        Ok(())
    }

    /// Handle the HTTP response
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            return Err(Self::backend_error(status.as_u16(), response).await);
        }
        response.json().await.map_err(Into::into)
    }

    /// Build a backend error preserving status and the raw payload
    async fn backend_error(status: u16, response: reqwest::Response) -> ClientError {
        let text = response.text().await.unwrap_or_default();
        let payload = serde_json::from_str::<Value>(&text)
            .unwrap_or_else(|_| serde_json::json!({ "message": text }));
        tracing::warn!(status, %payload, "backend rejected request");
        ClientError::Backend { status, payload }
    }

    // ========== Products API ==========

    /// Fetch all products
    pub async fn fetch_products(&self) -> ClientResult<Vec<Product>> {
        self.get("productos").await
    }

    /// Fetch one product by id
    pub async fn fetch_product(&self, id: i64) -> ClientResult<Product> {
        self.get(&format!("productos/{}", id)).await
    }

    /// Create a product
    pub async fn create_product(&self, product: &ProductCreate) -> ClientResult<Product> {
        self.post("productos", product).await
    }

    /// Update a product
    pub async fn update_product(&self, id: i64, update: &ProductUpdate) -> ClientResult<Product> {
        self.put(&format!("productos/{}", id), update).await
    }

    /// Delete a product. Failures keep the raw payload so the caller can run
    /// the delete-conflict classifier.
    pub async fn delete_product(&self, id: i64) -> ClientResult<()> {
        self.delete(&format!("productos/{}", id)).await
    }

    // ========== Orders API ==========

    /// Fetch all orders
    pub async fn fetch_orders(&self) -> ClientResult<Vec<Order>> {
        self.get("pedidos").await
    }

    /// Fetch one order by id
    pub async fn fetch_order(&self, id: i64) -> ClientResult<Order> {
        self.get(&format!("pedidos/{}", id)).await
    }

    /// Create an order. All-or-nothing: either the whole order is created or
    /// nothing is.
    pub async fn create_order(&self, order: &OrderCreate) -> ClientResult<Order> {
        self.post("pedidos", order).await
    }
}
