//! Composer session and submission coordinator
//!
//! [`ComposerSession`] owns the only shared mutable state of the engine: the
//! catalog snapshot, the draft order, the selector and the last error. All
//! mutations happen on one logical thread; network calls are the only
//! suspension points.

use shared::models::{Order, OrderCreate, OrderItemCreate};
use shared::{Error, Result};

use crate::api::StoreApi;
use crate::cart::{DraftOrder, ProductSelection};
use crate::catalog::CatalogSnapshot;

/// One order-composition session
#[derive(Debug, Default)]
pub struct ComposerSession {
    pub catalog: CatalogSnapshot,
    pub draft: DraftOrder,
    pub selection: ProductSelection,
    /// Confirmed orders for the review list
    orders: Vec<Order>,
    /// Last mutation failure, shown to the user until the next success
    error: Option<Error>,
    /// A submission is in flight. Callers must disable the submit trigger
    /// while set; the engine does not queue concurrent submits.
    busy: bool,
}

impl ComposerSession {
    /// Create a session with an empty draft and no catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load order history and catalog, sequenced. The cart cannot validate
    /// quantities until both have arrived.
    pub async fn initialize(&mut self, api: &impl StoreApi) -> Result<()> {
        self.load_orders(api).await?;
        self.load_catalog(api).await
    }

    /// Reload the catalog snapshot, replacing it wholesale
    pub async fn load_catalog(&mut self, api: &impl StoreApi) -> Result<()> {
        let products = api.fetch_products().await?;
        tracing::debug!(count = products.len(), "catalog loaded");
        self.catalog.replace(products);
        Ok(())
    }

    /// Reload the confirmed-order list
    pub async fn load_orders(&mut self, api: &impl StoreApi) -> Result<()> {
        self.orders = api.fetch_orders().await?;
        tracing::debug!(count = self.orders.len(), "orders loaded");
        Ok(())
    }

    /// Confirmed orders last loaded
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Fetch one confirmed order for the detail view
    pub async fn order_detail(&self, api: &impl StoreApi, id: i64) -> Result<Order> {
        api.fetch_order(id).await
    }

    /// Last mutation failure, if any
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// True while a submission is in flight
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    // ========== Cart mutations ==========
    //
    // Each wrapper records the failure in the session error slot and leaves
    // the draft untouched; a success clears the slot.

    /// Add the current selection to the cart
    pub fn add_to_cart(&mut self) -> Result<()> {
        let result = self
            .draft
            .add_or_merge(&mut self.selection, &self.catalog);
        self.record(&result);
        result
    }

    /// Change the quantity of a cart line (zero removes it)
    pub fn set_line_quantity(&mut self, product_id: i64, quantity: i32) -> Result<()> {
        let result = self
            .draft
            .set_line_quantity(product_id, quantity, &self.catalog);
        self.record(&result);
        result
    }

    /// Remove a cart line unconditionally
    pub fn remove_line(&mut self, product_id: i64) {
        self.draft.remove_line(product_id);
    }

    /// Discard the draft: empty cart, cleared buyer, fresh selector
    pub fn cancel(&mut self) {
        self.draft.clear();
        self.selection.reset();
        self.error = None;
    }

    fn record(&mut self, result: &Result<()>) {
        self.error = result.as_ref().err().cloned();
    }

    // ========== Submission ==========

    /// Submit the draft as an order.
    ///
    /// On success the draft is cleared and the catalog reloaded (stock has
    /// changed server-side); the confirmed order is returned for display.
    /// On failure the draft is left intact for correction and the catalog is
    /// not reloaded, since the mutating call did not take effect. The busy
    /// flag is released on both paths.
    pub async fn submit(&mut self, api: &impl StoreApi) -> Result<Order> {
        if self.busy {
            return Err(Error::validation("A submission is already in progress"));
        }

        let buyer_name = self.draft.buyer_name.trim().to_string();
        if buyer_name.is_empty() {
            return self.reject(Error::validation("Buyer name is required"));
        }
        if self.draft.is_empty() {
            return self.reject(Error::validation("Add at least one product to the cart"));
        }

        let request = OrderCreate {
            buyer_name,
            items: self
                .draft
                .lines()
                .iter()
                .map(|line| OrderItemCreate {
                    product_id: line.product_id,
                    quantity: line.quantity,
                })
                .collect(),
        };

        self.busy = true;
        let result = api.create_order(&request).await;

        match result {
            Ok(order) => {
                tracing::info!(order_id = order.id, "order submitted");
                self.draft.clear();
                self.selection.reset();
                self.error = None;

                // Reconciliation: the submit consumed stock, so the snapshot
                // is stale. The busy flag stays set until the reloads are
                // done, so callers cannot re-enable the submit trigger
                // against a stale catalog. A failed reload keeps the stale
                // snapshot and is only logged; the order itself went through.
                if let Err(err) = self.load_catalog(api).await {
                    tracing::warn!(error = %err, "catalog reload after submit failed");
                }
                if let Err(err) = self.load_orders(api).await {
                    tracing::warn!(error = %err, "order reload after submit failed");
                }
                self.busy = false;
                Ok(order)
            }
            Err(err) => {
                self.busy = false;
                tracing::warn!(error = %err, "order submission failed");
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    fn reject(&mut self, err: Error) -> Result<Order> {
        self.error = Some(err.clone());
        Err(err)
    }
}
