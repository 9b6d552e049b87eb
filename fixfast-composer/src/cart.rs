//! Draft order (cart)
//!
//! The mutable collection of line items a user is assembling. Lines are
//! unique per product; repeated adds merge quantities. Every mutation is
//! validated against the catalog snapshot before it is applied, so a failed
//! mutation leaves the draft untouched.

use rust_decimal::Decimal;
use shared::models::Product;
use shared::{Error, Result};

use crate::catalog::CatalogSnapshot;

/// One product + quantity entry within a draft order
///
/// Name and price are denormalized at add time: catalog price changes after
/// that point do not retroactively alter committed lines within the same
/// draft.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftLine {
    pub product_id: i64,
    pub product_name: String,
    pub unit_price: Decimal,
    pub quantity: i32,
    pub subtotal: Decimal,
}

impl DraftLine {
    fn new(product: &Product, quantity: i32) -> Self {
        Self {
            product_id: product.id,
            product_name: product.name.clone(),
            unit_price: product.unit_price,
            quantity,
            subtotal: Decimal::from(quantity) * product.unit_price,
        }
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
        self.subtotal = Decimal::from(quantity) * self.unit_price;
    }
}

/// Selector state for the add-to-cart form: the product picked in the
/// dropdown and the quantity field (defaults to 1)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductSelection {
    pub product_id: Option<i64>,
    pub quantity: i32,
}

impl Default for ProductSelection {
    fn default() -> Self {
        Self {
            product_id: None,
            quantity: 1,
        }
    }
}

impl ProductSelection {
    /// Clear the selected product and reset the quantity to 1
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Quantity clamped to what the selected product still has left after
    /// the cart's existing claim. UI convenience for the quantity selector
    /// only; committing an over-limit line still fails validation.
    pub fn clamped_quantity(&self, catalog: &CatalogSnapshot, draft: &DraftOrder) -> i32 {
        let Some(product_id) = self.product_id else {
            return self.quantity;
        };
        let Some(product) = catalog.get(product_id) else {
            return self.quantity;
        };
        let carted = draft.line(product_id).map_or(0, |l| l.quantity);
        let remaining = product.available_stock - carted;
        if self.quantity > remaining {
            remaining.max(1)
        } else {
            self.quantity
        }
    }
}

/// Client-held, not-yet-submitted order being assembled
///
/// Lives only in the composition session: created empty, discarded on
/// cancel, cleared on successful submission.
#[derive(Debug, Clone, Default)]
pub struct DraftOrder {
    pub buyer_name: String,
    lines: Vec<DraftLine>,
}

impl DraftOrder {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current line items, in insertion order
    pub fn lines(&self) -> &[DraftLine] {
        &self.lines
    }

    /// Line for a product, if any
    pub fn line(&self, product_id: i64) -> Option<&DraftLine> {
        self.lines.iter().find(|l| l.product_id == product_id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add the selected quantity of a product, merging into an existing line.
    ///
    /// Validation order: a product must be selected, it must exist in the
    /// snapshot, the quantity must be positive, and the merged quantity must
    /// not exceed the product's available stock. On success the selector is
    /// reset (product cleared, quantity back to 1).
    pub fn add_or_merge(
        &mut self,
        selection: &mut ProductSelection,
        catalog: &CatalogSnapshot,
    ) -> Result<()> {
        let product_id = selection
            .product_id
            .ok_or_else(|| Error::validation("No product selected"))?;
        let product = catalog
            .get(product_id)
            .ok_or_else(|| Error::validation("Product not found"))?;
        let requested = selection.quantity;
        if requested <= 0 {
            return Err(Error::validation("Quantity must be greater than zero"));
        }

        let existing = self.line(product_id).map_or(0, |l| l.quantity);
        let merged = existing.saturating_add(requested);
        if merged > product.available_stock {
            return Err(insufficient_stock(product.available_stock));
        }

        match self.lines.iter_mut().find(|l| l.product_id == product_id) {
            Some(line) => line.set_quantity(merged),
            None => self.lines.push(DraftLine::new(product, requested)),
        }

        selection.reset();
        Ok(())
    }

    /// Set the quantity of an existing line.
    ///
    /// Zero or negative removes the line. The bound is the product's total
    /// stock: with one line per product, the line being edited is the only
    /// claim on it. Editing a line for a product no longer in the snapshot
    /// is rejected.
    pub fn set_line_quantity(
        &mut self,
        product_id: i64,
        quantity: i32,
        catalog: &CatalogSnapshot,
    ) -> Result<()> {
        if quantity <= 0 {
            self.remove_line(product_id);
            return Ok(());
        }
        if self.line(product_id).is_none() {
            return Ok(());
        }
        let product = catalog
            .get(product_id)
            .ok_or_else(|| Error::validation("Product not found"))?;
        if quantity > product.available_stock {
            return Err(insufficient_stock(product.available_stock));
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.set_quantity(quantity);
        }
        Ok(())
    }

    /// Remove the line for a product. No error if absent.
    pub fn remove_line(&mut self, product_id: i64) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Order total, recomputed from the current line subtotals
    pub fn total(&self) -> Decimal {
        self.lines.iter().map(|l| l.subtotal).sum()
    }

    /// Total formatted for display, rounded to cents
    pub fn display_total(&self) -> String {
        shared::money::format_money(self.total())
    }

    /// Empty the lines and reset the buyer name. Used on cancel and after a
    /// successful submission.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.buyer_name.clear();
    }
}

fn insufficient_stock(available: i32) -> Error {
    Error::validation(format!("Insufficient stock. Available: {}", available))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use shared::models::Product;

    fn catalog_with(products: Vec<Product>) -> CatalogSnapshot {
        let mut catalog = CatalogSnapshot::new();
        catalog.replace(products);
        catalog
    }

    fn product(id: i64, price: Decimal, stock: i32) -> Product {
        Product {
            id,
            name: format!("Product {}", id),
            unit_price: price,
            available_stock: stock,
            supplier: "ACME".to_string(),
        }
    }

    fn select(product_id: i64, quantity: i32) -> ProductSelection {
        ProductSelection {
            product_id: Some(product_id),
            quantity,
        }
    }

    #[test]
    fn test_add_requires_selection() {
        let catalog = catalog_with(vec![product(1, dec!(5.00), 10)]);
        let mut draft = DraftOrder::new();
        let mut selection = ProductSelection::default();
        let err = draft.add_or_merge(&mut selection, &catalog).unwrap_err();
        assert_eq!(err, Error::validation("No product selected"));
        assert!(draft.is_empty());
    }

    #[test]
    fn test_add_unknown_product() {
        let catalog = catalog_with(vec![product(1, dec!(5.00), 10)]);
        let mut draft = DraftOrder::new();
        let mut selection = select(99, 1);
        let err = draft.add_or_merge(&mut selection, &catalog).unwrap_err();
        assert_eq!(err, Error::validation("Product not found"));
    }

    #[test]
    fn test_add_rejects_non_positive_quantity() {
        let catalog = catalog_with(vec![product(1, dec!(5.00), 10)]);
        let mut draft = DraftOrder::new();
        let mut selection = select(1, 0);
        assert!(draft.add_or_merge(&mut selection, &catalog).is_err());
        selection = select(1, -3);
        assert!(draft.add_or_merge(&mut selection, &catalog).is_err());
        assert!(draft.is_empty());
    }

    #[test]
    fn test_add_denormalizes_name_and_price() {
        let catalog = catalog_with(vec![product(1, dec!(2.50), 10)]);
        let mut draft = DraftOrder::new();
        let mut selection = select(1, 4);
        draft.add_or_merge(&mut selection, &catalog).unwrap();

        let line = draft.line(1).unwrap();
        assert_eq!(line.product_name, "Product 1");
        assert_eq!(line.unit_price, dec!(2.50));
        assert_eq!(line.quantity, 4);
        assert_eq!(line.subtotal, dec!(10.00));
        // Selector is reset on success.
        assert_eq!(selection, ProductSelection::default());
    }

    #[test]
    fn test_merge_sums_quantities_within_stock() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 2), &catalog).unwrap();
        draft.add_or_merge(&mut select(1, 3), &catalog).unwrap();

        assert_eq!(draft.lines().len(), 1);
        assert_eq!(draft.line(1).unwrap().quantity, 5);
        assert_eq!(draft.line(1).unwrap().subtotal, dec!(10.00));
    }

    #[test]
    fn test_merge_rejects_over_allocation() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 3), &catalog).unwrap();

        let mut selection = select(1, 3);
        let err = draft.add_or_merge(&mut selection, &catalog).unwrap_err();
        assert_eq!(err, Error::validation("Insufficient stock. Available: 5"));
        // Failed merge leaves the line unchanged and the selector intact.
        assert_eq!(draft.line(1).unwrap().quantity, 3);
        assert_eq!(selection, select(1, 3));
    }

    #[test]
    fn test_price_frozen_at_add_time() {
        let mut catalog = catalog_with(vec![product(1, dec!(2.00), 10)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 2), &catalog).unwrap();

        // Catalog reload with a new price; the committed line keeps its own.
        catalog.replace(vec![product(1, dec!(9.99), 10)]);
        draft.set_line_quantity(1, 3, &catalog).unwrap();
        assert_eq!(draft.line(1).unwrap().unit_price, dec!(2.00));
        assert_eq!(draft.line(1).unwrap().subtotal, dec!(6.00));
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 2), &catalog).unwrap();
        draft.set_line_quantity(1, 0, &catalog).unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_set_quantity_bounded_by_total_stock() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 2), &catalog).unwrap();

        let err = draft.set_line_quantity(1, 6, &catalog).unwrap_err();
        assert_eq!(err, Error::validation("Insufficient stock. Available: 5"));
        assert_eq!(draft.line(1).unwrap().quantity, 2);

        // Full stock is allowed: the edited line is the only claim.
        draft.set_line_quantity(1, 5, &catalog).unwrap();
        assert_eq!(draft.line(1).unwrap().quantity, 5);
    }

    #[test]
    fn test_set_quantity_on_absent_line_is_noop() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.set_line_quantity(1, 3, &catalog).unwrap();
        assert!(draft.is_empty());
    }

    #[test]
    fn test_remove_then_readd_full_stock() {
        // No leaked reservation: after removal the full stock is claimable.
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 4), &catalog).unwrap();
        draft.remove_line(1);
        draft.add_or_merge(&mut select(1, 5), &catalog).unwrap();
        assert_eq!(draft.line(1).unwrap().quantity, 5);
    }

    #[test]
    fn test_total_recomputed_after_every_mutation() {
        let catalog = catalog_with(vec![
            product(1, dec!(2.00), 10),
            product(2, dec!(3.50), 10),
        ]);
        let mut draft = DraftOrder::new();
        assert_eq!(draft.total(), dec!(0));

        draft.add_or_merge(&mut select(1, 2), &catalog).unwrap();
        assert_eq!(draft.total(), dec!(4.00));

        draft.add_or_merge(&mut select(2, 1), &catalog).unwrap();
        assert_eq!(draft.total(), dec!(7.50));

        draft.add_or_merge(&mut select(1, 1), &catalog).unwrap();
        assert_eq!(draft.total(), dec!(9.50));

        draft.set_line_quantity(2, 2, &catalog).unwrap();
        assert_eq!(draft.total(), dec!(11.00));

        draft.remove_line(1);
        assert_eq!(draft.total(), dec!(7.00));
        assert_eq!(draft.display_total(), "$7.00");
    }

    #[test]
    fn test_clear_resets_lines_and_buyer() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.buyer_name = "Juan".to_string();
        draft.add_or_merge(&mut select(1, 2), &catalog).unwrap();
        draft.clear();
        assert!(draft.is_empty());
        assert!(draft.buyer_name.is_empty());
    }

    #[test]
    fn test_selector_clamp_respects_carted_quantity() {
        let catalog = catalog_with(vec![product(1, dec!(2.00), 5)]);
        let mut draft = DraftOrder::new();
        draft.add_or_merge(&mut select(1, 3), &catalog).unwrap();

        let selection = select(1, 4);
        // 5 in stock, 3 already carted: selector clamps to the remaining 2.
        assert_eq!(selection.clamped_quantity(&catalog, &draft), 2);

        // Nothing left still clamps to 1; the clamp never commits a line.
        draft.set_line_quantity(1, 5, &catalog).unwrap();
        assert_eq!(select(1, 4).clamped_quantity(&catalog, &draft), 1);

        // Within bounds the requested quantity passes through.
        draft.set_line_quantity(1, 1, &catalog).unwrap();
        assert_eq!(select(1, 3).clamped_quantity(&catalog, &draft), 3);
    }
}
