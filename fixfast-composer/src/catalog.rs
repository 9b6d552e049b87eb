//! Catalog snapshot
//!
//! Read-mostly cache of the backend product list. Replaced wholesale on
//! reload, never merged; consumers must treat it as stale after any
//! successful order submission and reload it. Freshness is event-driven,
//! there is no TTL.

use shared::models::Product;

/// In-memory snapshot of the product catalog
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    products: Vec<Product>,
}

impl CatalogSnapshot {
    /// Create an empty snapshot
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole snapshot. No partial merge.
    pub fn replace(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    /// Look up a product by id
    pub fn get(&self, id: i64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products in the snapshot
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Products with stock left to sell
    pub fn available(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.available_stock > 0)
    }

    /// Distinct supplier names, sorted
    pub fn suppliers(&self) -> Vec<String> {
        let mut suppliers: Vec<String> = self
            .products
            .iter()
            .map(|p| p.supplier.clone())
            .filter(|s| !s.is_empty())
            .collect();
        suppliers.sort();
        suppliers.dedup();
        suppliers
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(id: i64, name: &str, stock: i32, supplier: &str) -> Product {
        Product {
            id,
            name: name.to_string(),
            unit_price: dec!(10.00),
            available_stock: stock,
            supplier: supplier.to_string(),
        }
    }

    #[test]
    fn test_replace_is_wholesale() {
        let mut catalog = CatalogSnapshot::new();
        catalog.replace(vec![product(1, "Hammer", 5, "ACME")]);
        catalog.replace(vec![product(2, "Drill", 3, "Ferrex")]);
        assert!(catalog.get(1).is_none());
        assert!(catalog.get(2).is_some());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_available_filters_out_of_stock() {
        let mut catalog = CatalogSnapshot::new();
        catalog.replace(vec![
            product(1, "Hammer", 5, "ACME"),
            product(2, "Drill", 0, "Ferrex"),
        ]);
        let available: Vec<_> = catalog.available().map(|p| p.id).collect();
        assert_eq!(available, vec![1]);
    }

    #[test]
    fn test_suppliers_distinct_sorted() {
        let mut catalog = CatalogSnapshot::new();
        catalog.replace(vec![
            product(1, "Hammer", 5, "Ferrex"),
            product(2, "Drill", 3, "ACME"),
            product(3, "Saw", 2, "Ferrex"),
            product(4, "Nail", 9, ""),
        ]);
        assert_eq!(catalog.suppliers(), vec!["ACME", "Ferrex"]);
    }
}
