//! Product Model

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product entity
///
/// Owned by the backend; clients hold read-only cached copies that are
/// replaced wholesale on reload, never mutated in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precioUnitario")]
    pub unit_price: Decimal,
    #[serde(rename = "stockActual")]
    pub available_stock: i32,
    #[serde(rename = "proveedor")]
    pub supplier: String,
}

/// Create product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCreate {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "precioUnitario")]
    pub unit_price: Decimal,
    #[serde(rename = "stockActual")]
    pub available_stock: i32,
    #[serde(rename = "proveedor")]
    pub supplier: String,
}

/// Update product payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductUpdate {
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    #[serde(rename = "precioUnitario")]
    pub unit_price: Option<Decimal>,
    #[serde(rename = "stockActual")]
    pub available_stock: Option<i32>,
    #[serde(rename = "proveedor")]
    pub supplier: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_product_wire_names() {
        let json = r#"{"id":3,"nombre":"Martillo","precioUnitario":12.5,"stockActual":8,"proveedor":"ACME"}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.name, "Martillo");
        assert_eq!(product.unit_price, dec!(12.5));
        assert_eq!(product.available_stock, 8);
        assert_eq!(product.supplier, "ACME");
    }

    #[test]
    fn test_product_create_serializes_spanish_fields() {
        let payload = ProductCreate {
            name: "Tornillo".to_string(),
            unit_price: dec!(0.15),
            available_stock: 1000,
            supplier: "Ferrex".to_string(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("nombre").is_some());
        assert!(json.get("precioUnitario").is_some());
        assert!(json.get("stockActual").is_some());
        assert!(json.get("proveedor").is_some());
        assert!(json.get("name").is_none());
    }
}
