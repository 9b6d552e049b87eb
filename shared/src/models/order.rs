//! Order Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Server-confirmed order, read-only to the client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    #[serde(rename = "nombreComprador")]
    pub buyer_name: String,
    #[serde(rename = "fechaCreacion")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "totalBruto")]
    pub gross_total: Decimal,
    #[serde(rename = "descuentoAplicado")]
    pub discount_applied: Decimal,
    #[serde(rename = "totalFinal")]
    pub final_total: Decimal,
    pub items: Vec<OrderItem>,
}

/// Line of a confirmed order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    #[serde(rename = "nombreProducto")]
    pub product_name: String,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
    #[serde(rename = "precioUnitario")]
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// Create order payload
///
/// Intentionally minimal: only product ids and quantities are sent. The
/// backend prices the order at commit time, so price changes between
/// draft-build and submit are resolved server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    #[serde(rename = "nombreComprador")]
    pub buyer_name: String,
    pub items: Vec<OrderItemCreate>,
}

/// One line of a create-order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    #[serde(rename = "productoId")]
    pub product_id: i64,
    #[serde(rename = "cantidad")]
    pub quantity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_create_wire_shape() {
        let payload = OrderCreate {
            buyer_name: "Juan".to_string(),
            items: vec![OrderItemCreate {
                product_id: 7,
                quantity: 2,
            }],
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["nombreComprador"], "Juan");
        assert_eq!(json["items"][0]["productoId"], 7);
        assert_eq!(json["items"][0]["cantidad"], 2);
        // Prices are never part of the submission payload.
        assert!(json["items"][0].get("precioUnitario").is_none());
    }

    #[test]
    fn test_order_deserializes_backend_shape() {
        let json = r#"{
            "id": 12,
            "nombreComprador": "Ana",
            "fechaCreacion": "2025-03-01T10:30:00Z",
            "totalBruto": 150.0,
            "descuentoAplicado": 15.0,
            "totalFinal": 135.0,
            "items": [
                {"nombreProducto": "Taladro", "cantidad": 1, "precioUnitario": 150.0, "subtotal": 150.0}
            ]
        }"#;
        let order: Order = serde_json::from_str(json).unwrap();
        assert_eq!(order.id, 12);
        assert_eq!(order.buyer_name, "Ana");
        assert_eq!(order.items.len(), 1);
        assert_eq!(order.items[0].quantity, 1);
    }
}
