//! Domain models
//!
//! Wire-format structs for the FixFast backend. Field names on the wire are
//! the backend's Spanish names; Rust fields use English names via serde
//! renames.

mod order;
mod product;

pub use order::{Order, OrderCreate, OrderItem, OrderItemCreate};
pub use product::{Product, ProductCreate, ProductUpdate};
