//! Shared types for the FixFast order composer
//!
//! Domain models, money helpers and the unified error taxonomy used by both
//! the transport client and the composer engine.

pub mod error;
pub mod models;
pub mod money;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{Error, Result};
