//! FixFast Composer - cart/stock-consistency engine
//!
//! Keeps a locally held, mutable draft order consistent with the remotely
//! authoritative stock levels: duplicate-line merging, over-allocation
//! prevention, and post-submit reconciliation. List rendering and form
//! widgets are external collaborators that call into this crate.

pub mod api;
pub mod cart;
pub mod catalog;
pub mod coordinator;
pub mod pagination;

pub use api::StoreApi;
pub use cart::{DraftLine, DraftOrder, ProductSelection};
pub use catalog::CatalogSnapshot;
pub use coordinator::ComposerSession;
pub use pagination::{PageItem, Paginator, window};
