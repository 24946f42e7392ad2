//! # Orchestration
//!
//! [`OrderItemService`] keeps a locally owned order item consistent with two remote services it
//! cannot transact with: the order service and the product service.
//!
//! ## Operations
//!
//! | Operation | Remote calls | Status gate | On failure |
//! |-----------|--------------|-------------|------------|
//! | [`find_all`](OrderItemService::find_all) | product, order per item | order `ORDERED` | item dropped |
//! | [`find_by_id`](OrderItemService::find_by_id) | product, order | order `ORDERED` | `NotFound` / `RemoteUnavailable` |
//! | [`save`](OrderItemService::save) | order, product, status signal | order `CREATED` | typed error |
//! | [`deactivate`](OrderItemService::deactivate) | order | order `ORDERED` | typed error |
//!
//! List and single fetch share [`OrderItemService::enrich`]; a [`GatePolicy`] decides whether a
//! record that cannot be shown is dropped or reported.
//!
//! ## Error Model
//!
//! See [`OrderItemError`]. Transport failures are never read as "absent", except in the list,
//! where every per-item failure just hides the item.

pub mod error;
pub mod orchestrator;

pub use error::*;
pub use orchestrator::*;
