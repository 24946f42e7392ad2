//! # Order Item Actor
//!
//! The local store of shipping lines: a [`ResourceActor`] keeping [`OrderItem`] records keyed by
//! order id.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_store::ActorEntity) implementation for [`OrderItem`]
//! - [`error`] - [`OrderItemRuleError`] (entity rules) and [`OrderItemStoreError`] (what callers see)
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use shipping_service::clients::OrderItemClient;
//! use shipping_service::model::{OrderId, OrderItemCreate, ProductId};
//! use shipping_service::order_item_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, generic_client) = order_item_actor::new(32);
//!     let client = OrderItemClient::new(generic_client);
//!     tokio::spawn(actor.run());
//!
//!     let record = client
//!         .insert(OrderItemCreate {
//!             order_id: OrderId(1),
//!             product_id: ProductId(1),
//!             ordered_quantity: 5,
//!         })
//!         .await?;
//!
//!     // Soft delete, guarded by the version we just read
//!     client.deactivate(OrderId(1), Some(record.version)).await?;
//!     assert!(client.find_all_active().await?.is_empty());
//!     Ok(())
//! }
//! ```
//!
//! ## Key Features
//!
//! - **One line per order**: a second create for the same order id is refused, even if the
//!   first line has been deactivated
//! - **Soft delete only**: deactivated lines stay in the store
//! - **Compare-and-swap**: `deactivate` takes the version the caller read, so two concurrent
//!   deactivations cannot both succeed

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::OrderItem;
use actor_store::{ResourceActor, ResourceClient};

/// Creates a new OrderItem actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<OrderItem>, ResourceClient<OrderItem>) {
    ResourceActor::new(buffer_size)
}
