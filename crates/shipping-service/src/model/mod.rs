//! # Domain Model
//!
//! Plain data types shared by every layer.
//!
//! - [`OrderItem`] is the only record this service owns. It is stored by the
//!   [`order_item_actor`](crate::order_item_actor).
//! - [`RemoteOrder`] and [`RemoteProduct`] are snapshots of entities owned by the order and product
//!   services. They are fetched on every request and never stored.
//! - [`OrderItemView`] joins the two at request time.

pub mod order;
pub mod order_item;
pub mod product;
pub mod view;

pub use order::*;
pub use order_item::*;
pub use product::*;
pub use view::*;
