//! # Clients
//!
//! Everything the orchestration layer talks to.
//!
//! - [`OrderItemClient`] - typed access to the local order-item store actor
//! - [`RemoteGateway`] - the order and product services, behind a trait so they can be swapped
//!   - [`HttpGateway`] - production implementation over HTTP
//!   - [`InMemoryGateway`] - in-process stand-in with failure injection, for tests and demos

pub mod gateway;
pub mod http_gateway;
pub mod memory_gateway;
pub mod order_item_client;

pub use gateway::{GatewayError, RemoteGateway};
pub use http_gateway::HttpGateway;
pub use memory_gateway::InMemoryGateway;
pub use order_item_client::OrderItemClient;
