//! # Remote Gateway
//!
//! The order and product services, seen through one injected capability.
//!
//! Every call is a single round trip: no retries, no caching. Callers get one of three outcomes:
//! the entity, a definite absence ([`GatewayError::NotFound`]), or an indeterminate failure
//! ([`GatewayError::Transport`]) that must never be read as "absent".
use crate::model::{OrderId, ProductId, RemoteOrder, RemoteProduct};
use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum GatewayError {
    /// The remote service answered that the entity does not exist.
    #[error("{resource} with ID {id} not found")]
    NotFound { resource: &'static str, id: u32 },

    /// Anything else: connection failure, timeout, unexpected status, undecodable body.
    #[error("transport failure: {0}")]
    Transport(String),
}

impl GatewayError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, GatewayError::NotFound { .. })
    }

    pub fn order_not_found(id: OrderId) -> Self {
        GatewayError::NotFound {
            resource: "Order",
            id: id.0,
        }
    }

    pub fn product_not_found(id: ProductId) -> Self {
        GatewayError::NotFound {
            resource: "Product",
            id: id.0,
        }
    }
}

/// Access to the order and product services.
///
/// Held as `Arc<dyn RemoteGateway>` by [`OrderItemService`](crate::service::OrderItemService).
#[async_trait]
pub trait RemoteGateway: Send + Sync {
    async fn fetch_order(&self, id: OrderId) -> Result<RemoteOrder, GatewayError>;

    async fn fetch_product(&self, id: ProductId) -> Result<RemoteProduct, GatewayError>;

    /// Asks the order service to move the order to its next status. The response body is
    /// ignored.
    async fn advance_order_status(&self, id: OrderId) -> Result<(), GatewayError>;
}
