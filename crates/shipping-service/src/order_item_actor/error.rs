//! Error types for the OrderItem actor.

use crate::model::OrderId;
use actor_store::FrameworkError;
use thiserror::Error;

/// Rule violations raised by the entity hooks inside the actor.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemRuleError {
    /// The ordered quantity must be positive.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Order item for order {0} is already inactive")]
    AlreadyInactive(OrderId),
}

/// Errors returned by [`OrderItemClient`](crate::clients::OrderItemClient).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemStoreError {
    /// A record already exists for this order id (active or not).
    #[error("Order item for order {0} already exists")]
    AlreadyExists(String),

    /// The record changed between the caller's read and its write.
    #[error("Order item for order {id} was modified concurrently (expected version {expected}, found {actual})")]
    VersionConflict {
        id: String,
        expected: u64,
        actual: u64,
    },

    #[error("Order item not found: {0}")]
    NotFound(String),

    /// An entity rule refused the operation.
    #[error("Order item rejected: {0}")]
    Rejected(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<String> for OrderItemStoreError {
    fn from(msg: String) -> Self {
        OrderItemStoreError::ActorCommunicationError(msg)
    }
}

impl From<FrameworkError> for OrderItemStoreError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::AlreadyExists(id) => OrderItemStoreError::AlreadyExists(id),
            FrameworkError::VersionConflict {
                id,
                expected,
                actual,
            } => OrderItemStoreError::VersionConflict {
                id,
                expected,
                actual,
            },
            FrameworkError::NotFound(id) => OrderItemStoreError::NotFound(id),
            FrameworkError::EntityError(e) => OrderItemStoreError::Rejected(e.to_string()),
            e @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                OrderItemStoreError::ActorCommunicationError(e.to_string())
            }
        }
    }
}
