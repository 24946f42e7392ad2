//! Error types for the orchestration layer.

use crate::clients::GatewayError;
use crate::order_item_actor::OrderItemStoreError;
use thiserror::Error;

/// Outcome of a failed order-item operation.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderItemError {
    /// Malformed or missing input. Detected before any remote call.
    #[error("{0}")]
    Validation(String),

    /// Local record absent or inactive, or remote entity confirmed absent.
    #[error("{0}")]
    NotFound(String),

    /// A remote collaborator could not be reached or gave an unusable answer.
    #[error("{context}: {source}")]
    RemoteUnavailable {
        context: String,
        #[source]
        source: GatewayError,
    },

    /// The remote order exists but its status forbids the operation.
    #[error("{0}")]
    InvalidState(String),

    #[error("You cannot order more units than there is available, available units: {available}")]
    InsufficientAvailability { available: u32, requested: u32 },

    /// The record already exists, or changed underneath the caller.
    #[error("{0}")]
    Conflict(String),

    /// The local store is unreachable.
    #[error("Order item store error: {0}")]
    Store(String),
}

impl From<OrderItemStoreError> for OrderItemError {
    fn from(e: OrderItemStoreError) -> Self {
        match e {
            OrderItemStoreError::AlreadyExists(id) => OrderItemError::Conflict(format!(
                "A shipping for order with ID {id} already exists"
            )),
            e @ OrderItemStoreError::VersionConflict { .. } => {
                OrderItemError::Conflict(e.to_string())
            }
            OrderItemStoreError::NotFound(id) => {
                OrderItemError::NotFound(format!("Active OrderItem with id: {id} not found"))
            }
            OrderItemStoreError::Rejected(reason) => OrderItemError::Validation(reason),
            OrderItemStoreError::ActorCommunicationError(reason) => OrderItemError::Store(reason),
        }
    }
}
