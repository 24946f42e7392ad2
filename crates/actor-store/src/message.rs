//! # Store Messages
//!
//! The requests a [`ResourceClient`](crate::ResourceClient) sends to its
//! [`ResourceActor`](crate::ResourceActor).

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::record::Record;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the store.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// There is no physical delete: records are retired through `Update`
/// (soft delete) and stay in the store.
///
/// - **Create**: insert a new record; fails if the key is taken.
/// - **Get**: point lookup by key.
/// - **Update**: mutate one record, optionally guarded by the version the caller last read.
/// - **Query**: scan all records in key order, keeping those matching the filter.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<Record<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<Record<T>>>,
    },
    Update {
        id: T::Id,
        expected_version: Option<u64>,
        update: T::Update,
        respond_to: Response<Record<T>>,
    },
    Query {
        query: T::Query,
        respond_to: Response<Vec<Record<T>>>,
    },
}
