//! # Order Item Client
//!
//! Provides a high-level API for interacting with the `OrderItem` actor.
//! It wraps a `ResourceClient<OrderItem>` and exposes repository-style lookups.
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderItemQuery, OrderItemUpdate};
use crate::order_item_actor::OrderItemStoreError;
use actor_store::{ActorClient, FrameworkError, Record, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the OrderItem actor.
#[derive(Clone)]
pub struct OrderItemClient {
    inner: ResourceClient<OrderItem>,
}

impl OrderItemClient {
    pub fn new(inner: ResourceClient<OrderItem>) -> Self {
        Self { inner }
    }

    /// Stores a new, active order item.
    #[instrument(skip(self))]
    pub async fn insert(
        &self,
        params: OrderItemCreate,
    ) -> Result<Record<OrderItem>, OrderItemStoreError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Looks up a record by order id, active or not.
    pub async fn find_by_id(
        &self,
        order_id: OrderId,
    ) -> Result<Option<Record<OrderItem>>, OrderItemStoreError> {
        self.get(order_id).await
    }

    /// All active records, in ascending order id.
    pub async fn find_all_active(&self) -> Result<Vec<Record<OrderItem>>, OrderItemStoreError> {
        self.query(OrderItemQuery::Active).await
    }

    /// The active record attached to `order_id`, if any.
    pub async fn find_active_by_order(
        &self,
        order_id: OrderId,
    ) -> Result<Option<Record<OrderItem>>, OrderItemStoreError> {
        let records = self
            .query(OrderItemQuery::ActiveForOrder(order_id))
            .await?;
        Ok(records.into_iter().next())
    }

    /// Soft-deletes the record for `order_id`.
    ///
    /// With `expected_version` set, fails with [`OrderItemStoreError::VersionConflict`] if the
    /// record changed since the caller read it.
    #[instrument(skip(self))]
    pub async fn deactivate(
        &self,
        order_id: OrderId,
        expected_version: Option<u64>,
    ) -> Result<Record<OrderItem>, OrderItemStoreError> {
        debug!("Sending request");
        self.inner
            .update(order_id, expected_version, OrderItemUpdate::Deactivate)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<OrderItem> for OrderItemClient {
    type Error = OrderItemStoreError;

    fn inner(&self) -> &ResourceClient<OrderItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderItemStoreError::from(e)
    }
}
