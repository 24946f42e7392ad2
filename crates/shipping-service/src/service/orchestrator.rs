use super::error::OrderItemError;
use crate::clients::{GatewayError, OrderItemClient, RemoteGateway};
use crate::model::{
    OrderId, OrderItem, OrderItemRequest, OrderItemView, OrderStatus, RemoteOrder,
};
use actor_store::Record;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

pub const PRODUCT_UNAVAILABLE_MESSAGE: &str =
    "Product information not available for this order item";

pub const ORDER_UNAVAILABLE_MESSAGE: &str =
    "Order information not available for this order item";

pub const CREATE_REQUIRES_CREATED_MESSAGE: &str =
    "Cannot create a shipping for an order that is in any state other than CREATED";

pub const DEACTIVATE_REQUIRES_ORDERED_MESSAGE: &str =
    "Cannot deactivate a shipping for an order that is in any state other than ORDERED";

/// How [`OrderItemService::enrich`] treats a record that cannot be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GatePolicy {
    /// Drop the record (list semantics). Failures are logged, never returned.
    Lenient,
    /// Fail with a typed error (single fetch semantics).
    Strict,
}

impl GatePolicy {
    fn reject(
        self,
        order_id: OrderId,
        err: OrderItemError,
    ) -> Result<Option<OrderItemView>, OrderItemError> {
        match self {
            GatePolicy::Lenient => {
                warn!(%order_id, reason = %err, "Order item excluded");
                Ok(None)
            }
            GatePolicy::Strict => Err(err),
        }
    }
}

fn not_found(order_id: OrderId) -> OrderItemError {
    OrderItemError::NotFound(format!("Active OrderItem with id: {order_id} not found"))
}

/// Orchestrates order items against the order and product services.
///
/// Owns no state besides its two collaborators: the local store and the remote gateway. Every
/// operation re-fetches remote state and issues its remote calls one after another.
#[derive(Clone)]
pub struct OrderItemService {
    store: OrderItemClient,
    gateway: Arc<dyn RemoteGateway>,
}

impl OrderItemService {
    pub fn new(store: OrderItemClient, gateway: Arc<dyn RemoteGateway>) -> Self {
        Self { store, gateway }
    }

    /// Every active order item whose product is reachable and whose order is `ORDERED`.
    ///
    /// Per-item failures exclude the item; only a store failure fails the call. The result keeps
    /// store order (ascending order id) with duplicates collapsed.
    #[instrument(skip(self))]
    pub async fn find_all(&self) -> Result<Vec<OrderItemView>, OrderItemError> {
        info!("Fetch all active order items");
        let records = self.store.find_all_active().await?;
        let candidates = records.len();

        let mut views: Vec<OrderItemView> = Vec::with_capacity(candidates);
        for record in records {
            if let Some(view) = self.enrich(record, GatePolicy::Lenient).await? {
                if !views.contains(&view) {
                    views.push(view);
                }
            }
        }

        info!(candidates, visible = views.len(), "Listed order items");
        Ok(views)
    }

    /// The active order item for `order_id`, enriched. Fails with `NotFound` unless the item
    /// would also appear in [`find_all`](Self::find_all).
    #[instrument(skip(self))]
    pub async fn find_by_id(&self, order_id: OrderId) -> Result<OrderItemView, OrderItemError> {
        info!("Fetch order item by id");
        let record = self
            .store
            .find_by_id(order_id)
            .await?
            .filter(|record| record.entity.is_active)
            .ok_or_else(|| not_found(order_id))?;

        self.enrich(record, GatePolicy::Strict)
            .await?
            .ok_or_else(|| not_found(order_id))
    }

    /// Validates against the order and product services, stores the item, then signals the
    /// order service to advance the order.
    ///
    /// The signal is best effort: once the record is stored, a failed signal is logged and the
    /// call still succeeds. The returned view carries the snapshots read during validation.
    #[instrument(skip(self))]
    pub async fn save(&self, request: OrderItemRequest) -> Result<OrderItemView, OrderItemError> {
        info!("Save order item");
        let create = request.validate().map_err(OrderItemError::Validation)?;

        let order = self
            .gateway
            .fetch_order(create.order_id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound { .. } => OrderItemError::NotFound(format!(
                    "Order with ID {} not found",
                    create.order_id
                )),
                e => OrderItemError::RemoteUnavailable {
                    context: "Error verifying order existence".to_string(),
                    source: e,
                },
            })?;
        if order.order_status != OrderStatus::Created {
            warn!(order_id = %create.order_id, status = %order.order_status, "Order not open for shipping");
            return Err(OrderItemError::InvalidState(
                CREATE_REQUIRES_CREATED_MESSAGE.to_string(),
            ));
        }

        let product = self
            .gateway
            .fetch_product(create.product_id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound { .. } => OrderItemError::NotFound(format!(
                    "Product with ID {} not found",
                    create.product_id
                )),
                e => OrderItemError::RemoteUnavailable {
                    context: "Error verifying product existence".to_string(),
                    source: e,
                },
            })?;
        if product.quantity < create.ordered_quantity {
            return Err(OrderItemError::InsufficientAvailability {
                available: product.quantity,
                requested: create.ordered_quantity,
            });
        }

        let order_id = create.order_id;
        let record = self.store.insert(create).await?;
        info!(%order_id, version = record.version, "Order item stored");

        if let Err(e) = self.gateway.advance_order_status(order_id).await {
            error!(%order_id, error = %e, "Failed to update order status after saving item");
        }

        Ok(OrderItemView::new(record, order, product))
    }

    /// Soft-deletes the active order item attached to `order_id`. Only allowed while the order
    /// is `ORDERED`.
    ///
    /// The write is guarded by the version read at the start, so of several concurrent
    /// deactivations at most one succeeds; the others get `Conflict` or `NotFound`.
    #[instrument(skip(self))]
    pub async fn deactivate(&self, order_id: OrderId) -> Result<(), OrderItemError> {
        info!("Deactivate order item");
        let record = self
            .store
            .find_active_by_order(order_id)
            .await?
            .ok_or_else(|| not_found(order_id))?;

        let order = self.fetch_order_for(order_id).await?;
        if order.order_status != OrderStatus::Ordered {
            warn!(%order_id, status = %order.order_status, "Order not in a deactivatable state");
            return Err(OrderItemError::InvalidState(
                DEACTIVATE_REQUIRES_ORDERED_MESSAGE.to_string(),
            ));
        }

        let deactivated = self
            .store
            .deactivate(order_id, Some(record.version))
            .await?;
        info!(%order_id, version = deactivated.version, "Order item deactivated");
        Ok(())
    }

    /// Joins a record with its product and order, applying the `ORDERED` visibility gate.
    ///
    /// Product first, then order. `Ok(None)` only ever comes back under [`GatePolicy::Lenient`].
    /// Under [`GatePolicy::Strict`]:
    /// - any product failure is `NotFound` (the message does not say why)
    /// - an absent order, or one not `ORDERED`, is `NotFound`
    /// - an unreachable order service is `RemoteUnavailable`, with the same message as absence
    pub async fn enrich(
        &self,
        record: Record<OrderItem>,
        policy: GatePolicy,
    ) -> Result<Option<OrderItemView>, OrderItemError> {
        let order_id = record.entity.order_id;

        let product = match self.gateway.fetch_product(record.entity.product_id).await {
            Ok(product) => product,
            Err(e) => {
                if policy == GatePolicy::Strict {
                    error!(%order_id, error = %e, "Failed to fetch product details for order item");
                }
                return policy.reject(
                    order_id,
                    OrderItemError::NotFound(PRODUCT_UNAVAILABLE_MESSAGE.to_string()),
                );
            }
        };

        let order = match self.fetch_order_for(order_id).await {
            Ok(order) => order,
            Err(e) => return policy.reject(order_id, e),
        };

        if order.order_status != OrderStatus::Ordered {
            return policy.reject(order_id, not_found(order_id));
        }

        Ok(Some(OrderItemView::new(record, order, product)))
    }

    /// Order lookup for an existing item. Absence and transport failure carry the same
    /// message; the transport detail only goes to the log.
    async fn fetch_order_for(&self, order_id: OrderId) -> Result<RemoteOrder, OrderItemError> {
        self.gateway
            .fetch_order(order_id)
            .await
            .map_err(|e| match e {
                GatewayError::NotFound { .. } => {
                    OrderItemError::NotFound(ORDER_UNAVAILABLE_MESSAGE.to_string())
                }
                e => {
                    error!(%order_id, error = %e, "Failed to fetch order details for order item");
                    OrderItemError::RemoteUnavailable {
                        context: ORDER_UNAVAILABLE_MESSAGE.to_string(),
                        source: e,
                    }
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::InMemoryGateway;
    use crate::model::{OrderItemCreate, ProductId};
    use crate::order_item_actor;
    use actor_store::mock::MockClient;
    use actor_store::FrameworkError;
    use chrono::Utc;

    fn active_record(order_id: u32, product_id: u32) -> Record<OrderItem> {
        let now = Utc::now();
        Record {
            entity: OrderItem {
                order_id: OrderId(order_id),
                product_id: ProductId(product_id),
                ordered_quantity: 1,
                is_active: true,
            },
            version: 1,
            created_at: now,
            updated_at: now,
        }
    }

    fn service_with_mock(
        mock: &MockClient<OrderItem>,
        gateway: Arc<InMemoryGateway>,
    ) -> OrderItemService {
        OrderItemService::new(OrderItemClient::new(mock.client()), gateway)
    }

    #[tokio::test]
    async fn test_find_all_collapses_duplicate_views() {
        let mut mock = MockClient::<OrderItem>::new();
        let record = active_record(1, 1);
        mock.expect_query()
            .return_ok(vec![record.clone(), record, active_record(2, 1)]);

        let gateway = Arc::new(
            InMemoryGateway::new()
                .with_order(1, OrderStatus::Ordered)
                .with_order(2, OrderStatus::Ordered)
                .with_product(1, 10),
        );
        let service = service_with_mock(&mock, gateway);

        let views = service.find_all().await.unwrap();
        let ids: Vec<OrderId> = views.iter().map(|v| v.order_id).collect();
        assert_eq!(ids, vec![OrderId(1), OrderId(2)]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_find_all_propagates_store_failure() {
        let mut mock = MockClient::<OrderItem>::new();
        mock.expect_query().return_err(FrameworkError::ActorClosed);
        let service = service_with_mock(&mock, Arc::new(InMemoryGateway::new()));

        let result = service.find_all().await;
        assert!(matches!(result, Err(OrderItemError::Store(_))));
    }

    #[tokio::test]
    async fn test_deactivate_lost_race_is_a_conflict() {
        let mut mock = MockClient::<OrderItem>::new();
        mock.expect_query().return_ok(vec![active_record(3, 1)]);
        mock.expect_update()
            .return_err(FrameworkError::VersionConflict {
                id: "3".into(),
                expected: 1,
                actual: 2,
            });

        let gateway = Arc::new(InMemoryGateway::new().with_order(3, OrderStatus::Ordered));
        let service = service_with_mock(&mock, gateway);

        let result = service.deactivate(OrderId(3)).await;
        assert!(matches!(result, Err(OrderItemError::Conflict(_))));
        mock.verify();
    }

    #[tokio::test]
    async fn test_strict_enrich_hides_why_the_product_failed() {
        let (actor, client) = order_item_actor::new(8);
        tokio::spawn(actor.run());
        let store = OrderItemClient::new(client);
        let record = store
            .insert(OrderItemCreate {
                order_id: OrderId(1),
                product_id: ProductId(1),
                ordered_quantity: 1,
            })
            .await
            .unwrap();

        let gateway = Arc::new(InMemoryGateway::new().with_order(1, OrderStatus::Ordered));
        gateway.fail_product(ProductId(1));
        let service = OrderItemService::new(store, gateway.clone());

        let strict = service.enrich(record.clone(), GatePolicy::Strict).await;
        assert_eq!(
            strict,
            Err(OrderItemError::NotFound(
                PRODUCT_UNAVAILABLE_MESSAGE.to_string()
            ))
        );

        let lenient = service.enrich(record, GatePolicy::Lenient).await;
        assert_eq!(lenient, Ok(None));

        // Product is checked first; the order is never fetched.
        assert_eq!(gateway.order_fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_save_store_duplicate_is_a_conflict() {
        let mut mock = MockClient::<OrderItem>::new();
        mock.expect_create()
            .return_err(FrameworkError::AlreadyExists("1".into()));

        let gateway = Arc::new(
            InMemoryGateway::new()
                .with_order(1, OrderStatus::Created)
                .with_product(1, 10),
        );
        let service = service_with_mock(&mock, gateway.clone());

        let result = service.save(OrderItemRequest::new(1, 1, 2)).await;
        assert!(matches!(result, Err(OrderItemError::Conflict(_))));
        assert_eq!(gateway.status_advance_count(), 0);
        mock.verify();
    }
}
