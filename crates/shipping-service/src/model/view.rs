use crate::model::{OrderId, OrderItem, ProductId, RemoteOrder, RemoteProduct};
use actor_store::Record;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// An order item joined with the remote order and product it references.
///
/// Built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemView {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub ordered_quantity: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub order: RemoteOrder,
    pub product: RemoteProduct,
}

impl OrderItemView {
    pub fn new(record: Record<OrderItem>, order: RemoteOrder, product: RemoteProduct) -> Self {
        let Record {
            entity,
            created_at,
            updated_at,
            ..
        } = record;
        Self {
            order_id: entity.order_id,
            product_id: entity.product_id,
            ordered_quantity: entity.ordered_quantity,
            is_active: entity.is_active,
            created_at,
            updated_at,
            order,
            product,
        }
    }
}

/// Envelope for list responses: `{"collection": [...]}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionResponse<T> {
    pub collection: Vec<T>,
}

impl<T> From<Vec<T>> for CollectionResponse<T> {
    fn from(collection: Vec<T>) -> Self {
        Self { collection }
    }
}
