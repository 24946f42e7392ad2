/// A shipping line: the locally owned link between an order and a product.
///
/// # Actor Store
/// This struct implements the [`ActorEntity`](actor_store::ActorEntity) trait, allowing it to be
/// kept by a [`ResourceActor`](actor_store::ResourceActor). Timestamps and the version counter
/// live on the surrounding [`Record`](actor_store::Record), not here.
///
/// See [`impl ActorEntity for OrderItem`](#impl-ActorEntity-for-OrderItem) for details on:
/// - Creation parameters ([`OrderItemCreate`])
/// - Mutations ([`OrderItemUpdate`])
/// - Scans ([`OrderItemQuery`])
use crate::model::{OrderId, ProductId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub ordered_quantity: u32,
    pub is_active: bool,
}

/// Payload for creating a new order item. Produced by [`OrderItemRequest::validate`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemCreate {
    pub order_id: OrderId,
    pub product_id: ProductId,
    pub ordered_quantity: u32,
}

/// Mutations accepted by the order-item store.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderItemUpdate {
    /// Soft delete. The record stays in the store with `is_active = false`.
    Deactivate,
}

/// Filters for order-item scans.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderItemQuery {
    Active,
    ActiveForOrder(OrderId),
}

pub const MISSING_FIELDS_MESSAGE: &str =
    "To create a shipping you have to provide a valid orderId, productId and orderedQuantity";

/// Inbound create request, as posted by clients.
///
/// Every field is optional at the wire level so that a missing field is reported as a
/// validation failure instead of a deserialization error. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub order_id: Option<u32>,
    pub product_id: Option<u32>,
    pub ordered_quantity: Option<i64>,
}

impl OrderItemRequest {
    pub fn new(order_id: u32, product_id: u32, ordered_quantity: i64) -> Self {
        Self {
            order_id: Some(order_id),
            product_id: Some(product_id),
            ordered_quantity: Some(ordered_quantity),
        }
    }

    /// Checks presence and shape of every field. Runs before any remote call.
    pub fn validate(&self) -> Result<OrderItemCreate, String> {
        let (Some(order_id), Some(product_id), Some(quantity)) =
            (self.order_id, self.product_id, self.ordered_quantity)
        else {
            return Err(MISSING_FIELDS_MESSAGE.to_string());
        };

        let ordered_quantity = u32::try_from(quantity)
            .ok()
            .filter(|q| *q > 0)
            .ok_or_else(|| format!("orderedQuantity must be a positive integer, got {quantity}"))?;

        Ok(OrderItemCreate {
            order_id: order_id.into(),
            product_id: product_id.into(),
            ordered_quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_complete_request() {
        let create = OrderItemRequest::new(1, 2, 5).validate().unwrap();
        assert_eq!(create.order_id, OrderId(1));
        assert_eq!(create.product_id, ProductId(2));
        assert_eq!(create.ordered_quantity, 5);
    }

    #[test]
    fn test_validate_rejects_any_missing_field() {
        let complete = OrderItemRequest::new(1, 2, 5);
        let missing = [
            OrderItemRequest {
                order_id: None,
                ..complete.clone()
            },
            OrderItemRequest {
                product_id: None,
                ..complete.clone()
            },
            OrderItemRequest {
                ordered_quantity: None,
                ..complete.clone()
            },
            OrderItemRequest::default(),
        ];
        for request in missing {
            assert_eq!(request.validate().unwrap_err(), MISSING_FIELDS_MESSAGE);
        }
    }

    #[test]
    fn test_validate_rejects_non_positive_or_oversized_quantity() {
        for quantity in [0, -3, i64::from(u32::MAX) + 1] {
            let err = OrderItemRequest::new(1, 2, quantity).validate().unwrap_err();
            assert!(err.contains("positive integer"), "{err}");
        }
    }

    #[test]
    fn test_request_reads_camel_case_and_ignores_extra_fields() {
        let json = r#"{"orderId": 3, "productId": 4, "orderedQuantity": 7, "note": "fragile"}"#;
        let request: OrderItemRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request, OrderItemRequest::new(3, 4, 7));

        let partial: OrderItemRequest = serde_json::from_str(r#"{"orderId": null}"#).unwrap();
        assert_eq!(partial, OrderItemRequest::default());
    }
}
