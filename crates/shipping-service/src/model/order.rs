/// Orders as seen from the shipping service.
///
/// The order service owns these. We only read them, and nudge their status forward after a
/// shipping line has been attached (see [`RemoteGateway::advance_order_status`]).
///
/// [`RemoteGateway::advance_order_status`]: crate::clients::RemoteGateway::advance_order_status
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// Also the key of the local order-item store: there is at most one shipping line per order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle of a remote order.
///
/// Only `CREATED` (still accepting shipping lines) and `ORDERED` (confirmed, visible to shipping)
/// matter here. Statuses this service does not know about decode to `Unrecognized`, which never
/// satisfies a status gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Created,
    Ordered,
    InPayment,
    #[default]
    #[serde(other)]
    Unrecognized,
}

impl OrderStatus {
    /// The status the order service moves to when asked to advance.
    pub fn next(self) -> Self {
        match self {
            OrderStatus::Created => OrderStatus::Ordered,
            OrderStatus::Ordered => OrderStatus::InPayment,
            other => other,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            OrderStatus::Created => "CREATED",
            OrderStatus::Ordered => "ORDERED",
            OrderStatus::InPayment => "IN_PAYMENT",
            OrderStatus::Unrecognized => "UNRECOGNIZED",
        };
        f.write_str(name)
    }
}

/// Snapshot of an order returned by `GET {orders}/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteOrder {
    pub order_id: OrderId,
    #[serde(default)]
    pub order_status: OrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_desc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_fee: Option<f64>,
}

impl RemoteOrder {
    pub fn new(order_id: impl Into<OrderId>, order_status: OrderStatus) -> Self {
        Self {
            order_id: order_id.into(),
            order_status,
            order_desc: None,
            order_fee: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decodes_order_service_payload() {
        let json = r#"{
            "orderId": 4,
            "orderDate": "01-01-2024__10:00:00:000000",
            "orderDesc": "init",
            "orderFee": 12.5,
            "orderStatus": "IN_PAYMENT"
        }"#;
        let order: RemoteOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_id, OrderId(4));
        assert_eq!(order.order_status, OrderStatus::InPayment);
        assert_eq!(order.order_desc.as_deref(), Some("init"));
        assert_eq!(order.order_fee, Some(12.5));
    }

    #[test]
    fn test_unknown_or_missing_status_is_unrecognized() {
        let unknown: RemoteOrder =
            serde_json::from_str(r#"{"orderId": 1, "orderStatus": "SHIPPED"}"#).unwrap();
        assert_eq!(unknown.order_status, OrderStatus::Unrecognized);

        let missing: RemoteOrder = serde_json::from_str(r#"{"orderId": 1}"#).unwrap();
        assert_eq!(missing.order_status, OrderStatus::Unrecognized);
    }

    #[test]
    fn test_status_serializes_with_wire_names() {
        let order = RemoteOrder::new(9, OrderStatus::Created);
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value["orderStatus"], "CREATED");
        assert_eq!(value["orderId"], 9);
        assert!(value.get("orderFee").is_none());
    }

    #[test]
    fn test_next_status() {
        assert_eq!(OrderStatus::Created.next(), OrderStatus::Ordered);
        assert_eq!(OrderStatus::Ordered.next(), OrderStatus::InPayment);
        assert_eq!(OrderStatus::InPayment.next(), OrderStatus::InPayment);
    }
}
