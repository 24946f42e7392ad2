//! Entity trait implementation for the OrderItem domain type.
//!
//! See the trait implementation on [`OrderItem`] for method documentation.

use super::error::OrderItemRuleError;
use crate::model::{OrderId, OrderItem, OrderItemCreate, OrderItemQuery, OrderItemUpdate};
use actor_store::ActorEntity;

impl ActorEntity for OrderItem {
    type Id = OrderId;
    type Create = OrderItemCreate;
    type Update = OrderItemUpdate;
    type Query = OrderItemQuery;
    type Error = OrderItemRuleError;

    fn id(&self) -> OrderId {
        self.order_id
    }

    /// Creates a new, active OrderItem. A zero quantity is refused.
    fn from_create_params(params: OrderItemCreate) -> Result<Self, OrderItemRuleError> {
        if params.ordered_quantity == 0 {
            return Err(OrderItemRuleError::InvalidQuantity(params.ordered_quantity));
        }
        Ok(Self {
            order_id: params.order_id,
            product_id: params.product_id,
            ordered_quantity: params.ordered_quantity,
            is_active: true,
        })
    }

    fn on_update(&mut self, update: OrderItemUpdate) -> Result<(), OrderItemRuleError> {
        match update {
            OrderItemUpdate::Deactivate => {
                if !self.is_active {
                    return Err(OrderItemRuleError::AlreadyInactive(self.order_id));
                }
                self.is_active = false;
                Ok(())
            }
        }
    }

    fn matches(&self, query: &OrderItemQuery) -> bool {
        match query {
            OrderItemQuery::Active => self.is_active,
            OrderItemQuery::ActiveForOrder(order_id) => self.is_active && self.order_id == *order_id,
        }
    }
}
