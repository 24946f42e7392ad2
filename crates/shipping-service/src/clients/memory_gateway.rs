//! # In-Memory Gateway
//!
//! An in-process [`RemoteGateway`] holding orders and products in maps.
//!
//! Used by the test suites. Besides plain data it can be told to
//! fail: `fail_order` / `fail_product` turn lookups of one id into transport failures, and
//! `fail_status_advance` makes every status signal fail. Call counters let tests assert how
//! many round trips an operation made.
//!
//! Advancing a status follows the order service: `CREATED` becomes `ORDERED`, `ORDERED` becomes
//! `IN_PAYMENT`.
use super::gateway::{GatewayError, RemoteGateway};
use crate::model::{OrderId, OrderStatus, ProductId, RemoteOrder, RemoteProduct};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

#[derive(Default)]
pub struct InMemoryGateway {
    orders: RwLock<HashMap<OrderId, RemoteOrder>>,
    products: RwLock<HashMap<ProductId, RemoteProduct>>,
    failing_orders: RwLock<HashSet<OrderId>>,
    failing_products: RwLock<HashSet<ProductId>>,
    fail_status_advance: AtomicBool,
    order_fetches: AtomicUsize,
    product_fetches: AtomicUsize,
    status_advances: AtomicUsize,
}

impl InMemoryGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_order(self, id: u32, status: OrderStatus) -> Self {
        self.put_order(RemoteOrder::new(id, status));
        self
    }

    pub fn with_product(self, id: u32, quantity: u32) -> Self {
        self.put_product(RemoteProduct::new(id, quantity));
        self
    }

    pub fn put_order(&self, order: RemoteOrder) {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(order.order_id, order);
    }

    pub fn put_product(&self, product: RemoteProduct) {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(product.product_id, product);
    }

    pub fn remove_order(&self, id: OrderId) {
        self.orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    pub fn remove_product(&self, id: ProductId) {
        self.products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    /// Sets the status of a stored order. Returns `false` if the order is unknown.
    pub fn set_order_status(&self, id: OrderId, status: OrderStatus) -> bool {
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        match orders.get_mut(&id) {
            Some(order) => {
                order.order_status = status;
                true
            }
            None => false,
        }
    }

    pub fn order(&self, id: OrderId) -> Option<RemoteOrder> {
        self.orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
    }

    /// Lookups of this order fail with a transport error until [`restore_order`](Self::restore_order).
    pub fn fail_order(&self, id: OrderId) {
        self.failing_orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id);
    }

    pub fn restore_order(&self, id: OrderId) {
        self.failing_orders
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&id);
    }

    /// Lookups of this product fail with a transport error.
    pub fn fail_product(&self, id: ProductId) {
        self.failing_products
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id);
    }

    pub fn fail_status_advance(&self, fail: bool) {
        self.fail_status_advance.store(fail, Ordering::SeqCst);
    }

    pub fn order_fetch_count(&self) -> usize {
        self.order_fetches.load(Ordering::SeqCst)
    }

    pub fn product_fetch_count(&self) -> usize {
        self.product_fetches.load(Ordering::SeqCst)
    }

    pub fn status_advance_count(&self) -> usize {
        self.status_advances.load(Ordering::SeqCst)
    }

    fn order_is_failing(&self, id: OrderId) -> bool {
        self.failing_orders
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id)
    }
}

#[async_trait]
impl RemoteGateway for InMemoryGateway {
    async fn fetch_order(&self, id: OrderId) -> Result<RemoteOrder, GatewayError> {
        self.order_fetches.fetch_add(1, Ordering::SeqCst);
        if self.order_is_failing(id) {
            return Err(GatewayError::Transport(format!(
                "order service unreachable (order {id})"
            )));
        }
        self.order(id)
            .ok_or_else(|| GatewayError::order_not_found(id))
    }

    async fn fetch_product(&self, id: ProductId) -> Result<RemoteProduct, GatewayError> {
        self.product_fetches.fetch_add(1, Ordering::SeqCst);
        let failing = self
            .failing_products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(&id);
        if failing {
            return Err(GatewayError::Transport(format!(
                "product service unreachable (product {id})"
            )));
        }
        self.products
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&id)
            .cloned()
            .ok_or_else(|| GatewayError::product_not_found(id))
    }

    async fn advance_order_status(&self, id: OrderId) -> Result<(), GatewayError> {
        self.status_advances.fetch_add(1, Ordering::SeqCst);
        if self.fail_status_advance.load(Ordering::SeqCst) || self.order_is_failing(id) {
            return Err(GatewayError::Transport(format!(
                "order service unreachable (order {id})"
            )));
        }
        let mut orders = self.orders.write().unwrap_or_else(PoisonError::into_inner);
        let order = orders
            .get_mut(&id)
            .ok_or_else(|| GatewayError::order_not_found(id))?;
        let next = order.order_status.next();
        debug!(order_id = %id, from = %order.order_status, to = %next, "Status advanced");
        order.order_status = next;
        Ok(())
    }
}
