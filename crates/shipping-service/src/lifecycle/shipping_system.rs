use crate::clients::{OrderItemClient, RemoteGateway};
use crate::order_item_actor;
use crate::service::OrderItemService;
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator for the shipping service.
///
/// `ShippingSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping the order-item store actor
/// - **Dependency Wiring**: handing the store client and the remote gateway to the service
///
/// # Example
///
/// ```ignore
/// let gateway = Arc::new(HttpGateway::new(orders_url, products_url));
/// let system = ShippingSystem::new(gateway, 32);
///
/// let app = web::router(system.service.clone());
/// // ... serve ...
///
/// system.shutdown().await?;
/// ```
pub struct ShippingSystem {
    /// Orchestration entry point, cheap to clone into request handlers.
    pub service: OrderItemService,

    /// Direct access to the local store (inspection, seeding).
    pub store: OrderItemClient,

    handle: tokio::task::JoinHandle<()>,
}

impl ShippingSystem {
    /// Spawns the store actor and wires the service. Must be called inside a Tokio runtime.
    pub fn new(gateway: Arc<dyn RemoteGateway>, buffer_size: usize) -> Self {
        let (actor, client) = order_item_actor::new(buffer_size);
        let handle = tokio::spawn(actor.run());

        let store = OrderItemClient::new(client);
        let service = OrderItemService::new(store.clone(), gateway);

        Self {
            service,
            store,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the last client closes the store channel and the actor exits its loop. Clones of
    /// the service still held elsewhere (e.g. by a router) keep the actor alive until they are
    /// dropped too.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        drop(self.service);
        drop(self.store);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(e.into());
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
