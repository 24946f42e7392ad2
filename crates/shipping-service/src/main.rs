//! # Shipping Service
//!
//! HTTP service for order items ("shipping lines").
//!
//! ## Core Components
//!
//! - **model**: `OrderItem` and the remote order and
//!   product snapshots it is joined with.
//! - **order_item_actor**: the local store, an actor from the `actor-store` crate.
//! - **clients**: the store client and the `RemoteGateway`
//!   to the order and product services.
//! - **service**: orchestration: list, fetch, create, deactivate.
//! - **web**: the `/api/shippings` routes.
//! - **lifecycle**: `ShippingSystem` and tracing setup.
//!
//! ## Configuration
//!
//! See `AppConfig`. Every variable has a default, so the binary starts with no environment at
//! all and expects the order service on port 8300 and the product service on port 8500.

use shipping_service::clients::HttpGateway;
use shipping_service::config::AppConfig;
use shipping_service::lifecycle::{setup_tracing, ShippingSystem};
use shipping_service::web;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Setup tracing once for the entire application
    setup_tracing();

    let config = AppConfig::from_env()?;
    info!(
        orders = %config.order_service_api_url,
        products = %config.product_service_api_url,
        "Starting shipping service"
    );

    let gateway = Arc::new(HttpGateway::new(
        config.order_service_api_url.clone(),
        config.product_service_api_url.clone(),
    ));
    let system = ShippingSystem::new(gateway, config.store_buffer_size);

    let listener = tokio::net::TcpListener::bind(config.bind_address()).await?;
    info!(address = %listener.local_addr()?, "Listening");

    let served = axum::serve(listener, web::router(system.service.clone()))
        .with_graceful_shutdown(shutdown_signal())
        .await;
    if let Err(e) = &served {
        error!(error = %e, "Server failed");
    }

    system.shutdown().await?;
    served?;

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for shutdown signal");
    }
    info!("Shutdown signal received");
}
