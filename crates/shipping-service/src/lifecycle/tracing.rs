//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Store lifecycle**: startup and shutdown of the order-item actor, with the final size
//! - **Store operations**: Create, Get, Update (with the expected version) and Query
//! - **Orchestration**: one span per service call (`find_all`, `find_by_id`, `save`, `deactivate`)
//! - **Remote calls**: the URL of every gateway request at `debug`
//! - **Exclusions and failures**: items hidden from the list (`warn`), failed status signals
//!   (`error`), every rejected HTTP request
//!
//! ## Usage Examples
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads and remote URLs
//! RUST_LOG=actor_store=debug,shipping_service=info cargo run
//! ```
//!
//! A create that passes validation but cannot reach the order service for the status signal
//! looks like this at `info`:
//!
//! ```text
//! INFO save: Save order item request=OrderItemRequest { order_id: Some(1), .. }
//! INFO Created entity_type="OrderItem" id=1 size=1
//! INFO save: Order item stored order_id=1 version=1
//! ERROR save: Failed to update order status after saving item order_id=1 error=transport failure: ...
//! ```

pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type and span names carry the context
        .compact()
        .init();
}
