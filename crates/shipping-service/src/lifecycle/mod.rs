//! # System Lifecycle
//!
//! Starting, wiring and stopping the shipping service.
//!
//! The service has a single actor, the order-item store. [`ShippingSystem`] spawns it, hands
//! its client to [`OrderItemService`](crate::service::OrderItemService) together with the
//! injected [`RemoteGateway`](crate::clients::RemoteGateway), and on shutdown drops its clients
//! and awaits the actor task.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop serving** - the HTTP server returns and drops its router (and the service clone in it)
//! 2. **Drop the remaining clients** - [`ShippingSystem::shutdown`] closes the store channel
//! 3. **Actor detects closure** - `receiver.recv()` returns `None`, final size is logged
//! 4. **Await completion** - the task handle is joined
//!
//! [`setup_tracing`] initializes structured logging; see the [`tracing`] module.

pub mod shipping_system;
pub mod tracing;

pub use self::shipping_system::*;
pub use self::tracing::setup_tracing;
