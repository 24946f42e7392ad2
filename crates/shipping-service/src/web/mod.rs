//! # HTTP Boundary
//!
//! Maps `/api/shippings` onto [`OrderItemService`](crate::service::OrderItemService).
//!
//! | Route | Success |
//! |-------|---------|
//! | `GET /api/shippings` | `{"collection": [view, ...]}` |
//! | `GET /api/shippings/{orderId}` | view |
//! | `POST /api/shippings` | view |
//! | `DELETE /api/shippings/{orderId}` | `true` |
//! | `GET /health` | `{"status": "ok"}` |
//!
//! Failures are [`ApiError`]s: 400 for bad input or a status that forbids the operation, 404 for
//! absent records and unreachable dependencies alike, 409 for conflicts, 500 when the local store
//! is gone. Only create says which dependency failed.

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::ApiError;
pub use routes::router;
