use super::handlers;
use crate::service::OrderItemService;
use axum::routing::get;
use axum::Router;

/// Builds the HTTP router over `service`.
pub fn router(service: OrderItemService) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .route(
            "/api/shippings",
            get(handlers::find_all).post(handlers::save),
        )
        .route(
            "/api/shippings/:order_id",
            get(handlers::find_by_id).delete(handlers::delete_by_id),
        )
        .with_state(service)
}
