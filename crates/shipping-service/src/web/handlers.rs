use super::error::ApiError;
use crate::model::{CollectionResponse, OrderId, OrderItemRequest, OrderItemView};
use crate::service::OrderItemService;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn find_all(
    State(service): State<OrderItemService>,
) -> Result<Json<CollectionResponse<OrderItemView>>, ApiError> {
    info!("GET /api/shippings");
    let views = service.find_all().await?;
    Ok(Json(views.into()))
}

pub async fn find_by_id(
    State(service): State<OrderItemService>,
    order_id: Result<Path<u32>, PathRejection>,
) -> Result<Json<OrderItemView>, ApiError> {
    let Path(order_id) = order_id.map_err(|e| ApiError::invalid_path(&e))?;
    info!(order_id, "GET /api/shippings/{{orderId}}");
    let view = service
        .find_by_id(OrderId(order_id))
        .await
        .map_err(ApiError::concealed)?;
    Ok(Json(view))
}

pub async fn save(
    State(service): State<OrderItemService>,
    payload: Result<Json<OrderItemRequest>, JsonRejection>,
) -> Result<Json<OrderItemView>, ApiError> {
    let Json(request) = payload.map_err(|e| ApiError::invalid_json(&e))?;
    info!("POST /api/shippings");
    let view = service.save(request).await?;
    Ok(Json(view))
}

pub async fn delete_by_id(
    State(service): State<OrderItemService>,
    order_id: Result<Path<u32>, PathRejection>,
) -> Result<Json<bool>, ApiError> {
    let Path(order_id) = order_id.map_err(|e| ApiError::invalid_path(&e))?;
    info!(order_id, "DELETE /api/shippings/{{orderId}}");
    service
        .deactivate(OrderId(order_id))
        .await
        .map_err(ApiError::concealed)?;
    Ok(Json(true))
}
