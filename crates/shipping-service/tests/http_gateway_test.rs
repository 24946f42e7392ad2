//! `HttpGateway` against a fake order/product service served on a local port.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, patch};
use axum::{Json, Router};
use serde_json::json;
use shipping_service::clients::{GatewayError, HttpGateway, RemoteGateway};
use shipping_service::model::{OrderId, OrderStatus, ProductId};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

#[derive(Default)]
struct FakeRemote {
    status_patches: AtomicUsize,
}

async fn order(Path(id): Path<u32>) -> Response {
    match id {
        1 => Json(json!({
            "orderId": 1,
            "orderDesc": "desk",
            "orderFee": 4.5,
            "orderStatus": "ORDERED"
        }))
        .into_response(),
        2 => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        3 => (StatusCode::OK, "not json").into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn advance(State(remote): State<Arc<FakeRemote>>, Path(id): Path<u32>) -> StatusCode {
    if id == 1 {
        remote.status_patches.fetch_add(1, Ordering::SeqCst);
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn product(Path(id): Path<u32>) -> Response {
    match id {
        7 => Json(json!({"productId": 7, "productTitle": "lamp", "priceUnit": 10.0, "quantity": 12}))
            .into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn serve_fake_remote() -> (String, Arc<FakeRemote>) {
    let remote = Arc::new(FakeRemote::default());
    let router = Router::new()
        .route("/order-service/api/orders/:id", get(order))
        .route("/order-service/api/orders/:id/status", patch(advance))
        .route("/product-service/api/products/:id", get(product))
        .with_state(remote.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    (format!("http://{address}"), remote)
}

fn gateway(base: &str) -> HttpGateway {
    HttpGateway::new(
        format!("{base}/order-service/api/orders"),
        format!("{base}/product-service/api/products"),
    )
}

#[tokio::test]
async fn test_fetches_and_decodes_remote_entities() {
    let (base, _remote) = serve_fake_remote().await;
    let gateway = gateway(&base);

    let order = gateway.fetch_order(OrderId(1)).await.unwrap();
    assert_eq!(order.order_status, OrderStatus::Ordered);
    assert_eq!(order.order_desc.as_deref(), Some("desk"));

    let product = gateway.fetch_product(ProductId(7)).await.unwrap();
    assert_eq!(product.quantity, 12);
    assert_eq!(product.product_title.as_deref(), Some("lamp"));
}

#[tokio::test]
async fn test_404_is_not_found_everything_else_is_transport() {
    let (base, _remote) = serve_fake_remote().await;
    let gateway = gateway(&base);

    assert_eq!(
        gateway.fetch_order(OrderId(9)).await,
        Err(GatewayError::order_not_found(OrderId(9)))
    );
    assert_eq!(
        gateway.fetch_product(ProductId(9)).await,
        Err(GatewayError::product_not_found(ProductId(9)))
    );

    let server_error = gateway.fetch_order(OrderId(2)).await.unwrap_err();
    assert!(!server_error.is_not_found());
    assert!(server_error.to_string().contains("500"));

    let malformed = gateway.fetch_order(OrderId(3)).await.unwrap_err();
    assert!(matches!(malformed, GatewayError::Transport(_)));
}

#[tokio::test]
async fn test_status_advance_patches_the_status_endpoint() {
    let (base, remote) = serve_fake_remote().await;
    let gateway = gateway(&base);

    gateway.advance_order_status(OrderId(1)).await.unwrap();
    assert_eq!(remote.status_patches.load(Ordering::SeqCst), 1);

    let missing = gateway.advance_order_status(OrderId(4)).await;
    assert!(matches!(missing, Err(GatewayError::NotFound { .. })));
}
