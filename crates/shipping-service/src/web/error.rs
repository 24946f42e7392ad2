use crate::service::OrderItemError;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use tracing::{error, warn};

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: ErrorPayload,
}

#[derive(Debug, Serialize)]
struct ErrorPayload {
    code: &'static str,
    message: String,
}

/// A failed request, rendered as `{"error": {"code", "message"}}`.
///
/// Remote unavailability shares 404 with absence. Only create describes which dependency
/// failed; routes on an existing item go through [`ApiError::concealed`], which renders an
/// unreachable dependency exactly like an absent one.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, code: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            code,
            message: message.into(),
        }
    }

    pub fn invalid_json(rejection: &JsonRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_json", rejection.body_text())
    }

    pub fn invalid_path(rejection: &PathRejection) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "invalid_path", rejection.body_text())
    }

    /// Like `From<OrderItemError>`, but `RemoteUnavailable` becomes a plain `not_found` carrying
    /// only its context. The transport detail stays out of the response.
    pub fn concealed(e: OrderItemError) -> Self {
        match e {
            OrderItemError::RemoteUnavailable { context, .. } => {
                Self::new(StatusCode::NOT_FOUND, "not_found", context)
            }
            e => e.into(),
        }
    }
}

impl From<OrderItemError> for ApiError {
    fn from(e: OrderItemError) -> Self {
        let (status, code) = match &e {
            OrderItemError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
            OrderItemError::InvalidState(_) => (StatusCode::BAD_REQUEST, "invalid_state"),
            OrderItemError::InsufficientAvailability { .. } => {
                (StatusCode::BAD_REQUEST, "insufficient_availability")
            }
            OrderItemError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            OrderItemError::RemoteUnavailable { .. } => (StatusCode::NOT_FOUND, "remote_unavailable"),
            OrderItemError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            OrderItemError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "store_unavailable"),
        };
        Self::new(status, code, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            error!(status = %self.status, code = self.code, message = %self.message, "Request failed");
        } else {
            warn!(status = %self.status, code = self.code, message = %self.message, "Request rejected");
        }
        let body = ErrorBody {
            error: ErrorPayload {
                code: self.code,
                message: self.message,
            },
        };
        (self.status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::GatewayError;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (OrderItemError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (OrderItemError::InvalidState("x".into()), StatusCode::BAD_REQUEST),
            (
                OrderItemError::InsufficientAvailability {
                    available: 1,
                    requested: 2,
                },
                StatusCode::BAD_REQUEST,
            ),
            (OrderItemError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (
                OrderItemError::RemoteUnavailable {
                    context: "x".into(),
                    source: GatewayError::Transport("down".into()),
                },
                StatusCode::NOT_FOUND,
            ),
            (OrderItemError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                OrderItemError::Store("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (error, status) in cases {
            assert_eq!(ApiError::from(error).status, status);
        }
    }

    #[test]
    fn test_remote_unavailable_keeps_descriptive_message() {
        let api_error = ApiError::from(OrderItemError::RemoteUnavailable {
            context: "Error verifying order existence".into(),
            source: GatewayError::Transport("connection refused".into()),
        });
        assert_eq!(
            api_error.message,
            "Error verifying order existence: transport failure: connection refused"
        );
    }

    #[test]
    fn test_concealed_remote_unavailable_reads_as_absence() {
        let concealed = ApiError::concealed(OrderItemError::RemoteUnavailable {
            context: "Order information not available for this order item".into(),
            source: GatewayError::Transport("connection refused".into()),
        });
        let absent = ApiError::concealed(OrderItemError::NotFound(
            "Order information not available for this order item".into(),
        ));
        assert_eq!(concealed, absent);

        let conflict = ApiError::concealed(OrderItemError::Conflict("x".into()));
        assert_eq!(conflict.status, StatusCode::CONFLICT);
    }
}
