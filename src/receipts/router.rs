use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use serde_json::json;

use super::domain::{Receipt, ReceiptId};
use super::service::{ReceiptService, ReceiptServiceError};
use super::store::PointsStore;

/// Router builder exposing HTTP endpoints for receipt submission and points
/// lookup.
pub fn receipt_router<S>(service: Arc<ReceiptService<S>>) -> Router
where
    S: PointsStore + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<S>))
        .route("/receipts/:id/points", get(points_handler::<S>))
        .with_state(service)
}

#[derive(Debug, Serialize)]
struct ProcessReceiptResponse {
    id: ReceiptId,
}

#[derive(Debug, Serialize)]
struct ReceiptPointsResponse {
    points: u64,
}

pub(crate) async fn process_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    payload: Result<axum::Json<Receipt>, JsonRejection>,
) -> Response
where
    S: PointsStore + 'static,
{
    // A body that does not decode into a receipt at all is a client error,
    // reported the same way as a failed validation.
    let receipt = match payload {
        Ok(axum::Json(receipt)) => receipt,
        Err(rejection) => {
            let payload = json!({
                "error": format!("invalid receipt payload: {}", rejection.body_text()),
            });
            return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
        }
    };

    match service.submit(&receipt) {
        Ok(id) => (StatusCode::OK, axum::Json(ProcessReceiptResponse { id })).into_response(),
        Err(ReceiptServiceError::Validation(error)) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<S>(
    State(service): State<Arc<ReceiptService<S>>>,
    Path(id): Path<String>,
) -> Response
where
    S: PointsStore + 'static,
{
    let id = ReceiptId(id);
    match service.points(&id) {
        Ok(points) => {
            (StatusCode::OK, axum::Json(ReceiptPointsResponse { points })).into_response()
        }
        Err(ReceiptServiceError::NotFound) => {
            let payload = json!({
                "error": "receipt not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
