use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use depot_core::DomainError;
use depot_infra::ListingError;

pub fn listing_error_to_response(err: ListingError) -> axum::response::Response {
    match err {
        ListingError::Rejected(DomainError::InvalidArgument(msg)) => {
            json_error(StatusCode::BAD_REQUEST, "invalid_argument", msg)
        }
        ListingError::Rejected(other) => {
            json_error(StatusCode::BAD_REQUEST, "validation_error", other.to_string())
        }
        ListingError::Store(e) => {
            tracing::error!(error = %e, "listing failed in store");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "store_error", e.to_string())
        }
    }
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
