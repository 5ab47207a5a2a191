use crate::domain::CatalogError;
use crate::transport::http::types::ErrorBody;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Maps the domain error taxonomy onto HTTP: missing resource -> 404,
/// business-rule violation -> 400, storage failure -> 500.
pub fn catalog_error_response(err: CatalogError) -> Response {
    let status = if err.is_not_found() {
        StatusCode::NOT_FOUND
    } else if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (
        status,
        Json(ErrorBody {
            error: err.to_string(),
        }),
    )
        .into_response()
}
