use crate::domain::{Brand, BrandPatch, NewBrand};
use crate::transport::http::handlers::common::catalog_error_response;
use crate::transport::http::types::{AppState, ErrorBody};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/brands",
    request_body = NewBrand,
    responses(
        (status = 201, description = "Brand created", body = Brand)
    )
)]
pub async fn create_brand_handler(
    State(state): State<AppState>,
    Json(body): Json<NewBrand>,
) -> impl IntoResponse {
    match state.catalog.create_brand(body).await {
        Ok(brand) => (StatusCode::CREATED, Json(brand)).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/brands",
    responses(
        (status = 200, description = "All brands in insertion order", body = [Brand])
    )
)]
pub async fn list_brands_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list_brands().await {
        Ok(brands) => Json(brands).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/brands/{id}",
    params(("id" = i64, Path, description = "Brand id")),
    responses(
        (status = 200, description = "Brand found", body = Brand),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn get_brand_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.catalog.get_brand(id).await {
        Ok(brand) => Json(brand).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/brands/{id}",
    params(("id" = i64, Path, description = "Brand id")),
    request_body = BrandPatch,
    responses(
        (status = 200, description = "Updated brand", body = Brand),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn patch_brand_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<BrandPatch>,
) -> impl IntoResponse {
    match state.catalog.update_brand(id, patch).await {
        Ok(brand) => Json(brand).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/brands/{id}",
    params(("id" = i64, Path, description = "Brand id")),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn delete_brand_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.catalog.delete_brand(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => catalog_error_response(e),
    }
}
