use crate::domain::{Car, CarFilter, CarPatch, NewCar};
use crate::transport::http::handlers::common::catalog_error_response;
use crate::transport::http::types::{AppState, ErrorBody};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    post,
    path = "/cars",
    request_body = NewCar,
    responses(
        (status = 201, description = "Car created", body = Car),
        (status = 400, description = "brand_id does not exist", body = ErrorBody)
    )
)]
pub async fn create_car_handler(
    State(state): State<AppState>,
    Json(body): Json<NewCar>,
) -> impl IntoResponse {
    match state.catalog.create_car(body).await {
        Ok(car) => (StatusCode::CREATED, Json(car)).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/cars",
    params(CarFilter),
    responses(
        (status = 200, description = "Cars matching every supplied predicate", body = [Car]),
        (status = 400, description = "Invalid filter", body = ErrorBody)
    )
)]
pub async fn list_cars_handler(
    State(state): State<AppState>,
    Query(filter): Query<CarFilter>,
) -> impl IntoResponse {
    match state.catalog.list_cars(filter).await {
        Ok(cars) => Json(cars).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    get,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 200, description = "Car found", body = Car),
        (status = 404, description = "Car not found", body = ErrorBody)
    )
)]
pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.catalog.get_car(id).await {
        Ok(car) => Json(car).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    patch,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    request_body = CarPatch,
    responses(
        (status = 200, description = "Updated car", body = Car),
        (status = 400, description = "brand_id does not exist", body = ErrorBody),
        (status = 404, description = "Car not found", body = ErrorBody)
    )
)]
pub async fn patch_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(patch): Json<CarPatch>,
) -> impl IntoResponse {
    match state.catalog.update_car(id, patch).await {
        Ok(car) => Json(car).into_response(),
        Err(e) => catalog_error_response(e),
    }
}

#[utoipa::path(
    delete,
    path = "/cars/{id}",
    params(("id" = i64, Path, description = "Car id")),
    responses(
        (status = 204, description = "Car deleted"),
        (status = 404, description = "Car not found", body = ErrorBody)
    )
)]
pub async fn delete_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> impl IntoResponse {
    match state.catalog.delete_car(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => catalog_error_response(e),
    }
}
