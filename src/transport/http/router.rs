use crate::domain::{Brand, BrandPatch, Car, CarPatch, NewBrand, NewCar};
use crate::transport::http::handlers::{brands, cars, health};
use crate::transport::http::types::{AppState, ErrorBody, HealthResponse};
use axum::routing::get;
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        brands::create_brand_handler,
        brands::list_brands_handler,
        brands::get_brand_handler,
        brands::patch_brand_handler,
        brands::delete_brand_handler,
        cars::create_car_handler,
        cars::list_cars_handler,
        cars::get_car_handler,
        cars::patch_car_handler,
        cars::delete_car_handler
    ),
    components(schemas(
        Brand,
        Car,
        NewBrand,
        NewCar,
        BrandPatch,
        CarPatch,
        ErrorBody,
        HealthResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/brands",
            get(brands::list_brands_handler).post(brands::create_brand_handler),
        )
        .route(
            "/brands/:id",
            get(brands::get_brand_handler)
                .patch(brands::patch_brand_handler)
                .delete(brands::delete_brand_handler),
        )
        .route(
            "/cars",
            get(cars::list_cars_handler).post(cars::create_car_handler),
        )
        .route(
            "/cars/:id",
            get(cars::get_car_handler)
                .patch(cars::patch_car_handler)
                .delete(cars::delete_car_handler),
        )
        .with_state(app_state)
}
