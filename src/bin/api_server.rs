// src/bin/api_server.rs

use car_store::infra::config;
use car_store::transport;
use car_store::CatalogService;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    // --- Service Initialization ---
    let db_path = config::db_path();
    println!("> Initializing CatalogService (db: {})...", db_path.display());
    let catalog = CatalogService::connect(&db_path).await?;

    // Seed demo data so a fresh deployment has something to browse.
    if catalog.seed_if_empty().await? {
        println!("> Empty store detected, seeded demo brands and cars.");
    }

    let app_state = transport::http::AppState {
        catalog: catalog.clone(),
    };
    println!("> CatalogService initialized successfully.");

    // --- API Server Initialization ---
    println!("> Starting API server...");
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url(
            "/api-docs/openapi.json",
            transport::http::ApiDoc::openapi(),
        ))
        .layer(cors);

    let bind_addr = config::bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    println!("> API server listening on http://{}", bind_addr);
    println!("> Swagger UI available at http://{}/swagger-ui", bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), stopping server.");
        }
    }

    Ok(())
}
