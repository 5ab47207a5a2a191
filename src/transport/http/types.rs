use crate::app::CatalogService;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// Error body returned for every non-2xx response. The message is
/// entity-specific so clients can tell "resource missing" from "bad input"
/// without parsing status codes alone.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct HealthResponse {
    pub status: &'static str,
}
