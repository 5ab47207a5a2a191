//! Centralized configuration (environment variables + defaults).

use std::path::PathBuf;

/// Path of the SQLite database file. Defaults to `data/car_store.db`.
pub fn db_path() -> PathBuf {
    std::env::var("DB_PATH")
        .unwrap_or_else(|_| "data/car_store.db".to_string())
        .into()
}

/// Address the API server binds to. Defaults to `0.0.0.0:8000`.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string())
}

/// Base URL of the API, used by the chat client. Defaults to `http://localhost:8000`.
pub fn api_url() -> String {
    std::env::var("API_URL").unwrap_or_else(|_| "http://localhost:8000".to_string())
}
