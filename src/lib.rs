pub mod app;
pub mod client;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::CatalogService;
pub use client::CatalogClient;
pub use domain::{Brand, BrandPatch, Car, CarFilter, CarPatch, CatalogError, NewBrand, NewCar};
pub use storage::CatalogRepository;
