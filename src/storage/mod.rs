pub mod repository;

pub use repository::CatalogRepository;
