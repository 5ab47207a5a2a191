//! Catalog error taxonomy.
//!
//! Every failure the service can surface falls into one of three classes:
//! a missing resource (404), a business-rule violation in the supplied data (400),
//! or a storage failure (500, propagated as-is, never retried).

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Brand not found")]
    BrandNotFound,

    #[error("Car not found")]
    CarNotFound,

    /// The supplied `brand_id` does not reference an existing brand. This is a
    /// client error (bad input), not a missing-resource error: the entity the
    /// request addresses may well exist.
    #[error("brand_id does not exist")]
    UnknownBrand,

    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error(transparent)]
    Storage(#[from] sqlx::Error),
}

impl CatalogError {
    /// True for the 400-class variants (bad input the client can correct).
    pub fn is_validation(&self) -> bool {
        matches!(self, CatalogError::UnknownBrand | CatalogError::InvalidFilter(_))
    }

    /// True for the 404-class variants (resource permanently absent).
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::BrandNotFound | CatalogError::CarNotFound)
    }
}
