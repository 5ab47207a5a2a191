//! The catalog service.
//!
//! This module sits between the transport layer and the repository. It is
//! responsible for:
//! 1.  Ordered validation: existence checks run before any other validation,
//!     and referential checks run before any row is written.
//! 2.  Patch application: a field is applied iff present in the patch;
//!     presence (not truthiness) decides numeric fields, while empty-string
//!     name patches are no-ops.
//! 3.  Mapping storage outcomes onto the `CatalogError` taxonomy.
//!
//! The service holds no state of its own beyond the repository handle; nothing
//! is retried, and every failure is reported synchronously to the caller.

use crate::domain::{
    Brand, BrandPatch, Car, CarFilter, CarPatch, CatalogError, NewBrand, NewCar,
};
use crate::storage::CatalogRepository;
use std::path::Path;
use std::sync::Arc;

#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<CatalogRepository>,
}

impl CatalogService {
    /// Connects to (creating if missing) the SQLite store at `path`.
    pub async fn connect(path: &Path) -> anyhow::Result<Self> {
        let repo = CatalogRepository::connect(path).await?;
        Ok(Self {
            repo: Arc::new(repo),
        })
    }

    pub fn repository(&self) -> &CatalogRepository {
        &self.repo
    }

    pub async fn ping(&self) -> Result<(), CatalogError> {
        self.repo.ping().await
    }

    /// Seeds demo data into an empty store. Returns true if anything was written.
    pub async fn seed_if_empty(&self) -> Result<bool, CatalogError> {
        self.repo.seed_demo_data().await
    }

    // --- Brands ---

    pub async fn create_brand(&self, new: NewBrand) -> Result<Brand, CatalogError> {
        self.repo.create_brand(&new.name).await
    }

    pub async fn get_brand(&self, id: i64) -> Result<Brand, CatalogError> {
        self.repo
            .get_brand(id)
            .await?
            .ok_or(CatalogError::BrandNotFound)
    }

    pub async fn list_brands(&self) -> Result<Vec<Brand>, CatalogError> {
        self.repo.list_brands().await
    }

    pub async fn update_brand(&self, id: i64, patch: BrandPatch) -> Result<Brand, CatalogError> {
        // Existence first; a missing brand short-circuits before the patch is
        // even inspected.
        let current = self.get_brand(id).await?;

        match patch.effective_name() {
            Some(name) => self
                .repo
                .update_brand(id, name)
                .await?
                .ok_or(CatalogError::BrandNotFound),
            None => Ok(current),
        }
    }

    pub async fn delete_brand(&self, id: i64) -> Result<(), CatalogError> {
        if self.repo.delete_brand(id).await? {
            Ok(())
        } else {
            Err(CatalogError::BrandNotFound)
        }
    }

    // --- Cars ---

    /// Creates a car. A supplied `brand_id` is resolved against the brands
    /// table before anything is persisted; an unknown brand fails the request
    /// and writes no row.
    pub async fn create_car(&self, new: NewCar) -> Result<Car, CatalogError> {
        if let Some(brand_id) = new.brand_id {
            self.ensure_brand_exists(brand_id).await?;
        }
        self.repo.create_car(&new.name, new.price, new.brand_id).await
    }

    pub async fn get_car(&self, id: i64) -> Result<Car, CatalogError> {
        self.repo.get_car(id).await?.ok_or(CatalogError::CarNotFound)
    }

    pub async fn list_cars(&self, filter: CarFilter) -> Result<Vec<Car>, CatalogError> {
        if let Some(p) = filter.min_price {
            if p < 0.0 {
                return Err(CatalogError::InvalidFilter(
                    "min_price must be >= 0".to_string(),
                ));
            }
        }
        if let Some(p) = filter.max_price {
            if p < 0.0 {
                return Err(CatalogError::InvalidFilter(
                    "max_price must be >= 0".to_string(),
                ));
            }
        }
        self.repo.list_cars(&filter).await
    }

    /// Applies a partial update. Validation order: car existence, then brand
    /// existence (only when the patch carries a `brand_id`), then a single
    /// full-column write. Nothing is mutated until both checks pass.
    pub async fn update_car(&self, id: i64, patch: CarPatch) -> Result<Car, CatalogError> {
        let current = self.get_car(id).await?;

        if let Some(brand_id) = patch.brand_id {
            self.ensure_brand_exists(brand_id).await?;
        }

        let name = patch.effective_name().unwrap_or(&current.name).to_string();
        let price = patch.price.unwrap_or(current.price);
        let brand_id = patch.brand_id.or(current.brand_id);

        self.repo
            .update_car(id, &name, price, brand_id)
            .await?
            .ok_or(CatalogError::CarNotFound)
    }

    pub async fn delete_car(&self, id: i64) -> Result<(), CatalogError> {
        if self.repo.delete_car(id).await? {
            Ok(())
        } else {
            Err(CatalogError::CarNotFound)
        }
    }

    async fn ensure_brand_exists(&self, brand_id: i64) -> Result<(), CatalogError> {
        match self.repo.get_brand(brand_id).await? {
            Some(_) => Ok(()),
            None => Err(CatalogError::UnknownBrand),
        }
    }
}
