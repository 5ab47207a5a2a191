//! Durable storage of catalog entities.
//!
//! This module owns the SQLite pool and all SQL issued against it:
//! 1.  Schema creation for the `brands` and `cars` tables.
//! 2.  CRUD statements, using `RETURNING` so every write hands back the full row.
//! 3.  Filtered listing, composed predicate-by-predicate with `QueryBuilder`.
//!
//! Each statement acquires a pooled connection and releases it on every exit
//! path; durability is per-statement (no deferred flush visible to callers).
//! Referential checks live in the service layer, not here: the repository
//! trusts the values it is handed.

use crate::domain::{Brand, Car, CarFilter, CatalogError};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{QueryBuilder, SqlitePool};
use std::path::Path;

pub struct CatalogRepository {
    pool: SqlitePool,
}

impl CatalogRepository {
    /// Opens (creating if missing) the SQLite database at `path` and ensures
    /// the schema exists.
    pub async fn connect(path: &Path) -> anyhow::Result<Self> {
        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() {
                std::fs::create_dir_all(dir)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS brands (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL
            )",
        )
        .execute(&pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS cars (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                price REAL NOT NULL,
                brand_id INTEGER REFERENCES brands(id)
            )",
        )
        .execute(&pool)
        .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Cheap liveness probe for the health endpoint.
    pub async fn ping(&self) -> Result<(), CatalogError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    // --- Brands ---

    pub async fn create_brand(&self, name: &str) -> Result<Brand, CatalogError> {
        let brand = sqlx::query_as::<_, Brand>(
            "INSERT INTO brands (name) VALUES (?) RETURNING id, name",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;
        Ok(brand)
    }

    pub async fn get_brand(&self, id: i64) -> Result<Option<Brand>, CatalogError> {
        let brand = sqlx::query_as::<_, Brand>("SELECT id, name FROM brands WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(brand)
    }

    /// All brands in insertion order.
    pub async fn list_brands(&self) -> Result<Vec<Brand>, CatalogError> {
        let brands = sqlx::query_as::<_, Brand>("SELECT id, name FROM brands ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(brands)
    }

    pub async fn update_brand(&self, id: i64, name: &str) -> Result<Option<Brand>, CatalogError> {
        let brand = sqlx::query_as::<_, Brand>(
            "UPDATE brands SET name = ? WHERE id = ? RETURNING id, name",
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(brand)
    }

    /// Deletes a brand, first clearing the reference on any car that points at
    /// it so no dangling `brand_id` survives. Returns false if the brand did
    /// not exist.
    pub async fn delete_brand(&self, id: i64) -> Result<bool, CatalogError> {
        let mut tx = self.pool.begin().await?;
        sqlx::query("UPDATE cars SET brand_id = NULL WHERE brand_id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM brands WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }

    // --- Cars ---

    pub async fn create_car(
        &self,
        name: &str,
        price: f64,
        brand_id: Option<i64>,
    ) -> Result<Car, CatalogError> {
        let car = sqlx::query_as::<_, Car>(
            "INSERT INTO cars (name, price, brand_id) VALUES (?, ?, ?)
             RETURNING id, name, price, brand_id",
        )
        .bind(name)
        .bind(price)
        .bind(brand_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(car)
    }

    pub async fn get_car(&self, id: i64) -> Result<Option<Car>, CatalogError> {
        let car =
            sqlx::query_as::<_, Car>("SELECT id, name, price, brand_id FROM cars WHERE id = ?")
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;
        Ok(car)
    }

    /// Lists cars matching the conjunction of the filter's predicates, ordered
    /// by id so offset/limit pagination is deterministic across repeated calls
    /// with no intervening writes.
    pub async fn list_cars(&self, filter: &CarFilter) -> Result<Vec<Car>, CatalogError> {
        let mut qb: QueryBuilder<sqlx::Sqlite> =
            QueryBuilder::new("SELECT id, name, price, brand_id FROM cars WHERE 1 = 1");

        if let Some(brand_id) = filter.brand_id {
            qb.push(" AND brand_id = ").push_bind(brand_id);
        }
        if let Some(q) = filter.effective_q() {
            // Explicit LOWER() on both sides: case-insensitive regardless of
            // the column's collation.
            qb.push(" AND LOWER(name) LIKE ")
                .push_bind(format!("%{}%", q.to_lowercase()));
        }
        if let Some(min_price) = filter.min_price {
            qb.push(" AND price >= ").push_bind(min_price);
        }
        if let Some(max_price) = filter.max_price {
            qb.push(" AND price <= ").push_bind(max_price);
        }

        qb.push(" ORDER BY id LIMIT ")
            .push_bind(filter.effective_limit() as i64)
            .push(" OFFSET ")
            .push_bind(filter.effective_offset() as i64);

        let cars = qb.build_query_as::<Car>().fetch_all(&self.pool).await?;
        Ok(cars)
    }

    /// Writes the fully resolved column values for a car. The service computes
    /// these from the stored row plus the patch, so a one-field patch carries
    /// the other columns through unchanged.
    pub async fn update_car(
        &self,
        id: i64,
        name: &str,
        price: f64,
        brand_id: Option<i64>,
    ) -> Result<Option<Car>, CatalogError> {
        let car = sqlx::query_as::<_, Car>(
            "UPDATE cars SET name = ?, price = ?, brand_id = ? WHERE id = ?
             RETURNING id, name, price, brand_id",
        )
        .bind(name)
        .bind(price)
        .bind(brand_id)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(car)
    }

    pub async fn delete_car(&self, id: i64) -> Result<bool, CatalogError> {
        let result = sqlx::query("DELETE FROM cars WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Seeds two demo brands and three demo cars, but only into an empty store.
    pub async fn seed_demo_data(&self) -> Result<bool, CatalogError> {
        if !self.list_brands().await?.is_empty() {
            return Ok(false);
        }
        let bmw = self.create_brand("BMW").await?;
        let tesla = self.create_brand("Tesla").await?;
        self.create_car("Model 3", 39999.0, Some(tesla.id)).await?;
        self.create_car("Model Y", 49999.0, Some(tesla.id)).await?;
        self.create_car("320i", 29999.0, Some(bmw.id)).await?;
        Ok(true)
    }
}
