//! Catalog entity types and the request-shaped inputs that mutate or query them.
//!
//! Patches carry `Option` fields: a field is applied if and only if it is present
//! in the incoming payload. Presence, not truthiness, decides numeric updates
//! (a patch `price: 0` is applied); empty-string name patches are deliberately
//! treated as "no change" for both brands and cars.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

pub const DEFAULT_LIST_LIMIT: u32 = 20;
pub const MAX_LIST_LIMIT: u32 = 100;

/// Manufacturer entity owning zero or more cars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Brand {
    pub id: i64,
    pub name: String,
}

/// Inventory item, optionally associated with one brand.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct Car {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub brand_id: Option<i64>,
}

/// Create payload for a brand. There is no `id` field: identity is always
/// storage-assigned, and any client-supplied id is ignored on deserialization.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewBrand {
    pub name: String,
}

/// Create payload for a car. `brand_id`, when supplied, must reference an
/// existing brand at write time.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewCar {
    pub name: String,
    pub price: f64,
    #[serde(default)]
    pub brand_id: Option<i64>,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct BrandPatch {
    #[serde(default)]
    pub name: Option<String>,
}

impl BrandPatch {
    /// The name to apply, if any. Empty strings count as absent.
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct CarPatch {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// A present, non-null value re-points the car at another brand (after an
    /// existence check). Absent or null leaves the stored reference unchanged;
    /// there is no way to clear an existing reference through a patch.
    #[serde(default)]
    pub brand_id: Option<i64>,
}

impl CarPatch {
    pub fn effective_name(&self) -> Option<&str> {
        self.name.as_deref().filter(|n| !n.is_empty())
    }
}

/// Conjunctive predicate set for car listing. Omitted fields impose no
/// constraint; predicates are always AND-ed, never OR-ed.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CarFilter {
    /// Equality on the owning brand.
    pub brand_id: Option<i64>,
    /// Case-insensitive substring match on the car name.
    pub q: Option<String>,
    /// Inclusive lower bound on price.
    pub min_price: Option<f64>,
    /// Inclusive upper bound on price.
    pub max_price: Option<f64>,
    /// Max results, clamped to 1–100, default 20.
    pub limit: Option<u32>,
    /// Rows to skip, default 0.
    pub offset: Option<u32>,
}

impl CarFilter {
    /// The substring predicate, if one applies. Empty strings count as absent.
    pub fn effective_q(&self) -> Option<&str> {
        self.q.as_deref().filter(|q| !q.is_empty())
    }

    pub fn effective_limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_LIST_LIMIT)
            .clamp(1, MAX_LIST_LIMIT)
    }

    pub fn effective_offset(&self) -> u32 {
        self.offset.unwrap_or(0)
    }
}
