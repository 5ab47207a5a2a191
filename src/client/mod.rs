//! Chat client for the catalog API.
//!
//! A thin consumer of the service's read endpoints: commands are parsed into
//! query parameters, responses are formatted into short text lines. No
//! business logic lives here.

use crate::domain::{Brand, Car};
use anyhow::Context;

pub const HELP: &str = "Commands:\n\
    /health - API status\n\
    /brands - list brands\n\
    /cars [params] - list cars, e.g.: /cars q=tesla max_price=50000\n\
    /car <id> - car card by id\n";

pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn health(&self) -> anyhow::Result<serde_json::Value> {
        let resp = self
            .http
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .context("health request failed")?;
        Ok(resp.json().await?)
    }

    pub async fn brands(&self) -> anyhow::Result<Vec<Brand>> {
        let resp = self
            .http
            .get(format!("{}/brands", self.base_url))
            .send()
            .await
            .context("brands request failed")?;
        Ok(resp.error_for_status()?.json().await?)
    }

    /// Lists cars, passing free-text `key=value` tokens straight through as
    /// query parameters; the server validates them.
    pub async fn cars(&self, params: &[(String, String)]) -> anyhow::Result<Vec<Car>> {
        let resp = self
            .http
            .get(format!("{}/cars", self.base_url))
            .query(params)
            .send()
            .await
            .context("cars request failed")?;
        Ok(resp.error_for_status()?.json().await?)
    }

    /// Single-car lookup. Returns None on 404.
    pub async fn car(&self, id: i64) -> anyhow::Result<Option<Car>> {
        let resp = self
            .http
            .get(format!("{}/cars/{}", self.base_url, id))
            .send()
            .await
            .context("car request failed")?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(resp.error_for_status()?.json().await?))
    }
}

/// Splits `key=value` tokens; tokens without `=` are dropped.
pub fn parse_params(args: &[&str]) -> Vec<(String, String)> {
    args.iter()
        .filter_map(|a| {
            a.split_once('=')
                .map(|(k, v)| (k.to_string(), v.to_string()))
        })
        .collect()
}

pub fn format_brand(brand: &Brand) -> String {
    format!("#{} - {}", brand.id, brand.name)
}

pub fn format_car(car: &Car) -> String {
    let brand = match car.brand_id {
        Some(id) => id.to_string(),
        None => "none".to_string(),
    };
    format!("#{} - {} - {} € - brand_id {}", car.id, car.name, car.price, brand)
}
