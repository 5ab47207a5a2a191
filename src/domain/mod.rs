//! Domain types for the car catalog.

pub mod catalog;
pub mod error;

pub use catalog::{Brand, BrandPatch, Car, CarFilter, CarPatch, NewBrand, NewCar};
pub use error::CatalogError;
