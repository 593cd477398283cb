pub mod catalog;
pub mod data;
pub mod models;

pub use catalog::{Catalog, CatalogError};
