//! Infrastructure layer: catalog file loading and environment configuration.

pub mod config;
pub mod loader;

pub use config::CatalogConfig;
pub use loader::{load_catalog_str, load_catalog_value, read_json, LoadError};
