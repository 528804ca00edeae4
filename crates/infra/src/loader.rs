//! Catalog loader: JSON file → categories.
//!
//! Environmental failures (missing or unreadable file, malformed JSON, a
//! top-level value that is not an array) yield an empty catalog. Once the
//! document has the expected outer shape, every record is decoded strictly
//! and the first malformed one is reported.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;

use catalog_core::DomainError;
use catalog_products::record::{self, Record};
use catalog_products::{CatalogRegistry, Category};

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LoadError {
    /// A category or product record is malformed.
    #[error("malformed record at {path}: {source}")]
    Record {
        path: String,
        #[source]
        source: DomainError,
    },
}

impl LoadError {
    fn record(path: impl Into<String>, source: DomainError) -> Self {
        Self::Record {
            path: path.into(),
            source,
        }
    }

    /// The underlying domain error.
    pub fn domain(&self) -> &DomainError {
        match self {
            LoadError::Record { source, .. } => source,
        }
    }
}

/// Load every category from the JSON file at `path`.
pub fn read_json(
    path: impl AsRef<Path>,
    registry: &Arc<CatalogRegistry>,
) -> Result<Vec<Category>, LoadError> {
    let path = path.as_ref();
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "catalog file not found; loading empty catalog");
            return Ok(Vec::new());
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "catalog file unreadable; loading empty catalog");
            return Ok(Vec::new());
        }
    };

    let categories = load_catalog_str(&text, registry)?;
    tracing::info!(
        path = %path.display(),
        categories = categories.len(),
        "catalog loaded"
    );
    Ok(categories)
}

/// Load every category from JSON text.
pub fn load_catalog_str(
    text: &str,
    registry: &Arc<CatalogRegistry>,
) -> Result<Vec<Category>, LoadError> {
    match serde_json::from_str::<Value>(text) {
        Ok(value) => load_catalog_value(&value, registry),
        Err(e) => {
            tracing::warn!(error = %e, "catalog is not valid JSON; loading empty catalog");
            Ok(Vec::new())
        }
    }
}

/// Load every category from an already-parsed JSON document.
pub fn load_catalog_value(
    value: &Value,
    registry: &Arc<CatalogRegistry>,
) -> Result<Vec<Category>, LoadError> {
    let Some(records) = value.as_array() else {
        tracing::warn!("catalog root is not an array; loading empty catalog");
        return Ok(Vec::new());
    };

    records
        .iter()
        .enumerate()
        .map(|(i, value)| category_from_value(value, i, registry))
        .collect()
}

fn category_from_value(
    value: &Value,
    index: usize,
    registry: &Arc<CatalogRegistry>,
) -> Result<Category, LoadError> {
    let path = format!("categories[{index}]");
    let rec = record::as_record(value, &path).map_err(|e| LoadError::record(&path, e))?;
    let fields = category_fields(rec).map_err(|e| LoadError::record(&path, e))?;

    let mut products = Vec::with_capacity(fields.products.len());
    for (j, value) in fields.products.iter().enumerate() {
        let product_path = format!("{path}.products[{j}]");
        let product = record::as_record(value, &product_path)
            .and_then(|rec| registry.product_from_record(rec))
            .map_err(|e| LoadError::record(&product_path, e))?;
        products.push(product);
    }

    Category::new(registry, fields.name, fields.description, products)
        .map_err(|e| LoadError::record(&path, e))
}

struct CategoryFields<'a> {
    name: String,
    description: String,
    products: &'a [Value],
}

fn category_fields(rec: &Record) -> Result<CategoryFields<'_>, DomainError> {
    Ok(CategoryFields {
        name: record::required_str(rec, "name")?,
        description: record::required_str(rec, "description")?,
        products: record::required_array(rec, "products")?,
    })
}
