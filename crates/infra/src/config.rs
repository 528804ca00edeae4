//! Configuration loading and representation.
//!
//! | variable                | meaning                                   |
//! |-------------------------|-------------------------------------------|
//! | `CATALOG_FILE`          | catalog JSON path (`data/products.json`)  |
//! | `CATALOG_CURRENCY_UNIT` | currency unit shown after prices          |
//! | `CATALOG_STOCK_UNIT`    | unit shown after stock levels             |
//! | `CATALOG_MESSAGES`      | JSON file overriding price messages       |

use std::path::{Path, PathBuf};

use catalog_products::{DisplayUnits, PriceMessages};

pub const DEFAULT_CATALOG_FILE: &str = "data/products.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub catalog_file: PathBuf,
    pub units: DisplayUnits,
    pub messages: PriceMessages,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            catalog_file: PathBuf::from(DEFAULT_CATALOG_FILE),
            units: DisplayUnits::default(),
            messages: PriceMessages::default(),
        }
    }
}

impl CatalogConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(file) = lookup("CATALOG_FILE") {
            config.catalog_file = PathBuf::from(file);
        }
        if let Some(currency) = lookup("CATALOG_CURRENCY_UNIT") {
            config.units.currency = currency;
        }
        if let Some(stock) = lookup("CATALOG_STOCK_UNIT") {
            config.units.stock = stock;
        }
        if let Some(path) = lookup("CATALOG_MESSAGES") {
            config.messages = load_messages(Path::new(&path));
        }

        config
    }
}

/// Read message overrides; unreadable or malformed files fall back to the
/// default messages.
fn load_messages(path: &Path) -> PriceMessages {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "message overrides unreadable; using defaults");
            return PriceMessages::default();
        }
    };
    serde_json::from_str(&text).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "message overrides malformed; using defaults");
        PriceMessages::default()
    })
}
