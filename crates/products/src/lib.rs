//! Products domain module.
//!
//! This crate contains business rules for the catalog: products, their
//! specialization kinds, categories with merge-on-add, and the registry that
//! tracks catalog-wide counters. Pure domain logic (no file IO, no terminal).

pub mod category;
pub mod display;
pub mod kind;
pub mod price;
pub mod product;
pub mod record;
pub mod registry;

pub use category::{AddOutcome, Category};
pub use display::{DisplayUnits, PriceMessages};
pub use kind::{KindTag, LawnGrassSpec, ProductKind, SmartphoneSpec};
pub use price::{NonInteractive, PriceChange, PriceConsole};
pub use product::Product;
pub use record::Record;
pub use registry::{CatalogObserver, CatalogRegistry, CounterSnapshot};
