//! Catalog-wide counters and the construction observer hook.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use catalog_core::DomainResult;

use crate::category::Category;
use crate::product::Product;
use crate::record::Record;

/// Observer notified after products and categories are constructed through a
/// [`CatalogRegistry`].
pub trait CatalogObserver: Send + Sync {
    fn product_created(&self, _product: &Product) {}

    fn category_created(&self, _category: &Category) {}
}

/// Point-in-time view of both counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CounterSnapshot {
    pub category_count: u64,
    pub product_count: u64,
}

/// Owner of the cumulative catalog counters.
///
/// - `category_count`: categories ever constructed against this registry.
/// - `product_count`: distinct products ever held by those categories
///   (initial products plus every non-merging add).
///
/// Counters never decrease. Share one registry per catalog via `Arc`; tests
/// get isolation by creating their own.
#[derive(Default)]
pub struct CatalogRegistry {
    category_count: AtomicU64,
    product_count: AtomicU64,
    observer: Option<Arc<dyn CatalogObserver>>,
}

impl CatalogRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_observer(observer: Arc<dyn CatalogObserver>) -> Self {
        Self {
            observer: Some(observer),
            ..Self::default()
        }
    }

    pub fn category_count(&self) -> u64 {
        self.category_count.load(Ordering::Relaxed)
    }

    pub fn product_count(&self) -> u64 {
        self.product_count.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            category_count: self.category_count(),
            product_count: self.product_count(),
        }
    }

    /// Construct a base product and notify the observer.
    pub fn product(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Product> {
        let product = Product::new(name, description, price, quantity)?;
        self.notify_product(&product);
        Ok(product)
    }

    /// Construct a product from a flat record and notify the observer.
    pub fn product_from_record(&self, rec: &Record) -> DomainResult<Product> {
        let product = Product::from_record(rec)?;
        self.notify_product(&product);
        Ok(product)
    }

    fn notify_product(&self, product: &Product) {
        if let Some(observer) = &self.observer {
            observer.product_created(product);
        }
    }

    pub(crate) fn category_constructed(&self, category: &Category) {
        self.category_count.fetch_add(1, Ordering::Relaxed);
        self.product_count
            .fetch_add(category.len() as u64, Ordering::Relaxed);
        if let Some(observer) = &self.observer {
            observer.category_created(category);
        }
    }

    pub(crate) fn product_added(&self) {
        self.product_count.fetch_add(1, Ordering::Relaxed);
    }
}

impl core::fmt::Debug for CatalogRegistry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CatalogRegistry")
            .field("category_count", &self.category_count())
            .field("product_count", &self.product_count())
            .field("observer", &self.observer.is_some())
            .finish()
    }
}
