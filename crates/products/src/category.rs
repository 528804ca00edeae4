use std::collections::HashMap;
use std::sync::Arc;

use serde_json::{json, Value};

use catalog_core::{DomainResult, Entity};

use crate::display::DisplayUnits;
use crate::product::Product;
use crate::record::Record;
use crate::registry::CatalogRegistry;

/// Result of [`Category::add_product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The product was new to the category and was appended.
    Appended,
    /// A product with the same name existed and absorbed the incoming one.
    Merged,
}

/// Named collection of products, ordered by insertion and unique by name.
#[derive(Debug, Clone)]
pub struct Category {
    name: String,
    description: String,
    products: Vec<Product>,
    index: HashMap<String, usize>,
    registry: Arc<CatalogRegistry>,
}

impl Category {
    /// Build a category and record it on `registry`.
    ///
    /// Same-name entries in `products` are merged the way
    /// [`Category::add_product`] merges them, so the counter grows by the
    /// number of distinct products kept. Fails with `QuantityOverflow` when
    /// merged quantities exceed `i64::MAX`; the registry is left untouched.
    pub fn new(
        registry: &Arc<CatalogRegistry>,
        name: impl Into<String>,
        description: impl Into<String>,
        products: Vec<Product>,
    ) -> DomainResult<Self> {
        let mut category = Self {
            name: name.into(),
            description: description.into(),
            products: Vec::with_capacity(products.len()),
            index: HashMap::with_capacity(products.len()),
            registry: Arc::clone(registry),
        };
        for product in products {
            category.insert(product)?;
        }

        registry.category_constructed(&category);
        tracing::debug!(
            category = %category.name,
            products = category.products.len(),
            "category constructed"
        );
        Ok(category)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn registry(&self) -> &Arc<CatalogRegistry> {
        &self.registry
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.index.get(name).map(|&i| &self.products[i])
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Product> {
        self.index.get(name).map(|&i| &mut self.products[i])
    }

    /// Add a product, merging into an existing same-name entry.
    ///
    /// A merge sums quantities and keeps the higher price; only an append
    /// increments the registry's product counter. The merged entry keeps its
    /// own kind: an incoming product of another kind contributes only stock
    /// and price. A merge that would overflow the quantity fails with
    /// `QuantityOverflow` and changes nothing.
    pub fn add_product(&mut self, product: Product) -> DomainResult<AddOutcome> {
        let outcome = self.insert(product)?;
        if outcome == AddOutcome::Appended {
            self.registry.product_added();
        }
        Ok(outcome)
    }

    fn insert(&mut self, product: Product) -> DomainResult<AddOutcome> {
        match self.index.get(product.id()) {
            Some(&i) => {
                let target = &mut self.products[i];
                if target.kind().tag() != product.kind().tag() {
                    tracing::warn!(
                        category = %self.name,
                        product = %target.name(),
                        kept = %target.kind().tag(),
                        dropped = %product.kind().tag(),
                        "merging products of different kinds; keeping existing kind"
                    );
                }
                target.absorb(product)?;
                tracing::debug!(
                    category = %self.name,
                    product = %target.name(),
                    quantity = target.quantity(),
                    price = target.price(),
                    "merged product"
                );
                Ok(AddOutcome::Merged)
            }
            None => {
                self.index.insert(product.id().clone(), self.products.len());
                self.products.push(product);
                Ok(AddOutcome::Appended)
            }
        }
    }

    /// One rendered line per product, in insertion order.
    pub fn products_view(&self) -> String {
        self.products_view_with(&DisplayUnits::default())
    }

    pub fn products_view_with(&self, units: &DisplayUnits) -> String {
        self.products
            .iter()
            .map(|p| format!("{}\n", p.render(units)))
            .collect()
    }

    /// Sum of all quantities, widened so distinct products near `i64::MAX`
    /// cannot overflow it.
    pub fn total_quantity(&self) -> i128 {
        self.products.iter().map(|p| i128::from(p.quantity())).sum()
    }

    /// Quantity-weighted average price; `0.0` when there is no stock.
    pub fn average_price(&self) -> f64 {
        let total_quantity = self.total_quantity();
        if total_quantity == 0 {
            return 0.0;
        }
        let total_value: f64 = self.products.iter().map(Product::value).sum();
        total_value / total_quantity as f64
    }

    /// Fresh iterator over the products, in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.products.iter()
    }

    /// Record with `name`, `description` and `products`.
    pub fn to_record(&self) -> Record {
        let mut rec = Record::new();
        rec.insert("name".into(), json!(self.name));
        rec.insert("description".into(), json!(self.description));
        rec.insert(
            "products".into(),
            Value::Array(
                self.products
                    .iter()
                    .map(|p| Value::Object(p.to_record()))
                    .collect(),
            ),
        );
        rec
    }
}

impl PartialEq for Category {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.description == other.description
            && self.products == other.products
    }
}

impl<'a> IntoIterator for &'a Category {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, quantity: {} units", self.name, self.total_quantity())
    }
}
