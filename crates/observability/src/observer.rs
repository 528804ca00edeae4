use catalog_products::{CatalogObserver, Category, Product};

/// Logs every product and category constructed through a registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// `Kind('name', 'description', price, quantity)`.
    pub fn describe(product: &Product) -> String {
        format!(
            "{}('{}', '{}', {:?}, {})",
            kind_label(product),
            product.name(),
            product.description(),
            product.price(),
            product.quantity()
        )
    }
}

fn kind_label(product: &Product) -> &'static str {
    use catalog_products::KindTag;

    match product.kind().tag() {
        KindTag::Product => "Product",
        KindTag::Smartphone => "Smartphone",
        KindTag::LawnGrass => "LawnGrass",
    }
}

impl CatalogObserver for TracingObserver {
    fn product_created(&self, product: &Product) {
        ::tracing::info!(kind = %product.kind().tag(), "{}", Self::describe(product));
    }

    fn category_created(&self, category: &Category) {
        ::tracing::info!(
            category = %category.name(),
            products = category.len(),
            "category created"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_products::LawnGrassSpec;

    #[test]
    fn describes_base_products() {
        let p = Product::new("A", "product A", 10.0, 10).unwrap();
        assert_eq!(TracingObserver::describe(&p), "Product('A', 'product A', 10.0, 10)");
    }

    #[test]
    fn describes_specialized_products_by_kind() {
        let p = Product::lawn_grass(
            "Grass",
            "elite",
            500.0,
            20,
            LawnGrassSpec {
                country: "Russia".into(),
                germination_period: "7 days".into(),
                color: "green".into(),
            },
        )
        .unwrap();
        assert!(TracingObserver::describe(&p).starts_with("LawnGrass('Grass'"));
    }
}
