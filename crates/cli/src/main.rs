use std::io;
use std::sync::Arc;

use anyhow::Context;

use catalog_cli::args::Args;
use catalog_cli::console::LineConsole;
use catalog_cli::report::render_catalog;
use catalog_infra::{read_json, CatalogConfig};
use catalog_observability::TracingObserver;
use catalog_products::{CatalogRegistry, NonInteractive, PriceConsole};

fn main() -> anyhow::Result<()> {
    catalog_observability::init();

    let args = Args::parse(std::env::args().skip(1))?;
    let mut config = CatalogConfig::from_env();
    if let Some(file) = args.file {
        config.catalog_file = file;
    }

    let registry = Arc::new(CatalogRegistry::with_observer(Arc::new(TracingObserver)));
    let mut categories = read_json(&config.catalog_file, &registry)
        .with_context(|| format!("failed to load {}", config.catalog_file.display()))?;

    if let Some(reprice) = args.reprice {
        let product = categories
            .iter_mut()
            .find_map(|c| c.get_mut(&reprice.product))
            .with_context(|| format!("no product named {:?}", reprice.product))?;

        let mut console: Box<dyn PriceConsole> = if args.yes {
            Box::new(NonInteractive { accept_markdowns: true })
        } else {
            Box::new(LineConsole::new(io::stdin().lock(), io::stdout()))
        };
        let outcome = product.set_price_with(reprice.price, console.as_mut(), &config.messages);
        tracing::info!(product = %reprice.product, ?outcome, "price change handled");
    }

    print!("{}", render_catalog(&categories, &config.units));

    let counters = registry.snapshot();
    tracing::info!(
        categories = counters.category_count,
        products = counters.product_count,
        "catalog summary"
    );
    Ok(())
}
