use std::fmt::Write;

use catalog_products::{Category, DisplayUnits};

/// Human-readable listing of every category, its products and its
/// average price.
pub fn render_catalog(categories: &[Category], units: &DisplayUnits) -> String {
    let mut out = String::new();
    for category in categories {
        // Writing to a String cannot fail.
        let _ = writeln!(out, "{category}");
        let _ = writeln!(out, "  {}", category.description());
        for line in category.products_view_with(units).lines() {
            let _ = writeln!(out, "  - {line}");
        }
        let _ = writeln!(
            out,
            "  average price: {:.2} {}",
            category.average_price(),
            units.currency
        );
    }
    out
}
