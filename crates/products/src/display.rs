//! Display units and operator-facing message templates.
//!
//! Both are plain configuration: defaults are English, overrides usually
//! come from a JSON file (see `catalog-infra`'s config module).

use serde::Deserialize;

/// Units appended to prices and stock levels when rendering products.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DisplayUnits {
    pub currency: String,
    pub stock: String,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            currency: "rub.".to_string(),
            stock: "pcs.".to_string(),
        }
    }
}

/// Message templates used while changing a price.
///
/// Placeholders: `{name}`, `{old}` and `{new}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PriceMessages {
    pub non_positive: String,
    pub confirm_lower: String,
    pub invalid_answer: String,
    pub lowered: String,
}

impl Default for PriceMessages {
    fn default() -> Self {
        Self {
            non_positive: "price must be positive".to_string(),
            confirm_lower: "Lower the price of {name} from {old} to {new}? (y/n)".to_string(),
            invalid_answer: "Please answer y or n".to_string(),
            lowered: "Price of {name} lowered to {new}".to_string(),
        }
    }
}

impl PriceMessages {
    pub fn render(template: &str, name: &str, old: f64, new: f64) -> String {
        template
            .replace("{name}", name)
            .replace("{old}", &format_price(old))
            .replace("{new}", &format_price(new))
    }
}

/// Render a price the way the catalog prints it: always with a fractional
/// part (`10.0`, `10.25`).
pub fn format_price(price: f64) -> String {
    format!("{price:?}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prices_keep_a_fractional_part() {
        assert_eq!(format_price(10.0), "10.0");
        assert_eq!(format_price(10.25), "10.25");
    }

    #[test]
    fn template_placeholders_are_filled() {
        let m = PriceMessages::default();
        let text = PriceMessages::render(&m.confirm_lower, "A1", 15.0, 12.0);
        assert_eq!(text, "Lower the price of A1 from 15.0 to 12.0? (y/n)");
    }

    #[test]
    fn partial_overrides_keep_defaults() {
        let m: PriceMessages =
            serde_json::from_str(r#"{ "non_positive": "Цена не должна быть нулевая или отрицательная" }"#)
                .unwrap();
        assert_eq!(m.non_positive, "Цена не должна быть нулевая или отрицательная");
        assert_eq!(m.invalid_answer, PriceMessages::default().invalid_answer);

        let u: DisplayUnits = serde_json::from_str(r#"{ "currency": "руб." }"#).unwrap();
        assert_eq!(u.currency, "руб.");
        assert_eq!(u.stock, "pcs.");
    }
}
