use serde_json::json;

use catalog_core::{DomainError, DomainResult, Entity};

use crate::display::{format_price, DisplayUnits, PriceMessages};
use crate::kind::{LawnGrassSpec, ProductKind, SmartphoneSpec};
use crate::price::{parse_answer, Answer, PriceChange, PriceConsole};
use crate::record::{self, Record};

/// A priced, quantified catalog item.
///
/// The price is guarded on mutation only: construction trusts the caller,
/// [`Product::set_price`] does not.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: String,
    description: String,
    price: f64,
    quantity: i64,
    kind: ProductKind,
}

impl Product {
    /// Create a base product. Fails with `InvalidQuantity` when `quantity <= 0`.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
    ) -> DomainResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Base)
    }

    pub fn with_kind(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        kind: ProductKind,
    ) -> DomainResult<Self> {
        if quantity <= 0 {
            return Err(DomainError::InvalidQuantity(quantity));
        }
        Ok(Self {
            name: name.into(),
            description: description.into(),
            price,
            quantity,
            kind,
        })
    }

    pub fn smartphone(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: SmartphoneSpec,
    ) -> DomainResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::Smartphone(spec))
    }

    pub fn lawn_grass(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        quantity: i64,
        spec: LawnGrassSpec,
    ) -> DomainResult<Self> {
        Self::with_kind(name, description, price, quantity, ProductKind::LawnGrass(spec))
    }

    /// Build a product from a flat record with `name`, `description`,
    /// `price` and `quantity` (plus the kind's fields when `kind` is set).
    pub fn from_record(rec: &Record) -> DomainResult<Self> {
        let name = record::required_str(rec, "name")?;
        let description = record::required_str(rec, "description")?;
        let price = record::required_f64(rec, "price")?;
        let quantity = record::required_i64(rec, "quantity")?;
        let kind = ProductKind::from_record(rec)?;
        Self::with_kind(name, description, price, quantity, kind)
    }

    /// Flat record accepted by [`Product::from_record`].
    pub fn to_record(&self) -> Record {
        let mut rec = Record::new();
        rec.insert("name".into(), json!(self.name));
        rec.insert("description".into(), json!(self.description));
        rec.insert("price".into(), json!(self.price));
        rec.insert("quantity".into(), json!(self.quantity));
        self.kind.write_record(&mut rec);
        rec
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn kind(&self) -> &ProductKind {
        &self.kind
    }

    /// Stock value: `price * quantity`.
    pub fn value(&self) -> f64 {
        self.price * self.quantity as f64
    }

    /// Change the price using the default message templates.
    pub fn set_price(&mut self, new_price: f64, console: &mut dyn PriceConsole) -> PriceChange {
        self.set_price_with(new_price, console, &PriceMessages::default())
    }

    /// Change the price.
    ///
    /// - `new_price <= 0` (or NaN): rejected with a diagnostic, no change.
    /// - `new_price > price`: applied.
    /// - `0 < new_price < price`: applied only after the console answers `y`;
    ///   `n` or closed input declines, anything else re-prompts.
    pub fn set_price_with(
        &mut self,
        new_price: f64,
        console: &mut dyn PriceConsole,
        messages: &PriceMessages,
    ) -> PriceChange {
        // Written as a negated comparison so NaN is rejected too.
        if !(new_price > 0.0) {
            tracing::warn!(product = %self.name, new_price, "rejected non-positive price");
            console.notify(&messages.non_positive);
            return PriceChange::RejectedNonPositive;
        }

        if new_price > self.price {
            tracing::debug!(product = %self.name, old = self.price, new = new_price, "price raised");
            self.price = new_price;
            return PriceChange::Raised;
        }

        if new_price == self.price {
            return PriceChange::Unchanged;
        }

        let prompt = PriceMessages::render(&messages.confirm_lower, &self.name, self.price, new_price);
        loop {
            let Some(raw) = console.ask(&prompt) else {
                tracing::debug!(product = %self.name, "console closed; markdown declined");
                return PriceChange::Declined;
            };
            match parse_answer(&raw) {
                Answer::Yes => {
                    let old = self.price;
                    self.price = new_price;
                    tracing::info!(product = %self.name, old, new = new_price, "price lowered");
                    console.notify(&PriceMessages::render(&messages.lowered, &self.name, old, new_price));
                    return PriceChange::Lowered;
                }
                Answer::No => return PriceChange::Declined,
                Answer::Invalid => console.notify(&messages.invalid_answer),
            }
        }
    }

    /// Sum of both stock values. Only products of the same kind combine.
    pub fn combined_value(&self, other: &Product) -> DomainResult<f64> {
        let (left, right) = (self.kind.tag(), other.kind.tag());
        if left != right {
            return Err(DomainError::type_mismatch(left.as_str(), right.as_str()));
        }
        Ok(self.value() + other.value())
    }

    /// `"<name>, <price> <currency>, stock: <quantity> <unit>"`.
    pub fn render(&self, units: &DisplayUnits) -> String {
        format!(
            "{}, {} {}, stock: {} {}",
            self.name,
            format_price(self.price),
            units.currency,
            self.quantity,
            units.stock
        )
    }

    /// Fold a same-name product into this one: quantities add up, the price
    /// only ever rises. The kind, description and payload stay those of
    /// `self`. On overflow nothing changes.
    pub(crate) fn absorb(&mut self, incoming: Product) -> DomainResult<()> {
        let quantity = self
            .quantity
            .checked_add(incoming.quantity)
            .ok_or_else(|| DomainError::QuantityOverflow(self.name.clone()))?;
        self.quantity = quantity;
        if incoming.price > self.price {
            self.price = incoming.price;
        }
        Ok(())
    }
}

impl Entity for Product {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}

impl core::fmt::Display for Product {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.render(&DisplayUnits::default()))
    }
}

impl core::ops::Add for &Product {
    type Output = DomainResult<f64>;

    fn add(self, other: &Product) -> Self::Output {
        self.combined_value(other)
    }
}
