//! Product specialization kinds.
//!
//! A kind is a tag plus a payload of extra descriptive fields. Kinds carry no
//! behaviour of their own; they matter only for identity checks such as
//! [`crate::Product::combined_value`].

use serde_json::json;

use catalog_core::{DomainError, DomainResult, ValueObject};

use crate::record::{self, Record};

/// Stable identifier of a product kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Product,
    Smartphone,
    LawnGrass,
}

impl KindTag {
    pub fn as_str(self) -> &'static str {
        match self {
            KindTag::Product => "product",
            KindTag::Smartphone => "smartphone",
            KindTag::LawnGrass => "lawn_grass",
        }
    }
}

impl core::fmt::Display for KindTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for KindTag {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "product" => Ok(KindTag::Product),
            "smartphone" => Ok(KindTag::Smartphone),
            "lawn_grass" => Ok(KindTag::LawnGrass),
            other => Err(DomainError::validation(format!("unknown product kind: {other}"))),
        }
    }
}

/// Extra fields of a smartphone.
#[derive(Debug, Clone, PartialEq)]
pub struct SmartphoneSpec {
    pub efficiency: f64,
    pub model: String,
    /// Built-in memory, in gigabytes.
    pub memory: u64,
    pub color: String,
}

impl ValueObject for SmartphoneSpec {}

/// Extra fields of a lawn grass product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LawnGrassSpec {
    pub country: String,
    pub germination_period: String,
    pub color: String,
}

impl ValueObject for LawnGrassSpec {}

/// Kind-specific payload of a product.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ProductKind {
    #[default]
    Base,
    Smartphone(SmartphoneSpec),
    LawnGrass(LawnGrassSpec),
}

impl ProductKind {
    pub fn tag(&self) -> KindTag {
        match self {
            ProductKind::Base => KindTag::Product,
            ProductKind::Smartphone(_) => KindTag::Smartphone,
            ProductKind::LawnGrass(_) => KindTag::LawnGrass,
        }
    }

    /// Decode the kind from a flat product record.
    ///
    /// Without a `kind` field the product is a base product. With one, every
    /// field of that kind is required.
    pub fn from_record(rec: &Record) -> DomainResult<Self> {
        let tag = match record::optional_str(rec, "kind")? {
            Some(raw) => raw.parse::<KindTag>()?,
            None => KindTag::Product,
        };

        Ok(match tag {
            KindTag::Product => ProductKind::Base,
            KindTag::Smartphone => ProductKind::Smartphone(SmartphoneSpec {
                efficiency: record::required_f64(rec, "efficiency")?,
                model: record::required_str(rec, "model")?,
                memory: record::required_u64(rec, "memory")?,
                color: record::required_str(rec, "color")?,
            }),
            KindTag::LawnGrass => ProductKind::LawnGrass(LawnGrassSpec {
                country: record::required_str(rec, "country")?,
                germination_period: record::required_str(rec, "germination_period")?,
                color: record::required_str(rec, "color")?,
            }),
        })
    }

    /// Write the kind tag and payload fields into `rec`. Base products add
    /// nothing, so their records stay in the plain four-field shape.
    pub fn write_record(&self, rec: &mut Record) {
        match self {
            ProductKind::Base => {}
            ProductKind::Smartphone(spec) => {
                rec.insert("kind".into(), json!(KindTag::Smartphone.as_str()));
                rec.insert("efficiency".into(), json!(spec.efficiency));
                rec.insert("model".into(), json!(spec.model));
                rec.insert("memory".into(), json!(spec.memory));
                rec.insert("color".into(), json!(spec.color));
            }
            ProductKind::LawnGrass(spec) => {
                rec.insert("kind".into(), json!(KindTag::LawnGrass.as_str()));
                rec.insert("country".into(), json!(spec.country));
                rec.insert("germination_period".into(), json!(spec.germination_period));
                rec.insert("color".into(), json!(spec.color));
            }
        }
    }
}
