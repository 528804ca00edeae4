//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog domain.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Only field- and type-level violations live here. Soft rejections (a
/// non-positive price, a declined markdown) are reported as outcomes, not
/// errors, and environmental load failures never reach this type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A product was constructed with a non-positive quantity.
    #[error("invalid quantity: {0} (must be greater than zero)")]
    InvalidQuantity(i64),

    /// Adding stock would overflow the quantity of the named product.
    #[error("quantity overflow for product {0}")]
    QuantityOverflow(String),

    /// A required field is absent from a flat record.
    #[error("missing field: {0}")]
    MissingField(String),

    /// A field is present but holds a value of the wrong shape.
    #[error("invalid field `{field}`: expected {expected}")]
    InvalidField { field: String, expected: &'static str },

    /// An operation was applied to values of incompatible kinds.
    #[error("type mismatch: {left} vs {right}")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    /// A value failed validation (e.g. unknown product kind tag).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField(field.into())
    }

    pub fn invalid_field(field: impl Into<String>, expected: &'static str) -> Self {
        Self::InvalidField {
            field: field.into(),
            expected,
        }
    }

    pub fn type_mismatch(left: &'static str, right: &'static str) -> Self {
        Self::TypeMismatch { left, right }
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
