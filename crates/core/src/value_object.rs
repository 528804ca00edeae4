//! Value object trait: equality by value, not identity.
//!
//! Specialization payloads (the extra descriptive fields of a smartphone or
//! a lawn grass product) are value objects: they carry no identity of their
//! own and two payloads with the same fields are interchangeable.

/// Marker trait for value objects.
///
/// ## Value Object vs Entity
///
/// - **Value Object**: no identity (two payloads with the same fields are equal)
/// - **Entity**: has identity (two products with the same name in one category
///   are the same product)
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq)]
/// struct Dimensions { width_mm: u32, height_mm: u32 }
///
/// impl ValueObject for Dimensions {}
/// ```
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
