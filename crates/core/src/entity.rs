//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Catalog entities are identified within their owning collection only; the
/// identifier is not meant to be unique across collections.
pub trait Entity {
    /// Identifier type (e.g. a product name).
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
