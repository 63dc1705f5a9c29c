//! Entity trait: identity + continuity across state changes.

use crate::id::RecordKey;

/// Entity marker + minimal interface.
///
/// Equality of entities is structural (derived over all fields); the
/// identifier is only what the store uses as primary key.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug + Into<RecordKey>;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Returns the identifier in its store-level form.
    fn key(&self) -> RecordKey {
        self.id().clone().into()
    }
}
