//! Value object trait: equality by value, not identity.

/// Marker trait for value objects.
///
/// Value objects have no identity and are compared by their attribute values:
/// prices, budget brackets, filter selections. They are immutable once built; to
/// "change" one, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
