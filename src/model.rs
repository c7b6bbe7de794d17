/// The numeric kinds and widths the generator knows about.
///
/// Kinds and widths are the two axes every conversion is classified on. They
/// are plain `Copy` enums so the rule table can match on them directly.
pub mod kind;
/// The closed set of primitive numeric types.
///
/// # Responsibilities
/// - Lists every supported type in emission order.
/// - Knows each type's Rust spelling, bit width and integer range.
/// - Maps platform-native types to their 32- and 64-bit counterparts.
pub mod numeric;
/// Conversion descriptors and their stable orderings.
///
/// A descriptor is an ordered `(from, to)` pair. This module builds the full
/// cross product in the orders the emitters walk it.
pub mod descriptor;

pub use descriptor::{Descriptor, Relation, Section};
pub use kind::{Kind, Width};
pub use numeric::NumericType;
