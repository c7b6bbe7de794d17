/// Safety predicates and the table that picks one per pair.
///
/// A `Check` is the boolean an emitted function returns next to its result.
/// `check` maps a descriptor to its check whenever the answer does not depend
/// on the platform.
///
/// # Responsibilities
/// - Encodes the fixed conversion rule table.
/// - Renders each check as a Rust expression over `value`.
/// - Evaluates each check on a sample the way the emitted code would.
pub mod check;
/// Per-descriptor emission plans.
///
/// Pairs with one platform-native side do not get a check of their own; they
/// delegate to the 32- or 64-bit function instead. A `Plan` says which.
pub mod plan;
/// Boundary probes for the test emitter.
///
/// A probe is a source value together with the flag the conversion must
/// report for it.
pub mod probe;

pub use check::{Check, Sample, UpperBound, check};
pub use plan::{Delegate, Plan, Side, plan};
pub use probe::{Probe, ProbeValue, probes};
