/// Reference numeric helpers.
///
/// This module models, on `i128` and `f64`, what Rust's primitive `as` casts
/// do and which values a type can hold exactly. The rule table is checked
/// against these helpers, and the test emitter uses them to compute boundary
/// probes, so neither has to compile the generated code to know what it does.
///
/// Every `i8`..`u64` value fits in an `i128`, and every `f32` widens to `f64`
/// exactly, so nothing here can lose information.
pub mod num;
