/// Numeric conversion helpers.
///
/// This module collects the conversions between `i64` and `f64` used when an
/// integer is promoted into real arithmetic, and the parsing of literal text
/// into reals.
pub mod num;
