/// Converts an `i64` to the nearest `f64`.
///
/// Values whose magnitude exceeds `2^53` are rounded to the nearest
/// representable real.
///
/// ## Example
/// ```
/// use reckon::util::num::i64_to_f64;
///
/// assert_eq!(i64_to_f64(-42), -42.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub const fn i64_to_f64(value: i64) -> f64 {
    value as f64
}
/// Parses a run of decimal digits, with an optional leading `-`, into a real.
///
/// Used for integer literals that do not fit into an `i64` and for literals
/// with a decimal separator. `None` signals text that is not a number at all,
/// such as a lone separator.
///
/// ## Example
/// ```
/// use reckon::util::num::parse_real;
///
/// assert_eq!(parse_real("3."), Some(3.0));
/// assert_eq!(parse_real("-.5"), Some(-0.5));
/// assert_eq!(parse_real("."), None);
/// ```
#[must_use]
pub fn parse_real(text: &str) -> Option<f64> {
    text.parse().ok()
}
