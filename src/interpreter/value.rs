/// Core numeric type.
///
/// Defines `Number`, the integer-or-real value produced by literals and by
/// every arithmetic step, together with promotion and rendering.
pub mod core;
