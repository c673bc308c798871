use crate::util::num::i64_to_f64;

/// Represents the numeric result of a calculation.
///
/// Every literal, intermediate result and final answer is a `Number`. The
/// variant records whether the value is still exact (`Integer`) or has been
/// promoted to floating point (`Real`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A integer value (64 bit integer).
    Integer(i64),
    /// A numeric value (double precision floating-point).
    Real(f64),
}

impl Number {
    /// Converts the number to an `f64`.
    ///
    /// Integers beyond `2^53` lose precision; this is the promotion used by
    /// mixed arithmetic.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Number;
    ///
    /// assert_eq!(Number::Integer(10).as_real(), 10.0);
    /// assert_eq!(Number::Real(2.5).as_real(), 2.5);
    /// ```
    #[must_use]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(n) => i64_to_f64(n),
            Self::Real(r) => r,
        }
    }
    /// Promotes an integer to a real value for mixed math, or returns values
    /// as-is if already matching.
    ///
    /// - If one side is an integer and the other is a real, the integer is
    ///   converted to a real.
    /// - Otherwise, both values are returned unchanged.
    ///
    /// # Example
    /// ```
    /// use reckon::interpreter::value::core::Number;
    ///
    /// let (l, r) = Number::Integer(2).promote(Number::Real(0.5));
    /// assert_eq!(l, Number::Real(2.0));
    /// assert_eq!(r, Number::Real(0.5));
    /// ```
    #[must_use]
    pub fn promote(self, other: Self) -> (Self, Self) {
        match (self, other) {
            (Self::Real(_), Self::Integer(_)) | (Self::Integer(_), Self::Real(_)) => {
                (Self::Real(self.as_real()), Self::Real(other.as_real()))
            },
            _ => (self, other),
        }
    }
    /// Returns `true` for integer zero and for both signed real zeros.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Integer(n) => n == 0,
            Self::Real(r) => r == 0.0,
        }
    }
}

/// Integers render as integer literals; reals always carry a fractional part
/// so `42.0` stays distinguishable from `42`.
impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) if r.is_finite() && r.fract() == 0.0 && r.abs() < 1e16 => {
                write!(f, "{r:.1}")
            },
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
