use crate::{
    ast::BinaryOperator,
    error::EvaluationError,
    interpreter::{
        evaluator::core::{Context, DivisionMode, EvalResult, OverflowMode},
        value::core::Number,
    },
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Mixed operands are promoted to real first. Division by zero is checked
    /// after promotion, so `1 / 0` and `1 / 0.0` fail alike. Integer results
    /// are computed with checked arithmetic; an overflow either recomputes the
    /// operation in reals or fails, depending on [`Context::overflow`].
    /// Integer/integer division follows [`Context::division`].
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `position`: Position of the operator, for error reporting.
    ///
    /// # Example
    /// ```
    /// use reckon::{
    ///     ast::BinaryOperator,
    ///     interpreter::{
    ///         evaluator::core::{Context, DivisionMode},
    ///         value::core::Number,
    ///     },
    /// };
    ///
    /// let exact = Context::new().with_division(DivisionMode::Exact);
    /// let six = Number::Integer(6);
    /// let three = Number::Integer(3);
    ///
    /// assert_eq!(exact.eval_scalar_op(BinaryOperator::Div, six, three, 2),
    ///            Ok(Number::Integer(2)));
    /// assert_eq!(Context::new().eval_scalar_op(BinaryOperator::Div, six, three, 2),
    ///            Ok(Number::Real(2.0)));
    /// ```
    pub fn eval_scalar_op(&self,
                          op: BinaryOperator,
                          left: Number,
                          right: Number,
                          position: usize)
                          -> EvalResult<Number> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Number::{Integer, Real};

        let (left, right) = left.promote(right);

        if op == Div && right.is_zero() {
            return Err(EvaluationError::DivisionByZero { position });
        }

        match (left, right) {
            (Integer(a), Integer(b)) => {
                let checked = match op {
                    Add => a.checked_add(b),
                    Sub => a.checked_sub(b),
                    Mul => a.checked_mul(b),
                    Div => return self.eval_integer_division(a, b, position),
                };
                match checked {
                    Some(n) => Ok(Integer(n)),
                    None => self.on_overflow(op, left, right, position),
                }
            },
            _ => Ok(Real(real_op(op, left.as_real(), right.as_real()))),
        }
    }

    /// Divides two integers under the configured [`DivisionMode`]. The divisor
    /// is known to be non-zero.
    fn eval_integer_division(&self, a: i64, b: i64, position: usize) -> EvalResult<Number> {
        let left = Number::Integer(a);
        let right = Number::Integer(b);

        match self.division {
            DivisionMode::Real => Ok(Number::Real(left.as_real() / right.as_real())),
            DivisionMode::Exact => match a.checked_rem(b) {
                Some(0) => match a.checked_div(b) {
                    Some(n) => Ok(Number::Integer(n)),
                    None => self.on_overflow(BinaryOperator::Div, left, right, position),
                },
                Some(_) => Ok(Number::Real(left.as_real() / right.as_real())),
                None => self.on_overflow(BinaryOperator::Div, left, right, position),
            },
            DivisionMode::Truncate => match a.checked_div(b) {
                Some(n) => Ok(Number::Integer(n)),
                None => self.on_overflow(BinaryOperator::Div, left, right, position),
            },
        }
    }

    fn on_overflow(&self,
                   op: BinaryOperator,
                   left: Number,
                   right: Number,
                   position: usize)
                   -> EvalResult<Number> {
        match self.overflow {
            OverflowMode::Promote => Ok(Number::Real(real_op(op, left.as_real(), right.as_real()))),
            OverflowMode::Fail => Err(EvaluationError::IntegerOverflow { position }),
        }
    }
}

fn real_op(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
