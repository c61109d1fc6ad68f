use rug::Complex;

use crate::{
    error::ParseErrorKind,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        options::IntWordSize,
        value::core::{FLOAT_PRECISION, Promoted, Value},
    },
    operator::BinaryOperator,
};

impl Context {
    /// Evaluates a scalar arithmetic operation.
    ///
    /// Both operands are promoted to their common variant first. Integer
    /// results wrap to the word size; division truncates toward zero and the
    /// remainder takes the sign of the dividend. Division and remainder by an
    /// exact zero fail in every variant. The remainder of complex operands is
    /// only defined when both are real-valued. Operators other than `Add`,
    /// `Sub`, `Mul`, `Div` and `Mod` are rejected as invalid operands.
    ///
    /// # Parameters
    /// - `op`: The arithmetic operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `word`: Word size integer results are wrapped to.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the computed scalar.
    ///
    /// # Example
    /// ```
    /// use radixcalc::{
    ///     error::ParseErrorKind,
    ///     interpreter::{evaluator::core::Context, options::IntWordSize, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let word = IntWordSize::Bits128;
    /// let q = Context::eval_scalar_op(BinaryOperator::Div, &Value::Int(-7), &Value::Int(2), word);
    /// assert_eq!(q.unwrap(), Value::Int(-3));
    ///
    /// let r = Context::eval_scalar_op(BinaryOperator::Mod, &Value::Int(-7), &Value::Int(2), word);
    /// assert_eq!(r.unwrap(), Value::Int(-1));
    ///
    /// let zero = Context::eval_scalar_op(BinaryOperator::Div, &Value::Int(1), &Value::Int(0), word);
    /// assert_eq!(zero.unwrap_err().kind, ParseErrorKind::DivisionByZero);
    ///
    /// let other = Context::eval_scalar_op(BinaryOperator::BitAnd, &Value::Int(1), &Value::Int(1), word);
    /// assert_eq!(other.unwrap_err().kind, ParseErrorKind::InvalidOperand);
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator,
                          left: &Value,
                          right: &Value,
                          word: IntWordSize)
                          -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mod, Mul, Sub};

        if !matches!(op, Add | Sub | Mul | Div | Mod) {
            return Err(ParseErrorKind::InvalidOperand.into());
        }
        if matches!(op, Div | Mod) && right.is_zero() {
            return Err(ParseErrorKind::DivisionByZero.into());
        }

        match left.promote(right, word) {
            Promoted::Int(a, b) => Ok(Value::Int(word.wrap_signed(match op {
                                                                       Add => a.wrapping_add(b),
                                                                       Sub => a.wrapping_sub(b),
                                                                       Mul => a.wrapping_mul(b),
                                                                       Div => a.wrapping_div(b),
                                                                       Mod => a.wrapping_rem(b),
                                                                       _ => unreachable!(),
                                                                   }))),
            Promoted::UInt(a, b) => Ok(Value::UInt(word.wrap_unsigned(match op {
                                                                         Add => a.wrapping_add(b),
                                                                         Sub => a.wrapping_sub(b),
                                                                         Mul => a.wrapping_mul(b),
                                                                         Div => a / b,
                                                                         Mod => a % b,
                                                                         _ => unreachable!(),
                                                                     }))),
            Promoted::Real(a, b) => Ok(Value::Real(match op {
                                                       Add => a + &b,
                                                       Sub => a - &b,
                                                       Mul => a * &b,
                                                       Div => a / &b,
                                                       Mod => a % &b,
                                                       _ => unreachable!(),
                                                   })),
            Promoted::Complex(a, b) => Ok(Value::Complex(match op {
                                                             Add => a + &b,
                                                             Sub => a - &b,
                                                             Mul => a * &b,
                                                             Div => a / &b,
                                                             Mod => complex_remainder(&a, &b)?,
                                                             _ => unreachable!(),
                                                         })),
        }
    }
}

/// Remainder of two complex values that lie on the real axis.
fn complex_remainder(a: &Complex, b: &Complex) -> EvalResult<Complex> {
    if !a.imag().is_zero() || !b.imag().is_zero() {
        return Err(ParseErrorKind::InvalidOperand.into());
    }
    let remainder = a.real().clone() % b.real();
    Ok(Complex::with_val(FLOAT_PRECISION, (remainder, 0)))
}
