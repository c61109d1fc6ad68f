use rug::Integer;

use crate::{
    error::ParseErrorKind,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        options::IntWordSize,
        value::core::{Promoted, Value},
    },
    operator::BinaryOperator,
};

impl Context {
    /// Evaluates `&`, `|` or `^|`.
    ///
    /// Both operands must be integers; mixed signedness is promoted to
    /// unsigned first.
    ///
    /// # Errors
    /// - `ParseErrorKind::IntegerOperandRequired` for real or complex operands.
    /// - `ParseErrorKind::InvalidOperand` for any other operator.
    pub fn eval_bitwise(op: BinaryOperator,
                        left: &Value,
                        right: &Value,
                        word: IntWordSize)
                        -> EvalResult<Value> {
        use BinaryOperator::{BitAnd, BitOr, BitXor};

        if !matches!(op, BitAnd | BitOr | BitXor) {
            return Err(ParseErrorKind::InvalidOperand.into());
        }
        match left.promote(right, word) {
            Promoted::Int(a, b) => Ok(Value::Int(match op {
                                                     BitAnd => a & b,
                                                     BitOr => a | b,
                                                     BitXor => a ^ b,
                                                     _ => unreachable!(),
                                                 })),
            Promoted::UInt(a, b) => Ok(Value::UInt(match op {
                                                       BitAnd => a & b,
                                                       BitOr => a | b,
                                                       BitXor => a ^ b,
                                                       _ => unreachable!(),
                                                   })),
            Promoted::Real(..) | Promoted::Complex(..) => {
                Err(ParseErrorKind::IntegerOperandRequired.into())
            },
        }
    }

    /// Evaluates `<<` or `>>`.
    ///
    /// The count must be a whole number. A negative count shifts the other
    /// way. Integer shifts wrap to the word size; a count reaching the word
    /// size clears the value, or leaves `-1` when a negative signed value is
    /// shifted right. Real and complex values are scaled by powers of two.
    /// Other operators are rejected as invalid operands.
    ///
    /// # Parameters
    /// - `op`: `ShiftLeft` or `ShiftRight`.
    /// - `value`: The value to shift.
    /// - `count`: The shift count.
    /// - `word`: Word size integer results are wrapped to.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the shifted value.
    ///
    /// # Example
    /// ```
    /// use radixcalc::{
    ///     interpreter::{evaluator::core::Context, options::IntWordSize, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let word = IntWordSize::Bits8;
    /// let left = Context::eval_shift(BinaryOperator::ShiftLeft, &Value::Int(1), &Value::Int(7), word);
    /// assert_eq!(left.unwrap(), Value::Int(-128));
    ///
    /// let right = Context::eval_shift(BinaryOperator::ShiftRight, &Value::Int(-1), &Value::Int(9), word);
    /// assert_eq!(right.unwrap(), Value::Int(-1));
    ///
    /// let back = Context::eval_shift(BinaryOperator::ShiftRight, &Value::Int(3), &Value::Int(-2), word);
    /// assert_eq!(back.unwrap(), Value::Int(12));
    /// ```
    pub fn eval_shift(op: BinaryOperator,
                      value: &Value,
                      count: &Value,
                      word: IntWordSize)
                      -> EvalResult<Value> {
        let left = match op {
            BinaryOperator::ShiftLeft => true,
            BinaryOperator::ShiftRight => false,
            _ => return Err(ParseErrorKind::InvalidOperand.into()),
        };
        let whole = count.whole_number()
                         .ok_or(ParseErrorKind::WholeNumberRequired)?;

        match value.promote(count, word) {
            Promoted::Int(v, c) => {
                let amount = if left { c } else { c.wrapping_neg() };
                Ok(Value::Int(word.shift_signed(v, amount)))
            },
            Promoted::UInt(v, c) => Ok(Value::UInt(word.shift_unsigned(v, c, left))),
            Promoted::Real(v, _) => {
                let amount = scale_exponent(&whole, left);
                Ok(Value::Real(v << amount))
            },
            Promoted::Complex(v, _) => {
                let amount = scale_exponent(&whole, left);
                Ok(Value::Complex(v << amount))
            },
        }
    }
}

/// Power of two a real or complex shift scales by, saturated to `i32`.
fn scale_exponent(count: &Integer, left: bool) -> i32 {
    let amount = count.to_i32()
                      .unwrap_or(if *count < 0 { i32::MIN } else { i32::MAX });
    if left { amount } else { amount.saturating_neg() }
}
