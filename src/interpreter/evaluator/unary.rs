use rug::{Complex, Float, ops::Pow};

use crate::{
    error::ParseErrorKind,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        options::IntWordSize,
        value::core::{FLOAT_PRECISION, Value},
    },
    operator::UnaryOperator,
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Supported operators:
    /// - `Negate`: negation for every variant. Integers wrap, so negating the
    ///   most negative signed value gives it back and negating an unsigned
    ///   value gives its two's complement.
    /// - `BitNot`: bitwise complement of an integer, within the word size.
    /// - `Factorial(k)`: the product `n * (n - k) * (n - 2k) * ...` down to a
    ///   positive term, with `0` giving `1`. The operand must be a
    ///   non-negative whole number. The result keeps the operand's variant and
    ///   integer results wrap.
    ///
    /// # Parameters
    /// - `op`: Unary operator.
    /// - `value`: Input value.
    /// - `word`: Word size integer results are wrapped to.
    ///
    /// # Returns
    /// The computed `Value` wrapped in `EvalResult`.
    ///
    /// # Example
    /// ```
    /// use radixcalc::{
    ///     interpreter::{evaluator::core::Context, options::IntWordSize, value::core::Value},
    ///     operator::UnaryOperator,
    /// };
    ///
    /// let word = IntWordSize::Bits128;
    ///
    /// // Negation
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Int(5), word).unwrap();
    /// assert_eq!(v, Value::Int(-5));
    ///
    /// // Bitwise complement
    /// let v = Context::eval_unary(UnaryOperator::BitNot, &Value::UInt(0), IntWordSize::Bits8).unwrap();
    /// assert_eq!(v, Value::UInt(255));
    ///
    /// // Double factorial: 7!! = 7 * 5 * 3 * 1
    /// let v = Context::eval_unary(UnaryOperator::Factorial(2), &Value::Int(7), word).unwrap();
    /// assert_eq!(v, Value::Int(105));
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, word: IntWordSize) -> EvalResult<Value> {
        match op {
            UnaryOperator::Negate => Ok(match value {
                                            Value::Int(n) => Value::Int(word.wrap_signed(n.wrapping_neg())),
                                            Value::UInt(n) => Value::UInt(word.wrap_unsigned(n.wrapping_neg())),
                                            Value::Real(r) => Value::Real(-r.clone()),
                                            Value::Complex(c) => Value::Complex(-c.clone()),
                                        }),
            UnaryOperator::BitNot => match value {
                Value::Int(n) => Ok(Value::Int(!n)),
                Value::UInt(n) => Ok(Value::UInt(word.wrap_unsigned(!n))),
                Value::Real(_) | Value::Complex(_) => {
                    Err(ParseErrorKind::IntegerOperandRequired.into())
                },
            },
            UnaryOperator::Factorial(step) => multi_factorial(value, step, word),
        }
    }
}

fn multi_factorial(value: &Value, step: u32, word: IntWordSize) -> EvalResult<Value> {
    let n = value.whole_number()
                 .filter(|n| *n >= 0)
                 .and_then(|n| n.to_u32())
                 .ok_or(ParseErrorKind::InvalidFactorialOperand)?;

    Ok(match value {
           Value::Int(_) => Value::Int(word.wrap_signed(wrapping_factorial(n, step, word).cast_signed())),
           Value::UInt(_) => Value::UInt(wrapping_factorial(n, step, word)),
           Value::Real(_) => Value::Real(float_factorial(n, step)),
           Value::Complex(_) => Value::Complex(Complex::with_val(FLOAT_PRECISION, (float_factorial(n, step), 0))),
       })
}

/// The multifactorial modulo `2^bits`, stopping once the product is zero.
fn wrapping_factorial(n: u32, step: u32, word: IntWordSize) -> u128 {
    let mut product = 1u128;
    let mut term = n;
    while term > 0 && product != 0 {
        product = word.wrap_unsigned(product.wrapping_mul(u128::from(term)));
        term = term.saturating_sub(step);
    }
    product
}

/// Products with more terms than this go through the gamma function.
const FLOAT_FACTORIAL_TERMS: u32 = 1 << 16;

/// The multifactorial rounded to `FLOAT_PRECISION`.
///
/// With `m` terms starting at `r = n - (m - 1) * k` the product equals
/// `k^m * Γ(r/k + m) / Γ(r/k)`; long products use that form.
fn float_factorial(n: u32, step: u32) -> Float {
    if n == 0 {
        return Float::with_val(FLOAT_PRECISION, 1);
    }
    if step == 1 {
        let x = Float::with_val(FLOAT_PRECISION, n) + 1u32;
        return x.gamma();
    }

    let first = (n - 1) % step + 1;
    let terms = (n - first) / step + 1;
    if terms <= FLOAT_FACTORIAL_TERMS {
        let mut product = Float::with_val(FLOAT_PRECISION, 1);
        let mut term = n;
        while term > 0 {
            product *= term;
            term = term.saturating_sub(step);
        }
        return product;
    }

    let offset = Float::with_val(FLOAT_PRECISION, first) / step;
    let upper = Float::with_val(FLOAT_PRECISION, &offset + terms).gamma();
    let scale = Float::with_val(FLOAT_PRECISION, step).pow(terms);
    upper / offset.gamma() * scale
}
