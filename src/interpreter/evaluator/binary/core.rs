use crate::{
    interpreter::{
        evaluator::core::{Context, EvalResult},
        options::IntWordSize,
        value::core::Value,
    },
    operator::BinaryOperator,
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// This function routes the operation to specialized handlers depending on
    /// the operator. Arithmetic operators and remainder go to
    /// `eval_scalar_op`, power to `eval_pow`, shifts to `eval_shift` and the
    /// bitwise operators to `eval_bitwise`. Each handler promotes the operands
    /// to their common variant before computing.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `word`: Word size integer results are wrapped to.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use radixcalc::{
    ///     interpreter::{evaluator::core::Context, options::IntWordSize, value::core::Value},
    ///     operator::BinaryOperator,
    /// };
    ///
    /// let word = IntWordSize::Bits8;
    /// let sum = Context::eval_binary(BinaryOperator::Add, &Value::Int(127), &Value::Int(1), word);
    /// assert_eq!(sum.unwrap(), Value::Int(-128));
    ///
    /// let mixed = Context::eval_binary(BinaryOperator::Sub, &Value::Int(1), &Value::UInt(2), word);
    /// assert_eq!(mixed.unwrap(), Value::UInt(255));
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       word: IntWordSize)
                       -> EvalResult<Value> {
        use BinaryOperator::{
            Add, BitAnd, BitOr, BitXor, Div, Mod, Mul, Pow, ShiftLeft, ShiftRight, Sub,
        };

        match op {
            Add | Sub | Mul | Div | Mod => Self::eval_scalar_op(op, left, right, word),
            Pow => Self::eval_pow(left, right, word),
            ShiftLeft | ShiftRight => Self::eval_shift(op, left, right, word),
            BitAnd | BitOr | BitXor => Self::eval_bitwise(op, left, right, word),
        }
    }
}
