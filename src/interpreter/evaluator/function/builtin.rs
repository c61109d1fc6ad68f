use rug::{Complex, Float};

use crate::interpreter::value::core::{FLOAT_PRECISION, Value};

/// Applies an elementary function through the complex domain.
///
/// The generated functions evaluate their argument as a complex number.
/// - A complex argument always yields a complex result.
/// - Any other argument yields a real result when the imaginary part of the
///   complex result is zero, and a complex result otherwise. This is how
///   `sqrt(-4)` becomes `2i` while `sqrt(4)` stays real.
///
/// # Parameters
/// - `arg`: The argument.
///
/// # Returns
/// The computed value.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{evaluator::function::builtin::sqrt, value::core::Value};
///
/// assert_eq!(sqrt(&Value::Int(9)).to_float(), 3);
/// assert!(matches!(sqrt(&Value::Int(-9)), Value::Complex(_)));
/// ```
macro_rules! complex_builtin {
    ($fname:ident) => {
        #[must_use]
        pub fn $fname(arg: &Value) -> Value {
            narrow(arg, arg.to_complex().$fname())
        }
    };
}

complex_builtin!(sqrt);
complex_builtin!(exp);
complex_builtin!(ln);
complex_builtin!(log10);
complex_builtin!(sin);
complex_builtin!(cos);
complex_builtin!(tan);
complex_builtin!(asin);
complex_builtin!(acos);
complex_builtin!(atan);
complex_builtin!(sinh);
complex_builtin!(cosh);
complex_builtin!(tanh);

fn narrow(arg: &Value, result: Complex) -> Value {
    if matches!(arg, Value::Complex(_)) || !result.imag().is_zero() {
        Value::Complex(result)
    } else {
        Value::Real(result.into_real_imag().0)
    }
}

/// Magnitude of a value.
#[must_use]
pub fn abs(value: &Value) -> Value {
    Value::Real(Float::with_val(FLOAT_PRECISION, value.to_complex().abs_ref()))
}

/// Phase angle of a value, in `(-pi, pi]`.
#[must_use]
pub fn arg(value: &Value) -> Value {
    Value::Real(Float::with_val(FLOAT_PRECISION, value.to_complex().arg_ref()))
}

/// Squared magnitude of a value.
#[must_use]
pub fn norm(value: &Value) -> Value {
    Value::Real(Float::with_val(FLOAT_PRECISION, value.to_complex().norm_ref()))
}

/// Complex conjugate; always complex.
#[must_use]
pub fn conj(value: &Value) -> Value {
    Value::Complex(value.to_complex().conj())
}

#[must_use]
pub fn real(value: &Value) -> Value {
    Value::Real(value.to_float())
}

#[must_use]
pub fn imag(value: &Value) -> Value {
    match value {
        Value::Complex(c) => Value::Real(c.imag().clone()),
        _ => Value::Real(Float::with_val(FLOAT_PRECISION, 0)),
    }
}
