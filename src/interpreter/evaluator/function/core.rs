use log::trace;

use crate::{
    error::ParseErrorKind,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::builtin,
        },
        value::{
            complex::{euler, imaginary_unit, pi},
            core::Value,
        },
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives its single evaluated argument.
pub type BuiltinFn = fn(&Value) -> Value;

/// Names of the builtin constants.
pub const BUILTIN_CONSTANTS: &[&str] = &["pi", "e", "i"];

/// Defines builtin functions by generating a lookup table and a name list.
///
/// Each entry provides a string name and a function pointer implementing the
/// builtin. The macro produces:
/// - `BUILTIN_TABLE` (static table for lookup),
/// - `BUILTIN_FUNCTIONS` (public list of builtin names).
macro_rules! builtin_functions {
    ($($name:literal => $func:expr),* $(,)?) => {
        static BUILTIN_TABLE: &[(&str, BuiltinFn)] = &[
            $(($name, $func),)*
        ];
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sqrt"  => builtin::sqrt,
    "exp"   => builtin::exp,
    "ln"    => builtin::ln,
    "log10" => builtin::log10,
    "sin"   => builtin::sin,
    "cos"   => builtin::cos,
    "tan"   => builtin::tan,
    "asin"  => builtin::asin,
    "acos"  => builtin::acos,
    "atan"  => builtin::atan,
    "sinh"  => builtin::sinh,
    "cosh"  => builtin::cosh,
    "tanh"  => builtin::tanh,
    "abs"   => builtin::abs,
    "arg"   => builtin::arg,
    "norm"  => builtin::norm,
    "conj"  => builtin::conj,
    "real"  => builtin::real,
    "imag"  => builtin::imag,
}

/// Returns the handler of a builtin function.
#[must_use]
pub fn builtin_function(name: &str) -> Option<BuiltinFn> {
    BUILTIN_TABLE.iter()
                 .find(|(builtin, _)| *builtin == name)
                 .map(|(_, func)| *func)
}

/// Returns the value of a builtin constant.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{evaluator::function::builtin_constant, value::core::Value};
///
/// assert!(matches!(builtin_constant("i"), Some(Value::Complex(_))));
/// assert!(matches!(builtin_constant("pi"), Some(Value::Real(_))));
/// assert_eq!(builtin_constant("tau"), None);
/// ```
#[must_use]
pub fn builtin_constant(name: &str) -> Option<Value> {
    match name {
        "pi" => Some(Value::Real(pi())),
        "e" => Some(Value::Real(euler())),
        "i" => Some(Value::Complex(imaginary_unit())),
        _ => None,
    }
}

/// Checks whether an identifier names a builtin and cannot be assigned.
///
/// # Example
/// ```
/// use radixcalc::interpreter::evaluator::function::is_reserved_identifier;
///
/// assert!(is_reserved_identifier("sin"));
/// assert!(is_reserved_identifier("e"));
/// assert!(!is_reserved_identifier("x"));
/// ```
#[must_use]
pub fn is_reserved_identifier(name: &str) -> bool {
    BUILTIN_FUNCTIONS.contains(&name) || BUILTIN_CONSTANTS.contains(&name)
}

impl Context {
    /// Evaluates a builtin function call.
    ///
    /// # Parameters
    /// - `name`: Function name.
    /// - `arg`: The evaluated argument.
    ///
    /// # Returns
    /// The function result, or `UnknownIdentifier` if no builtin has that
    /// name.
    pub fn eval_function(name: &str, arg: &Value) -> EvalResult<Value> {
        let func = builtin_function(name).ok_or(ParseErrorKind::UnknownIdentifier)?;
        trace!("call {name}");
        Ok(func(arg))
    }
}
