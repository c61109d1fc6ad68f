use std::fmt::{self, Display, Formatter, Write};

use rug::{Complex, Float};

use crate::interpreter::{
    options::{Config, Radix},
    value::core::Value,
};

/// Digit characters of every supported radix.
pub const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Returns the digit character for a value below 16.
pub(super) fn digit(value: u32) -> char {
    char::from(DIGITS[(value & 0xf) as usize])
}

/// Renders a value under an output configuration.
///
/// The `Display` implementation writes the rendering, so an `Outputter` can be
/// used directly with `format!` or `println!`.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{
///     options::{Config, Radix},
///     output::core::Outputter,
///     value::core::Value,
/// };
///
/// let config = Config { output_radix: Radix::Hexadecimal,
///                       ..Config::default() };
/// assert_eq!(Outputter::new(&Value::UInt(0xdead_beef), &config).to_string(), "dead beef");
/// assert_eq!(Outputter::new(&Value::Int(-255), &config).to_string(), "-ff");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Outputter<'a> {
    pub(super) value:      &'a Value,
    pub(super) radix:      Radix,
    /// Output digits; `0` selects the default of the value's type.
    pub(super) precision:  u32,
    pub(super) normalized: bool,
}

impl<'a> Outputter<'a> {
    #[must_use]
    pub const fn new(value: &'a Value, config: &Config) -> Self {
        Self { value,
               radix: config.output_radix,
               precision: config.precision,
               normalized: config.output_fp_normalized }
    }

    /// Writes a real number in the configured radix.
    pub(super) fn fmt_float(&self, f: &mut Formatter<'_>, x: &Float) -> fmt::Result {
        match self.radix.bits_per_digit() {
            Some(bits) => self.fmt_radix_pow2_float(f, x, bits),
            None => self.fmt_decimal_float(f, x),
        }
    }

    /// Writes an unsigned magnitude in the configured radix.
    fn fmt_uint(&self, f: &mut Formatter<'_>, value: u128) -> fmt::Result {
        match self.radix.bits_per_digit() {
            Some(bits) => Self::fmt_radix_pow2_uint(f, value, bits),
            None => Self::fmt_decimal_uint(f, value),
        }
    }

    /// Writes a complex number as `a`, `bi`, `a+bi` or `a-bi`.
    ///
    /// A zero part is left out unless both are zero, and an imaginary part of
    /// exactly one is written as a bare `i`.
    fn fmt_complex(&self, f: &mut Formatter<'_>, z: &Complex) -> fmt::Result {
        let (re, im) = (z.real(), z.imag());
        if !re.is_zero() || im.is_zero() {
            self.fmt_float(f, re)?;
        }
        if im.is_zero() {
            return Ok(());
        }
        if !re.is_zero() && !im.is_sign_negative() {
            f.write_char('+')?;
        }
        if *im == -1 {
            f.write_char('-')?;
        } else if *im != 1 {
            self.fmt_float(f, im)?;
        }
        f.write_char('i')
    }
}

impl Display for Outputter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.value {
            Value::Int(n) => {
                if *n < 0 {
                    f.write_char('-')?;
                }
                self.fmt_uint(f, n.unsigned_abs())
            },
            Value::UInt(n) => self.fmt_uint(f, *n),
            Value::Real(x) => self.fmt_float(f, x),
            Value::Complex(z) => self.fmt_complex(f, z),
        }
    }
}

/// Renders with `Config::default()`, ignoring any session configuration.
///
/// Sessions render through [`Context::render`](crate::interpreter::evaluator::core::Context::render)
/// so that the output radix, precision and float layout apply.
impl Display for Value {
    /// Renders the value in decimal at the default precision.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Outputter::new(self, &Config::default()))
    }
}
