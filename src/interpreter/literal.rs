use rug::{Complex, Float, Integer};

use crate::{
    error::ParseErrorKind,
    interpreter::{
        lexer::LexError,
        options::{Config, NumberKind, Radix},
        value::core::{FLOAT_PRECISION, Value},
    },
};

/// The parts of a numeric literal, as views into the source text.
///
/// ```text
/// literal  := [ "0" radix-code [ type-code ] ] mantissa [ exponent ] [ "i" ]
/// mantissa := digits [ "." digits? ] | "." digits
/// exponent := ("e" | "E") [+-] decimal-digits     radix 10
///           | ("p" | "P") [+-] decimal-digits     radix 2, 8, 16
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'src> {
    pub radix:     Radix,
    /// The type code after the radix prefix, if any.
    pub kind:      Option<NumberKind>,
    pub integer:   &'src str,
    pub fraction:  Option<&'src str>,
    /// Signed decimal exponent text, without its marker.
    pub exponent:  Option<&'src str>,
    pub imaginary: bool,
    /// Length in bytes of the whole literal.
    pub length:    usize,
}

/// Returns the length of the literal at the start of `text`.
///
/// # Errors
/// `LexError::MalformedNumber` when the mantissa has no digit valid in the
/// literal's radix.
pub fn scan(text: &str, default_radix: Radix) -> Result<usize, LexError> {
    split(text, default_radix).map(|literal| literal.length)
}

/// Splits the literal at the start of `text` into its parts.
///
/// Scanning stops at the first character that cannot continue the literal.
/// An exponent marker is only taken when digits follow it.
///
/// # Errors
/// `LexError::MalformedNumber` when the mantissa has no digit valid in the
/// literal's radix.
///
/// # Example
/// ```
/// use radixcalc::interpreter::{literal::split, options::Radix};
///
/// let literal = split("0x1f.8p-2i+3", Radix::Decimal).unwrap();
/// assert_eq!(literal.radix, Radix::Hexadecimal);
/// assert_eq!(literal.integer, "1f");
/// assert_eq!(literal.fraction, Some("8"));
/// assert_eq!(literal.exponent, Some("-2"));
/// assert!(literal.imaginary);
/// assert_eq!(literal.length, 10);
/// ```
pub fn split(text: &str, default_radix: Radix) -> Result<Literal<'_>, LexError> {
    let bytes = text.as_bytes();
    let mut radix = default_radix;
    let mut kind = None;
    let mut pos = 0;

    if bytes.first() == Some(&b'0')
       && let Some(prefixed) = bytes.get(1).and_then(|&b| Radix::from_code(char::from(b)))
    {
        radix = prefixed;
        pos = 2;
        if let Some(code) = bytes.get(2).and_then(|&b| NumberKind::from_code(char::from(b))) {
            kind = Some(code);
            pos = 3;
        }
    }

    let count_digits = |from: usize, radix: Radix| {
        bytes[from..].iter()
                     .take_while(|&&b| radix.digit_value(char::from(b)).is_some())
                     .count()
    };

    let integer_len = count_digits(pos, radix);
    let integer = &text[pos..pos + integer_len];
    pos += integer_len;

    let mut fraction = None;
    if bytes.get(pos) == Some(&b'.') {
        let fraction_len = count_digits(pos + 1, radix);
        fraction = Some(&text[pos + 1..pos + 1 + fraction_len]);
        pos += 1 + fraction_len;
    }

    if integer.is_empty() && fraction.is_none_or(str::is_empty) {
        return Err(LexError::MalformedNumber);
    }

    let markers: &[u8] = if radix == Radix::Decimal { b"eE" } else { b"pP" };
    let mut exponent = None;
    if bytes.get(pos).is_some_and(|b| markers.contains(b)) {
        let mut digits_start = pos + 1;
        if matches!(bytes.get(digits_start), Some(b'+' | b'-')) {
            digits_start += 1;
        }
        let exponent_len = count_digits(digits_start, Radix::Decimal);
        if exponent_len > 0 {
            exponent = Some(&text[pos + 1..digits_start + exponent_len]);
            pos = digits_start + exponent_len;
        }
    }

    let imaginary = bytes.get(pos) == Some(&b'i');
    if imaginary {
        pos += 1;
    }

    Ok(Literal { radix,
                 kind,
                 integer,
                 fraction,
                 exponent,
                 imaginary,
                 length: pos })
}

impl Literal<'_> {
    /// Converts the literal to a value under `config`.
    ///
    /// An imaginary suffix makes a complex value; a fraction or exponent makes
    /// a real (complex under the complex kind); otherwise the type code or the
    /// configured default kind decides. Integers wider than the word wrap.
    /// Exponents beyond the range of `i64` saturate, so the value underflows to
    /// zero or overflows to infinity.
    ///
    /// # Errors
    /// `ParseErrorKind::MalformedNumber` if the digits cannot be converted.
    pub fn to_value(&self, config: &Config) -> Result<Value, ParseErrorKind> {
        let kind = self.kind.unwrap_or(config.default_number_kind);
        let is_real = self.fraction.is_some() || self.exponent.is_some();

        if !self.imaginary && !is_real {
            let word = config.int_word_size;
            match kind {
                NumberKind::Signed => {
                    return Ok(Value::Int(word.wrap_signed(self.integer_value()?.to_i128_wrapping())));
                },
                NumberKind::Unsigned => {
                    return Ok(Value::UInt(word.wrap_unsigned(self.integer_value()?.to_u128_wrapping())));
                },
                NumberKind::Complex => {},
            }
        }

        let number = self.float_value()?;
        Ok(if self.imaginary {
               Value::Complex(Complex::with_val(FLOAT_PRECISION, (0, number)))
           } else if kind == NumberKind::Complex {
               Value::Complex(Complex::with_val(FLOAT_PRECISION, (number, 0)))
           } else {
               Value::Real(number)
           })
    }

    fn integer_value(&self) -> Result<Integer, ParseErrorKind> {
        Integer::from_str_radix(self.integer, radix_i32(self.radix)).map_err(|_| ParseErrorKind::MalformedNumber)
    }

    fn float_value(&self) -> Result<Float, ParseErrorKind> {
        let fraction = self.fraction.unwrap_or("");
        let exponent: i64 = match self.exponent {
            Some(text) => text.parse().unwrap_or(if text.starts_with('-') { i64::MIN } else { i64::MAX }),
            None => 0,
        };
        let fraction_len = i64::try_from(fraction.len()).map_err(|_| ParseErrorKind::MalformedNumber)?;
        let digits = format!("{}{fraction}", self.integer);

        match self.radix.bits_per_digit() {
            None => {
                let parsed = Float::parse(format!("{digits}e{}", exponent.saturating_sub(fraction_len)))
                                 .map_err(|_| ParseErrorKind::MalformedNumber)?;
                Ok(Float::with_val(FLOAT_PRECISION, parsed))
            },
            Some(bits) => {
                let mantissa = Integer::from_str_radix(&digits, radix_i32(self.radix))
                                   .map_err(|_| ParseErrorKind::MalformedNumber)?;
                let scale = exponent.saturating_sub(fraction_len.saturating_mul(i64::from(bits)));
                let shift = i32::try_from(scale).unwrap_or(if scale < 0 { i32::MIN } else { i32::MAX });
                Ok(Float::with_val(FLOAT_PRECISION, mantissa) << shift)
            },
        }
    }
}

const fn radix_i32(radix: Radix) -> i32 {
    match radix {
        Radix::Binary => 2,
        Radix::Octal => 8,
        Radix::Decimal => 10,
        Radix::Hexadecimal => 16,
    }
}
