use std::fmt::{self, Formatter, Write};

use rug::Float;

use crate::interpreter::output::core::{Outputter, digit};

/// Lowest exponent, in digits, still written in fixed notation.
const FIXED_MIN_DIGIT_EXPONENT: i64 = -4;

impl Outputter<'_> {
    /// Writes an unsigned integer in a power-of-two radix.
    ///
    /// Digits are grouped from the right, in threes for octal and in fours
    /// otherwise, with a space between groups.
    pub(super) fn fmt_radix_pow2_uint(f: &mut Formatter<'_>,
                                      mut value: u128,
                                      bits: u32)
                                      -> fmt::Result {
        let group = if bits == 3 { 3 } else { 4 };
        let mask = (1u128 << bits) - 1;
        let mut reversed = Vec::with_capacity(128);
        loop {
            reversed.push(digit((value & mask) as u32));
            value >>= bits;
            if value == 0 {
                break;
            }
        }

        for (index, &c) in reversed.iter().rev().enumerate() {
            if index > 0 && (reversed.len() - index) % group == 0 {
                f.write_char(' ')?;
            }
            f.write_char(c)?;
        }
        Ok(())
    }

    /// Writes a real number in a power-of-two radix.
    ///
    /// The significand is written in digits of `bits` bits followed by a
    /// binary exponent, as in `1.8p+1`. Normalized output always has a
    /// leading digit of `1`. Unnormalized output aligns the exponent to a
    /// multiple of `bits`, so the leading digit takes up to `bits` bits, and
    /// values whose exponent lies between `-4` digits and the precision are
    /// written in fixed notation without an exponent.
    ///
    /// The precision counts digits and defaults to the number needed for the
    /// whole significand. Shorter precisions round half up on the dropped
    /// bits. Trailing zero digits are never written.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::{
    ///     options::{Config, Radix},
    ///     output::core::Outputter,
    ///     value::core::{FLOAT_PRECISION, Value},
    /// };
    /// use rug::Float;
    ///
    /// let aligned = Config { output_radix: Radix::Hexadecimal,
    ///                        ..Config::default() };
    /// let normalized = Config { output_fp_normalized: true,
    ///                           ..aligned };
    /// let three = Value::Real(Float::with_val(FLOAT_PRECISION, 3));
    ///
    /// assert_eq!(Outputter::new(&three, &aligned).to_string(), "3");
    /// assert_eq!(Outputter::new(&three, &normalized).to_string(), "1.8p+1");
    /// ```
    pub(super) fn fmt_radix_pow2_float(&self,
                                       f: &mut Formatter<'_>,
                                       x: &Float,
                                       bits: u32)
                                       -> fmt::Result {
        if x.is_sign_negative() {
            f.write_char('-')?;
        }
        if x.is_infinite() {
            return f.write_str("inf");
        }
        if x.is_nan() {
            return f.write_str("nan");
        }
        let Some((significand, exp)) = x.to_integer_exp().filter(|_| !x.is_zero()) else {
            return f.write_char('0');
        };

        // The significand as an integer of exactly `significand_bits` bits,
        // and the exponent of its leading bit.
        let significand_bits = x.prec();
        let mut significand = significand.abs();
        let mut exponent = i64::from(exp) + i64::from(significand.significant_bits()) - 1;
        let pad = significand_bits.saturating_sub(significand.significant_bits());
        significand <<= pad;

        let precision = match self.precision {
            0 => significand_bits.div_ceil(bits),
            p => p,
        };
        let bits_i = i64::from(bits);

        if u64::from(precision) * u64::from(bits) < u64::from(significand_bits) {
            let lead_bits = if self.normalized {
                1
            } else {
                u32::try_from(exponent.rem_euclid(bits_i)).unwrap_or_default() + 1
            };
            let kept = lead_bits + (precision - 1) * bits;
            let dropped = significand_bits - kept;
            let mut rounded = significand >> (dropped - 1);
            rounded += 1u32;
            rounded >>= 1u32;
            if rounded.significant_bits() > kept {
                exponent += 1;
            }
            let pad = significand_bits - rounded.significant_bits();
            significand = rounded << pad;
        }

        // Bits below the leading digit.
        let mut fraction_bits = significand_bits - 1;
        if !self.normalized {
            let alignment = u32::try_from(exponent.rem_euclid(bits_i)).unwrap_or_default();
            fraction_bits -= alignment;
            exponent -= i64::from(alignment);
        }

        // Fraction digits, least significant first, trailing zeros skipped.
        let digit_mask = (1u32 << bits) - 1;
        let mut reversed = Vec::new();
        let partial = fraction_bits % bits;
        if partial != 0 {
            let pad = bits - partial;
            let value = (significand.to_u32_wrapping() & (digit_mask >> pad)) << pad;
            if value != 0 {
                reversed.push(digit(value));
            }
            significand >>= partial;
        }
        for _ in 0..fraction_bits / bits {
            let value = significand.to_u32_wrapping() & digit_mask;
            if value != 0 || !reversed.is_empty() {
                reversed.push(digit(value));
            }
            significand >>= bits;
        }
        let leading = digit(significand.to_u32_wrapping());

        let fixed_max = i64::from(precision) * bits_i;
        if !self.normalized
           && exponent >= FIXED_MIN_DIGIT_EXPONENT * bits_i
           && exponent < fixed_max
        {
            Self::fmt_fixed(f, leading, &reversed, exponent, bits_i)
        } else {
            f.write_char(leading)?;
            if !reversed.is_empty() {
                f.write_char('.')?;
                reversed.iter().rev().try_for_each(|&c| f.write_char(c))?;
            }
            let sign = if exponent >= 0 { "+" } else { "" };
            write!(f, "p{sign}{exponent}")
        }
    }

    /// Writes an aligned significand in fixed notation.
    ///
    /// `exponent` is the binary exponent of the leading digit's lowest bit and
    /// a multiple of `bits`.
    fn fmt_fixed(f: &mut Formatter<'_>,
                 leading: char,
                 reversed: &[char],
                 exponent: i64,
                 bits: i64)
                 -> fmt::Result {
        let mut position = exponent;
        if position < 0 {
            f.write_str("0.")?;
            position += bits;
            while position < 0 {
                f.write_char('0')?;
                position += bits;
            }
        }
        f.write_char(leading)?;
        for &c in reversed.iter().rev() {
            if position == 0 && exponent >= 0 {
                f.write_char('.')?;
            }
            f.write_char(c)?;
            position -= bits;
        }
        while position > 0 {
            f.write_char('0')?;
            position -= bits;
        }
        Ok(())
    }
}
