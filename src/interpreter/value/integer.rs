use crate::interpreter::options::IntWordSize;

impl IntWordSize {
    /// Wraps a signed value to the word size by sign-extending its low bits.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::options::IntWordSize;
    ///
    /// assert_eq!(IntWordSize::Bits8.wrap_signed(128), -128);
    /// assert_eq!(IntWordSize::Bits8.wrap_signed(-129), 127);
    /// assert_eq!(IntWordSize::Bits128.wrap_signed(-5), -5);
    /// ```
    #[must_use]
    pub const fn wrap_signed(self, value: i128) -> i128 {
        let unused = 128 - self.bits();
        (value << unused) >> unused
    }

    /// Wraps an unsigned value to the word size, modulo `2^bits`.
    #[must_use]
    pub const fn wrap_unsigned(self, value: u128) -> u128 {
        let unused = 128 - self.bits();
        (value << unused) >> unused
    }

    /// Shifts a signed value; positive `amount` shifts left, negative right.
    ///
    /// Left shifts wrap. Shifting by the word size or more gives `0`, or `-1`
    /// when a negative value is shifted right.
    #[must_use]
    pub fn shift_signed(self, value: i128, amount: i128) -> i128 {
        let bits = u128::from(self.bits());
        let distance = amount.unsigned_abs();
        match u32::try_from(distance) {
            Ok(distance) if u128::from(distance) < bits => {
                if amount >= 0 {
                    self.wrap_signed(value << distance)
                } else {
                    value >> distance
                }
            },
            _ if amount < 0 && value < 0 => -1,
            _ => 0,
        }
    }

    /// Shifts an unsigned value; `0` once the distance reaches the word size.
    #[must_use]
    pub fn shift_unsigned(self, value: u128, distance: u128, left: bool) -> u128 {
        match u32::try_from(distance) {
            Ok(distance) if distance < self.bits() => {
                if left {
                    self.wrap_unsigned(value << distance)
                } else {
                    value >> distance
                }
            },
            _ => 0,
        }
    }
}

/// Raises `base` to `exponent` modulo `2^128` by repeated squaring.
///
/// The result is correct modulo any smaller power of two as well, so callers
/// wrap it to their word size afterwards. Two's complement operands can be
/// passed through their bit patterns.
#[must_use]
pub const fn wrapping_pow(mut base: u128, mut exponent: u128) -> u128 {
    let mut result: u128 = 1;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exponent >>= 1;
    }
    result
}
