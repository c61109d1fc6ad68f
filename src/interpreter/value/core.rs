use rug::{Complex, Float, Integer};

use crate::interpreter::options::IntWordSize;

/// Significand bits of real values and of each part of complex values.
pub const FLOAT_PRECISION: u32 = 334;
/// Decimal digits a real value is guaranteed to hold.
pub const FLOAT_DIGITS10: u32 = 100;
/// Bit length from which `Value::whole_number` saturates real magnitudes.
pub const WHOLE_NUMBER_BITS: i32 = 128;

/// A numeric value.
///
/// Integers live in 128-bit containers holding a value already wrapped to the
/// word size in force when it was produced: sign-extended for `Int`, masked
/// for `UInt`.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A two's complement integer.
    Int(i128),
    /// An unsigned integer.
    UInt(u128),
    /// An arbitrary-precision binary floating-point number.
    Real(Float),
    /// A pair of real values.
    Complex(Complex),
}

/// Promotion order of the value variants, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Rank {
    Int,
    UInt,
    Real,
    Complex,
}

/// Two operands converted to their common variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Promoted {
    Int(i128, i128),
    UInt(u128, u128),
    Real(Float, Float),
    Complex(Complex, Complex),
}

impl From<Complex> for Value {
    fn from(c: Complex) -> Self {
        Self::Complex(c)
    }
}

impl From<Float> for Value {
    fn from(f: Float) -> Self {
        Self::Real(f)
    }
}

impl Value {
    #[must_use]
    pub const fn rank(&self) -> Rank {
        match self {
            Self::Int(_) => Rank::Int,
            Self::UInt(_) => Rank::UInt,
            Self::Real(_) => Rank::Real,
            Self::Complex(_) => Rank::Complex,
        }
    }

    /// Converts the value to the variant of `rank`.
    ///
    /// Only upward conversions are meaningful; asking for a lower rank
    /// returns the value unchanged. Signed to unsigned reinterprets the two's
    /// complement bits; integer to real is exact; real to complex adds a zero
    /// imaginary part.
    #[must_use]
    pub fn promote_to(&self, rank: Rank, word: IntWordSize) -> Self {
        match (self, rank) {
            (Self::Int(v), Rank::UInt) => Self::UInt(word.wrap_unsigned(v.cast_unsigned())),
            (Self::Int(_) | Self::UInt(_), Rank::Real) => Self::Real(self.to_float()),
            (Self::Int(_) | Self::UInt(_) | Self::Real(_), Rank::Complex) => {
                Self::Complex(self.to_complex())
            },
            _ => self.clone(),
        }
    }

    /// Converts both operands to the higher of their two ranks.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::{
    ///     options::IntWordSize,
    ///     value::core::{Promoted, Value},
    /// };
    ///
    /// let promoted = Value::Int(-1).promote(&Value::UInt(1), IntWordSize::Bits8);
    /// assert_eq!(promoted, Promoted::UInt(255, 1));
    /// ```
    #[must_use]
    pub fn promote(&self, other: &Self, word: IntWordSize) -> Promoted {
        let rank = self.rank().max(other.rank());
        match (self.promote_to(rank, word), other.promote_to(rank, word)) {
            (Self::Int(a), Self::Int(b)) => Promoted::Int(a, b),
            (Self::UInt(a), Self::UInt(b)) => Promoted::UInt(a, b),
            (Self::Real(a), Self::Real(b)) => Promoted::Real(a, b),
            (a, b) => Promoted::Complex(a.to_complex(), b.to_complex()),
        }
    }

    /// Compares two values after promoting them to a common variant.
    #[must_use]
    pub fn numeric_eq(&self, other: &Self, word: IntWordSize) -> bool {
        match self.promote(other, word) {
            Promoted::Int(a, b) => a == b,
            Promoted::UInt(a, b) => a == b,
            Promoted::Real(a, b) => a == b,
            Promoted::Complex(a, b) => a == b,
        }
    }

    /// Returns `true` for an exact zero (of either sign).
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Int(v) => *v == 0,
            Self::UInt(v) => *v == 0,
            Self::Real(f) => f.is_zero(),
            Self::Complex(c) => c.real().is_zero() && c.imag().is_zero(),
        }
    }

    /// Returns the value as an integer if it is a whole number.
    ///
    /// Complex values qualify when their imaginary part is zero. Real whole
    /// numbers of `2^128` or more in magnitude come back as `±2^128`, keeping
    /// their sign.
    ///
    /// # Example
    /// ```
    /// use radixcalc::interpreter::value::core::{FLOAT_PRECISION, Value};
    /// use rug::{Float, Integer};
    ///
    /// let huge = Value::Real(Float::with_val(FLOAT_PRECISION, -1e300));
    /// assert_eq!(huge.whole_number(), Some(-(Integer::from(1) << 128u32)));
    /// assert_eq!(Value::Real(Float::with_val(FLOAT_PRECISION, 0.5)).whole_number(), None);
    /// ```
    #[must_use]
    pub fn whole_number(&self) -> Option<Integer> {
        match self {
            Self::Int(v) => Some(Integer::from(*v)),
            Self::UInt(v) => Some(Integer::from(*v)),
            Self::Real(f) => whole_float(f),
            Self::Complex(c) => c.imag().is_zero().then(|| whole_float(c.real())).flatten(),
        }
    }

    /// Returns the real part of the value.
    #[must_use]
    pub fn to_float(&self) -> Float {
        match self {
            Self::Int(v) => Float::with_val(FLOAT_PRECISION, *v),
            Self::UInt(v) => Float::with_val(FLOAT_PRECISION, *v),
            Self::Real(f) => f.clone(),
            Self::Complex(c) => c.real().clone(),
        }
    }

    #[must_use]
    pub fn to_complex(&self) -> Complex {
        match self {
            Self::Complex(c) => c.clone(),
            _ => Complex::with_val(FLOAT_PRECISION, (self.to_float(), 0)),
        }
    }

    /// Rewraps an integer to `word`; other variants are returned unchanged.
    ///
    /// Needed when a value produced under one word size is read after the
    /// word size changed.
    #[must_use]
    pub fn rewrap(self, word: IntWordSize) -> Self {
        match self {
            Self::Int(v) => Self::Int(word.wrap_signed(v)),
            Self::UInt(v) => Self::UInt(word.wrap_unsigned(v)),
            other => other,
        }
    }
}

fn whole_float(f: &Float) -> Option<Integer> {
    if !f.is_integer() {
        return None;
    }
    if f.get_exp().is_some_and(|exp| exp > WHOLE_NUMBER_BITS) {
        let bound = Integer::from(1) << WHOLE_NUMBER_BITS;
        return Some(if f.is_sign_negative() { -bound } else { bound });
    }
    f.to_integer()
}
