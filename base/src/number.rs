//! This module implements the decimal fixed-point number type used
//! by the calculator.  A [`FixedPoint`] holds a signed 64-bit integer
//! scaled by 10^6, so it represents six decimal places exactly.
//!
//! All arithmetic saturates.  Intermediate values are computed in
//! 128 bits and then clamped into the range of `i64`; nothing wraps.
//! The two extreme raw values are also the overflow markers which
//! are displayed as infinities.  [`FixedPoint::value`] gives a
//! tagged view of a number which makes that distinction explicit.

use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::ops::{Add, Div, Mul, Neg, Sub};

use serde::Serialize;

#[cfg(test)]
use test_strategy::Arbitrary;

mod power;

/// The number of decimal digits after the decimal point.
pub const DECIMAL_DIGITS: u32 = 6;

/// The factor by which the real value is multiplied to obtain the
/// raw representation (10 to the power [`DECIMAL_DIGITS`]).
pub const SCALE: i64 = 1_000_000;

const SCALE_WIDE: i128 = SCALE as i128;

/// Clamp a wide intermediate result into the range of `i64`.
pub(crate) fn saturate(wide: i128) -> i64 {
    if wide > i128::from(i64::MAX) {
        i64::MAX
    } else if wide < i128::from(i64::MIN) {
        i64::MIN
    } else {
        wide as i64
    }
}

/// A decimal fixed-point value; the real number it stands for is
/// `raw / SCALE`.
#[cfg_attr(test, derive(Arbitrary))]
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct FixedPoint {
    raw: i64,
}

/// A classification of a [`FixedPoint`] which separates the overflow
/// markers from ordinary values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Any value strictly between the two extremes.
    Finite(FixedPoint),
    /// The result of a positive overflow (or of dividing a positive
    /// value by zero).
    PositiveInfinity,
    /// The result of a negative overflow (or of dividing a
    /// non-positive value by zero).
    NegativeInfinity,
}

impl FixedPoint {
    /// The largest raw value; also the positive infinity marker.
    pub const MAX: FixedPoint = FixedPoint { raw: i64::MAX };
    /// The smallest raw value; also the negative infinity marker.
    pub const MIN: FixedPoint = FixedPoint { raw: i64::MIN };
    pub const ZERO: FixedPoint = FixedPoint { raw: 0 };
    pub const ONE: FixedPoint = FixedPoint { raw: SCALE };

    #[must_use]
    pub const fn from_raw(raw: i64) -> FixedPoint {
        FixedPoint { raw }
    }

    #[must_use]
    pub const fn raw(&self) -> i64 {
        self.raw
    }

    /// Converts a whole number, saturating if it is out of range.
    #[must_use]
    pub fn from_integer(n: i64) -> FixedPoint {
        FixedPoint {
            raw: saturate(i128::from(n) * SCALE_WIDE),
        }
    }

    /// Builds a value from a whole part and a fraction given in
    /// millionths.  The sign of the result is the sign of `whole`
    /// (or negative if `negative` is set), so `-0.5` can be written.
    #[must_use]
    pub fn from_parts(negative: bool, whole: u64, millionths: u32) -> FixedPoint {
        let magnitude = i128::from(whole) * SCALE_WIDE + i128::from(millionths);
        FixedPoint {
            raw: saturate(if negative { -magnitude } else { magnitude }),
        }
    }

    #[must_use]
    pub fn value(&self) -> Value {
        match self.raw {
            i64::MAX => Value::PositiveInfinity,
            i64::MIN => Value::NegativeInfinity,
            _ => Value::Finite(*self),
        }
    }

    #[must_use]
    pub const fn is_infinite(&self) -> bool {
        self.raw == i64::MAX || self.raw == i64::MIN
    }

    #[must_use]
    pub const fn is_negative(&self) -> bool {
        self.raw < 0
    }

    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.raw == 0
    }

    /// The integer part, truncated toward zero.
    #[must_use]
    pub const fn whole_part(&self) -> i64 {
        self.raw / SCALE
    }

    /// The magnitude of the fractional part, in millionths.
    #[must_use]
    pub const fn fraction_millionths(&self) -> u32 {
        (self.raw.unsigned_abs() % (SCALE as u64)) as u32
    }

    #[must_use]
    pub fn saturating_add(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint {
            raw: saturate(i128::from(self.raw) + i128::from(rhs.raw)),
        }
    }

    #[must_use]
    pub fn saturating_sub(self, rhs: FixedPoint) -> FixedPoint {
        FixedPoint {
            raw: saturate(i128::from(self.raw) - i128::from(rhs.raw)),
        }
    }

    #[must_use]
    pub fn saturating_mul(self, rhs: FixedPoint) -> FixedPoint {
        let product = i128::from(self.raw) * i128::from(rhs.raw);
        FixedPoint {
            raw: saturate(product / SCALE_WIDE),
        }
    }

    /// Divides, saturating on overflow.
    ///
    /// Division by zero yields [`FixedPoint::MAX`] when `self` is
    /// strictly positive and [`FixedPoint::MIN`] otherwise.  Notice
    /// that this means `0 / 0` is negative infinity.  That is a quirk
    /// kept for compatibility with existing calculator behaviour
    /// rather than a meaningful result.
    #[must_use]
    pub fn saturating_div(self, rhs: FixedPoint) -> FixedPoint {
        if rhs.raw == 0 {
            return if self.raw > 0 {
                FixedPoint::MAX
            } else {
                FixedPoint::MIN
            };
        }
        let numerator = i128::from(self.raw) * SCALE_WIDE;
        FixedPoint {
            raw: saturate(numerator / i128::from(rhs.raw)),
        }
    }

    #[must_use]
    pub fn saturating_neg(self) -> FixedPoint {
        FixedPoint {
            raw: self.raw.saturating_neg(),
        }
    }
}

impl From<Value> for FixedPoint {
    fn from(v: Value) -> FixedPoint {
        match v {
            Value::Finite(n) => n,
            Value::PositiveInfinity => FixedPoint::MAX,
            Value::NegativeInfinity => FixedPoint::MIN,
        }
    }
}

impl From<i32> for FixedPoint {
    fn from(n: i32) -> FixedPoint {
        FixedPoint::from_integer(i64::from(n))
    }
}

impl Add for FixedPoint {
    type Output = FixedPoint;
    fn add(self, rhs: FixedPoint) -> FixedPoint {
        self.saturating_add(rhs)
    }
}

impl Sub for FixedPoint {
    type Output = FixedPoint;
    fn sub(self, rhs: FixedPoint) -> FixedPoint {
        self.saturating_sub(rhs)
    }
}

impl Mul for FixedPoint {
    type Output = FixedPoint;
    fn mul(self, rhs: FixedPoint) -> FixedPoint {
        self.saturating_mul(rhs)
    }
}

impl Div for FixedPoint {
    type Output = FixedPoint;
    fn div(self, rhs: FixedPoint) -> FixedPoint {
        self.saturating_div(rhs)
    }
}

impl Neg for FixedPoint {
    type Output = FixedPoint;
    fn neg(self) -> FixedPoint {
        self.saturating_neg()
    }
}

impl PartialOrd for FixedPoint {
    fn partial_cmp(&self, other: &FixedPoint) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FixedPoint {
    fn cmp(&self, other: &FixedPoint) -> Ordering {
        self.raw.cmp(&other.raw)
    }
}

/// Renders the value with trailing fractional zeros removed (and the
/// decimal point too, if nothing is left after it).  The overflow
/// markers render as `infty` and `-infty`.
impl Display for FixedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self.value() {
            Value::PositiveInfinity => f.write_str("infty"),
            Value::NegativeInfinity => f.write_str("-infty"),
            Value::Finite(n) => {
                let sign = if n.is_negative() { "-" } else { "" };
                let whole = n.raw.unsigned_abs() / (SCALE as u64);
                let fraction = n.fraction_millionths();
                if fraction == 0 {
                    write!(f, "{sign}{whole}")
                } else {
                    let digits = format!("{fraction:06}");
                    write!(f, "{sign}{whole}.{}", digits.trim_end_matches('0'))
                }
            }
        }
    }
}

impl Debug for FixedPoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "FixedPoint({self}, raw={})", self.raw)
    }
}
