//! Roots and powers of [`FixedPoint`] values.
//!
//! There is no logarithm here.  A fractional exponent is handled one
//! decimal digit at a time: we take the tenth root of the base, the
//! tenth root of that, and so on, and multiply together the right
//! number of each (see [`FixedPoint::pow`]).

use super::{FixedPoint, DECIMAL_DIGITS, SCALE};
use crate::error::RootError;

/// Largest `r >= 0` such that `r` multiplied by itself `degree`
/// times (with the usual truncating, saturating multiplication) does
/// not exceed `x`.  `x` must not be negative.
///
/// Below one the root is larger than `x` (but no larger than one), so
/// the search range is `[0, max(x, 1)]`.
fn root_of_non_negative(x: FixedPoint, degree: u32) -> FixedPoint {
    debug_assert!(x.raw >= 0);
    let mut low: i64 = 0;
    let mut high: i64 = x.raw.max(SCALE);
    while low != high {
        let candidate = FixedPoint::from_raw(low + (high - low + 1) / 2);
        let mut product = FixedPoint::ONE;
        for _ in 0..degree {
            product = product.saturating_mul(candidate);
        }
        if product > x {
            high = candidate.raw - 1;
        } else {
            low = candidate.raw;
        }
    }
    FixedPoint::from_raw(low)
}

impl FixedPoint {
    /// Computes the `degree`th root by binary search over the raw
    /// representation, truncating toward zero.
    ///
    /// The infinity markers are returned unchanged.  Odd roots of
    /// negative values are the negation of the root of the
    /// magnitude.
    ///
    /// # Errors
    ///
    /// [`RootError::ZeroDegree`] if `degree` is zero, and
    /// [`RootError::NegativeRadicand`] for an even root of a negative
    /// (finite) value.
    pub fn integer_root(self, degree: u32) -> Result<FixedPoint, RootError> {
        if degree == 0 {
            return Err(RootError::ZeroDegree);
        }
        if self.is_infinite() {
            return Ok(self);
        }
        if self.raw < 0 {
            if degree % 2 == 0 {
                return Err(RootError::NegativeRadicand);
            }
            return Ok(root_of_non_negative(self.saturating_neg(), degree).saturating_neg());
        }
        Ok(root_of_non_negative(self, degree))
    }

    /// Shorthand for `integer_root(2)`.
    pub fn sqrt(self) -> Result<FixedPoint, RootError> {
        self.integer_root(2)
    }

    /// Raises to a whole-number power by repeated squaring.
    #[must_use]
    pub fn powi(self, mut exponent: u64) -> FixedPoint {
        let mut acc = FixedPoint::ONE;
        let mut square = self;
        while exponent != 0 {
            if exponent & 1 != 0 {
                acc = acc.saturating_mul(square);
            }
            exponent >>= 1;
            square = square.saturating_mul(square);
        }
        acc
    }

    /// Raises to a real power, to six decimal digits of exponent.
    ///
    /// A negative exponent is handled by raising the reciprocal of
    /// the base (so a zero base follows the division-by-zero rule of
    /// [`FixedPoint::saturating_div`]).  The whole part of the
    /// exponent is applied with [`FixedPoint::powi`].  The fractional
    /// part is applied only when the base is strictly positive; for
    /// other bases it is ignored.
    #[must_use]
    pub fn pow(self, exponent: FixedPoint) -> FixedPoint {
        if exponent.raw < 0 {
            return FixedPoint::ONE
                .saturating_div(self)
                .pow(exponent.saturating_neg());
        }

        let whole = exponent.raw / SCALE;
        let mut acc = self.powi(whole.unsigned_abs());

        if self.raw > 0 {
            // roots[i] is the base raised to 10^-(i+1).
            let mut roots = [FixedPoint::ZERO; DECIMAL_DIGITS as usize];
            let mut previous = self;
            for root in roots.iter_mut() {
                *root = if previous.is_infinite() {
                    previous
                } else {
                    root_of_non_negative(previous, 10)
                };
                previous = *root;
            }

            let mut mantissa = exponent.raw % SCALE;
            for root in roots.iter().rev() {
                let digit = mantissa % 10;
                mantissa /= 10;
                let mut factor = FixedPoint::ONE;
                for _ in 0..digit {
                    factor = factor.saturating_mul(*root);
                }
                acc = acc.saturating_mul(factor);
            }
        }
        acc
    }
}
