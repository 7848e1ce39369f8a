//! The `base` crate defines the number type used by the calculator,
//! together with the arithmetic on it.  The idea is that a front end
//! which only needs to format or parse numbers can depend on the
//! base crate without also depending on the calculator engine
//! itself.

mod number;

pub mod error;
pub mod prelude;

pub use crate::number::{FixedPoint, Value, DECIMAL_DIGITS, SCALE};

/// Builds a [`FixedPoint`] from a whole number and a fraction in
/// millionths, for example `fixed!(3, 140_000)` for 3.14.
#[macro_export]
macro_rules! fixed {
    ($whole:expr) => {
        $crate::FixedPoint::from_integer($whole)
    };
    ($whole:expr, $millionths:expr) => {
        $crate::FixedPoint::from_raw($whole * $crate::SCALE + $millionths)
    };
}

#[test]
fn test_fixed_macro() {
    let m: FixedPoint = fixed!(40);
    let n: FixedPoint = FixedPoint::from(40_i32);
    assert_eq!(m, n);

    let p: FixedPoint = fixed!(3, 140_000);
    assert_eq!(p.to_string(), "3.14");
    assert_eq!(fixed!(-3, -140_000).to_string(), "-3.14");
}
