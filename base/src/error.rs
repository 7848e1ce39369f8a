//! Basic error reporting.

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

/// Represents a failure to extract a root of a [`FixedPoint`] value.
///
/// [`FixedPoint`]: crate::FixedPoint
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RootError {
    /// The zeroth root is not defined.
    ZeroDegree,
    /// An even root of a negative number has no real value.
    NegativeRadicand,
}

impl Error for RootError {}

impl Display for RootError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            RootError::ZeroDegree => f.write_str("the zeroth root is undefined"),
            RootError::NegativeRadicand => {
                f.write_str("an even root of a negative number is not a real number")
            }
        }
    }
}
