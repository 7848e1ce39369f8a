//! The prelude exports the number type and its error type, which is
//! what most users of the base crate need.
pub use super::error::*;
pub use super::fixed;
pub use super::{FixedPoint, Value, DECIMAL_DIGITS, SCALE};
