//! The commands understood by the calculator.  A presentation layer
//! turns key presses or button clicks into these.
use std::error::Error;
use std::fmt::{self, Display, Formatter};

use serde::Serialize;

use base::prelude::*;

/// A decimal digit, 0 to 9 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Digit = Digit(0);
    pub const NINE: Digit = Digit(9);

    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn as_ascii(&self) -> char {
        (b'0' + self.0) as char
    }
}

/// Signals that a value was not a decimal digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotADigit(pub u32);

impl Display for NotADigit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match char::from_u32(self.0) {
            Some(ch) if !ch.is_control() => write!(f, "{ch:?} is not a decimal digit"),
            _ => write!(f, "{} is not a decimal digit", self.0),
        }
    }
}

impl Error for NotADigit {}

impl TryFrom<u8> for Digit {
    type Error = NotADigit;
    fn try_from(n: u8) -> Result<Digit, NotADigit> {
        if n <= 9 {
            Ok(Digit(n))
        } else {
            Err(NotADigit(u32::from(n)))
        }
    }
}

impl TryFrom<char> for Digit {
    type Error = NotADigit;
    fn try_from(ch: char) -> Result<Digit, NotADigit> {
        match ch.to_digit(10) {
            // to_digit(10) only returns values below 10.
            Some(d) => Ok(Digit(d as u8)),
            None => Err(NotADigit(u32::from(ch))),
        }
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        write!(f, "{}", self.0)
    }
}

/// The two-operand arithmetic operations.  The operand which was on
/// the top of the stack is the right-hand operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    #[must_use]
    pub fn apply(&self, a: FixedPoint, b: FixedPoint) -> FixedPoint {
        match self {
            BinaryOp::Add => a.saturating_add(b),
            BinaryOp::Sub => a.saturating_sub(b),
            BinaryOp::Mul => a.saturating_mul(b),
            BinaryOp::Div => a.saturating_div(b),
            BinaryOp::Pow => a.pow(b),
        }
    }
}

impl Display for BinaryOp {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        f.write_str(match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "pow",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    Digit(Digit),
    Period,
    Backspace,
    ToggleSign,
    Push,
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    Sqrt,
    PopToEntry,
    Swap,
}

impl Command {
    /// Returns the arithmetic operation performed by this command,
    /// if it is one of the binary operations.
    #[must_use]
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Command::Add => Some(BinaryOp::Add),
            Command::Sub => Some(BinaryOp::Sub),
            Command::Mul => Some(BinaryOp::Mul),
            Command::Div => Some(BinaryOp::Div),
            Command::Pow => Some(BinaryOp::Pow),
            _ => None,
        }
    }

    /// Indicates whether the command only edits the entry buffer.
    #[must_use]
    pub fn is_edit(&self) -> bool {
        matches!(
            self,
            Command::Digit(_) | Command::Period | Command::Backspace | Command::ToggleSign
        )
    }
}

impl From<Digit> for Command {
    fn from(d: Digit) -> Command {
        Command::Digit(d)
    }
}

/// The label a calculator keypad would show for the command.
impl Display for Command {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), fmt::Error> {
        match self {
            Command::Digit(d) => Display::fmt(d, f),
            Command::Period => f.write_str("."),
            Command::Backspace => f.write_str("del"),
            Command::ToggleSign => f.write_str("+/-"),
            Command::Push => f.write_str("push"),
            Command::Add => Display::fmt(&BinaryOp::Add, f),
            Command::Sub => Display::fmt(&BinaryOp::Sub, f),
            Command::Mul => Display::fmt(&BinaryOp::Mul, f),
            Command::Div => Display::fmt(&BinaryOp::Div, f),
            Command::Pow => Display::fmt(&BinaryOp::Pow, f),
            Command::Sqrt => f.write_str("sqrt"),
            Command::PopToEntry => f.write_str("pop"),
            Command::Swap => f.write_str("swap"),
        }
    }
}

#[test]
fn test_digit_conversions() {
    assert_eq!(Digit::try_from(7_u8).map(|d| d.value()), Ok(7));
    assert_eq!(Digit::try_from(10_u8), Err(NotADigit(10)));
    assert_eq!(Digit::try_from('0'), Ok(Digit::ZERO));
    assert_eq!(Digit::try_from('9'), Ok(Digit::NINE));
    assert!(Digit::try_from('x').is_err());
    assert!(Digit::try_from('٣').is_err());
    assert_eq!(Digit::NINE.as_ascii(), '9');
}

#[test]
fn test_command_labels() {
    assert_eq!(Command::from(Digit::NINE).to_string(), "9");
    assert_eq!(Command::Pow.to_string(), "pow");
    assert_eq!(Command::ToggleSign.to_string(), "+/-");
    assert_eq!(Command::PopToEntry.to_string(), "pop");
}

#[test]
fn test_binary_op_operand_order() {
    let two = FixedPoint::from_integer(2);
    let three = FixedPoint::from_integer(3);
    assert_eq!(BinaryOp::Sub.apply(two, three), FixedPoint::from_integer(-1));
    assert_eq!(BinaryOp::Pow.apply(two, three), FixedPoint::from_integer(8));
    assert_eq!(Command::Swap.binary_op(), None);
    assert!(Command::Period.is_edit());
    assert!(!Command::Push.is_edit());
}
