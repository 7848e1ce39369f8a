//! This crate implements the engine of a reverse-Polish calculator:
//! the text entry buffer, the operand stack, and the commands which
//! act on them.  Drawing the calculator and turning key presses into
//! commands is left to a presentation layer (see the `cli` crate for
//! one).
#![crate_name = "calc"]

mod calculator;
mod command;
mod context;
mod entry;
mod snapshot;
mod stack;

pub use calculator::{Calculator, Outcome};
pub use command::{BinaryOp, Command, Digit, NotADigit};
pub use context::Context;
pub use entry::{EntryBuffer, ENTRY_CAPACITY};
pub use snapshot::{EntrySnapshot, Snapshot};
pub use stack::OperandStack;
