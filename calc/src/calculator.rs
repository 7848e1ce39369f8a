//! The calculator proper: an entry buffer plus an operand stack,
//! driven by [`Command`]s.
//!
//! Every command is applied completely before [`Calculator::execute`]
//! returns, and no command fails.  Commands which cannot do anything
//! (an addition with fewer than two operands, say) are simply no-ops,
//! though a pending entry is still committed to the stack first.
use tracing::{event, Level};

use base::prelude::*;

use super::command::{BinaryOp, Command};
use super::context::Context;
use super::entry::EntryBuffer;
use super::snapshot::Snapshot;
use super::stack::OperandStack;


/// Describes the effect of a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The entry buffer or the stack changed.
    Changed,
    /// The command had nothing to do.
    Unchanged,
    /// The operation was not carried out because it has no real
    /// result.  Any pending entry was still committed.
    Rejected(RootError),
}

impl Outcome {
    fn from_change(changed: bool) -> Outcome {
        if changed {
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calculator {
    entry: EntryBuffer,
    stack: OperandStack,
}

impl Calculator {
    #[must_use]
    pub fn new() -> Calculator {
        Calculator::default()
    }

    #[must_use]
    pub fn entry(&self) -> &EntryBuffer {
        &self.entry
    }

    #[must_use]
    pub fn stack(&self) -> &OperandStack {
        &self.stack
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(&self.entry, &self.stack)
    }

    /// Moves the entry cursor (for example to where the user
    /// clicked; the presentation layer works out the position).
    /// Moving the cursor does not count as an edit.
    pub fn place_cursor(&mut self, position: usize) -> Outcome {
        Outcome::from_change(self.entry.set_cursor(position))
    }

    pub fn execute(&mut self, ctx: &Context, command: Command) -> Outcome {
        event!(Level::DEBUG, "executing command '{command}'");
        let outcome = match command {
            Command::Digit(d) => self.edit(ctx, |entry| entry.append_digit(d)),
            Command::Period => self.edit(ctx, EntryBuffer::append_period),
            Command::Backspace => self.edit(ctx, EntryBuffer::backspace),
            Command::ToggleSign => {
                self.entry.toggle_sign();
                Outcome::Changed
            }
            Command::Push => Outcome::from_change(self.commit()),
            Command::Add => self.binary(BinaryOp::Add),
            Command::Sub => self.binary(BinaryOp::Sub),
            Command::Mul => self.binary(BinaryOp::Mul),
            Command::Div => self.binary(BinaryOp::Div),
            Command::Pow => self.binary(BinaryOp::Pow),
            Command::Sqrt => self.sqrt(),
            Command::PopToEntry => self.pop_to_entry(),
            Command::Swap => self.swap(),
        };
        event!(
            Level::TRACE,
            "after '{command}': {outcome:?}, entry={:?}, depth={}",
            self.entry.text(),
            self.stack.len()
        );
        outcome
    }

    fn edit<F>(&mut self, ctx: &Context, f: F) -> Outcome
    where
        F: FnOnce(&mut EntryBuffer) -> bool,
    {
        if f(&mut self.entry) {
            self.entry.touch(ctx.elapsed);
            Outcome::Changed
        } else {
            Outcome::Unchanged
        }
    }

    /// Moves a pending entry onto the stack.  Returns `false` if
    /// there was no pending entry.
    fn commit(&mut self) -> bool {
        match self.entry.to_number() {
            Some(n) => {
                event!(Level::DEBUG, "committing entry {:?} as {n}", self.entry.text());
                self.entry.clear();
                self.stack.push(n);
                true
            }
            None => false,
        }
    }

    fn binary(&mut self, op: BinaryOp) -> Outcome {
        let committed = self.commit();
        if self.stack.len() < 2 {
            event!(
                Level::DEBUG,
                "'{op}' needs two operands but the stack holds {}",
                self.stack.len()
            );
            return Outcome::from_change(committed);
        }
        let b = self.stack.pop();
        let a = self.stack.pop();
        let result = op.apply(a, b);
        event!(Level::DEBUG, "{a} {op} {b} = {result}");
        self.stack.push(result);
        Outcome::Changed
    }

    fn sqrt(&mut self) -> Outcome {
        let committed = self.commit();
        let Some(x) = self.stack.peek() else {
            event!(Level::DEBUG, "'sqrt' needs an operand but the stack is empty");
            return Outcome::from_change(committed);
        };
        match x.sqrt() {
            Ok(root) => {
                self.stack.pop();
                self.stack.push(root);
                Outcome::Changed
            }
            Err(e) => {
                event!(Level::WARN, "cannot take the square root of {x}: {e}");
                Outcome::Rejected(e)
            }
        }
    }

    fn pop_to_entry(&mut self) -> Outcome {
        if self.stack.is_empty() {
            let changed = self.entry != EntryBuffer::default();
            self.entry.clear();
            return Outcome::from_change(changed);
        }
        let n = self.stack.pop();
        if !self.entry.load(n) {
            event!(
                Level::DEBUG,
                "{n} cannot be edited, so it was discarded rather than moved to the entry"
            );
        }
        Outcome::Changed
    }

    fn swap(&mut self) -> Outcome {
        let pending = !self.entry.is_empty();
        if !((pending && !self.stack.is_empty()) || self.stack.len() > 2) {
            event!(
                Level::DEBUG,
                "nothing to swap (pending entry: {pending}, depth: {})",
                self.stack.len()
            );
            return Outcome::Unchanged;
        }
        let committed = self.commit();
        let a = self.stack.pop();
        let b = self.stack.pop();
        self.stack.push(a);
        self.stack.push(b);
        if committed {
            self.pop_to_entry();
        }
        Outcome::Changed
    }
}
