//! A read-only view of the calculator state, for presentation
//! layers which would rather not reach into the engine's types.
use core::time::Duration;

use serde::Serialize;

use super::entry::EntryBuffer;
use super::stack::OperandStack;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntrySnapshot {
    pub text: String,
    pub negative: bool,
    pub cursor: usize,
    pub period_position: Option<usize>,
    #[serde(skip)]
    pub last_edit: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// The stack, formatted for display, bottom first.
    pub stack: Vec<String>,
    pub entry: EntrySnapshot,
}

impl Snapshot {
    pub(crate) fn new(entry: &EntryBuffer, stack: &OperandStack) -> Snapshot {
        Snapshot {
            stack: stack.values().iter().map(ToString::to_string).collect(),
            entry: EntrySnapshot {
                text: entry.text().to_string(),
                negative: entry.is_negative(),
                cursor: entry.cursor(),
                period_position: entry.period_position(),
                last_edit: entry.last_edit(),
            },
        }
    }

    /// The entry as it would be displayed, including its sign.
    #[must_use]
    pub fn entry_display(&self) -> String {
        if self.entry.negative {
            format!("-{}", self.entry.text)
        } else {
            self.entry.text.clone()
        }
    }
}
