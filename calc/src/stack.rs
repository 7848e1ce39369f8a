//! The operand stack.  The top of the stack is the last element.
use tracing::{event, Level};

use base::prelude::*;

const INITIAL_CAPACITY: usize = 4;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OperandStack {
    items: Vec<FixedPoint>,
}

impl OperandStack {
    #[must_use]
    pub fn new() -> OperandStack {
        OperandStack::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// The values on the stack, bottom first.
    #[must_use]
    pub fn values(&self) -> &[FixedPoint] {
        &self.items
    }

    #[must_use]
    pub fn peek(&self) -> Option<FixedPoint> {
        self.items.last().copied()
    }

    /// Pushes a value.  Storage starts at a small size and doubles
    /// each time it fills up.
    pub fn push(&mut self, n: FixedPoint) {
        if self.items.len() == self.items.capacity() {
            let extra = self.items.capacity().max(INITIAL_CAPACITY);
            self.items.reserve_exact(extra);
        }
        event!(Level::TRACE, "push {n} (depth now {})", self.items.len() + 1);
        self.items.push(n);
    }

    /// Removes and returns the top value.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty.  Callers are expected to check
    /// [`OperandStack::len`] first; use [`OperandStack::try_pop`] if
    /// an empty stack is not a bug.
    pub fn pop(&mut self) -> FixedPoint {
        match self.try_pop() {
            Some(n) => n,
            None => panic!("bug: pop called on an empty operand stack"),
        }
    }

    pub fn try_pop(&mut self) -> Option<FixedPoint> {
        let popped = self.items.pop();
        if let Some(n) = popped {
            event!(Level::TRACE, "pop {n} (depth now {})", self.items.len());
        }
        popped
    }
}

#[test]
fn test_push_pop_order() {
    let mut stack = OperandStack::new();
    assert!(stack.is_empty());
    stack.push(fixed!(1));
    stack.push(fixed!(2));
    assert_eq!(stack.len(), 2);
    assert_eq!(stack.peek(), Some(fixed!(2)));
    assert_eq!(stack.values(), &[fixed!(1), fixed!(2)]);
    assert_eq!(stack.pop(), fixed!(2));
    assert_eq!(stack.pop(), fixed!(1));
    assert_eq!(stack.try_pop(), None);
    assert_eq!(stack.peek(), None);
}

#[test]
fn test_growth() {
    let mut stack = OperandStack::new();
    assert_eq!(stack.capacity(), 0);
    stack.push(FixedPoint::ONE);
    assert!(stack.capacity() >= INITIAL_CAPACITY);
    for i in 0..100 {
        stack.push(fixed!(i));
        assert!(stack.len() <= stack.capacity());
    }
    assert_eq!(stack.len(), 101);
    assert_eq!(stack.peek(), Some(fixed!(99)));
}

#[test]
#[should_panic(expected = "empty operand stack")]
fn test_pop_empty_is_a_bug() {
    let mut stack = OperandStack::new();
    let _ = stack.pop();
}
