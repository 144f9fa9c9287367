//! Undo history.
//!
//! One [`Action`] is pushed for every operation that appends to the event
//! logs, and undo pops exactly one. The starting lineups are the exception:
//! they are logged once and never undone.

mod action;

pub use action::Action;

/// LIFO stack of undo records.
#[derive(Clone, Debug, Default)]
pub struct ActionHistory {
    actions: Vec<Action>,
}

impl ActionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    /// Remove and return the most recent action.
    pub fn pop(&mut self) -> Option<Action> {
        self.actions.pop()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn clear(&mut self) {
        self.actions.clear();
    }
}
