//! Undo/redo history
//!
//! Snapshots are whole-document copies; documents here are small.

use crate::buffer::Selection;
use crate::style::StyleTable;
use std::collections::VecDeque;

const DEFAULT_MAX_SIZE: usize = 100;

/// Bounded undo/redo stacks for any state type
#[derive(Debug)]
pub struct History<T> {
    undo: VecDeque<T>,
    redo: Vec<T>,
    max_size: usize,
}

impl<T> History<T> {
    pub fn new() -> Self {
        Self::with_max_size(DEFAULT_MAX_SIZE)
    }

    pub fn with_max_size(max_size: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_size: max_size.max(1),
        }
    }

    /// Record the state before an edit. Invalidates redo.
    pub fn checkpoint(&mut self, item: T) {
        self.undo.push_back(item);
        self.redo.clear();
        while self.undo.len() > self.max_size {
            self.undo.pop_front();
        }
    }

    /// Step back: returns the state to restore and remembers `current` for redo
    pub fn undo(&mut self, current: T) -> Option<T> {
        let previous = self.undo.pop_back()?;
        self.redo.push(current);
        Some(previous)
    }

    /// Step forward again after an undo
    pub fn redo(&mut self, current: T) -> Option<T> {
        let next = self.redo.pop()?;
        self.undo.push_back(current);
        Some(next)
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

}

impl<T> Default for History<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Document state captured for undo/redo
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub text: String,
    pub styles: StyleTable,
    pub selection: Selection,
}

pub type DocumentHistory = History<DocumentSnapshot>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undo_redo_cycle() {
        let mut history = History::new();
        history.checkpoint("a");
        history.checkpoint("ab");

        assert_eq!(history.undo("abc"), Some("ab"));
        assert_eq!(history.undo("ab"), Some("a"));
        assert_eq!(history.undo("a"), None);

        assert_eq!(history.redo("a"), Some("ab"));
        assert_eq!(history.redo("ab"), Some("abc"));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_checkpoint_clears_redo() {
        let mut history = History::new();
        history.checkpoint(1);
        assert_eq!(history.undo(2), Some(1));
        assert!(history.can_redo());

        history.checkpoint(1);
        assert!(!history.can_redo());
    }

    #[test]
    fn test_max_size_drops_oldest() {
        let mut history = History::with_max_size(2);
        history.checkpoint(1);
        history.checkpoint(2);
        history.checkpoint(3);
        assert_eq!(history.undo(4), Some(3));
        assert_eq!(history.undo(3), Some(2));
        assert_eq!(history.undo(2), None);
    }
}
