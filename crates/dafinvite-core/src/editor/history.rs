//! Bounded undo/redo stacks of document snapshots.

use crate::config::DEFAULT_HISTORY_DEPTH;
use crate::document::DesignDocument;

/// Undo/redo history for an editor session.
///
/// Documents are immutable values, so a snapshot is simply the previous
/// document.
#[derive(Debug, Clone)]
pub struct History {
    undo_stack: Vec<DesignDocument>,
    redo_stack: Vec<DesignDocument>,
    depth: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_DEPTH)
    }
}

impl History {
    /// Create an empty history keeping at most `depth` undo states.
    pub fn new(depth: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            depth,
        }
    }

    /// Record `previous` as an undo step (call when committing a change).
    pub fn record(&mut self, previous: DesignDocument) {
        if self.depth == 0 {
            return;
        }
        self.undo_stack.push(previous);

        // Clear redo stack when new changes are made
        self.redo_stack.clear();

        // Limit undo history size
        if self.undo_stack.len() > self.depth {
            self.undo_stack.remove(0);
        }
    }

    /// Step back from `current`. Returns the document to restore, or `None`
    /// if there is nothing to undo.
    pub fn undo(&mut self, current: &DesignDocument) -> Option<DesignDocument> {
        let snapshot = self.undo_stack.pop()?;
        self.redo_stack.push(current.clone());
        Some(snapshot)
    }

    /// Step forward from `current`. Returns the document to restore, or
    /// `None` if there is nothing to redo.
    pub fn redo(&mut self, current: &DesignDocument) -> Option<DesignDocument> {
        let snapshot = self.redo_stack.pop()?;
        self.undo_stack.push(current.clone());
        Some(snapshot)
    }

    /// Check if undo is available.
    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    /// Check if redo is available.
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Number of undo steps available.
    pub fn undo_len(&self) -> usize {
        self.undo_stack.len()
    }

    /// Drop all history.
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}
