//! History module - bounded undo stack of game snapshots
//!
//! Holds at most [`HISTORY_LIMIT`] snapshots in a fixed-capacity array.
//! Committing after an undo discards every snapshot past the current index
//! (there is no redo). When the array is full the oldest snapshot is dropped
//! and the index shifts with it.

use arrayvec::ArrayVec;

use crate::snapshot::GameSnapshot;
use crate::types::HISTORY_LIMIT;

#[derive(Debug, Clone, Default)]
pub struct History {
    entries: ArrayVec<GameSnapshot, HISTORY_LIMIT>,
    /// Index of the current snapshot; meaningful only when `entries` is non-empty.
    index: usize,
}

impl History {
    pub fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
            index: 0,
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.index = 0;
    }

    /// Record `snapshot` as the new current entry.
    pub fn commit(&mut self, snapshot: GameSnapshot) {
        if !self.entries.is_empty() {
            self.entries.truncate(self.index + 1);
        }
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(snapshot);
        self.index = self.entries.len() - 1;
    }

    /// Step back one entry and return it, or `None` at the oldest entry.
    pub fn undo(&mut self) -> Option<&GameSnapshot> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        self.entries.get(self.index)
    }

    pub fn current(&self) -> Option<&GameSnapshot> {
        self.entries.get(self.index)
    }

    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[GameSnapshot] {
        &self.entries
    }
}
