//! Linear undo/redo log of whole-drawing snapshots.

use crate::drawing::Drawing;

/// How a history write treats the current entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Replace the current snapshot in place. Length and cursor are
    /// unchanged, and redo entries ahead of the cursor survive — an
    /// overwrite never truncates.
    Overwrite,
    /// Truncate everything past the cursor, append, and advance. Discards
    /// any redo branch.
    Commit,
}

/// Indexed, branch-discarding undo/redo log over [`Drawing`] snapshots.
///
/// A continuous drag writes every intermediate state in
/// [`WriteMode::Overwrite`], so a completed gesture costs exactly one
/// entry; gesture boundaries use [`WriteMode::Commit`]. The entry list is
/// never empty and `cursor` always indexes into it.
#[derive(Debug, Clone)]
pub struct History {
    entries: Vec<Drawing>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Create a history seeded with one empty drawing.
    pub fn new() -> Self {
        Self {
            entries: vec![Drawing::new()],
            cursor: 0,
        }
    }

    /// The snapshot the cursor points at.
    pub fn current(&self) -> &Drawing {
        &self.entries[self.cursor]
    }

    /// Write `next` according to `mode`.
    pub fn record(&mut self, next: Drawing, mode: WriteMode) {
        match mode {
            WriteMode::Overwrite => {
                self.entries[self.cursor] = next;
            }
            WriteMode::Commit => {
                self.entries.truncate(self.cursor + 1);
                self.entries.push(next);
                self.cursor += 1;
                log::trace!(
                    "history commit: {} entries, cursor at {}",
                    self.entries.len(),
                    self.cursor
                );
            }
        }
    }

    /// Derive the next snapshot from the current one, then write it.
    ///
    /// The closure receives a shared borrow and returns an owned drawing,
    /// so an overwrite can never alias the entry it replaces.
    pub fn record_with(&mut self, f: impl FnOnce(&Drawing) -> Drawing, mode: WriteMode) {
        let next = f(self.current());
        self.record(next, mode);
    }

    /// Step back one snapshot. No-op at the oldest entry.
    pub fn undo(&mut self) -> bool {
        if self.cursor > 0 {
            self.cursor -= 1;
            true
        } else {
            false
        }
    }

    /// Step forward one snapshot. No-op at the newest entry.
    pub fn redo(&mut self) -> bool {
        if self.cursor < self.entries.len() - 1 {
            self.cursor += 1;
            true
        } else {
            false
        }
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len() - 1
    }

    /// Number of stored snapshots. Always at least one.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}
