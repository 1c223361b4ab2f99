//! Undo/redo log of committed and discarded paths.

use pathlink_core::{CellPath, ConnectionId};

/// One reversible edit to the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HistoryEntry {
    /// A path was committed.
    Committed {
        /// The committed connection.
        id: ConnectionId,
        /// Its path at commit time.
        path: CellPath,
    },
    /// A committed path was discarded by re-grabbing its connection.
    Discarded {
        /// The re-grabbed connection.
        id: ConnectionId,
        /// The path that was discarded.
        path: CellPath,
    },
}

impl HistoryEntry {
    /// The connection this entry concerns.
    pub fn id(&self) -> ConnectionId {
        match self {
            Self::Committed { id, .. } | Self::Discarded { id, .. } => *id,
        }
    }
}

/// Linear history with a cursor.
///
/// Entries before the cursor are undoable, entries at or after it are
/// redoable. Recording a new entry drops the redoable tail.
///
/// # Examples
///
/// ```
/// use pathlink_core::{Cell, CellPath, ConnectionId};
/// use pathlink_engine::{HistoryEntry, MoveHistory};
///
/// let mut h = MoveHistory::default();
/// h.record(HistoryEntry::Committed {
///     id: ConnectionId(1),
///     path: CellPath::from_slice(&[Cell::new(0, 0), Cell::new(1, 0)]),
/// });
/// assert!(h.can_undo());
/// h.step_back();
/// assert!(h.can_redo());
/// ```
#[derive(Clone, Debug, Default)]
pub struct MoveHistory {
    entries: Vec<HistoryEntry>,
    cursor: usize,
}

impl MoveHistory {
    /// Append `entry`, discarding anything redoable.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.truncate(self.cursor);
        self.entries.push(entry);
        self.cursor = self.entries.len();
    }

    /// The entry the next undo reverts.
    pub fn peek_undo(&self) -> Option<&HistoryEntry> {
        self.cursor.checked_sub(1).and_then(|i| self.entries.get(i))
    }

    /// The entry the next redo re-applies.
    pub fn peek_redo(&self) -> Option<&HistoryEntry> {
        self.entries.get(self.cursor)
    }

    /// Move the cursor back one entry. Returns `false` at the start.
    pub fn step_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Move the cursor forward one entry. Returns `false` at the end.
    pub fn step_forward(&mut self) -> bool {
        if self.cursor >= self.entries.len() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Whether there is something to undo.
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Whether there is something to redo.
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Total entries, undoable and redoable.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the history is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop everything.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
