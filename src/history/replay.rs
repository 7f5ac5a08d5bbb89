//! Random-access stepping through a recorded game.
//!
//! The cursor owns a read-mode session and always sits on a valid
//! snapshot; stepping past either end reports `None` instead of
//! failing, so a driver can use it as its stop condition. Pacing
//! (auto-advance intervals, pause) belongs to the presentation layer.

use std::path::{Path, PathBuf};

use crate::core::board::Board;
use crate::core::direction::Direction;
use crate::error::HistoryError;
use crate::history::session::HistorySession;

/// A cursor over one recorded game.
#[derive(Debug)]
pub struct Replay {
    session: HistorySession,
    cursor: usize,
}

impl Replay {
    /// Open a log and position the cursor on the initial board.
    ///
    /// A log without a single snapshot cannot be replayed and is
    /// reported as corrupt.
    pub fn open(path: impl AsRef<Path>) -> Result<Replay, HistoryError> {
        let session = HistorySession::open_read(path.as_ref())?;
        if session.snapshot_count() == 0 {
            return Err(HistoryError::CorruptLog {
                path: path.as_ref().to_path_buf(),
                reason: "log holds no snapshots".to_owned(),
            });
        }
        Ok(Replay { session, cursor: 0 })
    }

    /// Index of the snapshot the cursor sits on.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots in the replay.
    #[must_use]
    pub fn len(&self) -> usize {
        self.session.snapshot_count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the cursor sits on the final snapshot.
    #[must_use]
    pub fn at_end(&self) -> bool {
        self.cursor + 1 >= self.len()
    }

    /// The board under the cursor.
    pub fn current(&self) -> Result<Board, HistoryError> {
        // The cursor is kept in range, so the sentinel cannot fire.
        self.session.load_snapshot(self.cursor)?.ok_or_else(|| {
            HistoryError::CorruptLog {
                path: self.session.path().to_path_buf(),
                reason: format!("snapshot {} vanished during replay", self.cursor),
            }
        })
    }

    /// Advance one move; `None` at the end of the game.
    pub fn forward(&mut self) -> Result<Option<Board>, HistoryError> {
        if self.at_end() {
            return Ok(None);
        }
        self.cursor += 1;
        self.current().map(Some)
    }

    /// Step back one move; `None` at the initial board.
    pub fn back(&mut self) -> Result<Option<Board>, HistoryError> {
        if self.cursor == 0 {
            return Ok(None);
        }
        self.cursor -= 1;
        self.current().map(Some)
    }

    /// Jump to an arbitrary snapshot; `None` if out of range.
    pub fn seek(&mut self, index: usize) -> Result<Option<Board>, HistoryError> {
        if index >= self.len() {
            return Ok(None);
        }
        self.cursor = index;
        self.current().map(Some)
    }

    /// The move that produced snapshot `index`.
    ///
    /// The initial board (index 0) was produced by no move.
    #[must_use]
    pub fn move_into(&self, index: usize) -> Option<Direction> {
        if index == 0 {
            return None;
        }
        self.session.moves().get(index - 1).copied()
    }

    /// The underlying session, for move-sequence access.
    #[must_use]
    pub fn session(&self) -> &HistorySession {
        &self.session
    }
}

/// List the history logs (`.txt` files) in a directory, sorted by name.
///
/// What a driver's file browser shows.
pub fn list_logs(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, HistoryError> {
    let dir = dir.as_ref();
    let entries = std::fs::read_dir(dir).map_err(|e| HistoryError::io(dir, e))?;
    let mut logs = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| HistoryError::io(dir, e))?;
        let path = entry.path();
        if path.extension().map_or(false, |ext| ext == "txt") {
            logs.push(path);
        }
    }
    logs.sort();
    Ok(logs)
}
