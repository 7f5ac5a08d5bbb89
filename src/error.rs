//! Error taxonomy for the engine and the history log.
//!
//! Spawning into a full board and reading past the end of a log are
//! recoverable conditions; everything else is fatal to the call and
//! propagates to the caller with enough context (path, mode, operation)
//! to report or recover. Nothing retries automatically.

use std::path::PathBuf;

use thiserror::Error;

use crate::history::Mode;

/// No empty cell is available to spawn a tile into.
///
/// Recoverable: signals the game-over condition to the caller rather
/// than looping forever looking for a free cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no empty cell to spawn into")]
pub struct BoardFullError;

/// Failures of the history log.
///
/// A snapshot index past the recorded range is *not* represented here:
/// `load_snapshot` returns `Ok(None)` for that case, and callers use it
/// as the end-of-replay sentinel.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// An operation was called on a session opened in the wrong mode.
    #[error("cannot {operation} in {mode} mode")]
    ModeViolation {
        mode: Mode,
        operation: &'static str,
    },

    /// The log file is empty or a line does not decode to a board.
    #[error("corrupt history log {path:?}: {reason}")]
    CorruptLog { path: PathBuf, reason: String },

    /// An underlying I/O failure, tagged with the file it hit.
    #[error("i/o error on {path:?}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl HistoryError {
    /// Wrap an I/O error with the path it occurred on.
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        HistoryError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Build a corrupt-log error for the given path.
    pub(crate) fn corrupt(path: &std::path::Path, reason: impl Into<String>) -> Self {
        HistoryError::CorruptLog {
            path: path.to_path_buf(),
            reason: reason.into(),
        }
    }
}
