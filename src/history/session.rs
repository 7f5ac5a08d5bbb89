//! Append-only game recording and random-access reading.
//!
//! A log is a plain-text file: one line per board snapshot (N² space-
//! separated integers, row-major), then one final line of concatenated
//! move letters, one per transition. Total lines = snapshots + 1.
//!
//! Snapshot lines are written as they are recorded; move letters are
//! buffered in memory and written only at close, which is what gives
//! the file its fixed line-count contract. `Drop` performs a
//! best-effort close so the moves line survives early returns.

use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::board::Board;
use crate::core::direction::Direction;
use crate::error::HistoryError;

/// Which operations a session permits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Immutable, loaded for replay.
    Read,
    /// Fresh, appending snapshots and buffering moves.
    Write,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Read => write!(f, "read"),
            Mode::Write => write!(f, "write"),
        }
    }
}

/// One game's history log, opened for writing or for reading.
///
/// Exactly one more snapshot than moves: the initial board has no move.
#[derive(Debug)]
pub struct HistorySession {
    path: PathBuf,
    mode: Mode,
    /// Write mode only; taken on close.
    writer: Option<BufWriter<File>>,
    /// Buffered in write mode, parsed from the last line in read mode.
    moves: Vec<Direction>,
    /// Read mode: every line of the file, snapshots then the move line.
    lines: Vec<String>,
    snapshot_count: usize,
}

impl HistorySession {
    /// Open a fresh log for writing.
    ///
    /// An existing file at `path` is deleted and replaced; the
    /// overwrite is surfaced as a warning, never silent.
    pub fn open_write(path: impl AsRef<Path>) -> Result<HistorySession, HistoryError> {
        let path = path.as_ref();
        if path.exists() {
            warn!("history log {:?} already exists, overwriting", path);
            fs::remove_file(path).map_err(|e| HistoryError::io(path, e))?;
        }
        let file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| HistoryError::io(path, e))?;
        debug!("recording history to {:?}", path);
        Ok(HistorySession {
            path: path.to_path_buf(),
            mode: Mode::Write,
            writer: Some(BufWriter::new(file)),
            moves: Vec::new(),
            lines: Vec::new(),
            snapshot_count: 0,
        })
    }

    /// Open an existing log for reading.
    ///
    /// The whole file is loaded eagerly; snapshots are decoded on
    /// access, by line index. An empty file is a corrupt log.
    pub fn open_read(path: impl AsRef<Path>) -> Result<HistorySession, HistoryError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|e| HistoryError::io(path, e))?;
        let lines: Vec<String> = contents.lines().map(str::to_owned).collect();
        if lines.is_empty() {
            return Err(HistoryError::corrupt(path, "log has no lines"));
        }

        let move_line = &lines[lines.len() - 1];
        let mut moves = Vec::with_capacity(move_line.len());
        for letter in move_line.chars() {
            let direction = Direction::from_letter(letter).ok_or_else(|| {
                HistoryError::corrupt(path, format!("unknown move code {letter:?}"))
            })?;
            moves.push(direction);
        }

        let snapshot_count = lines.len() - 1;
        debug!(
            "loaded history {:?}: {} snapshots, {} moves",
            path,
            snapshot_count,
            moves.len()
        );
        Ok(HistorySession {
            path: path.to_path_buf(),
            mode: Mode::Read,
            writer: None,
            moves,
            lines,
            snapshot_count,
        })
    }

    /// The file this session records to or reads from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Number of board snapshots in the log.
    #[must_use]
    pub fn snapshot_count(&self) -> usize {
        self.snapshot_count
    }

    /// Number of recorded moves; one fewer than the snapshots.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.moves.len()
    }

    /// The recorded move sequence, in order.
    #[must_use]
    pub fn moves(&self) -> &[Direction] {
        &self.moves
    }

    /// Append a board snapshot as one line of the log.
    pub fn record_snapshot(&mut self, board: &Board) -> Result<(), HistoryError> {
        let path = self.path.clone();
        let writer = self.writer_for("record a snapshot")?;
        let mut line = String::new();
        for (index, value) in board.cells().iter().enumerate() {
            if index > 0 {
                line.push(' ');
            }
            line.push_str(&value.to_string());
        }
        line.push('\n');
        writer
            .write_all(line.as_bytes())
            .map_err(|e| HistoryError::io(&path, e))?;
        self.snapshot_count += 1;
        Ok(())
    }

    /// Buffer a move letter; it becomes durable at close.
    pub fn record_move(&mut self, direction: Direction) -> Result<(), HistoryError> {
        self.writer_for("record a move")?;
        self.moves.push(direction);
        Ok(())
    }

    /// Load the snapshot at `index`.
    ///
    /// Returns `Ok(None)` past the end of the log, which callers use as
    /// the end-of-replay sentinel.
    pub fn load_snapshot(&self, index: usize) -> Result<Option<Board>, HistoryError> {
        if self.mode != Mode::Read {
            return Err(HistoryError::ModeViolation {
                mode: self.mode,
                operation: "load a snapshot",
            });
        }
        if index >= self.snapshot_count {
            return Ok(None);
        }

        let line = &self.lines[index];
        let mut cells = Vec::new();
        for token in line.split_whitespace() {
            let value: u32 = token.parse().map_err(|_| {
                HistoryError::corrupt(&self.path, format!("bad cell value {token:?} on line {index}"))
            })?;
            cells.push(value);
        }
        let size = integer_sqrt(cells.len());
        Board::from_cells(size, cells).ok_or_else(|| {
            HistoryError::corrupt(
                &self.path,
                format!("line {index} does not hold a square board"),
            )
        })
        .map(Some)
    }

    /// Write the buffered move letters as the final line and flush.
    ///
    /// After this the file holds `snapshot_count + 1` lines.
    pub fn close(mut self) -> Result<(), HistoryError> {
        self.flush_moves().map_err(|e| HistoryError::io(&self.path, e))
    }

    fn flush_moves(&mut self) -> std::io::Result<()> {
        if let Some(mut writer) = self.writer.take() {
            let letters: String = self.moves.iter().map(|d| d.letter()).collect();
            writer.write_all(letters.as_bytes())?;
            writer.write_all(b"\n")?;
            writer.flush()?;
            debug!(
                "closed history {:?}: {} snapshots, {} moves",
                self.path,
                self.snapshot_count,
                self.moves.len()
            );
        }
        Ok(())
    }

    fn writer_for(
        &mut self,
        operation: &'static str,
    ) -> Result<&mut BufWriter<File>, HistoryError> {
        match (self.mode, self.writer.as_mut()) {
            (Mode::Write, Some(writer)) => Ok(writer),
            _ => Err(HistoryError::ModeViolation {
                mode: self.mode,
                operation,
            }),
        }
    }
}

impl Drop for HistorySession {
    fn drop(&mut self) {
        // Best effort: keep the moves line even on early returns. An
        // explicit close() already took the writer, making this a no-op.
        if self.flush_moves().is_err() {
            warn!("failed to flush moves to {:?} on drop", self.path);
        }
    }
}

/// Largest n with n*n <= len; exact for well-formed snapshot lines.
fn integer_sqrt(len: usize) -> usize {
    let mut n = 0;
    while (n + 1) * (n + 1) <= len {
        n += 1;
    }
    n
}
