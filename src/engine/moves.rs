//! The four directional move transforms.
//!
//! A move is defined once, for Left, as the canonical per-row sequence
//! compress → merge → compress. The other three directions transform
//! the board into Left's frame, apply the sequence, and invert the
//! transform:
//!
//! - Right: reverse, sequence, reverse
//! - Up: transpose, sequence, transpose
//! - Down: transpose then reverse, sequence, reverse then transpose
//!
//! The transform and its inverse must mirror exactly or the result
//! comes back rotated.

use crate::core::board::Board;
use crate::core::direction::Direction;

/// Result of applying a directional move.
///
/// `changed` is true iff the resulting board differs from the input at
/// any cell, i.e. some tile slid or merged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub board: Board,
    pub changed: bool,
}

/// Slide all non-zero values to the left, preserving order.
///
/// Returns true if any value's index changed.
pub fn compress_row(row: &mut [u32]) -> bool {
    let mut moved = false;
    let mut count = 0;
    for j in 0..row.len() {
        if row[j] != 0 {
            if j != count {
                row[count] = row[j];
                row[j] = 0;
                moved = true;
            }
            count += 1;
        }
    }
    moved
}

/// Merge equal adjacent pairs in a single left-to-right sweep.
///
/// Doubles the left cell and zeroes the right one. The doubled cell is
/// not re-examined against its new right neighbor, so merges do not
/// cascade within one move. Returns true if any pair merged; a
/// merge-only row (no positional shift) still counts as changed.
pub fn merge_row(row: &mut [u32]) -> bool {
    let mut moved = false;
    for j in 0..row.len() - 1 {
        if row[j] != 0 && row[j] == row[j + 1] {
            row[j] *= 2;
            row[j + 1] = 0;
            moved = true;
        }
    }
    moved
}

/// Apply the canonical sequence to every row, in place.
///
/// The second compress closes the gaps merges leave behind; it cannot
/// move anything the first two passes did not already flag.
fn slide_left(board: &mut Board) -> bool {
    let mut changed = false;
    for i in 0..board.size() {
        let row = board.row_mut(i);
        changed |= compress_row(row);
        changed |= merge_row(row);
        compress_row(row);
    }
    changed
}

/// Apply a directional move to a board.
///
/// Cannot fail on a well-formed board; directions are an enum, so an
/// invalid one is unrepresentable.
#[must_use]
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    match direction {
        Direction::Left => {
            let mut out = board.clone();
            let changed = slide_left(&mut out);
            MoveOutcome {
                board: out,
                changed,
            }
        }
        Direction::Right => {
            let mut out = board.reverse();
            let changed = slide_left(&mut out);
            MoveOutcome {
                board: out.reverse(),
                changed,
            }
        }
        Direction::Up => {
            let mut out = board.transpose();
            let changed = slide_left(&mut out);
            MoveOutcome {
                board: out.transpose(),
                changed,
            }
        }
        Direction::Down => {
            let mut out = board.transpose().reverse();
            let changed = slide_left(&mut out);
            MoveOutcome {
                board: out.reverse().transpose(),
                changed,
            }
        }
    }
}
