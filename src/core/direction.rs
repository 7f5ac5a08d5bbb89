//! Move directions and their single-character history codes.

use serde::{Deserialize, Serialize};

/// One of the four directional moves.
///
/// Stateless. Each direction maps to a case-sensitive single-character
/// code (`U`, `D`, `L`, `R`) used in the history log's move line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in a fixed order for iteration.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The move code recorded in a history log.
    #[must_use]
    pub fn letter(self) -> char {
        match self {
            Direction::Up => 'U',
            Direction::Down => 'D',
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }

    /// Parse a move code back into a direction.
    ///
    /// Returns `None` for anything other than `U`, `D`, `L`, `R`.
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter {
            'U' => Some(Direction::Up),
            'D' => Some(Direction::Down),
            'L' => Some(Direction::Left),
            'R' => Some(Direction::Right),
            _ => None,
        }
    }
}
