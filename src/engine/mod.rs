//! Move application and reward derivation.

pub mod moves;
pub mod reward;

pub use moves::{apply_move, compress_row, merge_row, MoveOutcome};
pub use reward::{reward_for, REWARD_CONTINUE, REWARD_LOSE, REWARD_REJECTED, REWARD_WIN};
