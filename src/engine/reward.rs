//! Reward derivation for external trainers.
//!
//! A rejected move (the board did not change) is penalized so a policy
//! learns not to press against a wall; terminal outcomes dominate.

use crate::core::board::GameState;

/// Reward for reaching the winning tile.
pub const REWARD_WIN: i32 = 5;
/// Reward for a dead board.
pub const REWARD_LOSE: i32 = -5;
/// Reward for a move that did not change the board.
pub const REWARD_REJECTED: i32 = -1;
/// Reward for an ordinary successful move.
pub const REWARD_CONTINUE: i32 = 0;

/// Derive the reward for one move from its effect and the resulting state.
///
/// A rejected move is scored [`REWARD_REJECTED`] regardless of the
/// board's state; the game only ends through a move that changes the
/// board.
#[must_use]
pub fn reward_for(changed: bool, state: GameState) -> i32 {
    if !changed {
        return REWARD_REJECTED;
    }
    match state {
        GameState::Win => REWARD_WIN,
        GameState::Lose => REWARD_LOSE,
        GameState::Ongoing => REWARD_CONTINUE,
    }
}
