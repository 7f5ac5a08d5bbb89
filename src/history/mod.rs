//! Durable move-history recording and replay.

pub mod replay;
pub mod session;

pub use replay::{list_logs, Replay};
pub use session::{HistorySession, Mode};
