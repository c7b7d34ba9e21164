//! autodrop search crate - move search and the autoplay driver.
//!
//! The search never touches the caller's grid: every candidate is simulated
//! on a copy.

mod autoplay;
mod candidates;
mod move_search;

pub use autoplay::{play_game, Autoplayer, GameSummary, TickOutcome};
pub use candidates::{CandidateList, MAX_CANDIDATES};
pub use move_search::{find_best_move, MoveSearch};
