//! autodrop-engine - collision, drop simulation and the headless game state.
//!
//! Everything here works on `Grid` values; callers keep ownership of the
//! live board and receive fresh copies back.

pub mod apply;
pub mod collision;
pub mod config;
pub mod drop;
mod error;
pub mod game;
pub mod queue;

pub use apply::{apply_placement, place_shape, with_shape};
pub use collision::{can_place, collides};
pub use config::ScoreTable;
pub use drop::{hard_drop_y, simulate_drop};
pub use error::GameError;
pub use game::Game;
pub use queue::PieceQueue;
