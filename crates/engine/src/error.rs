use autodrop_core::{Piece, Placement};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GameError {
    #[error("game is over")]
    GameOver,
    #[error("{piece} cannot rest at {placement}")]
    IllegalPlacement { piece: Piece, placement: Placement },
    #[error("piece sequence is empty")]
    EmptyQueue,
}
