//! Placement produced by move search.

use serde::{Deserialize, Serialize};

use crate::Rotation;

/// Where a piece comes to rest: rotation state, column of the shape's left
/// edge, row of its top edge, and the heuristic score of the resulting board.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Placement {
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub score: f64,
}

impl Placement {
    pub fn new(rotation: Rotation, x: i8, y: i8, score: f64) -> Self {
        Self {
            rotation,
            x,
            y,
            score,
        }
    }

    /// Same position, different score
    pub fn with_score(mut self, score: f64) -> Self {
        self.score = score;
        self
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:?} x={} y={} score={:.4}",
            self.rotation, self.x, self.y, self.score
        )
    }
}
