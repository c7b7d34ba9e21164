//! autodrop eval crate - heuristics for board evaluation.

use autodrop_core::{ColumnHeights, Grid};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    pub aggregate_height: f64,
    pub completed_lines: f64,
    pub holes: f64,
    pub bumpiness: f64,
    /// Extra term for how high the piece came to rest. Off unless set.
    pub landing_height: Option<f64>,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            aggregate_height: -0.510066,
            completed_lines: 0.760666,
            holes: -0.35663,
            bumpiness: -0.184483,
            landing_height: None,
        }
    }
}

/// Features of a board after its completed lines have been removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardFeatures {
    pub completed_lines: u8,
    pub aggregate_height: u32,
    pub holes: u32,
    pub bumpiness: u32,
    pub heights: ColumnHeights,
    pub top_row_filled: bool,
}

impl BoardFeatures {
    /// Clear completed lines on a private copy, then measure what is left.
    pub fn analyze(grid: &Grid) -> Self {
        let mut cleared = *grid;
        let completed_lines = cleared.clear_lines();
        let heights = ColumnHeights::new(&cleared);

        Self {
            completed_lines,
            aggregate_height: heights.aggregate(),
            holes: count_holes(&cleared),
            bumpiness: heights.bumpiness(),
            heights,
            top_row_filled: cleared.is_top_row_occupied(),
        }
    }

    /// Stack reaches the top row and is buried too high to keep playing.
    pub fn is_topped_out(&self) -> bool {
        self.top_row_filled && self.aggregate_height > (Grid::HEIGHT - 2) as u32
    }

    pub fn weighted_sum(&self, weights: &EvalWeights) -> f64 {
        weights.aggregate_height * self.aggregate_height as f64
            + weights.completed_lines * self.completed_lines as f64
            + weights.holes * self.holes as f64
            + weights.bumpiness * self.bumpiness as f64
    }
}

/// Score a board right after a piece was placed on it.
/// Negative infinity marks a losing board.
pub fn evaluate(grid: &Grid, weights: &EvalWeights) -> f64 {
    let features = BoardFeatures::analyze(grid);
    if features.is_topped_out() {
        return f64::NEG_INFINITY;
    }
    features.weighted_sum(weights)
}

/// `evaluate` plus the optional landing-height term for a piece of
/// `piece_height` rows whose top edge rests on `landing_row`.
pub fn evaluate_landing(
    grid: &Grid,
    landing_row: i8,
    piece_height: usize,
    weights: &EvalWeights,
) -> f64 {
    let score = evaluate(grid, weights);
    match weights.landing_height {
        Some(weight) if score.is_finite() => {
            score + weight * landing_height(landing_row, piece_height)
        }
        _ => score,
    }
}

/// Distance from the floor to the vertical centre of a resting piece
pub fn landing_height(landing_row: i8, piece_height: usize) -> f64 {
    Grid::HEIGHT as f64 - landing_row as f64 - piece_height as f64 / 2.0
}

/// Count total holes (empty cells below a filled cell in the same column)
pub fn count_holes(grid: &Grid) -> u32 {
    let mut holes = 0u32;
    for x in 0..Grid::WIDTH {
        let mut found_block = false;
        for y in 0..Grid::HEIGHT {
            if grid.get(x, y) {
                found_block = true;
            } else if found_block {
                holes += 1;
            }
        }
    }
    holes
}

pub fn column_heights(grid: &Grid) -> ColumnHeights {
    ColumnHeights::new(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_empty_board_scores_zero() {
        assert!(evaluate(&Grid::new(), &EvalWeights::default()).abs() < EPS);
    }

    #[test]
    fn test_single_full_row_is_cleared_first() {
        let mut grid = Grid::new();
        grid.fill_row(19);
        let features = BoardFeatures::analyze(&grid);
        assert_eq!(features.completed_lines, 1);
        assert_eq!(features.aggregate_height, 0);
        assert_eq!(features.holes, 0);
        assert_eq!(features.bumpiness, 0);

        let score = evaluate(&grid, &EvalWeights::default());
        assert!((score - 0.760666).abs() < EPS);
    }

    #[test]
    fn test_analyze_leaves_input_alone() {
        let mut grid = Grid::new();
        grid.fill_row(19);
        let _ = BoardFeatures::analyze(&grid);
        assert!(grid.is_row_full(19));
    }

    #[test]
    fn test_hole_under_single_block() {
        let mut grid = Grid::new();
        // column 2, top to bottom: filled, empty, filled
        grid.set(2, 17, true);
        grid.set(2, 19, true);
        assert_eq!(count_holes(&grid), 1);
        let features = BoardFeatures::analyze(&grid);
        assert_eq!(features.holes, 1);
        assert_eq!(features.heights.height(2), 3);
    }

    #[test]
    fn test_holes_count_every_gap_below_top() {
        let mut grid = Grid::new();
        grid.set(0, 15, true);
        grid.set(0, 18, true);
        // rows 16, 17, 19 are holes
        assert_eq!(count_holes(&grid), 3);
    }

    #[test]
    fn test_weighted_terms() {
        let mut grid = Grid::new();
        // column 0 height 2 with a hole, column 1 height 1
        grid.set(0, 18, true);
        grid.set(1, 19, true);
        let features = BoardFeatures::analyze(&grid);
        assert_eq!(features.aggregate_height, 3);
        assert_eq!(features.holes, 1);
        assert_eq!(features.bumpiness, 1 + 1);

        let w = EvalWeights::default();
        let expected = 3.0 * w.aggregate_height + w.holes + 2.0 * w.bumpiness;
        assert!((evaluate(&grid, &w) - expected).abs() < EPS);
    }

    #[test]
    fn test_topped_out_is_negative_infinity() {
        let mut grid = Grid::new();
        for y in 0..Grid::HEIGHT {
            grid.set(0, y, true);
        }
        assert_eq!(evaluate(&grid, &EvalWeights::default()), f64::NEG_INFINITY);
    }

    #[test]
    fn test_topped_out_needs_top_row_and_height() {
        // a single block on the top row already gives column 0 height 20
        let mut grid = Grid::new();
        grid.set(0, 0, true);
        assert!(BoardFeatures::analyze(&grid).is_topped_out());

        // aggregate exactly 18 with the top row empty stays finite
        let mut low = Grid::new();
        for y in 2..Grid::HEIGHT {
            low.set(0, y, true);
        }
        assert!(evaluate(&low, &EvalWeights::default()).is_finite());
    }

    #[test]
    fn test_landing_term_disabled_by_default() {
        let mut grid = Grid::new();
        grid.set(4, 19, true);
        let w = EvalWeights::default();
        assert_eq!(evaluate_landing(&grid, 19, 1, &w), evaluate(&grid, &w));
    }

    #[test]
    fn test_landing_term_applies_when_set() {
        let mut grid = Grid::new();
        grid.set(4, 19, true);
        let w = EvalWeights {
            landing_height: Some(-1.0),
            ..EvalWeights::default()
        };
        // one-row piece on the floor: centre at 20 - 19 - 0.5
        let expected = evaluate(&grid, &w) - 0.5;
        assert!((evaluate_landing(&grid, 19, 1, &w) - expected).abs() < EPS);
    }

    #[test]
    fn test_weights_from_partial_json() {
        let w: EvalWeights = serde_json::from_str(r#"{"holes": -1.5}"#).expect("valid json");
        assert_eq!(w.holes, -1.5);
        assert_eq!(w.aggregate_height, EvalWeights::default().aggregate_height);
        assert_eq!(w.landing_height, None);
    }
}
