use autodrop_core::{Grid, Placement, Rotation, Rotations};
use autodrop_engine::{simulate_drop, with_shape};
use autodrop_eval::{evaluate_landing, EvalWeights};
use tracing::{debug, trace};

use crate::candidates::CandidateList;

/// Single-piece placement search: every rotation, every starting column,
/// straight drop, score the resulting board.
#[derive(Clone, Debug, Default)]
pub struct MoveSearch {
    pub weights: EvalWeights,
}

impl MoveSearch {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// All reachable resting placements with their scores, rotations in
    /// order 0..4 and x ascending within each rotation.
    pub fn candidates<P: Rotations + ?Sized>(&self, grid: &Grid, piece: &P) -> CandidateList {
        let mut list = CandidateList::new();
        for rotation in Rotation::ALL {
            let shape = piece.shape_for(rotation);
            let first_x = 1 - shape.width() as i8;
            for x in first_x..Grid::WIDTH as i8 {
                let Some(y) = simulate_drop(grid, shape, x) else {
                    continue;
                };
                let placed = with_shape(grid, shape, x, y);
                let score = evaluate_landing(&placed, y, shape.height(), &self.weights);
                trace!(?rotation, x, y, score, "candidate");
                list.push(Placement::new(rotation, x, y, score));
            }
        }
        list
    }

    /// Highest-scoring placement, or None when every placement is
    /// unreachable or loses (game over).
    pub fn find_best_move<P: Rotations + ?Sized>(
        &self,
        grid: &Grid,
        piece: &P,
    ) -> Option<Placement> {
        let candidates = self.candidates(grid, piece);
        let best = candidates.best();
        match &best {
            Some(placement) => debug!(
                candidates = candidates.len(),
                %placement,
                "best placement"
            ),
            None => debug!(candidates = candidates.len(), "no legal placement"),
        }
        best
    }
}

/// Best placement for `piece` on `grid` with the default weights.
pub fn find_best_move<P: Rotations + ?Sized>(piece: &P, grid: &Grid) -> Option<Placement> {
    MoveSearch::default().find_best_move(grid, piece)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrop_core::{Piece, Shape, ShapeSet};
    use autodrop_engine::can_place;
    use autodrop_eval::evaluate;

    #[test]
    fn test_empty_board_returns_move() {
        for piece in Piece::ALL {
            assert!(
                find_best_move(&piece, &Grid::new()).is_some(),
                "{piece} found no move on an empty board"
            );
        }
    }

    #[test]
    fn test_best_move_matches_max_score() {
        let search = MoveSearch::default();
        let mut grid = Grid::new();
        grid.set(3, 19, true);
        grid.set(4, 19, true);
        grid.set(4, 18, true);

        let candidates = search.candidates(&grid, &Piece::T);
        let max = candidates
            .iter()
            .map(|p| p.score)
            .fold(f64::NEG_INFINITY, f64::max);

        let best = search.find_best_move(&grid, &Piece::T).expect("expected a move");
        assert_eq!(best.score, max);
    }

    #[test]
    fn test_candidates_rest_and_score_consistently() {
        let search = MoveSearch::default();
        let mut grid = Grid::new();
        for x in 0..7 {
            grid.set(x, 19, true);
        }
        grid.set(8, 17, true);

        for piece in Piece::ALL {
            for p in &search.candidates(&grid, &piece) {
                let shape = piece.shape(p.rotation);
                assert!(can_place(&grid, shape, p.x, p.y));
                assert!(!can_place(&grid, shape, p.x, p.y + 1));
                let placed = with_shape(&grid, shape, p.x, p.y);
                assert_eq!(p.score, evaluate(&placed, &search.weights));
            }
        }
    }

    #[test]
    fn test_candidates_are_rotation_major() {
        let candidates = MoveSearch::default().candidates(&Grid::new(), &Piece::T);
        let order: Vec<(usize, i8)> = candidates
            .iter()
            .map(|p| (p.rotation.index(), p.x))
            .collect();
        let mut sorted = order.clone();
        sorted.sort();
        assert_eq!(order, sorted);
    }

    #[test]
    fn test_search_never_mutates_input() {
        let mut grid = Grid::new();
        grid.fill_row(19);
        grid.set(0, 19, false);
        let before = grid;
        let _ = find_best_move(&Piece::L, &grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_custom_shape_set() {
        let domino = ShapeSet::from_base(Shape::from_rows(&[&[1, 1]]).expect("valid"));
        let best = find_best_move(&domino, &Grid::new()).expect("expected a move");
        assert_eq!(best.rotation, Rotation::North);
        assert_eq!((best.x, best.y), (0, 19));
    }

    #[test]
    fn test_landing_weight_changes_choice() {
        // three rows filled except a well at column 0
        let mut grid = Grid::new();
        for x in 1..Grid::WIDTH {
            for y in 17..Grid::HEIGHT {
                grid.set(x, y, true);
            }
        }
        let plain = MoveSearch::default()
            .find_best_move(&grid, &Piece::I)
            .expect("expected a move");
        assert_eq!((plain.rotation, plain.x, plain.y), (Rotation::East, 0, 16));

        let high_landing = MoveSearch::new(EvalWeights {
            landing_height: Some(100.0),
            ..EvalWeights::default()
        })
        .find_best_move(&grid, &Piece::I)
        .expect("expected a move");
        assert!(high_landing.y < plain.y);
    }
}
