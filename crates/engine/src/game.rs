//! Headless game state: applies placements, clears lines, scores and spawns.

use autodrop_core::{Grid, Piece, Placement, Rotation};
use tracing::debug;

use crate::apply::apply_placement;
use crate::collision::can_place;
use crate::config::ScoreTable;
use crate::queue::PieceQueue;
use crate::GameError;

#[derive(Clone, Debug)]
pub struct Game {
    grid: Grid,
    current: Option<Piece>,
    queue: PieceQueue,
    scores: ScoreTable,
    score: u32,
    lines_cleared: u32,
    pieces_placed: u32,
    game_over: bool,
}

impl Game {
    pub fn new(queue: PieceQueue, scores: ScoreTable) -> Self {
        Self::with_grid(Grid::new(), queue, scores)
    }

    /// Start from an existing grid instead of an empty one.
    pub fn with_grid(grid: Grid, queue: PieceQueue, scores: ScoreTable) -> Self {
        let mut game = Self {
            grid,
            current: None,
            queue,
            scores,
            score: 0,
            lines_cleared: 0,
            pieces_placed: 0,
            game_over: false,
        };
        game.spawn();
        game
    }

    /// Take the next piece from the queue; the game ends if it cannot enter.
    fn spawn(&mut self) {
        let piece = self.queue.next_piece();
        let x = piece.spawn_x(Grid::WIDTH);
        if can_place(&self.grid, piece.with_rotation(Rotation::North).shape(), x, 0) {
            self.current = Some(piece);
        } else {
            debug!(%piece, x, "spawn blocked");
            self.finish();
        }
    }

    /// Lock the current piece at `placement`, clear lines and spawn the next
    /// piece. The placement must be on the board and resting on something.
    pub fn apply(&mut self, placement: &Placement) -> Result<u8, GameError> {
        let piece = match self.current {
            Some(piece) if !self.game_over => piece,
            _ => return Err(GameError::GameOver),
        };

        let shape = piece.shape(placement.rotation);
        let (x, y) = (placement.x, placement.y);
        let resting = can_place(&self.grid, shape, x, y) && !can_place(&self.grid, shape, x, y + 1);
        if !resting {
            return Err(GameError::IllegalPlacement {
                piece,
                placement: *placement,
            });
        }

        let (grid, lines) = apply_placement(&self.grid, &piece, placement);
        self.grid = grid;
        self.pieces_placed += 1;
        self.lines_cleared += lines as u32;
        self.score += self.scores.points(lines);
        debug!(%piece, %placement, lines, score = self.score, "piece locked");

        self.spawn();
        Ok(lines)
    }

    /// End the game, e.g. when no legal placement exists.
    pub fn finish(&mut self) {
        self.current = None;
        self.game_over = true;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn current(&self) -> Option<Piece> {
        self.current
    }

    /// Preview of the piece after the current one
    pub fn next(&self) -> Piece {
        self.queue.peek()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn is_over(&self) -> bool {
        self.game_over
    }
}
