//! Autoplay driver: asks the search for a placement each tick and hands it
//! to the game, which owns the live grid.

use autodrop_core::{Grid, Piece, Placement};
use autodrop_engine::{Game, GameError, PieceQueue, ScoreTable};
use serde::Serialize;
use tracing::info;

use crate::MoveSearch;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickOutcome {
    Placed {
        piece: Piece,
        placement: Placement,
        lines: u8,
    },
    GameOver,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameSummary {
    pub pieces_placed: u32,
    pub lines_cleared: u32,
    pub score: u32,
    pub topped_out: bool,
    pub final_grid: Grid,
}

impl GameSummary {
    fn from_game(game: &Game) -> Self {
        Self {
            pieces_placed: game.pieces_placed(),
            lines_cleared: game.lines_cleared(),
            score: game.score(),
            topped_out: game.is_over(),
            final_grid: *game.grid(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Autoplayer {
    search: MoveSearch,
}

impl Autoplayer {
    pub fn new(search: MoveSearch) -> Self {
        Self { search }
    }

    /// Place the current piece where the search says, or end the game when
    /// there is no legal placement.
    pub fn tick(&self, game: &mut Game) -> Result<TickOutcome, GameError> {
        let Some(piece) = game.current() else {
            return Ok(TickOutcome::GameOver);
        };
        let Some(placement) = self.search.find_best_move(game.grid(), &piece) else {
            game.finish();
            return Ok(TickOutcome::GameOver);
        };
        let lines = game.apply(&placement)?;
        Ok(TickOutcome::Placed {
            piece,
            placement,
            lines,
        })
    }

    /// Tick until the game ends or `max_pieces` pieces have been placed.
    pub fn play(&self, game: &mut Game, max_pieces: Option<u32>) -> Result<GameSummary, GameError> {
        while max_pieces.map_or(true, |limit| game.pieces_placed() < limit) {
            if let TickOutcome::GameOver = self.tick(game)? {
                break;
            }
        }
        let summary = GameSummary::from_game(game);
        info!(
            pieces = summary.pieces_placed,
            lines = summary.lines_cleared,
            score = summary.score,
            topped_out = summary.topped_out,
            "game finished"
        );
        Ok(summary)
    }
}

/// Play one headless game from an empty grid.
pub fn play_game(
    search: MoveSearch,
    queue: PieceQueue,
    scores: ScoreTable,
    max_pieces: Option<u32>,
) -> Result<GameSummary, GameError> {
    let mut game = Game::new(queue, scores);
    Autoplayer::new(search).play(&mut game, max_pieces)
}
