//! Piece sources for the headless game.

use autodrop_core::Piece;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::GameError;

#[derive(Clone, Debug)]
enum Source {
    /// Uniform draw over the seven kinds
    Uniform(StdRng),
    /// Repeats a fixed sequence forever
    Cycle { pieces: Vec<Piece>, index: usize },
}

impl Source {
    fn draw(&mut self) -> Piece {
        match self {
            Source::Uniform(rng) => Piece::ALL[rng.gen_range(0..Piece::ALL.len())],
            Source::Cycle { pieces, index } => {
                let piece = pieces[*index];
                *index = (*index + 1) % pieces.len();
                piece
            }
        }
    }
}

/// Upcoming pieces, with one piece of preview.
#[derive(Clone, Debug)]
pub struct PieceQueue {
    source: Source,
    upcoming: Piece,
}

impl PieceQueue {
    pub fn uniform(seed: u64) -> Self {
        Self::from_source(Source::Uniform(StdRng::seed_from_u64(seed)))
    }

    pub fn fixed(pieces: &[Piece]) -> Result<Self, GameError> {
        if pieces.is_empty() {
            return Err(GameError::EmptyQueue);
        }
        Ok(Self::from_source(Source::Cycle {
            pieces: pieces.to_vec(),
            index: 0,
        }))
    }

    fn from_source(mut source: Source) -> Self {
        let upcoming = source.draw();
        Self { source, upcoming }
    }

    pub fn next_piece(&mut self) -> Piece {
        let piece = self.upcoming;
        self.upcoming = self.source.draw();
        piece
    }

    pub fn peek(&self) -> Piece {
        self.upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_cycles() {
        let mut queue = PieceQueue::fixed(&[Piece::T, Piece::I]).expect("non-empty");
        assert_eq!(queue.next_piece(), Piece::T);
        assert_eq!(queue.next_piece(), Piece::I);
        assert_eq!(queue.next_piece(), Piece::T);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut queue = PieceQueue::fixed(&Piece::ALL).expect("non-empty");
        assert_eq!(queue.peek(), Piece::ALL[0]);
        assert_eq!(queue.peek(), Piece::ALL[0]);
        assert_eq!(queue.next_piece(), Piece::ALL[0]);
        assert_eq!(queue.peek(), Piece::ALL[1]);
    }

    #[test]
    fn test_empty_fixed_rejected() {
        assert_eq!(PieceQueue::fixed(&[]).unwrap_err(), GameError::EmptyQueue);
    }

    #[test]
    fn test_uniform_is_seeded() {
        let mut a = PieceQueue::uniform(7);
        let mut b = PieceQueue::uniform(7);
        for _ in 0..50 {
            assert_eq!(a.next_piece(), b.next_piece());
        }
    }

    #[test]
    fn test_uniform_covers_all_kinds() {
        let mut queue = PieceQueue::uniform(42);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let piece = queue.next_piece();
            seen[Piece::ALL.iter().position(|&p| p == piece).expect("known piece")] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
