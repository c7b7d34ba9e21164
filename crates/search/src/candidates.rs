//! Stack-allocated candidate list - no heap allocation per search

use autodrop_core::{Grid, Placement, Shape};
use smallvec::SmallVec;

/// Upper bound on candidates: 4 rotations x every starting column
pub const MAX_CANDIDATES: usize = 4 * (Grid::WIDTH + Shape::MAX_SIZE - 1);

/// Scored placements in enumeration order (rotation-major, x ascending)
#[derive(Clone, Debug, Default)]
pub struct CandidateList {
    placements: SmallVec<[Placement; MAX_CANDIDATES]>,
}

impl CandidateList {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn push(&mut self, placement: Placement) {
        self.placements.push(placement);
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.placements.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[Placement] {
        &self.placements
    }

    pub fn iter(&self) -> impl Iterator<Item = &Placement> {
        self.placements.iter()
    }

    /// First placement whose score strictly beats everything before it.
    /// Earlier candidates win ties; losing boards (negative infinity) never
    /// qualify.
    pub fn best(&self) -> Option<Placement> {
        let mut best: Option<Placement> = None;
        let mut best_score = f64::NEG_INFINITY;
        for placement in &self.placements {
            if placement.score > best_score {
                best_score = placement.score;
                best = Some(*placement);
            }
        }
        best
    }
}

impl<'a> IntoIterator for &'a CandidateList {
    type Item = &'a Placement;
    type IntoIter = std::slice::Iter<'a, Placement>;

    fn into_iter(self) -> Self::IntoIter {
        self.placements.iter()
    }
}

impl std::ops::Index<usize> for CandidateList {
    type Output = Placement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.placements[index]
    }
}
