//! Column heights for fast evaluation

use crate::Grid;

/// Per-column stack heights of a grid.
/// A column's height is `HEIGHT - (row of its topmost filled cell)`, 0 if empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnHeights {
    heights: [u8; Grid::WIDTH],
}

impl ColumnHeights {
    pub fn new(grid: &Grid) -> Self {
        let mut heights = [0u8; Grid::WIDTH];
        for (x, height) in heights.iter_mut().enumerate() {
            *height = Self::compute_height(grid, x);
        }
        Self { heights }
    }

    fn compute_height(grid: &Grid, x: usize) -> u8 {
        for y in 0..Grid::HEIGHT {
            if grid.get(x, y) {
                return (Grid::HEIGHT - y) as u8;
            }
        }
        0
    }

    #[inline(always)]
    pub fn height(&self, x: usize) -> u8 {
        self.heights[x]
    }

    pub fn max(&self) -> u8 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all column heights
    pub fn aggregate(&self) -> u32 {
        self.heights.iter().map(|&h| h as u32).sum()
    }

    /// Sum of absolute height differences between neighbouring columns
    pub fn bumpiness(&self) -> u32 {
        self.heights
            .windows(2)
            .map(|pair| (pair[0] as i32 - pair[1] as i32).unsigned_abs())
            .sum()
    }

    #[inline(always)]
    pub fn as_array(&self) -> &[u8; Grid::WIDTH] {
        &self.heights
    }
}
