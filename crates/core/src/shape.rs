//! Piece shape matrices and caller-supplied rotation sets.

use crate::{Rotation, Rotations, ShapeError};

/// Binary matrix of at most 4x4 cells.
/// Stored as one bitmask per row; bit `c` of `masks[r]` is column `c`.
/// Cells outside `rows x cols` are always clear, so equality is exact.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    masks: [u8; Shape::MAX_SIZE],
}

impl Shape {
    pub const MAX_SIZE: usize = 4;

    const EMPTY: Self = Self {
        rows: 0,
        cols: 0,
        masks: [0; Self::MAX_SIZE],
    };

    /// Build a shape from `#` (occupied) and `.` (empty) rows at compile time.
    pub(crate) const fn from_pattern(pattern: &[&str]) -> Self {
        let rows = pattern.len();
        assert!(rows > 0 && rows <= Self::MAX_SIZE, "bad shape height");
        let cols = pattern[0].len();
        assert!(cols > 0 && cols <= Self::MAX_SIZE, "bad shape width");

        let mut masks = [0u8; Self::MAX_SIZE];
        let mut r = 0;
        while r < rows {
            let bytes = pattern[r].as_bytes();
            assert!(bytes.len() == cols, "ragged shape pattern");
            let mut c = 0;
            while c < cols {
                if bytes[c] == b'#' {
                    masks[r] |= 1 << c;
                }
                c += 1;
            }
            r += 1;
        }
        Self {
            rows: rows as u8,
            cols: cols as u8,
            masks,
        }
    }

    /// Build a shape from a matrix of 0/1 values, one slice per row.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self, ShapeError> {
        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if height == 0 || width == 0 {
            return Err(ShapeError::Empty);
        }
        if height > Self::MAX_SIZE || width > Self::MAX_SIZE {
            return Err(ShapeError::TooLarge {
                rows: height,
                cols: width,
                max: Self::MAX_SIZE,
            });
        }

        let mut masks = [0u8; Self::MAX_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(ShapeError::Ragged {
                    row: r,
                    expected: width,
                    actual: row.len(),
                });
            }
            for (c, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    masks[r] |= 1 << c;
                }
            }
        }
        if masks.iter().all(|&m| m == 0) {
            return Err(ShapeError::Empty);
        }

        Ok(Self {
            rows: height as u8,
            cols: width as u8,
            masks,
        })
    }

    /// Quarter turn clockwise: cell (i, j) of an r x c matrix moves to
    /// (j, r - 1 - i) of the c x r result.
    pub const fn rotated_cw(&self) -> Self {
        let rows = self.rows as usize;
        let cols = self.cols as usize;
        let mut masks = [0u8; Self::MAX_SIZE];
        let mut i = 0;
        while i < rows {
            let mut j = 0;
            while j < cols {
                if (self.masks[i] >> j) & 1 == 1 {
                    masks[j] |= 1 << (rows - 1 - i);
                }
                j += 1;
            }
            i += 1;
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            masks,
        }
    }

    #[inline(always)]
    pub fn width(&self) -> usize {
        self.cols as usize
    }

    #[inline(always)]
    pub fn height(&self) -> usize {
        self.rows as usize
    }

    #[inline(always)]
    pub fn get(&self, row: usize, col: usize) -> bool {
        row < self.height() && (self.masks[row] >> col) & 1 == 1
    }

    /// Occupied columns of one row as a bitmask
    #[inline(always)]
    pub fn row_mask(&self, row: usize) -> u8 {
        self.masks[row]
    }

    /// Occupied (row, col) offsets, row-major
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.height()).flat_map(move |r| {
            (0..self.width())
                .filter(move |&c| self.get(r, c))
                .map(move |c| (r, c))
        })
    }

    pub fn cell_count(&self) -> u32 {
        self.masks.iter().map(|m| m.count_ones()).sum()
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.height() {
            for c in 0..self.width() {
                write!(f, "{}", if self.get(r, c) { '#' } else { '.' })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Four rotation states of a piece that is not one of the built-in kinds.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ShapeSet {
    rotations: [Shape; 4],
}

impl ShapeSet {
    /// Derive all four states by turning `base` clockwise.
    pub fn from_base(base: Shape) -> Self {
        let mut rotations = [Shape::EMPTY; 4];
        let mut current = base;
        for slot in rotations.iter_mut() {
            *slot = current;
            current = current.rotated_cw();
        }
        Self { rotations }
    }

    /// Accept an explicit list of states, checking that there are exactly
    /// four and that each is a clockwise turn of the one before it.
    pub fn from_rotations(shapes: Vec<Shape>) -> Result<Self, ShapeError> {
        let rotations: [Shape; 4] = shapes
            .try_into()
            .map_err(|rejected: Vec<Shape>| ShapeError::RotationCount(rejected.len()))?;

        for i in 0..4 {
            let expected = rotations[i].rotated_cw();
            if rotations[(i + 1) % 4] != expected {
                return Err(ShapeError::InconsistentRotation((i + 1) % 4));
            }
        }
        Ok(Self { rotations })
    }
}

impl Rotations for ShapeSet {
    fn shape_for(&self, rotation: Rotation) -> &Shape {
        &self.rotations[rotation.index()]
    }
}
