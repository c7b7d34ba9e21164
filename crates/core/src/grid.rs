//! grid representation - one u16 bitmask per row, row 0 at the top
//! plain `Copy` value, so simulation always works on a private copy

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::GridError;

/// 10x20 occupancy grid using row-major u16 bitfields.
/// Bit `x` of `rows[y]` is the cell at column `x`, row `y`.
/// Row 0 is the top row, row 19 rests on the floor.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default)]
pub struct Grid {
    rows: [u16; Grid::HEIGHT],
}

impl Grid {
    pub const WIDTH: usize = 10;
    pub const HEIGHT: usize = 20;

    /// Bitmask of a completely filled row.
    pub const FULL_ROW: u16 = (1 << Self::WIDTH) - 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Build a grid from row bitmasks, top row first.
    pub fn from_rows(rows: &[u16]) -> Result<Self, GridError> {
        if rows.len() != Self::HEIGHT {
            return Err(GridError::RowCount {
                expected: Self::HEIGHT,
                actual: rows.len(),
            });
        }
        let mut grid = Self::new();
        for (y, &row) in rows.iter().enumerate() {
            if row & !Self::FULL_ROW != 0 {
                return Err(GridError::RowOverflow { row: y, bits: row });
            }
            grid.rows[y] = row;
        }
        Ok(grid)
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> bool {
        (self.rows[y] >> x) & 1 == 1
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, filled: bool) {
        if filled {
            self.rows[y] |= 1 << x;
        } else {
            self.rows[y] &= !(1 << x);
        }
    }

    /// Raw row data for collision detection
    #[inline(always)]
    pub fn row(&self, y: usize) -> u16 {
        self.rows[y]
    }

    pub fn rows(&self) -> &[u16; Grid::HEIGHT] {
        &self.rows
    }

    pub fn fill_row(&mut self, y: usize) {
        self.rows[y] = Self::FULL_ROW;
    }

    pub fn is_row_full(&self, y: usize) -> bool {
        self.rows[y] == Self::FULL_ROW
    }

    pub fn is_row_empty(&self, y: usize) -> bool {
        self.rows[y] == 0
    }

    pub fn is_top_row_occupied(&self) -> bool {
        self.rows[0] != 0
    }

    pub fn filled_cells(&self) -> u32 {
        self.rows.iter().map(|row| row.count_ones()).sum()
    }

    /// Remove every full row, scanning from the floor up.
    /// Rows above a cleared row shift down by one and an empty row enters at
    /// the top; the same index is checked again after each shift.
    pub fn clear_lines(&mut self) -> u8 {
        let mut cleared = 0u8;
        let mut y = Self::HEIGHT;
        while y > 0 {
            let row = y - 1;
            if self.is_row_full(row) {
                self.rows.copy_within(0..row, 1);
                self.rows[0] = 0;
                cleared += 1;
            } else {
                y -= 1;
            }
        }
        cleared
    }
}

impl Serialize for Grid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.rows.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Grid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let rows: Vec<u16> = Vec::deserialize(deserializer)?;
        Grid::from_rows(&rows).map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..Self::HEIGHT {
            write!(f, "|")?;
            for x in 0..Self::WIDTH {
                write!(f, "{}", if self.get(x, y) { "[]" } else { "  " })?;
            }
            writeln!(f, "|")?;
        }
        write!(f, "+{}+", "--".repeat(Self::WIDTH))
    }
}
