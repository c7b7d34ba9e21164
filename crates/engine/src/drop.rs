//! drop simulation - straight fall from the top row under gravity

use autodrop_core::{Grid, Shape};

use crate::collision::can_place;

/// Lowest row reachable by gravity from (x, y). `y` itself must be placeable.
#[inline]
pub fn hard_drop_y(grid: &Grid, shape: &Shape, x: i8, y: i8) -> i8 {
    let mut landing_y = y;
    while can_place(grid, shape, x, landing_y + 1) {
        landing_y += 1;
    }
    landing_y
}

/// Drop `shape` straight down in column `x`, starting from row 0.
/// None when the shape already overlaps a wall or a settled block at row 0
/// (spawn blocked for this column and rotation).
pub fn simulate_drop(grid: &Grid, shape: &Shape, x: i8) -> Option<i8> {
    if !can_place(grid, shape, x, 0) {
        return None;
    }
    Some(hard_drop_y(grid, shape, x, 0))
}
