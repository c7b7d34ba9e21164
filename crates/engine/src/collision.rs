//! collision detection - walls, floor, settled blocks

use autodrop_core::{Grid, Shape};

/// Shift one shape row to start at column `x`.
/// None when an occupied cell would fall outside the board horizontally.
#[inline(always)]
fn shift_into_row(mask: u8, x: i8) -> Option<u16> {
    let mask = mask as u16;
    if x >= Grid::WIDTH as i8 || x <= -(Shape::MAX_SIZE as i8) {
        return None;
    }
    if x < 0 {
        let cut = x.unsigned_abs() as u32;
        if mask & ((1u16 << cut) - 1) != 0 {
            return None;
        }
        Some(mask >> cut)
    } else {
        let shifted = mask << x as u32;
        if shifted & !Grid::FULL_ROW != 0 {
            return None;
        }
        Some(shifted)
    }
}

/// does the shape at (x, y) hit a wall, the floor, or a filled cell?
/// Rows above the board (y + r < 0) are only checked against the walls.
pub fn collides(grid: &Grid, shape: &Shape, x: i8, y: i8) -> bool {
    for r in 0..shape.height() {
        let mask = shape.row_mask(r);
        if mask == 0 {
            continue;
        }
        let Some(bits) = shift_into_row(mask, x) else {
            return true;
        };
        let board_y = y as i32 + r as i32;
        if board_y < 0 {
            continue;
        }
        if board_y >= Grid::HEIGHT as i32 || grid.row(board_y as usize) & bits != 0 {
            return true;
        }
    }
    false
}

/// can we place here? (just !collides)
#[inline]
pub fn can_place(grid: &Grid, shape: &Shape, x: i8, y: i8) -> bool {
    !collides(grid, shape, x, y)
}
