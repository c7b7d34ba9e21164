use autodrop_core::{Grid, Placement, Rotations, Shape};

/// Write the shape's occupied cells into the grid at (x, y).
/// Cells that fall outside the board are skipped.
pub fn place_shape(grid: &mut Grid, shape: &Shape, x: i8, y: i8) {
    for (r, c) in shape.cells() {
        let gx = x as i32 + c as i32;
        let gy = y as i32 + r as i32;
        if gx >= 0 && gy >= 0 && gx < Grid::WIDTH as i32 && gy < Grid::HEIGHT as i32 {
            grid.set(gx as usize, gy as usize, true);
        }
    }
}

/// Copy of `grid` with the shape locked at (x, y). No lines are cleared.
pub fn with_shape(grid: &Grid, shape: &Shape, x: i8, y: i8) -> Grid {
    let mut next = *grid;
    place_shape(&mut next, shape, x, y);
    next
}

/// Apply a placement to a grid and return the resulting grid and lines cleared.
pub fn apply_placement<P: Rotations + ?Sized>(
    grid: &Grid,
    piece: &P,
    placement: &Placement,
) -> (Grid, u8) {
    let shape = piece.shape_for(placement.rotation);
    let mut next = with_shape(grid, shape, placement.x, placement.y);
    let lines = next.clear_lines();
    (next, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autodrop_core::{Piece, Rotation};

    #[test]
    fn test_apply_t_piece_empty() {
        let grid = Grid::new();
        let placement = Placement::new(Rotation::North, 4, 18, 0.0);
        let (next, lines) = apply_placement(&grid, &Piece::T, &placement);

        assert_eq!(lines, 0);
        // T north at (4, 18): (5, 18), (4, 19), (5, 19), (6, 19)
        assert!(next.get(5, 18));
        assert!(next.get(4, 19));
        assert!(next.get(5, 19));
        assert!(next.get(6, 19));
        assert_eq!(next.filled_cells(), 4);
    }

    #[test]
    fn test_apply_i_piece_line_clear() {
        let mut grid = Grid::new();
        // fill the bottom row except columns 3..=6
        for x in 0..Grid::WIDTH {
            if !(3..=6).contains(&x) {
                grid.set(x, 19, true);
            }
        }

        let placement = Placement::new(Rotation::North, 3, 19, 0.0);
        let (next, lines) = apply_placement(&grid, &Piece::I, &placement);

        assert_eq!(lines, 1);
        assert_eq!(next.filled_cells(), 0);
    }

    #[test]
    fn test_with_shape_leaves_source_untouched() {
        let grid = Grid::new();
        let next = with_shape(&grid, Piece::O.shape(Rotation::North), 0, 18);
        assert_eq!(grid.filled_cells(), 0);
        assert_eq!(next.filled_cells(), 4);
    }

    #[test]
    fn test_place_shape_clips_outside_cells() {
        let mut grid = Grid::new();
        place_shape(&mut grid, Piece::I.shape(Rotation::East), 0, -2);
        // rows -2 and -1 are above the board
        assert!(grid.get(0, 0));
        assert!(grid.get(0, 1));
        assert_eq!(grid.filled_cells(), 2);
    }
}
