//! autodrop core crate - grid, piece and placement types shared by every layer.

mod error;
mod grid;
mod heights;
mod piece;
mod placement;
mod shape;

pub use error::{GridError, ShapeError};
pub use grid::Grid;
pub use heights::ColumnHeights;
pub use piece::{OrientedPiece, Piece, Rotation, Rotations};
pub use placement::Placement;
pub use shape::{Shape, ShapeSet};
