//! Piece kinds, rotation states and the precomputed shape table.

use serde::{Deserialize, Serialize};

use crate::Shape;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Piece {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Rotation state for an index, wrapping modulo 4
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    pub fn cw(self) -> Self {
        match self {
            Self::North => Self::East,
            Self::East => Self::South,
            Self::South => Self::West,
            Self::West => Self::North,
        }
    }

    pub fn ccw(self) -> Self {
        match self {
            Self::North => Self::West,
            Self::West => Self::South,
            Self::South => Self::East,
            Self::East => Self::North,
        }
    }
}

/// Anything that can hand out the shape of each of its four rotation states.
pub trait Rotations {
    fn shape_for(&self, rotation: Rotation) -> &Shape;
}

/// SHAPE_TABLE[piece][rotation], built at compile time by turning each base
/// shape clockwise.
const SHAPE_TABLE: [[Shape; 4]; 7] = {
    let mut table = [[Shape::from_pattern(&["#"]); 4]; 7];
    let mut p = 0;
    while p < 7 {
        let mut shape = Piece::ALL[p].base_shape();
        let mut r = 0;
        while r < 4 {
            table[p][r] = shape;
            shape = shape.rotated_cw();
            r += 1;
        }
        p += 1;
    }
    table
};

impl Piece {
    pub const ALL: [Piece; 7] = [
        Piece::I,
        Piece::O,
        Piece::T,
        Piece::S,
        Piece::Z,
        Piece::J,
        Piece::L,
    ];

    const fn base_shape(self) -> Shape {
        match self {
            Piece::I => Shape::from_pattern(&["####"]),
            Piece::O => Shape::from_pattern(&["##", "##"]),
            Piece::T => Shape::from_pattern(&[".#.", "###"]),
            Piece::S => Shape::from_pattern(&[".##", "##."]),
            Piece::Z => Shape::from_pattern(&["##.", ".##"]),
            Piece::J => Shape::from_pattern(&["#..", "###"]),
            Piece::L => Shape::from_pattern(&["..#", "###"]),
        }
    }

    /// Shape of this piece in the given rotation state. Pure table lookup.
    #[inline(always)]
    pub fn shape(self, rotation: Rotation) -> &'static Shape {
        &SHAPE_TABLE[self as usize][rotation.index()]
    }

    pub fn with_rotation(self, rotation: Rotation) -> OrientedPiece {
        OrientedPiece {
            piece: self,
            rotation,
        }
    }

    /// Spawn column: the shape is centred on the board, rounding left.
    pub fn spawn_x(self, board_width: usize) -> i8 {
        (board_width / 2 - self.shape(Rotation::North).width() / 2) as i8
    }

    pub fn name(self) -> &'static str {
        match self {
            Piece::I => "I",
            Piece::O => "O",
            Piece::T => "T",
            Piece::S => "S",
            Piece::Z => "Z",
            Piece::J => "J",
            Piece::L => "L",
        }
    }
}

/// A piece kind fixed in one rotation state. Turning yields a new value.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct OrientedPiece {
    pub piece: Piece,
    pub rotation: Rotation,
}

impl OrientedPiece {
    #[inline(always)]
    pub fn shape(self) -> &'static Shape {
        self.piece.shape(self.rotation)
    }

    pub fn cw(self) -> Self {
        self.piece.with_rotation(self.rotation.cw())
    }

    pub fn ccw(self) -> Self {
        self.piece.with_rotation(self.rotation.ccw())
    }
}

impl Rotations for Piece {
    fn shape_for(&self, rotation: Rotation) -> &Shape {
        self.shape(rotation)
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
