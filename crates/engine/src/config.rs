use serde::{Deserialize, Serialize};

/// Points awarded for clearing 1, 2, 3 or 4 lines with a single piece.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTable {
    pub single: u32,
    pub double: u32,
    pub triple: u32,
    pub tetris: u32,
}

impl ScoreTable {
    pub fn classic() -> Self {
        Self {
            single: 100,
            double: 300,
            triple: 500,
            tetris: 800,
        }
    }

    pub fn points(&self, lines: u8) -> u32 {
        match lines {
            0 => 0,
            1 => self.single,
            2 => self.double,
            3 => self.triple,
            _ => self.tetris,
        }
    }
}

impl Default for ScoreTable {
    fn default() -> Self {
        Self::classic()
    }
}
