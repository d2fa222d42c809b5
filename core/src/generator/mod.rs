use serde::{Deserialize, Serialize};

use crate::*;
pub use random::*;

mod random;

pub trait MineGenerator {
    /// Produces a layout for `config`; `start` is the first cell the player opens, when known.
    fn generate(self, config: GameConfig, start: Option<Coord2>) -> MineLayout;
}

/// A fixed layout ignores the start cell, useful to replay a known board.
///
/// The board refuses it unless its size and mine count match the config.
impl MineGenerator for MineLayout {
    fn generate(self, _config: GameConfig, _start: Option<Coord2>) -> MineLayout {
        self
    }
}

/// How much room around the first opened cell is kept free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StartTile {
    /// The first cell is never a mine.
    #[default]
    SimpleSafe,
    /// The first cell and all its neighbours are free, so it always opens a region.
    AlwaysZero,
}
