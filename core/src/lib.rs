#![no_std]

extern crate alloc;

use core::ops::{BitOr, Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::DisplayCell;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

/// Board dimensions and mine count, validated on construction.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl GameConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99);

    pub(crate) const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Accepts any positive grid up to `Coord::MAX` per side holding at least one safe cell.
    pub fn new(rows: i64, cols: i64, mines: i64) -> Result<Self> {
        let invalid = GameError::InvalidConfiguration { rows, cols, mines };

        let rows = Coord::try_from(rows).map_err(|_| invalid)?;
        let cols = Coord::try_from(cols).map_err(|_| invalid)?;
        let mines = CellCount::try_from(mines).map_err(|_| invalid)?;
        if rows == 0 || cols == 0 || mines >= mult(rows, cols) {
            return Err(invalid);
        }

        Ok(Self::new_unchecked(rows, cols, mines))
    }

    /// Re-checks a config whose public fields may have been set directly.
    pub fn validate(self) -> Result<Self> {
        Self::new(self.rows.into(), self.cols.into(), self.mines.into())
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

/// Where the mines are, independent of any play state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count();
        Self {
            mine_mask,
            mine_count: CellCount::try_from(mine_count).unwrap_or(CellCount::MAX),
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (
            Coord::try_from(rows).unwrap_or(Coord::MAX),
            Coord::try_from(cols).unwrap_or(Coord::MAX),
        )
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        let count = neighbors(coords, self.size()).filter(|&pos| self[pos]).count();
        // at most 8 neighbours
        count as u8
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for MineLayout {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.mine_mask[coords.to_nd_index()]
    }
}

/// Outcome of revealing a cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealResult {
    /// A safe cell (and possibly a flood-filled region) was revealed.
    Continue,
    /// A mine was revealed and the game is lost.
    HitMine,
    OutOfBounds,
    /// The cell is already revealed or flagged, nothing changed.
    AlreadyActed,
    /// The game has already been won or lost, nothing changed.
    Finished,
}

impl RevealResult {
    /// Whether this outcome could have caused an update to the board
    pub const fn has_update(self) -> bool {
        matches!(self, Self::Continue | Self::HitMine)
    }
}

/// Used to merge outcomes when chord revealing
impl BitOr for RevealResult {
    type Output = RevealResult;

    fn bitor(self, rhs: Self) -> Self::Output {
        use RevealResult::*;
        match (self, rhs) {
            (HitMine, _) | (_, HitMine) => HitMine,
            (Continue, _) | (_, Continue) => Continue,
            (lhs, _) => lhs,
        }
    }
}

/// Outcome of toggling a flag.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlagResult {
    Flagged,
    Unflagged,
    /// Out of bounds, already revealed, or the game is over.
    Rejected,
}

impl FlagResult {
    pub const fn has_update(self) -> bool {
        !matches!(self, Self::Rejected)
    }
}
