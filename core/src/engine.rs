use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::Array2;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::*;

/// Valid transitions:
/// - Ready -> Active
/// - Ready -> Won
/// - Ready -> Lost
/// - Active -> Won
/// - Active -> Lost
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Nothing revealed yet
    #[default]
    Ready,
    Active,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_ready(self) -> bool {
        matches!(self, Self::Ready)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Represents a game from the first click to a win or loss.
///
/// Mines are placed lazily on the first reveal so that cell is never a mine, unless [`Board::place_mines`] was called
/// before or the board was built from a fixed [`MineLayout`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    config: GameConfig,
    cells: Array2<Cell>,
    revealed_count: CellCount,
    flagged_count: Saturating<CellCount>,
    mines_placed: bool,
    game_over: bool,
    triggered_mine: Option<Coord2>,
    seed: u64,
    start_tile: StartTile,
}

impl Board {
    /// Empty board, fails when the dimensions are not positive or there is no room for a safe cell.
    pub fn new(rows: i64, cols: i64, mine_count: i64) -> Result<Self> {
        GameConfig::new(rows, cols, mine_count).map(Self::empty)
    }

    /// Same checks as [`Board::new`], for a config whose fields may have been set by hand.
    pub fn from_config(config: GameConfig) -> Result<Self> {
        config.validate().map(Self::empty)
    }

    fn empty(config: GameConfig) -> Self {
        Self {
            config,
            cells: Array2::default(config.size().to_nd_index()),
            revealed_count: 0,
            flagged_count: Saturating(0),
            mines_placed: false,
            game_over: false,
            triggered_mine: None,
            seed: 0,
            start_tile: StartTile::default(),
        }
    }

    /// Board with mines already in place, the first click is not protected.
    pub fn from_layout(layout: MineLayout) -> Result<Self> {
        let (rows, cols) = layout.size();
        let config = GameConfig::new(rows.into(), cols.into(), layout.mine_count().into())?;
        let mut board = Self::empty(config);
        board.place_mines_with(layout, None);
        Ok(board)
    }

    /// Seed used when mines are placed lazily by the first reveal.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_start_tile(mut self, start_tile: StartTile) -> Self {
        self.start_tile = start_tile;
        self
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn size(&self) -> Coord2 {
        self.config.size()
    }

    pub fn rows(&self) -> Coord {
        self.config.rows
    }

    pub fn cols(&self) -> Coord {
        self.config.cols
    }

    pub fn mine_count(&self) -> CellCount {
        self.config.mines
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.config.safe_cell_count()
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// How many mines have not been flagged yet, negative when over-flagged
    pub fn mines_left(&self) -> i64 {
        i64::from(self.config.mines) - i64::from(self.flagged_count.0)
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn start_tile(&self) -> StartTile {
        self.start_tile
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// A mine has been revealed.
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn has_won(&self) -> bool {
        !self.game_over && self.revealed_count == self.safe_cell_count()
    }

    pub fn state(&self) -> GameState {
        if self.game_over {
            GameState::Lost
        } else if self.has_won() {
            GameState::Won
        } else if self.revealed_count == 0 {
            GameState::Ready
        } else {
            GameState::Active
        }
    }

    /// Returns the board to how [`Board::from_config`] left it, keeping seed and start policy.
    pub fn reset(&mut self) {
        log::debug!("Resetting {:?} board", self.config);
        *self = Self::empty(self.config)
            .with_seed(self.seed)
            .with_start_tile(self.start_tile);
    }

    /// Same as [`Board::reset`], but the next lazy placement uses `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        self.reset();
    }

    /// Places mines using `rng`, keeping `exclude` free according to the start policy.
    ///
    /// Only the first call has an effect, later calls return `false`.
    pub fn place_mines<R: Rng + ?Sized>(&mut self, exclude: Option<Coord2>, rng: &mut R) -> bool {
        if self.mines_placed {
            return false;
        }
        if let Some(coords) = exclude
            && locate((coords.0.into(), coords.1.into()), self.size()).is_none()
        {
            log::warn!("Ignoring excluded cell {:?} outside the board", coords);
        }
        self.place_mines_with(RandomMineGenerator::new(rng, self.start_tile), exclude)
    }

    /// Places mines from any generator, same once-only rule as [`Board::place_mines`].
    ///
    /// A layout whose size or mine count differs from the board's config is rejected and nothing is placed.
    pub fn place_mines_with<G: MineGenerator>(&mut self, generator: G, exclude: Option<Coord2>) -> bool {
        if self.mines_placed {
            return false;
        }

        let layout = generator.generate(self.config, exclude);
        if layout.size() != self.size() || layout.mine_count() != self.mine_count() {
            log::warn!(
                "Rejecting {}-mine layout of size {:?} for {:?} board",
                layout.mine_count(),
                layout.size(),
                self.config
            );
            return false;
        }

        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let cell = &mut self.cells[(row, col).to_nd_index()];
                cell.is_mine = layout.contains_mine((row, col));
                cell.adjacent_mine_count = layout.adjacent_mine_count((row, col));
            }
        }

        self.mines_placed = true;
        true
    }

    pub fn reveal(&mut self, row: i32, col: i32) -> RevealResult {
        let Some(coords) = locate((row, col), self.size()) else {
            return RevealResult::OutOfBounds;
        };
        if self.is_finished() {
            return RevealResult::Finished;
        }
        if !self.cells[coords.to_nd_index()].is_hidden() {
            return RevealResult::AlreadyActed;
        }

        if !self.mines_placed {
            let mut rng = SmallRng::seed_from_u64(self.seed);
            self.place_mines(Some(coords), &mut rng);
        }

        self.reveal_single_cell(coords)
    }

    /// Reveals every hidden neighbour of a numbered cell once the matching number of flags surround it, otherwise
    /// behaves like [`Board::reveal`].
    pub fn chord_reveal(&mut self, row: i32, col: i32) -> RevealResult {
        let Some(coords) = locate((row, col), self.size()) else {
            return RevealResult::OutOfBounds;
        };
        if self.is_finished() {
            return RevealResult::Finished;
        }

        let cell = self.cells[coords.to_nd_index()];
        if !cell.is_revealed {
            return self.reveal(row, col);
        }
        if cell.adjacent_mine_count == 0 || cell.adjacent_mine_count != self.count_flagged_neighbors(coords) {
            return RevealResult::AlreadyActed;
        }

        let mut outcome = RevealResult::AlreadyActed;
        for pos in neighbors(coords, self.size()) {
            if self.game_over {
                break;
            }
            if self.cells[pos.to_nd_index()].is_hidden() {
                outcome = outcome | self.reveal_single_cell(pos);
            }
        }
        outcome
    }

    pub fn toggle_flag(&mut self, row: i32, col: i32) -> FlagResult {
        let Some(coords) = locate((row, col), self.size()) else {
            return FlagResult::Rejected;
        };
        if self.is_finished() {
            return FlagResult::Rejected;
        }

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.is_revealed {
            return FlagResult::Rejected;
        }

        cell.is_flagged = !cell.is_flagged;
        if cell.is_flagged {
            self.flagged_count += 1;
            FlagResult::Flagged
        } else {
            self.flagged_count -= 1;
            FlagResult::Unflagged
        }
    }

    /// Read-only render of the board. Mines only show when revealed, or everywhere with `reveal_all`.
    pub fn snapshot(&self, reveal_all: bool) -> Array2<DisplayCell> {
        let mut grid = Array2::default(self.size().to_nd_index());
        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let coords = (row, col);
                let exploded = self.triggered_mine == Some(coords);
                grid[coords.to_nd_index()] = self.cells[coords.to_nd_index()].display(reveal_all, exploded);
            }
        }
        grid
    }

    fn is_finished(&self) -> bool {
        self.state().is_finished()
    }

    /// Opens a single hidden cell and flood-fills from it when it has no adjacent mines.
    fn reveal_single_cell(&mut self, coords: Coord2) -> RevealResult {
        let cell = {
            let cell = &mut self.cells[coords.to_nd_index()];
            cell.is_revealed = true;
            *cell
        };
        self.revealed_count += 1;

        if cell.is_mine {
            self.triggered_mine = Some(coords);
            self.game_over = true;
            log::debug!("Hit mine at {:?}, game lost", coords);
            return RevealResult::HitMine;
        }

        log::debug!("Revealed cell at {:?}, mine count: {}", coords, cell.adjacent_mine_count);
        if cell.adjacent_mine_count == 0 {
            self.flood_fill(coords);
        }

        if self.has_won() {
            log::debug!("All {} safe cells revealed, game won", self.revealed_count);
        }
        RevealResult::Continue
    }

    /// Reveals the region connected to the zero cell at `origin` through other zero cells.
    fn flood_fill(&mut self, origin: Coord2) {
        let mut to_visit: Vec<Coord2> = self.hidden_neighbors(origin).collect();
        log::trace!("Starting flood-fill from {:?}, initial neighbors: {:?}", origin, to_visit);

        while let Some(visit_coords) = to_visit.pop() {
            let cell = &mut self.cells[visit_coords.to_nd_index()];
            // queued twice, or flagged
            if !cell.is_hidden() || cell.is_mine {
                continue;
            }

            cell.is_revealed = true;
            self.revealed_count += 1;
            log::trace!("Flood opened cell at {:?}, mine count: {}", visit_coords, cell.adjacent_mine_count);

            if cell.adjacent_mine_count == 0 {
                to_visit.extend(self.hidden_neighbors(visit_coords));
            }
        }
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<'_> {
        neighbors(coords, self.size()).filter(|&pos| self.cells[pos.to_nd_index()].is_hidden())
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        let count = neighbors(coords, self.size())
            .filter(|&pos| self.cells[pos.to_nd_index()].is_flagged)
            .count();
        count as u8
    }
}
