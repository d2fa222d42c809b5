use alloc::vec::Vec;
use ndarray::Array2;
use rand::Rng;
use rand::seq::SliceRandom;

use super::*;

/// Uniform placement that always keeps the starting cell safe and, when asked and there is room, its neighbours too.
#[derive(Debug)]
pub struct RandomMineGenerator<'a, R: ?Sized> {
    rng: &'a mut R,
    start_tile: StartTile,
}

impl<'a, R: Rng + ?Sized> RandomMineGenerator<'a, R> {
    pub fn new(rng: &'a mut R, start_tile: StartTile) -> Self {
        Self { rng, start_tile }
    }
}

impl<R: Rng + ?Sized> MineGenerator for RandomMineGenerator<'_, R> {
    fn generate(self, config: GameConfig, start: Option<Coord2>) -> MineLayout {
        use StartTile::*;

        let size = config.size();
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        let start = start.filter(|&(row, col)| row < size.0 && col < size.1);
        let actual_start_tile = match (self.start_tile, start) {
            (SimpleSafe, _) | (_, None) => SimpleSafe,
            (AlwaysZero, Some(coords)) => {
                let zone_size = 1 + neighbors(coords, size).count() as CellCount;
                if config.mines.saturating_add(zone_size) > config.total_cells() {
                    log::warn!("Cannot make start cell zero, fallback to simple safe");
                    SimpleSafe
                } else {
                    AlwaysZero
                }
            }
        };

        // cells that must stay free of mines
        let mut keep_free: Vec<Coord2> = start.into_iter().collect();
        if let (Some(start), AlwaysZero) = (start, actual_start_tile) {
            keep_free.extend(neighbors(start, size));
        }

        let mut candidates: Vec<Coord2> = (0..size.0)
            .flat_map(|row| (0..size.1).map(move |col| (row, col)))
            .filter(|coords| !keep_free.contains(coords))
            .collect();

        let wanted = usize::try_from(config.mines).unwrap_or(usize::MAX);
        if wanted > candidates.len() {
            log::warn!(
                "Board already full, requested {} mines but only {} cells are free",
                config.mines,
                candidates.len()
            );
        }

        let (chosen, _) = candidates.partial_shuffle(self.rng, wanted);
        for &coords in chosen.iter() {
            mine_mask[coords.to_nd_index()] = true;
        }

        let layout = MineLayout::from_mine_mask(mine_mask);
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        log::debug!(
            "Placed {} mines on {:?} with {:?} start at {:?}",
            layout.mine_count(),
            size,
            actual_start_tile,
            start
        );
        layout
    }
}
