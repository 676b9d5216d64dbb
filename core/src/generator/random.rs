use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::*;

/// Uniformly random placement of a fixed number of mines, never on the starting cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomGenerator {
    mines: CellCount,
    seed: u64,
}

impl RandomGenerator {
    pub fn new(mines: CellCount) -> Self {
        Self::with_seed(mines, rand::random())
    }

    /// Same seed, size and starting cell always give the same layout.
    pub const fn with_seed(mines: CellCount, seed: u64) -> Self {
        Self { mines, seed }
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl MinefieldGenerator for RandomGenerator {
    fn validate(&self, size: Coord2) -> Result<()> {
        GameConfig::new_unchecked(size, self.mines).validate()
    }

    fn generate(&mut self, size: Coord2, safe: Coord2) -> Result<Array2<bool>> {
        self.validate(size)?;

        let mut candidates: Vec<Coord2> = iter_positions(size).filter(|&pos| pos != safe).collect();
        let mut rng = SmallRng::seed_from_u64(self.seed);
        // partial Fisher-Yates, the first slice holds the picked positions
        let (picked, _) = candidates.partial_shuffle(&mut rng, self.mines.into());

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in picked.iter() {
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(mine_mask)
    }

    fn mine_count_hint(&self) -> Option<CellCount> {
        Some(self.mines)
    }
}
