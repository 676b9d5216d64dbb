//! Board engine for a Minesweeper-style puzzle.
//!
//! A [`Board`] is created with its dimensions and a [`MinefieldGenerator`], commits its mine
//! layout on the first [`Board::click`] (which is always safe), flood-fills zero regions and
//! reports every revealed cell back to the caller as a [`RevealEvent`].

use std::ops::Index;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod types;

/// Board size plus the number of randomly placed mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// At least one cell wide and tall, with at least one safe cell left for the first click.
    pub fn validate(&self) -> Result<()> {
        if self.size.0 == 0 || self.size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let capacity = self.total_cells();
        if self.mines >= capacity {
            return Err(GameError::TooManyMines {
                mines: self.mines,
                capacity,
            });
        }

        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

/// A fixed, pre-drawn mine mask.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let (dim_x, dim_y) = mine_mask.dim();
        if dim_x == 0 || dim_y == 0 {
            return Err(GameError::EmptyBoard);
        }
        let max = usize::from(Coord::MAX);
        if dim_x > max || dim_y > max {
            return Err(GameError::InvalidBoardShape);
        }

        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Ok(Self {
            mine_mask,
            mine_count,
        })
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::EmptyBoard);
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    pub fn size(&self) -> Coord2 {
        let (dim_x, dim_y) = self.mine_mask.dim();
        (dim_x as Coord, dim_y as Coord)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self.mine_mask
            .get(coords.to_nd_index())
            .copied()
            .unwrap_or(false)
    }

    pub fn mine_mask(&self) -> &Array2<bool> {
        &self.mine_mask
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// One cell uncovered by a click, in the order the flood fill reached it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealEvent {
    pub position: Coord2,
    pub neighbor_mines: u8,
}

/// Result of a [`Board::click`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClickOutcome {
    pub state: BoardState,
    pub reveals: Vec<RevealEvent>,
}

impl ClickOutcome {
    pub(crate) const fn without_reveals(state: BoardState) -> Self {
        Self {
            state,
            reveals: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(GameConfig::new((0, 5), 0), Err(GameError::EmptyBoard));
        assert_eq!(GameConfig::new((5, 0), 0), Err(GameError::EmptyBoard));
    }

    #[test]
    fn config_requires_one_safe_cell() {
        assert_eq!(
            GameConfig::new((5, 5), 25),
            Err(GameError::TooManyMines {
                mines: 25,
                capacity: 25
            })
        );

        let config = GameConfig::new((5, 5), 24).unwrap();
        assert_eq!(config.safe_cell_count(), 1);
        assert!(GameConfig::new((1, 1), 0).is_ok());
    }

    #[test]
    fn config_errors_are_configuration_errors() {
        let err = GameConfig::new((2, 2), 9).unwrap_err();

        assert!(err.is_invalid_configuration());
        assert!(!GameError::OutOfBounds.is_invalid_configuration());
    }

    #[test]
    fn config_loads_from_json() {
        let config: GameConfig = serde_json::from_str(r#"{"size":[9,9],"mines":10}"#).unwrap();

        assert_eq!(config, GameConfig::new((9, 9), 10).unwrap());
        assert!(config.validate().is_ok());

        let bogus: GameConfig = serde_json::from_str(r#"{"size":[3,3],"mines":9}"#).unwrap();
        assert!(bogus.validate().unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn layout_from_coords_counts_mines() {
        let layout = MineLayout::from_mine_coords((5, 5), &[(1, 1), (1, 3), (1, 1)]).unwrap();

        assert_eq!(layout.size(), (5, 5));
        assert_eq!(layout.mine_count(), 2);
        assert!(layout[(1, 3)]);
        assert!(!layout.contains_mine((3, 1)));
        assert!(!layout.contains_mine((7, 7)));
    }

    #[test]
    fn layout_rejects_coords_outside_size() {
        assert_eq!(
            MineLayout::from_mine_coords((3, 3), &[(3, 0)]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            MineLayout::from_mine_coords((0, 3), &[]),
            Err(GameError::EmptyBoard)
        );
    }

    #[test]
    fn reveal_event_serializes_position_as_pair() {
        let event = RevealEvent {
            position: (3, 2),
            neighbor_mines: 1,
        };

        assert_eq!(
            serde_json::to_string(&event).unwrap(),
            r#"{"position":[3,2],"neighbor_mines":1}"#
        );
    }
}
