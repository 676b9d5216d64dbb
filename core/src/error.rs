use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board must be at least 1x1")]
    EmptyBoard,
    #[error("Too many mines, requested {mines} but the board needs at least one safe cell out of {capacity}")]
    TooManyMines { mines: CellCount, capacity: CellCount },
    #[error("Mine layout shape does not match the board size")]
    InvalidBoardShape,
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Flood fill started on a mined cell")]
    FloodFillOnMine,
}

impl GameError {
    /// Errors that prevent a board from being constructed at all.
    pub const fn is_invalid_configuration(self) -> bool {
        matches!(
            self,
            Self::EmptyBoard | Self::TooManyMines { .. } | Self::InvalidBoardShape
        )
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
