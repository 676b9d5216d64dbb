use serde::{Deserialize, Serialize};

/// Full state of one board position, mine included.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub has_mine: bool,
    /// Mines among the up to 8 surrounding cells.
    pub neighbor_mines: u8,
    pub revealed: bool,
}

impl Cell {
    /// What a player is allowed to see of this cell.
    pub const fn view(self) -> CellView {
        if self.revealed {
            CellView::Revealed(self.neighbor_mines)
        } else {
            CellView::Hidden
        }
    }
}

/// Player-visible state of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Revealed(u8),
}

impl CellView {
    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed(_))
    }
}
