use core::fmt;

use super::*;

/// Places mines exactly as a pre-drawn [`MineLayout`] says.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LayoutGenerator {
    layout: MineLayout,
}

impl LayoutGenerator {
    pub fn new(layout: MineLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &MineLayout {
        &self.layout
    }
}

impl From<MineLayout> for LayoutGenerator {
    fn from(layout: MineLayout) -> Self {
        Self::new(layout)
    }
}

impl MinefieldGenerator for LayoutGenerator {
    fn validate(&self, size: Coord2) -> Result<()> {
        if self.layout.size() == size {
            Ok(())
        } else {
            Err(GameError::InvalidBoardShape)
        }
    }

    fn generate(&mut self, size: Coord2, _safe: Coord2) -> Result<Array2<bool>> {
        self.validate(size)?;
        Ok(self.layout.mine_mask().clone())
    }
}

/// Places a mine wherever `predicate((x, y))` returns `true`.
///
/// The predicate is called exactly once per position, row by row, when the board initializes.
/// It must be a pure function of the position: nothing re-checks its answers, and the neighbor
/// counts are only correct for the layout it reported. The starting cell is asked too, but its
/// answer is overridden.
pub struct PredicateGenerator<F> {
    predicate: F,
}

impl<F> PredicateGenerator<F>
where
    F: FnMut(Coord2) -> bool,
{
    pub fn new(predicate: F) -> Self {
        Self { predicate }
    }
}

impl<F> fmt::Debug for PredicateGenerator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredicateGenerator").finish_non_exhaustive()
    }
}

impl<F> MinefieldGenerator for PredicateGenerator<F>
where
    F: FnMut(Coord2) -> bool,
{
    fn generate(&mut self, size: Coord2, _safe: Coord2) -> Result<Array2<bool>> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for coords in iter_positions(size) {
            mine_mask[coords.to_nd_index()] = (self.predicate)(coords);
        }
        Ok(mine_mask)
    }
}
