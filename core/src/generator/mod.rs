use ndarray::Array2;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy that decides where a board's mines go.
///
/// A board holds its generator until the first click and asks it for the final mine mask
/// exactly once, passing the clicked position as `safe`. The board clears `safe` itself if the
/// returned mask marks it, so the first click is safe whatever the generator does.
pub trait MinefieldGenerator {
    /// Checks the generator can produce a mask for a board of `size`, called on board
    /// construction.
    fn validate(&self, size: Coord2) -> Result<()> {
        let _ = size;
        Ok(())
    }

    /// Produces the mine mask, indexed by `(x, y)` and shaped exactly `size`.
    ///
    /// Runs inside the first [`Board::click`], so its errors come back from that click and the
    /// board stays uninitialized. A mask of any other shape makes that click fail with
    /// [`GameError::InvalidBoardShape`].
    fn generate(&mut self, size: Coord2, safe: Coord2) -> Result<Array2<bool>>;

    /// Number of mines the generator will place, when known up front.
    fn mine_count_hint(&self) -> Option<CellCount> {
        None
    }
}

impl<G: MinefieldGenerator + ?Sized> MinefieldGenerator for Box<G> {
    fn validate(&self, size: Coord2) -> Result<()> {
        (**self).validate(size)
    }

    fn generate(&mut self, size: Coord2, safe: Coord2) -> Result<Array2<bool>> {
        (**self).generate(size, safe)
    }

    fn mine_count_hint(&self) -> Option<CellCount> {
        (**self).mine_count_hint()
    }
}
