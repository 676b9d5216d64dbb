use ndarray::Array2;

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u8;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(x, y)`.
pub type Coord2 = (Coord, Coord);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

/// Cell count of a `a` by `b` board. Never overflows for `Coord` inputs.
pub const fn mult(a: Coord, b: Coord) -> CellCount {
    (a as CellCount) * (b as CellCount)
}

/// All positions of a board of the given size, row by row.
pub fn iter_positions((size_x, size_y): Coord2) -> impl Iterator<Item = Coord2> {
    (0..size_y).flat_map(move |y| (0..size_x).map(move |x| (x, y)))
}

/// In-bounds positions of the Moore neighborhood around `center`.
///
/// Yields at most 8 positions, never `center` itself.
#[derive(Clone, Debug)]
pub struct Neighbors {
    center: Coord2,
    bounds: Coord2,
    // 3x3 window, slot 4 is the center
    slot: u8,
}

impl Neighbors {
    pub fn new(center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            slot: 0,
        }
    }
}

impl Iterator for Neighbors {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        while self.slot < 9 {
            let slot = self.slot;
            self.slot += 1;
            if slot == 4 {
                continue;
            }

            let dx = (slot % 3) as i8 - 1;
            let dy = (slot / 3) as i8 - 1;
            let (Some(x), Some(y)) = (
                self.center.0.checked_add_signed(dx),
                self.center.1.checked_add_signed(dy),
            ) else {
                continue;
            };

            if x < self.bounds.0 && y < self.bounds.1 {
                return Some((x, y));
            }
        }
        None
    }
}

pub trait NeighborsExt {
    fn neighbors(&self, coords: Coord2) -> Neighbors;
}

impl<T> NeighborsExt for Array2<T> {
    fn neighbors(&self, coords: Coord2) -> Neighbors {
        let (dim_x, dim_y) = self.dim();
        // grids are always allocated from a `Coord2` size
        Neighbors::new(coords, (dim_x as Coord, dim_y as Coord))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(iter: impl Iterator<Item = Coord2>) -> Vec<Coord2> {
        let mut items: Vec<_> = iter.collect();
        items.sort();
        items
    }

    #[test]
    fn interior_cell_has_eight_neighbors() {
        let neighbors = sorted(Neighbors::new((1, 1), (3, 3)));

        assert_eq!(
            neighbors,
            vec![
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2)
            ]
        );
    }

    #[test]
    fn corner_neighbors_are_clipped() {
        assert_eq!(
            sorted(Neighbors::new((0, 0), (5, 5))),
            vec![(0, 1), (1, 0), (1, 1)]
        );
        assert_eq!(
            sorted(Neighbors::new((4, 4), (5, 5))),
            vec![(3, 3), (3, 4), (4, 3)]
        );
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_eq!(Neighbors::new((0, 0), (1, 1)).count(), 0);
    }

    #[test]
    fn positions_cover_board_row_by_row() {
        let positions: Vec<_> = iter_positions((2, 3)).collect();

        assert_eq!(positions, vec![(0, 0), (1, 0), (0, 1), (1, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn largest_board_fits_cell_count() {
        assert_eq!(mult(Coord::MAX, Coord::MAX), 65025);
    }
}
