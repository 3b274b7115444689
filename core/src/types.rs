use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Single coordinate axis used for board width, height, and positions.
pub type Coord = u16;

/// Count type used for mine counts and total-cell counts.
pub type CellCount = u32;

/// Two-dimensional coordinates `(x, y)`: column first, then row.
///
/// Sizes use the same shape, `(width, height)`.
pub type Coord2 = (Coord, Coord);

/// Converts `(x, y)` coordinates into the `[row, col]` index used by the grid storage.
pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.1.into(), self.0.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// `(width, height)` of a grid stored as `[row, col]`.
pub(crate) fn grid_size<T>(grid: &Array2<T>) -> Coord2 {
    let (rows, cols) = grid.dim();
    (cols as Coord, rows as Coord)
}

/// Which positions count as adjacent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Neighborhood {
    /// Up, down, left and right only.
    Cardinal,
    /// Cardinal neighbors plus the four diagonals.
    WithCorners,
}

impl Neighborhood {
    const fn includes(self, (dx, dy): (isize, isize)) -> bool {
        match self {
            Self::Cardinal => dx == 0 || dy == 0,
            Self::WithCorners => true,
        }
    }
}

pub trait NeighborIterExt {
    fn iter_neighbors(&self, index: Coord2, neighborhood: Neighborhood) -> NeighborIter;
}

impl<T> NeighborIterExt for Array2<T> {
    fn iter_neighbors(&self, index: Coord2, neighborhood: Neighborhood) -> NeighborIter {
        NeighborIter::new(index, grid_size(self), neighborhood)
    }
}

const DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (x, y) = coords;
    let (dx, dy) = delta;
    let (max_x, max_y) = bounds;

    let next_x = x.checked_add_signed(dx.try_into().ok()?)?;
    if next_x >= max_x {
        return None;
    }

    let next_y = y.checked_add_signed(dy.try_into().ok()?)?;
    if next_y >= max_y {
        return None;
    }

    Some((next_x, next_y))
}

/// In-bounds neighbors of a position, in row-major order.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    neighborhood: Neighborhood,
    index: u8,
}

impl NeighborIter {
    pub fn new(center: Coord2, bounds: Coord2, neighborhood: Neighborhood) -> Self {
        Self {
            center,
            bounds,
            neighborhood,
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let delta = *DISPLACEMENTS.get(usize::from(self.index))?;
            self.index += 1;

            if !self.neighborhood.includes(delta) {
                continue;
            }

            if let Some(next_item) = apply_delta(self.center, delta, self.bounds) {
                return Some(next_item);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn assert_neighbors(center: Coord2, bounds: Coord2, neighborhood: Neighborhood, expected: &[Coord2]) {
        let actual: Vec<Coord2> = NeighborIter::new(center, bounds, neighborhood).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn interior_cell_has_eight_or_four_neighbors() {
        assert_neighbors(
            (1, 1),
            (3, 3),
            Neighborhood::WithCorners,
            &[(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)],
        );
        assert_neighbors(
            (1, 1),
            (3, 3),
            Neighborhood::Cardinal,
            &[(1, 0), (0, 1), (2, 1), (1, 2)],
        );
    }

    #[test]
    fn corner_cell_is_clipped_to_bounds() {
        assert_neighbors((0, 0), (3, 3), Neighborhood::WithCorners, &[(1, 0), (0, 1), (1, 1)]);
        assert_neighbors((2, 2), (3, 3), Neighborhood::Cardinal, &[(2, 1), (1, 2)]);
    }

    #[test]
    fn single_cell_board_has_no_neighbors() {
        assert_neighbors((0, 0), (1, 1), Neighborhood::WithCorners, &[]);
    }

    #[test]
    fn nd_index_is_row_major() {
        assert_eq!((3, 1).to_nd_index(), [1, 3]);
        let grid: Array2<u8> = Array2::default((2, 5).to_nd_index());
        assert_eq!(grid.dim(), (5, 2));
        assert_eq!(grid_size(&grid), (2, 5));
    }
}
