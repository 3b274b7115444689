use ndarray::Array2;
use rand::Rng;

use crate::*;
use crate::types::grid_size;

/// Places up to `requested` mines on an empty grid, never on `safe`, and returns how many were placed.
///
/// Visits every other cell once in row-major order and selects it with probability `mines_left / cells_left`, which
/// yields a uniformly random subset of exactly `requested` cells. When `requested` exceeds the eligible cells every one
/// of them is selected and the returned count saturates at `total - 1`.
pub(crate) fn place_mines<R: Rng + ?Sized>(
    grid: &mut Array2<Cell>,
    safe: Coord2,
    requested: CellCount,
    rng: &mut R,
) -> CellCount {
    let (width, height) = grid_size(grid);
    let safe_index = safe.to_nd_index();
    let mut cells_left = mult(width, height).saturating_sub(1);
    let mut mines_left = requested;
    let mut mines_placed = 0;

    if requested > cells_left {
        log::warn!(
            "Minefield already full, generated anyway, requested {} but only fits {}",
            requested,
            cells_left
        );
    }

    for ((row, col), cell) in grid.indexed_iter_mut() {
        if [row, col] == safe_index {
            continue;
        }
        // only reachable when `safe` lies outside the grid
        if cells_left == 0 {
            break;
        }

        if rng.random_range(0..cells_left) < mines_left {
            cell.mine = true;
            mines_placed += 1;
            mines_left -= 1;
        }
        cells_left -= 1;
    }

    mines_placed
}
