#![no_std]

extern crate alloc;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use render::*;
pub use types::*;

use types::grid_size;

mod board;
mod cell;
mod error;
mod generator;
mod render;
mod types;

/// Board dimensions and the requested number of mines.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
}

impl BoardConfig {
    pub const fn new(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
        }
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.width, self.height)
    }

    /// Most mines that fit while leaving the first revealed cell safe.
    pub const fn max_mines(&self) -> CellCount {
        self.total_cells().saturating_sub(1)
    }

    /// Whether placement will clamp the mine count to [`Self::max_mines`].
    pub const fn is_saturated(&self) -> bool {
        self.mines > self.max_mines()
    }

    /// Rejects degenerate boards.
    ///
    /// Construction never calls this: an oversized mine count saturates and an empty board stays empty. Callers that
    /// want strict input checking run it before [`Board::new`].
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            Err(GameError::EmptyBoard)
        } else {
            Ok(())
        }
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(20, 20, 30)
    }
}

/// A fixed mine arrangement, used to start a board without random placement.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask.iter().filter(|&&is_mine| is_mine).count() as CellCount;
        Self {
            mine_mask,
            mine_count,
        }
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::InvalidCoords);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.mine_mask)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub(crate) fn into_mine_mask(self) -> (Array2<bool>, CellCount) {
        (self.mine_mask, self.mine_count)
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// What a single reveal did to the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
