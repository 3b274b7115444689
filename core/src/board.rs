use alloc::vec;
use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;
use crate::types::grid_size;

/// Valid transitions:
/// - Start -> Playing, when the first reveal places the mines
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// No mines placed yet
    Start,
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub const fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }

    /// Indicates the game has ended and reveals are ignored
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::Start
    }
}

/// One game: the grid, its lifecycle state and the random source used to place its mines.
///
/// All operations are synchronous and take in-bounds positions. Callers that accept positions from the outside should
/// check them with [`Board::validate_coords`] first.
#[derive(Clone, Debug)]
pub struct Board {
    grid: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    state: GameState,
    seed: u64,
    rng: SmallRng,
}

impl Board {
    /// Creates an empty board; mines are placed on the first reveal.
    ///
    /// `config` is not validated: an empty size gives an empty grid, and a mine count above `total - 1` is clamped
    /// during placement.
    pub fn new(config: BoardConfig, seed: u64) -> Self {
        Self {
            grid: Array2::default(config.size().to_nd_index()),
            mine_count: config.mines,
            revealed_count: 0,
            state: GameState::Start,
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Creates a board with fixed mines, skipping placement. The game starts in [`GameState::Playing`].
    pub fn from_layout(layout: MineLayout) -> Self {
        let (mine_mask, mine_count) = layout.into_mine_mask();
        Self {
            grid: mine_mask.map(|&mine| Cell {
                mine,
                ..Cell::default()
            }),
            mine_count,
            revealed_count: 0,
            state: GameState::Playing,
            seed: 0,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    pub fn size(&self) -> Coord2 {
        grid_size(&self.grid)
    }

    pub fn total_cells(&self) -> CellCount {
        self.grid.len() as CellCount
    }

    /// Requested mine count before the first reveal, actual placed count after it.
    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    /// Seed the board was built with; `0` for fixed layouts.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    /// Number of flagged cells, recounted on every call.
    pub fn count_flags(&self) -> CellCount {
        self.grid.iter().filter(|cell| cell.flagged).count() as CellCount
    }

    pub fn mines_left(&self) -> i64 {
        i64::from(self.mine_count) - i64::from(self.count_flags())
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self.grid[coords.to_nd_index()]
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size.0 && coords.1 < size.1 {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// Number of mines among the eight surrounding cells, `None` if `coords` is itself a mine.
    pub fn hint_at(&self, coords: Coord2) -> Option<u8> {
        if self.grid[coords.to_nd_index()].mine {
            return None;
        }
        let count = self
            .grid
            .iter_neighbors(coords, Neighborhood::WithCorners)
            .filter(|&pos| self.grid[pos.to_nd_index()].mine)
            .count();
        Some(count as u8)
    }

    /// Toggles the flag on a cell, in any state and whether or not the cell is revealed.
    pub fn flag(&mut self, coords: Coord2) {
        let cell = &mut self.grid[coords.to_nd_index()];
        cell.flagged = !cell.flagged;
        log::trace!("Toggled flag at {:?}: {}", coords, cell.flagged);
    }

    /// Reveals a cell together with every non-mine cell 4-connected to it.
    ///
    /// The first call places the mines, keeping `coords` safe. The flood fill does not stop at numbered cells, so one
    /// reveal opens the whole connected safe region.
    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if self.state.is_start() {
            self.place_mines(coords);
        }
        if self.state != GameState::Playing {
            return NoChange;
        }

        let cell = self.grid[coords.to_nd_index()];
        if cell.flagged {
            return NoChange;
        }
        if cell.mine {
            log::debug!("Mine hit at {:?}, game lost", coords);
            self.state = GameState::Lost;
            return HitMine;
        }
        if cell.revealed {
            return NoChange;
        }

        let opened = self.flood_reveal(coords);
        log::debug!("Revealed {} cells from {:?}", opened, coords);

        if self.total_cells() - self.revealed_count == self.mine_count {
            log::debug!("All safe cells revealed, game won");
            self.state = GameState::Won;
            Won
        } else {
            Revealed
        }
    }

    fn place_mines(&mut self, safe: Coord2) {
        let requested = self.mine_count;
        self.mine_count = crate::generator::place_mines(&mut self.grid, safe, requested, &mut self.rng);
        self.state = GameState::Playing;
        log::debug!(
            "Placed {} mines (requested {}) around safe cell {:?}, seed {}",
            self.mine_count,
            requested,
            safe,
            self.seed
        );
    }

    /// Marks `start` and its 4-connected non-mine component revealed, returning how many cells changed.
    fn flood_reveal(&mut self, start: Coord2) -> CellCount {
        self.grid[start.to_nd_index()].revealed = true;
        let mut opened = 1;
        let mut to_visit = vec![start];

        while let Some(visit_coords) = to_visit.pop() {
            for pos in self.grid.iter_neighbors(visit_coords, Neighborhood::Cardinal) {
                let cell = &mut self.grid[pos.to_nd_index()];
                if cell.revealed || cell.mine {
                    continue;
                }
                cell.revealed = true;
                opened += 1;
                log::trace!("Flood revealed cell at {:?}", pos);
                to_visit.push(pos);
            }
        }

        self.revealed_count += opened;
        opened
    }
}
