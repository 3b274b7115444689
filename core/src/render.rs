use core::fmt;
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::*;
use crate::types::grid_size;

pub const FLAG_GLYPH: char = '√';
pub const MINE_GLYPH: char = '*';
pub const BLANK_GLYPH: char = ' ';

/// Terminal palette used by the projector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Default,
    Black,
    Blue,
    White,
}

impl Default for Color {
    fn default() -> Self {
        Self::Default
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayCell {
    pub glyph: char,
    pub fg: Color,
    pub bg: Color,
}

impl DisplayCell {
    pub const fn covered(glyph: char) -> Self {
        Self {
            glyph,
            fg: Color::Default,
            bg: Color::Blue,
        }
    }

    pub const fn revealed(glyph: char) -> Self {
        Self {
            glyph,
            fg: Color::Black,
            bg: Color::White,
        }
    }
}

impl Default for DisplayCell {
    fn default() -> Self {
        Self::covered(BLANK_GLYPH)
    }
}

/// Display buffer produced by [`Board::render`], one cell per board position.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    cells: Array2<DisplayCell>,
}

impl Frame {
    pub fn size(&self) -> Coord2 {
        grid_size(&self.cells)
    }

    pub fn get(&self, coords: Coord2) -> Option<DisplayCell> {
        self.cells.get(coords.to_nd_index()).copied()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = ArrayView1<'_, DisplayCell>> {
        self.cells.rows().into_iter()
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row.iter() {
                write!(f, "{}", cell.glyph)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl Board {
    /// Projects the grid into a display buffer without touching game state.
    pub fn render(&self) -> Frame {
        let (width, height) = self.size();
        let cells = Array2::from_shape_fn((width, height).to_nd_index(), |(row, col)| {
            self.project((col as Coord, row as Coord))
        });
        Frame { cells }
    }

    fn project(&self, coords: Coord2) -> DisplayCell {
        let cell = self.cell_at(coords);

        // a flag wins over the revealed hint
        if cell.flagged {
            DisplayCell::covered(FLAG_GLYPH)
        } else if cell.revealed {
            let glyph = match self.hint_at(coords) {
                Some(count @ 1..=8) => char::from(b'0' + count),
                _ => BLANK_GLYPH,
            };
            DisplayCell::revealed(glyph)
        } else if cell.mine && self.state().is_finished() {
            DisplayCell::covered(MINE_GLYPH)
        } else {
            DisplayCell::covered(BLANK_GLYPH)
        }
    }
}
