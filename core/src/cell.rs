use serde::{Deserialize, Serialize};

/// One grid position.
///
/// `mine` is fixed once placement has run and `revealed` only ever goes from false to true. `flagged` is a free toggle
/// and does not interact with either.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub mine: bool,
    pub flagged: bool,
    pub revealed: bool,
}
