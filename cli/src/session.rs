use std::io::{self, Write};

use sweeper_core::{Board, BoardConfig, GameState, RevealOutcome};

use crate::command::Command;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// One player's game loop: owns the current board and turns commands into engine calls.
#[derive(Debug)]
pub struct Session {
    config: BoardConfig,
    board: Board,
}

impl Session {
    /// Starts a session; without a seed the first board draws one from system entropy.
    pub fn new(config: BoardConfig, seed: Option<u64>) -> Self {
        let board = Self::new_board(config, seed.unwrap_or_else(rand::random));
        Self { config, board }
    }

    fn new_board(config: BoardConfig, seed: u64) -> Board {
        log::info!(
            "Starting {}x{} board with {} mines, seed {}",
            config.width,
            config.height,
            config.mines,
            seed
        );
        Board::new(config, seed)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn apply(&mut self, command: Command) -> anyhow::Result<Flow> {
        match command {
            Command::Reveal(coords) => {
                let coords = self.board.validate_coords(coords)?;
                let outcome = self.board.reveal(coords);
                if outcome.has_update() {
                    log::debug!("Reveal at {:?}: {:?}", coords, outcome);
                }
                if outcome == RevealOutcome::HitMine {
                    log::info!("Game lost, seed {}", self.board.seed());
                }
            }
            Command::Flag(coords) => {
                let coords = self.board.validate_coords(coords)?;
                self.board.flag(coords);
            }
            Command::NewGame => {
                self.board = Self::new_board(self.config, rand::random());
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    pub fn status(&self) -> String {
        match self.board.state() {
            GameState::Won => "You Won!".to_string(),
            GameState::Lost => "You Lost".to_string(),
            GameState::Start | GameState::Playing => format!(
                "Mines: {}  Flags: {}",
                self.board.mine_count(),
                self.board.count_flags()
            ),
        }
    }

    pub fn draw<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self.board.render())?;
        writeln!(out, "{}", self.status())?;
        out.flush()
    }
}
