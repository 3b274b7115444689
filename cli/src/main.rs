//! Line-oriented terminal front end for the board engine.

mod command;
mod config;
mod session;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};

use command::Command;
use config::BoardArgs;
use session::{Flow, Session};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,

    /// TOML file with `width`, `height` and `mines`
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(flatten)]
    board: BoardArgs,

    /// Force a seed for the first board instead of a random one
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let board_config = config::load(args.config.as_deref(), &args.board)?;
    log::debug!("Board config: {:?}", board_config);

    let mut session = Session::new(board_config, args.seed);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Commands: r X Y (reveal), f X Y (flag), n (new game), q (quit)")?;
    session.draw(&mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let flow = line
            .parse::<Command>()
            .and_then(|command| session.apply(command));
        match flow {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => session.draw(&mut out)?,
            Err(err) => writeln!(out, "error: {err:#}")?,
        }
    }

    log::debug!("Session ended");
    Ok(())
}
