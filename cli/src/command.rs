use std::str::FromStr;

use anyhow::{Context, bail};
use sweeper_core::{Coord, Coord2};

/// One line of player input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Quit,
}

fn parse_coords<'a>(mut parts: impl Iterator<Item = &'a str>) -> anyhow::Result<Coord2> {
    let (Some(x), Some(y), None) = (parts.next(), parts.next(), parts.next()) else {
        bail!("expected two coordinates, X and Y");
    };
    let x: Coord = x.parse().with_context(|| format!("bad X coordinate {x:?}"))?;
    let y: Coord = y.parse().with_context(|| format!("bad Y coordinate {y:?}"))?;
    Ok((x, y))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut parts = line.split_whitespace();
        let Some(verb) = parts.next() else {
            bail!("empty command");
        };

        Ok(match verb.to_ascii_lowercase().as_str() {
            "r" | "reveal" => Command::Reveal(parse_coords(parts)?),
            "f" | "flag" => Command::Flag(parse_coords(parts)?),
            "n" | "new" => Command::NewGame,
            "q" | "quit" => Command::Quit,
            other => bail!("unknown command {other:?}, expected reveal, flag, new or quit"),
        })
    }
}
