use std::fs;
use std::path::Path;

use anyhow::Context;
use clap::Args;
use sweeper_core::{BoardConfig, CellCount, Coord};

/// Board settings given on the command line; each one overrides the config file.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct BoardArgs {
    /// Board width in cells
    #[arg(long)]
    pub width: Option<Coord>,

    /// Board height in cells
    #[arg(long)]
    pub height: Option<Coord>,

    /// Number of mines, clamped to what fits beside the first revealed cell
    #[arg(short, long)]
    pub mines: Option<CellCount>,
}

impl BoardArgs {
    pub fn apply(&self, config: BoardConfig) -> BoardConfig {
        BoardConfig {
            width: self.width.unwrap_or(config.width),
            height: self.height.unwrap_or(config.height),
            mines: self.mines.unwrap_or(config.mines),
        }
    }
}

/// Parses a TOML board config; missing keys keep their defaults.
pub fn parse_config(text: &str) -> anyhow::Result<BoardConfig> {
    toml::from_str(text).context("malformed board config")
}

/// Layers defaults, then the optional config file, then command line overrides.
pub fn load(path: Option<&Path>, overrides: &BoardArgs) -> anyhow::Result<BoardConfig> {
    let base = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("could not read config file {}", path.display()))?;
            parse_config(&text)?
        }
        None => BoardConfig::default(),
    };

    let config = overrides.apply(base);
    config.validate().context("invalid board configuration")?;
    if config.is_saturated() {
        log::warn!(
            "{} mines requested but only {} fit, the board will be full",
            config.mines,
            config.max_mines()
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_defaults() {
        let config = parse_config("width = 9\nmines = 10\n").unwrap();
        assert_eq!(config, BoardConfig::new(9, 20, 10));
    }

    #[test]
    fn malformed_file_is_rejected() {
        assert!(parse_config("width = \"wide\"").is_err());
    }

    #[test]
    fn flags_override_file_values() {
        let overrides = BoardArgs {
            height: Some(4),
            mines: Some(2),
            ..Default::default()
        };
        let config = overrides.apply(BoardConfig::new(9, 9, 10));
        assert_eq!(config, BoardConfig::new(9, 4, 2));
    }

    #[test]
    fn load_without_file_uses_defaults() {
        let config = load(None, &BoardArgs::default()).unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn load_rejects_empty_board() {
        let overrides = BoardArgs {
            width: Some(0),
            ..Default::default()
        };
        assert!(load(None, &overrides).is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load(Some(Path::new("/nonexistent/sweeper.toml")), &BoardArgs::default()).unwrap_err();
        assert!(err.to_string().contains("could not read config file"));
    }
}
