//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

use ndlife_core::prelude::Rule;

/// Properties file read when `--props` is not given.
pub const DEFAULT_PROPERTIES_PATH: &str = "default.properties";
/// Initial grid file read when `--init-grid` is not given.
pub const DEFAULT_GRID_PATH: &str = "default.grid";

/// Runs an N-dimensional Game of Life on a finite grid and prints each
/// generation.
#[derive(Parser, Debug)]
#[command(name = "ndlife")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Properties file with the grid size, generation count and rule
    #[arg(short = 'p', long = "props")]
    pub props: Option<PathBuf>,

    /// File listing the coordinates of the initially live cells
    #[arg(short = 'i', long = "init-grid")]
    pub init_grid: Option<PathBuf>,

    /// Number of generations to simulate (overrides the properties file)
    #[arg(short = 'g', long = "generations")]
    pub generations: Option<u32>,

    /// Rule in B/S notation, such as B3/S23 (overrides the properties file)
    #[arg(short = 'r', long = "rule")]
    pub rule: Option<Rule>,

    /// Only print the initial and final grids
    #[arg(long = "quiet")]
    pub quiet: bool,

    /// Write the coordinates of the final live cells to this file
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Returns the log level selected by the verbosity flags.
    pub fn log_level(&self) -> log::Level {
        match self.verbose {
            0 => log::Level::Info,
            1 => log::Level::Debug,
            _ => log::Level::Trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parse() {
        let cli = Cli::try_parse_from(["ndlife"]).unwrap();
        assert_eq!(None, cli.props);
        assert_eq!(None, cli.rule);
        assert!(!cli.quiet);
        assert_eq!(log::Level::Info, cli.log_level());

        let cli = Cli::try_parse_from([
            "ndlife", "-p", "life.properties", "-g", "12", "-r", "B36/S23", "--quiet", "-vv",
        ])
        .unwrap();
        assert_eq!(Some(PathBuf::from("life.properties")), cli.props);
        assert_eq!(Some(12), cli.generations);
        assert_eq!(Some("B36/S23".parse().unwrap()), cli.rule);
        assert!(cli.quiet);
        assert_eq!(log::Level::Trace, cli.log_level());
    }

    #[test]
    fn test_cli_rejects_bad_rule() {
        assert!(Cli::try_parse_from(["ndlife", "--rule", "not a rule"]).is_err());
        assert!(Cli::try_parse_from(["ndlife", "-g", "-3"]).is_err());
    }
}
