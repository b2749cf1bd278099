//! The terminal frontend.
//!
//! Reads the simulation configuration and the initial grid, then prints the
//! grid as it advances through each generation.

#![warn(missing_docs)]

#[macro_use]
extern crate lazy_static;

use anyhow::{Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{debug, info, warn};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ndlife_core::prelude::*;

mod cli;
mod config;

use cli::{Cli, DEFAULT_GRID_PATH, DEFAULT_PROPERTIES_PATH};
use config::SimConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    simple_logger::init_with_level(cli.log_level())?;
    info!("Starting ndlife v{} ...", env!("CARGO_PKG_VERSION"));

    let config = load_config(&cli, Path::new(DEFAULT_PROPERTIES_PATH))?;
    info!(
        "Simulating {} generations of {} on a {} grid",
        config.generations,
        config.rule,
        config.dimension_sizes.iter().join("x"),
    );

    let initial_coords =
        load_initial_coords(cli.init_grid.as_deref(), Path::new(DEFAULT_GRID_PATH))?;

    let stdout = io::stdout();
    let grid = run(&config, &initial_coords, &mut stdout.lock())?;
    info!(
        "Final population {} of {} cells",
        grid.population(),
        grid.cell_count(),
    );

    if let Some(path) = &cli.output {
        write_live_coords(&grid, path)?;
        info!("Wrote final live cells to {}", path.display());
    }

    Ok(())
}

/// Loads the properties file (or the built-in defaults) and applies
/// command-line overrides, then validates the result.
///
/// `default_path` is read only if no properties file was given on the command
/// line, and only if it exists.
fn load_config(cli: &Cli, default_path: &Path) -> Result<SimConfig> {
    let mut config = match existing_path(cli.props.as_deref(), default_path) {
        Some(path) => {
            debug!("Loading configuration from {}", path.display());
            SimConfig::load(&path)?
        }
        None => {
            warn!(
                "No {} found; using built-in configuration",
                default_path.display(),
            );
            SimConfig::default()
        }
    };

    apply_overrides(cli, &mut config);
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

fn apply_overrides(cli: &Cli, config: &mut SimConfig) {
    if let Some(generations) = cli.generations {
        config.generations = generations;
    }
    if let Some(rule) = &cli.rule {
        config.rule = rule.clone();
    }
    if cli.quiet {
        config.show_intermediate = false;
    }
}

/// Loads the initially live cells, or none if there is no initial grid file.
fn load_initial_coords(path: Option<&Path>, default_path: &Path) -> Result<Vec<Coordinate>> {
    match existing_path(path, default_path) {
        Some(path) => {
            debug!("Loading initial grid from {}", path.display());
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Unable to read initial grid file {}", path.display()))?;
            parse_coords(&contents)
                .with_context(|| format!("Unable to parse initial grid file {}", path.display()))
        }
        None => {
            warn!(
                "No {} found; starting from an empty grid",
                default_path.display(),
            );
            Ok(vec![])
        }
    }
}

/// Returns the explicitly requested path, or the default path if it exists.
///
/// An explicit path is always returned so that a missing file is an error.
fn existing_path(explicit: Option<&Path>, default: &Path) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_owned()),
        None => Some(default.to_owned()).filter(|path| path.is_file()),
    }
}

/// Builds the grid, prints it, runs every generation and prints the final
/// grid. Returns the final grid.
fn run(config: &SimConfig, initial_coords: &[Coordinate], out: &mut impl Write) -> Result<Grid> {
    validate_coords(&config.dimension_sizes, initial_coords)
        .context("Initial grid does not fit the configured dimensions")?;

    let mut grid = build(&config.dimension_sizes)?;
    grid.set_cell_values(initial_coords, true)?;
    debug!("Initial population {}", grid.population());

    writeln!(out, "Initial Grid: ")?;
    writeln!(out, "{}", grid)?;

    let mut render_result: io::Result<()> = Ok(());
    grid.advance_generations(
        config.generations,
        &config.rule,
        config.show_intermediate,
        |generation, grid| {
            if render_result.is_ok() {
                render_result = writeln!(out, "Generation: {}", generation)
                    .and_then(|()| writeln!(out, "{}", grid));
            }
        },
    );
    render_result?;

    writeln!(out, "Final grid after {} generations: ", config.generations)?;
    writeln!(out, "{}", grid)?;
    Ok(grid)
}

/// Writes the positions of all live cells in the initial grid file format.
fn write_live_coords(grid: &Grid, path: &Path) -> Result<()> {
    std::fs::write(path, format_coords(&grid.live_coords()))
        .with_context(|| format!("Unable to write final grid to {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ndlife").chain(args.iter().copied())).unwrap()
    }

    const PROPERTIES: &str = "
grid.size=5,5
generations=3
show.all.generations=T
stay.live=2,3
dead.live=3
";

    #[test]
    fn test_load_config_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let props_path = dir.path().join("life.properties");
        std::fs::write(&props_path, PROPERTIES).unwrap();
        let props_arg = props_path.to_str().unwrap();
        let missing_default = dir.path().join("default.properties");

        let config = load_config(&cli(&["-p", props_arg]), &missing_default).unwrap();
        assert_eq!(vec![5, 5], config.dimension_sizes);
        assert_eq!(3, config.generations);
        assert_eq!(*LIFE, config.rule);
        assert!(config.show_intermediate);

        let config = load_config(
            &cli(&["-p", props_arg, "-g", "7", "-r", "B36/S23", "--quiet"]),
            &missing_default,
        )
        .unwrap();
        assert_eq!(vec![5, 5], config.dimension_sizes);
        assert_eq!(7, config.generations);
        assert_eq!("B36/S23".parse::<Rule>().unwrap(), config.rule);
        assert!(!config.show_intermediate);
    }

    #[test]
    fn test_load_config_validates_after_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let props_path = dir.path().join("life.properties");
        std::fs::write(&props_path, PROPERTIES).unwrap();
        let props_arg = props_path.to_str().unwrap();
        let missing_default = dir.path().join("default.properties");

        assert!(load_config(&cli(&["-p", props_arg, "-g", "1001"]), &missing_default).is_err());
        assert!(load_config(&cli(&["-p", props_arg, "-g", "0"]), &missing_default).is_err());
        assert!(load_config(&cli(&["-p", props_arg, "-g", "1000"]), &missing_default).is_ok());
    }

    #[test]
    fn test_load_config_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.properties");

        // Missing default file falls back to the built-in configuration.
        assert_eq!(
            SimConfig::default(),
            load_config(&cli(&[]), &default_path).unwrap(),
        );

        std::fs::write(&default_path, PROPERTIES).unwrap();
        let config = load_config(&cli(&[]), &default_path).unwrap();
        assert_eq!(vec![5, 5], config.dimension_sizes);
        assert_eq!(3, config.generations);

        // An explicit path that does not exist is an error, even with a
        // default available.
        let missing = dir.path().join("missing.properties");
        assert!(load_config(&cli(&["-p", missing.to_str().unwrap()]), &default_path).is_err());
    }

    #[test]
    fn test_load_initial_coords() {
        let dir = tempfile::tempdir().unwrap();
        let default_path = dir.path().join("default.grid");

        assert_eq!(
            Vec::<Coordinate>::new(),
            load_initial_coords(None, &default_path).unwrap(),
        );

        std::fs::write(&default_path, "# blinker\n1, 2\n2, 2\n3, 2\n").unwrap();
        assert_eq!(
            vec![vec![1, 2], vec![2, 2], vec![3, 2]],
            load_initial_coords(None, &default_path).unwrap(),
        );

        let missing = dir.path().join("missing.grid");
        assert!(load_initial_coords(Some(missing.as_path()), &default_path).is_err());

        let bad = dir.path().join("bad.grid");
        std::fs::write(&bad, "1, x\n").unwrap();
        assert!(load_initial_coords(Some(bad.as_path()), &default_path).is_err());
    }

    #[test]
    fn test_run_output() {
        let config = SimConfig {
            dimension_sizes: vec![5, 5],
            generations: 2,
            rule: LIFE.clone(),
            show_intermediate: true,
        };
        let blinker = vec![vec![1, 2], vec![2, 2], vec![3, 2]];
        let mut out = vec![];
        let grid = run(&config, &blinker, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let horizontal = " - - - - -\n - - - - -\n - O O O -\n - - - - -\n - - - - -\n";
        let vertical = " - - - - -\n - - O - -\n - - O - -\n - - O - -\n - - - - -\n";
        assert_eq!(
            format!(
                "Initial Grid: \n{}\nGeneration: 1\n{}\nFinal grid after 2 generations: \n{}\n",
                horizontal, vertical, horizontal,
            ),
            out,
        );
        assert_eq!(blinker, grid.live_coords());
    }

    #[test]
    fn test_run_quiet_and_bad_initial_grid() {
        let mut config = SimConfig::default();
        config.generations = 3;
        config.show_intermediate = false;
        let mut out = vec![];
        run(&config, &[vec![0, 0]], &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(!out.contains("Generation: "));
        assert!(out.contains("Final grid after 3 generations: "));

        // Default grid is 8 by 6, so this is off-grid along axis 1.
        assert!(run(&config, &[vec![0, 6]], &mut Vec::<u8>::new()).is_err());
        assert!(run(&config, &[vec![0, 0, 0]], &mut Vec::<u8>::new()).is_err());
    }

    #[test]
    fn test_write_live_coords() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("final.grid");
        let mut grid = build(&[4, 4]).unwrap();
        grid.set_cell_values(&[vec![3, 0], vec![1, 2]], true).unwrap();

        write_live_coords(&grid, &path).unwrap();
        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!("3, 0\n1, 2\n", contents);
        assert_eq!(
            grid.live_coords(),
            load_initial_coords(Some(path.as_path()), &path).unwrap(),
        );
    }
}
