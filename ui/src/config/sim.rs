use anyhow::{bail, Context, Result};
use std::path::Path;

use ndlife_core::prelude::*;

use super::Properties;

/// Property key for the size of each dimension, comma-separated.
pub const GRID_SIZE_KEY: &str = "grid.size";
/// Property key for the number of generations to simulate.
pub const GENERATIONS_KEY: &str = "generations";
/// Property key for whether to print every generation (`T` or `F`).
pub const SHOW_ALL_KEY: &str = "show.all.generations";
/// Property key for the neighbor counts that keep a live cell alive.
pub const STAY_ALIVE_KEY: &str = "stay.live";
/// Property key for the neighbor counts that bring a dead cell to life.
pub const BECOME_ALIVE_KEY: &str = "dead.live";

/// Maximum number of generations accepted from configuration.
pub const MAX_GENERATIONS: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    pub dimension_sizes: Vec<usize>,
    pub generations: u32,
    pub rule: Rule,
    pub show_intermediate: bool,
}
impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dimension_sizes: vec![8, 6],
            generations: 1,
            rule: LIFE.clone(),
            show_intermediate: true,
        }
    }
}
impl SimConfig {
    /// Reads a configuration from properties. Every key is required.
    pub fn from_properties(props: &Properties) -> Result<Self> {
        Ok(Self {
            dimension_sizes: props.get_list(GRID_SIZE_KEY)?,
            generations: props.get_parsed(GENERATIONS_KEY)?,
            rule: Rule::new(
                props.get_list::<u32>(STAY_ALIVE_KEY)?,
                props.get_list::<u32>(BECOME_ALIVE_KEY)?,
            ),
            show_intermediate: props.get_bool(SHOW_ALL_KEY)?,
        })
    }

    /// Loads a configuration from a properties file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Unable to read properties file {}", path.display()))?;
        let props: Properties = contents
            .parse()
            .with_context(|| format!("Unable to parse properties file {}", path.display()))?;
        Self::from_properties(&props)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Checks that the grid shape and generation count are within limits.
    pub fn validate(&self) -> Result<()> {
        validate_dimensions(&self.dimension_sizes)?;
        if !(1..=MAX_GENERATIONS).contains(&self.generations) {
            bail!(
                "Number of generations must be between 1 and {}; got {}",
                MAX_GENERATIONS,
                self.generations,
            );
        }
        Ok(())
    }
}
