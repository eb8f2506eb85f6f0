use crate::domains::rover::{validate_placement, Direction, GridSize, Position, RoverInit};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub grid_width: u32,
    pub grid_height: u32,
    pub start_x: i32,
    pub start_y: i32,
    pub start_direction: Direction,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Session log file. Console-only when unset.
    pub file: Option<String>,
    pub console: bool,
}

impl Config {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("reading {}", path.display()))?;
        let config = Self::from_toml(&content)?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let grid = self.simulation.grid_size()?;
        validate_placement(grid, &[], &self.simulation.start().position)
            .context("invalid start position")?;
        Ok(())
    }
}

impl SimulationConfig {
    pub fn grid_size(&self) -> Result<GridSize> {
        Ok(GridSize::new(self.grid_width, self.grid_height)?)
    }

    pub fn start(&self) -> RoverInit {
        RoverInit::new(Position::new(self.start_x, self.start_y), self.start_direction)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let grid = GridSize::default();
        Self {
            grid_width: grid.width(),
            grid_height: grid.height(),
            start_x: 0,
            start_y: 0,
            start_direction: Direction::North,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            console: true,
        }
    }
}
