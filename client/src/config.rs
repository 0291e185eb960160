use std::{fs, path::Path};

use anyhow::{Context, ensure};
use serde::{Deserialize, Serialize};

use crate::{
    preset::PRESETS,
    session::{DEFAULT_SPEED_TIER, SPEEDS},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Width of the playing field in pixels, the column count is derived from it.
    pub screen_width: usize,

    /// Height of the playing field in pixels, the row count is derived from it.
    pub screen_height: usize,

    /// Side length of a single cell in pixels.
    pub cell_size: usize,

    /// Index into the speed tier table to start at.
    pub speed_tier: usize,

    /// Preset to seed the board with on startup.
    pub preset: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: 1000,
            screen_height: 700,
            cell_size: 20,
            speed_tier: DEFAULT_SPEED_TIER,
            preset: 0,
        }
    }
}

impl Config {
    pub fn load<P>(path: P) -> anyhow::Result<Self>
    where
        P: AsRef<Path>,
    {
        let config_serialized = fs::read(path).context("Couldn't read config")?;
        let config =
            serde_json::from_slice(&config_serialized).context("Couldn't deserialize config")?;
        Ok(config)
    }

    pub fn rows(&self) -> usize {
        self.screen_height.checked_div(self.cell_size).unwrap_or(0)
    }

    pub fn cols(&self) -> usize {
        self.screen_width.checked_div(self.cell_size).unwrap_or(0)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        ensure!(self.cell_size > 0, "cell_size must be positive");
        ensure!(
            self.rows() > 0 && self.cols() > 0,
            "screen {}x{} is smaller than a single {}px cell",
            self.screen_width,
            self.screen_height,
            self.cell_size
        );
        ensure!(
            self.speed_tier < SPEEDS.len(),
            "speed_tier must be below {}",
            SPEEDS.len()
        );
        ensure!(
            self.preset < PRESETS.len(),
            "preset must be below {}",
            PRESETS.len()
        );
        Ok(())
    }
}
