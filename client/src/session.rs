use std::{
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
    time::Duration,
};

use anyhow::{Context, anyhow, ensure};
use liblife::{CellState, Grid, Position, advance_generation};
use tracing::{debug, info};

use crate::{config::Config, preset};

/// Speed tiers in generations per second.
pub const SPEEDS: [f64; 8] = [0.0, 0.25, 0.5, 1.0, 2.0, 3.0, 4.0, 5.0];

pub const DEFAULT_SPEED_TIER: usize = 3;

pub type SharedSession = Arc<RwLock<Session>>;

/// Everything the running program knows about the simulation besides the rule itself.
#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    generation: u64,
    speed_tier: usize,
    paused: bool,
    preset_id: usize,
}

impl Session {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        config.validate()?;

        let grid = Grid::new(config.rows(), config.cols()).context("Couldn't create grid")?;
        let mut session = Self {
            grid,
            generation: 0,
            speed_tier: config.speed_tier,
            paused: true,
            preset_id: 0,
        };

        session.apply_preset(config.preset)?;
        Ok(session)
    }

    /// Advances one generation if the session is running and anything is still alive.
    pub fn tick(&mut self) -> bool {
        if self.paused || self.grid.live_count() == 0 {
            return false;
        }

        self.advance();
        true
    }

    /// Advances up to `times` generations whether paused or not, stopping once the board is empty.
    pub fn step(&mut self, times: usize) -> usize {
        let mut taken = 0;
        while taken < times && self.grid.live_count() > 0 {
            self.advance();
            taken += 1;
        }
        taken
    }

    fn advance(&mut self) {
        self.grid = advance_generation(&self.grid);
        self.generation += 1;
        debug!(
            generation = self.generation,
            live = self.grid.live_count(),
            "advanced"
        );
    }

    pub fn toggle_cell(&mut self, pos: Position) -> anyhow::Result<CellState> {
        ensure!(self.paused, "The board can only be edited while paused");
        Ok(self.grid.toggle(pos)?)
    }

    pub fn next_preset(&mut self) -> anyhow::Result<usize> {
        let next_id = (self.preset_id + 1) % preset::PRESETS.len();
        self.select_preset(next_id)?;
        Ok(next_id)
    }

    pub fn select_preset(&mut self, id: usize) -> anyhow::Result<()> {
        ensure!(self.paused, "Presets can only be switched while paused");
        self.apply_preset(id)
    }

    fn apply_preset(&mut self, id: usize) -> anyhow::Result<()> {
        let preset = preset::get(id).ok_or_else(|| anyhow!("Unknown preset {id}"))?;

        self.grid = preset
            .grid(self.grid.rows(), self.grid.cols())
            .with_context(|| format!("Preset {} doesn't fit the board", preset.name))?;
        self.preset_id = id;

        info!(id, name = preset.name, "applied preset");
        Ok(())
    }

    pub fn speed_up(&mut self) -> f64 {
        if self.speed_tier < SPEEDS.len() - 1 {
            self.speed_tier += 1;
        }
        self.speed()
    }

    pub fn speed_down(&mut self) -> f64 {
        self.speed_tier = self.speed_tier.saturating_sub(1);
        self.speed()
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Empties the board and restores the starting generation, speed and pause state.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
        self.speed_tier = DEFAULT_SPEED_TIER;
        self.paused = true;
    }

    pub fn clear(&mut self) {
        self.grid.clear();
    }

    pub fn randomize(&mut self, alive_cells: usize) -> anyhow::Result<()> {
        self.grid = Grid::new_random(self.grid.rows(), self.grid.cols(), alive_cells)?;
        Ok(())
    }

    /// Time to wait between ticks, or `None` when the current speed is zero.
    pub fn tick_interval(&self) -> Option<Duration> {
        let speed = self.speed();
        (speed > 0.0).then(|| Duration::from_secs_f64(1.0 / speed))
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn live_cells(&self) -> Vec<Position> {
        self.grid.live_cells()
    }

    pub fn live_count(&self) -> usize {
        self.grid.live_count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn speed(&self) -> f64 {
        SPEEDS[self.speed_tier]
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn preset_id(&self) -> usize {
        self.preset_id
    }
}

pub fn read(session: &SharedSession) -> anyhow::Result<RwLockReadGuard<'_, Session>> {
    session.read().map_err(|_| anyhow!("Session lock poisoned"))
}

pub fn write(session: &SharedSession) -> anyhow::Result<RwLockWriteGuard<'_, Session>> {
    session.write().map_err(|_| anyhow!("Session lock poisoned"))
}
