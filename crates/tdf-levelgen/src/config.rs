//! Generator configuration and validation.

use thiserror::Error;

use tdf_level::constants::{DEFAULT_LEVEL_NAME, DEFAULT_STARTING_LIVES, DEFAULT_STARTING_MONEY};
use tdf_level::types::{GridPos, GridSize};

use crate::scaling::HpScaling;

// --- Schedule tuning defaults ---

/// Seconds before the first wave starts.
pub const DEFAULT_LEAD_IN_SECS: f64 = 3.0;

/// Seconds between successive creeps within one group.
pub const DEFAULT_SPAWN_INTERVAL_SECS: f64 = 2.0;

/// Idle seconds between the end of one wave's spawn window and the next
/// wave's start.
pub const DEFAULT_WAVE_GAP_SECS: f64 = 10.0;

/// Creeps added per wave index step.
pub const DEFAULT_CREEPS_STEP: u32 = 5;

/// Base hit points for wave 0.
pub const DEFAULT_HP_BASE: f64 = 40.0;

/// Bounty added per wave index step.
pub const DEFAULT_BOUNTY_STEP: u32 = 10;

/// Number of waves in a standard level.
pub const DEFAULT_WAVE_COUNT: u32 = 10;

/// Tunable inputs for [`generate`](crate::generate).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Display name written into the document.
    pub name: String,
    pub starting_lives: u32,
    pub starting_money: i64,
    pub grid_size: GridSize,
    /// Tile creeps walk toward, conventionally the grid center.
    pub goal: GridPos,
    /// Tiles creeps enter from. Every wave spawns one group per point.
    pub spawn_points: Vec<GridPos>,
    pub wave_count: u32,
    pub hp_scaling: HpScaling,
    /// Bounty for wave `i` is `bounty_step * (i + 1)`.
    pub bounty_step: u32,
    /// Creep count for wave `i` is `creeps_step * (i + 1)`.
    pub creeps_step: u32,
    /// Seconds between successive creeps within one group.
    pub spawn_interval: f64,
    /// Seconds before the first wave starts.
    pub lead_in: f64,
    /// Idle seconds after a wave's spawn window before the next wave.
    pub wave_gap: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let grid_size = GridSize::new(16, 16);
        Self {
            name: DEFAULT_LEVEL_NAME.to_string(),
            starting_lives: DEFAULT_STARTING_LIVES,
            starting_money: DEFAULT_STARTING_MONEY,
            grid_size,
            goal: grid_size.center(),
            spawn_points: vec![GridPos::new(0, 0)],
            wave_count: DEFAULT_WAVE_COUNT,
            hp_scaling: HpScaling::Linear {
                base: DEFAULT_HP_BASE,
            },
            bounty_step: DEFAULT_BOUNTY_STEP,
            creeps_step: DEFAULT_CREEPS_STEP,
            spawn_interval: DEFAULT_SPAWN_INTERVAL_SECS,
            lead_in: DEFAULT_LEAD_IN_SECS,
            wave_gap: DEFAULT_WAVE_GAP_SECS,
        }
    }
}

impl GeneratorConfig {
    /// Check the configuration before generation.
    ///
    /// A failed check aborts generation; nothing is emitted.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.grid_size.width == 0 || self.grid_size.height == 0 {
            return Err(GenerateError::EmptyGrid {
                width: self.grid_size.width,
                height: self.grid_size.height,
            });
        }
        if !self.grid_size.contains(self.goal) {
            return Err(GenerateError::GoalOutOfBounds {
                x: self.goal.x,
                y: self.goal.y,
            });
        }
        if self.spawn_points.is_empty() {
            return Err(GenerateError::NoSpawnPoints);
        }
        for &point in &self.spawn_points {
            if !self.grid_size.contains(point) {
                return Err(GenerateError::SpawnPointOutOfBounds {
                    x: point.x,
                    y: point.y,
                });
            }
        }
        if self.wave_count == 0 {
            return Err(GenerateError::ZeroWaveCount);
        }
        if self.creeps_step == 0 {
            return Err(GenerateError::ZeroCreepsStep);
        }
        if self.hp_scaling.base() <= 0.0 {
            return Err(GenerateError::NonPositiveHp(self.hp_scaling.base()));
        }
        if self.spawn_interval <= 0.0 {
            return Err(GenerateError::NonPositiveSpawnInterval(self.spawn_interval));
        }
        if self.lead_in < 0.0 {
            return Err(GenerateError::NegativeLeadIn(self.lead_in));
        }
        if self.wave_gap < 0.0 {
            return Err(GenerateError::NegativeWaveGap(self.wave_gap));
        }
        Ok(())
    }
}

/// Configurations rejected before generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerateError {
    #[error("wave count must be positive")]
    ZeroWaveCount,
    #[error("at least one spawn point is required")]
    NoSpawnPoints,
    #[error("grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: u32, height: u32 },
    #[error("goal ({x}, {y}) is outside the grid")]
    GoalOutOfBounds { x: i32, y: i32 },
    #[error("spawn point ({x}, {y}) is outside the grid")]
    SpawnPointOutOfBounds { x: i32, y: i32 },
    #[error("hit-point base must be positive, got {0}")]
    NonPositiveHp(f64),
    #[error("creeps per wave step must be positive")]
    ZeroCreepsStep,
    #[error("spawn interval must be positive, got {0}")]
    NonPositiveSpawnInterval(f64),
    #[error("lead-in must not be negative, got {0}")]
    NegativeLeadIn(f64),
    #[error("wave gap must not be negative, got {0}")]
    NegativeWaveGap(f64),
}
