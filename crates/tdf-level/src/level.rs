//! The level document data model.
//!
//! Field names and their ordering are a stable wire contract; the game
//! reads these documents verbatim. Coordinates serialize as `[x, y]`
//! arrays and all other names are kebab-case.

use serde::{Deserialize, Serialize};

use crate::enums::CreepType;
use crate::types::{GridPos, GridSize};

/// A complete level description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Level {
    pub name: String,
    pub starting_lives: u32,
    pub starting_money: i64,
    pub grid_size: GridSize,
    /// Tile creeps walk toward; reaching it costs the player a life.
    pub goal: GridPos,
    /// Ordered by start-time ascending.
    pub waves: Vec<Wave>,
}

/// A timed group of spawn entries sharing one start time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Wave {
    /// Seconds from level start at which this wave begins.
    pub start_time: f64,
    pub creeps: Vec<CreepSpawnGroup>,
}

/// One batch of identical creeps entering at a single spawn point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CreepSpawnGroup {
    #[serde(rename = "type")]
    pub creep_type: CreepType,
    pub hp: f64,
    /// Reward granted when this creep is defeated.
    pub bounty: u32,
    /// Grid tile where the creeps enter the map.
    pub spawn_at: GridPos,
    pub spawn_time: SpawnTiming,
}

/// Spawn moments for a creep group, relative to the wave start.
///
/// The generator always emits the schedule form; the other two forms are
/// accepted on input for hand-written documents.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SpawnTiming {
    // Listed before Schedule so arrays always resolve here; derived
    // struct deserializers also accept sequences.
    /// Explicit list of spawn moments.
    Moments(Vec<f64>),
    /// Evenly spaced batch: `count` creeps, one every `interval` seconds.
    Schedule(SpawnSchedule),
    /// A single spawn moment.
    Single(f64),
}

/// The evenly spaced batch form of [`SpawnTiming`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpawnSchedule {
    /// Offset of the first spawn from the wave start, in seconds.
    pub start: f64,
    pub count: u32,
    /// Seconds between successive spawns.
    pub interval: f64,
}

impl SpawnTiming {
    /// Number of creeps this timing spawns.
    pub fn creep_count(&self) -> u32 {
        match self {
            SpawnTiming::Schedule(schedule) => schedule.count,
            SpawnTiming::Moments(moments) => moments.len() as u32,
            SpawnTiming::Single(_) => 1,
        }
    }

    /// Spawn moments relative to the wave start, in emission order.
    pub fn moments(&self) -> Vec<f64> {
        match self {
            SpawnTiming::Schedule(schedule) => (0..schedule.count)
                .map(|i| schedule.start + i as f64 * schedule.interval)
                .collect(),
            SpawnTiming::Moments(moments) => moments.clone(),
            SpawnTiming::Single(moment) => vec![*moment],
        }
    }

    /// Moment of the final spawn, if any.
    pub fn last_moment(&self) -> Option<f64> {
        self.moments().into_iter().reduce(f64::max)
    }
}

impl CreepSpawnGroup {
    /// Build a group from the wave's shared fields and one spawn point.
    pub fn new(
        creep_type: CreepType,
        hp: f64,
        bounty: u32,
        spawn_at: GridPos,
        spawn_time: SpawnTiming,
    ) -> Self {
        Self {
            creep_type,
            hp,
            bounty,
            spawn_at,
            spawn_time,
        }
    }
}

impl Wave {
    /// Total creeps this wave spawns across all groups.
    pub fn creep_count(&self) -> u32 {
        self.creeps
            .iter()
            .map(|group| group.spawn_time.creep_count())
            .sum()
    }
}

impl Level {
    /// Total creeps across all waves.
    pub fn total_creeps(&self) -> u32 {
        self.waves.iter().map(Wave::creep_count).sum()
    }
}
