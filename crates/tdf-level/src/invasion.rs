//! Flattened spawn plan derived from a level document.
//!
//! The game consumes a level as a time-ordered list of individual spawn
//! events; this module performs the same expansion so the schedule can be
//! examined without running the game.

use std::collections::BTreeSet;

use crate::enums::CreepType;
use crate::level::Level;
use crate::types::GridPos;

/// A single creep entering the map.
#[derive(Debug, Clone, PartialEq)]
pub struct SpawnEvent {
    /// Absolute moment in seconds from level start.
    pub moment: f64,
    pub creep_type: CreepType,
    pub spawn_at: GridPos,
    pub hp: f64,
    pub bounty: u32,
}

/// Time-ordered spawn events plus the set of spawn points they use.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvasionPlan {
    events: Vec<SpawnEvent>,
    spawn_points: Vec<GridPos>,
}

impl InvasionPlan {
    /// Expand every wave of a level into individual spawn events.
    pub fn from_level(level: &Level) -> Self {
        let mut events = Vec::new();
        let mut points = BTreeSet::new();

        for wave in &level.waves {
            for group in &wave.creeps {
                points.insert(group.spawn_at);
                for moment in group.spawn_time.moments() {
                    events.push(SpawnEvent {
                        moment: wave.start_time + moment,
                        creep_type: group.creep_type,
                        spawn_at: group.spawn_at,
                        hp: group.hp,
                        bounty: group.bounty,
                    });
                }
            }
        }

        events.sort_by(|a, b| a.moment.total_cmp(&b.moment));

        Self {
            events,
            spawn_points: points.into_iter().collect(),
        }
    }

    /// All spawn events, ordered by moment ascending.
    pub fn events(&self) -> &[SpawnEvent] {
        &self.events
    }

    /// Events with `from <= moment < to`.
    pub fn events_between(&self, from: f64, to: f64) -> &[SpawnEvent] {
        let lo = self.events.partition_point(|event| event.moment < from);
        let hi = self.events.partition_point(|event| event.moment < to);
        &self.events[lo..hi]
    }

    /// Whether every creep has spawned strictly before `moment`.
    pub fn invasion_ended(&self, moment: f64) -> bool {
        self.events.last().map_or(true, |event| event.moment < moment)
    }

    /// Distinct spawn points, ordered by x then y.
    pub fn spawn_points(&self) -> &[GridPos] {
        &self.spawn_points
    }

    /// Moment of the final spawn, if any.
    pub fn last_moment(&self) -> Option<f64> {
        self.events.last().map(|event| event.moment)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
