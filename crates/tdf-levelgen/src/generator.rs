//! The wave schedule generator.

use tdf_level::enums::CreepType;
use tdf_level::level::{CreepSpawnGroup, Level, SpawnSchedule, SpawnTiming, Wave};

use crate::config::{GenerateError, GeneratorConfig};

/// Build a complete level from the configuration.
///
/// Deterministic: the same configuration always produces the same
/// document. The configuration is validated first; nothing is produced
/// for a rejected one.
pub fn generate(config: &GeneratorConfig) -> Result<Level, GenerateError> {
    config.validate()?;

    let mut waves = Vec::with_capacity(config.wave_count as usize);
    let mut clock = config.lead_in;

    for index in 0..config.wave_count {
        let step = index + 1;
        let hp = config.hp_scaling.hp(index);
        let bounty = config.bounty_step * step;
        let count = config.creeps_step * step;
        let timing = SpawnTiming::Schedule(SpawnSchedule {
            start: 0.0,
            count,
            interval: config.spawn_interval,
        });

        // One group per spawn point, all sharing this wave's strength.
        let creeps = config
            .spawn_points
            .iter()
            .map(|&spawn_at| {
                CreepSpawnGroup::new(
                    CreepType::GenericCreep,
                    hp,
                    bounty,
                    spawn_at,
                    timing.clone(),
                )
            })
            .collect();

        waves.push(Wave {
            start_time: clock,
            creeps,
        });

        // Advance by the full spawn window plus the configured gap, so the
        // next wave cannot start before this wave's last creep has entered
        // the map.
        clock += f64::from(count) * config.spawn_interval + config.wave_gap;
    }

    Ok(Level {
        name: config.name.clone(),
        starting_lives: config.starting_lives,
        starting_money: config.starting_money,
        grid_size: config.grid_size,
        goal: config.goal,
        waves,
    })
}
