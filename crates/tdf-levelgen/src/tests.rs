#[cfg(test)]
mod tests {
    use tdf_level::invasion::InvasionPlan;
    use tdf_level::io::{load_level, to_document};
    use tdf_level::level::{Level, SpawnTiming, Wave};
    use tdf_level::types::GridPos;

    use crate::config::{GenerateError, GeneratorConfig};
    use crate::generator::generate;
    use crate::presets::LevelPreset;
    use crate::scaling::HpScaling;

    fn classic() -> Level {
        generate(&LevelPreset::Classic.config()).unwrap()
    }

    fn schedule_of(wave: &Wave) -> (f64, u32, f64) {
        match &wave.creeps[0].spawn_time {
            SpawnTiming::Schedule(schedule) => (schedule.start, schedule.count, schedule.interval),
            other => panic!("expected schedule timing, got {other:?}"),
        }
    }

    // --- Classic schedule values ---

    #[test]
    fn classic_header_fields() {
        let level = classic();
        assert_eq!(level.name, "Generated level");
        assert_eq!(level.starting_lives, 10);
        assert_eq!(level.starting_money, 100);
        assert_eq!(level.grid_size.width, 16);
        assert_eq!(level.grid_size.height, 16);
        assert_eq!(level.goal, GridPos::new(8, 8));
    }

    #[test]
    fn classic_wave_zero_values() {
        let level = classic();
        let wave = &level.waves[0];
        assert_eq!(wave.start_time, 3.0);
        assert_eq!(wave.creeps.len(), 1);

        let group = &wave.creeps[0];
        assert_eq!(group.hp, 40.0);
        assert_eq!(group.bounty, 10);
        assert_eq!(group.spawn_at, GridPos::new(0, 0));

        let (start, count, interval) = schedule_of(wave);
        assert_eq!(start, 0.0);
        assert_eq!(count, 5);
        assert_eq!(interval, 2.0);
    }

    #[test]
    fn classic_wave_one_values() {
        let level = classic();
        let wave = &level.waves[1];
        // 3 + 5*2 + 10
        assert_eq!(wave.start_time, 23.0);
        assert_eq!(wave.creeps[0].hp, 80.0);
        assert_eq!(wave.creeps[0].bounty, 20);
        assert_eq!(schedule_of(wave).1, 10);
    }

    #[test]
    fn classic_produces_ten_waves_strictly_ordered() {
        let level = classic();
        assert_eq!(level.waves.len(), 10);
        for pair in level.waves.windows(2) {
            assert!(pair[0].start_time < pair[1].start_time);
        }
    }

    #[test]
    fn wave_spacing_grows_with_index() {
        let level = classic();
        let gaps: Vec<f64> = level
            .waves
            .windows(2)
            .map(|pair| pair[1].start_time - pair[0].start_time)
            .collect();
        for pair in gaps.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }

    #[test]
    fn next_wave_starts_after_previous_spawn_window() {
        for preset in LevelPreset::ALL {
            let level = generate(&preset.config()).unwrap();
            for pair in level.waves.windows(2) {
                let (_, count, interval) = schedule_of(&pair[0]);
                let window = f64::from(count) * interval;
                assert!(
                    pair[1].start_time - pair[0].start_time >= window,
                    "{}: wave window {window} overruns gap {}",
                    preset.name(),
                    pair[1].start_time - pair[0].start_time
                );
            }
        }
    }

    // --- Shared wave strength across groups ---

    #[test]
    fn twin_assault_groups_share_strength() {
        let level = generate(&LevelPreset::TwinAssault.config()).unwrap();
        for wave in &level.waves {
            assert_eq!(wave.creeps.len(), 2);
            let first = &wave.creeps[0];
            let second = &wave.creeps[1];
            assert_eq!(first.hp, second.hp);
            assert_eq!(first.bounty, second.bounty);
            assert_eq!(first.spawn_time, second.spawn_time);
            assert_eq!(first.spawn_at, GridPos::new(0, 0));
            assert_eq!(second.spawn_at, GridPos::new(15, 15));
        }
    }

    // --- Difficulty scaling ---

    #[test]
    fn onslaught_wave_two_matches_power_law() {
        let level = generate(&LevelPreset::Onslaught.config()).unwrap();
        let wave = &level.waves[2];
        let expected = 40.0 * 3f64.powf(1.5);
        let got = wave.creeps[0].hp;
        assert!(
            ((got - expected) / expected).abs() < 1e-9,
            "wave 2 hp = {got}, expected {expected}"
        );
        assert_eq!(wave.creeps[0].bounty, 15);
    }

    #[test]
    fn hp_and_bounty_never_decrease() {
        for preset in LevelPreset::ALL {
            let level = generate(&preset.config()).unwrap();
            for pair in level.waves.windows(2) {
                assert!(pair[1].creeps[0].hp >= pair[0].creeps[0].hp);
                assert!(pair[1].creeps[0].bounty >= pair[0].creeps[0].bounty);
            }
        }
    }

    // --- Boundaries and overrides ---

    #[test]
    fn single_wave_level() {
        let config = GeneratorConfig {
            wave_count: 1,
            ..GeneratorConfig::default()
        };
        let level = generate(&config).unwrap();
        assert_eq!(level.waves.len(), 1);
        assert_eq!(level.waves[0].start_time, 3.0);
    }

    #[test]
    fn custom_gap_and_lead_in_shift_the_schedule() {
        let config = GeneratorConfig {
            lead_in: 0.0,
            wave_gap: 0.0,
            ..GeneratorConfig::default()
        };
        let level = generate(&config).unwrap();
        assert_eq!(level.waves[0].start_time, 0.0);
        // Back-to-back: wave 1 starts exactly when wave 0's window ends
        assert_eq!(level.waves[1].start_time, 10.0);
    }

    // --- Round trip ---

    #[test]
    fn generated_documents_round_trip() {
        for preset in LevelPreset::ALL {
            let level = generate(&preset.config()).unwrap();
            let json = to_document(&level).unwrap();
            let back = load_level(&json).unwrap();
            assert_eq!(level, back, "{} did not round-trip", preset.name());
        }
    }

    // --- Invasion plan of generated levels ---

    #[test]
    fn classic_invasion_plan_totals() {
        let level = classic();
        let plan = InvasionPlan::from_level(&level);
        // 5 * (1 + 2 + ... + 10)
        assert_eq!(plan.len(), 275);
        assert_eq!(level.total_creeps(), 275);
        assert_eq!(plan.spawn_points(), &[GridPos::new(0, 0)]);
        let last = plan.last_moment().unwrap();
        assert!(!plan.invasion_ended(last));
        assert!(plan.invasion_ended(last + 1.0));
    }

    // --- Validation ---

    #[test]
    fn rejects_zero_wave_count() {
        let config = GeneratorConfig {
            wave_count: 0,
            ..GeneratorConfig::default()
        };
        assert_eq!(generate(&config), Err(GenerateError::ZeroWaveCount));
    }

    #[test]
    fn rejects_empty_spawn_points() {
        let config = GeneratorConfig {
            spawn_points: Vec::new(),
            ..GeneratorConfig::default()
        };
        assert_eq!(generate(&config), Err(GenerateError::NoSpawnPoints));
    }

    #[test]
    fn rejects_goal_outside_grid() {
        let config = GeneratorConfig {
            goal: GridPos::new(16, 16),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::GoalOutOfBounds { x: 16, y: 16 })
        );
    }

    #[test]
    fn rejects_spawn_point_outside_grid() {
        let config = GeneratorConfig {
            spawn_points: vec![GridPos::new(-1, 0)],
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::SpawnPointOutOfBounds { x: -1, y: 0 })
        );
    }

    #[test]
    fn rejects_zero_grid() {
        let config = GeneratorConfig {
            grid_size: (0, 16).into(),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::EmptyGrid {
                width: 0,
                height: 16
            })
        );
    }

    #[test]
    fn rejects_non_positive_hp_base() {
        let config = GeneratorConfig {
            hp_scaling: HpScaling::Linear { base: 0.0 },
            ..GeneratorConfig::default()
        };
        assert_eq!(generate(&config), Err(GenerateError::NonPositiveHp(0.0)));
    }

    #[test]
    fn rejects_non_positive_spawn_interval() {
        let config = GeneratorConfig {
            spawn_interval: 0.0,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            generate(&config),
            Err(GenerateError::NonPositiveSpawnInterval(0.0))
        );
    }

    #[test]
    fn rejects_negative_wave_gap() {
        let config = GeneratorConfig {
            wave_gap: -1.0,
            ..GeneratorConfig::default()
        };
        assert_eq!(generate(&config), Err(GenerateError::NegativeWaveGap(-1.0)));
    }
}
