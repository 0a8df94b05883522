//! Stock level presets.
//!
//! Each preset fixes grid layout, spawn placement, and difficulty curve;
//! everything else comes from the standard tuning defaults.

use tdf_level::types::{GridPos, GridSize};

use crate::config::{GeneratorConfig, DEFAULT_BOUNTY_STEP, DEFAULT_HP_BASE};
use crate::scaling::HpScaling;

/// Stock generator configurations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelPreset {
    /// Single spawn corner, linear difficulty.
    Classic,
    /// The same wave strength enters from two opposite corners at once.
    TwinAssault,
    /// Smaller grid, power-law difficulty, leaner bounties.
    Onslaught,
}

impl LevelPreset {
    pub const ALL: [LevelPreset; 3] = [
        LevelPreset::Classic,
        LevelPreset::TwinAssault,
        LevelPreset::Onslaught,
    ];

    /// Name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            LevelPreset::Classic => "classic",
            LevelPreset::TwinAssault => "twin-assault",
            LevelPreset::Onslaught => "onslaught",
        }
    }

    /// Look up a preset by its command-line name.
    pub fn from_name(name: &str) -> Option<LevelPreset> {
        Self::ALL.into_iter().find(|preset| preset.name() == name)
    }

    /// Build the generator configuration for this preset.
    pub fn config(&self) -> GeneratorConfig {
        match self {
            LevelPreset::Classic => build_classic(),
            LevelPreset::TwinAssault => build_twin_assault(),
            LevelPreset::Onslaught => build_onslaught(),
        }
    }
}

/// Classic: 16×16 grid, goal at center, creeps from the top-left corner,
/// hit points growing linearly.
fn build_classic() -> GeneratorConfig {
    GeneratorConfig::default()
}

/// TwinAssault: as Classic, but each wave enters from two opposite
/// corners simultaneously.
fn build_twin_assault() -> GeneratorConfig {
    let mut config = GeneratorConfig::default();
    let far_corner = GridPos::new(
        config.grid_size.width as i32 - 1,
        config.grid_size.height as i32 - 1,
    );
    config.spawn_points = vec![GridPos::new(0, 0), far_corner];
    config
}

/// Onslaught: 15×15 grid, power-law hit points for a harsher late game,
/// leaner bounties to match.
fn build_onslaught() -> GeneratorConfig {
    let grid_size = GridSize::new(15, 15);
    GeneratorConfig {
        grid_size,
        goal: grid_size.center(),
        hp_scaling: HpScaling::PowerLaw {
            base: DEFAULT_HP_BASE,
        },
        bounty_step: DEFAULT_BOUNTY_STEP / 2,
        ..GeneratorConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preset_names_round_trip() {
        for preset in LevelPreset::ALL {
            assert_eq!(LevelPreset::from_name(preset.name()), Some(preset));
        }
        assert_eq!(LevelPreset::from_name("nope"), None);
    }

    #[test]
    fn all_preset_configs_validate() {
        for preset in LevelPreset::ALL {
            preset.config().validate().unwrap();
        }
    }

    #[test]
    fn twin_assault_uses_opposite_corners() {
        let config = LevelPreset::TwinAssault.config();
        assert_eq!(
            config.spawn_points,
            vec![GridPos::new(0, 0), GridPos::new(15, 15)]
        );
    }

    #[test]
    fn onslaught_uses_smaller_grid_and_power_law() {
        let config = LevelPreset::Onslaught.config();
        assert_eq!(config.grid_size, GridSize::new(15, 15));
        assert_eq!(config.goal, GridPos::new(7, 7));
        assert_eq!(config.hp_scaling, HpScaling::PowerLaw { base: 40.0 });
        assert_eq!(config.bounty_step, 5);
    }
}
