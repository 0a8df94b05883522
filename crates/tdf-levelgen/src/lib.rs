//! Deterministic level generation for the TDF tower-defense game.
//!
//! Turns a small set of tunable constants into a complete level document:
//! timed waves of escalating strength entering from one or more spawn
//! points, paced so a wave never starts before the previous one has
//! finished spawning.

pub mod config;
pub mod generator;
pub mod presets;
pub mod scaling;

pub use config::{GenerateError, GeneratorConfig};
pub use generator::generate;
pub use presets::LevelPreset;
pub use scaling::HpScaling;

#[cfg(test)]
mod tests;
