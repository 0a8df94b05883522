//! Level document defaults.

/// Display name written into generated documents.
pub const DEFAULT_LEVEL_NAME: &str = "Generated level";

/// Lives the player starts with.
pub const DEFAULT_STARTING_LIVES: u32 = 10;

/// Money the player starts with.
pub const DEFAULT_STARTING_MONEY: i64 = 100;
