//! Tuning constants for the simulation.

/// Milliseconds between scheduled ticks (10 ticks per second).
pub const TICK_INTERVAL_MS: u64 = 100;

/// Autosave fires once more than this many milliseconds passed since the last save.
pub const AUTOSAVE_INTERVAL_MS: u64 = 60_000;

/// Cells granted by one click before any multiplier.
pub const BASE_CLICK_VALUE: f64 = 1.0;

/// Geometric growth of producer prices per unit owned.
pub const PRODUCER_COST_GROWTH: f64 = 1.15;

/// Cost reduction research can never push the growth factor below this.
pub const MIN_PRODUCER_COST_GROWTH: f64 = 1.01;

/// Owning this many of a producer unlocks its upgrade.
pub const PRODUCER_UPGRADE_UNLOCK_COUNT: u32 = 10;

/// Cells required for the first prestige.
pub const INITIAL_PRESTIGE_THRESHOLD: f64 = 1e12;

/// Each prestige multiplies the next threshold by this.
pub const PRESTIGE_THRESHOLD_GROWTH: f64 = 10.0;

/// Multiplier gained per prestige level (`1 + level * this`).
pub const PRESTIGE_LEVEL_BONUS: f64 = 0.1;

/// Fraction of the live rate granted while the game was closed.
pub const OFFLINE_EFFICIENCY: f64 = 0.8;

/// Offline gaps at or beyond this many seconds grant nothing.
pub const OFFLINE_WINDOW_SECS: f64 = 86_400.0;

/// localStorage key of the encoded snapshot.
pub const SAVE_KEY: &str = "cellEvolutionSave";

/// localStorage key of the autosave preference ("true" / "false").
pub const AUTOSAVE_KEY: &str = "cellEvolutionAutoSave";
