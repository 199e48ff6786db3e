//! Lava Run - A tile-based platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actors, level grid, collisions, tick)
//! - `game`: Level sequencing and the headless autopilot
//! - `levels`: Level plans (text grids) loaded from JSON
//! - `tuning`: Data-driven physics constants
//! - `renderer`: Text rendering of a level snapshot

pub mod error;
pub mod game;
pub mod levels;
pub mod renderer;
pub mod sim;
pub mod tuning;

pub use error::{GameError, SpawnError};
pub use game::{Autopilot, FrameOutcome, GameSession};
pub use levels::{LevelPlan, default_plans, load_plans, plans_from_json};
pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Largest slice of time a single simulation sub-step may cover (seconds)
    pub const MAX_STEP: f32 = 0.05;
    /// Frame delta cap, so a stalled frame can't teleport actors
    pub const MAX_FRAME_DT: f32 = 0.1;
    /// Grace period after a level is won or lost before it ends (seconds)
    pub const FINISH_DELAY: f32 = 1.0;

    /// Player physics
    pub const GRAVITY: f32 = 30.0;
    pub const JUMP_SPEED: f32 = 17.0;
    pub const PLAYER_X_SPEED: f32 = 7.0;

    /// Coin bobbing
    pub const COIN_SPRING_SPEED: f32 = 8.0;
    pub const COIN_SPRING_DIST: f32 = 0.07;
}
