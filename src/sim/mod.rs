//! Deterministic simulation module
//!
//! All gameplay logic lives here. Given the same level, seed and inputs, a
//! run plays out the same way:
//! - Sub-steps capped at `MAX_STEP`
//! - Seeded RNG only
//! - Stable iteration order (actor list insertion order)
//! - No rendering or platform dependencies
//!
//! `ActorId` values come from a process-wide counter, so their numbers vary
//! between runs. They only carry identity and never feed into gameplay.
//!
//! Positions and sizes are `glam::Vec2` values in grid units: `a + b` is
//! vector addition and `a * k` scales by a factor.

pub mod actor;
pub mod collision;
pub mod level;
pub mod parser;
pub mod tick;

pub use actor::{Actor, ActorId, ActorKind, ActorType, FireballKind, Spring};
pub use collision::Aabb;
pub use level::{Contact, Grid, Level, Obstacle, Status};
pub use parser::{ActorSpawner, LevelParser};
pub use tick::{TickInput, tick};
