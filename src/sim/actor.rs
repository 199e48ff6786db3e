//! Actors: everything on the field that has a position and can move
//!
//! The set of actor kinds is closed. Per-kind behaviour is a `match` in
//! [`Actor::act`]; the parser's symbol table decides which kind a grid
//! character becomes.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::level::{Grid, Obstacle};
use super::tick::TickInput;
use crate::consts::{COIN_SPRING_DIST, COIN_SPRING_SPEED};
use crate::tuning::Tuning;

static NEXT_ACTOR_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an actor. Clones share it; every constructor mints a new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    fn next() -> Self {
        Self(NEXT_ACTOR_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// Public type tag of an actor, as seen by the level and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActorType {
    Actor,
    Player,
    Coin,
    Fireball,
}

impl ActorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActorType::Actor => "actor",
            ActorType::Player => "player",
            ActorType::Coin => "coin",
            ActorType::Fireball => "fireball",
        }
    }
}

impl fmt::Display for ActorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coin bobbing state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Spring {
    /// Phase angle (radians)
    pub phase: f32,
    pub speed: f32,
    pub dist: f32,
    /// Resting position; bobbing is always relative to this
    pub base_pos: Vec2,
}

impl Spring {
    pub fn new(base_pos: Vec2, phase: f32) -> Self {
        Self {
            phase,
            speed: COIN_SPRING_SPEED,
            dist: COIN_SPRING_DIST,
            base_pos,
        }
    }

    pub fn update(&mut self, time: f32) {
        self.phase += self.speed * time;
    }

    /// Vertical-only offset from the resting position
    pub fn vector(&self) -> Vec2 {
        Vec2::new(0.0, self.phase.sin() * self.dist)
    }
}

/// Moving hazards. All are 1x1 and typed `fireball`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FireballKind {
    /// Bounces, with whatever speed it was given
    Plain,
    /// Bounces left and right
    Horizontal,
    /// Bounces up and down
    Vertical,
    /// Falls, then restarts from where it spawned
    Rain,
}

impl FireballKind {
    pub fn initial_speed(&self) -> Vec2 {
        match self {
            FireballKind::Plain => Vec2::ZERO,
            FireballKind::Horizontal => Vec2::new(2.0, 0.0),
            FireballKind::Vertical => Vec2::new(0.0, 2.0),
            FireballKind::Rain => Vec2::new(0.0, 3.0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ActorKind {
    /// Inert actor; `act` does nothing
    Actor,
    Player,
    Coin(Spring),
    Fireball(FireballKind),
}

pub const PLAYER_SIZE: Vec2 = Vec2::new(0.8, 1.5);
pub const PLAYER_OFFSET: Vec2 = Vec2::new(0.0, -0.5);
pub const COIN_SIZE: Vec2 = Vec2::new(0.6, 0.6);
pub const COIN_OFFSET: Vec2 = Vec2::new(0.2, 0.1);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Actor {
    pub id: ActorId,
    pub kind: ActorKind,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: Vec2,
    /// Position at construction
    pub start_pos: Vec2,
}

impl Default for Actor {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ONE, Vec2::ZERO)
    }
}

impl Actor {
    /// A plain, inert actor
    pub fn new(pos: Vec2, size: Vec2, speed: Vec2) -> Self {
        Self::with_kind(ActorKind::Actor, pos, size, speed)
    }

    fn with_kind(kind: ActorKind, pos: Vec2, size: Vec2, speed: Vec2) -> Self {
        Self {
            id: ActorId::next(),
            kind,
            pos,
            size,
            speed,
            start_pos: pos,
        }
    }

    /// Player standing in the grid cell at `cell`
    pub fn player(cell: Vec2) -> Self {
        Self::with_kind(ActorKind::Player, cell + PLAYER_OFFSET, PLAYER_SIZE, Vec2::ZERO)
    }

    /// Coin centred in the grid cell at `cell`, with a random bobbing phase
    pub fn coin<R: Rng>(cell: Vec2, rng: &mut R) -> Self {
        let phase = rng.random_range(0.0..std::f32::consts::TAU);
        Self::coin_with_phase(cell, phase)
    }

    pub fn coin_with_phase(cell: Vec2, phase: f32) -> Self {
        let pos = cell + COIN_OFFSET;
        Self::with_kind(
            ActorKind::Coin(Spring::new(pos, phase)),
            pos,
            COIN_SIZE,
            Vec2::ZERO,
        )
    }

    /// Bouncing fireball with an explicit speed
    pub fn fireball(pos: Vec2, speed: Vec2) -> Self {
        Self::with_kind(
            ActorKind::Fireball(FireballKind::Plain),
            pos,
            Vec2::ONE,
            speed,
        )
    }

    pub fn horizontal_fireball(pos: Vec2) -> Self {
        Self::fireball_of(FireballKind::Horizontal, pos)
    }

    pub fn vertical_fireball(pos: Vec2) -> Self {
        Self::fireball_of(FireballKind::Vertical, pos)
    }

    pub fn fire_rain(pos: Vec2) -> Self {
        Self::fireball_of(FireballKind::Rain, pos)
    }

    fn fireball_of(kind: FireballKind, pos: Vec2) -> Self {
        Self::with_kind(
            ActorKind::Fireball(kind),
            pos,
            Vec2::ONE,
            kind.initial_speed(),
        )
    }

    pub fn actor_type(&self) -> ActorType {
        match self.kind {
            ActorKind::Actor => ActorType::Actor,
            ActorKind::Player => ActorType::Player,
            ActorKind::Coin(_) => ActorType::Coin,
            ActorKind::Fireball(_) => ActorType::Fireball,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.pos, self.size)
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Whether `other` overlaps this actor. An actor never intersects itself.
    pub fn is_intersect(&self, other: &Actor) -> bool {
        if self.id == other.id {
            return false;
        }
        self.bounds().intersects(&other.bounds())
    }

    /// Where this actor will be after `time` seconds.
    ///
    /// Coins advance their spring as a side effect and answer relative to
    /// their resting position; everything else extrapolates linearly.
    pub fn next_position(&mut self, time: f32) -> Vec2 {
        match &mut self.kind {
            ActorKind::Coin(spring) => {
                spring.update(time);
                spring.base_pos + spring.vector()
            }
            _ => self.pos + self.speed * time,
        }
    }

    /// Fireball response to running into an obstacle
    pub fn handle_obstacle(&mut self) {
        match self.kind {
            ActorKind::Fireball(FireballKind::Rain) => self.pos = self.start_pos,
            ActorKind::Fireball(_) => self.speed = -self.speed,
            _ => {}
        }
    }

    /// Advance this actor by `time` seconds.
    ///
    /// Obstacles the player runs into are pushed onto `contacts`; the caller
    /// reports them to the level once every actor has acted.
    pub fn act(
        &mut self,
        time: f32,
        grid: &Grid,
        input: &TickInput,
        tuning: &Tuning,
        contacts: &mut Vec<Obstacle>,
    ) {
        match self.kind {
            ActorKind::Actor => {}
            ActorKind::Coin(_) => {
                self.pos = self.next_position(time);
            }
            ActorKind::Fireball(_) => {
                let next = self.next_position(time);
                if grid.obstacle_at(next, self.size).is_some() {
                    self.handle_obstacle();
                } else {
                    self.pos = next;
                }
            }
            ActorKind::Player => {
                self.move_x(time, grid, input, tuning, contacts);
                self.move_y(time, grid, input, tuning, contacts);
            }
        }
    }

    fn move_x(
        &mut self,
        time: f32,
        grid: &Grid,
        input: &TickInput,
        tuning: &Tuning,
        contacts: &mut Vec<Obstacle>,
    ) {
        self.speed.x = 0.0;
        if input.left {
            self.speed.x -= tuning.player_x_speed;
        }
        if input.right {
            self.speed.x += tuning.player_x_speed;
        }

        let new_pos = self.pos + Vec2::new(self.speed.x * time, 0.0);
        match grid.obstacle_at(new_pos, self.size) {
            Some(obstacle) => contacts.push(obstacle),
            None => self.pos = new_pos,
        }
    }

    fn move_y(
        &mut self,
        time: f32,
        grid: &Grid,
        input: &TickInput,
        tuning: &Tuning,
        contacts: &mut Vec<Obstacle>,
    ) {
        self.speed.y += time * tuning.gravity;

        let new_pos = self.pos + Vec2::new(0.0, self.speed.y * time);
        match grid.obstacle_at(new_pos, self.size) {
            Some(obstacle) => {
                contacts.push(obstacle);
                // Only jump off something we landed on
                self.speed.y = if input.up && self.speed.y > 0.0 {
                    -tuning.jump_speed
                } else {
                    0.0
                };
            }
            None => self.pos = new_pos,
        }
    }
}
