//! Level state: the static obstacle grid, the live actor list, and the
//! win/lose status.

use std::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actor::{Actor, ActorId, ActorType};
use super::collision::Aabb;
use crate::consts::FINISH_DELAY;

/// Static grid cell that blocks or kills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Obstacle {
    Wall,
    Lava,
}

impl Obstacle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Obstacle::Wall => "wall",
            Obstacle::Lava => "lava",
        }
    }
}

impl fmt::Display for Obstacle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Won,
    Lost,
}

/// Whatever the player just touched: a grid cell or another actor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Obstacle(Obstacle),
    Actor(ActorType),
}

impl From<Obstacle> for Contact {
    fn from(obstacle: Obstacle) -> Self {
        Contact::Obstacle(obstacle)
    }
}

impl From<ActorType> for Contact {
    fn from(actor_type: ActorType) -> Self {
        Contact::Actor(actor_type)
    }
}

/// Obstacle cells indexed `[row][col]`. Rows may differ in length.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: Vec<Vec<Option<Obstacle>>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<Option<Obstacle>>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<Option<Obstacle>>] {
        &self.rows
    }

    /// Longest row
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<Obstacle> {
        self.rows.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    /// Obstacle a box of `size` would hit if placed at `destination`.
    ///
    /// Leaving through the bottom is lava; through the left, right or top
    /// it is wall. Inside the grid the covered cells are scanned row-major
    /// and the first obstacle found wins.
    pub fn obstacle_at(&self, destination: Vec2, size: Vec2) -> Option<Obstacle> {
        let probe = Aabb::new(destination, size);
        let width = self.width() as f32;
        let height = self.height() as f32;

        if probe.bottom() > height {
            return Some(Obstacle::Lava);
        }
        if probe.left() < 0.0 || probe.right() > width || probe.top() < 0.0 {
            return Some(Obstacle::Wall);
        }

        let row_start = probe.top().floor() as usize;
        let row_end = probe.bottom().ceil() as usize;
        let col_start = probe.left().floor() as usize;
        let col_end = probe.right().ceil() as usize;

        for row in row_start..row_end {
            for col in col_start..col_end {
                if let Some(obstacle) = self.cell(row, col) {
                    return Some(obstacle);
                }
            }
        }
        None
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    pub grid: Grid,
    pub actors: Vec<Actor>,
    pub status: Option<Status>,
    /// Seconds left after `status` is set before the level counts as finished
    pub finish_delay: f32,
}

impl Level {
    pub fn new(grid: Grid, actors: Vec<Actor>) -> Self {
        Self {
            grid,
            actors,
            status: None,
            finish_delay: FINISH_DELAY,
        }
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn player(&self) -> Option<&Actor> {
        self.actors
            .iter()
            .find(|a| a.actor_type() == ActorType::Player)
    }

    pub fn player_mut(&mut self) -> Option<&mut Actor> {
        self.actors
            .iter_mut()
            .find(|a| a.actor_type() == ActorType::Player)
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_some() && self.finish_delay < 0.0
    }

    /// First other actor, in list order, that intersects `actor`
    pub fn actor_at(&self, actor: &Actor) -> Option<&Actor> {
        if self.actors.len() < 2 {
            return None;
        }
        self.actors.iter().find(|other| actor.is_intersect(other))
    }

    pub fn obstacle_at(&self, destination: Vec2, size: Vec2) -> Option<Obstacle> {
        self.grid.obstacle_at(destination, size)
    }

    /// Remove the actor with this identity, if present
    pub fn remove_actor(&mut self, id: ActorId) {
        if let Some(index) = self.actors.iter().position(|a| a.id == id) {
            self.actors.remove(index);
        }
    }

    pub fn no_more_actors(&self, actor_type: ActorType) -> bool {
        !self.actors.iter().any(|a| a.actor_type() == actor_type)
    }

    /// Apply the consequences of the player touching something.
    ///
    /// Does nothing once the level is won or lost.
    pub fn player_touched(&mut self, contact: impl Into<Contact>, actor: Option<ActorId>) {
        if self.status.is_some() {
            return;
        }

        match contact.into() {
            Contact::Obstacle(Obstacle::Lava) | Contact::Actor(ActorType::Fireball) => {
                self.status = Some(Status::Lost);
                log::info!("Level lost");
            }
            Contact::Actor(ActorType::Coin) => {
                if let Some(id) = actor {
                    self.remove_actor(id);
                }
                if self.no_more_actors(ActorType::Coin) {
                    self.status = Some(Status::Won);
                    log::info!("Level won");
                }
            }
            _ => {}
        }
    }
}
