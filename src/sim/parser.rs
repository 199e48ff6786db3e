//! Level parser: text grid -> `Level`
//!
//! Each character of a plan is either an obstacle (`x` wall, `!` lava), an
//! actor looked up in the parser's symbol table, or empty space.

use std::collections::HashMap;
use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::actor::Actor;
use super::level::{Grid, Level, Obstacle};
use crate::error::SpawnError;

/// Builds the actor for a grid cell at `(col, row)`
pub type ActorSpawner = fn(Vec2, &mut Pcg32) -> Result<Actor, SpawnError>;

fn spawn_player(cell: Vec2, _rng: &mut Pcg32) -> Result<Actor, SpawnError> {
    Ok(Actor::player(cell))
}

fn spawn_coin(cell: Vec2, rng: &mut Pcg32) -> Result<Actor, SpawnError> {
    Ok(Actor::coin(cell, rng))
}

fn spawn_horizontal_fireball(cell: Vec2, _rng: &mut Pcg32) -> Result<Actor, SpawnError> {
    Ok(Actor::horizontal_fireball(cell))
}

fn spawn_vertical_fireball(cell: Vec2, _rng: &mut Pcg32) -> Result<Actor, SpawnError> {
    Ok(Actor::vertical_fireball(cell))
}

fn spawn_fire_rain(cell: Vec2, _rng: &mut Pcg32) -> Result<Actor, SpawnError> {
    Ok(Actor::fire_rain(cell))
}

#[derive(Clone, Default)]
pub struct LevelParser {
    dictionary: HashMap<char, ActorSpawner>,
}

impl fmt::Debug for LevelParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut symbols: Vec<char> = self.dictionary.keys().copied().collect();
        symbols.sort_unstable();
        f.debug_struct("LevelParser")
            .field("symbols", &symbols)
            .finish()
    }
}

impl LevelParser {
    pub fn new(dictionary: HashMap<char, ActorSpawner>) -> Self {
        Self { dictionary }
    }

    /// Parser for the stock symbols: `@` player, `o` coin, `=` horizontal
    /// fireball, `|` vertical fireball, `v` fire rain
    pub fn standard() -> Self {
        let dictionary: HashMap<char, ActorSpawner> = HashMap::from([
            ('@', spawn_player as ActorSpawner),
            ('o', spawn_coin as ActorSpawner),
            ('=', spawn_horizontal_fireball as ActorSpawner),
            ('|', spawn_vertical_fireball as ActorSpawner),
            ('v', spawn_fire_rain as ActorSpawner),
        ]);
        Self::new(dictionary)
    }

    pub fn actor_from_symbol(&self, symbol: Option<char>) -> Option<ActorSpawner> {
        symbol.and_then(|s| self.dictionary.get(&s).copied())
    }

    pub fn obstacle_from_symbol(symbol: char) -> Option<Obstacle> {
        match symbol {
            'x' => Some(Obstacle::Wall),
            '!' => Some(Obstacle::Lava),
            _ => None,
        }
    }

    pub fn create_grid<S: AsRef<str>>(&self, lines: &[S]) -> Grid {
        let rows = lines
            .iter()
            .map(|line| {
                line.as_ref()
                    .chars()
                    .map(Self::obstacle_from_symbol)
                    .collect()
            })
            .collect();
        Grid::new(rows)
    }

    /// Spawn an actor for every mapped symbol. Cells whose spawner fails are
    /// left empty.
    pub fn create_actors<S: AsRef<str>>(&self, lines: &[S], rng: &mut Pcg32) -> Vec<Actor> {
        let mut actors = Vec::new();
        for (row, line) in lines.iter().enumerate() {
            for (col, symbol) in line.as_ref().chars().enumerate() {
                let Some(spawn) = self.actor_from_symbol(Some(symbol)) else {
                    continue;
                };
                match spawn(Vec2::new(col as f32, row as f32), rng) {
                    Ok(actor) => actors.push(actor),
                    Err(err) => {
                        log::debug!("Skipping '{}' at ({}, {}): {}", symbol, col, row, err);
                    }
                }
            }
        }
        actors
    }

    /// Parse with a freshly seeded RNG for coin phases
    pub fn parse<S: AsRef<str>>(&self, lines: &[S]) -> Level {
        let mut rng = Pcg32::from_rng(&mut rand::rng());
        self.parse_with_rng(lines, &mut rng)
    }

    /// Parse deterministically: same plan and seed, same level
    pub fn parse_seeded<S: AsRef<str>>(&self, lines: &[S], seed: u64) -> Level {
        let mut rng = Pcg32::seed_from_u64(seed);
        self.parse_with_rng(lines, &mut rng)
    }

    pub fn parse_with_rng<S: AsRef<str>>(&self, lines: &[S], rng: &mut Pcg32) -> Level {
        Level::new(self.create_grid(lines), self.create_actors(lines, rng))
    }
}
