//! Per-frame level step
//!
//! A frame's time is cut into sub-steps of at most `max_step` seconds. In
//! each sub-step every actor acts in list order, then the player's contacts
//! are reported to the level. Coins are only removed after the pass, so the
//! actor list never changes while it is being walked.

use super::level::{Level, Status};
use crate::tuning::Tuning;

/// Input snapshot for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// Advance the level by `step` seconds
///
/// A non-finite `step` is ignored.
pub fn tick(level: &mut Level, input: &TickInput, step: f32, tuning: &Tuning) {
    if !step.is_finite() {
        log::warn!("Ignoring non-finite tick step {step}");
        return;
    }

    if level.status.is_some() {
        level.finish_delay -= step;
    }

    let max_step = tuning.max_step.max(f32::EPSILON);
    let mut remaining = step;
    let mut contacts = Vec::new();

    while remaining > 0.0 {
        let sub = remaining.min(max_step);

        contacts.clear();
        for actor in &mut level.actors {
            actor.act(sub, &level.grid, input, tuning, &mut contacts);
        }
        for &obstacle in &contacts {
            level.player_touched(obstacle, None);
        }

        let touched = level
            .player()
            .and_then(|player| level.actor_at(player))
            .map(|other| (other.actor_type(), other.id));
        if let Some((actor_type, id)) = touched {
            level.player_touched(actor_type, Some(id));
        }

        if level.status == Some(Status::Lost) {
            sink_player(level, sub);
        }

        remaining -= sub;
    }
}

/// Losing animation: the player sinks into whatever killed it
fn sink_player(level: &mut Level, step: f32) {
    if let Some(player) = level.player_mut() {
        let sink = step.min(player.size.y);
        player.pos.y += sink;
        player.size.y -= sink;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actor::{Actor, ActorType};
    use crate::sim::level::{Grid, Obstacle};
    use glam::Vec2;

    const FRAME: f32 = 1.0 / 60.0;

    /// Open room `width` wide with a wall floor under it
    fn room(width: usize, height: usize) -> Grid {
        let mut rows = vec![vec![None; width]; height - 1];
        rows.push(vec![Some(Obstacle::Wall); width]);
        Grid::new(rows)
    }

    #[test]
    fn test_player_jumps_off_floor() {
        let grid = room(5, 6);
        let player = Actor::player(Vec2::new(1.0, 4.0));
        let coin = Actor::coin_with_phase(Vec2::new(4.0, 0.0), 0.0);
        let mut level = Level::new(grid, vec![player, coin]);
        let tuning = Tuning::default();

        // Settle onto the floor
        for _ in 0..30 {
            tick(&mut level, &TickInput::default(), FRAME, &tuning);
        }
        assert_eq!(level.player().map(|p| p.speed.y), Some(0.0));

        let jump = TickInput {
            up: true,
            ..Default::default()
        };
        tick(&mut level, &jump, FRAME, &tuning);
        let player = level.player().expect("player");
        assert!(player.speed.y < 0.0);
    }

    #[test]
    fn test_touching_last_coin_wins() {
        let grid = room(4, 4);
        let player = Actor::player(Vec2::new(1.0, 2.0));
        let coin = Actor::coin_with_phase(Vec2::new(1.0, 2.0), 0.0);
        let mut level = Level::new(grid, vec![player, coin]);

        tick(&mut level, &TickInput::default(), FRAME, &Tuning::default());
        assert_eq!(level.status, Some(Status::Won));
        assert!(level.no_more_actors(ActorType::Coin));
        assert_eq!(level.actors.len(), 1);
    }

    #[test]
    fn test_coins_remaining_keep_level_running() {
        let grid = room(6, 4);
        let player = Actor::player(Vec2::new(1.0, 2.0));
        let near = Actor::coin_with_phase(Vec2::new(1.0, 2.0), 0.0);
        let far = Actor::coin_with_phase(Vec2::new(5.0, 0.0), 0.0);
        let mut level = Level::new(grid, vec![player, near, far]);

        tick(&mut level, &TickInput::default(), FRAME, &Tuning::default());
        assert_eq!(level.status, None);
        assert_eq!(level.actors.len(), 2);
    }

    #[test]
    fn test_falling_into_lava_loses_and_finishes() {
        let grid = Grid::new(vec![
            vec![None; 3],
            vec![None; 3],
            vec![None; 3],
            vec![Some(Obstacle::Lava); 3],
        ]);
        let player = Actor::player(Vec2::new(0.0, 1.0));
        // Out of the player's way so the fall is the only contact
        let coin = Actor::coin_with_phase(Vec2::new(2.0, 0.0), 0.0);
        let mut level = Level::new(grid, vec![player, coin]);
        let tuning = Tuning::default();

        let mut frames = 0;
        while level.status.is_none() && frames < 120 {
            tick(&mut level, &TickInput::default(), FRAME, &tuning);
            frames += 1;
        }
        assert_eq!(level.status, Some(Status::Lost));
        assert!(!level.is_finished());

        for _ in 0..70 {
            tick(&mut level, &TickInput::default(), FRAME, &tuning);
        }
        assert!(level.is_finished());
    }

    #[test]
    fn test_fireball_hit_loses() {
        let grid = room(6, 4);
        let player = Actor::player(Vec2::new(1.0, 2.0));
        let fireball = Actor::horizontal_fireball(Vec2::new(1.0, 2.0));
        let coin = Actor::coin_with_phase(Vec2::new(5.0, 0.0), 0.0);
        let mut level = Level::new(grid, vec![player, fireball, coin]);

        tick(&mut level, &TickInput::default(), FRAME, &Tuning::default());
        assert_eq!(level.status, Some(Status::Lost));
    }

    #[test]
    fn test_lost_player_sinks() {
        let grid = room(4, 4);
        let player = Actor::player(Vec2::new(1.0, 2.0));
        let mut level = Level::new(grid, vec![player]);
        level.status = Some(Status::Lost);
        let before = level.player().map(|p| p.size.y).unwrap_or_default();

        tick(&mut level, &TickInput::default(), 0.1, &Tuning::default());
        let after = level.player().map(|p| p.size.y).unwrap_or_default();
        assert!((before - after - 0.1).abs() < 1e-5);
        assert!((level.finish_delay - 0.9).abs() < 1e-6);
    }

    #[test]
    fn test_frame_is_split_into_substeps() {
        // One 0.1 s frame at max_step 0.05 is two fireball moves
        let grid = Grid::new(vec![vec![None; 10]]);
        let fireball = Actor::fireball(Vec2::ZERO, Vec2::new(10.0, 0.0));
        let mut level = Level::new(grid, vec![fireball]);
        tick(&mut level, &TickInput::default(), 0.1, &Tuning::default());
        assert!((level.actors[0].pos.x - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_non_finite_step_is_ignored() {
        let grid = Grid::new(vec![vec![None; 10]]);
        let fireball = Actor::fireball(Vec2::ZERO, Vec2::new(10.0, 0.0));
        let mut level = Level::new(grid, vec![fireball]);
        level.status = Some(Status::Won);

        tick(&mut level, &TickInput::default(), f32::INFINITY, &Tuning::default());
        tick(&mut level, &TickInput::default(), f32::NAN, &Tuning::default());
        assert_eq!(level.actors[0].pos, Vec2::ZERO);
        assert_eq!(level.finish_delay, 1.0);
    }

    #[test]
    fn test_finish_delay_untouched_while_running() {
        let mut level = Level::new(room(3, 3), Vec::new());
        tick(&mut level, &TickInput::default(), 0.5, &Tuning::default());
        assert_eq!(level.finish_delay, 1.0);
    }
}
