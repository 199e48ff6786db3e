//! Game session: plays a list of level plans in order
//!
//! A lost level is replayed from scratch, a won level moves on to the next
//! one, and winning the last level completes the game. The session owns
//! everything the frame loop needs, so a driver only has to feed it frame
//! deltas and input.

use crate::error::GameError;
use crate::levels::LevelPlan;
use crate::sim::{ActorType, Level, LevelParser, Status, TickInput, tick};
use crate::tuning::Tuning;

/// What happened during a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The current level is still being played
    Running,
    /// Level `index` was lost and has been restarted
    LevelLost { index: usize },
    /// Level `index` was won and the next level has started
    LevelWon { index: usize },
    /// The last level was won
    GameComplete,
}

#[derive(Debug)]
pub struct GameSession {
    plans: Vec<LevelPlan>,
    parser: LevelParser,
    tuning: Tuning,
    current: usize,
    level: Level,
    complete: bool,
    attempts: u32,
}

impl GameSession {
    pub fn new(
        plans: Vec<LevelPlan>,
        parser: LevelParser,
        tuning: Tuning,
    ) -> Result<Self, GameError> {
        tuning.validate()?;
        let first = plans.first().ok_or(GameError::NoLevels)?;
        let level = start_level(&parser, &tuning, first, 0);
        Ok(Self {
            plans,
            parser,
            tuning,
            current: 0,
            level,
            complete: false,
            attempts: 1,
        })
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn level_index(&self) -> usize {
        self.current
    }

    pub fn level_count(&self) -> usize {
        self.plans.len()
    }

    /// Attempts made at the current level, including this one
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Advance one frame of `dt` seconds (clamped to `max_frame_dt`)
    pub fn frame(&mut self, dt: f32, input: &TickInput) -> FrameOutcome {
        if self.complete {
            return FrameOutcome::GameComplete;
        }

        let dt = dt.clamp(0.0, self.tuning.max_frame_dt);
        tick(&mut self.level, input, dt, &self.tuning);

        if !self.level.is_finished() {
            return FrameOutcome::Running;
        }

        let index = self.current;
        match self.level.status {
            Some(Status::Lost) => {
                self.attempts += 1;
                log::info!("Retrying level {} (attempt {})", index + 1, self.attempts);
                self.level = start_level(&self.parser, &self.tuning, &self.plans[index], index);
                FrameOutcome::LevelLost { index }
            }
            Some(Status::Won) if index + 1 < self.plans.len() => {
                self.current += 1;
                self.attempts = 1;
                self.level =
                    start_level(&self.parser, &self.tuning, &self.plans[self.current], self.current);
                FrameOutcome::LevelWon { index }
            }
            Some(Status::Won) => {
                log::info!("All {} levels complete", self.plans.len());
                self.complete = true;
                FrameOutcome::GameComplete
            }
            None => FrameOutcome::Running,
        }
    }
}

fn start_level(parser: &LevelParser, tuning: &Tuning, plan: &LevelPlan, index: usize) -> Level {
    let mut level = parser.parse(plan);
    level.finish_delay = tuning.finish_delay;
    log::info!(
        "Starting level {} ({}x{}, {} actors)",
        index + 1,
        level.width(),
        level.height(),
        level.actors.len()
    );
    level
}

/// Naive input policy for headless runs: walk toward the nearest coin and
/// jump when it is overhead.
#[derive(Debug, Clone, Copy, Default)]
pub struct Autopilot;

impl Autopilot {
    pub fn next_input(&self, level: &Level) -> TickInput {
        let Some(player) = level.player() else {
            return TickInput::default();
        };
        let center = player.bounds().center();

        let nearest = level
            .actors
            .iter()
            .filter(|a| a.actor_type() == ActorType::Coin)
            .map(|coin| coin.bounds().center())
            .min_by(|a, b| {
                a.distance_squared(center)
                    .partial_cmp(&b.distance_squared(center))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });

        let Some(target) = nearest else {
            return TickInput::default();
        };

        let dx = target.x - center.x;
        TickInput {
            left: dx < -0.2,
            right: dx > 0.2,
            up: target.y < player.top(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Actor;
    use glam::Vec2;

    const FRAME: f32 = 1.0 / 60.0;

    fn plan(rows: &[&str]) -> LevelPlan {
        rows.iter().map(|r| r.to_string()).collect()
    }

    /// Player's head is already in the only coin: won on the first frame
    fn instant_win() -> LevelPlan {
        plan(&[" o ", " @ ", "xxx"])
    }

    /// Player starts above a lava pit: lost after a short fall
    fn instant_loss() -> LevelPlan {
        plan(&["   ", " @ ", "   ", "!!!", "  o"])
    }

    fn run_until_outcome(session: &mut GameSession) -> FrameOutcome {
        for _ in 0..1000 {
            let outcome = session.frame(FRAME, &TickInput::default());
            if outcome != FrameOutcome::Running {
                return outcome;
            }
        }
        FrameOutcome::Running
    }

    #[test]
    fn test_empty_plans_rejected() {
        let result = GameSession::new(Vec::new(), LevelParser::standard(), Tuning::default());
        assert!(matches!(result, Err(GameError::NoLevels)));
    }

    #[test]
    fn test_negative_frame_cap_rejected() {
        let tuning = Tuning {
            max_frame_dt: -1.0,
            ..Default::default()
        };
        let result = GameSession::new(vec![instant_win()], LevelParser::standard(), tuning);
        assert!(matches!(result, Err(GameError::InvalidTuning { .. })));
    }

    #[test]
    fn test_win_advances_then_completes() {
        let mut session = GameSession::new(
            vec![instant_win(), instant_win()],
            LevelParser::standard(),
            Tuning::default(),
        )
        .unwrap();
        assert_eq!(session.level_count(), 2);

        assert_eq!(run_until_outcome(&mut session), FrameOutcome::LevelWon { index: 0 });
        assert_eq!(session.level_index(), 1);
        assert_eq!(session.level().status, None);

        assert_eq!(run_until_outcome(&mut session), FrameOutcome::GameComplete);
        assert!(session.is_complete());
        assert_eq!(
            session.frame(FRAME, &TickInput::default()),
            FrameOutcome::GameComplete
        );
    }

    #[test]
    fn test_loss_restarts_same_level() {
        let mut session = GameSession::new(
            vec![instant_loss(), instant_win()],
            LevelParser::standard(),
            Tuning::default(),
        )
        .unwrap();

        assert_eq!(run_until_outcome(&mut session), FrameOutcome::LevelLost { index: 0 });
        assert_eq!(session.level_index(), 0);
        assert_eq!(session.attempts(), 2);
        assert_eq!(session.level().status, None);
        assert!(session.level().player().is_some());
    }

    #[test]
    fn test_frame_delta_is_clamped() {
        let tuning = Tuning {
            finish_delay: 0.5,
            ..Default::default()
        };
        let mut session =
            GameSession::new(vec![instant_win()], LevelParser::standard(), tuning).unwrap();
        // One huge frame wins the level but only burns max_frame_dt of delay
        assert_eq!(session.frame(10.0, &TickInput::default()), FrameOutcome::Running);
        assert_eq!(session.level().status, Some(Status::Won));
        assert_eq!(session.level().finish_delay, 0.5);
        assert_eq!(session.frame(10.0, &TickInput::default()), FrameOutcome::Running);
        assert!((session.level().finish_delay - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_autopilot_heads_for_coin() {
        let level = LevelParser::standard().parse_seeded(&plan(&["@    o", "xxxxxx"]), 3);
        let input = Autopilot.next_input(&level);
        assert!(input.right);
        assert!(!input.left);
        assert!(!input.up);

        let plan = plan(&["o    ", "     ", "    @", "xxxxx"]);
        let level = LevelParser::standard().parse_seeded(&plan, 3);
        let input = Autopilot.next_input(&level);
        assert!(input.left);
        assert!(input.up);
    }

    #[test]
    fn test_autopilot_idles_without_target() {
        let level = LevelParser::standard().parse_seeded(&plan(&["@  ", "xxx"]), 3);
        assert_eq!(Autopilot.next_input(&level), TickInput::default());

        let no_player = Level::new(
            Default::default(),
            vec![Actor::coin_with_phase(Vec2::ZERO, 0.0)],
        );
        assert_eq!(Autopilot.next_input(&no_player), TickInput::default());
    }
}
