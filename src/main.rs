//! Lava Run entry point
//!
//! Headless driver: plays every level with the autopilot at a fixed 60 fps
//! and prints the final frame.
//!
//! Usage: `lava-run [LEVELS_JSON] [--tuning FILE] [--frames N]`

use anyhow::{Context, Result, anyhow};

use lava_run::renderer::render_text;
use lava_run::sim::LevelParser;
use lava_run::{Autopilot, FrameOutcome, GameSession, Tuning, default_plans, load_plans};

const FRAME_DT: f32 = 1.0 / 60.0;
const DEFAULT_MAX_FRAMES: u32 = 60 * 60 * 5;

struct Args {
    levels: Option<String>,
    tuning: Option<String>,
    max_frames: u32,
}

fn parse_args() -> Result<Args> {
    let mut args = Args {
        levels: None,
        tuning: None,
        max_frames: DEFAULT_MAX_FRAMES,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--tuning" => {
                args.tuning = Some(iter.next().ok_or_else(|| anyhow!("--tuning needs a path"))?);
            }
            "--frames" => {
                let value = iter.next().ok_or_else(|| anyhow!("--frames needs a number"))?;
                args.max_frames = value
                    .parse()
                    .with_context(|| format!("invalid frame count '{value}'"))?;
            }
            _ if arg.starts_with("--") => return Err(anyhow!("unknown option '{arg}'")),
            _ => args.levels = Some(arg),
        }
    }
    Ok(args)
}

fn main() -> Result<()> {
    env_logger::init();
    log::info!("Lava Run (headless) starting...");

    let args = parse_args()?;

    let plans = match &args.levels {
        Some(path) => load_plans(path).with_context(|| format!("loading levels from {path}"))?,
        None => default_plans(),
    };
    let tuning = match &args.tuning {
        Some(path) => Tuning::load(path).with_context(|| format!("loading tuning from {path}"))?,
        None => Tuning::default(),
    };

    let mut session = GameSession::new(plans, LevelParser::standard(), tuning)?;
    let autopilot = Autopilot;

    let mut frames = 0;
    while frames < args.max_frames {
        let input = autopilot.next_input(session.level());
        match session.frame(FRAME_DT, &input) {
            FrameOutcome::Running => {}
            FrameOutcome::LevelLost { index } => {
                log::info!("Level {} lost at frame {}", index + 1, frames);
            }
            FrameOutcome::LevelWon { index } => {
                log::info!("Level {} won at frame {}", index + 1, frames);
            }
            FrameOutcome::GameComplete => break,
        }
        frames += 1;
    }

    println!("{}", render_text(session.level()));
    if session.is_complete() {
        println!("All {} levels complete in {} frames", session.level_count(), frames);
    } else {
        println!(
            "Stopped on level {}/{} (attempt {}) after {} frames",
            session.level_index() + 1,
            session.level_count(),
            session.attempts(),
            frames
        );
    }
    Ok(())
}
