//! Level plans
//!
//! A plan is a list of text rows (see `sim::parser` for the symbols). A
//! level file is a JSON array of plans:
//!
//! ```json
//! [["     ", " @ o ", "xxxxx"], ["..."]]
//! ```

use std::path::Path;

use crate::error::GameError;

pub type LevelPlan = Vec<String>;

/// Parse a JSON array of plans. An empty array is rejected.
pub fn plans_from_json(json: &str) -> Result<Vec<LevelPlan>, GameError> {
    let plans: Vec<LevelPlan> = serde_json::from_str(json)?;
    if plans.is_empty() {
        return Err(GameError::NoLevels);
    }
    Ok(plans)
}

pub fn load_plans(path: impl AsRef<Path>) -> Result<Vec<LevelPlan>, GameError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let plans = plans_from_json(&json)?;
    log::info!("Loaded {} levels from {}", plans.len(), path.display());
    Ok(plans)
}

const DEFAULT_PLANS: &[&[&str]] = &[
    &[
        "                      ",
        "                      ",
        "  |xxx                ",
        "  o                 o ",
        "  x               = x ",
        "  x          o o    x ",
        "  x  @       xxxxx  x ",
        "  xxxxx             x ",
        "      x!!!!!!!!!!!!!x ",
        "      xxxxxxxxxxxxxxx ",
        "                      ",
    ],
    &[
        "     v                 ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "  |                    ",
        "  o                 o  ",
        "  x               = x  ",
        "  x          o o    x  ",
        "  x  @       xxxxx  x  ",
        "  xxxxx             x  ",
        "      x!!!!!!!!!!!!!x  ",
        "      xxxxxxxxxxxxxxx  ",
        "                       ",
    ],
    &[
        "        |           |  ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "                       ",
        "     |                 ",
        "                       ",
        "         =      |      ",
        " @ |  o            o   ",
        "xxxxxxxxx!!!!!!!xxxxxxx",
        "                       ",
    ],
];

/// Built-in plans used when no level file is given
pub fn default_plans() -> Vec<LevelPlan> {
    DEFAULT_PLANS
        .iter()
        .map(|plan| plan.iter().map(|row| row.to_string()).collect())
        .collect()
}
