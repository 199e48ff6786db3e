//! Physics tuning
//!
//! Loaded from JSON; any field left out falls back to `crate::consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Downward acceleration on the player (cells/s²)
    pub gravity: f32,
    /// Upward speed given by a jump (cells/s)
    pub jump_speed: f32,
    /// Horizontal walking speed (cells/s)
    pub player_x_speed: f32,
    /// Largest simulation sub-step (seconds)
    pub max_step: f32,
    /// Frame delta cap (seconds)
    pub max_frame_dt: f32,
    /// Grace period before a won/lost level ends (seconds)
    pub finish_delay: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            jump_speed: JUMP_SPEED,
            player_x_speed: PLAYER_X_SPEED,
            max_step: MAX_STEP,
            max_frame_dt: MAX_FRAME_DT,
            finish_delay: FINISH_DELAY,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Self = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Reject time settings the frame loop cannot work with
    pub fn validate(&self) -> Result<(), GameError> {
        for (field, value) in [
            ("max_step", self.max_step),
            ("max_frame_dt", self.max_frame_dt),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(GameError::InvalidTuning { field, value });
            }
        }
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GameError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }
}
