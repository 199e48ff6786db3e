use std::fmt;
use std::path::PathBuf;

/// Errors raised while loading level plans or tuning data
#[derive(Debug)]
pub enum GameError {
    Io { path: PathBuf, source: std::io::Error },
    Json(serde_json::Error),
    NoLevels,
    /// A tuning value that must be a positive finite number is not
    InvalidTuning { field: &'static str, value: f32 },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read {}: {source}", path.display())
            }
            Self::Json(err) => write!(f, "invalid JSON: {err}"),
            Self::NoLevels => write!(f, "level list is empty"),
            Self::InvalidTuning { field, value } => {
                write!(f, "tuning field `{field}` must be positive, got {value}")
            }
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json(err) => Some(err),
            Self::NoLevels | Self::InvalidTuning { .. } => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

/// An actor spawner refused to build an actor for a grid cell.
///
/// The parser swallows these and leaves the cell empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpawnError {
    pub reason: String,
}

impl SpawnError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for SpawnError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot spawn actor: {}", self.reason)
    }
}

impl std::error::Error for SpawnError {}
