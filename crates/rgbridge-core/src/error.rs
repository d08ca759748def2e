use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RgBridgeError {
    // Path guard
    #[error(
        "Path \"{}\" is outside allowed directories: {}",
        .path.display(),
        join_paths(.allowed_roots)
    )]
    OutsideAllowedRoots {
        path: PathBuf,
        allowed_roots: Vec<PathBuf>,
    },

    // Engine errors
    #[error("Failed to spawn {program}: {reason}")]
    SpawnFailed { program: String, reason: String },

    #[error("{message}")]
    ExitFailure { code: i32, message: String },

    #[error("{program} did not finish within {seconds} seconds")]
    Timeout { program: String, seconds: u64 },

    // Config errors
    #[error("invalid configuration: {0}")]
    ConfigInvalid(String),

    // IO errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RgBridgeError {
    /// Stable identifier used in structured log fields
    pub fn code(&self) -> &'static str {
        match self {
            RgBridgeError::OutsideAllowedRoots { .. } => "PATH_OUTSIDE_ALLOWED_ROOTS",
            RgBridgeError::SpawnFailed { .. } => "ENGINE_SPAWN_FAILED",
            RgBridgeError::ExitFailure { .. } => "ENGINE_EXIT_FAILURE",
            RgBridgeError::Timeout { .. } => "ENGINE_TIMEOUT",
            RgBridgeError::ConfigInvalid(_) => "CONFIG_INVALID",
            RgBridgeError::Io(_) => "IO_ERROR",
        }
    }
}

fn join_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

pub type Result<T> = std::result::Result<T, RgBridgeError>;
