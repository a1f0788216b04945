//! Error type shared by every part of the cube engine.

use crate::facelet::Face;

/// Errors surfaced by the cube engine.
///
/// Nothing here is retried: every operation is deterministic, so an error is
/// always handed straight back to the caller.
#[derive(thiserror::Error, Debug)]
pub enum CubeError {
    /// A move token outside the 18-symbol alphabet.
    #[error("unsupported move: {0:?}")]
    UnsupportedMove(String),
    /// A manual edit addressed a cell outside the 3x3 grid.
    #[error("facelet ({row}, {col}) is outside the {face} face")]
    FaceletOutOfRange { face: Face, row: usize, col: usize },
    /// A playback seek past the end of the algorithm.
    #[error("step {requested} is out of range for an algorithm of {len} moves")]
    StepOutOfRange { requested: usize, len: usize },
    #[error("state file I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("state file is not a valid cube: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = CubeError> = std::result::Result<T, E>;
