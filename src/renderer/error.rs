//! Error types for grid rendering

use thiserror::Error;

/// Errors that can occur while rendering puzzles
#[derive(Debug, Error)]
pub enum RenderError {
    /// The number of puzzles does not fill the planned tiles exactly
    #[error("expected {expected} puzzles for the layout, got {actual}")]
    PuzzleCountMismatch { expected: usize, actual: usize },
}
