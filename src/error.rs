//! Top-level error type for the sheet pipeline

use thiserror::Error;

use crate::layout::LayoutError;
use crate::renderer::RenderError;
use crate::settings::SettingsError;
use crate::source::SourceError;
use crate::surface::SurfaceError;

/// Errors that can occur while producing a sheet of puzzles.
///
/// None of these are recovered from: the run stops and no file is written.
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),

    #[error("render error: {0}")]
    Render(#[from] RenderError),

    #[error("puzzle source error: {0}")]
    Source(#[from] SourceError),

    #[error("output error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("settings error: {0}")]
    Settings(#[from] SettingsError),

    /// The run asks for more puzzles than can be produced
    #[error("{pages} pages of {per_page} puzzles exceed the limit of {max} puzzles per run")]
    TooManyPuzzles {
        per_page: usize,
        pages: usize,
        max: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_wraps() {
        let err: SheetError = LayoutError::invalid_grid(0, 1).into();
        assert!(err.to_string().starts_with("layout error:"));
    }

    #[test]
    fn test_source_error_wraps() {
        let err: SheetError = SourceError::ShortOutput {
            requested: 2,
            produced: 1,
        }
        .into();
        assert!(matches!(err, SheetError::Source(_)));
        assert!(err.to_string().contains("only 1"));
    }
}
