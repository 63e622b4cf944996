//! Error types for the layout engine

use thiserror::Error;

/// Errors that can occur during layout computation
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    /// Tiling with an empty row or column
    #[error("invalid tile grid {nx}x{ny}: both dimensions must be given and positive")]
    InvalidGrid { nx: i64, ny: i64 },

    /// More tiles than a page can sensibly hold
    #[error("tile grid {nx}x{ny} exceeds the limit of {max} tiles per page")]
    TooManyTiles { nx: usize, ny: usize, max: usize },

    /// Margins leave no room for a grid
    #[error("degenerate layout: computed grid side length {side_length} is not positive")]
    DegenerateLayout { side_length: f64 },

    /// Page dimensions that cannot describe a sheet
    #[error("invalid page: {reason}")]
    InvalidPage { reason: String },
}

impl LayoutError {
    /// Create an invalid grid error
    pub fn invalid_grid(nx: i64, ny: i64) -> Self {
        Self::InvalidGrid { nx, ny }
    }

    /// Create a degenerate layout error
    pub fn degenerate(side_length: f64) -> Self {
        Self::DegenerateLayout { side_length }
    }

    /// Create an invalid page error
    pub fn invalid_page(reason: impl Into<String>) -> Self {
        Self::InvalidPage {
            reason: reason.into(),
        }
    }
}
