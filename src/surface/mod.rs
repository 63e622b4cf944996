//! Drawing surfaces the grid renderer paints onto
//!
//! A surface is an exclusively owned, append-only log of drawing commands
//! in page coordinates (millimetres, origin top-left). [`PdfSurface`] turns
//! the commands into a PDF document; [`RecordingSurface`] keeps them for
//! inspection.

pub mod metrics;
pub mod pdf;
pub mod recording;

use std::path::{Path, PathBuf};

use thiserror::Error;

pub use pdf::PdfSurface;
pub use recording::{DrawCommand, RecordingSurface};

/// Errors raised by a drawing surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// The document could not be written to disk
    #[error("failed to write '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Nothing was drawn, so there is no document to save
    #[error("document has no pages")]
    NoPage,
}

/// Primitive drawing operations issued by the renderer
pub trait DrawingSurface {
    /// Start a new page of the given size; later commands draw onto it
    fn new_page(&mut self, width: f64, height: f64);

    /// Set the page margins used for text flow
    fn set_margins(&mut self, left: f64, top: f64, right: f64);

    /// Move the current position
    fn move_to(&mut self, x: f64, y: f64);

    /// Stroke a straight line with the given width
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64);

    /// Select the font for subsequent text; `size` is in points
    fn set_font(&mut self, name: &str, size: f64);

    /// Draw `text` centered in the box `(x, y, w, h)`
    fn draw_text_centered(&mut self, x: f64, y: f64, w: f64, h: f64, text: &str);

    /// Draw `text` rotated 90 degrees counter-clockwise, centered in the box `(x, y, w, h)`
    fn draw_text_rotated(&mut self, x: f64, y: f64, w: f64, h: f64, text: &str);

    /// Write the finished document to `path`
    fn save(&mut self, path: &Path) -> Result<(), SurfaceError>;
}
