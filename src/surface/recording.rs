//! In-memory surface that records every drawing command

use std::path::{Path, PathBuf};

use super::{DrawingSurface, SurfaceError};

/// A single recorded drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    NewPage {
        width: f64,
        height: f64,
    },
    SetMargins {
        left: f64,
        top: f64,
        right: f64,
    },
    MoveTo {
        x: f64,
        y: f64,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        width: f64,
    },
    SetFont {
        name: String,
        size: f64,
    },
    Text {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        text: String,
    },
    RotatedText {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        text: String,
    },
}

/// Surface that appends commands to a log instead of producing a document
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<DrawCommand>,
    saved: Vec<PathBuf>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All commands in the order they were issued
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Paths passed to [`DrawingSurface::save`]
    pub fn saved_paths(&self) -> &[PathBuf] {
        &self.saved
    }

    /// Number of stroked lines
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count()
    }

    /// Upright text draws as `(x, y, text)`
    pub fn texts(&self) -> Vec<(f64, f64, &str)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { x, y, text, .. } => Some((*x, *y, text.as_str())),
                _ => None,
            })
            .collect()
    }

    /// Number of pages started
    pub fn page_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::NewPage { .. }))
            .count()
    }

    fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }
}

impl DrawingSurface for RecordingSurface {
    fn new_page(&mut self, width: f64, height: f64) {
        self.push(DrawCommand::NewPage { width, height });
    }

    fn set_margins(&mut self, left: f64, top: f64, right: f64) {
        self.push(DrawCommand::SetMargins { left, top, right });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.push(DrawCommand::MoveTo { x, y });
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        self.push(DrawCommand::Line {
            x1,
            y1,
            x2,
            y2,
            width,
        });
    }

    fn set_font(&mut self, name: &str, size: f64) {
        self.push(DrawCommand::SetFont {
            name: name.to_string(),
            size,
        });
    }

    fn draw_text_centered(&mut self, x: f64, y: f64, w: f64, h: f64, text: &str) {
        self.push(DrawCommand::Text {
            x,
            y,
            w,
            h,
            text: text.to_string(),
        });
    }

    fn draw_text_rotated(&mut self, x: f64, y: f64, w: f64, h: f64, text: &str) {
        self.push(DrawCommand::RotatedText {
            x,
            y,
            w,
            h,
            text: text.to_string(),
        });
    }

    fn save(&mut self, path: &Path) -> Result<(), SurfaceError> {
        self.saved.push(path.to_path_buf());
        Ok(())
    }
}
