//! Grid renderer for drawing puzzles from a layout plan
//!
//! This module walks the tiles of a `LayoutPlan` and issues line and text
//! commands to a `DrawingSurface`.

pub mod config;
pub mod error;
pub mod grid;

pub use config::{CellOrder, RenderOptions};
pub use error::RenderError;
pub use grid::{render, render_pages, stroke_width, LINES_PER_SIDE};
