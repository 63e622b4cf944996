//! Layout engine for placing Sudoku grids on a page
//!
//! This module takes a page description and a tiling request and computes
//! a [`LayoutPlan`]: one shared grid size, an origin per tile, and the two
//! stroke widths used for cell and sub-block boundaries.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::{Orientation, PageSpec, Paper, DEFAULT_MARGIN};
pub use engine::{compute_layout, GRID_CELLS, SHRINK};
pub use error::LayoutError;
pub use types::*;

/// Check that no two tiles of a plan overlap.
///
/// Returns the first pair of overlapping slots, if any.
pub fn find_overlap(plan: &LayoutPlan) -> Option<((usize, usize), (usize, usize))> {
    for (i, a) in plan.tiles.iter().enumerate() {
        let a_bounds = plan.tile_bounds(a);
        for b in &plan.tiles[i + 1..] {
            if a_bounds.intersects(&plan.tile_bounds(b)) {
                return Some(((a.column, a.row), (b.column, b.row)));
            }
        }
    }
    None
}
