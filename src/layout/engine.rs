//! Layout computation engine
//!
//! Computes a single shared grid size for every tile on a page, centers each
//! tile within its slot of the tiling grid, and derives stroke widths from
//! the grid size so the thick/thin contrast looks the same at any density.
//!
//! ## Page Geometry
//!
//! ```text
//!  |<-3m->|<---------------- drawing width ---------------->|<-m->|
//!  +------+-------------------------+-------------------------+-----+
//!  |      |   slot (0,0)            |   slot (1,0)            |     |
//!  |title |      +-------+          |      +-------+          |     |
//!  |strip |      |  L x L|          |      |  L x L|          |     |
//!  |      |      +-------+          |      +-------+          |     |
//!  +------+-------------------------+-------------------------+-----+
//! ```
//!
//! Two margins on the left are reserved for the rotated title, plus one
//! regular margin on each side. Vertically one margin is kept top and bottom.

use tracing::debug;

use super::config::PageSpec;
use super::error::LayoutError;
use super::types::*;

/// Fraction of a slot's shorter side that a grid may occupy
pub const SHRINK: f64 = 0.85;

/// Cells per grid side
pub const GRID_CELLS: usize = 9;

/// Divisor from side length to regular line stroke width
const THIN_DIVISOR: f64 = 300.0;

/// Divisor from side length to sub-block boundary stroke width
const THICK_DIVISOR: f64 = 120.0;

/// Compute the layout plan for one page of `nx` by `ny` tiles.
///
/// Fails with [`LayoutError::InvalidGrid`] for an empty tiling,
/// [`LayoutError::TooManyTiles`] for more than [`MAX_TILES`] tiles, and
/// [`LayoutError::DegenerateLayout`] when the margins leave no room for a grid.
pub fn compute_layout(page: &PageSpec, nx: usize, ny: usize) -> Result<LayoutPlan, LayoutError> {
    let grid = TileGrid::new(nx, ny)?;
    validate_page(page)?;

    let drawing_width = page.width - 4.0 * page.margin;
    let drawing_height = page.height - 2.0 * page.margin;
    let offset_y = (page.height - drawing_height) / 2.0;

    let slot_width = drawing_width / nx as f64;
    let slot_height = drawing_height / ny as f64;
    let side_length = slot_width.min(slot_height) * SHRINK;

    if !(side_length > 0.0) || !side_length.is_finite() {
        return Err(LayoutError::degenerate(side_length));
    }

    let mut tiles = Vec::with_capacity(grid.tile_count());
    for column in 0..nx {
        for row in 0..ny {
            let x0 = 3.0 * page.margin
                + column as f64 / nx as f64 * drawing_width
                + (slot_width - side_length) / 2.0;
            let y0 = offset_y
                + row as f64 / ny as f64 * drawing_height
                + (slot_height - side_length) / 2.0;
            debug!(column, row, x0, y0, "placed tile");
            tiles.push(TilePlacement {
                column,
                row,
                origin: Point::new(x0, y0),
            });
        }
    }

    let plan = LayoutPlan {
        page: *page,
        grid,
        side_length,
        field_length: side_length / GRID_CELLS as f64,
        thin_width: side_length / THIN_DIVISOR,
        thick_width: side_length / THICK_DIVISOR,
        drawing_width,
        drawing_height,
        offset_y,
        tiles,
        title_strip: BoundingBox::new(0.0, 0.0, 3.0 * page.margin, page.height),
    };

    debug!(
        nx,
        ny,
        side_length = plan.side_length,
        thin = plan.thin_width,
        thick = plan.thick_width,
        "computed layout"
    );

    Ok(plan)
}

fn validate_page(page: &PageSpec) -> Result<(), LayoutError> {
    if !(page.width > 0.0) || !page.width.is_finite() {
        return Err(LayoutError::invalid_page(format!(
            "width must be positive, got {}",
            page.width
        )));
    }
    if !(page.height > 0.0) || !page.height.is_finite() {
        return Err(LayoutError::invalid_page(format!(
            "height must be positive, got {}",
            page.height
        )));
    }
    if !(page.margin >= 0.0) || !page.margin.is_finite() {
        return Err(LayoutError::invalid_page(format!(
            "margin must be non-negative, got {}",
            page.margin
        )));
    }
    Ok(())
}
