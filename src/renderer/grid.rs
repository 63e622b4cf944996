//! Grid drawing pass over a layout plan

use tracing::debug;

use crate::layout::{LayoutPlan, Point, GRID_CELLS};
use crate::puzzle::{Puzzle, PUZZLE_LEN};
use crate::surface::DrawingSurface;

use super::config::{CellOrder, RenderOptions};
use super::error::RenderError;

/// Grid lines per direction, including both borders
pub const LINES_PER_SIDE: usize = GRID_CELLS + 1;

/// Downward nudge of numerals as a fraction of the cell side
const NUMERAL_DROP: f64 = 1.0 / 20.0;

/// Stroke width for grid line `index`; every third line bounds a 3x3 block
pub fn stroke_width(plan: &LayoutPlan, index: usize) -> f64 {
    if index % 3 == 0 {
        plan.thick_width
    } else {
        plan.thin_width
    }
}

/// Render one page of puzzles onto the surface's current page.
///
/// `puzzles` must hold exactly one puzzle per tile; otherwise nothing is drawn.
pub fn render<S: DrawingSurface + ?Sized>(
    plan: &LayoutPlan,
    puzzles: &[Puzzle],
    surface: &mut S,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    check_count(plan.puzzles_per_page(), puzzles.len())?;
    draw_page(plan, puzzles, surface, options);
    Ok(())
}

/// Render `pages` pages, each starting a new surface page and taking the
/// next `nx*ny` puzzles in order.
pub fn render_pages<S: DrawingSurface + ?Sized>(
    plan: &LayoutPlan,
    puzzles: &[Puzzle],
    pages: usize,
    surface: &mut S,
    options: &RenderOptions,
) -> Result<(), RenderError> {
    let per_page = plan.puzzles_per_page();
    check_count(per_page.saturating_mul(pages), puzzles.len())?;

    for (index, chunk) in puzzles.chunks(per_page).enumerate() {
        debug!(page = index + 1, of = pages, "rendering page");
        surface.new_page(plan.page.width, plan.page.height);
        surface.set_margins(0.0, 0.0, 0.0);
        draw_page(plan, chunk, surface, options);
    }
    Ok(())
}

fn check_count(expected: usize, actual: usize) -> Result<(), RenderError> {
    if expected != actual {
        return Err(RenderError::PuzzleCountMismatch { expected, actual });
    }
    Ok(())
}

fn draw_page<S: DrawingSurface + ?Sized>(
    plan: &LayoutPlan,
    puzzles: &[Puzzle],
    surface: &mut S,
    options: &RenderOptions,
) {
    if let Some(title) = &options.title {
        let strip = plan.title_strip;
        surface.set_font(&options.font, options.title_size);
        surface.move_to(strip.x, strip.y);
        surface.draw_text_rotated(strip.x, strip.y, strip.width, strip.height, title);
    }

    surface.set_font(&options.font, options.numeral_size(plan.field_length));

    for tile in &plan.tiles {
        let puzzle = &puzzles[plan.puzzle_index(tile)];
        draw_grid_lines(plan, tile.origin, surface);
        draw_numerals(plan, tile.origin, puzzle, options.cell_order, surface);
    }
}

fn draw_grid_lines<S: DrawingSurface + ?Sized>(plan: &LayoutPlan, origin: Point, surface: &mut S) {
    let side = plan.side_length;
    let field = plan.field_length;

    // strokes overhang by half their width so corners close flush
    for k in 0..LINES_PER_SIDE {
        let w = stroke_width(plan, k);
        let y = origin.y + field * k as f64;
        surface.line(origin.x - w / 2.0, y, origin.x + w / 2.0 + side, y, w);
    }
    for k in 0..LINES_PER_SIDE {
        let w = stroke_width(plan, k);
        let x = origin.x + field * k as f64;
        surface.line(x, origin.y - w / 2.0, x, origin.y + w / 2.0 + side, w);
    }
}

fn draw_numerals<S: DrawingSurface + ?Sized>(
    plan: &LayoutPlan,
    origin: Point,
    puzzle: &Puzzle,
    order: CellOrder,
    surface: &mut S,
) {
    let field = plan.field_length;
    let mut buf = [0u8; 4];

    for index in 0..PUZZLE_LEN {
        let Some(c) = puzzle.cell(index) else {
            continue;
        };
        let (column, row) = order.position(index);
        let x = origin.x + field * column as f64;
        let y = origin.y + field * row as f64 + field * NUMERAL_DROP;
        surface.move_to(x, y);
        surface.draw_text_centered(x, y, field, field, c.encode_utf8(&mut buf));
    }
}
