//! Sudoku Sheets - printable pages of Sudoku puzzles
//!
//! This library lays out a batch of puzzle strings on a page, computing one
//! shared grid size, a centered origin for every tile, and the stroke widths
//! that set 3x3 block boundaries apart from regular cell lines. The grids are
//! then drawn onto any [`DrawingSurface`], such as the PDF backend.
//!
//! # Example
//!
//! ```rust
//! use sudoku_sheets::{render_sheet, Puzzle, RecordingSurface, SheetConfig};
//!
//! let puzzle: Puzzle =
//!     "4...3.......6..8..........1....5..9..8....6...7.2........1.27..5.3....4.9........"
//!         .parse()
//!         .unwrap();
//! let mut surface = RecordingSurface::new();
//! let plan = render_sheet(&[puzzle], &SheetConfig::default(), &mut surface).unwrap();
//!
//! assert_eq!(plan.tiles.len(), 1);
//! assert_eq!(surface.line_count(), 20);
//! ```

pub mod error;
pub mod layout;
pub mod puzzle;
pub mod renderer;
pub mod settings;
pub mod source;
pub mod surface;

pub use error::SheetError;
pub use layout::{compute_layout, LayoutError, LayoutPlan, PageSpec, TileGrid};
pub use puzzle::{Puzzle, PuzzleError, BLANK_MARKER};
pub use renderer::{render, render_pages, CellOrder, RenderError, RenderOptions};
pub use settings::Settings;
pub use source::{Difficulty, FileSource, PuzzleSource, QqwingSource, SourceError};
pub use surface::{DrawingSurface, PdfSurface, RecordingSurface, SurfaceError};

use chrono::NaiveDateTime;
use tracing::info;

/// Most puzzles a single run may request across all pages
pub const MAX_SHEET_PUZZLES: usize = 100_000;

/// Configuration for producing a complete sheet
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Page size and margin
    pub page: PageSpec,
    /// Puzzles per page
    pub grid: TileGrid,
    /// Number of pages
    pub pages: usize,
    /// Difficulty requested from the puzzle source
    pub difficulty: Difficulty,
    /// Drawing options
    pub render: RenderOptions,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            page: PageSpec::default(),
            grid: TileGrid::default(),
            pages: 1,
            difficulty: Difficulty::default(),
            render: RenderOptions::default(),
        }
    }
}

impl SheetConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page
    pub fn with_page(mut self, page: PageSpec) -> Self {
        self.page = page;
        self
    }

    /// Set the tiling
    pub fn with_grid(mut self, grid: TileGrid) -> Self {
        self.grid = grid;
        self
    }

    /// Set the number of pages
    pub fn with_pages(mut self, pages: usize) -> Self {
        self.pages = pages;
        self
    }

    /// Set the requested difficulty
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Set the drawing options
    pub fn with_render(mut self, render: RenderOptions) -> Self {
        self.render = render;
        self
    }

    /// Total puzzles needed across all pages, `None` if the count overflows
    /// or exceeds [`MAX_SHEET_PUZZLES`]
    pub fn puzzle_count(&self) -> Option<usize> {
        self.grid
            .tile_count()
            .checked_mul(self.pages)
            .filter(|&count| count <= MAX_SHEET_PUZZLES)
    }
}

/// Lay out and draw `puzzles` onto `surface`, one surface page per sheet page.
///
/// The puzzle count must equal `nx * ny * pages`; otherwise nothing is drawn.
pub fn render_sheet<S: DrawingSurface + ?Sized>(
    puzzles: &[Puzzle],
    config: &SheetConfig,
    surface: &mut S,
) -> Result<LayoutPlan, SheetError> {
    let plan = compute_layout(&config.page, config.grid.nx, config.grid.ny)?;
    info!(
        nx = config.grid.nx,
        ny = config.grid.ny,
        pages = config.pages,
        side_length = plan.side_length,
        "computed sheet layout"
    );
    render_pages(&plan, puzzles, config.pages, surface, &config.render)?;
    Ok(plan)
}

/// Obtain puzzles from `source` and render them.
///
/// The layout is validated before the source is asked for anything, so an
/// impossible layout never starts a generator.
pub fn generate_sheet<P, S>(
    source: &mut P,
    config: &SheetConfig,
    surface: &mut S,
) -> Result<LayoutPlan, SheetError>
where
    P: PuzzleSource + ?Sized,
    S: DrawingSurface + ?Sized,
{
    let plan = compute_layout(&config.page, config.grid.nx, config.grid.ny)?;
    let count = config.puzzle_count().ok_or(SheetError::TooManyPuzzles {
        per_page: plan.puzzles_per_page(),
        pages: config.pages,
        max: MAX_SHEET_PUZZLES,
    })?;
    info!(count, difficulty = %config.difficulty, "requesting puzzles");
    let puzzles = source.generate(count, config.difficulty)?;
    render_sheet(&puzzles, config, surface)
}

/// Default output file name: `sudokus-<YYYYMMDD-HHMMSS>-<nx>x<ny>-<difficulty>.pdf`
pub fn output_filename(timestamp: &NaiveDateTime, grid: TileGrid, difficulty: Difficulty) -> String {
    format!(
        "sudokus-{}-{}x{}-{}.pdf",
        timestamp.format("%Y%m%d-%H%M%S"),
        grid.nx,
        grid.ny,
        difficulty
    )
}
