//! Core types for the layout engine

use super::config::PageSpec;
use super::error::LayoutError;

/// A 2D point in page coordinates (origin top-left, y grows downwards)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Square box with its top-left corner at `origin`
    pub fn square(origin: Point, side: f64) -> Self {
        Self::new(origin.x, origin.y, side, side)
    }

    /// Right edge x-coordinate
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge y-coordinate
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Center point of the bounding box
    pub fn center(&self) -> Point {
        Point {
            x: self.x + self.width / 2.0,
            y: self.y + self.height / 2.0,
        }
    }

    /// Check if this bounding box fully contains another
    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        other.x >= self.x
            && other.right() <= self.right()
            && other.y >= self.y
            && other.bottom() <= self.bottom()
    }

    /// Check if this bounding box intersects another.
    ///
    /// Boxes that only share an edge do not intersect.
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }
}

/// Most tiles a single page may hold
pub const MAX_TILES: usize = 10_000;

/// Requested tiling of puzzles on a page: `nx` columns by `ny` rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    pub nx: usize,
    pub ny: usize,
}

impl TileGrid {
    /// Create a tiling, rejecting empty rows or columns and pages holding
    /// more than [`MAX_TILES`] tiles
    pub fn new(nx: usize, ny: usize) -> Result<Self, LayoutError> {
        if nx == 0 || ny == 0 {
            return Err(LayoutError::invalid_grid(
                i64::try_from(nx).unwrap_or(i64::MAX),
                i64::try_from(ny).unwrap_or(i64::MAX),
            ));
        }
        match nx.checked_mul(ny) {
            Some(count) if count <= MAX_TILES => Ok(Self { nx, ny }),
            _ => Err(LayoutError::TooManyTiles {
                nx,
                ny,
                max: MAX_TILES,
            }),
        }
    }

    /// Create a tiling from signed counts as they arrive from the command line
    pub fn from_signed(nx: i64, ny: i64) -> Result<Self, LayoutError> {
        match (usize::try_from(nx), usize::try_from(ny)) {
            (Ok(x), Ok(y)) if x > 0 && y > 0 => Self::new(x, y),
            _ => Err(LayoutError::invalid_grid(nx, ny)),
        }
    }

    /// Number of puzzles one page holds, saturating for tilings built
    /// without [`TileGrid::new`]
    pub fn tile_count(&self) -> usize {
        self.nx.saturating_mul(self.ny)
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        Self { nx: 1, ny: 1 }
    }
}

/// Placement of a single tile within the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TilePlacement {
    /// Horizontal slot index in `[0, nx)`
    pub column: usize,
    /// Vertical slot index in `[0, ny)`
    pub row: usize,
    /// Top-left corner of the 9x9 grid
    pub origin: Point,
}

/// Geometry for one page of tiles, computed once by [`compute_layout`](super::compute_layout)
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPlan {
    pub page: PageSpec,
    pub grid: TileGrid,
    /// Side length shared by every tile
    pub side_length: f64,
    /// Side length of a single cell (`side_length / 9`)
    pub field_length: f64,
    pub thin_width: f64,
    pub thick_width: f64,
    pub drawing_width: f64,
    pub drawing_height: f64,
    pub offset_y: f64,
    /// Tiles in drawing order: column outer, row inner
    pub tiles: Vec<TilePlacement>,
    /// Strip left of the drawing area reserved for the rotated title
    pub title_strip: BoundingBox,
}

impl LayoutPlan {
    /// Look up the tile at slot `(column, row)`
    pub fn tile(&self, column: usize, row: usize) -> Option<&TilePlacement> {
        if column >= self.grid.nx || row >= self.grid.ny {
            return None;
        }
        self.tiles.get(column * self.grid.ny + row)
    }

    /// Square occupied by a tile's grid
    pub fn tile_bounds(&self, tile: &TilePlacement) -> BoundingBox {
        BoundingBox::square(tile.origin, self.side_length)
    }

    /// Slot of the tiling grid that a tile is centered in
    pub fn slot_bounds(&self, tile: &TilePlacement) -> BoundingBox {
        let slot_width = self.drawing_width / self.grid.nx as f64;
        let slot_height = self.drawing_height / self.grid.ny as f64;
        BoundingBox::new(
            3.0 * self.page.margin + tile.column as f64 * slot_width,
            self.offset_y + tile.row as f64 * slot_height,
            slot_width,
            slot_height,
        )
    }

    /// Index into a page's puzzle list for a tile, in reading order
    pub fn puzzle_index(&self, tile: &TilePlacement) -> usize {
        tile.row * self.grid.nx + tile.column
    }

    pub fn puzzles_per_page(&self) -> usize {
        self.grid.tile_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounding_box_edges() {
        let b = BoundingBox::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(b.right(), 40.0);
        assert_eq!(b.bottom(), 60.0);
        assert_eq!(b.center(), Point::new(25.0, 40.0));
    }

    #[test]
    fn test_touching_boxes_do_not_intersect() {
        let a = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
        let b = BoundingBox::new(10.0, 0.0, 10.0, 10.0);
        assert!(!a.intersects(&b));
        let c = BoundingBox::new(9.0, 9.0, 10.0, 10.0);
        assert!(a.intersects(&c));
    }

    #[test]
    fn test_contains_box() {
        let outer = BoundingBox::new(0.0, 0.0, 100.0, 100.0);
        assert!(outer.contains_box(&BoundingBox::new(10.0, 10.0, 20.0, 20.0)));
        assert!(!outer.contains_box(&BoundingBox::new(90.0, 10.0, 20.0, 20.0)));
    }

    #[test]
    fn test_tile_grid_rejects_zero() {
        assert!(TileGrid::new(0, 3).is_err());
        assert!(TileGrid::new(2, 0).is_err());
        assert_eq!(TileGrid::new(2, 3).unwrap().tile_count(), 6);
    }

    #[test]
    fn test_tile_grid_from_signed() {
        assert!(TileGrid::from_signed(-1, 2).is_err());
        assert!(TileGrid::from_signed(1, 0).is_err());
        assert_eq!(TileGrid::from_signed(3, 2).unwrap(), TileGrid { nx: 3, ny: 2 });
    }

    #[test]
    fn test_tile_grid_product_overflow_rejected() {
        assert!(matches!(
            TileGrid::new(usize::MAX / 2 + 1, 2),
            Err(LayoutError::TooManyTiles { ny: 2, .. })
        ));
        assert!(matches!(
            TileGrid::from_signed(i64::MAX, i64::MAX),
            Err(LayoutError::TooManyTiles { .. })
        ));
    }

    #[test]
    fn test_tile_grid_limit() {
        assert_eq!(TileGrid::new(100, 100).unwrap().tile_count(), MAX_TILES);
        assert!(matches!(
            TileGrid::from_signed(100_000, 100_000),
            Err(LayoutError::TooManyTiles { max: MAX_TILES, .. })
        ));
    }

    #[test]
    fn test_tile_count_saturates() {
        let grid = TileGrid {
            nx: usize::MAX,
            ny: 3,
        };
        assert_eq!(grid.tile_count(), usize::MAX);
    }
}
