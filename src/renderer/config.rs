//! Configuration for grid rendering

use serde::Deserialize;

/// Points per millimetre used to size numerals
pub const POINTS_PER_UNIT: f64 = 2.83;

/// How puzzle string indices map onto grid cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CellOrder {
    /// Character `i*9+j` is drawn in column `i`, row `j`
    #[default]
    Transposed,
    /// Character `row*9+col` is drawn in column `col`, row `row`
    RowMajor,
}

impl CellOrder {
    /// Grid `(column, row)` for a string index
    pub fn position(self, index: usize) -> (usize, usize) {
        let (major, minor) = (index / 9, index % 9);
        match self {
            CellOrder::Transposed => (major, minor),
            CellOrder::RowMajor => (minor, major),
        }
    }
}

/// Configuration options for drawing puzzles onto a surface
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Font used for numerals and the title
    pub font: String,

    /// Numeral size as a fraction of the cell side
    pub font_scale: f64,

    /// Conversion from page units to font points
    pub points_per_unit: f64,

    /// Title drawn rotated in the strip left of the grids
    pub title: Option<String>,

    /// Title font size in points
    pub title_size: f64,

    pub cell_order: CellOrder,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font: "Helvetica".to_string(),
            font_scale: 0.8,
            points_per_unit: POINTS_PER_UNIT,
            title: None,
            title_size: 12.0,
            cell_order: CellOrder::Transposed,
        }
    }
}

impl RenderOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the font name
    pub fn with_font(mut self, font: impl Into<String>) -> Self {
        self.font = font.into();
        self
    }

    /// Set the numeral size relative to the cell side
    pub fn with_font_scale(mut self, scale: f64) -> Self {
        self.font_scale = scale;
        self
    }

    /// Set the side title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set how puzzle strings map onto cells
    pub fn with_cell_order(mut self, order: CellOrder) -> Self {
        self.cell_order = order;
        self
    }

    /// Numeral font size in points for a given cell side
    pub fn numeral_size(&self, field_length: f64) -> f64 {
        field_length * self.font_scale * self.points_per_unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let options = RenderOptions::default();
        assert_eq!(options.font, "Helvetica");
        assert_eq!(options.font_scale, 0.8);
        assert_eq!(options.title, None);
        assert_eq!(options.cell_order, CellOrder::Transposed);
    }

    #[test]
    fn test_builder_pattern() {
        let options = RenderOptions::new()
            .with_font("Courier")
            .with_font_scale(0.5)
            .with_title("Weekend")
            .with_cell_order(CellOrder::RowMajor);
        assert_eq!(options.font, "Courier");
        assert_eq!(options.font_scale, 0.5);
        assert_eq!(options.title.as_deref(), Some("Weekend"));
        assert_eq!(options.cell_order, CellOrder::RowMajor);
    }

    #[test]
    fn test_cell_order_positions() {
        assert_eq!(CellOrder::Transposed.position(1), (0, 1));
        assert_eq!(CellOrder::Transposed.position(9), (1, 0));
        assert_eq!(CellOrder::RowMajor.position(1), (1, 0));
        assert_eq!(CellOrder::RowMajor.position(80), (8, 8));
    }

    #[test]
    fn test_numeral_size() {
        let options = RenderOptions::default();
        assert!((options.numeral_size(10.0) - 22.64).abs() < 1e-9);
    }
}
