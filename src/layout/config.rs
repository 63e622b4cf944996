//! Page configuration for the layout engine
//!
//! All lengths are in millimetres.

use clap::ValueEnum;
use serde::Deserialize;

/// Default page margin in millimetres
pub const DEFAULT_MARGIN: f64 = 4.0;

/// Standard paper sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Paper {
    #[default]
    A4,
    A5,
    Letter,
    Legal,
}

impl Paper {
    /// Portrait dimensions `(width, height)`
    pub fn dimensions(self) -> (f64, f64) {
        match self {
            Paper::A4 => (210.0, 297.0),
            Paper::A5 => (148.0, 210.0),
            Paper::Letter => (215.9, 279.4),
            Paper::Legal => (215.9, 355.6),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    #[default]
    Landscape,
}

/// Page dimensions and margin budget
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageSpec {
    pub width: f64,
    pub height: f64,
    pub margin: f64,
}

impl Default for PageSpec {
    fn default() -> Self {
        Self::from_paper(Paper::A4, Orientation::Landscape)
    }
}

impl PageSpec {
    /// Create a page with explicit dimensions
    pub fn new(width: f64, height: f64, margin: f64) -> Self {
        Self {
            width,
            height,
            margin,
        }
    }

    /// Create a page from a paper preset with the default margin
    pub fn from_paper(paper: Paper, orientation: Orientation) -> Self {
        let (w, h) = paper.dimensions();
        let (width, height) = match orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        };
        Self::new(width, height, DEFAULT_MARGIN)
    }

    /// Set the margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    /// Set the page size
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_a4_landscape() {
        let page = PageSpec::default();
        assert_eq!(page.width, 297.0);
        assert_eq!(page.height, 210.0);
        assert_eq!(page.margin, 4.0);
    }

    #[test]
    fn test_portrait_keeps_preset_orientation() {
        let page = PageSpec::from_paper(Paper::Letter, Orientation::Portrait);
        assert_eq!((page.width, page.height), (215.9, 279.4));
    }

    #[test]
    fn test_builder_pattern() {
        let page = PageSpec::default().with_margin(10.0).with_size(100.0, 200.0);
        assert_eq!(page, PageSpec::new(100.0, 200.0, 10.0));
    }
}
