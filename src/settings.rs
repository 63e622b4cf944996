//! Settings file support
//!
//! A TOML file can preset the page, rendering, and generator options so that
//! repeated runs only need the tiling on the command line. Every key is
//! optional; command-line flags take precedence over the file.
//!
//! ```toml
//! [page]
//! paper = "letter"
//! orientation = "portrait"
//! margin = 6.0
//!
//! [render]
//! title = "Weekly puzzles"
//! font_scale = 0.7
//!
//! [generator]
//! program = "/usr/local/bin/qqwing"
//! difficulty = "expert"
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::{Orientation, PageSpec, Paper};
use crate::renderer::{CellOrder, RenderOptions};
use crate::source::{Difficulty, QqwingSource};

/// Errors that can occur when loading or parsing a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Options loaded from a settings file
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub page: PageSettings,
    pub render: RenderSettings,
    pub generator: GeneratorSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSettings {
    pub paper: Option<Paper>,
    pub orientation: Option<Orientation>,
    pub margin: Option<f64>,
    /// Custom width, overrides the paper preset together with `height`
    pub width: Option<f64>,
    pub height: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub font: Option<String>,
    pub font_scale: Option<f64>,
    pub title: Option<String>,
    pub cell_order: Option<CellOrder>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorSettings {
    pub program: Option<String>,
    pub args: Vec<String>,
    /// Case-insensitive; the `--difficulty` flag wins when given
    pub difficulty: Option<Difficulty>,
}

impl Settings {
    /// Load settings from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load settings from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(content)?)
    }

    /// Page described by these settings
    pub fn page_spec(&self) -> PageSpec {
        let page = &self.page;
        let mut spec = PageSpec::from_paper(
            page.paper.unwrap_or_default(),
            page.orientation.unwrap_or_default(),
        );
        if let (Some(width), Some(height)) = (page.width, page.height) {
            spec = spec.with_size(width, height);
        }
        if let Some(margin) = page.margin {
            spec = spec.with_margin(margin);
        }
        spec
    }

    /// Apply the render settings on top of `options`
    pub fn render_options(&self, mut options: RenderOptions) -> RenderOptions {
        let render = &self.render;
        if let Some(font) = &render.font {
            options.font = font.clone();
        }
        if let Some(scale) = render.font_scale {
            options.font_scale = scale;
        }
        if let Some(title) = &render.title {
            options.title = Some(title.clone());
        }
        if let Some(order) = render.cell_order {
            options.cell_order = order;
        }
        options
    }

    /// Generator configured by these settings
    pub fn generator(&self) -> QqwingSource {
        let source = match &self.generator.program {
            Some(program) => QqwingSource::new(program.clone()),
            None => QqwingSource::default(),
        };
        source.with_base_args(self.generator.args.clone())
    }
}
