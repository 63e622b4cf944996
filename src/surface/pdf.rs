//! PDF backend built on `pdf-writer`
//!
//! Commands arrive in millimetres with the origin at the top-left corner of
//! the page and are converted to PDF points with the origin bottom-left.
//! Only the standard Type1 fonts are referenced, so no font data is embedded.

use std::path::Path;

use pdf_writer::types::LineCapStyle;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str, TextStr};
use tracing::{info, warn};

use super::metrics;
use super::{DrawingSurface, SurfaceError};

/// PDF points per millimetre
pub const POINTS_PER_MM: f64 = 72.0 / 25.4;

const DEFAULT_FONT: &str = "Helvetica";
const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Baseline offset below a cell's vertical center, as a fraction of font size
const BASELINE_SHIFT: f64 = 0.3;

struct PageContent {
    width: f64,
    height: f64,
    ops: Vec<u8>,
}

/// Surface that accumulates PDF page content streams
pub struct PdfSurface {
    pages: Vec<PageContent>,
    /// Base font names; resource names are `F1`, `F2`, ...
    fonts: Vec<String>,
    /// Index into `fonts` and size in points
    font: Option<(usize, f64)>,
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSurface {
    pub fn new() -> Self {
        Self {
            pages: Vec::new(),
            fonts: Vec::new(),
            font: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Serialize the document
    pub fn to_bytes(&self) -> Result<Vec<u8>, SurfaceError> {
        if self.pages.is_empty() {
            return Err(SurfaceError::NoPage);
        }

        let mut pdf = Pdf::new();
        let mut next_id = 1i32;
        let mut alloc = || {
            let r = Ref::new(next_id);
            next_id += 1;
            r
        };

        let catalog_id = alloc();
        let pages_id = alloc();
        let info_id = alloc();
        let font_ids: Vec<Ref> = self.fonts.iter().map(|_| alloc()).collect();
        let page_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();
        let content_ids: Vec<Ref> = self.pages.iter().map(|_| alloc()).collect();

        pdf.catalog(catalog_id).pages(pages_id);
        pdf.pages(pages_id)
            .kids(page_ids.iter().copied())
            .count(page_ids.len() as i32);
        pdf.document_info(info_id)
            .producer(TextStr(env!("CARGO_PKG_NAME")));

        for (name, id) in self.fonts.iter().zip(&font_ids) {
            pdf.type1_font(*id).base_font(Name(name.as_bytes()));
        }

        for (i, page) in self.pages.iter().enumerate() {
            {
                let mut writer = pdf.page(page_ids[i]);
                writer
                    .media_box(Rect::new(
                        0.0,
                        0.0,
                        (page.width * POINTS_PER_MM) as f32,
                        (page.height * POINTS_PER_MM) as f32,
                    ))
                    .parent(pages_id)
                    .contents(content_ids[i]);
                let mut resources = writer.resources();
                let mut fonts = resources.fonts();
                for (j, id) in font_ids.iter().enumerate() {
                    fonts.pair(Name(resource_name(j).as_bytes()), *id);
                }
            }
            pdf.stream(content_ids[i], &page.ops);
        }

        Ok(pdf.finish())
    }

    fn font_index(&mut self, name: &str) -> usize {
        match self.fonts.iter().position(|f| f == name) {
            Some(index) => index,
            None => {
                self.fonts.push(name.to_string());
                self.fonts.len() - 1
            }
        }
    }

    fn current_font(&mut self) -> (usize, f64) {
        match self.font {
            Some(font) => font,
            None => {
                let font = (self.font_index(DEFAULT_FONT), DEFAULT_FONT_SIZE);
                self.font = Some(font);
                font
            }
        }
    }

    /// Convert page millimetres to PDF points on the current page
    fn to_pdf(&self, x: f64, y: f64) -> Option<(f32, f32)> {
        let page = self.pages.last()?;
        Some((
            (x * POINTS_PER_MM) as f32,
            ((page.height - y) * POINTS_PER_MM) as f32,
        ))
    }

    fn emit(&mut self, build: impl FnOnce(&mut Content)) {
        let Some(page) = self.pages.last_mut() else {
            warn!("drawing command issued before the first page; ignored");
            return;
        };
        let mut content = Content::new();
        build(&mut content);
        page.ops.extend_from_slice(&content.finish());
    }

    fn show_text(&mut self, matrix: [f32; 6], text: &str) {
        let (font_index, size) = self.current_font();
        let resource = resource_name(font_index);
        let bytes = encode_text(text);
        self.emit(|content| {
            content
                .begin_text()
                .set_font(Name(resource.as_bytes()), size as f32)
                .set_text_matrix(matrix)
                .show(Str(&bytes))
                .end_text();
        });
    }
}

impl DrawingSurface for PdfSurface {
    fn new_page(&mut self, width: f64, height: f64) {
        self.pages.push(PageContent {
            width,
            height,
            ops: Vec::new(),
        });
    }

    // Draw calls carry absolute coordinates; margins and the current
    // position have no effect on PDF output.
    fn set_margins(&mut self, _left: f64, _top: f64, _right: f64) {}

    fn move_to(&mut self, _x: f64, _y: f64) {}

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, width: f64) {
        let (Some(start), Some(end)) = (self.to_pdf(x1, y1), self.to_pdf(x2, y2)) else {
            warn!("line issued before the first page; ignored");
            return;
        };
        self.emit(|content| {
            content
                .set_line_width((width * POINTS_PER_MM) as f32)
                .set_line_cap(LineCapStyle::ButtCap)
                .move_to(start.0, start.1)
                .line_to(end.0, end.1)
                .stroke();
        });
    }

    fn set_font(&mut self, name: &str, size: f64) {
        let index = self.font_index(name);
        self.font = Some((index, size));
    }

    fn draw_text_centered(&mut self, x: f64, y: f64, w: f64, h: f64, text: &str) {
        let (_, size) = self.current_font();
        let size_mm = size / POINTS_PER_MM;
        let left = x + (w - metrics::text_width(text, size_mm)) / 2.0;
        let baseline = y + h / 2.0 + BASELINE_SHIFT * size_mm;
        let Some((px, py)) = self.to_pdf(left, baseline) else {
            warn!("text issued before the first page; ignored");
            return;
        };
        self.show_text([1.0, 0.0, 0.0, 1.0, px, py], text);
    }

    fn draw_text_rotated(&mut self, x: f64, y: f64, w: f64, h: f64, text: &str) {
        let (_, size) = self.current_font();
        let size_mm = size / POINTS_PER_MM;
        // reads bottom to top; glyph tops point towards -x
        let baseline = x + w / 2.0 + BASELINE_SHIFT * size_mm;
        let start = y + h / 2.0 + metrics::text_width(text, size_mm) / 2.0;
        let Some((px, py)) = self.to_pdf(baseline, start) else {
            warn!("text issued before the first page; ignored");
            return;
        };
        self.show_text([0.0, 1.0, -1.0, 0.0, px, py], text);
    }

    fn save(&mut self, path: &Path) -> Result<(), SurfaceError> {
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes).map_err(|source| SurfaceError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        info!(path = %path.display(), pages = self.pages.len(), bytes = bytes.len(), "wrote PDF");
        Ok(())
    }
}

fn resource_name(index: usize) -> String {
    format!("F{}", index + 1)
}

/// Standard fonts only cover single-byte encodings
fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| if c.is_ascii() { c as u8 } else { b'?' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_empty_document_rejected() {
        let surface = PdfSurface::new();
        assert!(matches!(surface.to_bytes(), Err(SurfaceError::NoPage)));
    }

    #[test]
    fn test_single_page_document() {
        let mut surface = PdfSurface::new();
        surface.new_page(297.0, 210.0);
        surface.line(10.0, 10.0, 100.0, 10.0, 0.5);
        surface.set_font("Helvetica", 20.0);
        surface.draw_text_centered(10.0, 10.0, 20.0, 20.0, "5");

        let bytes = surface.to_bytes().unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(contains(&bytes, b"/Helvetica"));
        assert!(contains(&bytes, b"(5)"));
        assert_eq!(surface.page_count(), 1);
    }

    #[test]
    fn test_fonts_registered_once() {
        let mut surface = PdfSurface::new();
        surface.new_page(100.0, 100.0);
        surface.set_font("Helvetica", 12.0);
        surface.set_font("Helvetica", 30.0);
        surface.set_font("Courier", 10.0);
        assert_eq!(surface.fonts, vec!["Helvetica".to_string(), "Courier".to_string()]);
    }

    #[test]
    fn test_commands_before_page_ignored() {
        let mut surface = PdfSurface::new();
        surface.line(0.0, 0.0, 1.0, 1.0, 0.1);
        surface.draw_text_centered(0.0, 0.0, 1.0, 1.0, "1");
        assert_eq!(surface.page_count(), 0);
    }

    #[test]
    fn test_positioning_emits_no_content() {
        let mut surface = PdfSurface::new();
        surface.new_page(100.0, 100.0);
        surface.set_margins(5.0, 5.0, 5.0);
        surface.move_to(20.0, 30.0);
        assert!(surface.pages[0].ops.is_empty());

        surface.set_font("Helvetica", 12.0);
        surface.draw_text_centered(10.0, 10.0, 20.0, 20.0, "7");
        let moved = surface.pages[0].ops.clone();

        let mut plain = PdfSurface::new();
        plain.new_page(100.0, 100.0);
        plain.set_font("Helvetica", 12.0);
        plain.draw_text_centered(10.0, 10.0, 20.0, 20.0, "7");
        assert_eq!(moved, plain.pages[0].ops);
    }

    #[test]
    fn test_coordinates_flip_vertically() {
        let mut surface = PdfSurface::new();
        surface.new_page(100.0, 200.0);
        let (x, y) = surface.to_pdf(0.0, 200.0).unwrap();
        assert_eq!((x, y), (0.0, 0.0));
        let (_, top) = surface.to_pdf(0.0, 0.0).unwrap();
        assert!((f64::from(top) - 200.0 * POINTS_PER_MM).abs() < 1e-3);
    }

    #[test]
    fn test_save_to_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.pdf");
        let mut surface = PdfSurface::new();
        surface.new_page(100.0, 100.0);
        let err = surface.save(&path).unwrap_err();
        assert!(matches!(err, SurfaceError::Write { .. }));
        assert!(err.to_string().contains("out.pdf"));
    }

    #[test]
    fn test_encode_text_replaces_non_ascii() {
        assert_eq!(encode_text("Sudoku é"), b"Sudoku ?".to_vec());
    }
}
