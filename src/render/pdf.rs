//! PDF drawing surface.
//!
//! Writes one content stream per page and references the builtin fonts from
//! every page's resources, so the output needs no embedded font data.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str, TextStr};

use crate::error::{Result, StickerError};
use crate::layout::CellRect;

use super::backend::{DrawSurface, Point};
use super::colors::Rgb;
use super::fonts::{encode_text, BuiltinFont};

/// Producer string written to the document info dictionary.
const PRODUCER: &str = concat!("stickersheet ", env!("CARGO_PKG_VERSION"));

struct OpenPage {
    id: Ref,
    content_id: Ref,
    content: Content,
    width: f64,
    height: f64,
}

/// Drawing surface that produces a PDF document.
pub struct PdfSurface {
    pdf: Pdf,
    alloc: Ref,
    catalog_id: Ref,
    page_tree_id: Ref,
    info_id: Ref,
    font_ids: Vec<(BuiltinFont, Ref)>,
    page_ids: Vec<Ref>,
    current: Option<OpenPage>,
}

impl Default for PdfSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PdfSurface {
    pub fn new() -> Self {
        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();
        let info_id = alloc.bump();

        let mut font_ids = Vec::with_capacity(BuiltinFont::ALL.len());
        for font in BuiltinFont::ALL {
            let id = alloc.bump();
            pdf.type1_font(id)
                .base_font(Name(font.base_name().as_bytes()));
            font_ids.push((font, id));
        }

        Self {
            pdf,
            alloc,
            catalog_id,
            page_tree_id,
            info_id,
            font_ids,
            page_ids: Vec::new(),
            current: None,
        }
    }

    /// Number of finished pages.
    pub fn page_count(&self) -> usize {
        self.page_ids.len()
    }

    /// Write the page tree and catalog and return the document bytes.
    ///
    /// # Errors
    /// Returns an error if a page is still open.
    pub fn finish(mut self) -> Result<Vec<u8>> {
        if self.current.is_some() {
            return Err(StickerError::Render(
                "cannot finish document with an open page".to_string(),
            ));
        }
        let count = i32::try_from(self.page_ids.len())
            .map_err(|_| StickerError::Render("too many pages".to_string()))?;

        self.pdf
            .pages(self.page_tree_id)
            .kids(self.page_ids.iter().copied())
            .count(count);
        self.pdf.catalog(self.catalog_id).pages(self.page_tree_id);
        self.pdf
            .document_info(self.info_id)
            .title(TextStr("Sticker sheet"))
            .producer(TextStr(PRODUCER));

        Ok(self.pdf.finish())
    }

    fn content(&mut self) -> Option<&mut Content> {
        self.current.as_mut().map(|page| &mut page.content)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn pt(value: f64) -> f32 {
    value as f32
}

impl DrawSurface for PdfSurface {
    fn begin_page(&mut self, width: f64, height: f64) -> Result<()> {
        if self.current.is_some() {
            return Err(StickerError::Render("page already open".to_string()));
        }
        let id = self.alloc.bump();
        let content_id = self.alloc.bump();
        self.current = Some(OpenPage {
            id,
            content_id,
            content: Content::new(),
            width,
            height,
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        let page = self
            .current
            .take()
            .ok_or_else(|| StickerError::Render("no open page".to_string()))?;

        let data = page.content.finish();
        self.pdf.stream(page.content_id, &data);

        let mut pdf_page = self.pdf.page(page.id);
        pdf_page.media_box(Rect::new(0.0, 0.0, pt(page.width), pt(page.height)));
        pdf_page.parent(self.page_tree_id);
        pdf_page.contents(page.content_id);
        {
            let mut resources = pdf_page.resources();
            let mut fonts = resources.fonts();
            for (font, id) in &self.font_ids {
                fonts.pair(Name(font.resource_name().as_bytes()), *id);
            }
        }
        pdf_page.finish();

        self.page_ids.push(page.id);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: CellRect, color: Rgb, line_width: f64) {
        let Some(content) = self.content() else {
            return;
        };
        let (r, g, b) = color.to_unit();
        content
            .set_stroke_rgb(r, g, b)
            .set_line_width(pt(line_width))
            .rect(pt(rect.x), pt(rect.y), pt(rect.width), pt(rect.height))
            .stroke();
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, line_width: f64) {
        let Some(content) = self.content() else {
            return;
        };
        let (r, g, b) = color.to_unit();
        content
            .set_stroke_rgb(r, g, b)
            .set_line_width(pt(line_width))
            .move_to(pt(from.x), pt(from.y))
            .line_to(pt(to.x), pt(to.y))
            .stroke();
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: BuiltinFont, size: f64, color: Rgb) {
        let Some(content) = self.content() else {
            return;
        };
        let (r, g, b) = color.to_unit();
        let encoded = encode_text(text);
        content.set_fill_rgb(r, g, b);
        content
            .begin_text()
            .set_font(Name(font.resource_name().as_bytes()), pt(size))
            .next_line(pt(origin.x), pt(origin.y))
            .show(Str(&encoded))
            .end_text();
    }
}
