//! In-memory drawing surface.
//!
//! Records every draw call per page. Used for capacity previews and to assert
//! on layout without decoding PDF bytes.

use crate::error::{Result, StickerError};
use crate::layout::CellRect;

use super::backend::{DrawSurface, Point};
use super::colors::Rgb;
use super::fonts::BuiltinFont;

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Rect {
        rect: CellRect,
        color: Rgb,
        line_width: f64,
    },
    Line {
        from: Point,
        to: Point,
        color: Rgb,
        line_width: f64,
    },
    Text {
        text: String,
        origin: Point,
        font: BuiltinFont,
        size: f64,
        color: Rgb,
    },
}

/// A finished page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordedPage {
    pub width: f64,
    pub height: f64,
    pub ops: Vec<DrawOp>,
}

impl RecordedPage {
    /// Text draw calls on this page, in order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point, f64, Rgb)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text {
                text,
                origin,
                size,
                color,
                ..
            } => Some((text.as_str(), *origin, *size, *color)),
            _ => None,
        })
    }

    /// Number of outlined rectangles (cell borders) on this page.
    pub fn rect_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Rect { .. }))
            .count()
    }

    /// Number of lines (cell dividers) on this page.
    pub fn line_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Line { .. }))
            .count()
    }
}

/// Surface that keeps draw calls in memory.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pages: Vec<RecordedPage>,
    current: Option<RecordedPage>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Finished pages.
    pub fn pages(&self) -> &[RecordedPage] {
        &self.pages
    }

    pub fn into_pages(self) -> Vec<RecordedPage> {
        self.pages
    }

    fn record(&mut self, op: DrawOp) {
        if let Some(page) = self.current.as_mut() {
            page.ops.push(op);
        }
    }
}

impl DrawSurface for RecordingSurface {
    fn begin_page(&mut self, width: f64, height: f64) -> Result<()> {
        if self.current.is_some() {
            return Err(StickerError::Render("page already open".to_string()));
        }
        self.current = Some(RecordedPage {
            width,
            height,
            ops: Vec::new(),
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<()> {
        let page = self
            .current
            .take()
            .ok_or_else(|| StickerError::Render("no open page".to_string()))?;
        self.pages.push(page);
        Ok(())
    }

    fn stroke_rect(&mut self, rect: CellRect, color: Rgb, line_width: f64) {
        self.record(DrawOp::Rect {
            rect,
            color,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, line_width: f64) {
        self.record(DrawOp::Line {
            from,
            to,
            color,
            line_width,
        });
    }

    fn fill_text(&mut self, text: &str, origin: Point, font: BuiltinFont, size: f64, color: Rgb) {
        self.record(DrawOp::Text {
            text: text.to_string(),
            origin,
            font,
            size,
            color,
        });
    }
}
