//! Drawing surface trait for pluggable output formats.
//!
//! The paginator and cell renderer only ever talk to a [`DrawSurface`], so the
//! same layout code drives PDF output and the in-memory recorder used for
//! previews and tests.

use crate::error::Result;
use crate::layout::CellRect;

use super::colors::Rgb;
use super::fonts::BuiltinFont;

/// A point in page coordinates (points, origin bottom-left).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Trait for drawing surfaces
///
/// Coordinates are PDF points with the origin at the bottom-left corner of
/// the page. Draw calls between `begin_page` and `end_page` belong to that
/// page.
pub trait DrawSurface {
    /// Start a new page of the given size
    fn begin_page(&mut self, width: f64, height: f64) -> Result<()>;

    /// Finish the current page
    fn end_page(&mut self) -> Result<()>;

    /// Stroke the outline of a rectangle
    fn stroke_rect(&mut self, rect: CellRect, color: Rgb, line_width: f64);

    /// Stroke a straight line
    fn stroke_line(&mut self, from: Point, to: Point, color: Rgb, line_width: f64);

    /// Draw `text` with its baseline starting at `origin`
    fn fill_text(&mut self, text: &str, origin: Point, font: BuiltinFont, size: f64, color: Rgb);
}
