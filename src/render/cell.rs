//! Drawing a single sticker cell.

use crate::config::RenderConfig;
use crate::layout::CellRect;

use super::backend::{DrawSurface, Point};
use super::colors::Rgb;
use super::fonts::BuiltinFont;
use super::text_fit::{centered_baseline, fit_font_size};

/// Draws sticker cells with one immutable configuration.
#[derive(Debug, Clone, Copy)]
pub struct CellRenderer<'a> {
    config: &'a RenderConfig,
    font: BuiltinFont,
}

impl<'a> CellRenderer<'a> {
    /// Resolves the configured font once for the whole document.
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            font: config.resolved_font(),
        }
    }

    /// Draw one cell: optional border, a divider at half height, and up to
    /// two lines of text centered in the regions above and below it.
    ///
    /// The divider is drawn even when both texts are absent, so blank cells
    /// keep the same look as filled ones.
    pub fn draw<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        rect: CellRect,
        top: Option<&str>,
        bottom: Option<&str>,
        text_color: Rgb,
    ) {
        let cfg = self.config;

        if cfg.draw_borders {
            surface.stroke_rect(rect, cfg.border_color, cfg.line_width);
        }

        let line_y = rect.y + rect.height * 0.5;
        surface.stroke_line(
            Point::new(rect.x + cfg.inner_padding, line_y),
            Point::new(rect.right() - cfg.inner_padding, line_y),
            cfg.line_color,
            cfg.line_width,
        );

        let vpad = cfg.text_padding_v;
        let max_width = rect.width - 2.0 * cfg.text_padding_h;
        let center_x = rect.center_x();

        if let Some(text) = top.filter(|t| !t.is_empty()) {
            self.draw_centered(
                surface,
                text,
                center_x,
                (line_y + vpad, rect.top() - vpad),
                max_width,
                cfg.top_text_bias,
                text_color,
            );
        }
        if let Some(text) = bottom.filter(|t| !t.is_empty()) {
            self.draw_centered(
                surface,
                text,
                center_x,
                (rect.y + vpad, line_y - vpad),
                max_width,
                0.0,
                text_color,
            );
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_centered<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        text: &str,
        center_x: f64,
        (y0, y1): (f64, f64),
        max_width: f64,
        bias: f64,
        color: Rgb,
    ) {
        let size = fit_font_size(
            self.font,
            text,
            max_width,
            self.config.font_size,
            self.config.min_font_size,
        );
        let width = self.font.string_width(text, size);
        let baseline = centered_baseline(self.font, size, y0, y1) + bias;
        surface.fill_text(
            text,
            Point::new(center_x - width / 2.0, baseline),
            self.font,
            size,
            color,
        );
    }
}

#[cfg(test)]
#[allow(
    clippy::unwrap_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]
mod tests {
    use super::*;
    use crate::render::recorder::{DrawOp, RecordingSurface};

    fn cell() -> CellRect {
        CellRect {
            x: 100.0,
            y: 200.0,
            width: 81.648,
            height: 42.12,
        }
    }

    fn render(config: &RenderConfig, top: Option<&str>, bottom: Option<&str>) -> Vec<DrawOp> {
        let mut surface = RecordingSurface::new();
        surface.begin_page(864.0, 1296.0).unwrap();
        CellRenderer::new(config).draw(&mut surface, cell(), top, bottom, Rgb::new(0, 0, 128));
        surface.end_page().unwrap();
        surface.into_pages().remove(0).ops
    }

    #[test]
    fn test_full_cell() {
        let ops = render(&RenderConfig::default(), Some("5001"), Some("19608"));
        assert_eq!(ops.len(), 4);
        assert!(matches!(ops[0], DrawOp::Rect { .. }));
        match &ops[1] {
            DrawOp::Line { from, to, .. } => {
                assert_eq!(from.y, 200.0 + 21.06);
                assert_eq!(to.y, from.y);
                assert!((from.x - 103.6).abs() < 1e-9);
                assert!((to.x - (181.648 - 3.6)).abs() < 1e-9);
            }
            other => panic!("expected divider, got {other:?}"),
        }
        match (&ops[2], &ops[3]) {
            (DrawOp::Text { text: t, origin: a, .. }, DrawOp::Text { text: b, origin: c, .. }) => {
                assert_eq!(t, "5001");
                assert_eq!(b, "19608");
                assert!(a.y > 221.06, "top line sits above the divider");
                assert!(c.y < 221.06, "bottom line sits below the divider");
            }
            other => panic!("expected two texts, got {other:?}"),
        }
    }

    #[test]
    fn test_text_is_horizontally_centered() {
        let ops = render(&RenderConfig::default(), Some("5001"), None);
        let Some(DrawOp::Text {
            origin, size, font, ..
        }) = ops.last()
        else {
            panic!("expected text");
        };
        let width = font.string_width("5001", *size);
        let center = origin.x + width / 2.0;
        assert!((center - cell().center_x()).abs() < 1e-9);
    }

    #[test]
    fn test_blank_cell_draws_divider_only() {
        let ops = render(&RenderConfig::default(), None, Some(""));
        assert_eq!(ops.len(), 2);
        assert!(matches!(ops[1], DrawOp::Line { .. }));
    }

    #[test]
    fn test_borders_optional() {
        let config = RenderConfig {
            draw_borders: false,
            ..RenderConfig::default()
        };
        let ops = render(&config, None, None);
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn test_top_bias_moves_only_top_line() {
        let plain = render(&RenderConfig::default(), Some("A"), Some("B"));
        let biased = render(
            &RenderConfig {
                top_text_bias: 2.0,
                ..RenderConfig::default()
            },
            Some("A"),
            Some("B"),
        );
        let y = |ops: &[DrawOp], idx: usize| match &ops[idx] {
            DrawOp::Text { origin, .. } => origin.y,
            other => panic!("expected text, got {other:?}"),
        };
        assert!((y(&biased, 2) - y(&plain, 2) - 2.0).abs() < 1e-9);
        assert_eq!(y(&biased, 3), y(&plain, 3));
    }

    #[test]
    fn test_long_text_shrinks_to_minimum() {
        let ops = render(
            &RenderConfig::default(),
            Some("THIS LABEL IS FAR TOO LONG"),
            None,
        );
        let Some(DrawOp::Text { size, .. }) = ops.last() else {
            panic!("expected text");
        };
        assert_eq!(*size, 12.0);
    }
}
