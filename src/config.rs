//! Look-and-feel settings for sticker rendering.
//!
//! Every field has a default matching the classic sheet, and the struct
//! deserializes with `#[serde(default)]` so a JSON file only needs the fields
//! it changes.

use serde::{Deserialize, Serialize};

use crate::render::colors::{palette, Rgb};
use crate::render::fonts::{resolve_font, BuiltinFont};
use crate::types::POINTS_PER_INCH;

/// Immutable rendering settings, passed to the cell renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderConfig {
    /// Requested font; unknown names fall back to Helvetica-Bold
    pub font: String,
    /// Preferred text size in points
    pub font_size: f64,
    /// Smallest size the text fitter may shrink to, in points
    pub min_font_size: f64,
    /// Color of every sticker when `palette` is empty
    pub text_color: Rgb,
    pub draw_borders: bool,
    pub border_color: Rgb,
    pub line_color: Rgb,
    /// Divider stroke width in points
    pub line_width: f64,
    /// Horizontal inset of the divider from each cell edge, in points
    pub inner_padding: f64,
    /// Vertical padding inside each text region, in points
    pub text_padding_v: f64,
    /// Horizontal padding inside each text region, in points
    pub text_padding_h: f64,
    /// Colors cycled across distinct (top, bottom) pairs; empty for single-color sheets
    pub palette: Vec<Rgb>,
    /// Extra baseline shift for the top line only, in points (positive is up)
    pub top_text_bias: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            font: BuiltinFont::HelveticaBold.base_name().to_string(),
            font_size: 18.0,
            min_font_size: 12.0,
            text_color: palette::MAROON,
            draw_borders: true,
            border_color: palette::BLACK,
            line_color: palette::BLACK,
            line_width: 1.0,
            inner_padding: 0.05 * POINTS_PER_INCH,
            text_padding_v: 0.06 * POINTS_PER_INCH,
            text_padding_h: 0.06 * POINTS_PER_INCH,
            palette: palette::STICKER.to_vec(),
            top_text_bias: 0.0,
        }
    }
}

impl RenderConfig {
    /// The builtin font that will actually be used for `self.font`.
    pub fn resolved_font(&self) -> BuiltinFont {
        resolve_font(&self.font)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.font_size, 18.0);
        assert_eq!(config.min_font_size, 12.0);
        assert!((config.inner_padding - 3.6).abs() < 1e-9);
        assert!(config.palette.len() >= 12);
        assert_eq!(config.resolved_font(), BuiltinFont::HelveticaBold);
    }

    #[test]
    fn test_partial_json() {
        let config: RenderConfig =
            serde_json::from_str(r##"{"fontSize": 20, "drawBorders": false, "borderColor": "#333333"}"##)
                .unwrap();
        assert_eq!(config.font_size, 20.0);
        assert!(!config.draw_borders);
        assert_eq!(config.border_color, Rgb::new(0x33, 0x33, 0x33));
        assert_eq!(config.min_font_size, 12.0);
    }
}
