//! Font sizing and vertical centering for single-line labels.

use super::fonts::BuiltinFont;

/// Largest size in `[min_size, desired_size]` at which `text` fits `max_width`.
///
/// Text that fits at `desired_size` keeps it. Otherwise the size shrinks in
/// proportion to `max_width / measured_width` in a single step, clamped at
/// `min_size`. Text that still overflows at `min_size` is drawn at `min_size`
/// and allowed to spill past the region.
pub fn fit_font_size(
    font: BuiltinFont,
    text: &str,
    max_width: f64,
    desired_size: f64,
    min_size: f64,
) -> f64 {
    let width = font.string_width(text, desired_size);
    if width <= max_width {
        return desired_size;
    }
    if desired_size <= min_size {
        return min_size;
    }
    (desired_size * (max_width / width)).max(min_size)
}

/// Distance from the vertical center of a line to its baseline.
///
/// Subtracting this from a region's center places glyphs so that ascender
/// and descender are balanced around it.
pub fn baseline_offset(font: BuiltinFont, size: f64) -> f64 {
    (font.ascent() + font.descent()) * size / 2000.0
}

/// Baseline for `font` at `size` centered between `y0` and `y1`.
pub fn centered_baseline(font: BuiltinFont, size: f64, y0: f64, y1: f64) -> f64 {
    (y0 + y1) / 2.0 - baseline_offset(font, size)
}
