//! Rendering with pluggable drawing surfaces.
//!
//! This module provides:
//! - The [`DrawSurface`] trait and its PDF and recording implementations
//! - Builtin fonts, text fitting and the single-cell renderer
//! - Colors and per-job color assignment

pub mod backend;
pub mod cell;
pub mod colors;
pub mod fonts;
pub mod pdf;
pub mod recorder;
pub mod text_fit;

// Re-export commonly used types
pub use backend::{DrawSurface, Point};
pub use cell::CellRenderer;
pub use colors::{palette, ColorMap, Rgb};
pub use fonts::{resolve_font, BuiltinFont};
pub use pdf::PdfSurface;
pub use recorder::{DrawOp, RecordedPage, RecordingSurface};
pub use text_fit::{baseline_offset, fit_font_size};
