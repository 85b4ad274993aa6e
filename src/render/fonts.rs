//! Builtin PDF base fonts and their metrics.
//!
//! Sticker text is drawn with the standard Type 1 fonts every PDF reader ships,
//! so nothing has to be embedded. Widths come from the Adobe AFM files and are
//! expressed in 1/1000 em.

use serde::{Deserialize, Serialize};

/// Advance widths for the printable ASCII range (0x20..=0x7E).
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 222, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    278, 278, 584, 584, 584, 556, 1015, // ':'..'@'
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    278, 278, 278, 469, 556, 222, // '['..'`'
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, // 'a'..'m'
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, // 'n'..'z'
    334, 260, 334, 584, // '{'..'~'
];

const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 278, 333, 333, 389, 584, 278, 333, 278, 278, // ' '..'/'
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, // '0'..'9'
    333, 333, 584, 584, 584, 611, 975, // ':'..'@'
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, // 'A'..'M'
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, // 'N'..'Z'
    333, 278, 333, 584, 556, 278, // '['..'`'
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, // 'a'..'m'
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, // 'n'..'z'
    389, 280, 389, 584, // '{'..'~'
];

/// Character drawn (and measured) in place of anything outside printable ASCII.
pub const REPLACEMENT_CHAR: u8 = b'?';

/// Standard PDF fonts with known metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuiltinFont {
    Helvetica,
    #[default]
    HelveticaBold,
}

impl BuiltinFont {
    /// All builtin fonts, in resource-name order.
    pub const ALL: [BuiltinFont; 2] = [BuiltinFont::Helvetica, BuiltinFont::HelveticaBold];

    /// PostScript base font name.
    pub fn base_name(self) -> &'static str {
        match self {
            Self::Helvetica => "Helvetica",
            Self::HelveticaBold => "Helvetica-Bold",
        }
    }

    /// Resource name used in page content streams.
    pub fn resource_name(self) -> &'static str {
        match self {
            Self::Helvetica => "F1",
            Self::HelveticaBold => "F2",
        }
    }

    /// Ascender in 1/1000 em.
    pub fn ascent(self) -> f64 {
        718.0
    }

    /// Descender in 1/1000 em (negative).
    pub fn descent(self) -> f64 {
        -207.0
    }

    fn widths(self) -> &'static [u16; 95] {
        match self {
            Self::Helvetica => &HELVETICA_WIDTHS,
            Self::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }

    /// Advance width of one encoded byte in 1/1000 em.
    fn byte_width(self, byte: u8) -> u16 {
        let idx = usize::from(byte.saturating_sub(b' '));
        self.widths()
            .get(idx)
            .copied()
            .unwrap_or(self.fallback_width())
    }

    fn fallback_width(self) -> u16 {
        let idx = usize::from(REPLACEMENT_CHAR - b' ');
        self.widths().get(idx).copied().unwrap_or(556)
    }

    /// Rendered width of `text` at `size` points.
    pub fn string_width(self, text: &str, size: f64) -> f64 {
        let units: u64 = encode_text(text)
            .into_iter()
            .map(|b| u64::from(self.byte_width(b)))
            .sum();
        u64_to_f64(units) * size / 1000.0
    }
}

#[allow(clippy::cast_precision_loss)]
fn u64_to_f64(n: u64) -> f64 {
    n as f64
}

/// Encode text as single-byte characters for a standard font.
///
/// Printable ASCII passes through; everything else becomes `?`.
pub fn encode_text(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match u8::try_from(c) {
            Ok(b) if (b' '..=b'~').contains(&b) => b,
            _ => REPLACEMENT_CHAR,
        })
        .collect()
}

/// Resolve a requested font name to a builtin font.
///
/// Helvetica and Arial family names map directly (Arial is metric-compatible
/// with Helvetica). Anything else falls back to Helvetica-Bold.
pub fn resolve_font(name: &str) -> BuiltinFont {
    let key: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect();
    match key.as_str() {
        "helvetica" | "arial" | "helveticaregular" | "arialregular" => BuiltinFont::Helvetica,
        "helveticabold" | "arialbold" | "arialmtbold" => BuiltinFont::HelveticaBold,
        _ => {
            tracing::debug!(requested = name, "font unavailable, using Helvetica-Bold");
            BuiltinFont::HelveticaBold
        }
    }
}
