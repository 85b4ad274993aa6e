//! Colors and per-job color assignment.
//!
//! Each distinct (top, bottom) pair gets a palette color in the order it first
//! appears in the job list. The mapping is a pure function of that order.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::StickerJob;

/// RGB color with u8 components.
///
/// Serialized as a `#RRGGBB` string so config files stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse from a hex string (with or without #).
    /// Returns None if the format is invalid.
    pub fn from_hex(s: &str) -> Option<Self> {
        let hex = s.trim().strip_prefix('#').unwrap_or(s.trim());
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(hex.get(0..2)?, 16).ok()?;
        let g = u8::from_str_radix(hex.get(2..4)?, 16).ok()?;
        let b = u8::from_str_radix(hex.get(4..6)?, 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Convert to hex string (#RRGGBB).
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Components scaled to 0.0..=1.0, as PDF color operators expect.
    pub fn to_unit(self) -> (f32, f32, f32) {
        (
            f32::from(self.r) / 255.0,
            f32::from(self.g) / 255.0,
            f32::from(self.b) / 255.0,
        )
    }
}

impl Default for Rgb {
    fn default() -> Self {
        palette::BLACK
    }
}

impl TryFrom<String> for Rgb {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("invalid color {value:?}, expected #RRGGBB"))
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// Fixed colors used when drawing sticker sheets.
pub mod palette {
    use super::Rgb;

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    /// Maroon; the single text color of the classic sheet
    pub const MAROON: Rgb = Rgb::new(128, 0, 0);

    /// Job colors, cycled in first-seen order. Dark enough to read on white.
    pub const STICKER: [Rgb; 12] = [
        MAROON,
        Rgb::new(0, 0, 128),   // navy
        Rgb::new(0, 100, 0),   // dark green
        Rgb::new(128, 0, 128), // purple
        Rgb::new(178, 34, 34), // firebrick
        Rgb::new(0, 128, 128), // teal
        Rgb::new(139, 69, 19), // saddle brown
        Rgb::new(75, 0, 130),  // indigo
        Rgb::new(184, 134, 11), // dark goldenrod
        Rgb::new(47, 79, 79),  // dark slate gray
        Rgb::new(199, 21, 133), // medium violet red
        Rgb::new(70, 130, 180), // steel blue
    ];
}

/// Mapping from (top, bottom) pair to its assigned color.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorMap {
    colors: HashMap<(String, String), Rgb>,
    /// Pairs in first-seen order
    order: Vec<(String, String)>,
}

impl ColorMap {
    /// Assign colors to the unique pairs of `jobs` in first-seen order.
    ///
    /// Pair `i` gets `palette[i % palette.len()]`. An empty palette assigns
    /// nothing, leaving every sticker to the caller's single text color.
    pub fn from_jobs(jobs: &[StickerJob], palette: &[Rgb]) -> Self {
        let mut map = Self::default();
        if palette.is_empty() {
            return map;
        }
        for job in jobs {
            let key = (job.top().to_string(), job.bottom().to_string());
            if map.colors.contains_key(&key) {
                continue;
            }
            let idx = map.order.len() % palette.len();
            let color = palette.get(idx).copied().unwrap_or_default();
            map.colors.insert(key.clone(), color);
            map.order.push(key);
        }
        map
    }

    /// Color for a pair, if it appeared in the job list.
    pub fn get(&self, top: &str, bottom: &str) -> Option<Rgb> {
        self.colors
            .get(&(top.to_string(), bottom.to_string()))
            .copied()
    }

    /// Color for a job's pair.
    pub fn color_for(&self, job: &StickerJob) -> Option<Rgb> {
        self.get(job.top(), job.bottom())
    }

    /// Number of distinct pairs.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Number of distinct colors actually handed out.
    pub fn colors_used(&self) -> usize {
        self.colors.values().collect::<HashSet<_>>().len()
    }
}
