//! Structured error types for stickersheet.
//!
//! Every validation failure is reported before the first page is drawn, so a
//! caller holding an `Err` never holds a partial document.

/// All errors that can occur while building a sticker sheet.
#[derive(Debug, thiserror::Error)]
pub enum StickerError {
    /// Every input row was empty or had a non-positive count.
    #[error("No valid sticker rows. Fill top, bottom, and a positive count.")]
    NoValidJobs,

    /// Margins leave no working area on the page.
    #[error("Margins are too large for the page size (working area {width} x {height}).")]
    MarginsTooLarge { width: f64, height: f64 },

    /// Not a single cell fits inside the working area.
    #[error(
        "Sticker size does not fit the working area. Increase page, reduce margins, or shrink stickers."
    )]
    CellDoesNotFit,

    /// The cell size yields more cells per page than can be planned.
    #[error("Sticker size is too small: {capacity} cells per page, at most {max} supported.")]
    TooManyCells { capacity: usize, max: usize },

    /// The job list asks for more stickers than one document may hold.
    #[error("Too many stickers requested; at most {max} per document.")]
    TooManyStickers { max: usize },

    /// A page or cell dimension is zero, negative or not a number.
    #[error("Invalid page spec: {0}")]
    InvalidSpec(String),

    /// CSV job list could not be read.
    #[error("CSV: {0}")]
    Csv(String),

    /// JSON job list, page spec or config could not be decoded.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Drawing surface failure.
    #[error("Render error: {0}")]
    Render(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, StickerError>;

#[cfg(target_arch = "wasm32")]
impl From<StickerError> for wasm_bindgen::JsValue {
    fn from(e: StickerError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
