//! stickersheet - printable sheets of two-line sticker labels
//!
//! Lays out label jobs (top text, bottom text, repeat count) onto fixed-size
//! PDF pages:
//! - As many equal cells per page as fit inside the margins, centered
//! - Constant per-page capacity; the last page is padded with blank cells
//! - Job order preserved, one palette color per distinct label pair
//! - Text shrunk to fit each half of the cell, never below a minimum size
//!
//! # Usage (Rust)
//!
//! ```no_run
//! use stickersheet::{generate_sheet, PageSpec, RawJob, RenderConfig};
//!
//! let jobs = vec![RawJob::new("5001", "19608", 3)];
//! let sheet = generate_sheet(&jobs, &PageSpec::default(), &RenderConfig::default())?;
//! std::fs::write("sticker_sheet.pdf", &sheet.pdf)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { preview_grid, generate_sticker_sheet } from 'stickersheet';
//! await init();
//! const grid = preview_grid({ pageWidth: 12, pageHeight: 18 });
//! const sheet = generate_sticker_sheet(jobs, spec, undefined);
//! download(sheet.pdf(), sheet.summary());
//! ```

pub mod config;
pub mod csv;
pub mod error;
pub mod layout;
pub mod render;
pub mod sheet;
pub mod types;

use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;

pub use config::RenderConfig;
pub use error::StickerError;
pub use layout::{compute_grid, CapacityPreview, Grid, SheetLayout, MAX_CELLS_PER_PAGE};
pub use sheet::{
    generate_pdf, generate_sheet, GeneratedSheet, SheetPlan, SheetSummary,
    MAX_STICKERS_PER_DOCUMENT,
};
pub use types::*;

/// A generated document handed back to JavaScript.
#[wasm_bindgen]
pub struct SheetOutput {
    inner: GeneratedSheet,
}

#[wasm_bindgen]
impl SheetOutput {
    /// The PDF document bytes.
    #[must_use]
    pub fn pdf(&self) -> Vec<u8> {
        self.inner.pdf.clone()
    }

    /// The generation summary as a plain object.
    ///
    /// # Errors
    /// Returns an error if the summary cannot be converted.
    pub fn summary(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.summary)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
    }
}

/// Decode an optional JS argument, using the type's default for `undefined`/`null`.
fn from_js_or_default<T: DeserializeOwned + Default>(value: JsValue) -> Result<T, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(T::default());
    }
    serde_wasm_bindgen::from_value(value).map_err(JsValue::from)
}

/// Grid and working area for a page spec, for the live capacity preview.
///
/// # Errors
/// Returns an error if `spec` is not a valid page spec object.
#[wasm_bindgen]
pub fn preview_grid(spec: JsValue) -> Result<JsValue, JsValue> {
    let spec: PageSpec = from_js_or_default(spec)?;
    serde_wasm_bindgen::to_value(&CapacityPreview::new(&spec))
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Read a CSV, TSV or JSON job file into raw job rows.
///
/// # Errors
/// Returns an error if the file cannot be parsed.
#[wasm_bindgen]
pub fn parse_job_file(data: &[u8], extension: &str) -> Result<JsValue, JsValue> {
    let raw = csv::parse_jobs(data, csv::JobFormat::from_extension(extension))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_wasm_bindgen::to_value(&raw)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

/// Validate jobs and generate the sticker sheet PDF.
///
/// `spec` and `config` may be `undefined` to use the defaults.
///
/// # Errors
/// Returns the validation message if no document can be produced.
#[wasm_bindgen]
pub fn generate_sticker_sheet(
    jobs: JsValue,
    spec: JsValue,
    config: JsValue,
) -> Result<SheetOutput, JsValue> {
    console_error_panic_hook::set_once();
    let raw: Vec<RawJob> = serde_wasm_bindgen::from_value(jobs)?;
    let spec: PageSpec = from_js_or_default(spec)?;
    let config: RenderConfig = from_js_or_default(config)?;
    let inner = generate_sheet(&raw, &spec, &config).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(SheetOutput { inner })
}

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
