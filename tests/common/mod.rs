//! Common test utilities for sticker sheet tests.
//!
//! Builders for jobs and page specs, plus helpers that plan and render a sheet
//! onto a [`RecordingSurface`] so tests can assert on draw calls instead of
//! PDF bytes.
#![allow(
    dead_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::float_cmp,
    clippy::panic
)]

use stickersheet::render::{RecordedPage, RecordingSurface};
use stickersheet::{PageSpec, RawJob, RenderConfig, SheetPlan, StickerJob};

/// Validated jobs from `(top, bottom, count)` tuples.
pub fn jobs(rows: &[(&str, &str, u32)]) -> Vec<StickerJob> {
    rows.iter()
        .map(|(top, bottom, count)| {
            StickerJob::new(top, bottom, *count).expect("test job must be valid")
        })
        .collect()
}

/// Raw rows from `(top, bottom, count)` tuples, without validation.
pub fn raw_jobs(rows: &[(&str, &str, i64)]) -> Vec<RawJob> {
    rows.iter()
        .map(|(top, bottom, count)| RawJob::new(top, bottom, *count))
        .collect()
}

/// `n` distinct single-sticker jobs named `J0`, `J1`, ...
pub fn numbered_jobs(n: usize) -> Vec<StickerJob> {
    (0..n)
        .map(|i| StickerJob::new(&format!("J{i}"), &format!("{i}"), 1).unwrap())
        .collect()
}

/// A page spec in inches with no margin.
pub fn page(width: f64, height: f64, cell_width: f64, cell_height: f64) -> PageSpec {
    PageSpec {
        page_width: width,
        page_height: height,
        margin: 0.0,
        cell_width,
        cell_height,
        ..PageSpec::default()
    }
}

/// A 2x2 grid: 2in x 2in page, no margin, 1in cells.
pub fn four_up() -> PageSpec {
    page(2.0, 2.0, 1.0, 1.0)
}

/// Plan and render onto a recording surface.
pub fn render_recorded(
    jobs: &[StickerJob],
    spec: &PageSpec,
    config: &RenderConfig,
) -> Vec<RecordedPage> {
    let plan = SheetPlan::new(jobs, spec, config).expect("plan should succeed");
    let mut surface = RecordingSurface::new();
    plan.render(&mut surface, config)
        .expect("render should succeed");
    surface.into_pages()
}

/// Top and bottom texts of a page, paired in drawing order.
pub fn text_pairs(page: &RecordedPage) -> Vec<(String, String)> {
    let texts: Vec<String> = page.texts().map(|(t, ..)| t.to_string()).collect();
    texts
        .chunks(2)
        .map(|c| (c[0].clone(), c[1].clone()))
        .collect()
}

/// Count of `/Type /Page` objects (excluding the `/Pages` tree) in a PDF.
pub fn pdf_page_objects(pdf: &[u8]) -> usize {
    let text = String::from_utf8_lossy(pdf);
    text.matches("/Type /Page").count() - text.matches("/Type /Pages").count()
}
