//! Sheet pagination: turning job rows into pages of sticker cells.
//!
//! Generation happens in two steps. [`SheetPlan::new`] validates the input,
//! computes the grid once and assigns every sticker (or blank) to a page slot.
//! [`SheetPlan::render`] then walks the plan and draws it on any
//! [`DrawSurface`]. All validation happens in the first step, so a surface is
//! never touched for input that would fail.

use serde::{Deserialize, Serialize};

use crate::config::RenderConfig;
use crate::error::{Result, StickerError};
use crate::layout::SheetLayout;
use crate::render::{CellRenderer, ColorMap, DrawSurface, PdfSurface, Rgb};
use crate::types::{total_stickers, validate_jobs, PageSpec, RawJob, StickerJob};

/// Most stickers a single document may hold.
pub const MAX_STICKERS_PER_DOCUMENT: usize = 1_000_000;

/// One sticker in the flattened stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sticker<'a> {
    pub top: &'a str,
    pub bottom: &'a str,
    pub color: Rgb,
}

/// Expand jobs into individual stickers.
///
/// Rows stay in input order and each row's repeats are consecutive. Pairs
/// missing from `colors` (every pair, for an empty palette) get `fallback`.
pub fn sticker_stream<'a, 'c>(
    jobs: &'a [StickerJob],
    colors: &'c ColorMap,
    fallback: Rgb,
) -> impl Iterator<Item = Sticker<'a>> + 'c
where
    'a: 'c,
{
    jobs.iter().flat_map(move |job| {
        let sticker = Sticker {
            top: job.top(),
            bottom: job.bottom(),
            color: colors.color_for(job).unwrap_or(fallback),
        };
        std::iter::repeat(sticker).take(job.count() as usize)
    })
}

/// What occupies a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotContent<'a> {
    Sticker(Sticker<'a>),
    /// Padding on the final page: divider and border, no text
    Blank,
}

/// Slot assignments for one page; always `capacity` entries long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan<'a> {
    pub slots: Vec<SlotContent<'a>>,
}

impl PagePlan<'_> {
    pub fn sticker_count(&self) -> usize {
        self.slots
            .iter()
            .filter(|s| matches!(s, SlotContent::Sticker(_)))
            .count()
    }

    pub fn blank_count(&self) -> usize {
        self.slots.len() - self.sticker_count()
    }
}

/// Figures reported back to the caller after generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetSummary {
    pub columns: usize,
    pub rows: usize,
    pub per_page: usize,
    pub total: usize,
    pub pages: usize,
    pub colors_used: usize,
}

/// A fully resolved sticker sheet, ready to draw.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetPlan<'a> {
    pub layout: SheetLayout,
    pub pages: Vec<PagePlan<'a>>,
    pub colors: ColorMap,
    pub total: usize,
}

impl<'a> SheetPlan<'a> {
    /// Assign every sticker of `jobs` to a page slot.
    ///
    /// # Errors
    /// - [`StickerError::NoValidJobs`] if `jobs` is empty
    /// - any error from [`SheetLayout::new`]
    /// - [`StickerError::TooManyStickers`] above [`MAX_STICKERS_PER_DOCUMENT`]
    pub fn new(jobs: &'a [StickerJob], spec: &PageSpec, config: &RenderConfig) -> Result<Self> {
        if jobs.is_empty() {
            return Err(StickerError::NoValidJobs);
        }
        let layout = SheetLayout::new(spec)?;
        let capacity = layout.capacity();
        let total = total_stickers(jobs)
            .filter(|&total| total <= MAX_STICKERS_PER_DOCUMENT)
            .ok_or(StickerError::TooManyStickers {
                max: MAX_STICKERS_PER_DOCUMENT,
            })?;
        let colors = ColorMap::from_jobs(jobs, &config.palette);

        let mut pages = Vec::with_capacity(total.div_ceil(capacity));
        {
            let mut stream = sticker_stream(jobs, &colors, config.text_color).peekable();
            while stream.peek().is_some() {
                let slots = (0..capacity)
                    .map(|_| stream.next().map_or(SlotContent::Blank, SlotContent::Sticker))
                    .collect();
                pages.push(PagePlan { slots });
            }
        }
        tracing::debug!(total, pages = pages.len(), capacity, "planned sticker sheet");

        Ok(Self {
            layout,
            pages,
            colors,
            total,
        })
    }

    /// Summary of the planned document.
    pub fn summary(&self) -> SheetSummary {
        SheetSummary {
            columns: self.layout.grid.columns,
            rows: self.layout.grid.rows,
            per_page: self.layout.capacity(),
            total: self.total,
            pages: self.pages.len(),
            // Single-color sheets draw everything in the text color
            colors_used: if self.colors.is_empty() {
                1
            } else {
                self.colors.colors_used()
            },
        }
    }

    /// Draw every planned page onto `surface`.
    ///
    /// # Errors
    /// Propagates page begin/end failures from the surface.
    pub fn render<S: DrawSurface + ?Sized>(
        &self,
        surface: &mut S,
        config: &RenderConfig,
    ) -> Result<()> {
        let renderer = CellRenderer::new(config);
        for page in &self.pages {
            surface.begin_page(self.layout.page_width, self.layout.page_height)?;
            for (slot, content) in page.slots.iter().enumerate() {
                let Some(rect) = self.layout.slot_rect(slot) else {
                    continue;
                };
                match content {
                    SlotContent::Sticker(s) => {
                        renderer.draw(surface, rect, Some(s.top), Some(s.bottom), s.color);
                    }
                    SlotContent::Blank => {
                        renderer.draw(surface, rect, None, None, config.border_color);
                    }
                }
            }
            surface.end_page()?;
        }
        Ok(())
    }
}

/// PDF bytes plus the summary shown to the user.
#[derive(Debug, Clone)]
pub struct GeneratedSheet {
    pub pdf: Vec<u8>,
    pub summary: SheetSummary,
}

/// Validate `raw` rows and produce the PDF document.
///
/// # Errors
/// Validation errors are returned before any page is drawn.
pub fn generate_sheet(
    raw: &[RawJob],
    spec: &PageSpec,
    config: &RenderConfig,
) -> Result<GeneratedSheet> {
    let jobs = validate_jobs(raw);
    generate_pdf(&jobs, spec, config)
}

/// Produce the PDF document for already validated jobs.
///
/// # Errors
/// Validation errors are returned before any page is drawn.
pub fn generate_pdf(
    jobs: &[StickerJob],
    spec: &PageSpec,
    config: &RenderConfig,
) -> Result<GeneratedSheet> {
    let plan = SheetPlan::new(jobs, spec, config)?;
    let mut surface = PdfSurface::new();
    plan.render(&mut surface, config)?;
    Ok(GeneratedSheet {
        pdf: surface.finish()?,
        summary: plan.summary(),
    })
}
