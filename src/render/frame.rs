use crate::assets::poster::PosterSource;
use crate::config::CollageConfig;
use crate::effects::poster::{draw_placeholder, draw_poster_with_effects};
use crate::foundation::error::CollageResult;
use crate::layout::config::LayoutConfig;
use crate::model::history::HistoryEntry;
use crate::model::movie::MovieDetailProvider;
use crate::render::background::draw_gradient_background;
use crate::render::surface::Surface;
use crate::render::title::{draw_title, frame_title};
use crate::stats::{MovieStats, compute_stats};

/// What happened to one grid cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellOutcome {
    /// Poster drawn with shadow and border.
    Drawn,
    /// Poster unavailable; a titled placeholder tile was drawn instead.
    Placeholder { reason: String },
    /// Cell would reach into the bottom safe zone and was left empty.
    Overflow,
}

/// Per-frame tally of cell outcomes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub frame_number: usize,
    pub total_frames: usize,
    pub stats: MovieStats,
    pub drawn: usize,
    pub placeholders: usize,
    pub skipped_overflow: usize,
}

impl FrameReport {
    fn record(&mut self, outcome: &CellOutcome) {
        match outcome {
            CellOutcome::Drawn => self.drawn += 1,
            CellOutcome::Placeholder { .. } => self.placeholders += 1,
            CellOutcome::Overflow => self.skipped_overflow += 1,
        }
    }
}

/// A rendered canvas plus what went into it.
#[derive(Clone, Debug)]
pub struct RenderedFrame {
    pub surface: Surface,
    pub report: FrameReport,
}

/// Renders single frames: background, title block, then the poster grid.
///
/// Holds only borrowed, immutable state, so one compositor serves every frame of a run.
pub struct FrameCompositor<'a> {
    layout: &'a LayoutConfig,
    collage: &'a CollageConfig,
    posters: &'a dyn PosterSource,
    details: &'a dyn MovieDetailProvider,
}

impl<'a> FrameCompositor<'a> {
    pub fn new(
        layout: &'a LayoutConfig,
        collage: &'a CollageConfig,
        posters: &'a dyn PosterSource,
        details: &'a dyn MovieDetailProvider,
    ) -> Self {
        Self {
            layout,
            collage,
            posters,
            details,
        }
    }

    pub fn layout(&self) -> &LayoutConfig {
        self.layout
    }

    /// Render `entries` as 1-based frame `frame_number` of `total_frames`.
    ///
    /// Entries are placed row-major from cell 0. Missing posters and overflowing cells never
    /// fail the frame; only canvas allocation can.
    #[tracing::instrument(
        skip_all,
        fields(frame = frame_number, total = total_frames, entries = entries.len())
    )]
    pub fn render(
        &self,
        entries: &[HistoryEntry],
        frame_number: usize,
        total_frames: usize,
    ) -> CollageResult<RenderedFrame> {
        let mut canvas = Surface::new(self.layout.canvas_width, self.layout.canvas_height)?;
        draw_gradient_background(
            &mut canvas,
            self.collage.background_start,
            self.collage.background_end,
        );

        let stats = compute_stats(entries, self.details);
        let title = frame_title(&self.collage.title, frame_number, total_frames);
        draw_title(&mut canvas, self.layout, &title, &stats, self.collage.text_color);

        let mut report = FrameReport {
            frame_number,
            total_frames,
            stats,
            ..FrameReport::default()
        };

        for (index, entry) in entries.iter().enumerate() {
            let outcome = self.draw_cell(&mut canvas, index, entry);
            match &outcome {
                CellOutcome::Drawn => {}
                CellOutcome::Placeholder { reason } => {
                    tracing::warn!(
                        index,
                        title = entry.title(),
                        %reason,
                        "poster unavailable, drew placeholder"
                    );
                }
                CellOutcome::Overflow => {
                    tracing::warn!(
                        index,
                        title = entry.title(),
                        "cell overflows bottom margin, skipped"
                    );
                }
            }
            report.record(&outcome);
        }

        Ok(RenderedFrame {
            surface: canvas,
            report,
        })
    }

    /// Draw grid cell `index` and report what was drawn. Never fails.
    pub fn draw_cell(
        &self,
        canvas: &mut Surface,
        index: usize,
        entry: &HistoryEntry,
    ) -> CellOutcome {
        let layout = self.layout;
        let (x, y) = layout.cell_origin(index);
        if layout.overflows_bottom(y) {
            return CellOutcome::Overflow;
        }
        tracing::debug!(index, x, y, title = entry.title(), "placing poster");

        match self
            .posters
            .load_poster(entry, layout.poster_width, layout.poster_height)
        {
            Ok(poster) => {
                draw_poster_with_effects(canvas, layout, &poster, x, y);
                CellOutcome::Drawn
            }
            Err(err) => {
                draw_placeholder(canvas, layout, entry.title(), x, y);
                CellOutcome::Placeholder {
                    reason: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
