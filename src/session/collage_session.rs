use crate::assets::poster::PosterSource;
use crate::config::{CollageConfig, RunConfig};
use crate::encode::sink::{FrameInfo, FrameSink};
use crate::foundation::error::CollageResult;
use crate::layout::config::LayoutConfig;
use crate::layout::pagination::{FrameSlice, plan_frames};
use crate::model::history::HistoryEntry;
use crate::model::movie::MovieDetailProvider;
use crate::render::frame::{FrameCompositor, FrameReport};

/// One persisted frame of a run.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameOutput {
    /// History range rendered into the frame.
    pub slice: FrameSlice,
    /// Where the sink put it (a file path for [`crate::PngDirSink`]).
    pub output: String,
    /// Cell outcomes and stats.
    pub report: FrameReport,
}

/// Summary of a whole collage run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CollageReport {
    /// History entries handed to the run.
    pub total_entries: usize,
    /// Grid capacity used for pagination.
    pub posters_per_frame: usize,
    /// Persisted frames in order. Empty when the history was empty.
    pub frames: Vec<FrameOutput>,
}

impl CollageReport {
    /// Number of frames written.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Sink outputs in frame order.
    pub fn outputs(&self) -> Vec<&str> {
        self.frames.iter().map(|f| f.output.as_str()).collect()
    }

    /// Placeholder tiles across all frames.
    pub fn placeholders(&self) -> usize {
        self.frames.iter().map(|f| f.report.placeholders).sum()
    }
}

/// Pagination controller: splits a history into frames, renders them in order and hands each
/// one to a [`FrameSink`].
///
/// Construction front-loads layout validation so a degenerate grid is rejected before any
/// pixel work happens.
#[derive(Clone, Debug)]
pub struct CollageSession {
    layout: LayoutConfig,
    collage: CollageConfig,
    posters_per_frame: usize,
}

impl CollageSession {
    /// Validate `layout` and fix the grid capacity for the run.
    pub fn new(layout: LayoutConfig, collage: CollageConfig) -> CollageResult<Self> {
        let posters_per_frame = layout.posters_per_frame()?;
        Ok(Self {
            layout,
            collage,
            posters_per_frame,
        })
    }

    /// Session for a loaded [`RunConfig`].
    pub fn from_run_config(cfg: RunConfig) -> CollageResult<Self> {
        Self::new(cfg.layout, cfg.collage)
    }

    pub fn layout(&self) -> &LayoutConfig {
        &self.layout
    }

    pub fn collage(&self) -> &CollageConfig {
        &self.collage
    }

    pub fn posters_per_frame(&self) -> usize {
        self.posters_per_frame
    }

    /// Frame ranges for a history of `total` entries.
    pub fn plan(&self, total: usize) -> CollageResult<Vec<FrameSlice>> {
        plan_frames(total, self.posters_per_frame)
    }

    /// Render every frame of `history` into `sink`.
    ///
    /// Frames are rendered and persisted one at a time in order. The first fatal failure stops
    /// the run and comes back wrapped in [`crate::CollageError::Frame`] with its 1-based frame
    /// number.
    /// An empty history renders nothing and never touches the sink.
    pub fn generate(
        &self,
        history: &[HistoryEntry],
        posters: &dyn PosterSource,
        details: &dyn MovieDetailProvider,
        sink: &mut dyn FrameSink,
    ) -> CollageResult<CollageReport> {
        let slices = self.plan(history.len())?;
        let total_frames = slices.len();
        let mut report = CollageReport {
            total_entries: history.len(),
            posters_per_frame: self.posters_per_frame,
            frames: Vec::with_capacity(total_frames),
        };

        if slices.is_empty() {
            tracing::info!("history is empty, nothing to render");
            return Ok(report);
        }

        tracing::info!(
            frames = total_frames,
            movies = history.len(),
            posters_per_frame = self.posters_per_frame,
            "generating collage"
        );

        sink.begin(total_frames).map_err(|e| e.in_frame(1))?;

        let compositor = FrameCompositor::new(&self.layout, &self.collage, posters, details);
        for slice in slices {
            let frame_number = slice.number();
            let rendered = compositor
                .render(&history[slice.start..slice.end], frame_number, total_frames)
                .map_err(|e| e.in_frame(frame_number))?;

            let info = FrameInfo {
                year: self.collage.year,
                frame_number,
                total_frames,
            };
            let output = sink
                .push_frame(info, &rendered.surface)
                .map_err(|e| e.in_frame(frame_number))?;
            tracing::info!(frame = frame_number, total = total_frames, %output, "generated frame");

            report.frames.push(FrameOutput {
                slice,
                output,
                report: rendered.report,
            });
        }

        sink.end().map_err(|e| e.in_frame(total_frames))?;
        Ok(report)
    }
}

/// Build a session from `cfg` and run it once.
pub fn generate_collage(
    cfg: RunConfig,
    history: &[HistoryEntry],
    posters: &dyn PosterSource,
    details: &dyn MovieDetailProvider,
    sink: &mut dyn FrameSink,
) -> CollageResult<CollageReport> {
    CollageSession::from_run_config(cfg)?.generate(history, posters, details, sink)
}

#[cfg(test)]
#[path = "../../tests/unit/session/collage_session.rs"]
mod tests;
