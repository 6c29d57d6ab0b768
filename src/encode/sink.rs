use crate::foundation::error::CollageResult;
use crate::render::surface::Surface;

/// Identifies one frame of a collage run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameInfo {
    /// Collage year.
    pub year: i32,
    /// 1-based frame number.
    pub frame_number: usize,
    /// Frames in the run.
    pub total_frames: usize,
}

/// `movie_collage_{year}.png`, or `movie_collage_{year}_part_{n}.png` for multi-frame runs.
pub fn output_file_name(info: FrameInfo) -> String {
    if info.total_frames > 1 {
        format!("movie_collage_{}_part_{}.png", info.year, info.frame_number)
    } else {
        format!("movie_collage_{}.png", info.year)
    }
}

/// Sink contract for persisting rendered frames.
///
/// Ordering contract: `push_frame` is called in strictly increasing frame order, each frame
/// fully rendered before it is pushed.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, total_frames: usize) -> CollageResult<()>;
    /// Persist one frame. Returns a description of where it went (e.g. a file path).
    fn push_frame(&mut self, info: FrameInfo, frame: &Surface) -> CollageResult<String>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> CollageResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    total_frames: Option<usize>,
    pub(crate) frames: Vec<(FrameInfo, Surface)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Frame count announced in `begin`, if called.
    pub fn total_frames(&self) -> Option<usize> {
        self.total_frames
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameInfo, Surface)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, total_frames: usize) -> CollageResult<()> {
        self.total_frames = Some(total_frames);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, info: FrameInfo, frame: &Surface) -> CollageResult<String> {
        self.frames.push((info, frame.clone()));
        Ok(output_file_name(info))
    }

    fn end(&mut self) -> CollageResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
