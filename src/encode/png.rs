use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::encode::sink::{FrameInfo, FrameSink, output_file_name};
use crate::foundation::error::{CollageError, CollageResult};
use crate::render::surface::Surface;

/// Writes each frame as a PNG file into one output directory.
///
/// Writes are not atomic: a crash mid-encode can leave a truncated file behind.
#[derive(Debug, Clone)]
pub struct PngDirSink {
    out_dir: PathBuf,
    written: Vec<PathBuf>,
}

impl PngDirSink {
    /// Sink writing into `out_dir` (created on `begin` if missing).
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
            written: Vec::new(),
        }
    }

    /// Target directory.
    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Files written so far, in frame order.
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }

    /// Path a frame will be written to.
    pub fn path_for(&self, info: FrameInfo) -> PathBuf {
        self.out_dir.join(output_file_name(info))
    }
}

impl FrameSink for PngDirSink {
    fn begin(&mut self, _total_frames: usize) -> CollageResult<()> {
        self.written.clear();
        std::fs::create_dir_all(&self.out_dir)
            .with_context(|| format!("create output dir '{}'", self.out_dir.display()))?;
        Ok(())
    }

    fn push_frame(&mut self, info: FrameInfo, frame: &Surface) -> CollageResult<String> {
        let path = self.path_for(info);
        let rgba = frame.to_rgba_image()?;
        rgba.save_with_format(&path, image::ImageFormat::Png)
            .map_err(|e| CollageError::encode(format!("write png '{}': {e}", path.display())))?;
        tracing::debug!(path = %path.display(), "wrote frame");
        let shown = path.display().to_string();
        self.written.push(path);
        Ok(shown)
    }

    fn end(&mut self) -> CollageResult<()> {
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/png.rs"]
mod tests;
