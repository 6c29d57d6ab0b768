use std::fmt::Display;
use std::path::{Path, PathBuf};

use chrono::{DateTime, FixedOffset, Local, TimeZone, Utc};
use image::imageops::FilterType;

use crate::foundation::error::{CollageError, CollageResult};
use crate::model::history::HistoryEntry;
use crate::render::surface::Surface;

/// `strftime` pattern for poster file stems, e.g. `2025-03-14_21-05-09`.
pub const POSTER_STEM_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Extension of stored poster files.
pub const POSTER_EXTENSION: &str = "jpg";

/// Poster file name for a watch at `watched_at`, rendered in `tz`.
pub fn poster_file_name<Tz>(watched_at: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!(
        "{}.{POSTER_EXTENSION}",
        watched_at.with_timezone(tz).format(POSTER_STEM_FORMAT)
    )
}

/// Provides decoded poster thumbnails for history entries.
pub trait PosterSource {
    /// Poster for `entry`, resized to exactly `width` x `height`.
    fn load_poster(&self, entry: &HistoryEntry, width: u32, height: u32)
    -> CollageResult<Surface>;
}

/// Reads posters from a directory of files named after the local watch time.
#[derive(Debug, Clone)]
pub struct DirPosterSource {
    image_dir: PathBuf,
    utc_offset: Option<FixedOffset>,
}

impl DirPosterSource {
    /// Posters under `image_dir`, named in the process-local time zone.
    pub fn new(image_dir: impl Into<PathBuf>) -> Self {
        Self {
            image_dir: image_dir.into(),
            utc_offset: None,
        }
    }

    /// Name files in a fixed UTC offset instead of the local time zone.
    pub fn with_utc_offset(mut self, offset: FixedOffset) -> Self {
        self.utc_offset = Some(offset);
        self
    }

    /// Directory searched for posters.
    pub fn image_dir(&self) -> &Path {
        &self.image_dir
    }

    /// Expected poster path for `entry`.
    pub fn path_for(&self, entry: &HistoryEntry) -> PathBuf {
        let name = match &self.utc_offset {
            Some(offset) => poster_file_name(&entry.watched_at, offset),
            None => poster_file_name(&entry.watched_at, &Local),
        };
        self.image_dir.join(name)
    }
}

impl PosterSource for DirPosterSource {
    fn load_poster(
        &self,
        entry: &HistoryEntry,
        width: u32,
        height: u32,
    ) -> CollageResult<Surface> {
        let path = self.path_for(entry);
        let img = load_image(&path)?;
        resize_poster(&img, width, height)
    }
}

/// Decode an image file; `.png` is decoded as PNG and everything else as JPEG.
pub fn load_image(path: &Path) -> CollageResult<image::DynamicImage> {
    let bytes = std::fs::read(path)
        .map_err(|e| CollageError::decode(format!("read poster '{}': {e}", path.display())))?;
    let format = format_for_path(path);
    image::load_from_memory_with_format(&bytes, format).map_err(|e| {
        CollageError::decode(format!("decode {format:?} poster '{}': {e}", path.display()))
    })
}

/// Codec chosen for `path` by extension.
pub fn format_for_path(path: &Path) -> image::ImageFormat {
    let is_png = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"));
    if is_png {
        image::ImageFormat::Png
    } else {
        image::ImageFormat::Jpeg
    }
}

/// Lanczos3 resize to exactly `width` x `height`, normalized to premultiplied RGBA8.
pub fn resize_poster(
    img: &image::DynamicImage,
    width: u32,
    height: u32,
) -> CollageResult<Surface> {
    if width == 0 || height == 0 {
        return Err(CollageError::decode("poster target size must be > 0"));
    }
    let resized = image::imageops::resize(&img.to_rgba8(), width, height, FilterType::Lanczos3);
    Surface::from_rgba_image(resized)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/poster.rs"]
mod tests;
