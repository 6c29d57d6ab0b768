use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::assets::color::Rgba8;
use crate::foundation::error::{CollageError, CollageResult};
use crate::layout::config::LayoutConfig;

/// Per-run presentation settings: title text, output year and palette.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CollageConfig {
    pub title: String,
    pub year: i32,
    #[serde(default = "default_background_start")]
    pub background_start: Rgba8,
    #[serde(default = "default_background_end")]
    pub background_end: Rgba8,
    #[serde(default = "default_text_color")]
    pub text_color: Rgba8,
}

fn default_background_start() -> Rgba8 {
    Rgba8::opaque(20, 24, 48)
}

fn default_background_end() -> Rgba8 {
    Rgba8::opaque(0, 0, 0)
}

fn default_text_color() -> Rgba8 {
    Rgba8::opaque(255, 255, 255)
}

impl CollageConfig {
    pub fn new(title: impl Into<String>, year: i32) -> Self {
        Self {
            title: title.into(),
            year,
            background_start: default_background_start(),
            background_end: default_background_end(),
            text_color: default_text_color(),
        }
    }
}

/// On-disk run configuration: the collage settings plus an optional layout override.
///
/// ```json
/// {
///   "title": "My 2025 in Movies",
///   "year": 2025,
///   "background_start": "#141830",
///   "background_end": [0, 0, 0],
///   "layout": { "posters_per_row": 4 }
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RunConfig {
    #[serde(flatten)]
    pub collage: CollageConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

impl RunConfig {
    pub fn new(collage: CollageConfig, layout: LayoutConfig) -> Self {
        Self { collage, layout }
    }

    pub fn from_reader<R: std::io::Read>(r: R) -> CollageResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| CollageError::validation(format!("parse run config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: impl AsRef<Path>) -> CollageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("open run config '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Structural checks only; a layout that fits no posters is still rejected later, by the
    /// session that needs the capacity.
    pub fn validate(&self) -> CollageResult<()> {
        if self.collage.title.trim().is_empty() {
            return Err(CollageError::validation("config title must be non-empty"));
        }
        self.layout.validate()
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
