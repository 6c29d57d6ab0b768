use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::foundation::error::{CollageError, CollageResult};

/// One watch event, as returned by the history service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// History record id.
    #[serde(default)]
    pub id: i64,
    /// When the movie was watched (UTC).
    pub watched_at: DateTime<Utc>,
    /// How the watch was recorded.
    #[serde(default)]
    pub action: WatchAction,
    /// Media type of the record.
    #[serde(rename = "type", default)]
    pub kind: MediaKind,
    /// The watched movie.
    pub movie: WatchedMovie,
}

impl HistoryEntry {
    /// Metadata-service id, if the entry has a usable one (`0` counts as missing).
    pub fn tmdb_id(&self) -> Option<u64> {
        self.movie.ids.tmdb.filter(|&id| id != 0)
    }

    /// Movie title.
    pub fn title(&self) -> &str {
        &self.movie.title
    }
}

/// How a watch was recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WatchAction {
    /// Live check-in.
    Checkin,
    /// Regular scrobble or manual add.
    #[default]
    Watch,
    /// Any other action string.
    #[serde(other)]
    Other,
}

/// Media type of a history record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    /// A movie.
    #[default]
    Movie,
    /// Any other media type.
    #[serde(other)]
    Other,
}

/// Movie summary embedded in a history record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchedMovie {
    /// Display title.
    pub title: String,
    /// Release year.
    #[serde(default)]
    pub year: Option<i32>,
    /// Cross-service identifiers.
    #[serde(default)]
    pub ids: MovieIds,
}

/// Cross-service identifiers for a movie. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovieIds {
    /// History-service id.
    #[serde(default)]
    pub trakt: Option<u64>,
    /// History-service slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// IMDb id.
    #[serde(default)]
    pub imdb: Option<String>,
    /// Metadata-service id used for detail lookups.
    #[serde(default)]
    pub tmdb: Option<u64>,
}

/// Parse a watch history (JSON array, newest first or oldest first) from a reader.
pub fn history_from_reader<R: std::io::Read>(r: R) -> CollageResult<Vec<HistoryEntry>> {
    serde_json::from_reader(r)
        .map_err(|e| CollageError::validation(format!("parse history JSON: {e}")))
}

/// Parse a watch history from a JSON file on disk.
pub fn load_history(path: impl AsRef<Path>) -> CollageResult<Vec<HistoryEntry>> {
    let path = path.as_ref();
    let f = File::open(path).map_err(|e| {
        CollageError::validation(format!("open history JSON '{}': {e}", path.display()))
    })?;
    history_from_reader(BufReader::new(f))
}

#[cfg(test)]
#[path = "../../tests/unit/model/history.rs"]
mod tests;
