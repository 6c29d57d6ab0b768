use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{CollageError, CollageResult};
use crate::model::history::HistoryEntry;

/// Base URL for poster images served by the metadata service.
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/";

/// Poster size bucket requested from the image service.
pub const POSTER_SIZE: &str = "w780";

/// Movie detail record from the metadata service. Unknown fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieDetails {
    /// Metadata-service id.
    pub id: u64,
    /// Display title.
    pub title: String,
    /// Poster path fragment, e.g. `/abc.jpg`.
    pub poster_path: Option<String>,
    /// Average vote; `0` or absent means unrated.
    pub vote_average: Option<f64>,
    /// Runtime in minutes; `0` or absent means unknown.
    pub runtime: Option<i64>,
}

impl MovieDetails {
    /// Average vote, or `None` when unrated.
    pub fn rating(&self) -> Option<f64> {
        self.vote_average.filter(|&v| v > 0.0)
    }

    /// Runtime in minutes, or `None` when unknown.
    pub fn runtime_minutes(&self) -> Option<i64> {
        self.runtime.filter(|&m| m > 0)
    }
}

/// Looks up movie details by metadata-service id.
pub trait MovieDetailProvider {
    /// Details for `tmdb_id`.
    fn movie_details(&self, tmdb_id: u64) -> CollageResult<MovieDetails>;
}

/// In-memory detail catalog, typically loaded from a JSON dump of detail records.
#[derive(Debug, Clone, Default)]
pub struct MovieCatalog {
    by_id: BTreeMap<u64, MovieDetails>,
}

impl MovieCatalog {
    /// Empty catalog; every lookup fails.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from detail records, keyed by their `id`. Later duplicates win.
    pub fn from_details(details: impl IntoIterator<Item = MovieDetails>) -> Self {
        Self {
            by_id: details.into_iter().map(|d| (d.id, d)).collect(),
        }
    }

    /// Parse a JSON array of detail records.
    pub fn from_reader<R: std::io::Read>(r: R) -> CollageResult<Self> {
        let details: Vec<MovieDetails> = serde_json::from_reader(r)
            .map_err(|e| CollageError::validation(format!("parse movie details JSON: {e}")))?;
        Ok(Self::from_details(details))
    }

    /// Parse a JSON array of detail records from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> CollageResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            CollageError::validation(format!(
                "open movie details JSON '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Add or replace one record.
    pub fn insert(&mut self, details: MovieDetails) {
        self.by_id.insert(details.id, details);
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Return `true` when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}

impl MovieDetailProvider for MovieCatalog {
    fn movie_details(&self, tmdb_id: u64) -> CollageResult<MovieDetails> {
        self.by_id
            .get(&tmdb_id)
            .cloned()
            .ok_or_else(|| CollageError::lookup(format!("no details for movie {tmdb_id}")))
    }
}

/// Full image URL for a poster path fragment.
pub fn poster_url(poster_path: &str) -> String {
    format!("{IMAGE_BASE_URL}{POSTER_SIZE}{poster_path}")
}

/// Poster URLs for every entry with a usable id and a known poster, oldest watch first.
///
/// History is listed newest first, so the result is reversed. Entries whose lookup fails or
/// that have no poster are skipped.
pub fn poster_urls(history: &[HistoryEntry], details: &dyn MovieDetailProvider) -> Vec<String> {
    let mut urls = Vec::with_capacity(history.len());
    for entry in history {
        let Some(id) = entry.tmdb_id() else {
            tracing::warn!(title = entry.title(), "no metadata id, skipping poster");
            continue;
        };
        match details.movie_details(id) {
            Ok(d) => match d.poster_path.as_deref().filter(|p| !p.is_empty()) {
                Some(path) => urls.push(poster_url(path)),
                None => tracing::warn!(title = entry.title(), id, "movie has no poster path"),
            },
            Err(err) => {
                tracing::warn!(title = entry.title(), id, error = %err, "detail lookup failed")
            }
        }
    }
    urls.reverse();
    urls
}

#[cfg(test)]
#[path = "../../tests/unit/model/movie.rs"]
mod tests;
