use crate::model::history::HistoryEntry;
use crate::model::movie::MovieDetailProvider;

/// Summary line data for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovieStats {
    /// Entries in the frame, regardless of metadata availability.
    pub count: usize,
    /// Sum of known runtimes, in hours.
    pub total_hours: f64,
    /// Mean of known ratings, or `0.0` when no entry is rated.
    pub avg_rating: f64,
}

/// Aggregate count, runtime and rating over `entries`.
///
/// Entries without a metadata id are not looked up. Failed lookups count as unrated with
/// unknown runtime.
pub fn compute_stats(entries: &[HistoryEntry], details: &dyn MovieDetailProvider) -> MovieStats {
    let mut rating_sum = 0.0f64;
    let mut rating_count = 0usize;
    let mut total_minutes = 0i64;

    for entry in entries {
        let Some(id) = entry.tmdb_id() else {
            continue;
        };
        let movie = match details.movie_details(id) {
            Ok(movie) => movie,
            Err(err) => {
                tracing::warn!(title = entry.title(), id, error = %err, "detail lookup failed");
                continue;
            }
        };
        if let Some(rating) = movie.rating() {
            rating_sum += rating;
            rating_count += 1;
        }
        if let Some(minutes) = movie.runtime_minutes() {
            total_minutes += minutes;
        }
    }

    let avg_rating = if rating_count > 0 {
        rating_sum / rating_count as f64
    } else {
        0.0
    };

    MovieStats {
        count: entries.len(),
        total_hours: total_minutes as f64 / 60.0,
        avg_rating,
    }
}

#[cfg(test)]
#[path = "../tests/unit/stats.rs"]
mod tests;
