use std::cell::RefCell;

use chrono::Utc;

use super::*;
use crate::foundation::error::{CollageError, CollageResult};
use crate::model::history::{MovieIds, WatchedMovie};
use crate::model::movie::{MovieCatalog, MovieDetails};

fn entry(tmdb: Option<u64>) -> HistoryEntry {
    HistoryEntry {
        id: 0,
        watched_at: Utc::now(),
        action: Default::default(),
        kind: Default::default(),
        movie: WatchedMovie {
            title: "t".to_string(),
            year: None,
            ids: MovieIds {
                tmdb,
                ..MovieIds::default()
            },
        },
    }
}

fn movie(id: u64, vote: f64, runtime: i64) -> MovieDetails {
    MovieDetails {
        id,
        vote_average: Some(vote),
        runtime: Some(runtime),
        ..MovieDetails::default()
    }
}

struct CountingProvider {
    calls: RefCell<Vec<u64>>,
}

impl MovieDetailProvider for CountingProvider {
    fn movie_details(&self, tmdb_id: u64) -> CollageResult<MovieDetails> {
        self.calls.borrow_mut().push(tmdb_id);
        Err(CollageError::lookup("offline"))
    }
}

#[test]
fn averages_only_rated_and_sums_only_known_runtimes() {
    let catalog = MovieCatalog::from_details([
        movie(1, 8.0, 120),
        movie(2, 6.0, 0),
        movie(3, 0.0, 90),
    ]);
    let entries = vec![entry(Some(1)), entry(Some(2)), entry(Some(3)), entry(None)];
    let stats = compute_stats(&entries, &catalog);

    assert_eq!(stats.count, 4);
    assert!((stats.avg_rating - 7.0).abs() < 1e-9);
    assert!((stats.total_hours - 3.5).abs() < 1e-9);
}

#[test]
fn entries_without_ids_yield_zeroed_stats() {
    let entries = vec![entry(None), entry(Some(0)), entry(None)];
    let stats = compute_stats(&entries, &MovieCatalog::new());
    assert_eq!(
        stats,
        MovieStats {
            count: 3,
            total_hours: 0.0,
            avg_rating: 0.0,
        }
    );
}

#[test]
fn only_identified_entries_are_looked_up_and_failures_are_tolerated() {
    let provider = CountingProvider {
        calls: RefCell::new(Vec::new()),
    };
    let entries = vec![entry(Some(5)), entry(None), entry(Some(7))];
    let stats = compute_stats(&entries, &provider);

    assert_eq!(*provider.calls.borrow(), vec![5, 7]);
    assert_eq!(stats.count, 3);
    assert_eq!(stats.avg_rating, 0.0);
    assert_eq!(stats.total_hours, 0.0);
}

#[test]
fn empty_slice_is_all_zero() {
    assert_eq!(compute_stats(&[], &MovieCatalog::new()), MovieStats::default());
}
