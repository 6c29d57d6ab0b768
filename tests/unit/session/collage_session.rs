use chrono::{TimeZone, Utc};

use super::*;
use crate::encode::sink::InMemorySink;
use crate::foundation::error::CollageError;
use crate::model::history::WatchedMovie;
use crate::model::movie::MovieCatalog;
use crate::render::surface::Surface;

// Six posters per frame: two columns of three rows.
fn six_up_layout() -> LayoutConfig {
    LayoutConfig {
        canvas_width: 120,
        canvas_height: 200,
        top_margin: 10,
        bottom_margin: 10,
        side_margin: 10,
        poster_width: 20,
        poster_height: 40,
        posters_per_row: 2,
        poster_spacing_x: 5,
        poster_spacing_y: 5,
        border_radius: 3,
        title_area_height: 30,
        border_thickness: 1,
        shadow_offset: 2,
    }
}

fn history(n: usize) -> Vec<HistoryEntry> {
    (0..n)
        .map(|i| HistoryEntry {
            id: i as i64,
            watched_at: Utc.timestamp_opt(1_735_000_000 + i as i64 * 3600, 0).unwrap(),
            action: Default::default(),
            kind: Default::default(),
            movie: WatchedMovie {
                title: format!("M{i}"),
                ..WatchedMovie::default()
            },
        })
        .collect()
}

struct BluePosters;

impl PosterSource for BluePosters {
    fn load_poster(
        &self,
        _entry: &HistoryEntry,
        width: u32,
        height: u32,
    ) -> CollageResult<Surface> {
        Surface::from_premul(width, height, [0u8, 0, 255, 255].repeat((width * height) as usize))
    }
}

/// Accepts frames until `fail_on`, then reports an encode failure.
struct FailingSink {
    fail_on: usize,
    pushed: Vec<usize>,
}

impl FrameSink for FailingSink {
    fn begin(&mut self, _total_frames: usize) -> CollageResult<()> {
        Ok(())
    }

    fn push_frame(&mut self, info: FrameInfo, _frame: &Surface) -> CollageResult<String> {
        if info.frame_number == self.fail_on {
            return Err(CollageError::encode("disk full"));
        }
        self.pushed.push(info.frame_number);
        Ok(format!("frame {}", info.frame_number))
    }

    fn end(&mut self) -> CollageResult<()> {
        Ok(())
    }
}

fn session() -> CollageSession {
    CollageSession::new(six_up_layout(), CollageConfig::new("Year", 2025)).unwrap()
}

#[test]
fn six_up_layout_has_expected_capacity() {
    assert_eq!(session().posters_per_frame(), 6);
}

#[test]
fn ten_entries_render_as_six_then_four() {
    let mut sink = InMemorySink::new();
    let report = session()
        .generate(&history(10), &BluePosters, &MovieCatalog::new(), &mut sink)
        .unwrap();

    assert_eq!(report.frame_count(), 2);
    assert_eq!(
        report.outputs(),
        vec!["movie_collage_2025_part_1.png", "movie_collage_2025_part_2.png"]
    );
    let sizes: Vec<usize> = report.frames.iter().map(|f| f.slice.len()).collect();
    assert_eq!(sizes, vec![6, 4]);
    assert_eq!(report.frames[1].report.drawn, 4);
    assert_eq!(report.frames[1].report.stats.count, 4);

    assert_eq!(sink.total_frames(), Some(2));
    assert!(sink.ended());
    assert_eq!(sink.frames().len(), 2);
}

#[test]
fn full_single_frame_has_no_part_suffix() {
    let mut sink = InMemorySink::new();
    let report = session()
        .generate(&history(6), &BluePosters, &MovieCatalog::new(), &mut sink)
        .unwrap();
    assert_eq!(report.outputs(), vec!["movie_collage_2025.png"]);
    assert_eq!(report.frames[0].report.skipped_overflow, 0);
}

#[test]
fn empty_history_never_touches_sink() {
    let mut sink = InMemorySink::new();
    let report = session()
        .generate(&[], &BluePosters, &MovieCatalog::new(), &mut sink)
        .unwrap();
    assert_eq!(report.frame_count(), 0);
    assert_eq!(sink.total_frames(), None);
    assert!(!sink.ended());
}

#[test]
fn sink_failure_aborts_with_frame_number() {
    let mut sink = FailingSink {
        fail_on: 2,
        pushed: Vec::new(),
    };
    let err = session()
        .generate(&history(13), &BluePosters, &MovieCatalog::new(), &mut sink)
        .unwrap_err();

    match &err {
        CollageError::Frame { frame, source } => {
            assert_eq!(*frame, 2);
            assert!(matches!(**source, CollageError::Encode(_)));
        }
        other => panic!("unexpected error {other:?}"),
    }
    assert!(err.to_string().starts_with("error generating frame 2:"));
    // Frame 3 is never attempted.
    assert_eq!(sink.pushed, vec![1]);
}

#[test]
fn degenerate_layout_is_rejected_up_front() {
    let layout = LayoutConfig {
        canvas_height: 80,
        ..six_up_layout()
    };
    let err = CollageSession::new(layout, CollageConfig::new("Year", 2025)).unwrap_err();
    assert!(matches!(err, CollageError::Validation(_)));
}

#[test]
fn plan_matches_generated_slices() {
    let plan = session().plan(13).unwrap();
    let ranges: Vec<(usize, usize)> = plan.iter().map(|s| (s.start, s.end)).collect();
    assert_eq!(ranges, vec![(0, 6), (6, 12), (12, 13)]);
}

#[test]
fn run_config_round_trips_into_session() {
    let cfg = RunConfig::new(CollageConfig::new("Year", 2030), six_up_layout());
    let mut sink = InMemorySink::new();
    let report = generate_collage(cfg, &history(1), &BluePosters, &MovieCatalog::new(), &mut sink)
        .unwrap();
    assert_eq!(report.outputs(), vec!["movie_collage_2030.png"]);
    assert_eq!(report.posters_per_frame, 6);
}
