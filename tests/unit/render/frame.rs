use chrono::{TimeZone, Utc};

use super::*;
use crate::assets::color::Rgba8;
use crate::foundation::error::CollageError;
use crate::model::history::WatchedMovie;
use crate::model::movie::MovieCatalog;
use crate::render::background::gradient_color;

const START: Rgba8 = Rgba8::opaque(0, 0, 80);
const END: Rgba8 = Rgba8::opaque(0, 80, 0);
const RED: [u8; 4] = [255, 0, 0, 255];

// One column, four rows fit; a fifth cell starts at y=170 and overflows.
fn column_layout() -> LayoutConfig {
    LayoutConfig {
        canvas_width: 100,
        canvas_height: 200,
        top_margin: 10,
        bottom_margin: 10,
        side_margin: 10,
        poster_width: 20,
        poster_height: 30,
        posters_per_row: 1,
        poster_spacing_x: 5,
        poster_spacing_y: 5,
        border_radius: 4,
        title_area_height: 20,
        border_thickness: 2,
        shadow_offset: 4,
    }
}

fn collage() -> CollageConfig {
    CollageConfig {
        title: "Test".to_string(),
        year: 2025,
        background_start: START,
        background_end: END,
        text_color: Rgba8::opaque(255, 255, 255),
    }
}

fn entries(n: usize) -> Vec<HistoryEntry> {
    (0..n)
        .map(|i| HistoryEntry {
            id: i as i64,
            watched_at: Utc.timestamp_opt(1_700_000_000 + i as i64 * 60, 0).unwrap(),
            action: Default::default(),
            kind: Default::default(),
            movie: WatchedMovie {
                title: format!("Movie {i}"),
                ..WatchedMovie::default()
            },
        })
        .collect()
}

struct SolidPosters;

impl PosterSource for SolidPosters {
    fn load_poster(
        &self,
        _entry: &HistoryEntry,
        width: u32,
        height: u32,
    ) -> CollageResult<Surface> {
        Surface::from_premul(width, height, RED.repeat((width * height) as usize))
    }
}

struct MissingPosters;

impl PosterSource for MissingPosters {
    fn load_poster(
        &self,
        entry: &HistoryEntry,
        _width: u32,
        _height: u32,
    ) -> CollageResult<Surface> {
        Err(CollageError::decode(format!("missing poster for {}", entry.title())))
    }
}

fn background_at(y: i64) -> [u8; 4] {
    gradient_color(START, END, y as u32, 200).to_premul()
}

#[test]
fn overflowing_cell_leaves_background_untouched() {
    let layout = column_layout();
    let collage = collage();
    let catalog = MovieCatalog::new();
    let compositor = FrameCompositor::new(&layout, &collage, &SolidPosters, &catalog);

    let frame = compositor.render(&entries(5), 1, 1).unwrap();
    assert_eq!(frame.report.drawn, 4);
    assert_eq!(frame.report.skipped_overflow, 1);
    assert_eq!(frame.report.placeholders, 0);

    // Neighbouring cell 3 (y=135..165) still renders.
    assert_eq!(frame.surface.pixel(50, 150), Some(RED));
    for y in 170..200 {
        for x in 30..70 {
            assert_eq!(frame.surface.pixel(x, y), Some(background_at(y)), "({x}, {y})");
        }
    }
}

#[test]
fn unreadable_poster_becomes_placeholder_tile() {
    let layout = column_layout();
    let collage = collage();
    let catalog = MovieCatalog::new();
    let compositor = FrameCompositor::new(&layout, &collage, &MissingPosters, &catalog);

    let frame = compositor.render(&entries(1), 1, 1).unwrap();
    assert_eq!(frame.report.placeholders, 1);
    assert_eq!(frame.report.drawn, 0);

    let tile = frame.surface.pixel(45, 33).unwrap();
    assert_eq!(tile, [200, 200, 200, 255]);
    assert_ne!(tile, background_at(33));
}

#[test]
fn draw_cell_reports_placeholder_reason() {
    let layout = column_layout();
    let collage = collage();
    let catalog = MovieCatalog::new();
    let compositor = FrameCompositor::new(&layout, &collage, &MissingPosters, &catalog);
    let mut canvas = Surface::new(100, 200).unwrap();

    let entry = &entries(1)[0];
    match compositor.draw_cell(&mut canvas, 0, entry) {
        CellOutcome::Placeholder { reason } => assert!(reason.contains("Movie 0")),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(compositor.draw_cell(&mut canvas, 4, entry), CellOutcome::Overflow);
}

#[test]
fn report_carries_frame_stats() {
    let layout = column_layout();
    let collage = collage();
    let catalog = MovieCatalog::new();
    let compositor = FrameCompositor::new(&layout, &collage, &SolidPosters, &catalog);

    let frame = compositor.render(&entries(3), 2, 3).unwrap();
    assert_eq!(frame.report.frame_number, 2);
    assert_eq!(frame.report.total_frames, 3);
    assert_eq!(frame.report.stats.count, 3);
    assert_eq!(frame.report.stats.avg_rating, 0.0);
    assert_eq!(frame.report.stats.total_hours, 0.0);
    assert_eq!(
        (frame.surface.width(), frame.surface.height()),
        (100, 200)
    );
}

#[test]
fn empty_slice_still_paints_background() {
    let layout = column_layout();
    let collage = collage();
    let catalog = MovieCatalog::new();
    let compositor = FrameCompositor::new(&layout, &collage, &SolidPosters, &catalog);

    let frame = compositor.render(&[], 1, 1).unwrap();
    assert_eq!(frame.surface.pixel(0, 199), Some(END.to_premul()));
    assert_eq!(frame.surface.pixel(99, 150), Some(background_at(150)));
}
