use crate::assets::color::Rgba8;
use crate::layout::config::LayoutConfig;
use crate::render::surface::Surface;
use crate::render::text::draw_text;
use crate::stats::MovieStats;

/// Title font size.
pub const TITLE_SIZE: u32 = 48;

/// Stats line font size.
pub const STATS_SIZE: u32 = 24;

/// Vertical gap between the title and stats baselines.
pub const STATS_LINE_OFFSET: i64 = 60;

/// Title for frame `frame_number` (1-based); multi-frame runs get a `" - Part N"` suffix.
pub fn frame_title(title: &str, frame_number: usize, total_frames: usize) -> String {
    if total_frames > 1 {
        format!("{title} - Part {frame_number}")
    } else {
        title.to_string()
    }
}

/// `"N Movies • H.H Hours • ⭐ R.R"`.
pub fn format_stats_line(stats: &MovieStats) -> String {
    format!(
        "{} Movies • {:.1} Hours • ⭐ {:.1}",
        stats.count, stats.total_hours, stats.avg_rating
    )
}

/// Draw the centered title in the top safe zone and the stats line beneath it.
pub fn draw_title(
    canvas: &mut Surface,
    layout: &LayoutConfig,
    title: &str,
    stats: &MovieStats,
    color: Rgba8,
) {
    let center_x = i64::from(layout.canvas_width / 2);
    let baseline = i64::from(layout.top_margin / 2);
    draw_text(canvas, title, center_x, baseline, TITLE_SIZE, color, true);
    draw_text(
        canvas,
        &format_stats_line(stats),
        center_x,
        baseline + STATS_LINE_OFFSET,
        STATS_SIZE,
        color,
        true,
    );
}

#[cfg(test)]
#[path = "../../tests/unit/render/title.rs"]
mod tests;
