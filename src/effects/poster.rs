use crate::assets::color::Rgba8;
use crate::effects::mask::Mask;
use crate::layout::config::LayoutConfig;
use crate::render::surface::Surface;
use crate::render::text::draw_text;

/// Shadow color under each poster.
pub const SHADOW_COLOR: Rgba8 = Rgba8::new(0, 0, 0, 100);

/// Ring color drawn around each poster.
pub const BORDER_COLOR: Rgba8 = Rgba8::new(255, 255, 255, 200);

/// Placeholder tile fill.
pub const PLACEHOLDER_COLOR: Rgba8 = Rgba8::opaque(200, 200, 200);

/// Placeholder title color.
pub const PLACEHOLDER_TEXT_COLOR: Rgba8 = Rgba8::opaque(100, 100, 100);

/// Placeholder title font size.
pub const PLACEHOLDER_TEXT_SIZE: u32 = 16;

/// Copy of `poster` with everything outside its rounded silhouette made transparent.
pub fn apply_border_radius(poster: &Surface, radius: u32) -> Surface {
    let mut out = poster.clone();
    Mask::rounded_rect(poster.width(), poster.height(), radius).clip(&mut out);
    out
}

/// Flood every covered pixel of `mask` with `color`, top-left at `(x, y)`.
pub fn draw_shadow_with_mask(canvas: &mut Surface, mask: &Mask, x: i64, y: i64, color: Rgba8) {
    mask.fill_over(canvas, x, y, color.to_premul());
}

/// Filled rounded rectangle; drawn beneath a poster it shows as a ring.
pub fn draw_rounded_border(
    canvas: &mut Surface,
    x: i64,
    y: i64,
    width: u32,
    height: u32,
    radius: u32,
    color: Rgba8,
) {
    Mask::rounded_rect(width, height, radius).fill_over(canvas, x, y, color.to_premul());
}

/// Gray rounded tile with `title` centered, used when a poster cannot be loaded.
pub fn draw_placeholder(canvas: &mut Surface, layout: &LayoutConfig, title: &str, x: i64, y: i64) {
    Mask::rounded_rect(layout.poster_width, layout.poster_height, layout.border_radius).fill_over(
        canvas,
        x,
        y,
        PLACEHOLDER_COLOR.to_premul(),
    );
    draw_text(
        canvas,
        title,
        x + i64::from(layout.poster_width / 2),
        y + i64::from(layout.poster_height / 2),
        PLACEHOLDER_TEXT_SIZE,
        PLACEHOLDER_TEXT_COLOR,
        true,
    );
}

/// Composite one poster cell: offset shadow, then border ring, then the rounded poster.
pub fn draw_poster_with_effects(
    canvas: &mut Surface,
    layout: &LayoutConfig,
    poster: &Surface,
    x: i64,
    y: i64,
) {
    let rounded = apply_border_radius(poster, layout.border_radius);

    let offset = i64::from(layout.shadow_offset);
    let shadow =
        Mask::rounded_rect(layout.poster_width, layout.poster_height, layout.border_radius);
    draw_shadow_with_mask(canvas, &shadow, x + offset, y + offset, SHADOW_COLOR);

    let t = layout.border_thickness;
    let ring = t.saturating_mul(2);
    draw_rounded_border(
        canvas,
        x - i64::from(t),
        y - i64::from(t),
        layout.poster_width.saturating_add(ring),
        layout.poster_height.saturating_add(ring),
        layout.border_radius.saturating_add(t),
        BORDER_COLOR,
    );

    canvas.draw_over(&rounded, x, y);
}

#[cfg(test)]
#[path = "../../tests/unit/effects/poster.rs"]
mod tests;
