use crate::assets::color::Rgba8;
use crate::foundation::math::lerp_u8;
use crate::render::surface::Surface;

/// Color of row `y` in a vertical gradient over `height` rows.
///
/// Each channel is interpolated independently with ratio `y / (height - 1)`, so row 0 is
/// `start` and the last row is `end`.
pub fn gradient_color(start: Rgba8, end: Rgba8, y: u32, height: u32) -> Rgba8 {
    let t = if height <= 1 {
        0.0
    } else {
        f64::from(y.min(height - 1)) / f64::from(height - 1)
    };
    Rgba8::new(
        lerp_u8(start.r, end.r, t),
        lerp_u8(start.g, end.g, t),
        lerp_u8(start.b, end.b, t),
        lerp_u8(start.a, end.a, t),
    )
}

/// Fill `canvas` with a top-to-bottom gradient; every pixel of a row gets the same color.
pub fn draw_gradient_background(canvas: &mut Surface, start: Rgba8, end: Rgba8) {
    let height = canvas.height();
    for y in 0..height {
        canvas.fill_row(y, gradient_color(start, end, y, height).to_premul());
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/background.rs"]
mod tests;
