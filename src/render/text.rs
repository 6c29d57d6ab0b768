use core::convert::Infallible;

use embedded_graphics::{
    mono_font::{MonoFont, MonoTextStyle, ascii::FONT_7X13},
    pixelcolor::BinaryColor,
    prelude::*,
    text::{Baseline, Text},
};

use crate::assets::color::Rgba8;
use crate::render::surface::Surface;

/// Fixed-width face used for every label.
pub const TEXT_FONT: &MonoFont<'static> = &FONT_7X13;

/// Integer magnification applied to the base font for a nominal font `size`.
pub fn glyph_scale(size: u32) -> u32 {
    (size / 16).max(1)
}

/// Coarse width estimate used for centering: byte length times half the font size.
///
/// This does not measure glyphs; the drawn string is usually narrower or wider than this.
pub fn estimated_text_width(text: &str, size: u32) -> i64 {
    text.len() as i64 * i64::from(size / 2)
}

/// Pen start for `text` anchored at `x`, optionally centered with the coarse estimate.
pub fn text_origin_x(text: &str, x: i64, size: u32, center: bool) -> i64 {
    if center {
        x - estimated_text_width(text, size) / 2
    } else {
        x
    }
}

/// Draw target that magnifies font pixels into `scale` x `scale` blocks on a [`Surface`].
///
/// Font coordinates are relative to the pen origin, so glyphs laid out around `(0, 0)` land
/// around `(origin_x, origin_y)` on the canvas.
struct ScaledPen<'a> {
    canvas: &'a mut Surface,
    origin_x: i64,
    origin_y: i64,
    scale: i64,
    color: [u8; 4],
}

impl OriginDimensions for ScaledPen<'_> {
    fn size(&self) -> Size {
        Size::new(self.canvas.width(), self.canvas.height())
    }
}

impl DrawTarget for ScaledPen<'_> {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(coord, color) in pixels {
            if color.is_off() {
                continue;
            }
            let gx = self.origin_x + i64::from(coord.x) * self.scale;
            let gy = self.origin_y + i64::from(coord.y) * self.scale;
            for dy in 0..self.scale {
                for dx in 0..self.scale {
                    self.canvas.blend_pixel(gx + dx, gy + dy, self.color);
                }
            }
        }
        Ok(())
    }
}

/// Draw `text` with its baseline at `y`, starting at `x` (or centered on `x`).
///
/// Characters outside printable ASCII advance the pen without drawing.
pub fn draw_text(
    canvas: &mut Surface,
    text: &str,
    x: i64,
    y: i64,
    size: u32,
    color: Rgba8,
    center: bool,
) {
    // The ASCII face substitutes '?' for unknown glyphs; blank them instead.
    let printable: String = text
        .chars()
        .map(|c| if c.is_ascii_graphic() { c } else { ' ' })
        .collect();

    let mut pen = ScaledPen {
        canvas,
        origin_x: text_origin_x(text, x, size, center),
        origin_y: y,
        scale: i64::from(glyph_scale(size)),
        color: color.to_premul(),
    };
    let style = MonoTextStyle::new(TEXT_FONT, BinaryColor::On);
    let Ok(_) =
        Text::with_baseline(&printable, Point::zero(), style, Baseline::Alphabetic).draw(&mut pen);
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
