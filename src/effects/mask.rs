use crate::effects::rounded::RoundedRect;
use crate::render::surface::Surface;

/// Per-pixel coverage for a rectangle-sized region (0 = outside, 255 = inside).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    alpha: Vec<u8>,
}

impl Mask {
    /// Solid mask of the rounded silhouette of a `width` x `height` rectangle.
    pub fn rounded_rect(width: u32, height: u32, radius: u32) -> Self {
        let shape = RoundedRect::at_origin(width, height, radius);
        let mut alpha = Vec::with_capacity(width as usize * height as usize);
        for y in 0..i64::from(height) {
            for x in 0..i64::from(width) {
                alpha.push(if shape.contains(x, y) { 255 } else { 0 });
            }
        }
        Self {
            width,
            height,
            alpha,
        }
    }

    /// Mask width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Mask height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Coverage at `(x, y)`; zero outside the mask.
    pub fn alpha_at(&self, x: u32, y: u32) -> u8 {
        if x >= self.width || y >= self.height {
            return 0;
        }
        self.alpha[y as usize * self.width as usize + x as usize]
    }

    /// Zero out every pixel of `surface` that this mask does not cover.
    ///
    /// `surface` must have the mask's dimensions; extra rows or columns are cleared.
    pub fn clip(&self, surface: &mut Surface) {
        for y in 0..surface.height() {
            for x in 0..surface.width() {
                if self.alpha_at(x, y) == 0 {
                    surface.set_pixel(i64::from(x), i64::from(y), [0, 0, 0, 0]);
                }
            }
        }
    }

    /// Source-over a single premultiplied color through this mask, top-left at `(x, y)`.
    ///
    /// Any covered pixel receives the full color.
    pub fn fill_over(&self, dst: &mut Surface, x: i64, y: i64, color: [u8; 4]) {
        for my in 0..self.height() {
            for mx in 0..self.width() {
                if self.alpha_at(mx, my) > 0 {
                    dst.blend_pixel(x + i64::from(mx), y + i64::from(my), color);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mask.rs"]
mod tests;
