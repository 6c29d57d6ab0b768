use crate::assets::color::Rgba8;
use crate::effects::composite::over;
use crate::foundation::error::{CollageError, CollageResult};

/// Mutable RGBA8 pixel buffer, premultiplied alpha, row-major, tightly packed.
///
/// Used both for frame canvases and for decoded poster thumbnails.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Surface {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Surface {
    /// Allocate a fully transparent surface.
    pub fn new(width: u32, height: u32) -> CollageResult<Self> {
        let len = byte_len(width, height)?;
        Ok(Self {
            width,
            height,
            data: vec![0u8; len],
        })
    }

    /// Wrap premultiplied RGBA8 bytes.
    pub fn from_premul(width: u32, height: u32, data: Vec<u8>) -> CollageResult<Self> {
        if data.len() != byte_len(width, height)? {
            return Err(CollageError::validation(
                "surface data must match width*height*4",
            ));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Build a surface from a straight-alpha `image` buffer.
    pub fn from_rgba_image(img: image::RgbaImage) -> CollageResult<Self> {
        let (width, height) = img.dimensions();
        let mut data = img.into_raw();
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul(width, height, data)
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn offset(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(((y as usize) * (self.width as usize) + (x as usize)) * 4)
    }

    /// Premultiplied pixel at `(x, y)`, or `None` outside the surface.
    pub fn pixel(&self, x: i64, y: i64) -> Option<[u8; 4]> {
        let i = self.offset(x, y)?;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Straight-alpha color at `(x, y)`, or `None` outside the surface.
    pub fn color_at(&self, x: i64, y: i64) -> Option<Rgba8> {
        self.pixel(x, y).map(Rgba8::from_premul)
    }

    /// Overwrite a pixel. Writes outside the surface are dropped.
    pub fn set_pixel(&mut self, x: i64, y: i64, px: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            self.data[i..i + 4].copy_from_slice(&px);
        }
    }

    /// Source-over blend `px` onto `(x, y)`. Writes outside the surface are dropped.
    pub fn blend_pixel(&mut self, x: i64, y: i64, px: [u8; 4]) {
        if let Some(i) = self.offset(x, y) {
            let dst = [
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ];
            self.data[i..i + 4].copy_from_slice(&over(dst, px));
        }
    }

    /// Overwrite a whole row with one premultiplied color.
    pub fn fill_row(&mut self, y: u32, px: [u8; 4]) {
        if y >= self.height {
            return;
        }
        let row_len = self.width as usize * 4;
        let start = y as usize * row_len;
        for chunk in self.data[start..start + row_len].chunks_exact_mut(4) {
            chunk.copy_from_slice(&px);
        }
    }

    /// Source-over `src` with its top-left corner at `(x, y)`, clipped to this surface.
    pub fn draw_over(&mut self, src: &Surface, x: i64, y: i64) {
        for sy in 0..i64::from(src.height) {
            for sx in 0..i64::from(src.width) {
                if let Some(px) = src.pixel(sx, sy)
                    && px[3] != 0
                {
                    self.blend_pixel(x + sx, y + sy, px);
                }
            }
        }
    }

    /// Convert to a straight-alpha `image` buffer for encoding.
    pub fn to_rgba_image(&self) -> CollageResult<image::RgbaImage> {
        let mut straight = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let c = Rgba8::from_premul([px[0], px[1], px[2], px[3]]);
            straight.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        image::RgbaImage::from_raw(self.width, self.height, straight)
            .ok_or_else(|| CollageError::encode("surface buffer does not match its dimensions"))
    }
}

fn byte_len(width: u32, height: u32) -> CollageResult<usize> {
    if width == 0 || height == 0 {
        return Err(CollageError::validation("surface dimensions must be > 0"));
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|v| v.checked_mul(4))
        .ok_or_else(|| CollageError::validation("surface size overflow"))
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
