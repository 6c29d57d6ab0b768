/// Axis-aligned rectangle with circular-arc corners, in pixel coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundedRect {
    /// Left edge.
    pub x: i64,
    /// Top edge.
    pub y: i64,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Corner radius in pixels.
    pub radius: u32,
}

impl RoundedRect {
    /// Rectangle anchored at the origin.
    pub fn at_origin(width: u32, height: u32, radius: u32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            radius,
        }
    }

    /// Whether pixel `(px, py)` lies inside the rounded silhouette.
    ///
    /// A pixel is inside when it falls in the horizontal band between the corner columns, in
    /// the vertical band between the corner rows, or within `radius` of a corner center.
    /// Trailing corner centers sit one pixel further in so the shape stays symmetric.
    /// Nothing outside the bounding rectangle is inside, whatever the radius.
    pub fn contains(&self, px: i64, py: i64) -> bool {
        let (x, y) = (self.x, self.y);
        let (w, h, r) = (
            i64::from(self.width),
            i64::from(self.height),
            i64::from(self.radius),
        );

        if px < x || py < y || px >= x + w || py >= y + h {
            return false;
        }
        if (px >= x + r && px < x + w - r) || (py >= y + r && py < y + h - r) {
            return true;
        }

        let corners = [
            (x + r, y + r),
            (x + w - r - 1, y + r),
            (x + r, y + h - r - 1),
            (x + w - r - 1, y + h - r - 1),
        ];
        corners.iter().any(|&(cx, cy)| {
            let dx = i128::from(px - cx);
            let dy = i128::from(py - cy);
            dx * dx + dy * dy <= i128::from(r) * i128::from(r)
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/rounded.rs"]
mod tests;
