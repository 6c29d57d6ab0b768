use serde::{Deserialize, Serialize};

use crate::foundation::error::{CollageError, CollageResult};

/// Canvas geometry shared by every frame of a run.
///
/// Defaults describe a 1080x1920 portrait canvas with 250px top/bottom and 60px side safe
/// zones, and a three-column grid of 180x270 posters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Canvas width in pixels.
    pub canvas_width: u32,
    /// Canvas height in pixels.
    pub canvas_height: u32,
    /// Safe zone above the title area.
    pub top_margin: u32,
    /// Safe zone below the poster grid.
    pub bottom_margin: u32,
    /// Safe zone on the left and right edges.
    pub side_margin: u32,
    /// Poster cell width.
    pub poster_width: u32,
    /// Poster cell height.
    pub poster_height: u32,
    /// Grid column count.
    pub posters_per_row: u32,
    /// Gap between columns.
    pub poster_spacing_x: u32,
    /// Gap between rows.
    pub poster_spacing_y: u32,
    /// Poster corner radius.
    pub border_radius: u32,
    /// Height reserved for the title and stats line above the grid.
    pub title_area_height: u32,
    /// Width of the light ring drawn around each poster.
    pub border_thickness: u32,
    /// Down-right offset of the poster shadow.
    pub shadow_offset: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 1080,
            canvas_height: 1920,
            top_margin: 250,
            bottom_margin: 250,
            side_margin: 60,
            poster_width: 180,
            poster_height: 270,
            posters_per_row: 3,
            poster_spacing_x: 10,
            poster_spacing_y: 10,
            border_radius: 8,
            title_area_height: 120,
            border_thickness: 2,
            shadow_offset: 4,
        }
    }
}

impl LayoutConfig {
    /// `canvas_width - 2 * side_margin`; may be negative for degenerate layouts.
    pub fn working_width(&self) -> i64 {
        i64::from(self.canvas_width) - 2 * i64::from(self.side_margin)
    }

    /// `canvas_height - top_margin - bottom_margin`; may be negative for degenerate layouts.
    pub fn working_height(&self) -> i64 {
        i64::from(self.canvas_height) - i64::from(self.top_margin) - i64::from(self.bottom_margin)
    }

    /// Reject layouts that cannot place a single poster, or whose poster effects would not
    /// fit the poster they decorate.
    pub fn validate(&self) -> CollageResult<()> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(CollageError::validation("canvas dimensions must be > 0"));
        }
        if self.poster_width == 0 || self.poster_height == 0 {
            return Err(CollageError::validation("poster dimensions must be > 0"));
        }
        if self.posters_per_row == 0 {
            return Err(CollageError::validation("posters_per_row must be > 0"));
        }
        let short_side = self.poster_width.min(self.poster_height);
        if self.border_radius > short_side / 2 {
            return Err(CollageError::validation(format!(
                "border_radius {} exceeds half the poster's short side ({})",
                self.border_radius,
                short_side / 2
            )));
        }
        if self.border_thickness > short_side / 2 {
            return Err(CollageError::validation(format!(
                "border_thickness {} exceeds half the poster's short side ({})",
                self.border_thickness,
                short_side / 2
            )));
        }
        if self.shadow_offset > short_side {
            return Err(CollageError::validation(format!(
                "shadow_offset {} exceeds the poster's short side ({short_side})",
                self.shadow_offset
            )));
        }
        if self.working_width() <= 0 || self.working_height() <= 0 {
            return Err(CollageError::validation(format!(
                "working area must be positive (got {}x{})",
                self.working_width(),
                self.working_height()
            )));
        }
        Ok(())
    }

    /// Rows of posters that fit below the title area.
    pub fn max_rows_per_frame(&self) -> i64 {
        let available = self.working_height() - i64::from(self.title_area_height);
        let row_pitch = i64::from(self.poster_height) + i64::from(self.poster_spacing_y);
        if row_pitch == 0 {
            return 0;
        }
        available.div_euclid(row_pitch)
    }

    /// Grid capacity of one frame.
    ///
    /// Errors when the layout leaves no room for a poster, which would otherwise turn
    /// pagination into a division by zero.
    pub fn posters_per_frame(&self) -> CollageResult<usize> {
        self.validate()?;
        let per_frame = self.max_rows_per_frame() * i64::from(self.posters_per_row);
        if per_frame <= 0 {
            return Err(CollageError::validation(format!(
                "layout fits no posters per frame (working height {}, title area {}, row pitch {})",
                self.working_height(),
                self.title_area_height,
                u64::from(self.poster_height) + u64::from(self.poster_spacing_y)
            )));
        }
        usize::try_from(per_frame)
            .map_err(|_| CollageError::validation("posters per frame overflows usize"))
    }

    /// Left edge of the first column so the fixed-width grid is centered in the working width.
    pub fn grid_start_x(&self) -> i64 {
        let cols = i64::from(self.posters_per_row);
        let grid_width = cols * i64::from(self.poster_width)
            + (cols - 1).max(0) * i64::from(self.poster_spacing_x);
        i64::from(self.side_margin) + (self.working_width() - grid_width).div_euclid(2)
    }

    /// Top-left corner of grid cell `index` (row-major).
    pub fn cell_origin(&self, index: usize) -> (i64, i64) {
        let per_row = self.posters_per_row.max(1) as usize;
        let row = (index / per_row) as i64;
        let col = (index % per_row) as i64;
        let x = self.grid_start_x()
            + col * (i64::from(self.poster_width) + i64::from(self.poster_spacing_x));
        let y = i64::from(self.top_margin)
            + i64::from(self.title_area_height)
            + row * (i64::from(self.poster_height) + i64::from(self.poster_spacing_y));
        (x, y)
    }

    /// Whether a poster whose top edge is at `y` would reach into the bottom safe zone.
    pub fn overflows_bottom(&self, y: i64) -> bool {
        y + i64::from(self.poster_height)
            > i64::from(self.canvas_height) - i64::from(self.bottom_margin)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
