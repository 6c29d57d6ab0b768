use crate::foundation::error::{CollageError, CollageResult};

/// Half-open range `[start, end)` of history entries assigned to one frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameSlice {
    /// 0-based frame index.
    pub index: usize,
    /// Inclusive first entry.
    pub start: usize,
    /// Exclusive last entry.
    pub end: usize,
}

impl FrameSlice {
    /// 1-based frame number, as used in titles and file names.
    pub fn number(self) -> usize {
        self.index + 1
    }

    /// Number of entries in the slice.
    pub fn len(self) -> usize {
        self.end - self.start
    }

    /// Return `true` when the slice holds no entries.
    pub fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// `ceil(total / per_frame)`.
pub fn frame_count(total: usize, per_frame: usize) -> CollageResult<usize> {
    if per_frame == 0 {
        return Err(CollageError::validation("posters per frame must be > 0"));
    }
    Ok(total.div_ceil(per_frame))
}

/// Split `total` entries into contiguous frames of at most `per_frame` entries.
///
/// Every frame but the last is full; an empty history yields no frames.
pub fn plan_frames(total: usize, per_frame: usize) -> CollageResult<Vec<FrameSlice>> {
    let count = frame_count(total, per_frame)?;
    Ok((0..count)
        .map(|index| {
            let start = index * per_frame;
            FrameSlice {
                index,
                start,
                end: (start + per_frame).min(total),
            }
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/layout/pagination.rs"]
mod tests;
