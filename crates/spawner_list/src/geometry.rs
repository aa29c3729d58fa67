//! Scroll geometry for fixed-height rows

use std::ops::Range;

/// Row and viewport dimensions of a virtualized list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ListGeometry {
    /// Height of one row
    pub row_height: f32,
    /// Height of the visible scroll window
    pub viewport_height: f32,
}

impl ListGeometry {
    pub fn new(row_height: f32, viewport_height: f32) -> Self {
        debug_assert!(row_height > 0.0);
        Self {
            row_height,
            viewport_height,
        }
    }

    /// Padding kept on both edges of the window (one row)
    #[inline]
    pub fn margin(&self) -> f32 {
        self.row_height
    }

    /// Height of the virtual content area for `count` rows
    pub fn content_height(&self, count: usize) -> f32 {
        count.saturating_sub(1) as f32 * self.row_height
    }

    /// Top edge of the row at `index`
    #[inline]
    pub fn row_top(&self, index: usize) -> f32 {
        index as f32 * self.row_height
    }

    /// Whether a row top lies outside the padded window at `offset`
    pub fn is_outside(&self, top: f32, offset: f32) -> bool {
        top < offset - self.margin() || top > offset + self.viewport_height + self.margin()
    }

    /// Rows the window at `offset` can show at once, padding included
    pub fn max_visible_rows(&self) -> usize {
        ((self.viewport_height + 2.0 * self.row_height) / self.row_height)
            .ceil()
            .max(0.0) as usize
    }

    /// Indices that must have a row when scrolled to `offset`
    pub fn visible_range(&self, offset: f32, count: usize) -> Range<usize> {
        let start = ((offset - self.row_height) / self.row_height).ceil().max(0.0) as usize;
        let end = (start + self.max_visible_rows()).min(count);
        start.min(end)..end
    }
}

impl Default for ListGeometry {
    fn default() -> Self {
        Self::new(20.0, 360.0)
    }
}
