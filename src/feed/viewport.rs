//! Visible window over the loaded sequence.

/// Returns true when the last visible row is within `prefetch_distance` rows of
/// the last loaded item.
///
/// An empty sequence counts as being at its end.
pub fn is_near_end(last_visible_index: Option<usize>, total_count: usize, prefetch_distance: usize) -> bool {
    if total_count == 0 {
        return true;
    }
    match last_visible_index {
        Some(index) => index + prefetch_distance + 1 >= total_count,
        None => false,
    }
}

/// Scroll position of a vertical list measured in rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
    total: usize,
}

impl Viewport {
    pub fn new(height: usize, total: usize) -> Self {
        Self { offset: 0, height, total }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Index of the last row on screen, if any row is.
    pub fn last_visible_index(&self) -> Option<usize> {
        if self.total == 0 || self.height == 0 {
            return None;
        }
        Some((self.offset + self.height).min(self.total) - 1)
    }

    pub fn is_near_end(&self, prefetch_distance: usize) -> bool {
        is_near_end(self.last_visible_index(), self.total, prefetch_distance)
    }

    pub fn is_at_top(&self) -> bool {
        self.offset == 0
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_forward(&self) -> bool {
        self.offset + self.height < self.total
    }

    /// Scroll by `delta` rows, clamped to the scrollable range.
    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = target.min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height;
        self.clamp();
    }

    pub fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp();
    }

    fn max_offset(&self) -> usize {
        self.total.saturating_sub(self.height)
    }

    fn clamp(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }
}
