//! Horizontally scrollable tab strip.
//!
//! Positions are measured in terminal columns. The strip keeps the selected
//! tab centered where the scroll range allows, and reports whether content is
//! hidden on either side so the view can draw edge indicators.

use crate::config::TabsConfig;
use unicode_width::UnicodeWidthStr;

/// A tab that intersects the viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleTab<'a> {
    pub index: usize,
    pub title: &'a str,
    /// Left edge relative to the viewport. Negative when clipped on the left.
    pub x: isize,
    pub width: usize,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct TabBar {
    titles: Vec<String>,
    widths: Vec<usize>,
    gap: usize,
    selected: usize,
    offset: usize,
    viewport_width: usize,
}

impl TabBar {
    /// Create a tab bar with `selected` centered in a viewport of `viewport_width`.
    ///
    /// Each tab is as wide as its title plus `padding` columns. An out of range
    /// selection falls back to the first tab.
    pub fn new(titles: Vec<String>, padding: usize, gap: usize, selected: usize, viewport_width: usize) -> Self {
        let widths = titles.iter().map(|title| title.width() + padding).collect();
        let selected = if selected < titles.len() { selected } else { 0 };

        let mut bar = Self {
            titles,
            widths,
            gap,
            selected,
            offset: 0,
            viewport_width,
        };
        bar.center_on(bar.selected);
        bar
    }

    pub fn from_config(config: &TabsConfig, viewport_width: usize) -> Self {
        Self::new(
            config.titles.clone(),
            config.tab_padding,
            config.tab_gap,
            config.initial_selection,
            viewport_width,
        )
    }

    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_title(&self) -> Option<&str> {
        self.titles.get(self.selected).map(String::as_str)
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn viewport_width(&self) -> usize {
        self.viewport_width
    }

    /// Total width of all tabs and the gaps between them.
    pub fn content_width(&self) -> usize {
        let tabs: usize = self.widths.iter().sum();
        tabs + self.gap * self.widths.len().saturating_sub(1)
    }

    /// Left edge of tab `index` in strip coordinates.
    pub fn tab_x(&self, index: usize) -> usize {
        self.widths[..index.min(self.widths.len())].iter().sum::<usize>() + self.gap * index
    }

    /// Select tab `index` and center it. Returns false if `index` is out of range.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.titles.len() {
            return false;
        }
        self.selected = index;
        self.center_on(index);
        true
    }

    pub fn select_next(&mut self) -> bool {
        self.select(self.selected + 1)
    }

    pub fn select_previous(&mut self) -> bool {
        match self.selected.checked_sub(1) {
            Some(index) => self.select(index),
            None => false,
        }
    }

    pub fn can_scroll_backward(&self) -> bool {
        self.offset > 0
    }

    pub fn can_scroll_forward(&self) -> bool {
        self.offset < self.max_offset()
    }

    /// Scroll one viewport width towards the start.
    pub fn page_backward(&mut self) {
        self.scroll_by(-(self.viewport_width as isize));
    }

    /// Scroll one viewport width towards the end.
    pub fn page_forward(&mut self) {
        self.scroll_by(self.viewport_width as isize);
    }

    pub fn scroll_by(&mut self, delta: isize) {
        let target = if delta.is_negative() {
            self.offset.saturating_sub(delta.unsigned_abs())
        } else {
            self.offset.saturating_add(delta as usize)
        };
        self.offset = target.min(self.max_offset());
    }

    /// Change the viewport width and re-center the selection.
    pub fn set_viewport_width(&mut self, width: usize) {
        if width != self.viewport_width {
            self.viewport_width = width;
            self.center_on(self.selected);
        }
    }

    /// Tabs intersecting the viewport, in order.
    pub fn visible_tabs(&self) -> Vec<VisibleTab<'_>> {
        let start = self.offset;
        let end = self.offset + self.viewport_width;

        self.titles
            .iter()
            .enumerate()
            .filter_map(|(index, title)| {
                let x = self.tab_x(index);
                let width = self.widths[index];
                if x + width <= start || x >= end {
                    return None;
                }
                Some(VisibleTab {
                    index,
                    title,
                    x: x as isize - start as isize,
                    width,
                    selected: index == self.selected,
                })
            })
            .collect()
    }

    fn max_offset(&self) -> usize {
        self.content_width().saturating_sub(self.viewport_width)
    }

    fn center_on(&mut self, index: usize) {
        if index >= self.widths.len() {
            self.offset = 0;
            return;
        }
        let center = self.tab_x(index) + self.widths[index] / 2;
        self.offset = center.saturating_sub(self.viewport_width / 2).min(self.max_offset());
    }
}
