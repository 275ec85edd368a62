//! Scrollbar helper for the feed list.

use crate::feed::Viewport;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

/// Keeps a ratatui scrollbar in step with a [`Viewport`].
pub struct ScrollbarHelper {
    state: ScrollbarState,
}

impl Default for ScrollbarHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollbarHelper {
    pub fn new() -> Self {
        Self {
            state: ScrollbarState::new(0),
        }
    }

    /// Copy content length, position and page size from the viewport.
    pub fn update_from_viewport(&mut self, viewport: &Viewport) {
        self.state = self
            .state
            .content_length(viewport.total().saturating_sub(viewport.height()) + 1)
            .position(viewport.offset())
            .viewport_content_length(viewport.height());
    }

    /// A scrollbar is shown only when some rows are off screen.
    pub fn needs_scrollbar(total_items: usize, available_height: usize) -> bool {
        total_items > available_height
    }

    /// Split `rect` into the list area and, when needed, a one column
    /// scrollbar area inside the right border.
    ///
    /// `reserved_rows` are rows inside the border taken by something other
    /// than items, such as a header or footer line.
    pub fn calculate_areas(rect: Rect, total_items: usize, reserved_rows: u16) -> (Rect, Option<Rect>) {
        // Exclude borders
        let available_height = rect.height.saturating_sub(2).saturating_sub(reserved_rows) as usize;

        if Self::needs_scrollbar(total_items, available_height) {
            let content_area = Rect {
                width: rect.width.saturating_sub(1),
                ..rect
            };
            let scrollbar_area = Rect {
                x: rect.x + rect.width.saturating_sub(1),
                y: rect.y + 1,
                width: 1,
                height: rect.height.saturating_sub(2),
            };
            (content_area, Some(scrollbar_area))
        } else {
            (rect, None)
        }
    }

    pub fn render(&mut self, f: &mut Frame, scrollbar_area: Option<Rect>) {
        if let Some(area) = scrollbar_area {
            let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
                .begin_symbol(Some("↑"))
                .end_symbol(Some("↓"))
                .track_symbol(Some("│"))
                .thumb_symbol("█")
                .style(Style::default().fg(Color::DarkGray))
                .thumb_style(Style::default().fg(Color::DarkGray));

            f.render_stateful_widget(scrollbar, area, &mut self.state);
        }
    }

    pub fn state(&self) -> &ScrollbarState {
        &self.state
    }
}
