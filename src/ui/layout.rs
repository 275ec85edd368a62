//! Layout management and calculations

use crate::constants::{TAB_BAR_HEIGHT, TEXT_FIELD_HEIGHT};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MainLayout {
    pub tabs: Rect,
    pub feed: Rect,
    pub basic_field: Rect,
    pub outlined_field: Rect,
    pub status: Rect,
}

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Tab bar on top, feed in the middle, the two text fields side by side
    /// below it and a one line status bar at the bottom
    #[must_use]
    pub fn main_layout(area: Rect) -> MainLayout {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(TAB_BAR_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(TEXT_FIELD_HEIGHT),
                Constraint::Length(1),
            ])
            .split(area);

        let fields = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[2]);

        MainLayout {
            tabs: rows[0],
            feed: rows[1],
            basic_field: fields[0],
            outlined_field: fields[1],
            status: rows[3],
        }
    }
}
