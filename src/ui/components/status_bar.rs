//! Status bar component

use crate::constants::{STATUS_HINTS, STATUS_LOADING_MORE, STATUS_REFRESHING};
use crate::feed::FeedSnapshot;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, snapshot: &FeedSnapshot) {
        let status_text = if snapshot.refreshing {
            STATUS_REFRESHING.to_string()
        } else if snapshot.loading_more {
            STATUS_LOADING_MORE.to_string()
        } else if let Some(error) = &snapshot.last_error {
            format!("❌ {} • r: retry", error)
        } else {
            STATUS_HINTS.to_string()
        };

        let status_color = if snapshot.refreshing || snapshot.loading_more {
            Color::Yellow
        } else if snapshot.last_error.is_some() {
            Color::Red
        } else {
            Color::Gray
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
