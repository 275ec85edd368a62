//! Debug panel for displaying recent log lines

use crate::constants::DIALOG_TITLE_DEBUG_LOGS;
use crate::logger::LogBuffer;
use ratatui::{
    layout::{Margin, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

pub struct DebugPanel;

impl DebugPanel {
    /// Render the panel as a modal over `area`, newest lines first
    pub fn render(frame: &mut Frame, area: Rect, logs: &LogBuffer) {
        // Take 80% of the screen
        let modal_width = area.width.saturating_mul(8) / 10;
        let modal_height = area.height.saturating_mul(8) / 10;

        let modal_area = Rect {
            x: area.x + (area.width.saturating_sub(modal_width)) / 2,
            y: area.y + (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .title(DIALOG_TITLE_DEBUG_LOGS)
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black))
            .border_style(Style::default().fg(Color::Cyan));
        frame.render_widget(block, modal_area);

        let inner_area = modal_area.inner(Margin {
            vertical: 1,
            horizontal: 1,
        });

        let lines = logs.get_logs();
        let items: Vec<ListItem> = if lines.is_empty() {
            vec![ListItem::new("No log entries yet").style(Style::default().fg(Color::DarkGray))]
        } else {
            lines
                .into_iter()
                .take(inner_area.height as usize)
                .map(|line| {
                    let color = if line.contains("ERROR") {
                        Color::Red
                    } else if line.contains("WARN") {
                        Color::Yellow
                    } else {
                        Color::White
                    };
                    ListItem::new(line).style(Style::default().fg(color))
                })
                .collect()
        };

        frame.render_widget(List::new(items), inner_area);
    }
}
