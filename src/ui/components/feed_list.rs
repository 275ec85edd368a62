//! Feed list pane: items, pull indicator and load-more footer.

use super::scrollbar_helper::ScrollbarHelper;
use crate::constants::{PULL_HINT, PULL_RELEASE_HINT, STATUS_END_OF_FEED, STATUS_LOADING_MORE, STATUS_REFRESHING};
use crate::feed::{FeedSnapshot, PullGesture, Viewport};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Gauge, List, ListItem, Paragraph},
    Frame,
};

pub struct FeedListComponent {
    pub viewport: Viewport,
    pub pull: PullGesture,
    pull_step: f32,
    max_items: usize,
    snapshot: FeedSnapshot,
    drag_row: Option<u16>,
    area: Rect,
    scrollbar: ScrollbarHelper,
}

impl FeedListComponent {
    pub fn new(refresh_threshold: f32, pull_step: f32, max_items: usize) -> Self {
        Self {
            viewport: Viewport::default(),
            pull: PullGesture::new(refresh_threshold),
            pull_step,
            max_items,
            snapshot: FeedSnapshot::default(),
            drag_row: None,
            area: Rect::default(),
            scrollbar: ScrollbarHelper::new(),
        }
    }

    pub fn set_snapshot(&mut self, snapshot: FeedSnapshot) {
        self.viewport.set_total(snapshot.items.len());
        self.snapshot = snapshot;
    }

    pub fn snapshot(&self) -> &FeedSnapshot {
        &self.snapshot
    }

    pub fn last_visible_index(&self) -> Option<usize> {
        self.viewport.last_visible_index()
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }

    fn show_header(&self) -> bool {
        self.snapshot.refreshing || self.pull.is_active()
    }

    fn show_footer(&self) -> bool {
        self.snapshot.loading_more || (self.snapshot.exhausted && !self.viewport.can_scroll_forward())
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        if self.snapshot.refreshing {
            let text = Paragraph::new(STATUS_REFRESHING)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Yellow));
            f.render_widget(text, area);
            return;
        }

        let label = if self.pull.is_armed() { PULL_RELEASE_HINT } else { PULL_HINT };
        let gauge = Gauge::default()
            .ratio(f64::from(self.pull.progress().min(1.0)))
            .label(label)
            .gauge_style(Style::default().fg(Color::Yellow).bg(Color::Black));
        f.render_widget(gauge, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let (text, color) = if self.snapshot.loading_more {
            (STATUS_LOADING_MORE, Color::Yellow)
        } else {
            (STATUS_END_OF_FEED, Color::DarkGray)
        };
        let footer = Paragraph::new(text).alignment(Alignment::Center).style(Style::default().fg(color));
        f.render_widget(footer, area);
    }
}

impl Component for FeedListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::ScrollFeed(1),
            KeyCode::Char('k') | KeyCode::Up => Action::ScrollFeed(-1),
            KeyCode::PageDown => Action::ScrollFeed(self.viewport.height().max(1) as isize),
            KeyCode::PageUp => Action::ScrollFeed(-(self.viewport.height().max(1) as isize)),
            KeyCode::Home => Action::ScrollFeedToTop,
            KeyCode::Char('r') => Action::Refresh,
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match mouse.kind {
            MouseEventKind::ScrollDown if self.contains(mouse.column, mouse.row) => Action::ScrollFeed(1),
            MouseEventKind::ScrollUp if self.contains(mouse.column, mouse.row) => Action::ScrollFeed(-1),
            MouseEventKind::Down(MouseButton::Left) if self.contains(mouse.column, mouse.row) => {
                self.drag_row = Some(mouse.row);
                Action::Handled
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let Some(previous) = self.drag_row else {
                    return Action::None;
                };
                self.drag_row = Some(mouse.row);
                let delta = i32::from(mouse.row) - i32::from(previous);
                if delta == 0 {
                    Action::Handled
                } else if self.pull.is_active() || (self.viewport.is_at_top() && delta > 0) {
                    Action::PullBy(delta as f32 * self.pull_step)
                } else {
                    // Dragging moves content with the pointer
                    Action::ScrollFeed(-delta as isize)
                }
            }
            MouseEventKind::Up(MouseButton::Left) if self.drag_row.take().is_some() => {
                if self.pull.is_active() {
                    Action::ReleasePull
                } else {
                    Action::Handled
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::ScrollFeed(delta) => {
                self.viewport.scroll_by(delta);
                Action::Handled
            }
            Action::ScrollFeedToTop => {
                self.viewport.scroll_to_top();
                Action::Handled
            }
            Action::PullBy(delta) => {
                self.pull.drag(delta);
                Action::Handled
            }
            Action::CancelPull => {
                self.pull.cancel();
                self.drag_row = None;
                Action::Handled
            }
            Action::Refresh | Action::FocusNext | Action::Focus(_) if self.pull.is_active() => {
                // The gesture ends here; the action itself still goes on
                self.pull.cancel();
                self.drag_row = None;
                action
            }
            Action::ReleasePull => {
                if self.pull.release() {
                    Action::Refresh
                } else {
                    Action::Handled
                }
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, focused: bool) {
        self.area = rect;
        let total = self.snapshot.items.len();
        let header_height = u16::from(self.show_header());
        let footer_height = u16::from(self.show_footer());
        let (list_area, scrollbar_area) =
            ScrollbarHelper::calculate_areas(rect, total, header_height + footer_height);

        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .title(format!(" Feed {}/{} ", total, self.max_items))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(list_area);
        f.render_widget(block, list_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(header_height),
                Constraint::Min(0),
                Constraint::Length(footer_height),
            ])
            .split(inner);

        self.viewport.set_height(chunks[1].height as usize);
        self.viewport.set_total(total);

        if header_height > 0 {
            self.render_header(f, chunks[0]);
        }

        let start = self.viewport.offset();
        let end = (start + self.viewport.height()).min(total);
        let items: Vec<ListItem> = self.snapshot.items[start.min(end)..end]
            .iter()
            .enumerate()
            .map(|(row, item)| {
                let shade = if (start + row) % 2 == 0 { Color::Gray } else { Color::Rgb(200, 200, 200) };
                ListItem::new(Line::from(item.to_string()).alignment(Alignment::Center))
                    .style(Style::default().fg(Color::Black).bg(shade).add_modifier(Modifier::BOLD))
            })
            .collect();
        f.render_widget(List::new(items), chunks[1]);

        if footer_height > 0 {
            self.render_footer(f, chunks[2]);
        }

        self.scrollbar.update_from_viewport(&self.viewport);
        self.scrollbar.render(f, scrollbar_area);
    }
}
