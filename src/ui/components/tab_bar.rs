//! Tab bar pane with edge indicators.

use crate::constants::TAB_EDGE_WIDTH;
use crate::tabs::TabBar;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub struct TabBarComponent {
    pub bar: TabBar,
    /// Area the tabs themselves were last drawn in, between the indicators
    strip: Rect,
    left_edge: Rect,
    right_edge: Rect,
}

impl TabBarComponent {
    pub fn new(bar: TabBar) -> Self {
        Self {
            bar,
            strip: Rect::default(),
            left_edge: Rect::default(),
            right_edge: Rect::default(),
        }
    }

    /// Map a click column inside the strip to a tab index.
    fn tab_at(&self, column: u16) -> Option<usize> {
        let strip_x = usize::from(column.checked_sub(self.strip.x)?) + self.bar.offset();
        (0..self.bar.len()).find(|&index| {
            let start = self.bar.tab_x(index);
            let end = self.bar.tab_x(index + 1);
            strip_x >= start && strip_x < end
        })
    }

    fn render_edge(f: &mut Frame, area: Rect, symbol: &str, visible: bool) {
        if !visible || area.width == 0 {
            return;
        }
        let edge = Paragraph::new(symbol)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));
        f.render_widget(edge, area);
    }
}

impl Component for TabBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => Action::PreviousTab,
            KeyCode::Right | KeyCode::Char('l') => Action::NextTab,
            KeyCode::PageUp => Action::PageTabsBackward,
            KeyCode::PageDown => Action::PageTabsForward,
            KeyCode::Char(c) if c.is_ascii_digit() => {
                // 1-9 pick a tab directly, 0 picks the tenth
                let index = c.to_digit(10).map_or(0, |d| if d == 0 { 9 } else { d as usize - 1 });
                Action::SelectTab(index)
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Action::None;
        }
        let position = Position::new(mouse.column, mouse.row);
        if self.left_edge.contains(position) && self.bar.can_scroll_backward() {
            Action::PageTabsBackward
        } else if self.right_edge.contains(position) && self.bar.can_scroll_forward() {
            Action::PageTabsForward
        } else if self.strip.contains(position) {
            self.tab_at(mouse.column).map_or(Action::Handled, Action::SelectTab)
        } else {
            Action::None
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::SelectTab(index) => {
                self.bar.select(index);
                Action::Handled
            }
            Action::NextTab => {
                self.bar.select_next();
                Action::Handled
            }
            Action::PreviousTab => {
                self.bar.select_previous();
                Action::Handled
            }
            Action::PageTabsBackward => {
                self.bar.page_backward();
                Action::Handled
            }
            Action::PageTabsForward => {
                self.bar.page_forward();
                Action::Handled
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let title = match self.bar.selected_title() {
            Some(selected) => format!(" Tabs: {} ", selected),
            None => " Tabs ".to_string(),
        };
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let edge = TAB_EDGE_WIDTH.min(inner.width / 2);
        self.left_edge = Rect { width: edge, ..inner };
        self.right_edge = Rect {
            x: inner.x + inner.width - edge,
            width: edge,
            ..inner
        };
        self.strip = Rect {
            x: inner.x + edge,
            width: inner.width.saturating_sub(edge * 2),
            ..inner
        };
        self.bar.set_viewport_width(self.strip.width as usize);

        for tab in self.bar.visible_tabs() {
            let left = tab.x.max(0) as u16;
            let right = (tab.x + tab.width as isize).min(self.strip.width as isize) as u16;
            if right <= left {
                continue;
            }
            let area = Rect {
                x: self.strip.x + left,
                width: right - left,
                ..self.strip
            };
            let style = if tab.selected {
                Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Black).bg(Color::Gray)
            };
            f.render_widget(Paragraph::new(tab.title).alignment(Alignment::Center).style(style), area);
        }

        Self::render_edge(f, self.left_edge, "◀", self.bar.can_scroll_backward());
        Self::render_edge(f, self.right_edge, "▶", self.bar.can_scroll_forward());
    }
}
