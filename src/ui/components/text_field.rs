//! Text field pane.

use crate::text_field::{FieldVariant, TextField};
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

pub struct TextFieldComponent {
    pub field: TextField,
    label: String,
}

impl TextFieldComponent {
    pub fn new(field: TextField, label: &str) -> Self {
        Self {
            field,
            label: label.to_string(),
        }
    }
}

impl Component for TextFieldComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => self.field.insert_char(c),
            KeyCode::Enter => self.field.insert_newline(),
            KeyCode::Backspace => self.field.backspace(),
            KeyCode::Delete => self.field.delete(),
            KeyCode::Left => self.field.move_left(),
            KeyCode::Right => self.field.move_right(),
            KeyCode::Home => self.field.move_home(),
            KeyCode::End => self.field.move_end(),
            _ => return Action::None,
        }
        Action::Handled
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, focused: bool) {
        let border_color = if focused { Color::Cyan } else { Color::Gray };
        let block = match self.field.variant() {
            FieldVariant::Basic => Block::default().borders(Borders::ALL).border_type(BorderType::Rounded),
            FieldVariant::Outlined => Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Plain)
                .title(format!(" {} ", self.label)),
        }
        .border_style(Style::default().fg(border_color));

        let inner = block.inner(rect);
        let (row, col) = self.field.cursor_display_position();
        // Keep the cursor line on screen
        let scroll = (row as u16).saturating_sub(inner.height.saturating_sub(1));

        let paragraph = Paragraph::new(self.field.value()).block(block).scroll((scroll, 0));
        f.render_widget(paragraph, rect);

        if focused && inner.width > 0 && inner.height > 0 {
            let x = inner.x + (col as u16).min(inner.width - 1);
            let y = inner.y + (row as u16 - scroll).min(inner.height - 1);
            f.set_cursor_position((x, y));
        }
    }
}
