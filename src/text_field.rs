//! Editable text field model.

use unicode_width::UnicodeWidthStr;

/// How a field is framed when drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVariant {
    /// Thin rounded border, no title.
    #[default]
    Basic,
    /// Titled outline.
    Outlined,
}

/// Text buffer with a cursor measured in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextField {
    value: String,
    cursor: usize,
    single_line: bool,
    variant: FieldVariant,
}

pub const DEFAULT_TEXT: &str = "Hello World! \nHello World!";

impl Default for TextField {
    fn default() -> Self {
        Self::new(DEFAULT_TEXT, FieldVariant::Basic)
    }
}

impl TextField {
    /// Create a multi-line field with the cursor at the end of `value`.
    pub fn new(value: &str, variant: FieldVariant) -> Self {
        Self {
            value: value.to_string(),
            cursor: value.chars().count(),
            single_line: false,
            variant,
        }
    }

    /// Restrict the field to one line. Existing newlines become spaces.
    pub fn single_line(mut self) -> Self {
        self.single_line = true;
        self.value = self.value.replace('\n', " ");
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn variant(&self) -> FieldVariant {
        self.variant
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn lines(&self) -> Vec<&str> {
        self.value.split('\n').collect()
    }

    /// Cursor as (row, column), both in chars.
    pub fn cursor_position(&self) -> (usize, usize) {
        let before: String = self.value.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, |line| line.chars().count());
        (row, col)
    }

    /// Cursor as (row, terminal column). Wide characters take two columns.
    pub fn cursor_display_position(&self) -> (usize, usize) {
        let before: String = self.value.chars().take(self.cursor).collect();
        let row = before.matches('\n').count();
        let col = before.rsplit('\n').next().map_or(0, UnicodeWidthStr::width);
        (row, col)
    }

    pub fn insert_char(&mut self, c: char) {
        if c == '\n' {
            self.insert_newline();
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Insert a line break. Ignored for single-line fields.
    pub fn insert_newline(&mut self) {
        if self.single_line {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert(at, '\n');
        self.cursor += 1;
    }

    /// Remove the char before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    /// Remove the char under the cursor.
    pub fn delete(&mut self) {
        if self.cursor >= self.value.chars().count() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    /// Move to the start of the current line.
    pub fn move_home(&mut self) {
        let (_, col) = self.cursor_position();
        self.cursor -= col;
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self) {
        let rest = self.value.chars().skip(self.cursor).take_while(|c| *c != '\n').count();
        self.cursor += rest;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}
