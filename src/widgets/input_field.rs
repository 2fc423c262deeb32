use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

/// Editable text with a character-indexed cursor.
///
/// Features:
/// - Basic text editing (insert, delete, backspace)
/// - Cursor movement (left/right/home/end)
/// - Optional multi-line mode where Enter inserts a newline
/// - Optional masking for passwords
#[derive(Debug, Clone, Default)]
pub struct InputField {
    /// The text content
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
    multiline: bool,
    masked: bool,
}

impl InputField {
    /// Create a new empty single-line field
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a field that accepts newlines
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Create a field whose content is rendered as bullets
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn is_masked(&self) -> bool {
        self.masked
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        if c == '\n' && !self.multiline {
            return;
        }
        let idx = self.byte_index(self.cursor_position);
        self.content.insert(idx, c);
        self.cursor_position += 1;
    }

    /// Insert a string at the cursor (paste)
    pub fn insert_str(&mut self, s: &str) {
        for c in s.chars().filter(|c| *c != '\r') {
            if c == '\n' && !self.multiline {
                self.insert_char(' ');
            } else {
                self.insert_char(c);
            }
        }
    }

    /// Delete the character at the current cursor position (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let idx = self.byte_index(self.cursor_position);
            self.content.remove(idx);
        }
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let idx = self.byte_index(self.cursor_position);
            self.content.remove(idx);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    /// Get the text content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Content with surrounding whitespace removed
    pub fn trimmed(&self) -> &str {
        self.content.trim()
    }

    /// Cursor position as a character index
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Replace the content and move the cursor to the end
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        if !self.multiline {
            self.content = self.content.replace(['\r', '\n'], " ");
        }
        self.cursor_position = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Text as it should appear on screen
    pub fn display_text(&self) -> String {
        if self.masked {
            "•".repeat(self.len())
        } else {
            self.content.clone()
        }
    }

    /// (line, column) of the cursor in character units
    fn cursor_line_col(&self) -> (usize, usize) {
        let before: String = self.content.chars().take(self.cursor_position).collect();
        let line = before.matches('\n').count();
        let col = before
            .rsplit('\n')
            .next()
            .map(|l| l.chars().count())
            .unwrap_or(0);
        (line, col)
    }

    /// Render the field inside a bordered block
    pub fn render_with_title(
        &self,
        area: Rect,
        buf: &mut Buffer,
        title: &str,
        placeholder: &str,
        focused: bool,
    ) {
        let border_color = if focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title.to_string());
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }
        let width = inner.width as usize;
        let height = inner.height as usize;

        if self.is_empty() && !focused {
            buf.set_stringn(
                inner.x,
                inner.y,
                placeholder,
                width,
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let text = self.display_text();
        let lines: Vec<&str> = text.split('\n').collect();
        let (cursor_line, cursor_col) = self.cursor_line_col();

        // Keep the cursor line visible
        let first_line = (cursor_line + 1).saturating_sub(height);
        let scroll_x = (cursor_col + 1).saturating_sub(width);

        let text_style = Style::default().fg(Color::White);
        for (row, line) in lines.iter().skip(first_line).take(height).enumerate() {
            let visible: String = line.chars().skip(scroll_x).take(width).collect();
            buf.set_stringn(inner.x, inner.y + row as u16, &visible, width, text_style);
        }

        if focused {
            let x = cursor_col - scroll_x;
            let y = cursor_line - first_line;
            if x < width && y < height {
                let cursor_char = lines
                    .get(cursor_line)
                    .and_then(|l| l.chars().nth(cursor_col))
                    .unwrap_or(' ');
                buf.set_string(
                    inner.x + x as u16,
                    inner.y + y as u16,
                    cursor_char.to_string(),
                    Style::default().fg(Color::Black).bg(Color::Cyan),
                );
            }
        }
    }
}

/// A renderable wrapper for InputField that implements the Widget trait
pub struct InputFieldWidget<'a> {
    field: &'a InputField,
    title: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> InputFieldWidget<'a> {
    pub fn new(field: &'a InputField, title: &'a str, focused: bool) -> Self {
        Self {
            field,
            title,
            placeholder: "",
            focused,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl Widget for InputFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.field
            .render_with_title(area, buf, self.title, self.placeholder, self.focused);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut input = InputField::new();
        input.insert_char('H');
        input.insert_char('i');
        assert_eq!(input.content(), "Hi");
        assert_eq!(input.cursor_position(), 2);

        input.backspace();
        assert_eq!(input.content(), "H");
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = InputField::new();
        input.set_content("héllo");
        input.move_cursor_home();
        input.move_cursor_right();
        input.move_cursor_right();
        input.backspace();
        assert_eq!(input.content(), "hllo");

        input.insert_char('é');
        input.insert_char('🦀');
        assert_eq!(input.content(), "hé🦀llo");
        assert_eq!(input.len(), 6);

        input.delete_char();
        assert_eq!(input.content(), "hé🦀lo");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = InputField::new();
        input.insert_char('X');

        input.move_cursor_home();
        input.move_cursor_left();
        assert_eq!(input.cursor_position(), 0);

        input.move_cursor_end();
        input.move_cursor_right();
        assert_eq!(input.cursor_position(), 1);
    }

    #[test]
    fn test_single_line_rejects_newline() {
        let mut input = InputField::new();
        input.insert_char('a');
        input.insert_char('\n');
        input.insert_str("b\nc");
        assert_eq!(input.content(), "ab c");
    }

    #[test]
    fn test_multiline_keeps_newlines() {
        let mut input = InputField::multiline();
        input.insert_str("one\r\ntwo");
        assert_eq!(input.content(), "one\ntwo");
        assert_eq!(input.cursor_line_col(), (1, 3));
    }

    #[test]
    fn test_masked_display() {
        let mut input = InputField::masked();
        input.set_content("secret");
        assert_eq!(input.display_text(), "••••••");
        assert_eq!(input.content(), "secret");
    }

    #[test]
    fn test_trimmed_and_clear() {
        let mut input = InputField::new();
        input.set_content("  hi  ");
        assert_eq!(input.trimmed(), "hi");
        input.clear();
        assert!(input.is_empty());
        assert_eq!(input.cursor_position(), 0);
    }

    #[test]
    fn test_render_shows_placeholder_when_unfocused() {
        let input = InputField::new();
        let area = Rect::new(0, 0, 20, 3);
        let mut buf = Buffer::empty(area);
        InputFieldWidget::new(&input, "Title", false)
            .placeholder("Be specific")
            .render(area, &mut buf);

        let row: String = (1..12).map(|x| buf[(x, 1)].symbol().to_string()).collect();
        assert_eq!(row, "Be specific");
    }
}
