//! Editable text fields
//!
//! A field is a string plus a cursor kept on a char boundary. The subject
//! field accepts newlines; the pattern field is single-line.

use unicode_width::UnicodeWidthStr;

/// An editable text field
#[derive(Debug, Clone, Default)]
pub struct TextField {
    /// The text content
    text: String,
    /// Cursor position (byte offset)
    cursor: usize,
    /// Whether Enter inserts a newline
    multiline: bool,
}

impl TextField {
    /// Create an empty single-line field
    pub fn single_line() -> Self {
        Self::default()
    }

    /// Create an empty field that accepts newlines
    pub fn multiline() -> Self {
        Self {
            multiline: true,
            ..Self::default()
        }
    }

    /// Get the text content
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    /// Replace the content and put the cursor at the end
    pub fn set_text(&mut self, text: &str) {
        self.text = if self.multiline {
            text.to_string()
        } else {
            text.replace(['\r', '\n'], "")
        };
        self.cursor = self.text.len();
    }

    /// Clear the field
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Insert a character at the cursor; returns false if it was refused
    pub fn insert_char(&mut self, ch: char) -> bool {
        if ch == '\n' && !self.multiline {
            return false;
        }
        self.text.insert(self.cursor, ch);
        self.cursor += ch.len_utf8();
        true
    }

    /// Delete the character before the cursor
    pub fn backspace(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(ch) => {
                self.cursor -= ch.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    /// Delete the character under the cursor
    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    /// Move cursor one character left
    pub fn move_left(&mut self) {
        if let Some(ch) = self.text[..self.cursor].chars().next_back() {
            self.cursor -= ch.len_utf8();
        }
    }

    /// Move cursor one character right
    pub fn move_right(&mut self) {
        if let Some(ch) = self.text[self.cursor..].chars().next() {
            self.cursor += ch.len_utf8();
        }
    }

    /// Move cursor to the start of the current line
    pub fn move_home(&mut self) {
        self.cursor = self.text[..self.cursor].rfind('\n').map_or(0, |i| i + 1);
    }

    /// Move cursor to the end of the current line
    pub fn move_end(&mut self) {
        self.cursor = self.text[self.cursor..]
            .find('\n')
            .map_or(self.text.len(), |i| self.cursor + i);
    }

    /// Line index and display column of the cursor
    pub fn cursor_position(&self) -> (usize, usize) {
        let before = &self.text[..self.cursor];
        let line = before.matches('\n').count();
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        (line, before[line_start..].width())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut field = TextField::single_line();
        for ch in "a+b".chars() {
            assert!(field.insert_char(ch));
        }
        assert_eq!(field.text(), "a+b");
        assert!(field.backspace());
        assert_eq!(field.text(), "a+");
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_single_line_refuses_newline() {
        let mut field = TextField::single_line();
        assert!(!field.insert_char('\n'));
        field.set_text("a\nb");
        assert_eq!(field.text(), "ab");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut field = TextField::single_line();
        field.set_text("é\u{1F600}x");
        field.move_left();
        field.move_left();
        assert_eq!(field.cursor, 2);
        assert!(field.delete());
        assert_eq!(field.text(), "éx");
        assert!(field.backspace());
        assert_eq!(field.text(), "x");
        assert!(!field.backspace());
    }

    #[test]
    fn test_home_end_on_lines() {
        let mut field = TextField::multiline();
        field.set_text("first\nsecond");
        field.move_home();
        assert_eq!(field.cursor, 6);
        assert_eq!(field.cursor_position(), (1, 0));
        field.move_end();
        assert_eq!(field.cursor_position(), (1, 6));
        for _ in 0..7 {
            field.move_left();
        }
        assert_eq!(field.cursor_position(), (0, 5));
        field.move_home();
        assert_eq!(field.cursor, 0);
        field.move_end();
        assert_eq!(field.cursor, 5);
    }

    #[test]
    fn test_movement_clamps() {
        let mut field = TextField::single_line();
        field.move_left();
        field.move_right();
        assert_eq!(field.cursor, 0);
        assert!(!field.delete());
        field.set_text("ab");
        field.move_right();
        assert_eq!(field.cursor, 2);
    }

    #[test]
    fn test_clear() {
        let mut field = TextField::multiline();
        field.set_text("x\ny");
        field.clear();
        assert_eq!(field.text(), "");
        assert_eq!(field.cursor, 0);
    }
}
