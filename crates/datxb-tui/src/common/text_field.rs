//! Single-line text field for form inputs.
//!
//! Supports the editing subset the forms need: insert, delete, cursor
//! movement and an optional mask for password entry.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Character drawn in place of each masked character.
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Default)]
pub struct TextField {
    text: String,
    /// Cursor position in chars.
    cursor: usize,
    masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// A field whose contents render as [`MASK_CHAR`].
    pub fn masked() -> Self {
        Self {
            masked: true,
            ..Self::default()
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Inserts text at the cursor. Line breaks and control characters are dropped.
    pub fn insert_str(&mut self, text: &str) {
        for ch in text.chars().filter(|c| !c.is_control()) {
            self.insert_char(ch);
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        if ch.is_control() {
            return;
        }
        let idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(idx, ch);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(idx);
    }

    /// Deletes the character at the cursor.
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let idx = char_to_byte_index(&self.text, self.cursor);
        self.text.remove(idx);
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len();
    }

    /// Applies an editing key. Returns true if the key was consumed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        match key.code {
            KeyCode::Char(ch)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.insert_char(ch);
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => self.clear(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Text as drawn on screen.
    pub fn display(&self) -> String {
        if self.masked {
            MASK_CHAR.to_string().repeat(self.len())
        } else {
            self.text.clone()
        }
    }

    /// Terminal column of the cursor relative to the field start.
    pub fn display_cursor_col(&self) -> u16 {
        if self.masked {
            return self.cursor as u16;
        }
        let idx = char_to_byte_index(&self.text, self.cursor);
        self.text[..idx].width() as u16
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }
}

fn char_to_byte_index(text: &str, col: usize) -> usize {
    text.char_indices()
        .nth(col)
        .map_or(text.len(), |(idx, _)| idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_and_editing_in_the_middle() {
        let mut field = TextField::new();
        field.insert_str("helo");
        field.move_left();
        field.insert_char('l');
        assert_eq!(field.text(), "hello");
        assert_eq!(field.cursor(), 4);

        field.move_home();
        field.delete_next_char();
        assert_eq!(field.text(), "ello");

        field.move_end();
        field.delete_prev_char();
        assert_eq!(field.text(), "ell");
    }

    #[test]
    fn multibyte_characters_keep_cursor_in_chars() {
        let mut field = TextField::new();
        field.insert_str("héllo");
        field.move_left();
        field.move_left();
        field.move_left();
        field.delete_prev_char();
        assert_eq!(field.text(), "hllo");
        assert_eq!(field.cursor(), 1);
    }

    #[test]
    fn paste_drops_line_breaks() {
        let mut field = TextField::new();
        field.insert_str("user@\nexample.com\r\n");
        assert_eq!(field.text(), "user@example.com");
    }

    #[test]
    fn masked_field_hides_content() {
        let mut field = TextField::masked();
        field.insert_str("Abc!");
        assert_eq!(field.display(), "••••");
        assert_eq!(field.text(), "Abc!");
        assert_eq!(field.display_cursor_col(), 4);
    }

    #[test]
    fn control_shortcuts_are_not_inserted() {
        let mut field = TextField::new();
        assert!(field.input(key(KeyCode::Char('a'))));
        assert!(!field.input(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)));
        assert!(field.input(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL)));
        assert!(field.is_empty());
        assert!(!field.input(key(KeyCode::Tab)));
    }

    #[test]
    fn shifted_characters_are_inserted() {
        let mut field = TextField::new();
        field.input(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
        field.input(KeyEvent::new(KeyCode::Char('!'), KeyModifiers::SHIFT));
        assert_eq!(field.text(), "A!");
    }
}
