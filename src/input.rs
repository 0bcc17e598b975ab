//! Single-line text input state and keyboard editing.

use crossterm::event::{KeyCode, KeyModifiers};

/// Editable line of text with a character-indexed cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    value: String,
    cursor: usize,
}

impl TextInput {
    /// Create an input holding `value` with the cursor at the end
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Byte offset of the given character index
    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
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

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// The slice of text that fits in `width` columns, scrolled so the
    /// cursor stays visible, plus the cursor's column inside that slice.
    pub fn visible_window(&self, width: usize) -> (String, usize) {
        if width == 0 {
            return (String::new(), 0);
        }
        let start = if self.cursor >= width {
            self.cursor - width + 1
        } else {
            0
        };
        let visible: String = self.value.chars().skip(start).take(width).collect();
        (visible, self.cursor - start)
    }
}

/// Apply an editing key to a text input
///
/// Returns true if the key was handled, false if the caller should
/// interpret it (navigation, submit, quit).
pub fn apply_edit_key(input: &mut TextInput, key_code: KeyCode, modifiers: KeyModifiers) -> bool {
    match key_code {
        KeyCode::Char(c) => {
            if modifiers.contains(KeyModifiers::CONTROL) {
                // Readline-style shortcuts only
                match c {
                    'a' => input.move_home(),
                    'e' => input.move_end(),
                    'u' => input.clear(),
                    _ => return false,
                }
            } else if modifiers.contains(KeyModifiers::ALT) {
                return false;
            } else {
                input.insert(c);
            }
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_home(),
        KeyCode::End => input.move_end(),
        _ => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(input: &mut TextInput, text: &str) {
        for c in text.chars() {
            assert!(apply_edit_key(input, KeyCode::Char(c), KeyModifiers::NONE));
        }
    }

    #[test]
    fn test_new_places_cursor_at_end() {
        let input = TextInput::new("1,2,3");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::default();
        type_str(&mut input, "0.012,");
        apply_edit_key(&mut input, KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(input.value(), "0.012");
        assert_eq!(input.cursor(), 5);
    }

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::new("1,3");
        apply_edit_key(&mut input, KeyCode::Left, KeyModifiers::NONE);
        type_str(&mut input, "2,");
        assert_eq!(input.value(), "1,2,3");
    }

    #[test]
    fn test_delete_at_cursor() {
        let mut input = TextInput::new("12");
        apply_edit_key(&mut input, KeyCode::Home, KeyModifiers::NONE);
        apply_edit_key(&mut input, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "2");
        apply_edit_key(&mut input, KeyCode::End, KeyModifiers::NONE);
        apply_edit_key(&mut input, KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(input.value(), "2");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::new("7");
        input.move_home();
        input.backspace();
        assert_eq!(input.value(), "7");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::new("é,ü");
        input.backspace();
        input.move_left();
        input.insert('x');
        assert_eq!(input.value(), "éx,");
    }

    #[test]
    fn test_ctrl_u_clears() {
        let mut input = TextInput::new("abc");
        assert!(apply_edit_key(&mut input, KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_unhandled_keys() {
        let mut input = TextInput::new("abc");
        assert!(!apply_edit_key(&mut input, KeyCode::Enter, KeyModifiers::NONE));
        assert!(!apply_edit_key(&mut input, KeyCode::Tab, KeyModifiers::NONE));
        assert!(!apply_edit_key(&mut input, KeyCode::Char('s'), KeyModifiers::CONTROL));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_visible_window_scrolls_to_cursor() {
        let input = TextInput::new("abcdef");
        assert_eq!(input.visible_window(4), ("def".to_string(), 3));
        assert_eq!(input.visible_window(10), ("abcdef".to_string(), 6));
        assert_eq!(input.visible_window(0), (String::new(), 0));
    }

    #[test]
    fn test_visible_window_cursor_at_start() {
        let mut input = TextInput::new("abcdef");
        input.move_home();
        assert_eq!(input.visible_window(3), ("abc".to_string(), 0));
    }
}
