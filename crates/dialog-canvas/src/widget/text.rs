//! Fixed-width single-line text edit model

use crate::input::Key;

/// Value, cursor and horizontal scroll of an input widget.
///
/// Every glyph is `char_width` pixels wide, so the visible window is a
/// plain column range `[scroll, scroll + columns)`.
#[derive(Clone, Debug, PartialEq)]
pub struct TextEditState {
    value: Vec<char>,
    /// Insertion point, `0..=len`
    cursor: usize,
    /// First visible column
    scroll: usize,
    /// Number of visible columns
    columns: usize,
    char_width: f32,
}

impl TextEditState {
    /// Create an empty model for a text area `width` pixels wide
    pub fn new(width: f32, padding: f32, char_width: f32) -> Self {
        let mut state = Self {
            value: Vec::new(),
            cursor: 0,
            scroll: 0,
            columns: 0,
            char_width,
        };
        state.set_width(width, padding);
        state
    }

    /// Recompute the visible column count after a size change
    pub fn set_width(&mut self, width: f32, padding: f32) {
        let inner = width - 2.0 * padding;
        self.columns = if self.char_width > 0.0 && inner > 0.0 {
            (inner / self.char_width).floor() as usize
        } else {
            0
        };
        self.clamp_scroll();
    }

    /// Current text
    pub fn value(&self) -> String {
        self.value.iter().collect()
    }

    /// Replace the text and move the cursor to its end
    pub fn set_value(&mut self, value: &str) {
        self.value = value.chars().collect();
        self.cursor = self.value.len();
        self.clamp_scroll();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Index of the first visible character
    #[inline]
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Cursor column inside the visible window
    #[inline]
    pub fn relative_cursor(&self) -> usize {
        self.cursor - self.scroll
    }

    /// Visible slice of the text
    pub fn view(&self) -> String {
        let end = (self.scroll + self.columns).min(self.value.len());
        self.value[self.scroll..end].iter().collect()
    }

    /// Horizontal pixel offset of the cursor from the text origin
    pub fn cursor_pixel(&self) -> f32 {
        self.relative_cursor() as f32 * self.char_width
    }

    /// Apply a key. Returns `true` if the value or cursor changed.
    pub fn apply(&mut self, key: Key) -> bool {
        let changed = match key {
            Key::Backspace if self.cursor > 0 => {
                self.cursor -= 1;
                self.value.remove(self.cursor);
                true
            }
            Key::Delete if self.cursor < self.value.len() => {
                self.value.remove(self.cursor);
                true
            }
            Key::Left => self.move_cursor(self.cursor.saturating_sub(1)),
            Key::Right => self.move_cursor((self.cursor + 1).min(self.value.len())),
            Key::Home => self.move_cursor(0),
            Key::End => self.move_cursor(self.value.len()),
            Key::Char(c) => {
                self.value.insert(self.cursor, c);
                self.cursor += 1;
                true
            }
            Key::Backspace | Key::Delete | Key::Other(_) => false,
        };
        self.clamp_scroll();
        changed
    }

    fn move_cursor(&mut self, to: usize) -> bool {
        let moved = self.cursor != to;
        self.cursor = to;
        moved
    }

    /// Keep the cursor inside the visible window and avoid blank
    /// columns after the end of the text
    fn clamp_scroll(&mut self) {
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        }
        if self.cursor > self.scroll + self.columns {
            self.scroll = self.cursor - self.columns;
        }
        self.scroll = self.scroll.min(self.value.len().saturating_sub(self.columns));
    }
}
