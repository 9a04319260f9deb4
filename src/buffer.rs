//! Core TextBuffer - document text plus the single selection
//!
//! Positions are byte offsets into UTF-8 text and always sit on char
//! boundaries.

use std::ops::Range;

/// Selection with cursor and anchor as byte offsets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    /// Cursor position (where we are)
    pub cursor: usize,
    /// Anchor position (where we started)
    pub anchor: usize,
}

impl Selection {
    /// Collapsed selection at `pos`
    pub fn caret(pos: usize) -> Self {
        Self {
            cursor: pos,
            anchor: pos,
        }
    }

    pub fn new(anchor: usize, cursor: usize) -> Self {
        Self { cursor, anchor }
    }

    /// Ordered byte range covered by the selection
    pub fn range(&self) -> Range<usize> {
        if self.cursor <= self.anchor {
            self.cursor..self.anchor
        } else {
            self.anchor..self.cursor
        }
    }

    /// Check if this is just a cursor (no selection)
    pub fn is_cursor(&self) -> bool {
        self.cursor == self.anchor
    }

    pub fn min_pos(&self) -> usize {
        self.cursor.min(self.anchor)
    }
}

/// Document text storage
#[derive(Clone, Debug, Default)]
pub struct TextBuffer {
    text: String,
    selection: Selection,
}

impl TextBuffer {
    /// Create a new empty text buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create from existing text, caret at the start
    pub fn from_str(text: &str) -> Self {
        Self {
            text: text.to_string(),
            selection: Selection::default(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Selected text, or `None` when only a caret is placed
    pub fn selected_text(&self) -> Option<&str> {
        if self.selection.is_cursor() {
            None
        } else {
            Some(&self.text[self.selection.range()])
        }
    }

    /// Set the selection, clamping both ends into the text and snapping them
    /// back to char boundaries
    pub fn set_selection(&mut self, selection: Selection) {
        self.selection = Selection {
            cursor: self.clamp_to_boundary(selection.cursor),
            anchor: self.clamp_to_boundary(selection.anchor),
        };
    }

    pub fn select_all(&mut self) {
        self.selection = Selection::new(0, self.text.len());
    }

    /// Get a text slice
    pub fn slice(&self, range: Range<usize>) -> &str {
        &self.text[range]
    }

    /// Insert text at position; the selection shifts along with the text
    pub fn insert(&mut self, pos: usize, text: &str) {
        if text.is_empty() {
            return;
        }
        let pos = self.clamp_to_boundary(pos);
        self.text.insert_str(pos, text);
        self.selection.cursor = shift_for_insert(self.selection.cursor, pos, text.len());
        self.selection.anchor = shift_for_insert(self.selection.anchor, pos, text.len());
    }

    /// Delete range; the selection is pulled back over the removed bytes
    pub fn delete(&mut self, range: Range<usize>) {
        let range = self.clamp_range(range);
        if range.is_empty() {
            return;
        }
        self.text.replace_range(range.clone(), "");
        self.selection.cursor = shift_for_delete(self.selection.cursor, &range);
        self.selection.anchor = shift_for_delete(self.selection.anchor, &range);
    }

    /// Clear all text
    pub fn clear(&mut self) {
        self.delete(0..self.text.len());
        self.selection = Selection::default();
    }

    /// Set text (replaces all content), caret at the start
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.selection = Selection::default();
    }

    /// Byte offset of the char boundary before `pos`
    pub fn prev_boundary(&self, pos: usize) -> usize {
        self.text[..pos.min(self.text.len())]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }

    /// Byte offset of the char boundary after `pos`
    pub fn next_boundary(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        self.text[pos..]
            .chars()
            .next()
            .map(|ch| pos + ch.len_utf8())
            .unwrap_or(pos)
    }

    /// Start of the line containing `pos`
    pub fn line_start(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        memchr::memrchr(b'\n', &self.text.as_bytes()[..pos])
            .map(|i| i + 1)
            .unwrap_or(0)
    }

    /// End of the line containing `pos` (before its newline)
    pub fn line_end(&self, pos: usize) -> usize {
        let pos = pos.min(self.text.len());
        memchr::memchr(b'\n', &self.text.as_bytes()[pos..])
            .map(|i| pos + i)
            .unwrap_or(self.text.len())
    }

    fn clamp_to_boundary(&self, pos: usize) -> usize {
        let mut pos = pos.min(self.text.len());
        while !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn clamp_range(&self, range: Range<usize>) -> Range<usize> {
        let start = self.clamp_to_boundary(range.start);
        let end = self.clamp_to_boundary(range.end).max(start);
        start..end
    }
}

/// New position of `offset` after inserting `len` bytes at `at`
pub(crate) fn shift_for_insert(offset: usize, at: usize, len: usize) -> usize {
    if offset >= at {
        offset + len
    } else {
        offset
    }
}

/// New position of `offset` after deleting `range`
pub(crate) fn shift_for_delete(offset: usize, range: &Range<usize>) -> usize {
    if offset <= range.start {
        offset
    } else if offset >= range.end {
        offset - range.len()
    } else {
        range.start
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_delete() {
        let mut buffer = TextBuffer::from_str("Hello World");
        buffer.insert(5, ",");
        assert_eq!(buffer.text(), "Hello, World");
        buffer.delete(5..6);
        assert_eq!(buffer.text(), "Hello World");
    }

    #[test]
    fn test_selection_follows_edits() {
        let mut buffer = TextBuffer::from_str("Hello World");
        buffer.set_selection(Selection::new(6, 11));
        buffer.insert(0, ">> ");
        assert_eq!(buffer.selected_text(), Some("World"));

        buffer.delete(0..3);
        assert_eq!(buffer.selected_text(), Some("World"));
    }

    #[test]
    fn test_selection_snaps_to_char_boundary() {
        let mut buffer = TextBuffer::from_str("héllo");
        // byte 2 is inside 'é'
        buffer.set_selection(Selection::new(0, 2));
        assert_eq!(buffer.selection().cursor, 1);
        assert_eq!(buffer.selected_text(), Some("h"));
    }

    #[test]
    fn test_char_navigation() {
        let buffer = TextBuffer::from_str("aé😀");
        assert_eq!(buffer.next_boundary(0), 1);
        assert_eq!(buffer.next_boundary(1), 3);
        assert_eq!(buffer.next_boundary(3), 7);
        assert_eq!(buffer.next_boundary(7), 7);
        assert_eq!(buffer.prev_boundary(7), 3);
        assert_eq!(buffer.prev_boundary(3), 1);
        assert_eq!(buffer.prev_boundary(0), 0);
    }

    #[test]
    fn test_line_bounds() {
        let buffer = TextBuffer::from_str("one\ntwo\nthree");
        assert_eq!(buffer.line_start(5), 4);
        assert_eq!(buffer.line_end(5), 7);
        assert_eq!(buffer.line_start(2), 0);
        assert_eq!(buffer.line_end(9), 13);
    }

    #[test]
    fn test_select_all_and_clear() {
        let mut buffer = TextBuffer::from_str("abc\ndef");
        buffer.select_all();
        assert_eq!(buffer.selected_text(), Some("abc\ndef"));
        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.selection().is_cursor());
    }
}
