#![forbid(unsafe_code)]

//! Text input widget.
//!
//! A single-line text field with a grapheme-aware cursor, horizontal
//! scrolling and a placeholder shown while the value is empty.

use seekbox_core::event::{Event, KeyCode, KeyEvent};
use seekbox_core::geometry::Rect;
use seekbox_core::text_width::grapheme_width;
use seekbox_render::cell::StyleFlags;
use seekbox_render::frame::Frame;
use unicode_segmentation::UnicodeSegmentation;

use crate::{Widget, draw_text_span};

/// A single-line text input widget.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// Text value.
    value: String,
    /// Cursor position (grapheme index).
    cursor: usize,
    /// Scroll offset (visual cells) for horizontal scrolling.
    scroll_cells: std::cell::Cell<usize>,
    /// Placeholder text.
    placeholder: String,
    /// Whether the input is focused (controls cursor output).
    focused: bool,
}

impl TextInput {
    /// Create a new empty text input.
    pub fn new() -> Self {
        Self::default()
    }

    // --- Builder methods ---

    /// Set the text value (builder). The cursor lands at the end.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.set_value(value);
        self
    }

    /// Set the placeholder text (builder).
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    // --- Value access ---

    /// Get the current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the value and move the cursor to its end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.grapheme_count();
        self.scroll_cells.set(0);
    }

    /// Clear all text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
        self.scroll_cells.set(0);
    }

    /// Placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// Get the cursor position (grapheme index).
    #[inline]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Check if the input is focused.
    #[inline]
    pub fn focused(&self) -> bool {
        self.focused
    }

    /// Set focus state.
    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Get the cursor screen position relative to a render area.
    pub fn cursor_position(&self, area: Rect) -> (u16, u16) {
        let cursor_visual = self.cursor_visual_pos();
        let effective_scroll = self.effective_scroll(area.width as usize);
        let rel_x = cursor_visual.saturating_sub(effective_scroll);
        let x = area
            .x
            .saturating_add(rel_x as u16)
            .min(area.right().saturating_sub(1));
        (x, area.y)
    }

    // --- Event handling ---

    /// Handle a key or paste event.
    ///
    /// Returns `true` if the value or cursor changed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Key(key) if key.is_press() => self.handle_key(key),
            Event::Paste(paste) => {
                let before = self.value.len();
                self.insert_text(&paste.text);
                self.value.len() != before
            }
            _ => false,
        }
    }

    fn handle_key(&mut self, key: &KeyEvent) -> bool {
        let ctrl = key.ctrl();
        match key.code {
            KeyCode::Char('w') if ctrl => self.delete_word_back(),
            KeyCode::Char('u') if ctrl => {
                let had_text = !self.value.is_empty();
                self.clear();
                had_text
            }
            KeyCode::Char(c) if !ctrl && !key.alt() => self.insert_char(c),
            KeyCode::Backspace if ctrl => self.delete_word_back(),
            KeyCode::Backspace => self.delete_char_back(),
            KeyCode::Delete => self.delete_char_forward(),
            KeyCode::Left => self.move_cursor_to(self.cursor.saturating_sub(1)),
            KeyCode::Right => self.move_cursor_to(self.cursor + 1),
            KeyCode::Home => self.move_cursor_to(0),
            KeyCode::End => self.move_cursor_to(usize::MAX),
            _ => false,
        }
    }

    // --- Editing operations ---

    fn sanitize_input_text(text: &str) -> String {
        // Line breaks and tabs become spaces; other control chars are dropped.
        text.chars()
            .map(|c| {
                if c == '\n' || c == '\r' || c == '\t' {
                    ' '
                } else {
                    c
                }
            })
            .filter(|c| !c.is_control())
            .collect()
    }

    /// Insert text at the cursor position.
    ///
    /// Newlines and tabs become spaces, other control characters are dropped.
    pub fn insert_text(&mut self, text: &str) {
        let clean_text = Self::sanitize_input_text(text);
        if clean_text.is_empty() {
            return;
        }
        let old_count = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert_str(byte_offset, &clean_text);
        let delta = self.grapheme_count().saturating_sub(old_count);
        self.cursor += delta;
    }

    fn insert_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        let old_count = self.grapheme_count();
        let byte_offset = self.grapheme_byte_offset(self.cursor);
        self.value.insert(byte_offset, c);
        // A combining char merges into the previous grapheme; the cursor stays put.
        if self.grapheme_count() > old_count {
            self.cursor += 1;
        }
        true
    }

    fn delete_char_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor - 1);
        let byte_end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(byte_start..byte_end);
        self.cursor -= 1;
        true
    }

    fn delete_char_forward(&mut self) -> bool {
        if self.cursor >= self.grapheme_count() {
            return false;
        }
        let byte_start = self.grapheme_byte_offset(self.cursor);
        let byte_end = self.grapheme_byte_offset(self.cursor + 1);
        self.value.drain(byte_start..byte_end);
        true
    }

    fn delete_word_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let graphemes: Vec<&str> = self.value.graphemes(true).collect();
        let mut pos = self.cursor;

        while pos > 0 && Self::grapheme_class(graphemes[pos - 1]) == 0 {
            pos -= 1;
        }
        if pos > 0 {
            let target_class = Self::grapheme_class(graphemes[pos - 1]);
            while pos > 0 && Self::grapheme_class(graphemes[pos - 1]) == target_class {
                pos -= 1;
            }
        }

        let byte_start = self.grapheme_byte_offset(pos);
        let byte_end = self.grapheme_byte_offset(self.cursor);
        self.value.drain(byte_start..byte_end);
        self.cursor = pos;
        true
    }

    /// 0 = whitespace, 1 = word, 2 = punctuation.
    fn grapheme_class(g: &str) -> u8 {
        if g.chars().all(char::is_whitespace) {
            0
        } else if g.chars().any(char::is_alphanumeric) {
            1
        } else {
            2
        }
    }

    fn move_cursor_to(&mut self, target: usize) -> bool {
        let target = target.min(self.grapheme_count());
        if target == self.cursor {
            return false;
        }
        self.cursor = target;
        true
    }

    // --- Internal helpers ---

    fn grapheme_count(&self) -> usize {
        self.value.graphemes(true).count()
    }

    fn grapheme_byte_offset(&self, grapheme_idx: usize) -> usize {
        self.value
            .grapheme_indices(true)
            .nth(grapheme_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn cursor_visual_pos(&self) -> usize {
        self.value
            .graphemes(true)
            .take(self.cursor)
            .map(grapheme_width)
            .sum()
    }

    fn effective_scroll(&self, viewport_width: usize) -> usize {
        let cursor_visual = self.cursor_visual_pos();
        let mut scroll = self.scroll_cells.get();
        if cursor_visual < scroll {
            scroll = cursor_visual;
        }
        if viewport_width > 0 && cursor_visual >= scroll + viewport_width {
            scroll = cursor_visual + 1 - viewport_width;
        }
        scroll = self.snap_scroll_to_grapheme_boundary(scroll);
        self.scroll_cells.set(scroll);
        scroll
    }

    /// Move a scroll offset that lands inside a wide grapheme past it.
    fn snap_scroll_to_grapheme_boundary(&self, scroll: usize) -> usize {
        let mut pos = 0;
        for g in self.value.graphemes(true) {
            let next = pos + grapheme_width(g);
            if pos < scroll && scroll < next {
                return next;
            }
            if next > scroll {
                break;
            }
            pos = next;
        }
        scroll
    }
}

impl Widget for TextInput {
    fn render(&self, area: Rect, frame: &mut Frame) {
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }
        let y = area.y;
        frame.buffer.clear_area(area.row(0));

        if self.value.is_empty() {
            draw_text_span(frame, area.x, y, &self.placeholder, StyleFlags::DIM, area.right());
        } else {
            let scroll = self.effective_scroll(area.width as usize);
            let mut visual_x = 0usize;
            for g in self.value.graphemes(true) {
                let w = grapheme_width(g);
                if w == 0 {
                    continue;
                }
                if visual_x < scroll {
                    visual_x += w;
                    continue;
                }
                let rel_x = visual_x - scroll;
                if rel_x + w > area.width as usize {
                    break;
                }
                draw_text_span(
                    frame,
                    area.x + rel_x as u16,
                    y,
                    g,
                    StyleFlags::empty(),
                    area.right(),
                );
                visual_x += w;
            }
        }

        if self.focused {
            let (cx, cy) = self.cursor_position(area);
            if let Some(cell) = frame.buffer.get_mut(cx, cy) {
                cell.attrs ^= StyleFlags::REVERSE;
            }
            frame.set_cursor(Some((cx, cy)));
            frame.set_cursor_visible(true);
        }
    }
}
