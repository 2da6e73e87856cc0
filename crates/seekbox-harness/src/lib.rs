#![forbid(unsafe_code)]

//! Test harness for seekbox widgets.
//!
//! [`Harness`] mounts a [`SearchBox`], re-renders it into a hit-grid frame
//! after every event and answers queries against the rendered output: the
//! field's value, how many parts carry a marker class, which labels the
//! dropdown lists, and where a piece of text sits on screen.
//!
//! # Example
//!
//! ```
//! use seekbox_harness::{Harness, sample_records};
//! use seekbox_widgets::search_box::SearchBox;
//!
//! let mut harness = Harness::mount(SearchBox::new().data(sample_records()));
//! harness.change("Doe");
//! assert_eq!(harness.item_labels(), ["John Doe", "Jane Doe"]);
//! harness.click_text("Jane Doe").unwrap();
//! assert_eq!(harness.input_value(), "Jane Doe");
//! assert_eq!(harness.query_all("search-box-dropdown"), 0);
//! ```

pub mod error;
pub mod fixture;

pub use error::HarnessError;
pub use fixture::{load_config, load_records, sample_records};

use seekbox_core::event::{Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind, PasteEvent};
use seekbox_render::frame::Frame;
use seekbox_widgets::StatefulWidget;
use seekbox_widgets::search_box::{MouseResult, SearchBox, SearchBoxPart, SearchBoxState};

/// Install a `fmt` subscriber that writes through the test capture.
///
/// Safe to call from every test; only the first call installs.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// A mounted search box plus the frame it last rendered into.
#[derive(Debug)]
pub struct Harness {
    search_box: SearchBox,
    state: SearchBoxState,
    frame: Frame,
}

impl Harness {
    /// Frame width used by [`Harness::mount`].
    pub const DEFAULT_WIDTH: u16 = 40;
    /// Frame height used by [`Harness::mount`].
    pub const DEFAULT_HEIGHT: u16 = 12;

    /// Mount into a default-sized frame.
    pub fn mount(search_box: SearchBox) -> Self {
        Self::with_size(search_box, Self::DEFAULT_WIDTH, Self::DEFAULT_HEIGHT)
    }

    /// Mount into a `width` x `height` frame. Fires auto-focus if configured.
    pub fn with_size(search_box: SearchBox, width: u16, height: u16) -> Self {
        let state = search_box.mount();
        let mut harness = Self {
            search_box,
            state,
            frame: Frame::with_hit_grid(width, height),
        };
        harness.render();
        harness
    }

    fn render(&mut self) {
        self.frame.clear();
        let area = self.frame.bounds();
        self.search_box.render(area, &mut self.frame, &mut self.state);
    }

    fn dispatch(&mut self, event: &Event) -> bool {
        let handled = self.search_box.handle_event(&mut self.state, event);
        self.render();
        handled
    }

    // --- Events ---

    /// Fire one change event carrying `value`.
    pub fn change(&mut self, value: &str) -> bool {
        let changed = self.search_box.change(&mut self.state, value);
        self.render();
        changed
    }

    /// Type `text` one key press per character.
    pub fn type_text(&mut self, text: &str) {
        for c in text.chars() {
            self.dispatch(&Event::key(KeyCode::Char(c)));
        }
    }

    /// Press `code` with no modifiers.
    pub fn press(&mut self, code: KeyCode) -> bool {
        self.dispatch(&Event::key(code))
    }

    /// Dispatch a full key event, modifiers included.
    pub fn press_key(&mut self, key: KeyEvent) -> bool {
        self.dispatch(&Event::Key(key))
    }

    /// Paste `text` as one edit.
    pub fn paste(&mut self, text: &str) -> bool {
        self.dispatch(&Event::Paste(PasteEvent::new(text)))
    }

    /// Send a focus-gained event.
    pub fn focus(&mut self) -> bool {
        self.dispatch(&Event::Focus(true))
    }

    /// Send a focus-lost event.
    pub fn blur(&mut self) -> bool {
        self.dispatch(&Event::Focus(false))
    }

    /// Left-click the cell at (`x`, `y`).
    pub fn click_at(&mut self, x: u16, y: u16) -> MouseResult {
        let hit = self.frame.hit_test(x, y);
        let event = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), x, y);
        let result = self.search_box.handle_mouse(&mut self.state, &event, hit);
        self.render();
        result
    }

    /// Left-click the first place `text` is rendered, preferring a dropdown row.
    pub fn click_text(&mut self, text: &str) -> Result<MouseResult, HarnessError> {
        let positions = self.find_all_text(text);
        let target = positions
            .iter()
            .copied()
            .find(|&(x, y)| matches!(self.part_at(x, y), Some(SearchBoxPart::DropdownItem(_))))
            .or_else(|| positions.first().copied())
            .ok_or_else(|| HarnessError::TextNotFound(text.to_owned()))?;
        Ok(self.click_at(target.0, target.1))
    }

    // --- Queries ---

    /// The mounted widget.
    pub fn search_box(&self) -> &SearchBox {
        &self.search_box
    }

    /// State of the mounted widget.
    pub fn state(&self) -> &SearchBoxState {
        &self.state
    }

    /// Frame from the latest render.
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Current text of the field.
    pub fn input_value(&self) -> &str {
        self.state.text()
    }

    /// Whether the field holds focus.
    pub fn has_focus(&self) -> bool {
        self.state.is_focused()
    }

    /// The search box part rendered at (`x`, `y`).
    pub fn part_at(&self, x: u16, y: u16) -> Option<SearchBoxPart> {
        self.frame
            .hit_test(x, y)
            .and_then(|hit| self.search_box.classify(hit))
    }

    fn parts(&self) -> Vec<SearchBoxPart> {
        self.frame
            .hit_grid
            .as_ref()
            .map(|grid| {
                grid.distinct_hits()
                    .into_iter()
                    .filter_map(|hit| self.search_box.classify(hit))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Number of distinct rendered parts carrying the marker `class`.
    pub fn query_all(&self, class: &str) -> usize {
        self.parts()
            .iter()
            .filter(|part| part.class_name() == class)
            .count()
    }

    /// Labels of the rendered dropdown rows, top to bottom.
    pub fn item_labels(&self) -> Vec<String> {
        let records = self.search_box.records();
        self.parts()
            .into_iter()
            .filter_map(|part| match part {
                SearchBoxPart::DropdownItem(idx) => records.get(idx).map(|r| r.value.clone()),
                _ => None,
            })
            .collect()
    }

    /// Rendered text of row `y`, trailing blanks trimmed.
    pub fn row_text(&self, y: u16) -> String {
        self.frame.buffer.row_text(y)
    }

    /// Every rendered line, trailing blank rows dropped.
    pub fn screen_text(&self) -> Vec<String> {
        let mut rows: Vec<String> = (0..self.frame.height()).map(|y| self.row_text(y)).collect();
        while rows.last().is_some_and(String::is_empty) {
            rows.pop();
        }
        rows
    }

    /// Cell where `text` first starts, scanning rows top to bottom.
    pub fn find_text(&self, text: &str) -> Option<(u16, u16)> {
        self.find_all_text(text).into_iter().next()
    }

    fn find_all_text(&self, text: &str) -> Vec<(u16, u16)> {
        if text.is_empty() {
            return Vec::new();
        }
        let mut found = Vec::new();
        for y in 0..self.frame.height() {
            let columns = self.frame.buffer.row_columns(y);
            let mut line = String::new();
            let mut starts = Vec::with_capacity(columns.len());
            for (x, grapheme) in &columns {
                starts.push((line.len(), *x));
                line.push_str(grapheme);
            }
            for (byte, _) in line.match_indices(text) {
                if let Some(&(_, x)) = starts.iter().find(|(offset, _)| *offset == byte) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    /// The field's value, provided its placeholder is `placeholder`.
    pub fn by_placeholder(&self, placeholder: &str) -> Result<&str, HarnessError> {
        let actual = self.search_box.config().placeholder.as_str();
        if actual != placeholder {
            return Err(HarnessError::PlaceholderMismatch {
                expected: placeholder.to_owned(),
                actual: actual.to_owned(),
            });
        }
        Ok(self.input_value())
    }

    /// blake3 digest of every cell's content and style flags.
    pub fn frame_checksum(&self) -> String {
        let buffer = &self.frame.buffer;
        let mut bytes = Vec::with_capacity(buffer.width() as usize * buffer.height() as usize * 3);
        let mut scratch = String::new();
        for y in 0..buffer.height() {
            for x in 0..buffer.width() {
                let Some(cell) = buffer.get(x, y) else {
                    continue;
                };
                scratch.clear();
                cell.content.push_to(&mut scratch);
                bytes.extend_from_slice(scratch.as_bytes());
                bytes.push(0);
                bytes.push(cell.attrs.bits());
            }
            bytes.push(b'\n');
        }
        format!("blake3:{}", blake3::hash(&bytes).to_hex())
    }
}
