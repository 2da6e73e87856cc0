#![forbid(unsafe_code)]

//! Dropdown of matched records.
//!
//! Renders a bordered container listing a match set, one row per match.
//! With a hit grid present, the container's cells register as
//! [`HitRegion::Border`] and each visible row as [`HitRegion::Button`] with
//! the record index as hit data, so a click can be mapped back to a record.

use crate::block::Block;
use crate::record::Record;
use crate::{StatefulWidget, Widget, draw_text_span};
use seekbox_core::geometry::Rect;
use seekbox_render::cell::StyleFlags;
use seekbox_render::frame::{Frame, HitId, HitRegion};

/// Label drawn inside an open dropdown with no matches.
pub const NO_MATCHES_LABEL: &str = "No matches";

/// Mutable state for a [`Dropdown`]: keyboard highlight and scroll offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DropdownState {
    /// Highlighted position within the match set, if any.
    highlighted: Option<usize>,
    /// First visible position within the match set.
    offset: usize,
}

impl DropdownState {
    /// Highlighted position within the match set.
    #[inline]
    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    /// First visible position within the match set.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Drop highlight and scroll back to the top.
    pub fn reset(&mut self) {
        self.highlighted = None;
        self.offset = 0;
    }

    /// Move the highlight one row down, clamped to the last match.
    pub fn highlight_next(&mut self, match_count: usize) -> bool {
        if match_count == 0 {
            return false;
        }
        let next = match self.highlighted {
            Some(pos) => (pos + 1).min(match_count - 1),
            None => 0,
        };
        self.set_highlight(next)
    }

    /// Move the highlight one row up, clamped to the first match.
    pub fn highlight_prev(&mut self, match_count: usize) -> bool {
        if match_count == 0 {
            return false;
        }
        let prev = match self.highlighted {
            Some(pos) => pos.saturating_sub(1),
            None => match_count - 1,
        };
        self.set_highlight(prev)
    }

    fn set_highlight(&mut self, pos: usize) -> bool {
        if self.highlighted == Some(pos) {
            return false;
        }
        self.highlighted = Some(pos);
        true
    }

    /// Adjust `offset` so the highlight sits inside `rows` visible rows.
    fn scroll_into_view(&mut self, match_count: usize, rows: usize) {
        let max_offset = match_count.saturating_sub(rows.max(1));
        if let Some(pos) = self.highlighted {
            if pos < self.offset {
                self.offset = pos;
            } else if rows > 0 && pos >= self.offset + rows {
                self.offset = pos + 1 - rows;
            }
        }
        self.offset = self.offset.min(max_offset);
    }
}

/// A bordered list of the records in a match set.
#[derive(Debug, Clone)]
pub struct Dropdown<'a> {
    records: &'a [Record],
    matches: &'a [usize],
    block: Block,
    hit_id: Option<HitId>,
    max_visible: usize,
}

impl<'a> Dropdown<'a> {
    /// `matches` are indices into `records`, in display order.
    #[must_use]
    pub fn new(records: &'a [Record], matches: &'a [usize]) -> Self {
        Self {
            records,
            matches,
            block: Block::bordered(),
            hit_id: None,
            max_visible: usize::MAX,
        }
    }

    /// Register hit regions under this id when rendering.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Cap the number of rows shown at once.
    #[must_use]
    pub fn max_visible(mut self, rows: usize) -> Self {
        self.max_visible = rows.max(1);
        self
    }

    /// Height the dropdown wants: one row per visible match (at least one
    /// for the empty label) plus the block's borders.
    #[must_use]
    pub fn desired_height(&self) -> u16 {
        let rows = self.matches.len().clamp(1, self.max_visible);
        u16::try_from(rows)
            .unwrap_or(u16::MAX)
            .saturating_add(self.block.vertical_chrome())
    }
}

impl StatefulWidget for Dropdown<'_> {
    type State = DropdownState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        let area = area.intersection(&frame.bounds());
        let span = tracing::debug_span!(
            "dropdown.render",
            total_records = self.records.len(),
            match_count = self.matches.len(),
            visible_items = tracing::field::Empty,
        );
        let _guard = span.enter();

        if area.is_empty() {
            span.record("visible_items", 0usize);
            return;
        }

        self.block.render(area, frame);
        if let Some(id) = self.hit_id {
            frame.register_hit(area, id, HitRegion::Border, 0);
        }

        let inner = self.block.inner(area);
        if inner.is_empty() {
            span.record("visible_items", 0usize);
            return;
        }

        if self.matches.is_empty() {
            state.reset();
            draw_text_span(
                frame,
                inner.x,
                inner.y,
                NO_MATCHES_LABEL,
                StyleFlags::DIM,
                inner.right(),
            );
            span.record("visible_items", 0usize);
            return;
        }

        if let Some(pos) = state.highlighted
            && pos >= self.matches.len()
        {
            state.highlighted = Some(self.matches.len() - 1);
        }
        let rows = (inner.height as usize).min(self.max_visible);
        state.scroll_into_view(self.matches.len(), rows);

        let mut visible = 0usize;
        for (row, (pos, &record_index)) in self
            .matches
            .iter()
            .enumerate()
            .skip(state.offset)
            .take(rows)
            .enumerate()
        {
            let Some(record) = self.records.get(record_index) else {
                continue;
            };
            let row_area = inner.row(row as u16);
            let attrs = if state.highlighted == Some(pos) {
                StyleFlags::REVERSE
            } else {
                StyleFlags::empty()
            };
            draw_text_span(
                frame,
                row_area.x,
                row_area.y,
                &record.value,
                attrs,
                row_area.right(),
            );
            if !attrs.is_empty() {
                frame.buffer.add_flags(row_area, attrs);
            }
            if let Some(id) = self.hit_id {
                frame.register_hit(row_area, id, HitRegion::Button, record_index as u64);
            }
            visible += 1;
        }
        span.record("visible_items", visible);
    }
}
