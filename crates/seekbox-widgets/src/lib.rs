#![forbid(unsafe_code)]

//! Widgets for seekbox.
//!
//! The centerpiece is [`search_box::SearchBox`]: a text field that filters a
//! host-supplied list of [`record::Record`]s as the user types and renders a
//! [`dropdown::Dropdown`] of matches. The supporting widgets ([`input::TextInput`],
//! [`block::Block`]) are usable on their own.

pub mod block;
pub mod borders;
pub mod dropdown;
pub mod input;
pub mod matcher;
pub mod record;
pub mod search_box;

use seekbox_core::geometry::Rect;
use seekbox_core::text_width::grapheme_width;
use seekbox_render::cell::{Cell, StyleFlags};
use seekbox_render::frame::Frame;
use unicode_segmentation::UnicodeSegmentation;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;
    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Draw `text` starting at `(x, y)`, clipped at `max_x` (exclusive).
///
/// Wide graphemes that would straddle `max_x` are not drawn. Returns the
/// column after the last drawn grapheme.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    text: &str,
    attrs: StyleFlags,
    max_x: u16,
) -> u16 {
    for g in text.graphemes(true) {
        let w = grapheme_width(g) as u16;
        if w == 0 {
            continue;
        }
        if x.saturating_add(w) > max_x {
            break;
        }
        frame.buffer.set(x, y, Cell::from_grapheme(g).with_attrs(attrs));
        for dx in 1..w {
            frame.buffer.set_continuation(x + dx, y, attrs);
        }
        x += w;
    }
    x
}

/// Allocation-free case-insensitive containment check.
///
/// `needle_lower` must already be lowercased.
pub(crate) fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    if needle_lower.is_empty() {
        return true;
    }
    if haystack.is_ascii() && needle_lower.is_ascii() {
        let haystack_bytes = haystack.as_bytes();
        let needle_bytes = needle_lower.as_bytes();
        if needle_bytes.len() > haystack_bytes.len() {
            return false;
        }
        return haystack_bytes.windows(needle_bytes.len()).any(|window| {
            window
                .iter()
                .zip(needle_bytes)
                .all(|(h, n)| h.to_ascii_lowercase() == *n)
        });
    }
    haystack.to_lowercase().contains(needle_lower)
}
