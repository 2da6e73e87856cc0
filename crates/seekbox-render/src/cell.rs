#![forbid(unsafe_code)]

//! A single terminal cell.

use bitflags::bitflags;

bitflags! {
    /// Text attributes stored per cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// What a cell displays.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum CellContent {
    /// Nothing drawn; presents as a space.
    #[default]
    Empty,
    /// A single-codepoint grapheme.
    Char(char),
    /// A multi-codepoint grapheme cluster (combining marks, ZWJ sequences).
    Grapheme(Box<str>),
    /// Trailing half of a wide grapheme drawn in the cell to the left.
    Continuation,
}

impl CellContent {
    /// The char this cell shows, if it holds exactly one.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            CellContent::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Append the visible text of this cell to `out`.
    ///
    /// Empty cells contribute a space; continuation cells contribute nothing.
    pub fn push_to(&self, out: &mut String) {
        match self {
            CellContent::Empty => out.push(' '),
            CellContent::Char(c) => out.push(*c),
            CellContent::Grapheme(g) => out.push_str(g),
            CellContent::Continuation => {}
        }
    }
}

/// A cell in the grid: content plus attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Cell {
    pub content: CellContent,
    pub attrs: StyleFlags,
}

impl Cell {
    /// Cell showing a single char.
    #[must_use]
    pub fn from_char(c: char) -> Self {
        Self {
            content: CellContent::Char(c),
            attrs: StyleFlags::empty(),
        }
    }

    /// Cell showing a grapheme cluster; single-char clusters are stored inline.
    #[must_use]
    pub fn from_grapheme(g: &str) -> Self {
        let mut chars = g.chars();
        let content = match (chars.next(), chars.next()) {
            (None, _) => CellContent::Empty,
            (Some(c), None) => CellContent::Char(c),
            _ => CellContent::Grapheme(g.into()),
        };
        Self {
            content,
            attrs: StyleFlags::empty(),
        }
    }

    /// Set attributes (builder).
    #[must_use]
    pub fn with_attrs(mut self, attrs: StyleFlags) -> Self {
        self.attrs = attrs;
        self
    }

    /// Whether nothing is drawn in this cell.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content == CellContent::Empty
    }
}
