#![forbid(unsafe_code)]

//! Display width of text in terminal cells.

use unicode_width::UnicodeWidthStr;

/// Width of a single grapheme cluster in cells (0, 1 or 2).
#[inline]
#[must_use]
pub fn grapheme_width(grapheme: &str) -> usize {
    if grapheme.chars().all(char::is_control) {
        return 0;
    }
    UnicodeWidthStr::width(grapheme).min(2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_is_one_cell() {
        assert_eq!(grapheme_width("J"), 1);
        assert_eq!(grapheme_width(" "), 1);
    }

    #[test]
    fn wide_and_combining() {
        assert_eq!(grapheme_width("漢"), 2);
        assert_eq!(grapheme_width("e\u{301}"), 1);
    }

    #[test]
    fn control_chars_have_no_width() {
        assert_eq!(grapheme_width("\u{7}"), 0);
        assert_eq!(grapheme_width("\t"), 0);
    }
}
