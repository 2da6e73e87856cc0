#![forbid(unsafe_code)]

//! Search box: a text field that filters records into a dropdown.
//!
//! [`SearchBox`] holds configuration and host callbacks; all mutable state
//! lives in a [`SearchBoxState`] created by [`SearchBox::mount`]. Every
//! transition happens synchronously inside the handler for its event.
//!
//! # Invariants
//!
//! - After any text change the dropdown is open iff the text is non-empty.
//! - Selecting a record sets the text to the record's `value` and closes the
//!   dropdown without firing `on_change`.
//! - `on_focus` fires once per transition into focus, including the one an
//!   `auto_focus` mount performs.
//!
//! # Example
//!
//! ```
//! use seekbox_widgets::record::Record;
//! use seekbox_widgets::search_box::SearchBox;
//!
//! let search = SearchBox::new()
//!     .placeholder("Search people")
//!     .data([Record::new("john", "John Doe"), Record::new("jane", "Jane Doe")]);
//! let mut state = search.mount();
//! search.change(&mut state, "doe");
//! assert_eq!(state.matches(), &[0, 1]);
//! assert!(search.select(&mut state, 1));
//! assert_eq!(state.text(), "Jane Doe");
//! assert!(!state.is_dropdown_open());
//! ```

use std::fmt;

use crate::StatefulWidget;
use crate::Widget;
use crate::dropdown::{Dropdown, DropdownState};
use crate::input::TextInput;
use crate::matcher::match_indices;
use crate::record::Record;
use seekbox_core::event::{Event, KeyCode, MouseButton, MouseEvent, MouseEventKind};
use seekbox_core::geometry::Rect;
use seekbox_render::frame::{Frame, HitData, HitId, HitRegion};

/// Callback fired with the new text after each change event.
pub type ChangeHandler = Box<dyn Fn(&str)>;
/// Callback fired on each transition into focus.
pub type FocusHandler = Box<dyn Fn()>;
/// Callback fired with the chosen record after a selection.
pub type SelectHandler = Box<dyn Fn(&Record)>;

/// Default hit id a search box registers its regions under.
pub const DEFAULT_HIT_ID: HitId = HitId::new(1);

/// Data-only configuration for a [`SearchBox`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SearchBoxConfig {
    /// Text shown while the field is empty.
    pub placeholder: String,
    /// Text at mount.
    pub initial_value: String,
    /// Focus the field at mount.
    pub auto_focus: bool,
    /// Records to match against.
    pub data: Vec<Record>,
    /// Optional cap on dropdown rows. Without one, every match gets a row
    /// and only the render area clips the list.
    pub max_visible_items: Option<usize>,
}

/// Where the search box is in its interaction cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Text is empty; dropdown closed.
    Empty,
    /// Mounted with an initial value and not yet edited; dropdown closed.
    Idle,
    /// Text is non-empty and the dropdown lists its matches.
    Typing,
    /// A record was chosen; text holds its value and the dropdown is closed.
    Selected,
}

/// A rendered part of a search box, recovered from a hit-test result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchBoxPart {
    /// The text field row.
    Input,
    /// The dropdown container.
    Dropdown,
    /// One dropdown row; carries the record index.
    DropdownItem(usize),
}

impl SearchBoxPart {
    /// Marker class for the field.
    pub const INPUT_CLASS: &'static str = "search-box-input";
    /// Marker class for the dropdown container.
    pub const DROPDOWN_CLASS: &'static str = "search-box-dropdown";
    /// Marker class for each dropdown row.
    pub const DROPDOWN_ITEM_CLASS: &'static str = "search-box-dropdown-list-item";

    /// Marker class naming this part.
    #[must_use]
    pub const fn class_name(&self) -> &'static str {
        match self {
            SearchBoxPart::Input => Self::INPUT_CLASS,
            SearchBoxPart::Dropdown => Self::DROPDOWN_CLASS,
            SearchBoxPart::DropdownItem(_) => Self::DROPDOWN_ITEM_CLASS,
        }
    }
}

/// Outcome of [`SearchBox::handle_mouse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseResult {
    /// The event did not concern this search box.
    Ignored,
    /// A click on the field moved focus into it.
    Focused,
    /// A click elsewhere took focus away.
    Blurred,
    /// A click on a dropdown row selected the record at this index.
    Selected(usize),
}

/// Per-instance state of a mounted [`SearchBox`].
#[derive(Debug, Clone, Default)]
pub struct SearchBoxState {
    input: TextInput,
    dropdown_open: bool,
    matches: Vec<usize>,
    dropdown: DropdownState,
    selected: Option<usize>,
}

impl SearchBoxState {
    /// Current text of the field.
    #[inline]
    pub fn text(&self) -> &str {
        self.input.value()
    }

    /// Whether the field holds focus.
    #[inline]
    pub fn is_focused(&self) -> bool {
        self.input.focused()
    }

    /// Whether the dropdown renders.
    #[inline]
    pub fn is_dropdown_open(&self) -> bool {
        self.dropdown_open
    }

    /// Record indices matching the current text, in list order.
    #[inline]
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Highlighted position within [`SearchBoxState::matches`].
    #[inline]
    pub fn highlighted(&self) -> Option<usize> {
        self.dropdown.highlighted()
    }

    /// Index of the record chosen by the last selection, until the next edit.
    #[inline]
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Underlying text field.
    #[inline]
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Derived interaction phase.
    ///
    /// Every edit reopens the dropdown for non-empty text and every
    /// selection records its index, so closed non-empty text without a
    /// selection only occurs before the first edit.
    pub fn phase(&self) -> SearchPhase {
        if self.text().is_empty() {
            SearchPhase::Empty
        } else if self.dropdown_open {
            SearchPhase::Typing
        } else if self.selected.is_some() {
            SearchPhase::Selected
        } else {
            SearchPhase::Idle
        }
    }
}

/// Search input with a dropdown of case-insensitive substring matches.
pub struct SearchBox {
    config: SearchBoxConfig,
    on_change: Option<ChangeHandler>,
    on_focus: Option<FocusHandler>,
    on_select: Option<SelectHandler>,
    hit_id: HitId,
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::from_config(SearchBoxConfig::default())
    }
}

impl fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchBox")
            .field("config", &self.config)
            .field("on_change", &self.on_change.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_select", &self.on_select.is_some())
            .field("hit_id", &self.hit_id)
            .finish()
    }
}

impl SearchBox {
    /// Search box with no placeholder, no data and no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from data-only configuration.
    pub fn from_config(config: SearchBoxConfig) -> Self {
        Self {
            config,
            on_change: None,
            on_focus: None,
            on_select: None,
            hit_id: DEFAULT_HIT_ID,
        }
    }

    // --- Builder methods ---

    /// Text shown dim while the field is empty.
    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.config.placeholder = placeholder.into();
        self
    }

    /// Text at mount. The dropdown stays closed until the first edit.
    #[must_use]
    pub fn initial_value(mut self, value: impl Into<String>) -> Self {
        self.config.initial_value = value.into();
        self
    }

    /// Focus the field at mount, firing `on_focus` once.
    #[must_use]
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.config.auto_focus = auto_focus;
        self
    }

    /// Records to match against, in display order.
    #[must_use]
    pub fn data(mut self, data: impl IntoIterator<Item = Record>) -> Self {
        self.config.data = data.into_iter().collect();
        self
    }

    /// Cap the dropdown at `rows` rows, scrolling to keep the highlight visible.
    #[must_use]
    pub fn max_visible_items(mut self, rows: usize) -> Self {
        self.config.max_visible_items = Some(rows.max(1));
        self
    }

    /// Id this widget registers its hit regions under.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    /// Called with the new text after each change event.
    #[must_use]
    pub fn on_change(mut self, handler: impl Fn(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    /// Called on each transition into focus.
    #[must_use]
    pub fn on_focus(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_focus = Some(Box::new(handler));
        self
    }

    /// Called with the chosen record after each selection.
    #[must_use]
    pub fn on_select(mut self, handler: impl Fn(&Record) + 'static) -> Self {
        self.on_select = Some(Box::new(handler));
        self
    }

    // --- Accessors ---

    /// Data-only configuration.
    pub fn config(&self) -> &SearchBoxConfig {
        &self.config
    }

    /// Records being matched.
    pub fn records(&self) -> &[Record] {
        &self.config.data
    }

    /// Id of this widget's hit regions.
    pub fn get_hit_id(&self) -> HitId {
        self.hit_id
    }

    // --- Transitions ---

    /// Create the state for a freshly mounted instance.
    ///
    /// With `auto_focus` the field starts focused and `on_focus` fires once.
    pub fn mount(&self) -> SearchBoxState {
        let input = TextInput::new()
            .with_placeholder(self.config.placeholder.clone())
            .with_value(self.config.initial_value.clone());
        let matches = match_indices(&self.config.data, input.value());
        let mut state = SearchBoxState {
            input,
            dropdown_open: false,
            matches,
            ..SearchBoxState::default()
        };
        tracing::debug!(
            records = self.config.data.len(),
            auto_focus = self.config.auto_focus,
            has_initial_value = !self.config.initial_value.is_empty(),
            "search_box.mount"
        );
        if self.config.auto_focus {
            self.focus(&mut state);
        }
        state
    }

    /// Apply a change event carrying the field's new raw value.
    ///
    /// Returns `false` (and fires nothing) when the value is unchanged.
    pub fn change(&self, state: &mut SearchBoxState, value: impl Into<String>) -> bool {
        let value = value.into();
        if value == state.text() {
            return false;
        }
        state.input.set_value(value);
        self.text_changed(state);
        true
    }

    /// Move focus into the field. Fires `on_focus` only on a transition.
    pub fn focus(&self, state: &mut SearchBoxState) -> bool {
        if state.input.focused() {
            return false;
        }
        let _span = tracing::debug_span!("search_box.focus", text_len = state.text().len()).entered();
        state.input.set_focused(true);
        if let Some(on_focus) = &self.on_focus {
            on_focus();
        }
        true
    }

    /// Take focus away from the field.
    pub fn blur(&self, state: &mut SearchBoxState) -> bool {
        if !state.input.focused() {
            return false;
        }
        state.input.set_focused(false);
        tracing::debug!("search_box.blur");
        true
    }

    /// Select the record at `record_index`.
    ///
    /// Sets the text to the record's value, closes the dropdown and fires
    /// `on_select`. `on_change` does not fire. Out-of-range indices are
    /// ignored.
    pub fn select(&self, state: &mut SearchBoxState, record_index: usize) -> bool {
        let Some(record) = self.config.data.get(record_index) else {
            return false;
        };
        let _span = tracing::debug_span!(
            "search_box.select",
            record_index,
            key = record.key.as_str()
        )
        .entered();

        state.input.set_value(record.value.clone());
        state.matches = match_indices(&self.config.data, state.text());
        state.dropdown_open = false;
        state.dropdown.reset();
        state.selected = Some(record_index);

        if let Some(on_select) = &self.on_select {
            on_select(record);
        }
        true
    }

    /// Handle a key, paste or focus event.
    ///
    /// With the dropdown open, Up/Down move the highlight and Enter selects
    /// the highlighted match. Other keys edit the text; each edit that changes
    /// the text is one change event. Mouse events go through
    /// [`SearchBox::handle_mouse`], which needs the hit-test result.
    pub fn handle_event(&self, state: &mut SearchBoxState, event: &Event) -> bool {
        match event {
            Event::Focus(true) => self.focus(state),
            Event::Focus(false) => self.blur(state),
            Event::Key(key) if key.is_press() && state.dropdown_open => match key.code {
                KeyCode::Down => state.dropdown.highlight_next(state.matches.len()),
                KeyCode::Up => state.dropdown.highlight_prev(state.matches.len()),
                KeyCode::Enter => match state.dropdown.highlighted() {
                    Some(pos) => match state.matches.get(pos).copied() {
                        Some(record_index) => self.select(state, record_index),
                        None => false,
                    },
                    None => false,
                },
                _ => self.edit(state, event),
            },
            Event::Key(_) | Event::Paste(_) => self.edit(state, event),
            Event::Mouse(_) => false,
        }
    }

    /// Handle a mouse event given the frame's hit-test result at its position.
    pub fn handle_mouse(
        &self,
        state: &mut SearchBoxState,
        event: &MouseEvent,
        hit: Option<(HitId, HitRegion, HitData)>,
    ) -> MouseResult {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return MouseResult::Ignored;
        }
        match hit.and_then(|hit| self.classify(hit)) {
            Some(SearchBoxPart::Input) => {
                if self.focus(state) {
                    MouseResult::Focused
                } else {
                    MouseResult::Ignored
                }
            }
            Some(SearchBoxPart::DropdownItem(record_index)) => {
                if self.select(state, record_index) {
                    MouseResult::Selected(record_index)
                } else {
                    MouseResult::Ignored
                }
            }
            Some(SearchBoxPart::Dropdown) => MouseResult::Ignored,
            None => {
                if self.blur(state) {
                    MouseResult::Blurred
                } else {
                    MouseResult::Ignored
                }
            }
        }
    }

    /// Map a hit-test result to the part of this search box it landed on.
    pub fn classify(&self, (id, region, data): (HitId, HitRegion, HitData)) -> Option<SearchBoxPart> {
        if id != self.hit_id {
            return None;
        }
        match region {
            HitRegion::Content => Some(SearchBoxPart::Input),
            HitRegion::Border => Some(SearchBoxPart::Dropdown),
            HitRegion::Button => usize::try_from(data).ok().map(SearchBoxPart::DropdownItem),
            HitRegion::None => None,
        }
    }

    fn edit(&self, state: &mut SearchBoxState, event: &Event) -> bool {
        let before = state.text().to_owned();
        let moved = state.input.handle_event(event);
        if state.text() == before {
            return moved;
        }
        self.text_changed(state);
        true
    }

    fn text_changed(&self, state: &mut SearchBoxState) {
        state.matches = match_indices(&self.config.data, state.text());
        state.dropdown_open = !state.text().is_empty();
        state.dropdown.reset();
        state.selected = None;

        let _span = tracing::debug_span!(
            "search_box.change",
            text_len = state.text().len(),
            match_count = state.matches.len(),
            dropdown_open = state.dropdown_open
        )
        .entered();

        if let Some(on_change) = &self.on_change {
            on_change(state.text());
        }
    }

    fn dropdown<'a>(&'a self, matches: &'a [usize]) -> Dropdown<'a> {
        let dropdown = Dropdown::new(&self.config.data, matches).hit_id(self.hit_id);
        match self.config.max_visible_items {
            Some(rows) => dropdown.max_visible(rows),
            None => dropdown,
        }
    }

    /// Height needed to show the field and, when open, the whole dropdown.
    pub fn desired_height(&self, state: &SearchBoxState) -> u16 {
        if state.dropdown_open {
            1 + self.dropdown(&state.matches).desired_height()
        } else {
            1
        }
    }
}

impl StatefulWidget for SearchBox {
    type State = SearchBoxState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        let area = area.intersection(&frame.bounds());
        if area.is_empty() {
            return;
        }

        let input_area = area.row(0);
        state.input.render(input_area, frame);
        frame.register_hit(input_area, self.hit_id, HitRegion::Content, 0);

        if !state.dropdown_open {
            return;
        }
        let dropdown = self.dropdown(&state.matches);
        let below = area.below(1);
        let dropdown_area = Rect::new(
            below.x,
            below.y,
            below.width,
            below.height.min(dropdown.desired_height()),
        );
        dropdown.render(dropdown_area, frame, &mut state.dropdown);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seekbox_core::event::{KeyEvent, PasteEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn sample() -> Vec<Record> {
        vec![
            Record::new("john", "John Doe"),
            Record::new("jane", "Jane Doe"),
            Record::new("mary", "Mary Phillips"),
            Record::new("robert", "Robert"),
            Record::new("karius", "Karius"),
        ]
    }

    #[derive(Default)]
    struct Calls {
        changes: Vec<String>,
        focuses: usize,
        selections: Vec<String>,
    }

    fn spied(search: SearchBox) -> (SearchBox, Rc<RefCell<Calls>>) {
        let calls = Rc::new(RefCell::new(Calls::default()));
        let (c1, c2, c3) = (calls.clone(), calls.clone(), calls.clone());
        let search = search
            .on_change(move |text| c1.borrow_mut().changes.push(text.to_owned()))
            .on_focus(move || c2.borrow_mut().focuses += 1)
            .on_select(move |record| c3.borrow_mut().selections.push(record.key.clone()));
        (search, calls)
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code))
    }

    #[test]
    fn mount_defaults() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let state = search.mount();
        assert_eq!(state.text(), "");
        assert!(!state.is_focused());
        assert!(!state.is_dropdown_open());
        assert_eq!(state.phase(), SearchPhase::Empty);
        let calls = calls.borrow();
        assert!(calls.changes.is_empty());
        assert_eq!(calls.focuses, 0);
    }

    #[test]
    fn auto_focus_fires_on_focus_once() {
        let (search, calls) = spied(SearchBox::new().auto_focus(true));
        let mut state = search.mount();
        assert!(state.is_focused());
        assert_eq!(calls.borrow().focuses, 1);
        assert!(!search.handle_event(&mut state, &Event::Focus(true)));
        assert_eq!(calls.borrow().focuses, 1);
    }

    #[test]
    fn refocus_after_blur_fires_again() {
        let (search, calls) = spied(SearchBox::new());
        let mut state = search.mount();
        assert!(search.handle_event(&mut state, &Event::Focus(true)));
        assert!(search.handle_event(&mut state, &Event::Focus(false)));
        assert!(!search.handle_event(&mut state, &Event::Focus(false)));
        assert!(search.handle_event(&mut state, &Event::Focus(true)));
        assert_eq!(calls.borrow().focuses, 2);
    }

    #[test]
    fn initial_value_keeps_dropdown_closed() {
        let search = SearchBox::new().data(sample()).initial_value("Doe");
        let state = search.mount();
        assert_eq!(state.text(), "Doe");
        assert!(!state.is_dropdown_open());
        assert_eq!(state.phase(), SearchPhase::Idle);
        assert_eq!(state.matches(), &[0, 1]);
    }

    #[test]
    fn change_opens_dropdown_and_fires_once() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let mut state = search.mount();
        assert!(search.change(&mut state, "John"));
        assert!(state.is_dropdown_open());
        assert_eq!(state.matches(), &[0]);
        assert_eq!(state.phase(), SearchPhase::Typing);
        assert!(!search.change(&mut state, "John"));
        assert_eq!(calls.borrow().changes, vec!["John".to_string()]);
    }

    #[test]
    fn clearing_text_closes_dropdown() {
        let search = SearchBox::new().data(sample());
        let mut state = search.mount();
        search.change(&mut state, "zzz");
        assert!(state.is_dropdown_open());
        assert!(state.matches().is_empty());
        search.change(&mut state, "");
        assert!(!state.is_dropdown_open());
        assert_eq!(state.phase(), SearchPhase::Empty);
    }

    #[test]
    fn select_sets_text_closes_and_skips_on_change() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let mut state = search.mount();
        search.change(&mut state, "Doe");
        assert!(search.select(&mut state, 0));
        assert_eq!(state.text(), "John Doe");
        assert!(!state.is_dropdown_open());
        assert_eq!(state.phase(), SearchPhase::Selected);
        assert_eq!(state.selected(), Some(0));
        let calls = calls.borrow();
        assert_eq!(calls.changes, vec!["Doe".to_string()]);
        assert_eq!(calls.selections, vec!["john".to_string()]);
    }

    #[test]
    fn select_out_of_range_is_ignored() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let mut state = search.mount();
        search.change(&mut state, "Doe");
        assert!(!search.select(&mut state, 99));
        assert!(state.is_dropdown_open());
        assert!(calls.borrow().selections.is_empty());
    }

    #[test]
    fn typing_after_selection_reopens() {
        let search = SearchBox::new().data(sample());
        let mut state = search.mount();
        search.change(&mut state, "Doe");
        search.select(&mut state, 1);
        assert!(search.handle_event(&mut state, &key(KeyCode::Backspace)));
        assert_eq!(state.text(), "Jane Do");
        assert!(state.is_dropdown_open());
        assert_eq!(state.matches(), &[1]);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn key_edits_fire_on_change_per_edit() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let mut state = search.mount();
        for c in "Do".chars() {
            search.handle_event(&mut state, &key(KeyCode::Char(c)));
        }
        assert!(search.handle_event(&mut state, &key(KeyCode::Left)));
        assert!(search.handle_event(&mut state, &Event::Paste(PasteEvent::new("x"))));
        assert_eq!(state.text(), "Dxo");
        assert_eq!(
            calls.borrow().changes,
            vec!["D".to_string(), "Do".to_string(), "Dxo".to_string()]
        );
    }

    #[test]
    fn keyboard_selection() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let mut state = search.mount();
        search.change(&mut state, "Doe");
        assert!(!search.handle_event(&mut state, &key(KeyCode::Enter)));
        assert!(search.handle_event(&mut state, &key(KeyCode::Down)));
        assert!(search.handle_event(&mut state, &key(KeyCode::Down)));
        assert!(!search.handle_event(&mut state, &key(KeyCode::Down)));
        assert_eq!(state.highlighted(), Some(1));
        assert!(search.handle_event(&mut state, &key(KeyCode::Enter)));
        assert_eq!(state.text(), "Jane Doe");
        assert_eq!(calls.borrow().selections, vec!["jane".to_string()]);
    }

    #[test]
    fn text_change_resets_highlight() {
        let search = SearchBox::new().data(sample());
        let mut state = search.mount();
        search.change(&mut state, "o");
        search.handle_event(&mut state, &key(KeyCode::Down));
        assert_eq!(state.highlighted(), Some(0));
        search.change(&mut state, "ob");
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn arrows_without_dropdown_move_cursor() {
        let search = SearchBox::new().data(sample()).initial_value("ab");
        let mut state = search.mount();
        assert!(!search.handle_event(&mut state, &key(KeyCode::Down)));
        assert!(search.handle_event(&mut state, &key(KeyCode::Left)));
        assert_eq!(state.input().cursor(), 1);
    }

    #[test]
    fn classify_maps_regions() {
        let search = SearchBox::new().hit_id(HitId::new(7));
        assert_eq!(
            search.classify((HitId::new(7), HitRegion::Content, 0)),
            Some(SearchBoxPart::Input)
        );
        assert_eq!(
            search.classify((HitId::new(7), HitRegion::Border, 0)),
            Some(SearchBoxPart::Dropdown)
        );
        assert_eq!(
            search.classify((HitId::new(7), HitRegion::Button, 3)),
            Some(SearchBoxPart::DropdownItem(3))
        );
        assert_eq!(search.classify((HitId::new(8), HitRegion::Content, 0)), None);
        assert_eq!(
            SearchBoxPart::DropdownItem(0).class_name(),
            "search-box-dropdown-list-item"
        );
    }

    #[test]
    fn mouse_clicks_focus_select_and_blur() {
        let (search, calls) = spied(SearchBox::new().data(sample()));
        let mut state = search.mount();
        let click = MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0);
        let input_hit = Some((DEFAULT_HIT_ID, HitRegion::Content, 0));

        assert_eq!(search.handle_mouse(&mut state, &click, input_hit), MouseResult::Focused);
        assert_eq!(search.handle_mouse(&mut state, &click, input_hit), MouseResult::Ignored);

        search.change(&mut state, "Doe");
        let item_hit = Some((DEFAULT_HIT_ID, HitRegion::Button, 1));
        assert_eq!(
            search.handle_mouse(&mut state, &click, item_hit),
            MouseResult::Selected(1)
        );
        assert_eq!(search.handle_mouse(&mut state, &click, None), MouseResult::Blurred);

        let release = MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 0, 0);
        assert_eq!(search.handle_mouse(&mut state, &release, input_hit), MouseResult::Ignored);

        let calls = calls.borrow();
        assert_eq!(calls.focuses, 1);
        assert_eq!(calls.selections, vec!["jane".to_string()]);
    }

    #[test]
    fn render_layout_and_hits() {
        let search = SearchBox::new().data(sample()).placeholder("Search");
        let mut state = search.mount();
        let mut frame = Frame::with_hit_grid(20, 8);
        search.render(frame.bounds(), &mut frame, &mut state);
        assert_eq!(frame.buffer.row_text(0), "Search");
        assert_eq!(frame.buffer.row_text(1), "");

        search.change(&mut state, "Doe");
        assert_eq!(search.desired_height(&state), 5);
        frame.clear();
        search.render(frame.bounds(), &mut frame, &mut state);
        assert_eq!(frame.buffer.row_text(0), "Doe");
        assert_eq!(frame.buffer.row_text(2), "│John Doe          │");
        assert_eq!(frame.buffer.row_text(3), "│Jane Doe          │");
        assert_eq!(frame.buffer.row_text(5), "");
        assert_eq!(
            frame.hit_test(2, 3).and_then(|hit| search.classify(hit)),
            Some(SearchBoxPart::DropdownItem(1))
        );
    }

    #[test]
    fn dropdown_rows_are_uncapped_by_default() {
        let records: Vec<Record> = (0..12)
            .map(|i| Record::new(format!("doe{i}"), format!("Doe {i}")))
            .collect();
        let search = SearchBox::new().data(records);
        assert_eq!(search.config().max_visible_items, None);
        let mut state = search.mount();
        search.change(&mut state, "doe");
        assert_eq!(search.desired_height(&state), 15);
        let mut frame = Frame::with_hit_grid(20, 20);
        search.render(frame.bounds(), &mut frame, &mut state);
        assert_eq!(frame.buffer.row_text(13), "│Doe 11            │");
        assert_eq!(
            frame.hit_test(1, 13).and_then(|hit| search.classify(hit)),
            Some(SearchBoxPart::DropdownItem(11))
        );
    }

    #[test]
    fn idle_only_before_first_edit() {
        let search = SearchBox::new().data(sample()).initial_value("Doe");
        let mut state = search.mount();
        assert_eq!(state.phase(), SearchPhase::Idle);
        search.change(&mut state, "Do");
        assert_eq!(state.phase(), SearchPhase::Typing);
        search.select(&mut state, 1);
        assert_eq!(state.phase(), SearchPhase::Selected);
        search.handle_event(&mut state, &key(KeyCode::Home));
        assert_eq!(state.phase(), SearchPhase::Selected);
        search.change(&mut state, "");
        assert_eq!(state.phase(), SearchPhase::Empty);
    }

    #[test]
    fn render_respects_max_visible_items() {
        let search = SearchBox::new().data(sample()).max_visible_items(2);
        let mut state = search.mount();
        search.change(&mut state, "r");
        let mut frame = Frame::with_hit_grid(20, 10);
        search.render(frame.bounds(), &mut frame, &mut state);
        assert_eq!(search.desired_height(&state), 5);
        assert_eq!(frame.buffer.row_text(2), "│Mary Phillips     │");
        assert_eq!(frame.buffer.row_text(3), "│Robert            │");
        assert_eq!(frame.buffer.row_text(4), "└──────────────────┘");
    }
}
