#![forbid(unsafe_code)]

//! seekbox public facade.
//!
//! Re-exports the types a host needs to embed a search box and offers
//! [`route_event`] for feeding raw input events to a mounted instance.
//!
//! ```
//! use seekbox::prelude::*;
//!
//! let search = SearchBox::new()
//!     .placeholder("Search people")
//!     .data([Record::new("john", "John Doe"), Record::new("jane", "Jane Doe")]);
//! let mut state = search.mount();
//! let mut frame = Frame::with_hit_grid(30, 6);
//!
//! search.change(&mut state, "jane");
//! search.render(frame.bounds(), &mut frame, &mut state);
//! assert!(seekbox::route_event(&search, &mut state, &frame, &Event::click(2, 2)));
//! assert_eq!(state.text(), "Jane Doe");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use seekbox_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    PasteEvent,
};
pub use seekbox_core::geometry::Rect;

// --- Render re-exports -----------------------------------------------------

pub use seekbox_render::buffer::Buffer;
pub use seekbox_render::cell::{Cell, StyleFlags};
pub use seekbox_render::frame::{Frame, HitId, HitRegion};

// --- Widget re-exports -----------------------------------------------------

pub use seekbox_widgets::dropdown::{Dropdown, DropdownState};
pub use seekbox_widgets::input::TextInput;
pub use seekbox_widgets::record::Record;
pub use seekbox_widgets::search_box::{
    MouseResult, SearchBox, SearchBoxConfig, SearchBoxPart, SearchBoxState, SearchPhase,
};
pub use seekbox_widgets::{StatefulWidget, Widget};

/// Feed one event to a mounted search box.
///
/// Mouse events are hit-tested against `frame`, which should hold the last
/// render of this search box. Returns `true` if the state changed.
pub fn route_event(
    search_box: &SearchBox,
    state: &mut SearchBoxState,
    frame: &Frame,
    event: &Event,
) -> bool {
    match event {
        Event::Mouse(mouse) => {
            let (x, y) = mouse.position();
            let hit = frame.hit_test(x, y);
            search_box.handle_mouse(state, mouse, hit) != MouseResult::Ignored
        }
        other => search_box.handle_event(state, other),
    }
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Event, Frame, KeyCode, KeyEvent, Modifiers, MouseResult, Rect, Record, SearchBox,
        SearchBoxConfig, SearchBoxState, StatefulWidget, Widget,
    };
}
