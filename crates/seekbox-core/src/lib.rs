#![forbid(unsafe_code)]

//! Core: input events, geometry and text measurement.
//!
//! # Role in seekbox
//! `seekbox-core` is the input layer. It owns the normalized event types that
//! widgets consume and the geometric primitives shared by the render kernel
//! and the widgets.
//!
//! # Primary responsibilities
//! - **Event**: canonical input events (keys, mouse, paste, focus).
//! - **Rect**: layout bounds and hit-testing rectangles.
//! - **Text width**: grapheme-aware display width in terminal cells.

pub mod event;
pub mod geometry;
pub mod text_width;
