#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, and frames.
//!
//! # Role in seekbox
//! `seekbox-render` is the render target widgets paint into. A [`frame::Frame`]
//! bundles the cell grid ([`buffer::Buffer`]) with cursor metadata and an
//! optional hit grid that maps screen cells back to widget parts.

pub mod buffer;
pub mod cell;
pub mod frame;
