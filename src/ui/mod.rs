//! UI layer: the character-grid surface and the terminal backends.
//!
//! All `ratatui`/`crossterm` types stay behind `backend`; views only ever see
//! the `Surface` trait.

pub mod core;

pub mod backend;
