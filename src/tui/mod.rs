//! TUI integration layer (crossterm).
//!
//! Kept apart from `core` so the engine can be driven by the headless
//! terminal without touching terminal crates.

pub mod crossterm;
pub mod terminal_guard;
