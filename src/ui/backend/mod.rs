//! Terminal backends.
//!
//! The App loop only sees this trait: a frame buffer goes out, keys come
//! in. The crossterm/ratatui terminal and the scripted headless one both
//! implement it.

use crate::core::key::Key;
use crate::ui::core::geom::Size;
use crate::ui::core::grid::Grid;
use std::io;
use std::time::Duration;

pub trait Terminal {
    fn size(&self) -> io::Result<Size>;

    /// Wait at most `timeout` for one key. `Ok(None)` means no input arrived.
    fn poll_key(&mut self, timeout: Duration) -> io::Result<Option<Key>>;

    /// Show `frame` on screen.
    fn present(&mut self, frame: &Grid) -> io::Result<()>;
}

// The concrete terminal lives in `ratatui.rs`; the module name stays generic so
// the rest of the crate never mentions ratatui.
#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;
