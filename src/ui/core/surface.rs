//! The character-grid surface every View draws onto.
//!
//! The real screen and the private pads hosted by split panes are both
//! surfaces; views never know which one they were handed.

use super::geom::{Pos, Rect, Size};
use super::grid::Grid;
use super::style::Attr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SurfaceError {
    /// A write ran past the last addressable cell. Partial output has still
    /// been written; callers are expected to discard this.
    #[error("write past the last cell of the surface")]
    WriteOverflow,
}

pub trait Surface {
    fn size(&self) -> Size;

    fn put_char(&mut self, pos: Pos, ch: char, attr: Attr) -> Result<(), SurfaceError>;

    /// Write `text` starting at `pos`, clipped to the row. Returns the column
    /// following the last written cell.
    fn put_str(&mut self, pos: Pos, text: &str, attr: Attr) -> Result<u16, SurfaceError>;

    fn erase(&mut self);

    /// Composite the whole of `pad` into `dst` (clipped to both extents).
    fn blit(&mut self, pad: &Grid, dst: Rect);
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/surface.rs"]
mod tests;
