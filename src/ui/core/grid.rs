//! In-memory character grid.
//!
//! Serves as the App's frame buffer (presented once per frame by a terminal
//! backend) and as the off-screen pad each nested pane renders into.

use super::geom::{Pos, Rect, Size};
use super::style::Attr;
use super::surface::{Surface, SurfaceError};
use unicode_width::UnicodeWidthChar;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    pub symbol: char,
    pub attr: Attr,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            symbol: ' ',
            attr: Attr::NONE,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    size: Size,
    cells: Vec<Cell>,
}

impl Grid {
    pub fn new(size: Size) -> Self {
        Self {
            size,
            cells: vec![Cell::default(); size.area()],
        }
    }

    /// Resize the grid. Contents are discarded when the extent changes.
    pub fn resize(&mut self, size: Size) {
        if self.size == size {
            return;
        }
        self.size = size;
        self.cells = vec![Cell::default(); size.area()];
    }

    pub fn cell(&self, pos: Pos) -> Option<&Cell> {
        let idx = self.idx(pos)?;
        self.cells.get(idx)
    }

    pub fn cell_mut(&mut self, pos: Pos) -> Option<&mut Cell> {
        let idx = self.idx(pos)?;
        self.cells.get_mut(idx)
    }

    /// Row `y` as plain text, trailing blanks included.
    pub fn row_text(&self, y: u16) -> String {
        (0..self.size.w)
            .filter_map(|x| self.cell(Pos::new(x, y)))
            .map(|c| c.symbol)
            .collect()
    }

    pub fn rows(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.size.h).map(|y| self.row_text(y))
    }

    fn idx(&self, pos: Pos) -> Option<usize> {
        if pos.x >= self.size.w || pos.y >= self.size.h {
            return None;
        }
        Some(pos.y as usize * self.size.w as usize + pos.x as usize)
    }

    fn write(&mut self, pos: Pos, ch: char, width: u16, attr: Attr) {
        if let Some(cell) = self.cell_mut(pos) {
            cell.symbol = ch;
            cell.attr = attr;
        }
        // Wide glyphs occupy the following cells as blanks.
        for dx in 1..width {
            if let Some(cell) = self.cell_mut(Pos::new(pos.x.saturating_add(dx), pos.y)) {
                cell.symbol = ' ';
                cell.attr = attr;
            }
        }
    }
}

impl Surface for Grid {
    fn size(&self) -> Size {
        self.size
    }

    fn put_char(&mut self, pos: Pos, ch: char, attr: Attr) -> Result<(), SurfaceError> {
        let width = ch.width().unwrap_or(1).max(1) as u16;
        if pos.y >= self.size.h || pos.x.saturating_add(width) > self.size.w {
            return Err(SurfaceError::WriteOverflow);
        }
        self.write(pos, ch, width, attr);
        Ok(())
    }

    fn put_str(&mut self, pos: Pos, text: &str, attr: Attr) -> Result<u16, SurfaceError> {
        if pos.y >= self.size.h || pos.x >= self.size.w {
            return Err(SurfaceError::WriteOverflow);
        }
        let mut x = pos.x;
        for ch in text.chars() {
            let width = ch.width().unwrap_or(0) as u16;
            if width == 0 {
                continue;
            }
            // Do not partially render wide glyphs.
            if x.saturating_add(width) > self.size.w {
                return Err(SurfaceError::WriteOverflow);
            }
            self.write(Pos::new(x, pos.y), ch, width, attr);
            x += width;
        }
        Ok(x)
    }

    fn erase(&mut self) {
        self.cells.fill(Cell::default());
    }

    fn blit(&mut self, pad: &Grid, dst: Rect) {
        let clip = dst.intersect(Rect::from_size(self.size));
        for y in clip.y..clip.bottom() {
            for x in clip.x..clip.right() {
                let src = Pos::new(x - dst.x, y - dst.y);
                let Some(&cell) = pad.cell(src) else {
                    continue;
                };
                if let Some(out) = self.cell_mut(Pos::new(x, y)) {
                    *out = cell;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/grid.rs"]
mod tests;
