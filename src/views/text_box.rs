//! Multi-line text editor view.
//!
//! The buffer is a gap-free list of lines, never empty. The cursor is a
//! `(line, col)` pair counted in characters; `col` may sit past the end of a
//! line after vertical movement and is clamped before every edit.

use crate::core::key::Key;
use crate::core::view::{EventResult, View, ViewCore};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Attr;
use crate::ui::core::surface::Surface;
use unicode_width::UnicodeWidthChar;

const DEFAULT_TAB_SIZE: u16 = 8;

pub struct TextBox {
    core: ViewCore,
    lines: Vec<String>,
    line: usize,
    col: usize,
    /// First visible line.
    yoff: usize,
    tab_size: u16,
    /// Set explicitly; the host config no longer applies.
    tab_size_fixed: bool,
    line_numbers: bool,
}

impl Default for TextBox {
    fn default() -> Self {
        Self::new()
    }
}

impl TextBox {
    pub fn new() -> Self {
        Self {
            core: ViewCore::new(),
            lines: vec![String::new()],
            line: 0,
            col: 0,
            yoff: 0,
            tab_size: DEFAULT_TAB_SIZE,
            tab_size_fixed: false,
            line_numbers: false,
        }
    }

    pub fn with_text(text: &str) -> Self {
        let mut tb = Self::new();
        tb.set_text(text);
        tb
    }

    /// Prefix every line with its dim, right-aligned 1-based number.
    pub fn with_line_numbers(mut self) -> Self {
        self.line_numbers = true;
        self
    }

    pub fn with_tab_size(mut self, tab_size: u16) -> Self {
        self.tab_size = tab_size.max(1);
        self.tab_size_fixed = true;
        self
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Replace the buffer. A trailing newline leaves an empty last line.
    pub fn set_text(&mut self, text: &str) {
        self.lines = text.split('\n').map(str::to_string).collect();
        self.line = self.line.min(self.last_line());
        self.col = self.col.min(self.line_len(self.line));
        self.yoff = self.yoff.min(self.line);
        self.touch();
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    pub fn current_line(&self) -> &str {
        &self.lines[self.line]
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.line, self.col)
    }

    pub fn scroll_offset(&self) -> usize {
        self.yoff
    }

    pub fn tab_size(&self) -> u16 {
        self.tab_size
    }

    fn last_line(&self) -> usize {
        self.lines.len() - 1
    }

    fn line_len(&self, line: usize) -> usize {
        self.lines[line].chars().count()
    }

    fn viewport(&self) -> usize {
        self.core.height.max(1) as usize
    }

    /// Byte offset of character `col` in `line`.
    fn byte_at(&self, line: usize, col: usize) -> usize {
        let text = &self.lines[line];
        text.char_indices()
            .nth(col)
            .map_or(text.len(), |(idx, _)| idx)
    }

    fn clamp_col(&mut self) {
        self.col = self.col.min(self.line_len(self.line));
    }

    /// Scroll just enough to keep the cursor line inside the viewport.
    fn follow_cursor(&mut self) {
        let h = self.viewport();
        if self.line < self.yoff {
            self.yoff = self.line;
        } else if self.line >= self.yoff + h {
            self.yoff = self.line + 1 - h;
        }
    }

    fn insert(&mut self, ch: char) {
        self.clamp_col();
        let at = self.byte_at(self.line, self.col);
        self.lines[self.line].insert(at, ch);
        self.col += 1;
    }

    /// Append line `line + 1` to `line`.
    fn join_next(&mut self, line: usize) {
        let next = self.lines.remove(line + 1);
        self.lines[line].push_str(&next);
    }

    fn backspace(&mut self) {
        self.clamp_col();
        if self.col > 0 {
            let at = self.byte_at(self.line, self.col - 1);
            self.lines[self.line].remove(at);
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = self.line_len(self.line);
            self.join_next(self.line);
        }
    }

    /// An empty line folds into the one above, leaving the cursor at its end.
    fn delete(&mut self) {
        self.clamp_col();
        if self.col < self.line_len(self.line) {
            let at = self.byte_at(self.line, self.col);
            self.lines[self.line].remove(at);
        } else if self.lines[self.line].is_empty() && self.line > 0 {
            self.lines.remove(self.line);
            self.line -= 1;
            self.col = self.line_len(self.line);
        } else if self.line < self.last_line() {
            self.join_next(self.line);
        }
    }

    fn split_line(&mut self) {
        self.clamp_col();
        let at = self.byte_at(self.line, self.col);
        let tail = self.lines[self.line].split_off(at);
        self.lines.insert(self.line + 1, tail);
        self.line += 1;
        self.col = 0;
    }

    fn cut_to_end(&mut self) {
        self.clamp_col();
        if self.col < self.line_len(self.line) {
            let at = self.byte_at(self.line, self.col);
            self.lines[self.line].truncate(at);
        } else if self.line < self.last_line() {
            self.join_next(self.line);
        }
    }

    fn move_left(&mut self) {
        self.clamp_col();
        if self.col > 0 {
            self.col -= 1;
        } else if self.line > 0 {
            self.line -= 1;
            self.col = self.line_len(self.line);
        }
    }

    fn move_right(&mut self) {
        self.clamp_col();
        if self.col < self.line_len(self.line) {
            self.col += 1;
        } else if self.line < self.last_line() {
            self.line += 1;
            self.col = 0;
        }
    }

    fn page_up(&mut self) {
        let h = self.viewport();
        if self.line > h {
            self.line -= h;
            self.yoff = self.yoff.saturating_sub(h);
        } else if self.line == 0 {
            self.col = 0;
        } else {
            self.line = 0;
            self.yoff = 0;
        }
        self.clamp_col();
    }

    fn page_down(&mut self) {
        let h = self.viewport();
        let last = self.last_line();
        if self.line + h < last {
            self.line += h;
            self.yoff += h;
        } else if self.line == last {
            self.col = self.line_len(last);
        } else {
            self.line = last;
        }
        self.clamp_col();
    }

    fn gutter_width(&self) -> u16 {
        if !self.line_numbers {
            return 0;
        }
        let digits = self.lines.len().to_string().len() as u16;
        digits + 1
    }

    /// Draw line `ln` starting at row `y`, soft-wrapping at the surface edge.
    /// Returns the row after the last one used.
    fn draw_line(&self, surface: &mut dyn Surface, ln: usize, mut y: u16) -> u16 {
        let (width, height) = (self.core.width, self.core.height);
        let gutter = self.gutter_width();
        if gutter > 0 {
            let digits = gutter as usize - 1;
            let number = format!("{:>digits$}", ln + 1);
            let _ = surface.put_str(Pos::new(0, y), &number, Attr::DIM);
        }
        if width <= gutter {
            return y + 1;
        }

        let cursor_col = (ln == self.line).then_some(self.col);
        let mut x = gutter;
        let mut drawn = 0;
        for (i, ch) in self.lines[ln].chars().enumerate() {
            let advance = if ch == '\t' {
                let ts = self.tab_size.max(1);
                ts - (x - gutter) % ts
            } else {
                ch.width().unwrap_or(1) as u16
            };
            if advance == 0 {
                drawn = i + 1;
                continue;
            }
            if x + advance.min(width - gutter) > width {
                y += 1;
                x = gutter;
            }
            if y >= height {
                return y;
            }
            let attr = Attr::when(cursor_col == Some(i), Attr::STANDOUT);
            let glyph = if ch == '\t' || ch.is_control() { ' ' } else { ch };
            let _ = surface.put_char(Pos::new(x, y), glyph, attr);
            x = x.saturating_add(advance).min(width);
            drawn = i + 1;
        }

        // Caret past the end of the line.
        if cursor_col.is_some_and(|col| col >= drawn) {
            if x >= width {
                y += 1;
                x = gutter;
            }
            if y < height {
                let _ = surface.put_char(Pos::new(x, y), ' ', Attr::STANDOUT);
            }
        }
        y + 1
    }
}

impl View for TextBox {
    fn core(&self) -> &ViewCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    fn init(&mut self) {
        if !self.tab_size_fixed {
            if let Some(host) = self.core.host() {
                self.tab_size = u16::from(host.config().tab_size).max(1);
            }
        }
        self.touch();
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.core.begin_draw(surface) {
            return true;
        }
        let mut y = 0;
        for ln in self.yoff..self.lines.len() {
            if y >= self.core.height {
                break;
            }
            y = self.draw_line(surface, ln, y);
        }
        false
    }

    fn key(&mut self, key: Key) -> EventResult {
        match key {
            Key::LEFT => {
                self.move_left();
                self.follow_cursor();
            }
            Key::RIGHT => {
                self.move_right();
                self.follow_cursor();
            }
            Key::UP => {
                self.line = self.line.saturating_sub(1);
                self.clamp_col();
                self.follow_cursor();
            }
            Key::DOWN => {
                self.line = (self.line + 1).min(self.last_line());
                self.clamp_col();
                self.follow_cursor();
            }
            Key::HOME => self.col = 0,
            Key::END => self.col = self.line_len(self.line),
            Key::PAGE_UP => {
                self.page_up();
                self.follow_cursor();
            }
            Key::PAGE_DOWN => {
                self.page_down();
                self.follow_cursor();
            }
            Key::CTRL_HOME => {
                self.line = 0;
                self.col = 0;
                self.yoff = 0;
            }
            Key::CTRL_END => {
                self.line = self.last_line();
                self.col = self.line_len(self.line);
                self.yoff = (self.line + 1).saturating_sub(self.viewport());
            }
            Key::ALT_UP => {
                if self.yoff == 0 {
                    return EventResult::Consumed;
                }
                self.yoff -= 1;
            }
            Key::ALT_DOWN => {
                if self.yoff >= self.last_line() {
                    return EventResult::Consumed;
                }
                self.yoff += 1;
            }
            Key::BACKSPACE | Key::BS | Key::DEL => {
                self.backspace();
                self.follow_cursor();
            }
            Key::DELETE => self.delete(),
            Key::ENTER => {
                self.split_line();
                self.follow_cursor();
            }
            k if k == Key::ctrl('K') => self.cut_to_end(),
            Key::TAB => self.insert('\t'),
            k if k.is_printable() => match k.ch() {
                Some(ch) => self.insert(ch),
                None => return EventResult::Ignored,
            },
            _ => return EventResult::Ignored,
        }
        tracing::trace!(%key, line = self.line, col = self.col, "text box edit");
        self.touch();
        EventResult::Consumed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/text_box.rs"]
mod tests;
