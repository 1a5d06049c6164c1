//! A view that fills its surface with a single character.

use crate::core::view::{View, ViewCore};
use crate::ui::core::geom::Pos;
use crate::ui::core::style::Attr;
use crate::ui::core::surface::Surface;

pub struct CharView {
    core: ViewCore,
    ch: char,
    attr: Attr,
}

impl CharView {
    pub fn new(ch: char) -> Self {
        Self::with_attr(ch, Attr::NONE)
    }

    pub fn with_attr(ch: char, attr: Attr) -> Self {
        Self {
            core: ViewCore::new(),
            ch,
            attr,
        }
    }

    pub fn ch(&self) -> char {
        self.ch
    }

    pub fn set_ch(&mut self, ch: char) {
        if self.ch != ch {
            self.ch = ch;
            self.touch();
        }
    }
}

impl View for CharView {
    fn core(&self) -> &ViewCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.core.begin_draw(surface) {
            return true;
        }
        for y in 0..self.core.height {
            for x in 0..self.core.width {
                // The bottom-right cell overflows on some surfaces.
                let _ = surface.put_char(Pos::new(x, y), self.ch, self.attr);
            }
        }
        false
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/char_view.rs"]
mod tests;
