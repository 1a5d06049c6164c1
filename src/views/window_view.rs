//! A view hosting a nested window on its own pad.

use crate::core::host::Host;
use crate::core::key::Key;
use crate::core::view::{EventResult, View, ViewCore};
use crate::core::window::{Pane, Window};
use crate::ui::core::geom::Rect;
use crate::ui::core::surface::Surface;
use std::rc::Weak;

pub struct WindowView {
    core: ViewCore,
    pane: Pane,
}

impl Default for WindowView {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowView {
    pub fn new() -> Self {
        Self::with_window(Window::new())
    }

    pub fn with_window(window: Window) -> Self {
        let mut pane = Pane::new();
        *pane.window_mut() = window;
        Self {
            core: ViewCore::new().without_erase(),
            pane,
        }
    }

    pub fn window(&self) -> &Window {
        self.pane.window()
    }

    pub fn window_mut(&mut self) -> &mut Window {
        self.pane.window_mut()
    }
}

impl View for WindowView {
    fn core(&self) -> &ViewCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    fn attach(&mut self, host: Weak<Host>) {
        self.pane.window_mut().attach(host.clone());
        self.core.set_host(host);
    }

    fn init(&mut self) {
        self.pane.window_mut().init();
        self.touch();
    }

    fn die(&mut self) -> bool {
        if self.core.kill() {
            return true;
        }
        self.pane.window_mut().die();
        false
    }

    fn proc(&mut self) -> bool {
        let window = self.pane.window_mut();
        window.proc();
        if window.touched() {
            self.touch();
        }
        false
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.core.begin_draw(surface) {
            return true;
        }
        let rect = Rect::new(0, 0, self.core.width, self.core.height);
        self.pane.render(surface, rect);
        false
    }

    fn touch_all(&mut self) {
        self.touch();
        self.pane.window_mut().touch_all();
    }

    fn key(&mut self, key: Key) -> EventResult {
        self.pane.window_mut().key(key)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/window_view.rs"]
mod tests;
