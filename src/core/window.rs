//! Window: a z-ordered stack of views with its own key dispatch.
//!
//! The last view is the top. Keys travel top to bottom, drawing goes bottom
//! to top, and a key nobody consumes falls back to the handler table.

use super::host::Host;
use super::key::Key;
use super::view::{EventResult, View};
use crate::ui::core::geom::{Pos, Rect, Size};
use crate::ui::core::grid::Grid;
use crate::ui::core::style::Attr;
use crate::ui::core::surface::Surface;
use rustc_hash::FxHashMap;
use std::rc::Weak;
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

pub type KeyHandler = Box<dyn FnMut(&mut Window, Key) -> EventResult>;

const DEFAULT_RELEASE_WINDOW: Duration = Duration::from_millis(50);

pub struct Window {
    views: Vec<Box<dyn View>>,
    handlers: FxHashMap<Key, KeyHandler>,
    unknown_handler: Option<KeyHandler>,
    host: Weak<Host>,
    inited: bool,
    died: bool,
    /// Armed key and the last time a repeat of it was seen.
    wait_release: Option<(Key, Instant)>,
    release_window: Duration,
    debug_lines: Vec<String>,
    last_size: Size,
}

impl Default for Window {
    fn default() -> Self {
        Self::new()
    }
}

impl Window {
    pub fn new() -> Self {
        Self {
            views: Vec::new(),
            handlers: FxHashMap::default(),
            unknown_handler: None,
            host: Weak::new(),
            inited: false,
            died: false,
            wait_release: None,
            release_window: DEFAULT_RELEASE_WINDOW,
            debug_lines: Vec::new(),
            last_size: Size::default(),
        }
    }

    pub fn attach(&mut self, host: Weak<Host>) {
        for view in &mut self.views {
            view.attach(host.clone());
        }
        self.host = host;
    }

    pub fn host(&self) -> Weak<Host> {
        self.host.clone()
    }

    pub fn init(&mut self) {
        if let Some(host) = self.host.upgrade() {
            self.release_window = host.config().release_debounce();
        }
        for view in &mut self.views {
            view.init();
        }
        self.inited = true;
        self.touch();
        tracing::debug!(views = self.views.len(), "window initialized");
    }

    pub fn is_inited(&self) -> bool {
        self.inited
    }

    /// Kill every view. Returns `true` if the window was already dead.
    pub fn die(&mut self) -> bool {
        if self.died {
            return true;
        }
        self.died = true;
        for view in &mut self.views {
            view.die();
        }
        false
    }

    pub fn is_dead(&self) -> bool {
        self.died
    }

    pub fn add_view<V: View>(&mut self, view: V) {
        self.add_boxed_view(Box::new(view));
    }

    pub fn add_boxed_view(&mut self, mut view: Box<dyn View>) {
        view.attach(self.host.clone());
        self.views.push(view);
        if self.inited {
            if let Some(top) = self.views.last_mut() {
                top.init();
            }
        }
    }

    /// Kill and remove the top view. The new top, if any, is touched.
    pub fn pop_view(&mut self) -> bool {
        let Some(mut view) = self.views.pop() else {
            return false;
        };
        view.die();
        self.touch();
        true
    }

    /// Kill and drop every view; an App exits once its stack is empty.
    pub fn clear(&mut self) {
        for view in &mut self.views {
            view.die();
        }
        self.views.clear();
    }

    pub fn top(&self) -> Option<&(dyn View + 'static)> {
        self.views.last().map(|v| v.as_ref())
    }

    pub fn top_mut(&mut self) -> Option<&mut (dyn View + 'static)> {
        match self.views.last_mut() {
            Some(v) => Some(v.as_mut()),
            None => None,
        }
    }

    pub fn view_mut(&mut self, index: usize) -> Option<&mut (dyn View + 'static)> {
        match self.views.get_mut(index) {
            Some(v) => Some(v.as_mut()),
            None => None,
        }
    }

    pub fn views(&self) -> impl Iterator<Item = &(dyn View + 'static)> {
        self.views.iter().map(|v| v.as_ref())
    }

    pub fn len(&self) -> usize {
        self.views.len()
    }

    pub fn is_empty(&self) -> bool {
        self.views.is_empty()
    }

    pub fn on_key<F>(&mut self, key: Key, handler: F)
    where
        F: FnMut(&mut Window, Key) -> EventResult + 'static,
    {
        self.handlers.insert(key, Box::new(handler));
    }

    /// Fallback for pressed keys with no view consumer and no exact handler.
    pub fn on_unknown_key<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window, Key) -> EventResult + 'static,
    {
        self.unknown_handler = Some(Box::new(handler));
    }

    pub fn set_release_window(&mut self, window: Duration) {
        self.release_window = window;
    }

    pub fn wait_key_release(&mut self, key: Key) {
        self.wait_key_release_at(key, Instant::now());
    }

    /// Swallow repeats of `key` until a gap longer than the release window.
    pub fn wait_key_release_at(&mut self, key: Key, now: Instant) {
        self.wait_release = Some((key, now));
    }

    pub fn is_waiting_release(&self) -> bool {
        self.wait_release.is_some()
    }

    /// Show `msg` centred at the top of the surface, wrapped to half its width.
    /// An empty message clears the overlay.
    pub fn debug_out(&mut self, msg: &str) {
        if !self.debug_lines.is_empty() {
            self.touch();
        }
        if msg.is_empty() {
            self.debug_lines.clear();
            return;
        }
        let width = (self.last_size.w / 2).max(1) as usize;
        self.debug_lines = if self.last_size.w == 0 {
            msg.lines().map(str::to_string).collect()
        } else {
            textwrap::wrap(msg, width)
                .into_iter()
                .map(|line| line.into_owned())
                .collect()
        };
    }

    pub fn debug_lines(&self) -> &[String] {
        &self.debug_lines
    }

    /// Pre-draw pass, top to bottom. Dead views are dropped here, and the
    /// view below a removed or dirty transparent view is touched.
    pub fn proc(&mut self) -> bool {
        let mut touch_next = false;
        let mut i = self.views.len();
        while i > 0 {
            i -= 1;
            if self.views[i].is_dead() {
                self.views.remove(i);
                touch_next = true;
                continue;
            }
            let view = &mut self.views[i];
            if touch_next {
                view.touch();
            }
            view.proc();
            touch_next = view.core().transparent && view.is_touched();
        }
        false
    }

    pub fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        let size = surface.size();
        self.last_size = size;

        for view in &mut self.views {
            view.draw(surface);
        }

        for (y, line) in self.debug_lines.iter().enumerate() {
            if y >= size.h as usize {
                break;
            }
            let x = ((size.w as usize).saturating_sub(line.width()) / 2).saturating_sub(1);
            let _ = surface.put_str(Pos::new(x as u16, y as u16), line, Attr::STANDOUT);
        }
        false
    }

    pub fn touch(&mut self) {
        if let Some(top) = self.views.last_mut() {
            top.touch();
        }
    }

    pub fn touch_all(&mut self) {
        self.touch();
        for view in &mut self.views {
            view.touch_all();
        }
    }

    /// Any view needs redraw.
    pub fn touched(&self) -> bool {
        self.views.iter().rev().any(|v| v.is_touched())
    }

    pub fn key(&mut self, key: Key) -> EventResult {
        self.key_at(key, Instant::now())
    }

    pub fn key_at(&mut self, key: Key, now: Instant) -> EventResult {
        if key.is_pressed() {
            if let Some((armed, last)) = self.wait_release {
                let gap = now.saturating_duration_since(last);
                if key != armed || gap > self.release_window {
                    tracing::trace!(%armed, ?gap, "key released");
                    self.wait_release = None;
                } else {
                    tracing::trace!(%key, "swallowed repeat");
                    self.wait_release = Some((armed, now));
                    return EventResult::Ignored;
                }
            }
            self.debug_out("");
        }

        let result = self.dispatch(key);
        if result == EventResult::ConsumedUntilRelease {
            self.wait_key_release_at(key, now);
        }
        result
    }

    fn dispatch(&mut self, key: Key) -> EventResult {
        if key == Key::RESIZE {
            for view in &mut self.views {
                view.touch_all();
            }
        }

        for view in self.views.iter_mut().rev() {
            let result = view.key(key);
            if result.is_consumed() {
                tracing::trace!(%key, "consumed by view");
                return result;
            }
        }

        if let Some(mut handler) = self.handlers.remove(&key) {
            let result = handler(self, key);
            self.handlers.entry(key).or_insert(handler);
            return result;
        }

        if key.is_pressed() {
            if let Some(mut handler) = self.unknown_handler.take() {
                let result = handler(self, key);
                if self.unknown_handler.is_none() {
                    self.unknown_handler = Some(handler);
                }
                return result;
            }
        }
        EventResult::Ignored
    }
}

impl Drop for Window {
    fn drop(&mut self) {
        self.die();
    }
}

/// A window rendered through its own off-screen pad, for nesting inside a
/// region of another surface.
#[derive(Default)]
pub struct Pane {
    window: Window,
    pad: Grid,
}

impl Pane {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn pad(&self) -> &Grid {
        &self.pad
    }

    /// Resize the pad to `rect`, draw the window into it and composite it
    /// onto `surface`. A resized pad starts blank, so every view redraws.
    pub fn render(&mut self, surface: &mut dyn Surface, rect: Rect) {
        if self.pad.size() != rect.size() {
            self.pad.resize(rect.size());
            self.window.touch_all();
        }
        self.window.draw(&mut self.pad);
        surface.blit(&self.pad, rect);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/window.rs"]
mod tests;
