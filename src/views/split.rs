//! Split panes: sibling windows laid out side by side along one axis.
//!
//! Each entry of `sizes` is a fixed extent, or `0` for a flexible pane. The
//! space left after the fixed panes is shared evenly (rounded) by the
//! flexible ones.

use crate::core::host::Host;
use crate::core::key::Key;
use crate::core::view::{EventResult, View, ViewCore};
use crate::core::window::{Pane, Window};
use crate::ui::core::geom::Rect;
use crate::ui::core::surface::Surface;
use std::rc::Weak;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Panes stacked top to bottom; sizes are heights.
    Vertical,
    /// Panes side by side; sizes are widths.
    Horizontal,
}

/// Boundary offsets of each pane along an axis of length `extent`.
///
/// Returns `sizes.len() + 1` offsets starting at 0; pane `i` spans
/// `offsets[i]..offsets[i + 1]`.
pub fn split_offsets(extent: u16, sizes: &[u16]) -> Vec<u16> {
    let fixed: u32 = sizes.iter().map(|&s| s as u32).sum();
    let flexible = sizes.iter().filter(|&&s| s == 0).count() as u32;
    let share = if flexible == 0 {
        0
    } else {
        let free = (extent as u32).saturating_sub(fixed);
        round_half_even(free, flexible)
    };

    let mut offsets = Vec::with_capacity(sizes.len() + 1);
    let mut at: u16 = 0;
    offsets.push(at);
    for &size in sizes {
        let size = if size == 0 { share as u16 } else { size };
        at = at.saturating_add(size);
        offsets.push(at);
    }
    offsets
}

/// `num / den` rounded to nearest, ties to even.
fn round_half_even(num: u32, den: u32) -> u32 {
    let (q, r) = (num / den, num % den);
    match (2 * r).cmp(&den) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal => q + (q & 1),
    }
}

pub struct SplitView {
    core: ViewCore,
    axis: Axis,
    sizes: Vec<u16>,
    panes: Vec<Pane>,
    focus: usize,
}

impl SplitView {
    pub fn new(axis: Axis, sizes: &[u16]) -> Self {
        Self {
            core: ViewCore::new().without_erase(),
            axis,
            sizes: sizes.to_vec(),
            panes: sizes.iter().map(|_| Pane::new()).collect(),
            focus: 0,
        }
    }

    pub fn vertical(sizes: &[u16]) -> Self {
        Self::new(Axis::Vertical, sizes)
    }

    pub fn horizontal(sizes: &[u16]) -> Self {
        Self::new(Axis::Horizontal, sizes)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn pane(&self, index: usize) -> Option<&Window> {
        self.panes.get(index).map(Pane::window)
    }

    pub fn pane_mut(&mut self, index: usize) -> Option<&mut Window> {
        self.panes.get_mut(index).map(Pane::window_mut)
    }

    pub fn focus(&self) -> usize {
        self.focus
    }

    /// Route keys to pane `index`. Out-of-range indices are ignored.
    pub fn set_focus(&mut self, index: usize) {
        if index < self.panes.len() && index != self.focus {
            tracing::debug!(from = self.focus, to = index, "split focus");
            self.focus = index;
            self.touch();
        }
    }

    /// Move focus to the next pane, wrapping around.
    pub fn cycle_focus(&mut self) {
        if !self.panes.is_empty() {
            self.set_focus((self.focus + 1) % self.panes.len());
        }
    }

    fn pane_rects(&self) -> Vec<Rect> {
        let (w, h) = (self.core.width, self.core.height);
        let extent = match self.axis {
            Axis::Vertical => h,
            Axis::Horizontal => w,
        };
        let offsets = split_offsets(extent, &self.sizes);
        offsets
            .windows(2)
            .map(|pair| {
                let start = pair[0].min(extent);
                let len = pair[1].min(extent) - start;
                match self.axis {
                    Axis::Vertical => Rect::new(0, start, w, len),
                    Axis::Horizontal => Rect::new(start, 0, len, h),
                }
            })
            .collect()
    }
}

impl View for SplitView {
    fn core(&self) -> &ViewCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut ViewCore {
        &mut self.core
    }

    fn attach(&mut self, host: Weak<Host>) {
        for pane in &mut self.panes {
            pane.window_mut().attach(host.clone());
        }
        self.core.set_host(host);
    }

    fn init(&mut self) {
        for pane in &mut self.panes {
            pane.window_mut().init();
        }
        self.touch();
    }

    fn die(&mut self) -> bool {
        if self.core.kill() {
            return true;
        }
        for pane in &mut self.panes {
            pane.window_mut().die();
        }
        false
    }

    fn proc(&mut self) -> bool {
        let mut dirty = false;
        for pane in &mut self.panes {
            let window = pane.window_mut();
            window.proc();
            dirty |= window.touched();
        }
        if dirty {
            self.touch();
        }
        false
    }

    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        if self.core.begin_draw(surface) {
            return true;
        }
        let rects = self.pane_rects();
        for (pane, rect) in self.panes.iter_mut().zip(rects) {
            pane.render(surface, rect);
        }
        false
    }

    fn touch_all(&mut self) {
        self.touch();
        for pane in &mut self.panes {
            pane.window_mut().touch_all();
        }
    }

    fn key(&mut self, key: Key) -> EventResult {
        match self.panes.get_mut(self.focus) {
            Some(pane) => pane.window_mut().key(key),
            None => EventResult::Ignored,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/views/split.rs"]
mod tests;
