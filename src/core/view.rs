//! View system: the `View` trait and the state every view carries.
//!
//! A view is a drawable, key-receiving node owned by a `Window`. Every
//! concrete view embeds a `ViewCore` and exposes it through `core`/`core_mut`;
//! the trait's default methods implement the shared lifecycle on top of it.

use super::host::Host;
use super::key::Key;
use crate::ui::core::surface::Surface;
use std::any::{Any, TypeId};
use std::rc::{Rc, Weak};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    /// Consumed; the owning window should swallow auto-repeats of this key
    /// until it is released.
    ConsumedUntilRelease,
    Ignored,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        !self.is_ignored()
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }
}

impl From<bool> for EventResult {
    fn from(consumed: bool) -> Self {
        if consumed {
            EventResult::Consumed
        } else {
            EventResult::Ignored
        }
    }
}

#[derive(Debug)]
pub struct ViewCore {
    /// Needs redraw.
    pub touched: bool,
    /// Surface extent captured at the last draw.
    pub width: u16,
    pub height: u16,
    /// Lower layers show through; dirtiness propagates downwards.
    pub transparent: bool,
    /// Erase the surface before drawing.
    pub erase: bool,
    died: bool,
    host: Weak<Host>,
}

impl Default for ViewCore {
    fn default() -> Self {
        Self {
            touched: false,
            width: 0,
            height: 0,
            transparent: false,
            erase: true,
            died: false,
            host: Weak::new(),
        }
    }
}

impl ViewCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transparent(mut self) -> Self {
        self.transparent = true;
        self
    }

    pub fn without_erase(mut self) -> Self {
        self.erase = false;
        self
    }

    pub fn died(&self) -> bool {
        self.died
    }

    pub fn host(&self) -> Option<Rc<Host>> {
        self.host.upgrade()
    }

    pub fn host_ref(&self) -> Weak<Host> {
        self.host.clone()
    }

    pub fn set_host(&mut self, host: Weak<Host>) {
        self.host = host;
    }

    /// Mark dead. Returns `true` if the view was already dead. The flag flips
    /// before any cascade so re-entrant teardown stops here.
    pub fn kill(&mut self) -> bool {
        if self.died {
            return true;
        }
        self.died = true;
        false
    }

    /// Common draw prologue. Returns `true` (stop) when the view is clean;
    /// otherwise clears the dirty flag, records the surface size and erases.
    pub fn begin_draw(&mut self, surface: &mut dyn Surface) -> bool {
        if !self.touched {
            return true;
        }
        self.touched = false;
        let size = surface.size();
        self.width = size.w;
        self.height = size.h;
        if self.erase && !self.transparent {
            surface.erase();
        }
        false
    }
}

pub trait View: Any {
    fn core(&self) -> &ViewCore;

    fn core_mut(&mut self) -> &mut ViewCore;

    /// Record the App this view now belongs to. Composites forward it to
    /// their nested windows.
    fn attach(&mut self, host: Weak<Host>) {
        self.core_mut().set_host(host);
    }

    /// Called once, after the hosting window is wired to a surface.
    fn init(&mut self) {
        self.touch();
    }

    /// Returns `true` if the view was already dead.
    fn die(&mut self) -> bool {
        self.core_mut().kill()
    }

    /// Pre-draw bookkeeping. Returns `true` to stop deeper processing.
    fn proc(&mut self) -> bool {
        false
    }

    /// Returns `true` to stop deeper drawing (the view was clean).
    fn draw(&mut self, surface: &mut dyn Surface) -> bool {
        self.core_mut().begin_draw(surface)
    }

    fn touch(&mut self) {
        self.core_mut().touched = true;
    }

    fn touch_all(&mut self) {
        self.touch();
    }

    fn key(&mut self, _key: Key) -> EventResult {
        EventResult::Ignored
    }

    fn is_dead(&self) -> bool {
        self.core().died()
    }

    fn is_touched(&self) -> bool {
        self.core().touched
    }
}

impl dyn View {
    #[inline]
    pub fn is<T: View>(&self) -> bool {
        self.type_id() == TypeId::of::<T>()
    }

    #[inline]
    pub fn downcast_ref<T: View>(&self) -> Option<&T> {
        if self.is::<T>() {
            // SAFETY: the concrete type was just checked; the data pointer of
            // the fat pointer is the `T`.
            unsafe { Some(&*(self as *const dyn View as *const T)) }
        } else {
            None
        }
    }

    #[inline]
    pub fn downcast_mut<T: View>(&mut self) -> Option<&mut T> {
        if (*self).is::<T>() {
            // SAFETY: as above.
            unsafe { Some(&mut *(self as *mut dyn View as *mut T)) }
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/view.rs"]
mod tests;
