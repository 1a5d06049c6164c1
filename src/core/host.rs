//! App-wide state that views reach through a weak back-reference.
//!
//! The App owns the only strong `Rc<Host>`; windows and views hold
//! `Weak<Host>`, so teardown never has to break an ownership cycle.

use crate::config::UiConfig;
use std::cell::{Cell, RefCell};

#[derive(Debug, Default)]
pub struct Host {
    config: UiConfig,
    quit: Cell<bool>,
    debug: RefCell<Option<String>>,
}

impl Host {
    pub fn new(config: UiConfig) -> Self {
        Self {
            config,
            quit: Cell::new(false),
            debug: RefCell::new(None),
        }
    }

    pub fn config(&self) -> &UiConfig {
        &self.config
    }

    /// Ask the App to clear its view stack before the next frame.
    pub fn request_quit(&self) {
        self.quit.set(true);
    }

    pub fn take_quit(&self) -> bool {
        self.quit.replace(false)
    }

    /// Post a message for the App's debug overlay.
    pub fn debug_out(&self, msg: impl Into<String>) {
        *self.debug.borrow_mut() = Some(msg.into());
    }

    pub fn take_debug(&self) -> Option<String> {
        self.debug.borrow_mut().take()
    }
}
