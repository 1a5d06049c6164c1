//! App: the root window plus the frame loop.
//!
//! One iteration: proc, one bounded-wait input read, dispatch, draw, present.
//! Idle polls only produce a frame once the frame delay has elapsed; in that
//! case `Key::NONE` is dispatched so handlers can run idle logic.

use super::host::Host;
use super::key::Key;
use super::view::{EventResult, View};
use super::window::Window;
use crate::config::UiConfig;
use crate::error::Result;
use crate::ui::backend::Terminal;
use crate::ui::core::grid::Grid;
use crate::ui::core::surface::Surface;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

pub struct App {
    window: Window,
    host: Rc<Host>,
    frame_delay: Duration,
    poll_timeout: Duration,
    ctrl_c_interrupts: bool,
    last_frame: Option<Instant>,
    screen: Grid,
    interrupt: Arc<AtomicBool>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self::with_config(UiConfig::default())
    }

    pub fn with_config(config: UiConfig) -> Self {
        let frame_delay = config.frame_delay();
        let poll_timeout = config.poll_timeout();
        let ctrl_c_interrupts = config.ctrl_c_interrupts;
        let host = Rc::new(Host::new(config));
        let mut window = Window::new();
        window.attach(Rc::downgrade(&host));
        Self {
            window,
            host,
            frame_delay,
            poll_timeout,
            ctrl_c_interrupts,
            last_frame: None,
            screen: Grid::default(),
            interrupt: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn host(&self) -> &Rc<Host> {
        &self.host
    }

    pub fn config(&self) -> &UiConfig {
        self.host.config()
    }

    pub fn add_view<V: View>(&mut self, view: V) {
        self.window.add_view(view);
    }

    pub fn on_key<F>(&mut self, key: Key, handler: F)
    where
        F: FnMut(&mut Window, Key) -> EventResult + 'static,
    {
        self.window.on_key(key, handler);
    }

    pub fn on_unknown_key<F>(&mut self, handler: F)
    where
        F: FnMut(&mut Window, Key) -> EventResult + 'static,
    {
        self.window.on_unknown_key(handler);
    }

    /// Empty the view stack; the loop exits at the start of the next iteration.
    pub fn quit(&mut self) {
        self.window.clear();
    }

    /// Shared flag that stops the loop when raised (signal handlers, `^C`).
    pub fn interrupt_flag(&self) -> Arc<AtomicBool> {
        self.interrupt.clone()
    }

    /// The last frame handed to the terminal.
    pub fn screen(&self) -> &Grid {
        &self.screen
    }

    /// Run the frame loop until the view stack empties or an interrupt is
    /// raised. Every view is killed on the way out, error or not.
    pub fn run(&mut self, term: &mut dyn Terminal) -> Result<()> {
        tracing::info!(
            frame_delay = ?self.frame_delay,
            poll_timeout = ?self.poll_timeout,
            "app loop starting"
        );
        self.window.init();
        let result = self.run_loop(term);
        self.window.die();
        match &result {
            Ok(()) => tracing::info!("app loop finished"),
            Err(err) => tracing::error!(error = %err, "app loop failed"),
        }
        result
    }

    fn run_loop(&mut self, term: &mut dyn Terminal) -> Result<()> {
        loop {
            if self.interrupt.load(Ordering::SeqCst) {
                tracing::info!("interrupted");
                return Ok(());
            }
            if self.host.take_quit() {
                self.window.clear();
            }
            if self.window.is_empty() {
                return Ok(());
            }

            self.window.proc();
            if self.window.is_empty() {
                continue;
            }

            match term.poll_key(self.poll_timeout)? {
                Some(key) if self.ctrl_c_interrupts && key == Key::ctrl('C') => {
                    self.interrupt.store(true, Ordering::SeqCst);
                    continue;
                }
                Some(key) => {
                    self.window.key(key);
                }
                None => {
                    if !self.frame_due(Instant::now()) {
                        continue;
                    }
                    self.window.key(Key::NONE);
                }
            }

            if let Some(msg) = self.host.take_debug() {
                self.window.debug_out(&msg);
            }
            self.draw_frame(term)?;
            self.last_frame = Some(Instant::now());
        }
    }

    fn frame_due(&self, now: Instant) -> bool {
        match self.last_frame {
            Some(last) => now.saturating_duration_since(last) >= self.frame_delay,
            None => true,
        }
    }

    fn draw_frame(&mut self, term: &mut dyn Terminal) -> Result<()> {
        let size = term.size()?;
        if size != self.screen.size() {
            tracing::debug!(w = size.w, h = size.h, "screen resized");
            self.screen.resize(size);
            self.window.touch_all();
        }
        self.window.draw(&mut self.screen);
        term.present(&self.screen)?;
        Ok(())
    }

    /// Run on the real terminal: raw mode and alternate screen for the
    /// duration, SIGINT/SIGTERM wired to the interrupt flag.
    #[cfg(feature = "tui")]
    pub fn run_tty(&mut self) -> Result<()> {
        use crate::tui::terminal_guard::TerminalGuard;
        use crate::ui::backend::terminal::RatatuiTerminal;

        let guard = TerminalGuard::new()?;
        guard.restore_on_panic();
        #[cfg(unix)]
        let _signals = crate::tui::terminal_guard::install_termination_signals(
            guard.restorer(),
            self.interrupt.clone(),
        )?;
        let mut term = RatatuiTerminal::new(std::io::stdout())?;
        let result = self.run(&mut term);
        drop(guard);
        result
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core/app.rs"]
mod tests;
