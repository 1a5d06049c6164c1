//! Terminal mode for the lifetime of an App run.
//!
//! Setup enters raw mode and the alternate screen and hides the cursor.
//! Restoring happens once, whichever path gets there first: the guard being
//! dropped, a panic, or a termination signal the loop failed to honour.

use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// How long a signalled App gets to unwind before the process is killed.
pub const SIGNAL_GRACE: Duration = Duration::from_secs(2);

/// The two halves of terminal mode switching.
pub trait ScreenOps: Send + Sync + 'static {
    fn enter(&self) -> io::Result<()>;
    fn leave(&self) -> io::Result<()>;
}

#[derive(Debug, Default)]
pub struct CrosstermScreen;

impl ScreenOps for CrosstermScreen {
    fn enter(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
    }

    fn leave(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        // Every step runs; the first failure is reported.
        let steps = [
            terminal::disable_raw_mode(),
            execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show),
        ];
        steps.into_iter().collect()
    }
}

/// Cloneable handle that leaves the terminal mode at most once.
#[derive(Clone)]
pub struct TerminalRestorer {
    done: Arc<AtomicBool>,
    ops: Arc<dyn ScreenOps>,
}

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        tracing::debug!("restoring terminal");
        self.ops.leave()
    }

    pub fn is_restored(&self) -> bool {
        self.done.load(Ordering::SeqCst)
    }
}

pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermScreen))
    }

    pub fn with_ops(ops: Arc<dyn ScreenOps>) -> io::Result<Self> {
        ops.enter()?;
        Ok(Self {
            restorer: TerminalRestorer {
                done: Arc::new(AtomicBool::new(false)),
                ops,
            },
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }

    /// Leave the terminal mode before the current panic hook runs, so the
    /// report lands on the normal screen.
    pub fn restore_on_panic(&self) {
        let restorer = self.restorer();
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            let _ = restorer.restore();
            previous(info);
        }));
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = self.restorer.restore();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    #[cfg(unix)]
    pub fn from_raw(signal: i32) -> Option<Self> {
        use signal_hook::consts::signal::{SIGINT, SIGTERM};

        match signal {
            SIGINT => Some(Self::SigInt),
            SIGTERM => Some(Self::SigTerm),
            _ => None,
        }
    }

    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

/// Raise `interrupt` on SIGINT/SIGTERM so the App loop unwinds on its own.
/// A loop still running after [`SIGNAL_GRACE`] is cut short: the terminal is
/// restored and the process exits with the signal's code.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    interrupt: Arc<AtomicBool>,
) -> io::Result<std::thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    Ok(std::thread::spawn(move || {
        for raw in signals.forever() {
            let Some(signal) = TerminationSignal::from_raw(raw) else {
                continue;
            };
            tracing::info!(?signal, "termination signal");
            interrupt.store(true, Ordering::SeqCst);

            std::thread::sleep(SIGNAL_GRACE);
            if restorer.is_restored() {
                // The App already tore down; main is on its way out.
                continue;
            }
            let _ = restorer.restore();
            std::process::exit(signal.exit_code());
        }
    }))
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
