//! Engine configuration (`config.json`).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_DIR: &str = "zview";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Frames per second the loop renders at when idle.
    pub frame_rate: u32,
    /// Input polls per second; converted to tenths of a second of wait.
    pub proc_rate: u32,
    /// Gap after which a repeated key counts as released.
    pub release_debounce_ms: u64,
    pub tab_size: u8,
    /// Treat `^C` as an interrupt instead of dispatching it.
    pub ctrl_c_interrupts: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate: 60,
            proc_rate: 60,
            release_debounce_ms: 50,
            tab_size: 8,
            ctrl_c_interrupts: true,
        }
    }
}

impl UiConfig {
    pub fn frame_delay(&self) -> Duration {
        if self.frame_rate == 0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(1.0 / self.frame_rate as f64)
    }

    pub fn proc_delay_ticks(&self) -> u32 {
        if self.proc_rate == 0 {
            return 0;
        }
        10 / self.proc_rate
    }

    /// Bounded wait for one input read. Rates above 10/s round down to zero
    /// ticks, in which case a read never waits longer than one frame.
    pub fn poll_timeout(&self) -> Duration {
        match self.proc_delay_ticks() {
            0 => self.frame_delay(),
            ticks => Duration::from_millis(100 * ticks as u64),
        }
    }

    pub fn release_debounce(&self) -> Duration {
        Duration::from_millis(self.release_debounce_ms)
    }
}

pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the user config, falling back to defaults when none exists.
pub fn load() -> Result<UiConfig> {
    match config_path() {
        Some(path) => load_from(&path),
        None => Ok(UiConfig::default()),
    }
}

pub fn load_from(path: &Path) -> Result<UiConfig> {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(UiConfig::default());
        }
        Err(err) => return Err(err.into()),
    };
    serde_json::from_str(&data).map_err(|source| Error::Config {
        path: path.to_path_buf(),
        source,
    })
}

fn config_dir() -> Option<PathBuf> {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return Some(PathBuf::from(xdg));
        }
    }

    #[cfg(target_os = "windows")]
    {
        return std::env::var("APPDATA").ok().map(PathBuf::from);
    }

    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join(".config"))
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
