use std::path::PathBuf;
use std::time::Duration;

use crate::controls::{DEFAULT_INACTIVITY_TIMEOUT, DEFAULT_POINTER_THROTTLE};
use crate::persistence::DEFAULT_AUTOSAVE_DELAY;
use crate::state::DEFAULT_STATS_DELAY;

/// Overrides the preference directory
pub const DATA_DIR_ENV: &str = "QUARTZ_DATA_DIR";
/// Overrides the autosave quiet period, in milliseconds
pub const AUTOSAVE_MS_ENV: &str = "QUARTZ_AUTOSAVE_MS";
/// Overrides the stats quiet period, in milliseconds
pub const STATS_MS_ENV: &str = "QUARTZ_STATS_MS";

/// Startup configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Where `preferences.json` lives; `None` uses the platform config dir
    pub data_dir: Option<PathBuf>,
    pub autosave_delay: Duration,
    pub stats_delay: Duration,
    pub inactivity_timeout: Duration,
    pub pointer_throttle: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            autosave_delay: DEFAULT_AUTOSAVE_DELAY,
            stats_delay: DEFAULT_STATS_DELAY,
            inactivity_timeout: DEFAULT_INACTIVITY_TIMEOUT,
            pointer_throttle: DEFAULT_POINTER_THROTTLE,
        }
    }
}

impl Config {
    /// Defaults overridden by `QUARTZ_*` environment variables
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build from an arbitrary variable lookup; unparsable values are logged
    /// and ignored.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.is_empty()) {
            config.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(delay) = millis_var(&lookup, AUTOSAVE_MS_ENV) {
            config.autosave_delay = delay;
        }
        if let Some(delay) = millis_var(&lookup, STATS_MS_ENV) {
            config.stats_delay = delay;
        }
        config
    }
}

fn millis_var(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<Duration> {
    let raw = lookup(name)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(err) => {
            log::warn!("Ignoring {name}={raw:?}: {err}");
            None
        }
    }
}
