//! Debounced write-behind of one value into one preference key.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::{PreferenceStore, Snapshot, load_snapshot};
use crate::debounce::Debouncer;
use crate::error::PersistenceResult;

/// Default quiet period before a changed value is written
pub const DEFAULT_AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

/// Watches one value and writes it to `key` once changes settle.
///
/// At most one write happens per quiet period, carrying the latest value.
/// Writes whose encoded form matches the last written snapshot are skipped.
pub struct AutosaveChannel<T> {
    store: Arc<dyn PreferenceStore>,
    key: &'static str,
    debouncer: Debouncer<T>,
    last_written: Option<String>,
}

impl<T: Snapshot> AutosaveChannel<T> {
    pub fn new(store: Arc<dyn PreferenceStore>, key: &'static str, delay: Duration) -> Self {
        Self {
            store,
            key,
            debouncer: Debouncer::new(delay),
            last_written: None,
        }
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Read the last written snapshot, remembering it so an unchanged value
    /// is not written back.
    pub fn load(&mut self) -> Option<T> {
        let value = load_snapshot::<T>(self.store.as_ref(), self.key)?;
        self.last_written = value.encode().ok();
        Some(value)
    }

    /// Record a new value; restarts the quiet period
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.debouncer.schedule(value, now);
    }

    /// Write the pending value if its quiet period elapsed.
    ///
    /// Returns `Ok(true)` when a write reached the store.
    pub fn poll(&mut self, now: Instant) -> PersistenceResult<bool> {
        match self.debouncer.poll(now) {
            Some(value) => self.write(&value),
            None => Ok(false),
        }
    }

    /// Write any pending value immediately, e.g. on shutdown
    pub fn flush(&mut self) -> PersistenceResult<bool> {
        match self.debouncer.flush() {
            Some(value) => self.write(&value),
            None => Ok(false),
        }
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.debouncer.time_until_due(now)
    }

    fn write(&mut self, value: &T) -> PersistenceResult<bool> {
        let encoded = value.encode()?;
        if self.last_written.as_deref() == Some(encoded.as_str()) {
            log::trace!("Snapshot for {} unchanged, skipping write", self.key);
            return Ok(false);
        }
        self.store.set_string(self.key, &encoded)?;
        log::debug!("Saved snapshot for {} ({} bytes)", self.key, encoded.len());
        self.last_written = Some(encoded);
        Ok(true)
    }
}
