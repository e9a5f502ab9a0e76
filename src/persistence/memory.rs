use std::collections::HashMap;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::PreferenceStore;
use crate::error::PersistenceResult;

/// In-memory preference store for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    values: RwLock<HashMap<String, String>>,
    writes: AtomicUsize,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of successful `set_string` calls so far
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl PreferenceStore for MemoryPreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> PersistenceResult<()> {
        self.values.write().insert(key.to_owned(), value.to_owned());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        self.values.write().remove(key);
        Ok(())
    }
}
