//! Best-effort snapshot persistence into a small key-value preference store.

mod autosave;
mod file;
mod memory;

pub use autosave::{AutosaveChannel, DEFAULT_AUTOSAVE_DELAY};
pub use file::FilePreferences;
pub use memory::MemoryPreferences;

use crate::error::PersistenceResult;
use crate::shape::Shape;

/// Key holding the full document text
pub const TEXT_KEY: &str = "Quartz_text_persistence";

/// Key holding the serialized shape array
pub const SHAPES_KEY: &str = "Quartz_canvas_shapes";

/// String key-value storage shared by the autosave channels.
///
/// Injected at construction so tests can substitute [`MemoryPreferences`].
pub trait PreferenceStore: Send + Sync {
    fn get_string(&self, key: &str) -> Option<String>;

    fn set_string(&self, key: &str, value: &str) -> PersistenceResult<()>;

    fn remove(&self, key: &str) -> PersistenceResult<()>;
}

/// A value that can be written to and restored from a preference key
pub trait Snapshot: Sized {
    fn encode(&self) -> PersistenceResult<String>;

    fn decode(raw: &str) -> PersistenceResult<Self>;
}

impl Snapshot for String {
    fn encode(&self) -> PersistenceResult<String> {
        Ok(self.clone())
    }

    fn decode(raw: &str) -> PersistenceResult<Self> {
        Ok(raw.to_owned())
    }
}

impl Snapshot for Vec<Shape> {
    fn encode(&self) -> PersistenceResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    fn decode(raw: &str) -> PersistenceResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}

/// Read and decode the snapshot stored under `key`.
///
/// Absent or corrupt snapshots yield `None`; corruption is logged.
pub fn load_snapshot<T: Snapshot>(store: &dyn PreferenceStore, key: &str) -> Option<T> {
    let raw = store.get_string(key)?;
    match T::decode(&raw) {
        Ok(value) => {
            log::debug!("Restored snapshot for key {key} ({} bytes)", raw.len());
            Some(value)
        }
        Err(err) => {
            log::warn!("Ignoring unreadable snapshot for key {key}: {err}");
            None
        }
    }
}
