//! Preference store backed by a single JSON file.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use parking_lot::RwLock;

use super::PreferenceStore;
use crate::error::{PersistenceError, PersistenceResult};
use crate::util::fs::write_atomically;

const FILE_NAME: &str = "preferences.json";

/// Key-value preferences kept in memory and written through to
/// `<dir>/preferences.json` on every change.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    values: RwLock<BTreeMap<String, String>>,
}

impl FilePreferences {
    /// Open (or create) the preference file inside `dir`.
    ///
    /// A missing file starts empty. An unreadable or corrupt file is logged
    /// and also starts empty; it is overwritten by the next write.
    pub fn open(dir: &Path) -> PersistenceResult<Self> {
        fs::create_dir_all(dir)?;
        let path = dir.join(FILE_NAME);

        let values = match fs::read_to_string(&path) {
            Ok(json) => serde_json::from_str(&json).unwrap_or_else(|err| {
                log::warn!("Preference file {} is corrupt, starting empty: {err}", path.display());
                BTreeMap::new()
            }),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(err) => {
                log::warn!("Could not read preference file {}: {err}", path.display());
                BTreeMap::new()
            }
        };

        log::info!("Using preference file {}", path.display());
        Ok(Self {
            path,
            values: RwLock::new(values),
        })
    }

    /// Per-user default directory, e.g. `~/.config/quartz` on Linux
    pub fn default_dir() -> PersistenceResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("quartz"))
            .ok_or(PersistenceError::NoConfigDirectory)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self, values: &BTreeMap<String, String>) -> PersistenceResult<()> {
        let json = serde_json::to_vec_pretty(values)?;
        write_atomically(&self.path, &json)?;
        Ok(())
    }
}

impl PreferenceStore for FilePreferences {
    fn get_string(&self, key: &str) -> Option<String> {
        self.values.read().get(key).cloned()
    }

    fn set_string(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let mut values = self.values.write();
        values.insert(key.to_owned(), value.to_owned());
        self.persist(&values)
    }

    fn remove(&self, key: &str) -> PersistenceResult<()> {
        let mut values = self.values.write();
        if values.remove(key).is_some() {
            self.persist(&values)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let store = FilePreferences::open(dir.path()).unwrap();
        store.set_string("greeting", "hello\nworld").unwrap();
        drop(store);

        let reopened = FilePreferences::open(dir.path()).unwrap();
        assert_eq!(reopened.get_string("greeting").as_deref(), Some("hello\nworld"));
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(FILE_NAME), "{ not json").unwrap();

        let store = FilePreferences::open(dir.path()).unwrap();
        assert_eq!(store.get_string("anything"), None);

        store.set_string("k", "v").unwrap();
        let reopened = FilePreferences::open(dir.path()).unwrap();
        assert_eq!(reopened.get_string("k").as_deref(), Some("v"));
    }

    #[test]
    fn test_remove_persists() {
        let dir = tempfile::tempdir().unwrap();
        let store = FilePreferences::open(dir.path()).unwrap();
        store.set_string("k", "v").unwrap();
        store.remove("k").unwrap();

        let reopened = FilePreferences::open(dir.path()).unwrap();
        assert_eq!(reopened.get_string("k"), None);
    }
}
