//! File-backed store: one JSON file per key inside a data directory.

use std::path::PathBuf;

use super::KeyValueStore;
use crate::error::{EventProError, EventProResult};

#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// A store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    /// Path of the file holding `key`.
    pub fn path_for(&self, key: &str) -> EventProResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

/// Keys become file names, so anything that could escape the directory is refused.
fn validate_key(key: &str) -> EventProResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
        && !key.starts_with('.');

    if valid {
        Ok(())
    } else {
        Err(EventProError::Storage(format!("Invalid storage key '{}'", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> EventProResult<Option<String>> {
        let path = self.path_for(key)?;

        match std::fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(EventProError::Storage(format!(
                "Could not read {}: {e}",
                path.display()
            ))),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> EventProResult<()> {
        let path = self.path_for(key)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| {
            EventProError::Storage(format!(
                "Could not create data directory {}: {e}",
                self.dir.display()
            ))
        })?;

        // Write next to the target and rename over it so readers never see a partial value
        let tmp_path = self.dir.join(format!(".{}.json.tmp", key));
        std::fs::write(&tmp_path, value).map_err(|e| {
            EventProError::Storage(format!("Could not write {}: {e}", tmp_path.display()))
        })?;
        std::fs::rename(&tmp_path, &path).map_err(|e| {
            EventProError::Storage(format!("Could not replace {}: {e}", path.display()))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.get("events").unwrap(), None);
    }

    #[test]
    fn set_then_get_round_trips_and_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("data");
        let mut store = FileStore::new(&nested);

        store.set("events", r#"[{"id":1}]"#).unwrap();

        assert!(nested.join("events.json").exists());
        assert!(!nested.join(".events.json.tmp").exists());
        assert_eq!(
            store.get("events").unwrap().as_deref(),
            Some(r#"[{"id":1}]"#)
        );
    }

    #[test]
    fn set_overwrites_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        store.set("events", "[1,2,3]").unwrap();
        store.set("events", "[]").unwrap();

        assert_eq!(store.get("events").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn rejects_keys_that_escape_the_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert!(store.path_for("../events").is_err());
        assert!(store.path_for(".hidden").is_err());
        assert!(store.path_for("").is_err());
        assert!(store.path_for("events_v2").is_ok());
    }
}
