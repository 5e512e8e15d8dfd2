use super::KeyValueStore;
use crate::error::{PromptError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

/// File-backed key-value store: each key is a `<key>.json` file under `root`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Path of the file backing `key`.
    pub fn item_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty()
            || key.starts_with('.')
            || key.contains(|c: char| c == '/' || c == '\\')
        {
            return Err(PromptError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(PromptError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.item_path(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PromptError::Io(e)),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.item_path(key)?;
        self.ensure_dir()?;

        // Atomic replace: temp file, then rename.
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(PromptError::Io)?;
        fs::rename(&tmp, &path).map_err(PromptError::Io)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let path = self.item_path(key)?;
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PromptError::Io(e)),
        }
    }
}
