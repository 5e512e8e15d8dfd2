//! # Storage Layer
//!
//! Prompts live in a local, synchronous key-value store, the same shape as a
//! browser's `localStorage`: string keys, string values, one origin. The whole
//! collection is kept under a single namespaced key as a JSON array of
//! `{id, title, content}` objects and rewritten in full after every mutation.
//!
//! ## Layers
//!
//! - [`KeyValueStore`]: raw get/set/remove of string values.
//!   - [`fs::FileStore`]: one file per key under a data directory.
//!   - [`memory::InMemoryStore`]: tests, with failure injection.
//! - [`PromptStore`]: the adapter that knows the key and the record format.
//!
//! ## Failure Policy
//!
//! [`PromptStore::persist`] and [`PromptStore::load`] never fail. Storage and
//! serialization errors are logged and swallowed: the in-memory collection
//! stays authoritative on write, and an unreadable collection loads as empty.
//! The `try_*` variants surface the error for callers that want it.
//!
//! Records are validated one by one on load. A malformed entry is dropped with
//! a warning, the rest of the array still loads.

use crate::error::{PromptError, Result};
use crate::model::Prompt;
use serde_json::Value;

pub mod fs;
pub mod memory;

/// Key the prompt collection is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "prompts-storage";

/// Abstract interface for a local string key-value store.
pub trait KeyValueStore {
    /// Read a value, `Ok(None)` if the key is absent.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing any previous one.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove a key. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> Result<()>;
}

/// Outcome of a load, with the number of entries that were thrown away.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LoadReport {
    pub prompts: Vec<Prompt>,
    pub discarded: usize,
}

/// Serializes the prompt collection into a [`KeyValueStore`].
pub struct PromptStore<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> PromptStore<S> {
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: &str) -> Self {
        Self {
            backend,
            key: key.to_string(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Write the full collection. Errors are logged, never returned.
    pub fn persist(&mut self, prompts: &[Prompt]) {
        if let Err(e) = self.try_persist(prompts) {
            tracing::error!(key = %self.key, error = %e, "failed to save prompts");
        }
    }

    pub fn try_persist(&mut self, prompts: &[Prompt]) -> Result<()> {
        let serialized = serde_json::to_string(prompts).map_err(PromptError::Serialization)?;
        self.backend.set_item(&self.key, &serialized)?;
        tracing::debug!(key = %self.key, count = prompts.len(), "prompts saved");
        Ok(())
    }

    /// Read the collection. Absent or unreadable data yields an empty one.
    pub fn load(&self) -> Vec<Prompt> {
        match self.try_load() {
            Ok(report) => report.prompts,
            Err(e) => {
                tracing::error!(key = %self.key, error = %e, "failed to load prompts");
                Vec::new()
            }
        }
    }

    pub fn try_load(&self) -> Result<LoadReport> {
        let Some(raw) = self.backend.get_item(&self.key)? else {
            return Ok(LoadReport::default());
        };

        let value: Value = serde_json::from_str(&raw).map_err(PromptError::Serialization)?;
        let Value::Array(entries) = value else {
            return Err(PromptError::Store(format!(
                "value under '{}' is not a list of prompts",
                self.key
            )));
        };

        let mut report = LoadReport::default();
        for (position, entry) in entries.into_iter().enumerate() {
            match serde_json::from_value::<Prompt>(entry) {
                Ok(prompt) => report.prompts.push(prompt),
                Err(e) => {
                    tracing::warn!(position, error = %e, "discarding malformed prompt entry");
                    report.discarded += 1;
                }
            }
        }
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::memory::InMemoryStore;
    use super::*;
    use crate::model::PromptId;

    fn prompt(id: &str, title: &str, content: &str) -> Prompt {
        Prompt {
            id: PromptId::from(id),
            title: title.into(),
            content: content.into(),
        }
    }

    #[test]
    fn load_without_key_is_empty() {
        let store = PromptStore::new(InMemoryStore::new());
        assert!(store.load().is_empty());
    }

    #[test]
    fn persist_then_load_reproduces_collection() {
        let mut store = PromptStore::new(InMemoryStore::new());
        let prompts = vec![
            prompt("2", "Beta", "<p>b &amp; c</p>"),
            prompt("1", "Alpha", "quote \" and\nnewline"),
        ];
        store.persist(&prompts);
        assert_eq!(store.load(), prompts);
    }

    #[test]
    fn uses_namespaced_key() {
        let mut store = PromptStore::new(InMemoryStore::new());
        store.persist(&[prompt("1", "A", "a")]);
        let raw = store.backend().get_item(DEFAULT_STORAGE_KEY).unwrap().unwrap();
        assert_eq!(raw, r#"[{"id":"1","title":"A","content":"a"}]"#);
    }

    #[test]
    fn unparseable_value_loads_empty() {
        let mut backend = InMemoryStore::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
        let store = PromptStore::new(backend);
        assert!(store.try_load().is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn non_array_value_loads_empty() {
        let mut backend = InMemoryStore::new();
        backend.set_item(DEFAULT_STORAGE_KEY, r#"{"id":"1"}"#).unwrap();
        assert!(PromptStore::new(backend).load().is_empty());
    }

    #[test]
    fn malformed_entries_are_discarded_individually() {
        let mut backend = InMemoryStore::new();
        backend
            .set_item(
                DEFAULT_STORAGE_KEY,
                concat!(
                    r#"[{"id":"1","title":"ok","content":"x"},{"id":2,"title":"bad"},"junk","#,
                    r#"{"id":"3","title":"also ok","content":"y"}]"#,
                ),
            )
            .unwrap();
        let store = PromptStore::new(backend);

        let report = store.try_load().unwrap();
        assert_eq!(report.discarded, 2);
        let titles: Vec<_> = report.prompts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, ["ok", "also ok"]);
    }

    #[test]
    fn write_failure_is_swallowed() {
        let mut store = PromptStore::new(InMemoryStore::new().failing_writes());
        store.persist(&[prompt("1", "A", "a")]);
        assert!(store.try_persist(&[]).is_err());
        assert!(store.load().is_empty());
    }

    #[test]
    fn read_failure_loads_empty() {
        let mut backend = InMemoryStore::new();
        backend.set_item(DEFAULT_STORAGE_KEY, "[]").unwrap();
        let store = PromptStore::new(backend.failing_reads());
        assert!(store.load().is_empty());
    }
}
