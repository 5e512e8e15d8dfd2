use super::KeyValueStore;
use crate::error::{PromptError, Result};
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    items: HashMap<String, String>,
    fail_reads: bool,
    fail_writes: bool,
    writes: usize,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every read fails, like a store that has been disabled.
    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Every write fails, like a store that is over quota.
    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Number of `set_item` calls, including failed ones.
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for InMemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        if self.fail_reads {
            return Err(PromptError::Store("storage is disabled".to_string()));
        }
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.writes += 1;
        if self.fail_writes {
            return Err(PromptError::Store("storage quota exceeded".to_string()));
        }
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        self.items.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Prompt, PromptId};
    use crate::store::DEFAULT_STORAGE_KEY;

    pub struct StoreFixture {
        pub store: InMemoryStore,
        prompts: Vec<Prompt>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
                prompts: Vec::new(),
            }
        }

        /// Appends a prompt with a predictable id (`p1`, `p2`, ...).
        pub fn with_prompt(mut self, title: &str, content: &str) -> Self {
            let id = PromptId::from(format!("p{}", self.prompts.len() + 1));
            self.prompts.push(Prompt {
                id,
                title: title.to_string(),
                content: content.to_string(),
            });
            self
        }

        pub fn with_prompts(mut self, count: usize) -> Self {
            for i in 0..count {
                self = self.with_prompt(
                    &format!("Test Prompt {}", i + 1),
                    &format!("<p>Content for prompt {}</p>", i + 1),
                );
            }
            self
        }

        /// Writes the collected prompts under the default key.
        pub fn build(mut self) -> InMemoryStore {
            let serialized = serde_json::to_string(&self.prompts).unwrap();
            self.store
                .set_item(DEFAULT_STORAGE_KEY, &serialized)
                .unwrap();
            self.store.writes = 0;
            self.store
        }
    }
}
