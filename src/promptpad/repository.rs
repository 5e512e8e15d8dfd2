//! # Prompt Repository
//!
//! The session's source of truth: the ordered prompt collection and the id of
//! the prompt currently loaded in the editor.
//!
//! Ordering is newest-created first. Edits happen in place and never reorder.
//! Every mutation is written through to the [`PromptStore`] as a full
//! re-serialization of the collection.
//!
//! The selection is a plain back-reference. It is not cleared when the record
//! it names is removed; anything that reads it resolves it through
//! [`PromptRepository::selected_prompt`], which treats a dangling id as no
//! selection.

use crate::model::{Prompt, PromptId, NO_CONTENT, UNTITLED};
use crate::store::{KeyValueStore, PromptStore};

/// What [`PromptRepository::save`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(PromptId),
    Updated(PromptId),
}

impl SaveOutcome {
    pub fn id(&self) -> &PromptId {
        match self {
            SaveOutcome::Created(id) | SaveOutcome::Updated(id) => id,
        }
    }
}

pub struct PromptRepository<S: KeyValueStore> {
    store: PromptStore<S>,
    prompts: Vec<Prompt>,
    selected: Option<PromptId>,
}

impl<S: KeyValueStore> PromptRepository<S> {
    /// Loads the collection from `store`. The selection starts empty.
    pub fn load(store: PromptStore<S>) -> Self {
        let prompts = store.load();
        tracing::debug!(count = prompts.len(), "prompts loaded");
        Self {
            store,
            prompts,
            selected: None,
        }
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }

    pub fn store(&self) -> &PromptStore<S> {
        &self.store
    }

    pub fn find_by_id(&self, id: &PromptId) -> Option<&Prompt> {
        self.prompts.iter().find(|p| &p.id == id)
    }

    /// Prompts whose title contains `text` (trimmed, case-insensitive), in
    /// collection order. An empty filter matches everything.
    pub fn filter_by_title<'a>(&'a self, text: &str) -> impl Iterator<Item = &'a Prompt> + 'a {
        filter_by_title(&self.prompts, text)
    }

    pub fn selected_id(&self) -> Option<&PromptId> {
        self.selected.as_ref()
    }

    /// The selected prompt, if the selection still names a stored record.
    pub fn selected_prompt(&self) -> Option<&Prompt> {
        self.selected.as_ref().and_then(|id| self.find_by_id(id))
    }

    pub fn select(&mut self, id: PromptId) {
        self.selected = Some(id);
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Updates the selected prompt in place, or creates a new one at the front
    /// of the collection and selects it. Persists either way.
    ///
    /// Callers validate first; the placeholders only cover empty arguments
    /// that slipped past validation on the update path.
    pub fn save(&mut self, title: String, content: String) -> SaveOutcome {
        let selected_index = self
            .selected
            .as_ref()
            .and_then(|id| self.prompts.iter().position(|p| &p.id == id));

        let outcome = match selected_index {
            Some(index) => {
                let prompt = &mut self.prompts[index];
                prompt.title = non_empty_or(title, UNTITLED);
                prompt.content = non_empty_or(content, NO_CONTENT);
                tracing::debug!(id = %prompt.id, "prompt updated");
                SaveOutcome::Updated(prompt.id.clone())
            }
            None => {
                let prompt = Prompt::new(title, content);
                let id = prompt.id.clone();
                tracing::debug!(id = %id, "prompt created");
                self.prompts.insert(0, prompt);
                self.selected = Some(id.clone());
                SaveOutcome::Created(id)
            }
        };

        self.store.persist(&self.prompts);
        outcome
    }

    /// Deletes the prompt with `id` and persists, even when nothing matched.
    /// The selection is left as is.
    pub fn remove(&mut self, id: &PromptId) -> Option<Prompt> {
        let removed = self
            .prompts
            .iter()
            .position(|p| &p.id == id)
            .map(|index| self.prompts.remove(index));

        match &removed {
            Some(prompt) => tracing::debug!(id = %prompt.id, "prompt removed"),
            None => tracing::debug!(id = %id, "remove: no such prompt"),
        }

        self.store.persist(&self.prompts);
        removed
    }
}

/// Title filter over any prompt slice, shared with the list renderer.
pub fn filter_by_title<'a>(
    prompts: &'a [Prompt],
    text: &str,
) -> impl Iterator<Item = &'a Prompt> + 'a {
    let needle = text.trim().to_lowercase();
    prompts
        .iter()
        .filter(move |p| p.title.to_lowercase().contains(&needle))
}

fn non_empty_or(value: String, fallback: &str) -> String {
    if value.is_empty() {
        fallback.to_string()
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn empty_repo() -> PromptRepository<InMemoryStore> {
        PromptRepository::load(PromptStore::new(InMemoryStore::new()))
    }

    fn repo_with(titles: &[&str]) -> PromptRepository<InMemoryStore> {
        let fixture = titles
            .iter()
            .fold(StoreFixture::new(), |f, t| f.with_prompt(t, "<p>body</p>"));
        PromptRepository::load(PromptStore::new(fixture.build()))
    }

    fn titles(repo: &PromptRepository<InMemoryStore>) -> Vec<&str> {
        repo.prompts().iter().map(|p| p.title.as_str()).collect()
    }

    fn writes(repo: &PromptRepository<InMemoryStore>) -> usize {
        repo.store().backend().write_count()
    }

    #[test]
    fn first_save_creates_and_selects() {
        let mut repo = empty_repo();
        let outcome = repo.save("Hi".into(), "<p>there</p>".into());

        assert!(matches!(outcome, SaveOutcome::Created(_)));
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.prompts()[0].title, "Hi");
        assert_eq!(repo.prompts()[0].content, "<p>there</p>");
        assert_eq!(repo.selected_id(), Some(&repo.prompts()[0].id));
        assert_eq!(writes(&repo), 1);
    }

    #[test]
    fn new_prompts_are_prepended() {
        let mut repo = repo_with(&["Old 1", "Old 2"]);
        let before = repo.prompts().to_vec();

        repo.save("New".into(), "x".into());

        assert_eq!(titles(&repo), ["New", "Old 1", "Old 2"]);
        assert_eq!(&repo.prompts()[1..], &before[..]);
    }

    #[test]
    fn save_with_selection_updates_in_place() {
        let mut repo = repo_with(&["A", "B", "C"]);
        let id = repo.prompts()[1].id.clone();
        repo.select(id.clone());

        let outcome = repo.save("B2".into(), "<p>new</p>".into());

        assert_eq!(outcome, SaveOutcome::Updated(id.clone()));
        assert_eq!(titles(&repo), ["A", "B2", "C"]);
        assert_eq!(repo.find_by_id(&id).unwrap().content, "<p>new</p>");
        assert_eq!(writes(&repo), 1);
    }

    #[test]
    fn update_falls_back_to_placeholders() {
        let mut repo = repo_with(&["A"]);
        repo.select(repo.prompts()[0].id.clone());
        repo.save(String::new(), String::new());
        assert_eq!(repo.prompts()[0].title, UNTITLED);
        assert_eq!(repo.prompts()[0].content, NO_CONTENT);
    }

    #[test]
    fn dangling_selection_creates_new_prompt() {
        let mut repo = repo_with(&["A"]);
        repo.select(PromptId::from("gone"));

        let outcome = repo.save("B".into(), "b".into());

        assert!(matches!(outcome, SaveOutcome::Created(_)));
        assert_eq!(titles(&repo), ["B", "A"]);
        assert_eq!(repo.selected_id(), Some(outcome.id()));
    }

    #[test]
    fn remove_deletes_and_persists() {
        let mut repo = repo_with(&["A", "B"]);
        let id = repo.prompts()[0].id.clone();

        let removed = repo.remove(&id).unwrap();

        assert_eq!(removed.title, "A");
        assert_eq!(titles(&repo), ["B"]);
        assert_eq!(writes(&repo), 1);
    }

    #[test]
    fn remove_missing_id_still_persists() {
        let mut repo = repo_with(&["A", "B"]);
        let before = repo.prompts().to_vec();

        assert!(repo.remove(&PromptId::from("nope")).is_none());

        assert_eq!(repo.prompts(), &before[..]);
        assert_eq!(writes(&repo), 1);
    }

    #[test]
    fn remove_keeps_selection() {
        let mut repo = repo_with(&["R", "R2"]);
        let r = repo.prompts()[0].id.clone();
        let r2 = repo.prompts()[1].id.clone();
        repo.select(r.clone());

        repo.remove(&r2);

        assert_eq!(repo.selected_id(), Some(&r));
        assert!(repo.find_by_id(&r).is_some());
    }

    #[test]
    fn removed_selection_resolves_to_none() {
        let mut repo = repo_with(&["A"]);
        let id = repo.prompts()[0].id.clone();
        repo.select(id.clone());
        repo.remove(&id);

        assert_eq!(repo.selected_id(), Some(&id));
        assert!(repo.selected_prompt().is_none());
    }

    #[test]
    fn empty_filter_matches_all_in_order() {
        let repo = repo_with(&["Beta", "Alpha", "Gamma"]);
        let all: Vec<_> = repo.filter_by_title("").map(|p| p.title.as_str()).collect();
        assert_eq!(all, ["Beta", "Alpha", "Gamma"]);
        let blank: Vec<_> = repo.filter_by_title("   ").collect();
        assert_eq!(blank.len(), 3);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let repo = repo_with(&["Alpha", "Beta"]);

        let a: Vec<_> = repo.filter_by_title("a").map(|p| p.title.as_str()).collect();
        assert_eq!(a, ["Alpha", "Beta"]);

        let al: Vec<_> = repo.filter_by_title(" Al ").map(|p| p.title.as_str()).collect();
        assert_eq!(al, ["Alpha"]);

        assert_eq!(repo.filter_by_title("ALPHA").count(), 1);
        assert_eq!(repo.filter_by_title("zeta").count(), 0);
    }

    #[test]
    fn load_resets_selection() {
        let mut repo = empty_repo();
        repo.save("A".into(), "a".into());
        assert!(repo.selected_id().is_some());

        let reloaded = PromptRepository::load(PromptStore::new(
            StoreFixture::new().with_prompts(2).build(),
        ));
        assert!(reloaded.selected_id().is_none());
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        let store = PromptStore::new(InMemoryStore::new().failing_writes());
        let mut repo = PromptRepository::load(store);
        repo.save("A".into(), "a".into());
        assert_eq!(titles(&repo), ["A"]);
    }
}
