use crate::error::{PromptError, Result};
use crate::markup;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Shown to the user when a save is attempted with an empty title or content.
pub const EMPTY_FIELDS_MESSAGE: &str = "Título e conteúdo não podem estar vazios.";

pub const UNTITLED: &str = "Sem título";
pub const NO_CONTENT: &str = "Sem conteúdo";

/// Opaque prompt identifier.
///
/// New ids are random UUIDs, but any string read back from the store is
/// accepted so collections written with older id schemes keep loading.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(String);

impl PromptId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl From<&str> for PromptId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for PromptId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    /// Rich markup, e.g. `<p>Hello <b>there</b></p>`.
    pub content: String,
}

impl Prompt {
    pub fn new(title: String, content: String) -> Self {
        Self {
            id: PromptId::generate(),
            title,
            content,
        }
    }
}

/// A title/content pair that passed save validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDraft {
    title: String,
    content: String,
}

impl PromptDraft {
    /// Trims both fields and rejects the pair if the title is empty or the
    /// content renders to no visible text.
    pub fn new(title: &str, content: &str) -> Result<Self> {
        let title = title.trim();
        let content = content.trim();

        if title.is_empty() || markup::plain_text(content).trim().is_empty() {
            return Err(PromptError::Validation(EMPTY_FIELDS_MESSAGE.to_string()));
        }

        Ok(Self {
            title: title.to_string(),
            content: content.to_string(),
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}
