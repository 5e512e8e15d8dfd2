//! # List Rendering
//!
//! [`ListRenderer::render`] projects the prompt collection, filtered by title,
//! into a [`ListView`]. It is a pure function of its inputs and rebuilds the
//! whole view every call.
//!
//! Each entry carries the id of its prompt and exposes the two actions a user
//! can take on it ([`ListAction::Select`], [`ListAction::Remove`]) as typed
//! commands. Hosts that draw the list as HTML use [`ListView::to_html`]; the
//! fragment tags every item with `data-id` and every clickable part with
//! `data-action`, which [`ListAction::from_str`] turns back into an action.

use crate::app::Command;
use crate::error::{PromptError, Result};
use crate::markup;
use crate::model::{Prompt, PromptId};
use crate::repository::filter_by_title;
use minijinja::{context, Environment};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

pub const NO_PROMPTS_FOUND: &str = "Nenhum prompt encontrado.";
pub const DEFAULT_PREVIEW_CHARS: usize = 80;

const LIST_TEMPLATE: &str = r#"{% for item in items -%}
{% if item.kind == "prompt" -%}
<li class="prompt-item" data-id="{{ item.id }}" data-action="select">
  <div class="prompt-item-left">
    <div class="prompt-item-title">{{ item.title }}</div>
    <div class="prompt-item-description">{{ item.preview }}</div>
  </div>
  <button class="btn-icon" title="Remover" data-action="remove"></button>
</li>
{% else -%}
<li class="prompt-item">{{ item.message }}</li>
{% endif -%}
{% endfor %}"#;

/// What a click on a list item asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListAction {
    Select,
    Remove,
}

impl ListAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListAction::Select => "select",
            ListAction::Remove => "remove",
        }
    }
}

impl fmt::Display for ListAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListAction {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "select" => Ok(ListAction::Select),
            "remove" => Ok(ListAction::Remove),
            other => Err(PromptError::Api(format!("Unknown list action: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub id: PromptId,
    pub title: String,
    pub preview: String,
}

impl ListEntry {
    /// The command this entry dispatches for `action`.
    pub fn command(&self, action: ListAction) -> Command {
        Command::List(action, self.id.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListItem {
    Prompt(ListEntry),
    Placeholder { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListView {
    pub items: Vec<ListItem>,
}

impl ListView {
    /// Prompt entries, skipping the placeholder.
    pub fn entries(&self) -> impl Iterator<Item = &ListEntry> {
        self.items.iter().filter_map(|item| match item {
            ListItem::Prompt(entry) => Some(entry),
            ListItem::Placeholder { .. } => None,
        })
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self.items.as_slice(), [ListItem::Placeholder { .. }])
    }

    /// HTML list fragment, every value escaped.
    pub fn to_html(&self) -> Result<String> {
        let mut env = Environment::new();
        env.add_template("list.html", LIST_TEMPLATE)
            .map_err(|e| PromptError::Api(format!("Invalid list template: {}", e)))?;
        let template = env
            .get_template("list.html")
            .map_err(|e| PromptError::Api(e.to_string()))?;
        template
            .render(context! { items => &self.items })
            .map_err(|e| PromptError::Api(format!("Failed to render list: {}", e)))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct ListRenderer {
    preview_chars: usize,
}

impl Default for ListRenderer {
    fn default() -> Self {
        Self::new(DEFAULT_PREVIEW_CHARS)
    }
}

impl ListRenderer {
    pub fn new(preview_chars: usize) -> Self {
        Self { preview_chars }
    }

    pub fn render(&self, prompts: &[Prompt], filter: &str) -> ListView {
        let mut items: Vec<ListItem> = filter_by_title(prompts, filter)
            .map(|p| {
                ListItem::Prompt(ListEntry {
                    id: p.id.clone(),
                    title: p.title.clone(),
                    preview: markup::preview(&p.content, self.preview_chars),
                })
            })
            .collect();

        if items.is_empty() {
            items.push(ListItem::Placeholder {
                message: NO_PROMPTS_FOUND.to_string(),
            });
        }

        ListView { items }
    }
}
