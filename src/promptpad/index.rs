//! # Display Indexes
//!
//! Prompt ids are random UUIDs, which nobody wants to type. Clients that list
//! prompts in a terminal number them instead: `1` is the newest prompt, `2`
//! the one before it, and so on, following the stored collection order.
//!
//! A [`PromptSelector`] is what a user passes to name a prompt: either such a
//! display index, or a full id (anything that is not a positive number).
//! Indexes always refer to the unfiltered list, so `1` names the same prompt
//! whatever search is active.

use crate::error::{PromptError, Result};
use crate::model::{Prompt, PromptId};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSelector {
    Index(usize),
    Id(PromptId),
}

impl fmt::Display for PromptSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptSelector::Index(i) => write!(f, "{}", i),
            PromptSelector::Id(id) => write!(f, "{}", id),
        }
    }
}

impl FromStr for PromptSelector {
    type Err = PromptError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PromptError::Api("Empty prompt selector".to_string()));
        }
        match s.parse::<usize>() {
            Ok(0) => Err(PromptError::Api("Indexes start at 1".to_string())),
            Ok(n) => Ok(PromptSelector::Index(n)),
            Err(_) => Ok(PromptSelector::Id(PromptId::from(s))),
        }
    }
}

impl PromptSelector {
    /// Finds the prompt this selector names.
    pub fn resolve<'a>(&self, prompts: &'a [Prompt]) -> Result<&'a Prompt> {
        let found = match self {
            PromptSelector::Index(n) => n.checked_sub(1).and_then(|i| prompts.get(i)),
            PromptSelector::Id(id) => prompts.iter().find(|p| &p.id == id),
        };
        found.ok_or_else(|| PromptError::NotFound(self.to_string()))
    }
}

/// Pairs each prompt with its 1-based display index.
pub fn indexed(prompts: &[Prompt]) -> impl Iterator<Item = (usize, &Prompt)> {
    prompts.iter().enumerate().map(|(i, p)| (i + 1, p))
}

/// Display index of the prompt with `id`, if it is in `prompts`.
pub fn display_index(prompts: &[Prompt], id: &PromptId) -> Option<usize> {
    indexed(prompts).find(|(_, p)| &p.id == id).map(|(i, _)| i)
}
