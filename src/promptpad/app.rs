//! # Command Dispatcher
//!
//! [`App`] is the application state for one session: the repository, the
//! surface it draws on, the clipboard, the side panel and the current search
//! text. It is built once at startup by [`App::start`] and every user intent
//! reaches it as a [`Command`] through [`App::dispatch`].
//!
//! Each command runs to completion before the next one is handled. The flow
//! is always the same: mutate the repository (which writes through to the
//! store), then redraw what changed on the surface.
//!
//! ## Failures
//!
//! - A save with an empty title or content is alerted on the surface and
//!   returned as [`PromptError::Validation`]; nothing is mutated or persisted.
//! - Store and clipboard failures are logged and swallowed. The in-memory
//!   state stays authoritative.

use crate::clipboard::Clipboard;
use crate::editor;
use crate::error::{PromptError, Result};
use crate::markup;
use crate::model::{Prompt, PromptId};
use crate::panel::Panel;
use crate::render::{ListAction, ListRenderer};
use crate::repository::{PromptRepository, SaveOutcome};
use crate::store::{KeyValueStore, PromptStore};
use crate::surface::{Field, Surface};

/// A user intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Save the editor fields, updating the selected prompt or creating one.
    Save,
    /// Clear the editor to start a new prompt.
    New,
    /// Copy the content field's text to the clipboard.
    Copy,
    /// The search box changed.
    Search(String),
    /// The user typed into a field.
    Input(Field),
    /// A click on a list entry.
    List(ListAction, PromptId),
    OpenPanel,
    CollapsePanel,
}

/// What a dispatched command did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatched {
    Saved(SaveOutcome),
    Cleared,
    Copied(bool),
    Filtered,
    InputTracked,
    Selected(Option<Prompt>),
    Removed(Option<Prompt>),
    PanelChanged,
}

pub struct App<S: KeyValueStore, U: Surface, C: Clipboard> {
    repo: PromptRepository<S>,
    surface: U,
    clipboard: C,
    renderer: ListRenderer,
    panel: Panel,
    search: String,
}

impl<S: KeyValueStore, U: Surface, C: Clipboard> App<S, U, C> {
    /// Loads the stored prompts and draws the initial screen.
    pub fn start(store: PromptStore<S>, surface: U, clipboard: C, renderer: ListRenderer) -> Self {
        let mut app = Self {
            repo: PromptRepository::load(store),
            surface,
            clipboard,
            renderer,
            panel: Panel::new(),
            search: String::new(),
        };
        app.render_list();
        editor::update_all_empty_states(&mut app.surface);
        app.surface.apply_panel(app.panel.view());
        app
    }

    pub fn repository(&self) -> &PromptRepository<S> {
        &self.repo
    }

    pub fn surface(&self) -> &U {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut U {
        &mut self.surface
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn search_text(&self) -> &str {
        &self.search
    }

    pub fn dispatch(&mut self, command: Command) -> Result<Dispatched> {
        tracing::trace!(?command, "dispatch");
        match command {
            Command::Save => self.save(),
            Command::New => {
                self.new_prompt();
                Ok(Dispatched::Cleared)
            }
            Command::Copy => Ok(Dispatched::Copied(self.copy_selected())),
            Command::Search(text) => {
                self.search = text;
                self.render_list();
                Ok(Dispatched::Filtered)
            }
            Command::Input(field) => {
                editor::update_empty_state(&mut self.surface, field);
                Ok(Dispatched::InputTracked)
            }
            Command::List(ListAction::Select, id) => Ok(Dispatched::Selected(self.select(id))),
            Command::List(ListAction::Remove, id) => Ok(Dispatched::Removed(self.remove(&id))),
            Command::OpenPanel => {
                let view = self.panel.open();
                self.surface.apply_panel(view);
                Ok(Dispatched::PanelChanged)
            }
            Command::CollapsePanel => {
                let view = self.panel.collapse();
                self.surface.apply_panel(view);
                Ok(Dispatched::PanelChanged)
            }
        }
    }

    fn save(&mut self) -> Result<Dispatched> {
        let draft = match editor::extract_for_save(&self.surface) {
            Ok(draft) => draft,
            Err(PromptError::Validation(message)) => {
                self.surface.alert(&message);
                return Err(PromptError::Validation(message));
            }
            Err(e) => return Err(e),
        };

        let (title, content) = draft.into_parts();
        let outcome = self.repo.save(title, content);
        self.render_list();
        Ok(Dispatched::Saved(outcome))
    }

    fn new_prompt(&mut self) {
        self.repo.clear_selection();
        editor::clear(&mut self.surface);
    }

    fn select(&mut self, id: PromptId) -> Option<Prompt> {
        self.repo.select(id.clone());
        let prompt = self.repo.find_by_id(&id)?;
        editor::load_into_editor(&mut self.surface, prompt);
        Some(prompt.clone())
    }

    fn remove(&mut self, id: &PromptId) -> Option<Prompt> {
        let removed = self.repo.remove(id);
        self.render_list();
        removed
    }

    /// Copies the visible text of the content field. Returns whether it worked.
    fn copy_selected(&mut self) -> bool {
        let text = markup::inner_text(&self.surface.markup(Field::Content));
        match self.clipboard.write_text(&text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "failed to copy to clipboard");
                false
            }
        }
    }

    fn render_list(&mut self) {
        let view = self.renderer.render(self.repo.prompts(), &self.search);
        self.surface.render_list(&view);
    }
}
