//! Editor panel: the title and content fields on the [`Surface`].
//!
//! The panel holds no state of its own; the surface is the field storage and
//! the repository owns the selection.

use crate::error::Result;
use crate::model::{Prompt, PromptDraft};
use crate::surface::{Field, Surface};

/// Shows `prompt` in the editor fields.
pub fn load_into_editor<U: Surface>(surface: &mut U, prompt: &Prompt) {
    surface.set_plain_text(Field::Title, &prompt.title);
    surface.set_markup(Field::Content, &prompt.content);
    update_all_empty_states(surface);
}

/// Empties both fields and puts the cursor in the title, ready for a new prompt.
pub fn clear<U: Surface>(surface: &mut U) {
    surface.set_plain_text(Field::Title, "");
    surface.set_plain_text(Field::Content, "");
    update_all_empty_states(surface);
    surface.focus(Field::Title);
}

/// Reads the fields for saving.
///
/// The title is its trimmed plain text, the content its trimmed markup.
/// Content with no visible text counts as empty whatever its markup.
pub fn extract_for_save<U: Surface>(surface: &U) -> Result<PromptDraft> {
    let title = surface.plain_text(Field::Title);
    let content = surface.markup(Field::Content);
    PromptDraft::new(&title, &content)
}

/// Flags the field's wrapper as empty when it has no visible text.
pub fn update_empty_state<U: Surface>(surface: &mut U, field: Field) {
    let empty = surface.plain_text(field).trim().is_empty();
    surface.set_empty_flag(field, empty);
}

pub fn update_all_empty_states<U: Surface>(surface: &mut U) {
    for field in Field::ALL {
        update_empty_state(surface, field);
    }
}
