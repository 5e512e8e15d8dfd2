//! The rendering surface the core draws on.
//!
//! Nothing in the core knows how fields, lists or the side panel are actually
//! drawn. It talks to a [`Surface`]: two editable regions (title and content),
//! an "is empty" flag on each region's wrapper, a list container, the panel
//! and a blocking alert. A browser host implements it over the DOM; the
//! terminal client and the tests use [`BufferSurface`].

use crate::panel::PanelView;
use crate::render::ListView;

/// One of the two editable regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Content,
}

impl Field {
    pub const ALL: [Field; 2] = [Field::Title, Field::Content];
}

pub trait Surface {
    /// Visible text of a field, markup stripped.
    fn plain_text(&self, field: Field) -> String;

    /// Raw markup of a field. The title region holds plain text only.
    fn markup(&self, field: Field) -> String;

    fn set_plain_text(&mut self, field: Field, text: &str);

    fn set_markup(&mut self, field: Field, markup: &str);

    /// Toggles the "is-empty" flag on the field's wrapper.
    fn set_empty_flag(&mut self, field: Field, empty: bool);

    fn focus(&mut self, field: Field);

    /// Replaces the list container's content.
    fn render_list(&mut self, view: &ListView);

    fn apply_panel(&mut self, view: PanelView);

    /// Blocking message to the user.
    fn alert(&mut self, message: &str);
}

/// A surface that keeps everything in memory.
#[derive(Debug, Default, Clone)]
pub struct BufferSurface {
    pub title: String,
    pub content: String,
    pub title_empty: bool,
    pub content_empty: bool,
    pub focused: Option<Field>,
    pub list: ListView,
    pub panel: Option<PanelView>,
    pub alerts: Vec<String>,
}

impl BufferSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty_flagged(&self, field: Field) -> bool {
        match field {
            Field::Title => self.title_empty,
            Field::Content => self.content_empty,
        }
    }

    /// Simulates the user typing into a field, replacing its content.
    pub fn type_into(&mut self, field: Field, text: &str) {
        self.set_markup(field, text);
    }

    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::Title => &mut self.title,
            Field::Content => &mut self.content,
        }
    }
}

impl Surface for BufferSurface {
    fn plain_text(&self, field: Field) -> String {
        match field {
            Field::Title => crate::markup::plain_text(&self.title),
            Field::Content => crate::markup::plain_text(&self.content),
        }
    }

    fn markup(&self, field: Field) -> String {
        match field {
            Field::Title => self.title.clone(),
            Field::Content => self.content.clone(),
        }
    }

    fn set_plain_text(&mut self, field: Field, text: &str) {
        *self.slot(field) = html_escape::encode_text(text).into_owned();
    }

    fn set_markup(&mut self, field: Field, markup: &str) {
        *self.slot(field) = markup.to_string();
    }

    fn set_empty_flag(&mut self, field: Field, empty: bool) {
        match field {
            Field::Title => self.title_empty = empty,
            Field::Content => self.content_empty = empty,
        }
    }

    fn focus(&mut self, field: Field) {
        self.focused = Some(field);
    }

    fn render_list(&mut self, view: &ListView) {
        self.list = view.clone();
    }

    fn apply_panel(&mut self, view: PanelView) {
        self.panel = Some(view);
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_round_trips_through_escaping() {
        let mut surface = BufferSurface::new();
        surface.set_plain_text(Field::Title, "a < b & c");
        assert_eq!(surface.markup(Field::Title), "a &lt; b &amp; c");
        assert_eq!(surface.plain_text(Field::Title), "a < b & c");
    }

    #[test]
    fn markup_is_stored_verbatim() {
        let mut surface = BufferSurface::new();
        surface.set_markup(Field::Content, "<p>hi <i>you</i></p>");
        assert_eq!(surface.markup(Field::Content), "<p>hi <i>you</i></p>");
        assert_eq!(surface.plain_text(Field::Content), "hi you");
    }
}
