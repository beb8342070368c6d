// UI module: the page capability the binder drives, and its terminal implementation.

pub mod binder;
pub mod console;
pub mod render;

pub use binder::UiBinder;
pub use console::ConsolePage;

/// Identifiers of the elements a host page exposes.
pub const SEARCH_FORM_ID: &str = "search-form";
pub const SEARCH_INPUT_ID: &str = "search";
pub const RESULT_ID: &str = "result";
pub const SUGGESTIONS_ID: &str = "suggestions-container";
pub const SUGGESTION_ITEM_CLASS: &str = "suggestion-item";

/// The externally owned page: search input, result container and suggestions container.
pub trait Page {
    fn input_value(&self) -> String;
    fn set_input_value(&mut self, value: &str);
    /// Replaces the result container's content with trusted HTML.
    fn set_result_html(&mut self, html: &str);
    /// Replaces the suggestions container with one clickable entry per item.
    fn show_suggestions(&mut self, items: &[String]);
    fn clear_suggestions(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    Submit,
    InputChanged,
    SuggestionClicked(usize),
}

/// Whether the host should still run its default action for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    Continue,
    PreventDefault,
}
