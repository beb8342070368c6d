// ui/binder.rs

use crate::model::{Catalog, SearchResult};
use crate::search::{search, suggest};
use crate::ui::render::render_result;
use crate::ui::{Disposition, Page, UiEvent};
use std::sync::Arc;
use tracing::{debug, info};

/// Event handlers over a loaded catalog. Only constructible once the catalog
/// exists, so nothing is bound while loading is still in progress.
pub struct UiBinder {
    catalog: Arc<Catalog>,
    currency_symbol: String,
    shown_suggestions: Vec<String>,
}

impl UiBinder {
    pub fn new(catalog: Arc<Catalog>, currency_symbol: &str) -> Self {
        Self {
            catalog,
            currency_symbol: currency_symbol.to_string(),
            shown_suggestions: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, page: &mut dyn Page, event: UiEvent) -> Disposition {
        match event {
            UiEvent::Submit => {
                self.on_submit(page);
                Disposition::PreventDefault
            }
            UiEvent::InputChanged => {
                self.on_input(page);
                Disposition::Continue
            }
            UiEvent::SuggestionClicked(index) => {
                self.on_suggestion_click(page, index);
                Disposition::Continue
            }
        }
    }

    fn on_submit(&self, page: &mut dyn Page) {
        let result = search(&page.input_value(), &self.catalog);
        match &result {
            SearchResult::Found { product_name, platform, cost } => {
                info!("🔎 {} → {} at {:.2}", product_name, platform, cost)
            }
            SearchResult::NotFound { query } => info!("🔎 {:?} not found", query),
        }
        page.set_result_html(&render_result(&result, &self.currency_symbol));
    }

    fn on_input(&mut self, page: &mut dyn Page) {
        self.shown_suggestions = suggest(&page.input_value(), self.catalog.names());
        page.show_suggestions(&self.shown_suggestions);
    }

    fn on_suggestion_click(&mut self, page: &mut dyn Page, index: usize) {
        let Some(choice) = self.shown_suggestions.get(index).cloned() else {
            debug!("Ignoring click on missing suggestion #{}", index);
            return;
        };
        page.set_input_value(&choice);
        self.shown_suggestions.clear();
        page.clear_suggestions();
    }
}
