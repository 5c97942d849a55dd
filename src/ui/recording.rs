//! Headless presenter that records what it was asked to show

use super::output::MessageLevel;
use super::traits::Presenter;
use crate::render::{CategoryControl, GridView, ProductDetail};

/// Presenter that keeps the latest view models in memory
///
/// Useful for driving the controller without a terminal, e.g. in tests or
/// scripted runs. Render counters make "re-rendered on every change"
/// observable.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    /// Latest grid content
    pub grid: GridView,
    /// Latest category controls; `None` until categories were rendered once
    pub categories: Option<Vec<CategoryControl>>,
    /// Detail overlay content while it is open
    pub detail: Option<ProductDetail>,
    /// Every status message in order
    pub messages: Vec<(MessageLevel, String)>,
    /// Number of `render_grid` calls
    pub grid_renders: usize,
    /// Number of `render_categories` calls
    pub category_renders: usize,
}

impl RecordingPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identifiers of the cards currently shown
    #[must_use]
    pub fn card_ids(&self) -> Vec<u64> {
        self.grid.cards().iter().map(|card| card.id).collect()
    }

    /// Label of the active category control, if controls are shown
    #[must_use]
    pub fn active_category(&self) -> Option<&str> {
        self.categories
            .as_ref()?
            .iter()
            .find(|control| control.active)
            .map(|control| control.label.as_str())
    }
}

impl Presenter for RecordingPresenter {
    fn render_grid(&mut self, view: GridView) {
        self.grid = view;
        self.grid_renders += 1;
    }

    fn render_categories(&mut self, controls: Vec<CategoryControl>) {
        self.categories = Some(controls);
        self.category_renders += 1;
    }

    fn show_detail(&mut self, detail: ProductDetail) {
        self.detail = Some(detail);
    }

    fn hide_detail(&mut self) {
        self.detail = None;
    }

    fn notify(&mut self, level: MessageLevel, message: &str) {
        self.messages.push((level, message.to_string()));
    }
}
