//! Core traits for the presentation layer

use super::output::MessageLevel;
use crate::render::{CategoryControl, GridView, ProductDetail};

/// Presentation surface driven by the controller
///
/// The controller never touches a concrete UI toolkit. After each state
/// change it hands finished view models to a `Presenter`, which only has
/// to show them. Implementations exist for the terminal
/// ([`super::ratatui_adapter::ViewState`]) and for headless recording
/// ([`super::RecordingPresenter`]).
pub trait Presenter {
    /// Replace the grid area with cards or a placeholder
    fn render_grid(&mut self, view: GridView);

    /// Replace the category control group
    ///
    /// Never called when the category fetch failed, so implementations
    /// simply keep showing no controls.
    fn render_categories(&mut self, controls: Vec<CategoryControl>);

    /// Open the detail overlay for one product
    fn show_detail(&mut self, detail: ProductDetail);

    /// Close the detail overlay, leaving the grid as it was
    fn hide_detail(&mut self);

    /// Show a transient status message
    fn notify(&mut self, level: MessageLevel, message: &str) {
        let _ = (level, message);
    }
}
