//! Ratatui widgets for the catalog browser
//!
//! Custom widgets for rendering the browser interface.

mod category_bar;
mod details_modal;
mod help_bar;
mod help_overlay;
mod product_grid;
mod search_bar;
mod status_bar;

pub use category_bar::CategoryBar;
pub use details_modal::DetailsModal;
pub use help_bar::{HelpBar, KeyHint};
pub use help_overlay::HelpOverlay;
pub use product_grid::{CARD_HEIGHT, CARD_WIDTH, ProductGrid, truncate};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
