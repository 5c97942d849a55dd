//! UI abstraction layer
//!
//! This module provides the backend-agnostic presentation interface the
//! controller renders through, plus status output for the CLI.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Controller                         │
//! │   (filter state, fetch results)         │
//! └────────────────┬────────────────────────┘
//!                  │ view models
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Presenter trait                    │
//! │  render_grid / render_categories /      │
//! │  show_detail / hide_detail / notify     │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ ViewState     │  │ RecordingPresenter│
//! │ (ratatui)     │  │ (headless)        │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Implementing a custom presenter
//!
//! ```
//! use storefront::render::{CategoryControl, GridView, ProductDetail};
//! use storefront::ui::Presenter;
//!
//! struct LinePresenter;
//!
//! impl Presenter for LinePresenter {
//!     fn render_grid(&mut self, view: GridView) {
//!         for card in view.cards() {
//!             println!("{} {}", card.title, card.price);
//!         }
//!     }
//!     fn render_categories(&mut self, _controls: Vec<CategoryControl>) {}
//!     fn show_detail(&mut self, detail: ProductDetail) {
//!         println!("{}", detail.description);
//!     }
//!     fn hide_detail(&mut self) {}
//! }
//! ```

mod error;
mod recording;
mod traits;

pub mod output;
pub mod ratatui_adapter;

pub use error::{Result, UiError};
pub use output::{MessageLevel, OutputWriter, StdoutWriter};
pub use recording::RecordingPresenter;
pub use traits::Presenter;
