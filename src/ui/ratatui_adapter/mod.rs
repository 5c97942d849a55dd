//! Ratatui-based catalog browser
//!
//! Terminal implementation of the [`Presenter`](crate::ui::Presenter)
//! interface built on ratatui (widgets) and crossterm (terminal and key
//! events).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           CatalogBrowser                    │
//! │  (event loop, owns the Controller)          │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ ViewState  │ │  Ratatui  │ │ Crossterm │
//! │ (Presenter)│ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! # Features
//!
//! - **Live filtering** on every keystroke
//! - **Category bar** cycled with Tab / Shift+Tab
//! - **Card grid** that reflows with the terminal width
//! - **Details overlay** with add-to-cart and open-image actions
//! - **Status bar** for messages
//! - **Help overlay** (F1)

mod browser;
mod events;
mod state;
mod theme;
pub mod widgets;

pub use browser::CatalogBrowser;
pub use events::{EventResult, handle_key};
pub use state::{Mode, StatusMessage, ViewState};
pub use theme::Theme;
