//! Storefront - a terminal catalog browser
//!
//! This library fetches a product catalog from a remote store API and
//! provides the filter/render pipeline behind the interactive browser:
//! a pure filter engine, view-model projection, and a controller that
//! re-renders through a [`ui::Presenter`] on every state change.

use thiserror::Error;

pub mod catalog;
pub mod cli;
pub mod config;
pub mod controller;
pub mod filter;
pub mod logging;
pub mod output;
pub mod render;
pub mod ui;

pub use catalog::{Catalog, Product, ProductId, Rating};
pub use controller::Controller;
pub use filter::{CategoryFilter, FilterState};

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Catalog retrieval error
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Terminal UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// JSON output error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    /// CSV output error
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
}

/// Result type used across the crate's top-level operations
pub type Result<T> = std::result::Result<T, StorefrontError>;
