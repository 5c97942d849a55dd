//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for storefront using the `clap`
//! crate.
//!
//! # Commands
//!
//! - **browse**: Interactive catalog browser (default)
//! - **list**: Fetch, filter, and print products
//! - **categories**: Print the category list
//! - **config**: Show or initialize the configuration file
//!
//! # Examples
//!
//! ```
//! use storefront::cli::{Cli, Commands};
//! use clap::Parser;
//!
//! let cli = Cli::parse_from(["storefront", "list", "--category", "jewelery"]);
//! match cli.get_command() {
//!     Commands::List { filter, .. } => {
//!         assert_eq!(filter.to_filter_state().category().label(), "jewelery");
//!     }
//!     _ => unreachable!(),
//! }
//! ```

use crate::filter::{CategoryFilter, FilterState};
use crate::output::OutputFormat;
use clap::{Args, Parser, Subcommand};

/// Query and category flags shared by `browse` and `list`
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Free-text query matched against title and description
    #[arg(short = 's', long = "query", value_name = "QUERY")]
    pub query: Option<String>,

    /// Only show products in this category ("all" for every category)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,
}

impl FilterArgs {
    /// Build the initial filter state from the flags
    #[must_use]
    pub fn to_filter_state(&self) -> FilterState {
        let category = self
            .category
            .as_deref()
            .map_or(CategoryFilter::All, CategoryFilter::parse);
        FilterState::new(self.query.clone().unwrap_or_default(), category)
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "storefront")]
#[command(about = "Browse a product catalog in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Base URL of the catalog service (overrides config)
    #[arg(long = "endpoint", value_name = "URL", global = true)]
    pub endpoint: Option<String>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Open the interactive catalog browser (default)
    #[command(visible_alias = "b")]
    Browse {
        #[command(flatten)]
        filter: FilterArgs,
    },

    /// Print products matching a query and category
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filter: FilterArgs,

        /// Output format
        #[arg(short = 'o', long = "format", value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the category list
    #[command(visible_alias = "cats")]
    Categories,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Write the effective configuration to the config file
    Init,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to Browse if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Browse {
            filter: FilterArgs::default(),
        })
    }
}
