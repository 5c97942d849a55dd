//! Storefront CLI application entry point
//!
//! Browse a remote product catalog in the terminal, or list and filter it
//! from scripts.
//!
//! # Usage
//!
//! ```bash
//! # Browse interactively (default command)
//! storefront
//! storefront browse --query shirt --category "men's clothing"
//!
//! # Print matching products
//! storefront list --query backpack
//! storefront ls -c jewelery --format csv
//!
//! # Print the category list
//! storefront categories
//!
//! # Use another catalog service
//! storefront --endpoint http://localhost:3000 list
//! ```
//!
//! # Configuration
//!
//! Settings are read from the user's config directory
//! (`~/.config/storefront/config.toml` on Linux) and `STOREFRONT_*`
//! environment variables. Logs go to `storefront.log` in the local data
//! directory; set `RUST_LOG` to change verbosity.

use std::io;
use std::sync::Arc;
use storefront::{
    Catalog, CategoryFilter, StorefrontError,
    catalog::{CatalogSource, HttpCatalogSource},
    cli::{Cli, Commands, ConfigCommands, FilterArgs},
    config::StorefrontConfig,
    filter, logging,
    output::{self, OutputFormat},
    render::Placeholder,
    ui::{OutputWriter, StdoutWriter, ratatui_adapter::CatalogBrowser},
};

type Result<T> = std::result::Result<T, StorefrontError>;

/// Build the HTTP catalog source for the configured endpoint
fn http_source(config: &StorefrontConfig) -> Result<Arc<HttpCatalogSource>> {
    Ok(Arc::new(HttpCatalogSource::new(&config.endpoint)?))
}

/// Handle the browse command
fn handle_browse_command(source: Arc<dyn CatalogSource>, filter: &FilterArgs) -> Result<()> {
    CatalogBrowser::new().run(source, filter.to_filter_state())?;
    Ok(())
}

/// Handle the list command
///
/// An unknown category is not an error: it is reported as a warning and the
/// listing is simply empty.
fn handle_list_command(
    source: &dyn CatalogSource,
    filter: &FilterArgs,
    format: OutputFormat,
    output: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let catalog = Catalog::new(source.fetch_products()?);
    let state = filter.to_filter_state();

    if let CategoryFilter::Only(name) = state.category()
        && !catalog.contains_category(name)
    {
        output.warning(&format!(
            "Unknown category '{name}'. Known categories: {}",
            catalog.distinct_categories().join(", ")
        ));
    }

    let matches = filter::apply(catalog.products(), &state);

    if format == OutputFormat::Text && matches.is_empty() {
        output.info(Placeholder::NoMatches.message());
        return Ok(());
    }

    output::write_products(io::stdout().lock(), &matches, format, quiet)?;

    if format == OutputFormat::Text {
        output.info(&format!("{} of {} product(s)", matches.len(), catalog.len()));
    }
    Ok(())
}

/// Handle the categories command
fn handle_categories_command(source: &dyn CatalogSource, quiet: bool) -> Result<()> {
    for category in source.fetch_categories()? {
        println!("{}", output::format_category_line(&category, quiet));
    }
    Ok(())
}

/// Handle config subcommands
fn handle_config_command(
    config: &StorefrontConfig,
    command: ConfigCommands,
    output: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let toml_string = toml::to_string_pretty(config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            print!("{toml_string}");
        }
        ConfigCommands::Path => {
            println!("{}", StorefrontConfig::config_path()?.display());
        }
        ConfigCommands::Init => {
            config.save()?;
            output.success(&format!(
                "Wrote {}",
                StorefrontConfig::config_path()?.display()
            ));
        }
    }
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let config = StorefrontConfig::load()?.with_overrides(cli.endpoint.clone(), cli.quiet);

    if let Some(path) = config.log_path()
        && let Err(e) = logging::init(&path)
    {
        eprintln!("Warning: could not open log file {}: {e}", path.display());
    }

    let output = StdoutWriter::new(config.quiet);
    let command = cli.get_command();
    tracing::debug!(?command, endpoint = %config.endpoint, "dispatching command");

    match command {
        Commands::Config { command } => handle_config_command(&config, command, &output),
        Commands::Browse { filter } => handle_browse_command(http_source(&config)?, &filter),
        Commands::List { filter, format } => handle_list_command(
            &*http_source(&config)?,
            &filter,
            format,
            &output,
            config.quiet,
        ),
        Commands::Categories => handle_categories_command(&*http_source(&config)?, config.quiet),
    }
}

fn main() {
    if let Err(e) = run() {
        tracing::error!(error = %e, "exiting with error");
        StdoutWriter::default().error(&e.to_string());
        std::process::exit(1);
    }
}
