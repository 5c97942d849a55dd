//! Output formatting for CLI display
//!
//! Formats product listings for the non-interactive commands as aligned
//! text rows, JSON, or CSV.

use crate::catalog::{Product, ProductId};
use crate::render::{StarRating, format_price, format_rating};
use clap::ValueEnum;
use colored::Colorize;
use serde::Serialize;
use std::io::Write;

/// Output format for `list`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable rows
    #[default]
    Text,
    /// JSON array of product records
    Json,
    /// CSV with a header row
    Csv,
}

/// Flat record used for CSV output
#[derive(Debug, Serialize)]
struct ProductRow<'a> {
    id: ProductId,
    title: &'a str,
    category: &'a str,
    price: f64,
    rating: f64,
    rating_count: Option<u32>,
    image: &'a str,
}

impl<'a> From<&'a Product> for ProductRow<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            id: product.id,
            title: &product.title,
            category: &product.category,
            price: product.price,
            rating: product.effective_rating(),
            rating_count: product.rating.as_ref().map(|r| r.count),
            image: &product.image,
        }
    }
}

/// Format a product as one listing line
///
/// Quiet mode prints only the identifier and title, tab separated.
#[must_use]
pub fn format_product_line(product: &Product, quiet: bool) -> String {
    if quiet {
        return format!("{}\t{}", product.id, product.title);
    }
    let score = product.effective_rating();
    format!(
        "  {:>4}  {}  [{}]  {}  {} {}",
        format!("#{}", product.id).dimmed(),
        product.title.bold(),
        product.category.magenta(),
        format_price(product.price).green(),
        StarRating::from_score(score).to_string().yellow(),
        format_rating(score),
    )
}

/// Format a category label for the `categories` listing
#[must_use]
pub fn format_category_line(category: &str, quiet: bool) -> String {
    if quiet {
        category.to_string()
    } else {
        format!("  {}", category.magenta())
    }
}

/// Write products in the requested format
///
/// # Errors
///
/// Returns an error if writing fails or the records cannot be serialized.
pub fn write_products<W: Write>(
    mut writer: W,
    products: &[&Product],
    format: OutputFormat,
    quiet: bool,
) -> crate::Result<()> {
    match format {
        OutputFormat::Text => {
            for product in products {
                writeln!(writer, "{}", format_product_line(product, quiet))?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, products)?;
            writeln!(writer)?;
        }
        OutputFormat::Csv => {
            let mut csv_writer = csv::Writer::from_writer(writer);
            for product in products {
                csv_writer.serialize(ProductRow::from(*product))?;
            }
            csv_writer.flush()?;
        }
    }
    Ok(())
}
