//! Render pipeline
//!
//! Projects products and categories into presentational view models. The
//! models carry display-ready text (formatted price, rating label, resolved
//! image URI) so that every presenter shows the same thing.
//!
//! - [`render_grid`] produces one [`ProductCard`] per product, or a single
//!   [`Placeholder`] when there is nothing to show
//! - [`render_categories`] produces the category control group, with the
//!   implicit "all" control first and exactly one control active
//! - [`render_detail`] produces the content of the detail overlay

use crate::catalog::{Product, ProductId};
use crate::filter::CategoryFilter;
use reqwest::Url;
use std::fmt;

/// Image shown when a product's own image reference cannot be used
pub const PLACEHOLDER_IMAGE: &str = "https://placehold.co/300x300/F0EEED/000000?text=Product";

/// Number of units in the star indicator
pub const STAR_COUNT: u8 = 5;

/// Absorbs binary floating-point error before truncating to cents
const CENT_EPSILON: f64 = 1e-6;

/// Format a price as dollars with exactly two decimals
///
/// Fractions of a cent are truncated, so `19.999` renders as `$19.99`.
#[must_use]
pub fn format_price(price: f64) -> String {
    let cents = (price * 100.0 + CENT_EPSILON.copysign(price)).trunc();
    format!("${:.2}", cents / 100.0)
}

/// Format a rating score as `"4.0/5"`
#[must_use]
pub fn format_rating(score: f64) -> String {
    format!("{score:.1}/{STAR_COUNT}")
}

/// Five-unit star indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarRating {
    filled: u8,
}

impl StarRating {
    /// Fill `floor(score)` units, clamped to the indicator size
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let filled = score.floor().clamp(0.0, f64::from(STAR_COUNT)) as u8;
        Self { filled }
    }

    #[must_use]
    pub const fn filled(&self) -> u8 {
        self.filled
    }

    #[must_use]
    pub const fn empty(&self) -> u8 {
        STAR_COUNT - self.filled
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.filled {
            f.write_str("★")?;
        }
        for _ in 0..self.empty() {
            f.write_str("☆")?;
        }
        Ok(())
    }
}

/// Image reference after fallback resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// URI to display or open
    pub uri: String,
    /// True when the product's own reference was unusable
    pub is_placeholder: bool,
}

impl ImageRef {
    /// Use the product's image when it is an absolute http(s) URL
    #[must_use]
    pub fn resolve(raw: &str) -> Self {
        let usable = Url::parse(raw.trim())
            .is_ok_and(|url| matches!(url.scheme(), "http" | "https") && url.has_host());
        if usable {
            Self {
                uri: raw.trim().to_string(),
                is_placeholder: false,
            }
        } else {
            Self::placeholder()
        }
    }

    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            uri: PLACEHOLDER_IMAGE.to_string(),
            is_placeholder: true,
        }
    }
}

/// One product card in the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    pub id: ProductId,
    pub title: String,
    pub category: String,
    pub price: String,
    pub stars: StarRating,
    pub rating: String,
    pub image: ImageRef,
}

/// Message shown in place of cards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    /// Products have not arrived yet
    Loading,
    /// The filter matched nothing
    NoMatches,
    /// The product fetch failed
    FetchFailed,
}

impl Placeholder {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::Loading => "Loading products...",
            Self::NoMatches => "No products found matching your criteria.",
            Self::FetchFailed => "Failed to load products. Please try again later.",
        }
    }

    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::FetchFailed)
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Content of the grid area
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridView {
    Cards(Vec<ProductCard>),
    Placeholder(Placeholder),
}

impl GridView {
    /// Cards in display order; empty for a placeholder
    #[must_use]
    pub fn cards(&self) -> &[ProductCard] {
        match self {
            Self::Cards(cards) => cards,
            Self::Placeholder(_) => &[],
        }
    }

    #[must_use]
    pub const fn placeholder(&self) -> Option<Placeholder> {
        match self {
            Self::Cards(_) => None,
            Self::Placeholder(placeholder) => Some(*placeholder),
        }
    }
}

impl Default for GridView {
    fn default() -> Self {
        Self::Placeholder(Placeholder::Loading)
    }
}

/// A selectable category control
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryControl {
    pub label: String,
    pub filter: CategoryFilter,
    pub active: bool,
}

/// Content of the detail overlay
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetail {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub stars: StarRating,
    pub rating: String,
    /// Number of ratings, when the store reported any
    pub rating_count: Option<u32>,
    pub image: ImageRef,
}

/// Project a single product into a card
#[must_use]
pub fn render_card(product: &Product) -> ProductCard {
    let score = product.effective_rating();
    ProductCard {
        id: product.id,
        title: product.title.clone(),
        category: product.category.clone(),
        price: format_price(product.price),
        stars: StarRating::from_score(score),
        rating: format_rating(score),
        image: ImageRef::resolve(&product.image),
    }
}

/// Project a filtered product subset into the grid
///
/// An empty subset yields exactly one [`Placeholder::NoMatches`].
#[must_use]
pub fn render_grid(products: &[&Product]) -> GridView {
    if products.is_empty() {
        GridView::Placeholder(Placeholder::NoMatches)
    } else {
        GridView::Cards(products.iter().map(|p| render_card(p)).collect())
    }
}

/// Project category labels into controls, "all" first
///
/// Exactly one control is active. If `active` names a label that is not in
/// `categories`, the "all" control is marked active instead.
#[must_use]
pub fn render_categories(categories: &[String], active: &CategoryFilter) -> Vec<CategoryControl> {
    let known = active.is_all() || categories.iter().any(|c| active.matches(c));
    let all_active = !known || active.is_all();

    let mut controls = Vec::with_capacity(categories.len() + 1);
    controls.push(CategoryControl {
        label: CategoryFilter::All.label().to_string(),
        filter: CategoryFilter::All,
        active: all_active,
    });

    let mut marked = all_active;
    for category in categories {
        let is_active = !marked && active.matches(category);
        marked |= is_active;
        controls.push(CategoryControl {
            label: category.clone(),
            filter: CategoryFilter::Only(category.clone()),
            active: is_active,
        });
    }
    controls
}

/// Project a product into the detail overlay
#[must_use]
pub fn render_detail(product: &Product) -> ProductDetail {
    let score = product.effective_rating();
    ProductDetail {
        id: product.id,
        title: product.title.clone(),
        description: product.description.clone(),
        category: product.category.clone(),
        price: format_price(product.price),
        stars: StarRating::from_score(score),
        rating: format_rating(score),
        rating_count: product.rating.as_ref().map(|r| r.count),
        image: ImageRef::resolve(&product.image),
    }
}
