//! Catalog records and the in-memory product index
//!
//! Products arrive from the store API as a JSON array and are kept in
//! arrival order. A [`Catalog`] wraps that list together with an
//! identifier-keyed index built once, so detail lookups never scan the list.
//!
//! # Wire format
//!
//! ```json
//! {
//!   "id": 1,
//!   "title": "Fjallraven Backpack",
//!   "price": 109.95,
//!   "description": "Your perfect pack for everyday use",
//!   "category": "men's clothing",
//!   "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
//!   "rating": { "rate": 3.9, "count": 120 }
//! }
//! ```
//!
//! Text fields that are missing or `null` decode as empty strings, and a
//! missing `rating` decodes as `None`.

mod error;
pub mod source;

pub use error::{CatalogError, Result};
pub use source::{CatalogSource, FetchEvent, HttpCatalogSource, spawn_fetches};

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Stable product identifier assigned by the store
pub type ProductId = u64;

/// Score used when a product carries no rating
///
/// This mirrors the storefront's historical filler value rather than a
/// computed average.
pub const DEFAULT_RATING: f64 = 4.0;

/// Average customer score and number of votes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0 to 5
    #[serde(default)]
    pub rate: f64,
    /// Number of ratings behind the average
    #[serde(default)]
    pub count: u32,
}

impl Rating {
    #[must_use]
    pub const fn new(rate: f64, count: u32) -> Self {
        Self { rate, count }
    }
}

/// A single catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(default)]
    pub price: f64,
    /// Image URI as delivered by the store; may be empty or broken
    #[serde(default, deserialize_with = "null_as_default")]
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,
}

impl Product {
    /// Create a product with the fields every listing shows
    #[must_use]
    pub fn new(
        id: ProductId,
        title: impl Into<String>,
        category: impl Into<String>,
        price: f64,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            category: category.into(),
            price,
            image: String::new(),
            rating: None,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = image.into();
        self
    }

    #[must_use]
    pub const fn with_rating(mut self, rate: f64, count: u32) -> Self {
        self.rating = Some(Rating::new(rate, count));
        self
    }

    /// Rating score used for display; [`DEFAULT_RATING`] only when no rating was sent
    #[must_use]
    pub fn effective_rating(&self) -> f64 {
        self.rating.as_ref().map_or(DEFAULT_RATING, |r| r.rate)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// The full product list plus an identifier index
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Build a catalog, indexing products by identifier
    ///
    /// When the store sends duplicate identifiers the first occurrence is
    /// the one returned by [`Catalog::get`]; every occurrence still takes
    /// part in filtering.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = HashMap::with_capacity(products.len());
        for (position, product) in products.iter().enumerate() {
            index.entry(product.id).or_insert(position);
        }
        Self { products, index }
    }

    /// All products in arrival order
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by identifier
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.index.get(&id).and_then(|&pos| self.products.get(pos))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Distinct category labels in first-seen order
    #[must_use]
    pub fn distinct_categories(&self) -> Vec<String> {
        let mut seen = Vec::new();
        for product in &self.products {
            if !seen.contains(&product.category) {
                seen.push(product.category.clone());
            }
        }
        seen
    }

    /// Whether any product carries exactly this category label
    #[must_use]
    pub fn contains_category(&self, category: &str) -> bool {
        self.products.iter().any(|p| p.category == category)
    }
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self::new(products)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shirt", "clothing", 19.999),
            Product::new(2, "Blue Mug", "home", 9.5),
            Product::new(3, "Green Shirt", "clothing", 12.0),
        ]
    }

    #[test]
    fn test_decode_full_record() {
        let json = r#"{
            "id": 1,
            "title": "Fjallraven Backpack",
            "price": 109.95,
            "description": "Your perfect pack",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/1.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(product.rating, Some(Rating::new(3.9, 120)));
        assert!((product.effective_rating() - 3.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_decode_missing_and_null_fields() {
        let json = r#"{ "id": 7, "title": null, "price": 5 }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.title, "");
        assert_eq!(product.description, "");
        assert_eq!(product.image, "");
        assert!(product.rating.is_none());
        assert!((product.effective_rating() - DEFAULT_RATING).abs() < f64::EPSILON);
    }

    #[test]
    fn test_present_zero_rating_is_kept() {
        let json = r#"{ "id": 8, "title": "Unrated", "price": 1, "rating": { "rate": 0, "count": 0 } }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.rating, Some(Rating::new(0.0, 0)));
        assert!(product.effective_rating().abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_lookup_by_id() {
        let catalog = Catalog::new(sample());
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.get(2).map(|p| p.title.as_str()), Some("Blue Mug"));
        assert!(catalog.get(99).is_none());
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let catalog = Catalog::new(vec![
            Product::new(1, "First", "a", 1.0),
            Product::new(1, "Second", "a", 2.0),
        ]);
        assert_eq!(catalog.get(1).map(|p| p.title.as_str()), Some("First"));
        assert_eq!(catalog.products().len(), 2);
    }

    #[test]
    fn test_distinct_categories_first_seen_order() {
        let catalog = Catalog::new(sample());
        assert_eq!(catalog.distinct_categories(), vec!["clothing", "home"]);
        assert!(catalog.contains_category("home"));
        assert!(!catalog.contains_category("Home"));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.distinct_categories().is_empty());
    }
}
