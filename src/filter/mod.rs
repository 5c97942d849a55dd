//! Filter engine
//!
//! Pure functions that select the products matching a free-text query and a
//! category. Output order always equals input order; nothing is re-sorted,
//! and an empty result is an ordinary outcome rather than an error.
//!
//! # Matching rules
//!
//! - **Text**: the query is trimmed and lowercased; a product matches when
//!   its lowercased title *or* lowercased description contains it. An empty
//!   query matches everything.
//! - **Category**: exact, case-sensitive equality with the product category,
//!   or unconditional for [`CategoryFilter::All`].
//! - A product is shown when both rules match.
//!
//! ```
//! use storefront::{CategoryFilter, Product};
//! use storefront::filter::filter;
//!
//! let products = vec![
//!     Product::new(1, "Red Shirt", "clothing", 19.999),
//!     Product::new(2, "Blue Mug", "home", 9.5),
//! ];
//! let shown = filter(&products, "shirt", &CategoryFilter::All);
//! assert_eq!(shown.len(), 1);
//! assert_eq!(shown[0].id, 1);
//! ```

mod types;

pub use types::{ALL_CATEGORIES, CategoryFilter, FilterState};

use crate::catalog::Product;

/// Normalize a raw query the way matching expects it
#[must_use]
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Text predicate against an already-normalized needle
#[must_use]
pub fn matches_text(product: &Product, needle: &str) -> bool {
    needle.is_empty()
        || product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
}

/// Combined predicate for a single product
#[must_use]
pub fn matches(product: &Product, query: &str, category: &CategoryFilter) -> bool {
    category.matches(&product.category) && matches_text(product, &normalize_query(query))
}

/// Select the products matching `query` and `category`, preserving order
///
/// Accepts any iterator of product references, so a previous result can be
/// filtered again.
pub fn filter<'a, I>(products: I, query: &str, category: &CategoryFilter) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let needle = normalize_query(query);
    products
        .into_iter()
        .filter(|product| category.matches(&product.category) && matches_text(product, &needle))
        .collect()
}

/// Apply a [`FilterState`] to a product list
#[must_use]
pub fn apply<'a>(products: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    filter(products, state.query(), state.category())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn products() -> Vec<Product> {
        vec![
            Product::new(1, "Red Shirt", "clothing", 19.999)
                .with_description("Soft cotton tee"),
            Product::new(2, "Blue Mug", "home", 9.5).with_description("Holds coffee"),
            Product::new(3, "Denim Jacket", "clothing", 59.0)
                .with_description("Pairs well with any SHIRT"),
            Product::new(4, "Lamp", "home", 24.0),
        ]
    }

    fn ids(result: &[&Product]) -> Vec<u64> {
        result.iter().map(|p| p.id).collect()
    }

    #[test]
    fn test_empty_query_all_category_is_identity() {
        let products = products();
        let result = filter(&products, "", &CategoryFilter::All);
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
        assert!(result.iter().zip(&products).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_query_matches_title_or_description_case_insensitive() {
        let products = products();
        let result = filter(&products, "  ShIrT ", &CategoryFilter::All);
        assert_eq!(ids(&result), vec![1, 3]);
    }

    #[test]
    fn test_category_and_query_combine() {
        let products = products();
        let home = CategoryFilter::from("home");
        assert_eq!(ids(&filter(&products, "", &home)), vec![2, 4]);
        assert_eq!(ids(&filter(&products, "coffee", &home)), vec![2]);
        assert!(filter(&products, "shirt", &home).is_empty());
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let products = products();
        assert!(filter(&products, "", &CategoryFilter::from("Home")).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let products = products();
        let category = CategoryFilter::from("clothing");
        let once = filter(&products, "shirt", &category);
        let twice = filter(once.iter().copied(), "shirt", &category);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_membership_matches_predicate() {
        let products = products();
        for query in ["", "shirt", "o", "lamp", "nothing"] {
            for category in [
                CategoryFilter::All,
                CategoryFilter::from("home"),
                CategoryFilter::from("clothing"),
            ] {
                let result = filter(&products, query, &category);
                for product in &products {
                    let expected = matches(product, query, &category);
                    assert_eq!(
                        result.iter().any(|p| std::ptr::eq(*p, product)),
                        expected,
                        "query={query:?} category={category} id={}",
                        product.id
                    );
                }
            }
        }
    }

    #[test]
    fn test_empty_input_gives_empty_output() {
        let empty: Vec<Product> = Vec::new();
        assert!(filter(&empty, "anything", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_missing_text_fields_only_match_empty_query() {
        let products = vec![Product::new(9, "", "misc", 1.0)];
        assert_eq!(filter(&products, "", &CategoryFilter::All).len(), 1);
        assert!(filter(&products, "x", &CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_apply_uses_state() {
        let products = products();
        let state = FilterState::new("lamp", CategoryFilter::from("home"));
        assert_eq!(ids(&apply(&products, &state)), vec![4]);
    }
}
