//! Integration tests for the interaction controller
//!
//! These tests drive the controller the way the browser does: fetch
//! completions arrive over the same channel the background workers use, and
//! user events are replayed against a recording presenter.

use std::sync::{Arc, mpsc};
use std::time::Duration;
use storefront::catalog::{CatalogError, CatalogSource, FetchEvent, spawn_fetches};
use storefront::controller::ProductsState;
use storefront::render::Placeholder;
use storefront::ui::RecordingPresenter;
use storefront::{CategoryFilter, Controller, FilterState, Product};

/// Helper source that serves fixed data or fixed failures
struct ScriptedSource {
    products: Option<Vec<Product>>,
    categories: Option<Vec<String>>,
}

impl ScriptedSource {
    fn healthy() -> Self {
        Self {
            products: Some(sample_products()),
            categories: Some(vec![
                "clothing".to_string(),
                "home".to_string(),
                "electronics".to_string(),
            ]),
        }
    }
}

fn unavailable() -> CatalogError {
    CatalogError::InvalidEndpoint {
        endpoint: "scripted".to_string(),
        reason: "service unavailable".to_string(),
    }
}

impl CatalogSource for ScriptedSource {
    fn fetch_products(&self) -> storefront::catalog::Result<Vec<Product>> {
        self.products.clone().ok_or_else(unavailable)
    }

    fn fetch_categories(&self) -> storefront::catalog::Result<Vec<String>> {
        self.categories.clone().ok_or_else(unavailable)
    }
}

fn sample_products() -> Vec<Product> {
    vec![
        Product::new(1, "Red Shirt", "clothing", 19.999)
            .with_description("A bright cotton tee")
            .with_rating(3.9, 120),
        Product::new(2, "Blue Mug", "home", 9.5).with_description("Holds 350ml of coffee"),
        Product::new(3, "USB Cable", "electronics", 4.25)
            .with_description("Braided, two metres")
            .with_image("https://example.com/cable.png"),
        Product::new(4, "Cotton Socks", "clothing", 7.0),
    ]
}

/// Run both fetches through the worker threads and feed the controller
fn load(source: ScriptedSource, filter: FilterState) -> Controller<RecordingPresenter> {
    let (tx, rx) = mpsc::channel();
    spawn_fetches(Arc::new(source), &tx);
    drop(tx);

    let mut controller = Controller::with_filter(RecordingPresenter::new(), filter);
    while let Ok(event) = rx.recv_timeout(Duration::from_secs(5)) {
        controller.handle_fetch(event);
    }
    controller
}

#[test]
fn test_initial_load_shows_everything() {
    let controller = load(ScriptedSource::healthy(), FilterState::default());
    let presenter = controller.presenter();

    assert_eq!(presenter.card_ids(), vec![1, 2, 3, 4]);
    assert_eq!(presenter.active_category(), Some("all"));
    let labels: Vec<&str> = presenter
        .categories
        .as_ref()
        .unwrap()
        .iter()
        .map(|control| control.label.as_str())
        .collect();
    assert_eq!(labels, vec!["all", "clothing", "home", "electronics"]);
}

#[test]
fn test_query_and_price_labels() {
    let mut controller = load(ScriptedSource::healthy(), FilterState::default());

    controller.on_query_changed("  SHIRT ");
    let cards = controller.presenter().grid.cards().to_vec();
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, 1);
    assert_eq!(cards[0].price, "$19.99");
    assert_eq!(cards[0].stars.filled(), 3);

    controller.on_query_changed("mug");
    assert_eq!(controller.presenter().grid.cards()[0].price, "$9.50");
}

#[test]
fn test_query_matches_description() {
    let mut controller = load(ScriptedSource::healthy(), FilterState::default());
    controller.on_query_changed("cotton");
    assert_eq!(controller.presenter().card_ids(), vec![1, 4]);
}

#[test]
fn test_category_and_query_combine() {
    let mut controller = load(ScriptedSource::healthy(), FilterState::default());

    controller.on_category_selected(CategoryFilter::from("home"));
    assert_eq!(controller.presenter().card_ids(), vec![2]);

    controller.on_query_changed("shirt");
    assert_eq!(controller.presenter().grid.placeholder(), Some(Placeholder::NoMatches));
    assert!(controller.presenter().grid.cards().is_empty());

    controller.on_category_selected(CategoryFilter::All);
    assert_eq!(controller.presenter().card_ids(), vec![1]);
}

#[test]
fn test_seeded_filter_applies_on_arrival() {
    let filter = FilterState::new("cotton", CategoryFilter::from("clothing"));
    let controller = load(ScriptedSource::healthy(), filter);

    assert_eq!(controller.presenter().card_ids(), vec![1, 4]);
    assert_eq!(controller.presenter().active_category(), Some("clothing"));
}

#[test]
fn test_detail_lookup_ignores_filter() {
    let mut controller = load(ScriptedSource::healthy(), FilterState::default());
    controller.on_category_selected(CategoryFilter::from("home"));

    controller.on_card_activated(3);
    let detail = controller.presenter().detail.clone().unwrap();
    assert_eq!(detail.title, "USB Cable");
    assert_eq!(detail.description, "Braided, two metres");
    assert!(!detail.image.is_placeholder);

    controller.on_detail_dismissed();
    assert!(controller.presenter().detail.is_none());
    assert_eq!(controller.presenter().card_ids(), vec![2]);
}

#[test]
fn test_unknown_activation_is_ignored() {
    let mut controller = load(ScriptedSource::healthy(), FilterState::default());
    controller.on_card_activated(999);
    assert!(controller.presenter().detail.is_none());
}

#[test]
fn test_activation_before_load_is_ignored() {
    let mut controller = Controller::new(RecordingPresenter::new());
    controller.on_card_activated(1);
    assert!(controller.presenter().detail.is_none());
    assert_eq!(controller.presenter().grid.placeholder(), Some(Placeholder::Loading));
}

#[test]
fn test_product_failure_sticks() {
    let source = ScriptedSource {
        products: None,
        ..ScriptedSource::healthy()
    };
    let mut controller = load(source, FilterState::default());

    assert!(matches!(controller.state().products, ProductsState::Failed));
    assert_eq!(controller.presenter().grid.placeholder(), Some(Placeholder::FetchFailed));
    assert!(controller.presenter().categories.is_some());

    controller.on_query_changed("anything");
    controller.on_category_selected(CategoryFilter::from("home"));
    assert_eq!(controller.presenter().grid.placeholder(), Some(Placeholder::FetchFailed));
}

#[test]
fn test_category_failure_omits_controls() {
    let source = ScriptedSource {
        categories: None,
        ..ScriptedSource::healthy()
    };
    let mut controller = load(source, FilterState::default());

    assert!(controller.presenter().categories.is_none());
    assert_eq!(controller.presenter().category_renders, 0);
    assert_eq!(controller.presenter().card_ids(), vec![1, 2, 3, 4]);

    controller.on_query_changed("cable");
    assert_eq!(controller.presenter().card_ids(), vec![3]);
}

#[test]
fn test_completion_order_does_not_matter() {
    let categories = vec!["clothing".to_string(), "home".to_string()];
    let filter = FilterState::new("", CategoryFilter::from("home"));

    let mut products_first = Controller::with_filter(RecordingPresenter::new(), filter.clone());
    products_first.handle_fetch(FetchEvent::Products(Ok(sample_products())));
    products_first.handle_fetch(FetchEvent::Categories(Ok(categories.clone())));

    let mut categories_first = Controller::with_filter(RecordingPresenter::new(), filter);
    categories_first.handle_fetch(FetchEvent::Categories(Ok(categories)));
    categories_first.handle_fetch(FetchEvent::Products(Ok(sample_products())));

    assert_eq!(products_first.presenter().grid, categories_first.presenter().grid);
    assert_eq!(
        products_first.presenter().categories,
        categories_first.presenter().categories
    );
}

#[test]
fn test_duplicate_ids_first_wins_for_detail() {
    let mut products = sample_products();
    products.push(Product::new(2, "Green Mug", "home", 11.0));
    let mut controller = Controller::new(RecordingPresenter::new());
    controller.on_products_loaded(Ok(products));

    controller.on_query_changed("mug");
    assert_eq!(controller.presenter().card_ids(), vec![2, 2]);

    controller.on_card_activated(2);
    assert_eq!(controller.presenter().detail.as_ref().unwrap().title, "Blue Mug");
}
