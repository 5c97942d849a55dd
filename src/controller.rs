//! Interaction controller
//!
//! Owns the application state and turns discrete events (keystrokes,
//! category selection, card activation, fetch completions) into state
//! updates followed by a synchronous, full re-render through a
//! [`Presenter`]. There is no diffing, debouncing, or queuing: every event
//! recomputes the visible subset from the latest committed filter state.

use crate::catalog::{Catalog, FetchEvent, Product, ProductId, Result as CatalogResult};
use crate::filter::{self, CategoryFilter, FilterState};
use crate::render::{self, GridView, Placeholder};
use crate::ui::{MessageLevel, Presenter};

/// Progress of the product retrieval
#[derive(Debug, Clone, Default)]
pub enum ProductsState {
    /// Still waiting for the product fetch
    #[default]
    Loading,
    /// Products arrived and are indexed
    Loaded(Catalog),
    /// The product fetch failed; the grid shows an error placeholder
    Failed,
}

/// Everything the browser knows at a given moment
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Product list and its identifier index
    pub products: ProductsState,
    /// Category labels; `None` until fetched, and forever if that failed
    pub categories: Option<Vec<String>>,
    /// Current query and category selection
    pub filter: FilterState,
    /// Product shown in the detail overlay
    pub detail: Option<ProductId>,
}

impl AppState {
    /// The loaded catalog, if any
    #[must_use]
    pub const fn catalog(&self) -> Option<&Catalog> {
        match &self.products {
            ProductsState::Loaded(catalog) => Some(catalog),
            ProductsState::Loading | ProductsState::Failed => None,
        }
    }

    /// Products that pass the current filter, in arrival order
    #[must_use]
    pub fn visible_products(&self) -> Vec<&Product> {
        self.catalog()
            .map(|catalog| filter::apply(catalog.products(), &self.filter))
            .unwrap_or_default()
    }

    /// Grid content for the current state
    #[must_use]
    pub fn grid_view(&self) -> GridView {
        match &self.products {
            ProductsState::Loading => GridView::Placeholder(Placeholder::Loading),
            ProductsState::Failed => GridView::Placeholder(Placeholder::FetchFailed),
            ProductsState::Loaded(_) => render::render_grid(&self.visible_products()),
        }
    }
}

/// Wires events to state changes and re-renders
pub struct Controller<P: Presenter> {
    state: AppState,
    presenter: P,
}

impl<P: Presenter> Controller<P> {
    /// Create a controller with an empty query and the "all" category
    pub fn new(presenter: P) -> Self {
        Self::with_filter(presenter, FilterState::default())
    }

    /// Create a controller with a pre-seeded filter state
    ///
    /// The grid is rendered immediately (as a loading placeholder).
    pub fn with_filter(presenter: P, filter: FilterState) -> Self {
        let mut controller = Self {
            state: AppState {
                filter,
                ..AppState::default()
            },
            presenter,
        };
        controller.refresh_grid();
        controller
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn presenter(&self) -> &P {
        &self.presenter
    }

    pub const fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Dispatch a background fetch completion
    pub fn handle_fetch(&mut self, event: FetchEvent) {
        match event {
            FetchEvent::Products(result) => self.on_products_loaded(result),
            FetchEvent::Categories(result) => self.on_categories_loaded(result),
        }
    }

    /// Product fetch finished
    pub fn on_products_loaded(&mut self, result: CatalogResult<Vec<Product>>) {
        self.state.products = match result {
            Ok(products) => {
                tracing::debug!(count = products.len(), "indexing products");
                ProductsState::Loaded(Catalog::new(products))
            }
            Err(e) => {
                tracing::error!(error = %e, "product fetch failed, showing error placeholder");
                self.presenter.notify(MessageLevel::Error, &e.to_string());
                ProductsState::Failed
            }
        };
        self.refresh_grid();
    }

    /// Category fetch finished
    ///
    /// A failure only gets logged; the category controls stay absent.
    pub fn on_categories_loaded(&mut self, result: CatalogResult<Vec<String>>) {
        match result {
            Ok(categories) => {
                self.state.categories = Some(categories);
                self.refresh_categories();
            }
            Err(e) => {
                tracing::warn!(error = %e, "category fetch failed, omitting category controls");
            }
        }
    }

    /// The free-text query changed
    pub fn on_query_changed(&mut self, query: impl Into<String>) {
        self.state.filter.set_query(query);
        self.refresh_grid();
    }

    /// A category control (or the "all" reset control) was selected
    pub fn on_category_selected(&mut self, category: CategoryFilter) {
        tracing::debug!(category = %category, "category selected");
        self.state.filter.set_category(category);
        self.refresh_categories();
        self.refresh_grid();
    }

    /// A product card was activated
    ///
    /// The identifier is resolved against the full catalog, not the
    /// filtered subset. Unknown identifiers are ignored.
    pub fn on_card_activated(&mut self, id: ProductId) {
        let Some(product) = self.state.catalog().and_then(|c| c.get(id)) else {
            tracing::debug!(id, "activated unknown product, ignoring");
            return;
        };
        let detail = render::render_detail(product);
        self.state.detail = Some(id);
        self.presenter.show_detail(detail);
    }

    /// The detail overlay was dismissed
    pub fn on_detail_dismissed(&mut self) {
        if self.state.detail.take().is_some() {
            self.presenter.hide_detail();
        }
    }

    /// "Add to cart" on a product; acknowledged with a status message only
    pub fn on_add_to_cart(&mut self, id: ProductId) {
        if let Some(product) = self.state.catalog().and_then(|c| c.get(id)) {
            tracing::info!(id, title = %product.title, "added to cart");
            self.presenter.notify(MessageLevel::Success, "Added to cart!");
        }
    }

    fn refresh_grid(&mut self) {
        let view = self.state.grid_view();
        self.presenter.render_grid(view);
    }

    fn refresh_categories(&mut self) {
        if let Some(categories) = &self.state.categories {
            let controls = render::render_categories(categories, self.state.filter.category());
            self.presenter.render_categories(controls);
        }
    }
}
