//! Remote catalog retrieval
//!
//! The browser needs two independent reads from the store: the full product
//! list and the category labels. [`CatalogSource`] abstracts them so the
//! controller can be driven by canned data in tests, and
//! [`HttpCatalogSource`] performs them against a live endpoint.
//!
//! [`spawn_fetches`] issues both reads on their own worker threads and
//! reports each completion as a [`FetchEvent`] over a channel. The two
//! completions arrive in no particular order and a failure of one never
//! holds back the other.

use super::Product;
use super::error::{CatalogError, Result};
use reqwest::Url;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

/// Path of the product collection, relative to the endpoint
pub const PRODUCTS_PATH: &str = "products";
/// Path of the category label list, relative to the endpoint
pub const CATEGORIES_PATH: &str = "products/categories";

/// Read-only access to a store catalog
pub trait CatalogSource: Send + Sync {
    /// Retrieve every product in the store
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on any transport failure, non-success status,
    /// or undecodable body.
    fn fetch_products(&self) -> Result<Vec<Product>>;

    /// Retrieve the store's category labels
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` on any transport failure, non-success status,
    /// or undecodable body.
    fn fetch_categories(&self) -> Result<Vec<String>>;
}

/// Completion of one background retrieval
#[derive(Debug)]
pub enum FetchEvent {
    /// The product list request finished
    Products(Result<Vec<Product>>),
    /// The category list request finished
    Categories(Result<Vec<String>>),
}

/// Catalog source backed by a store's HTTP JSON API
#[derive(Debug, Clone)]
pub struct HttpCatalogSource {
    client: Client,
    endpoint: Url,
}

impl HttpCatalogSource {
    /// The public demo store the browser talks to by default
    pub const DEFAULT_ENDPOINT: &'static str = "https://fakestoreapi.com";

    /// Create a source for the given base endpoint
    ///
    /// Requests carry no timeout and are never retried.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidEndpoint` if `endpoint` is not an absolute
    /// http(s) URL, or `CatalogError::ClientError` if the HTTP client cannot
    /// be built.
    pub fn new(endpoint: &str) -> Result<Self> {
        let endpoint = Self::parse_endpoint(endpoint)?;
        let client = Client::builder()
            .timeout(None::<Duration>)
            .user_agent(concat!("storefront/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(CatalogError::ClientError)?;
        Ok(Self { client, endpoint })
    }

    /// Base endpoint this source reads from
    #[must_use]
    pub const fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    fn parse_endpoint(raw: &str) -> Result<Url> {
        let invalid = |reason: String| CatalogError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason,
        };

        let mut url = Url::parse(raw.trim()).map_err(|e| invalid(e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        // Url::join replaces the last segment unless the path ends in '/'
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    /// Absolute URL for a path below the endpoint
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::InvalidEndpoint` if the joined URL is malformed.
    pub fn url_for(&self, path: &str) -> Result<Url> {
        self.endpoint
            .join(path)
            .map_err(|e| CatalogError::InvalidEndpoint {
                endpoint: self.endpoint.to_string(),
                reason: e.to_string(),
            })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url_for(path)?;
        let url_str = url.to_string();
        tracing::debug!(url = %url_str, "fetching");

        let response = self
            .client
            .get(url)
            .send()
            .map_err(|source| CatalogError::TransportError {
                url: url_str.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::StatusError {
                url: url_str,
                status,
            });
        }

        let body = response
            .text()
            .map_err(|source| CatalogError::TransportError {
                url: url_str.clone(),
                source,
            })?;

        serde_json::from_str(&body).map_err(|source| CatalogError::DecodeError {
            url: url_str,
            source,
        })
    }
}

impl CatalogSource for HttpCatalogSource {
    fn fetch_products(&self) -> Result<Vec<Product>> {
        self.get_json(PRODUCTS_PATH)
    }

    fn fetch_categories(&self) -> Result<Vec<String>> {
        self.get_json(CATEGORIES_PATH)
    }
}

/// Start both retrievals on background threads
///
/// Each thread sends exactly one [`FetchEvent`] on `tx`. If the receiver
/// has gone away (the UI already quit) the result is dropped.
pub fn spawn_fetches(source: Arc<dyn CatalogSource>, tx: &Sender<FetchEvent>) {
    let products_source = Arc::clone(&source);
    let products_tx = tx.clone();
    thread::spawn(move || {
        let result = products_source.fetch_products();
        match &result {
            Ok(products) => tracing::info!(count = products.len(), "products fetched"),
            Err(e) => tracing::error!(error = %e, "error fetching products"),
        }
        if products_tx.send(FetchEvent::Products(result)).is_err() {
            tracing::debug!("product fetch finished after the browser closed");
        }
    });

    let categories_tx = tx.clone();
    thread::spawn(move || {
        let result = source.fetch_categories();
        match &result {
            Ok(categories) => tracing::info!(count = categories.len(), "categories fetched"),
            Err(e) => tracing::warn!(error = %e, "error fetching categories"),
        }
        if categories_tx.send(FetchEvent::Categories(result)).is_err() {
            tracing::debug!("category fetch finished after the browser closed");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    struct CannedSource {
        fail_categories: bool,
    }

    impl CatalogSource for CannedSource {
        fn fetch_products(&self) -> Result<Vec<Product>> {
            Ok(vec![Product::new(1, "Red Shirt", "clothing", 19.99)])
        }

        fn fetch_categories(&self) -> Result<Vec<String>> {
            if self.fail_categories {
                Err(CatalogError::InvalidEndpoint {
                    endpoint: "canned".to_string(),
                    reason: "unavailable".to_string(),
                })
            } else {
                Ok(vec!["clothing".to_string()])
            }
        }
    }

    fn collect_two(rx: &mpsc::Receiver<FetchEvent>) -> (Option<FetchEvent>, Option<FetchEvent>) {
        let mut products = None;
        let mut categories = None;
        for _ in 0..2 {
            match rx.recv_timeout(Duration::from_secs(5)).unwrap() {
                event @ FetchEvent::Products(_) => products = Some(event),
                event @ FetchEvent::Categories(_) => categories = Some(event),
            }
        }
        (products, categories)
    }

    #[test]
    fn test_endpoint_gets_trailing_slash() {
        let source = HttpCatalogSource::new("https://shop.test/api").unwrap();
        assert_eq!(source.endpoint().as_str(), "https://shop.test/api/");
        assert_eq!(
            source.url_for(CATEGORIES_PATH).unwrap().as_str(),
            "https://shop.test/api/products/categories"
        );
    }

    #[test]
    fn test_default_endpoint_urls() {
        let source = HttpCatalogSource::new(HttpCatalogSource::DEFAULT_ENDPOINT).unwrap();
        assert_eq!(
            source.url_for(PRODUCTS_PATH).unwrap().as_str(),
            "https://fakestoreapi.com/products"
        );
    }

    #[test]
    fn test_rejects_bad_endpoints() {
        assert!(matches!(
            HttpCatalogSource::new("not a url"),
            Err(CatalogError::InvalidEndpoint { .. })
        ));
        assert!(matches!(
            HttpCatalogSource::new("ftp://shop.test"),
            Err(CatalogError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_spawn_fetches_reports_both() {
        let (tx, rx) = mpsc::channel();
        spawn_fetches(Arc::new(CannedSource { fail_categories: false }), &tx);
        let (products, categories) = collect_two(&rx);

        assert!(matches!(products, Some(FetchEvent::Products(Ok(ref p))) if p.len() == 1));
        assert!(matches!(categories, Some(FetchEvent::Categories(Ok(ref c))) if c == &["clothing"]));
    }

    #[test]
    fn test_category_failure_does_not_block_products() {
        let (tx, rx) = mpsc::channel();
        spawn_fetches(Arc::new(CannedSource { fail_categories: true }), &tx);
        let (products, categories) = collect_two(&rx);

        assert!(matches!(products, Some(FetchEvent::Products(Ok(_)))));
        assert!(matches!(categories, Some(FetchEvent::Categories(Err(_)))));
    }
}
