//! Search-as-you-type coordination
//!
//! Each submitted query supersedes the previous one: the older search is
//! cancelled whether it is still waiting out the debounce window or
//! already in flight, so only the newest query's result ever reaches the
//! subscriber. This is the only operation in the SDK with a cancellation
//! policy.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use vitrin_domain::{Product, VitrinError};

use crate::ports::ProductsPort;

/// What the search surface currently shows
#[derive(Debug, Clone)]
pub enum SearchOutcome {
    /// No search has completed yet
    Idle,
    /// The newest query's result set
    Results { query: String, products: Vec<Product> },
    /// The newest query failed; superseded failures are never published
    Failed { query: String, error: VitrinError },
}

/// Debounces and cancels superseded product searches
///
/// Results are published on a `watch` channel: subscribers only ever see
/// the latest outcome, which matches a search screen that re-renders the
/// whole list.
pub struct SearchDebouncer {
    products: Arc<dyn ProductsPort>,
    delay: Duration,
    active: Mutex<Option<CancellationToken>>,
    outcome_tx: watch::Sender<SearchOutcome>,
    // Kept so publishing never fails when all subscribers are gone.
    _outcome_rx: watch::Receiver<SearchOutcome>,
}

impl SearchDebouncer {
    /// Default debounce window
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

    /// Create a debouncer over a products port
    #[must_use]
    pub fn new(products: Arc<dyn ProductsPort>, delay: Duration) -> Self {
        let (outcome_tx, outcome_rx) = watch::channel(SearchOutcome::Idle);
        Self { products, delay, active: Mutex::new(None), outcome_tx, _outcome_rx: outcome_rx }
    }

    /// Subscribe to search outcomes
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SearchOutcome> {
        self.outcome_tx.subscribe()
    }

    /// Submit a query, superseding any in-flight one
    ///
    /// A blank query short-circuits to an empty result set without a
    /// network call. The actual search runs on a spawned task after the
    /// debounce window; the returned handle is for tests that need to
    /// await completion and may be ignored.
    pub fn submit(&self, query: &str) -> Option<tokio::task::JoinHandle<()>> {
        let token = self.supersede();

        let query = query.trim().to_string();
        if query.is_empty() {
            let _ = self.outcome_tx.send(SearchOutcome::Results {
                query,
                products: Vec::new(),
            });
            return None;
        }

        let products = self.products.clone();
        let outcome_tx = self.outcome_tx.clone();
        let delay = self.delay;

        Some(tokio::spawn(async move {
            tokio::select! {
                () = token.cancelled() => {
                    debug!(query = %query, "search superseded during debounce");
                    return;
                }
                () = tokio::time::sleep(delay) => {}
            }

            let outcome = tokio::select! {
                () = token.cancelled() => {
                    debug!(query = %query, "search superseded in flight");
                    return;
                }
                result = products.search(&query) => match result {
                    Ok(products) => SearchOutcome::Results { query, products },
                    Err(error) => SearchOutcome::Failed { query, error },
                },
            };

            // The port call itself is not cancel-safe once resolved; drop
            // the outcome rather than publish a stale one.
            if !token.is_cancelled() {
                let _ = outcome_tx.send(outcome);
            }
        }))
    }

    /// Cancel the in-flight search, if any, without starting a new one
    pub fn cancel(&self) {
        self.supersede();
    }

    fn supersede(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let previous = {
            let mut active = self.active.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
            active.replace(token.clone())
        };
        if let Some(previous) = previous {
            previous.cancel();
        }
        token
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use vitrin_domain::Result;

    use super::*;
    use crate::ports::{ImageUpload, ProductsPort};

    /// Products port that records queries and answers from a canned list
    struct FakeCatalog {
        queries: Mutex<Vec<String>>,
        fail: bool,
    }

    impl FakeCatalog {
        fn new() -> Self {
            Self { queries: Mutex::new(Vec::new()), fail: false }
        }

        fn failing() -> Self {
            Self { queries: Mutex::new(Vec::new()), fail: true }
        }

        fn seen(&self) -> Vec<String> {
            self.queries.lock().unwrap().clone()
        }

        fn product(id: i64, name: &str) -> Product {
            Product {
                id,
                seller_id: 1,
                category_id: 1,
                name: name.to_string(),
                description: None,
                price: 10.0,
                stock: 5,
                rating: 0.0,
                is_deleted: false,
                images: None,
            }
        }
    }

    #[async_trait]
    impl ProductsPort for FakeCatalog {
        async fn search(&self, query: &str) -> Result<Vec<Product>> {
            self.queries.lock().unwrap().push(query.to_string());
            if self.fail {
                return Err(VitrinError::Network("connection reset".into()));
            }
            Ok(vec![Self::product(1, query)])
        }

        async fn get_all(&self) -> Result<Vec<Product>> {
            Ok(Vec::new())
        }
        async fn get_by_id(&self, _: i64) -> Result<Product> {
            Err(VitrinError::NotFound("product".into()))
        }
        async fn create(
            &self,
            _: vitrin_domain::CreateProductRequest,
        ) -> Result<vitrin_domain::ProductActionResponse> {
            unimplemented!("not exercised")
        }
        async fn update(
            &self,
            _: i64,
            _: vitrin_domain::UpdateProductRequest,
        ) -> Result<vitrin_domain::ProductActionResponse> {
            unimplemented!("not exercised")
        }
        async fn delete(&self, _: i64) -> Result<vitrin_domain::MessageResponse> {
            unimplemented!("not exercised")
        }
        async fn add_images(
            &self,
            _: i64,
            _: Vec<ImageUpload>,
        ) -> Result<vitrin_domain::ProductImageResponse> {
            unimplemented!("not exercised")
        }
        async fn delete_image(&self, _: i64) -> Result<vitrin_domain::MessageResponse> {
            unimplemented!("not exercised")
        }
        async fn get_by_seller(&self, _: i64) -> Result<Vec<Product>> {
            Ok(Vec::new())
        }
        async fn get_by_category(&self, _: i64) -> Result<Vec<Product>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_superseded_query_never_hits_the_port() {
        let catalog = Arc::new(FakeCatalog::new());
        let debouncer =
            SearchDebouncer::new(catalog.clone(), Duration::from_millis(300));
        let mut outcomes = debouncer.subscribe();

        // "sh" is superseded by "shoe" well inside the debounce window.
        let first = debouncer.submit("sh");
        tokio::time::advance(Duration::from_millis(100)).await;
        let second = debouncer.submit("shoe");

        if let Some(handle) = first {
            handle.await.unwrap();
        }
        second.unwrap().await.unwrap();

        assert_eq!(catalog.seen(), vec!["shoe".to_string()]);

        outcomes.changed().await.unwrap();
        match &*outcomes.borrow() {
            SearchOutcome::Results { query, products } => {
                assert_eq!(query, "shoe");
                assert_eq!(products[0].name, "shoe");
            }
            other => panic!("expected results, got {other:?}"),
        };
    }

    #[tokio::test(start_paused = true)]
    async fn test_blank_query_publishes_empty_without_network() {
        let catalog = Arc::new(FakeCatalog::new());
        let debouncer = SearchDebouncer::new(catalog.clone(), SearchDebouncer::DEFAULT_DELAY);
        let outcomes = debouncer.subscribe();

        assert!(debouncer.submit("   ").is_none());

        assert!(catalog.seen().is_empty());
        match &*outcomes.borrow() {
            SearchOutcome::Results { query, products } => {
                assert!(query.is_empty());
                assert!(products.is_empty());
            }
            other => panic!("expected empty results, got {other:?}"),
        };
    }

    #[tokio::test(start_paused = true)]
    async fn test_failure_is_published_for_newest_query_only() {
        let catalog = Arc::new(FakeCatalog::failing());
        let debouncer = SearchDebouncer::new(catalog.clone(), Duration::from_millis(300));
        let mut outcomes = debouncer.subscribe();

        debouncer.submit("boots").unwrap().await.unwrap();

        outcomes.changed().await.unwrap();
        match &*outcomes.borrow() {
            SearchOutcome::Failed { query, error } => {
                assert_eq!(query, "boots");
                assert!(matches!(error, VitrinError::Network(_)));
            }
            other => panic!("expected failure, got {other:?}"),
        };
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_suppresses_publication() {
        let catalog = Arc::new(FakeCatalog::new());
        let debouncer = SearchDebouncer::new(catalog.clone(), Duration::from_millis(300));
        let outcomes = debouncer.subscribe();

        let handle = debouncer.submit("sandals");
        debouncer.cancel();
        handle.unwrap().await.unwrap();

        assert!(catalog.seen().is_empty());
        assert!(matches!(&*outcomes.borrow(), SearchOutcome::Idle));
    }
}
