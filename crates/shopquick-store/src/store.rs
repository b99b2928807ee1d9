//! Observable catalog state: the current page, the active criteria, and the
//! visible list derived from them.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use shopquick_client::{CatalogError, CatalogSource};
use shopquick_core::{CatalogQuery, Category, CategoryFilter, Product, SortOrder};
use tokio::sync::watch;

use crate::error::StoreError;
use crate::filter::visible_products;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingStatus {
    #[default]
    Idle,
    Loading,
    Error,
}

/// Outcome of a page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoad {
    /// The page arrived and replaced the current products.
    Loaded { count: usize },
    /// The fetch failed; products were left untouched and the error recorded.
    Failed,
    /// A newer page request was issued before this one resolved; the
    /// response was dropped.
    Superseded,
    /// Nothing was requested (e.g. `previous_page` on page 1).
    Unchanged,
}

/// Everything a view needs to render the catalog, published as one value.
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    pub query: CatalogQuery,
    /// Products of the most recently loaded page, in fetch order.
    pub products: Vec<Product>,
    /// `products` after filter and sort. Always recomputed together with
    /// any change to `products` or `query`.
    pub visible: Vec<Product>,
    /// Page `products` came from; `None` until a page has loaded.
    pub loaded_page: Option<u32>,
    pub status: LoadingStatus,
    pub last_error: Option<Arc<CatalogError>>,
    /// Whether the last loaded page was full, i.e. more may follow.
    pub has_more: bool,
    /// `None` until the category list loads, or when it failed to load.
    pub categories: Option<Vec<Category>>,
}

impl CatalogSnapshot {
    fn recompute(&mut self) {
        self.visible = visible_products(&self.products, &self.query);
    }
}

/// Single owner of the catalog query and the current page of products.
///
/// Every mutation is published through a [`watch`] channel; views call
/// [`CatalogStore::subscribe`] and re-render on change. Criteria setters are
/// synchronous and never touch the network. Page changes fetch through the
/// [`CatalogSource`]; when page requests overlap, only the response to the
/// most recent request is applied.
pub struct CatalogStore<S> {
    source: S,
    page_size: u32,
    state: watch::Sender<CatalogSnapshot>,
    latest_request: AtomicU64,
}

impl<S: CatalogSource> CatalogStore<S> {
    /// A store on page 1 with no products loaded. Call
    /// [`CatalogStore::refresh`] or [`CatalogStore::set_page`] to fetch.
    pub fn new(source: S, page_size: u32) -> Self {
        Self::with_products(source, page_size, Vec::new())
    }

    /// A store seeded with an already-fetched first page.
    pub fn with_products(source: S, page_size: u32, products: Vec<Product>) -> Self {
        let page_size = page_size.max(1);
        let has_more = is_full_page(products.len(), page_size);
        let loaded_page = (!products.is_empty()).then_some(1);
        let mut snapshot = CatalogSnapshot {
            products,
            loaded_page,
            has_more,
            ..CatalogSnapshot::default()
        };
        snapshot.recompute();
        let (state, _) = watch::channel(snapshot);

        Self {
            source,
            page_size,
            state,
            latest_request: AtomicU64::new(0),
        }
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Receiver that observes every published snapshot.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CatalogSnapshot> {
        self.state.subscribe()
    }

    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.borrow().clone()
    }

    #[must_use]
    pub fn visible_list(&self) -> Vec<Product> {
        self.state.borrow().visible.clone()
    }

    #[must_use]
    pub fn loading_status(&self) -> LoadingStatus {
        self.state.borrow().status
    }

    /// The most recently requested page, which may still be loading.
    #[must_use]
    pub fn current_page(&self) -> u32 {
        self.state.borrow().query.page
    }

    #[must_use]
    pub fn last_error(&self) -> Option<Arc<CatalogError>> {
        self.state.borrow().last_error.clone()
    }

    #[must_use]
    pub fn has_more(&self) -> bool {
        self.state.borrow().has_more
    }

    #[must_use]
    pub fn categories(&self) -> Option<Vec<Category>> {
        self.state.borrow().categories.clone()
    }

    pub fn set_category(&self, category: impl Into<CategoryFilter>) {
        let category = category.into();
        self.state.send_if_modified(|s| {
            if s.query.category == category {
                return false;
            }
            s.query.category = category;
            s.recompute();
            true
        });
    }

    pub fn set_search_text(&self, text: impl Into<String>) {
        let text = text.into();
        self.state.send_if_modified(|s| {
            if s.query.search_text == text {
                return false;
            }
            s.query.search_text = text;
            s.recompute();
            true
        });
    }

    pub fn set_sort_order(&self, order: SortOrder) {
        self.state.send_if_modified(|s| {
            if s.query.sort_order == order {
                return false;
            }
            s.query.sort_order = order;
            s.recompute();
            true
        });
    }

    /// Requests `page` and applies it when it arrives, unless a newer page
    /// request was issued in the meantime.
    ///
    /// Fetch failures are recorded in the snapshot (`status = Error`,
    /// `last_error`) and reported as [`PageLoad::Failed`]; they are not
    /// returned as errors.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::InvalidPage`] for page 0.
    pub async fn set_page(&self, page: u32) -> Result<PageLoad, StoreError> {
        if page == 0 {
            return Err(StoreError::InvalidPage(page));
        }
        Ok(self.fetch_page(page).await)
    }

    /// Re-fetches the current page. This is the retry path after a failed
    /// page load.
    pub async fn refresh(&self) -> PageLoad {
        let page = self.current_page();
        self.fetch_page(page).await
    }

    /// Advances one page.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EndOfCatalog`] when the last loaded page was
    /// shorter than the page size, or when no page has loaded yet.
    pub async fn next_page(&self) -> Result<PageLoad, StoreError> {
        let (page, has_more) = {
            let s = self.state.borrow();
            (s.query.page, s.has_more)
        };
        if !has_more {
            return Err(StoreError::EndOfCatalog { page });
        }
        Ok(self.fetch_page(page.saturating_add(1)).await)
    }

    /// Goes back one page; a no-op on page 1.
    pub async fn previous_page(&self) -> PageLoad {
        let page = self.current_page();
        if page <= 1 {
            return PageLoad::Unchanged;
        }
        self.fetch_page(page - 1).await
    }

    /// Loads the category list. Best-effort: on failure the list stays
    /// `None` so views can hide the category selector, and the catalog
    /// status is left alone.
    ///
    /// Returns whether the list is available.
    pub async fn load_categories(&self) -> bool {
        match self.source.list_categories().await {
            Ok(categories) => {
                tracing::debug!(count = categories.len(), "category list loaded");
                self.state.send_modify(|s| s.categories = Some(categories));
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "category list unavailable; category filter disabled");
                self.state.send_if_modified(|s| s.categories.take().is_some());
                false
            }
        }
    }

    async fn fetch_page(&self, page: u32) -> PageLoad {
        // Tickets are issued and checked under the channel lock.
        let mut ticket = 0;
        self.state.send_modify(|s| {
            ticket = self.latest_request.fetch_add(1, Ordering::SeqCst) + 1;
            s.query.page = page;
            s.status = LoadingStatus::Loading;
        });
        tracing::debug!(page, ticket, "fetching catalog page");

        let result = self.source.list_page(page, self.page_size).await;

        let mut outcome = PageLoad::Superseded;
        self.state.send_if_modified(|s| {
            if self.latest_request.load(Ordering::SeqCst) != ticket {
                return false;
            }
            match result {
                Ok(products) => {
                    let count = products.len();
                    s.has_more = is_full_page(count, self.page_size);
                    s.products = products;
                    s.loaded_page = Some(page);
                    s.status = LoadingStatus::Idle;
                    s.last_error = None;
                    s.recompute();
                    outcome = PageLoad::Loaded { count };
                }
                Err(err) => {
                    tracing::warn!(page, error = %err, "catalog page fetch failed");
                    s.status = LoadingStatus::Error;
                    s.last_error = Some(Arc::new(err));
                    outcome = PageLoad::Failed;
                }
            }
            true
        });

        match outcome {
            PageLoad::Superseded => {
                tracing::debug!(page, ticket, "dropping response for superseded page request");
            }
            PageLoad::Loaded { count } => {
                tracing::info!(page, count, "catalog page loaded");
            }
            PageLoad::Failed | PageLoad::Unchanged => {}
        }
        outcome
    }
}

fn is_full_page(count: usize, page_size: u32) -> bool {
    usize::try_from(page_size).is_ok_and(|size| count >= size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_page_detection() {
        assert!(is_full_page(20, 20));
        assert!(is_full_page(21, 20));
        assert!(!is_full_page(19, 20));
        assert!(!is_full_page(0, 1));
    }
}
