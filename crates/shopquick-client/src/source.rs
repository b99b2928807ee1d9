//! The seam between catalog consumers and wherever products come from.

use std::future::Future;

use shopquick_core::{Category, Product, ProductId};

use crate::error::CatalogError;

/// Anything that can serve catalog pages, single products and the category
/// list. [`crate::CatalogClient`] is the production implementation; tests
/// substitute in-memory stubs.
pub trait CatalogSource: Send + Sync {
    /// Fetches the 1-based `page` holding at most `page_size` products.
    fn list_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> impl Future<Output = Result<Vec<Product>, CatalogError>> + Send;

    fn get_product(
        &self,
        id: &ProductId,
    ) -> impl Future<Output = Result<Product, CatalogError>> + Send;

    fn list_categories(&self) -> impl Future<Output = Result<Vec<Category>, CatalogError>> + Send;
}
