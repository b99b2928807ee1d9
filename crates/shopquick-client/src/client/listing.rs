//! Paginated product listing and the category listing.

use shopquick_core::{Category, Product};

use crate::error::CatalogError;
use crate::normalize::{normalize_category, normalize_product};
use crate::types::{ApiCategory, ProductsResponse};

use super::CatalogClient;

impl CatalogClient {
    /// Fetches up to `limit` products starting at `offset`
    /// (`GET /products?skip={offset}&limit={limit}`).
    ///
    /// A page shorter than `limit` means the end of the catalog was reached.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status, 404 included.
    /// - [`CatalogError::Http`] — network, TLS or timeout failure.
    /// - [`CatalogError::Deserialize`] — body is neither a product array nor a
    ///   `{"products": [...]}` envelope.
    /// - [`CatalogError::Normalization`] — a product carries out-of-domain values.
    pub async fn list_products(
        &self,
        offset: u64,
        limit: u32,
    ) -> Result<Vec<Product>, CatalogError> {
        let mut url = self.endpoint(&["products"]);
        url.query_pairs_mut()
            .append_pair("skip", &offset.to_string())
            .append_pair("limit", &limit.to_string());

        let response: ProductsResponse = self
            .get_json(&url, &format!("products page (skip={offset}, limit={limit})"))
            .await?;

        response
            .into_products()
            .into_iter()
            .map(normalize_product)
            .collect()
    }

    /// Fetches the 1-based `page` of `page_size` products.
    ///
    /// # Errors
    ///
    /// Same as [`Self::list_products`].
    pub async fn list_page(&self, page: u32, page_size: u32) -> Result<Vec<Product>, CatalogError> {
        let offset = u64::from(page.saturating_sub(1)) * u64::from(page_size);
        self.list_products(offset, page_size).await
    }

    /// Fetches the category list (`GET /categories`).
    ///
    /// # Errors
    ///
    /// - [`CatalogError::UnexpectedStatus`] — any non-2xx status.
    /// - [`CatalogError::Http`] — network, TLS or timeout failure.
    /// - [`CatalogError::Deserialize`] — body is not an array of names or
    ///   category objects.
    pub async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        let url = self.endpoint(&["categories"]);
        let raw: Vec<ApiCategory> = self.get_json(&url, "categories").await?;
        Ok(raw.into_iter().map(normalize_category).collect())
    }
}
