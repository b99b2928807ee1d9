//! HTTP client for the remote product catalog API.

mod listing;

use std::time::Duration;

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use shopquick_core::{CatalogConfig, Category, Product, ProductId};

use crate::error::CatalogError;
use crate::normalize::normalize_product;
use crate::source::CatalogSource;
use crate::types::ApiProduct;

/// HTTP client for the remote catalog's `products` and `categories`
/// endpoints.
///
/// Maps 404 on a single product to [`CatalogError::NotFound`] and every
/// other non-2xx response to [`CatalogError::UnexpectedStatus`]. Performs
/// no retries and no caching: each call is exactly one round trip.
pub struct CatalogClient {
    client: Client,
    base_url: Url,
    page_size: u32,
}

impl CatalogClient {
    /// Creates a client from the base URL, page size, timeout and
    /// `User-Agent` in `config`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::InvalidBaseUrl`] if `config.base_url` does not
    /// parse as a URL that can carry a path, or [`CatalogError::Http`] if the
    /// underlying `reqwest::Client` cannot be constructed.
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let raw = config.base_url.trim_end_matches('/');
        let base_url = Url::parse(raw).map_err(|e| CatalogError::InvalidBaseUrl {
            base_url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::InvalidBaseUrl {
                base_url: config.base_url.clone(),
                reason: "URL cannot carry a path".into(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(config.user_agent.as_str())
            .build()?;

        Ok(Self {
            client,
            base_url,
            page_size: config.page_size,
        })
    }

    /// Default number of products per page for this client.
    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Fetches a single product by id.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::NotFound`] — HTTP 404.
    /// - [`CatalogError::UnexpectedStatus`] — any other non-2xx status.
    /// - [`CatalogError::Http`] — network, TLS or timeout failure.
    /// - [`CatalogError::Deserialize`] / [`CatalogError::Normalization`] — the
    ///   body is not a product.
    pub async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        let url = self.endpoint(&["products", id.as_str()]);
        let raw: ApiProduct = match self.get_json(&url, &format!("product {id}")).await {
            Err(CatalogError::UnexpectedStatus { status: 404, url, .. }) => {
                return Err(CatalogError::NotFound { url });
            }
            other => other?,
        };
        normalize_product(raw)
    }

    /// Appends `segments` to the base URL's path. Each segment is
    /// percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // `new` rejects cannot-be-a-base URLs, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Sends a GET request, asserts a 2xx status, and parses the body as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::UnexpectedStatus`] on a non-2xx status,
    /// [`CatalogError::Http`] on transport failure, and
    /// [`CatalogError::Deserialize`] if the body is not valid `T`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        context: &str,
    ) -> Result<T, CatalogError> {
        tracing::debug!(%url, "catalog request");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();
        tracing::debug!(%url, status = status.as_u16(), "catalog response");

        if !status.is_success() {
            return Err(CatalogError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
                message: status
                    .canonical_reason()
                    .unwrap_or("unknown status")
                    .to_owned(),
            });
        }

        let body = response.text().await?;
        serde_json::from_str::<T>(&body).map_err(|e| CatalogError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

impl CatalogSource for CatalogClient {
    async fn list_page(&self, page: u32, page_size: u32) -> Result<Vec<Product>, CatalogError> {
        CatalogClient::list_page(self, page, page_size).await
    }

    async fn get_product(&self, id: &ProductId) -> Result<Product, CatalogError> {
        CatalogClient::get_product(self, id).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>, CatalogError> {
        CatalogClient::list_categories(self).await
    }
}

#[cfg(test)]
#[path = "../client_test.rs"]
mod tests;
