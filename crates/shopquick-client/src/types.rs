//! Response shapes of the remote catalog API.
//!
//! ## Observed shape
//!
//! ### Product ids
//! Sent as zero-padded strings (`"001"`) by the storefront API and as plain
//! integers by dummyjson-style mirrors. [`ApiId`] accepts both.
//!
//! ### Listing envelope
//! `GET /products` returns a bare JSON array. Mirrors wrap the array in
//! `{"products": [...], "total": .., "skip": .., "limit": ..}`.
//! [`ProductsResponse`] accepts both.
//!
//! ### Categories
//! Either an array of strings or an array of `{"slug", "name", "url"}`
//! objects, depending on the deployment.
//!
//! ### Reviews
//! `date` is an RFC 3339 timestamp (`"2024-05-23T08:56:21.618Z"`); parsed
//! during normalization.

use serde::Deserialize;

/// Top-level response from `GET /products`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProductsResponse {
    Bare(Vec<ApiProduct>),
    Envelope { products: Vec<ApiProduct> },
}

impl ProductsResponse {
    #[must_use]
    pub fn into_products(self) -> Vec<ApiProduct> {
        match self {
            Self::Bare(products) | Self::Envelope { products } => products,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiId {
    Text(String),
    Number(i64),
}

/// A single product as returned by the remote API.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiProduct {
    pub id: ApiId,

    pub title: String,

    /// Plain JSON number, e.g. `9.99`.
    pub price: f64,

    /// Category slug, e.g. `"beauty"`. Absent on some records.
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    /// Single preview image; used when `images` is empty.
    #[serde(default)]
    pub thumbnail: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub rating: Option<f64>,

    #[serde(default)]
    pub stock: Option<i64>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub reviews: Vec<ApiReview>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiReview {
    pub reviewer_name: String,
    pub date: String,
    #[serde(default)]
    pub comment: String,
    pub rating: f64,
}

/// One entry of `GET /categories`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiCategory {
    Name(String),
    Object {
        name: String,
        #[serde(default)]
        slug: Option<String>,
    },
}
