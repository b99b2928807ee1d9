pub mod client;
pub mod error;
pub mod normalize;
pub mod source;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;
pub use normalize::{normalize_category, normalize_product};
pub use source::CatalogSource;
pub use types::{ApiCategory, ApiProduct, ApiReview, ProductsResponse};
