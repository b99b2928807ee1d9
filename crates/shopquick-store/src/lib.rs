pub mod detail;
pub mod error;
pub mod filter;
pub mod store;

pub use detail::{lookup_product, sorted_reviews, ProductDetail, ReviewOrder};
pub use error::StoreError;
pub use filter::{sort_by_price, visible_products};
pub use store::{CatalogSnapshot, CatalogStore, LoadingStatus, PageLoad};
