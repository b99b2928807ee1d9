pub mod app_config;
pub mod config;
pub mod products;
pub mod query;

pub use app_config::CatalogConfig;
pub use config::{load_catalog_config, load_catalog_config_from_env, ConfigError};
pub use products::{Category, Product, ProductId, Review};
pub use query::{CatalogQuery, CategoryFilter, ParseSortOrderError, SortOrder};
