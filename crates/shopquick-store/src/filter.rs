//! The page-local filter and sort pipeline.
//!
//! Filtering and sorting only ever see the products of the page currently
//! held by the store; they never reach back to the remote catalog. A filter
//! that matches nothing on this page yields an empty list even when other
//! pages hold matches.

use shopquick_core::{CatalogQuery, Product, SortOrder};

/// Applies `query` to one page of products.
///
/// Order of operations: category (exact, case-sensitive), then title search
/// (case-insensitive substring, skipped when empty), then a stable sort by
/// price. Total over its inputs: an empty page yields an empty list.
#[must_use]
pub fn visible_products(products: &[Product], query: &CatalogQuery) -> Vec<Product> {
    let needle = query.search_text.to_lowercase();

    let mut visible: Vec<Product> = products
        .iter()
        .filter(|p| query.category.matches(&p.category))
        .filter(|p| needle.is_empty() || p.title.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    sort_by_price(&mut visible, query.sort_order);
    visible
}

/// Stable sort by price; products with equal prices keep their relative order.
pub fn sort_by_price(products: &mut [Product], order: SortOrder) {
    match order {
        SortOrder::None => {}
        SortOrder::PriceAsc => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
        SortOrder::PriceDesc => products.sort_by(|a, b| b.price.total_cmp(&a.price)),
    }
}
