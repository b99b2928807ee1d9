//! Single-product read path for the detail view.

use std::str::FromStr;

use shopquick_client::CatalogSource;
use shopquick_core::{Product, ProductId, Review};

/// What the detail view should show for a requested id.
#[derive(Debug, Clone, PartialEq)]
pub enum ProductDetail {
    Found(Box<Product>),
    /// The remote answered 404. Rendered as a "not found" page, not an error.
    NotFound { id: ProductId },
    /// Any other failure: transport, unexpected status, or a malformed body.
    Failed { message: String },
}

/// Fetches one product and classifies the outcome for rendering. Never
/// caches and never mutates catalog state.
pub async fn lookup_product<S: CatalogSource>(source: &S, id: &ProductId) -> ProductDetail {
    match source.get_product(id).await {
        Ok(product) => ProductDetail::Found(Box::new(product)),
        Err(err) if err.is_not_found() => {
            tracing::debug!(%id, "product not found");
            ProductDetail::NotFound { id: id.clone() }
        }
        Err(err) => {
            tracing::warn!(%id, error = %err, "product lookup failed");
            ProductDetail::Failed {
                message: err.to_string(),
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReviewOrder {
    /// Most recent first.
    #[default]
    Date,
    /// Highest rating first.
    Rating,
}

impl FromStr for ReviewOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "rating" => Ok(Self::Rating),
            other => Err(format!(
                "unknown review order \"{other}\" (expected date or rating)"
            )),
        }
    }
}

/// The product's reviews in display order. Ties keep their original order.
#[must_use]
pub fn sorted_reviews(product: &Product, order: ReviewOrder) -> Vec<&Review> {
    let mut reviews: Vec<&Review> = product.reviews.iter().collect();
    match order {
        ReviewOrder::Date => reviews.sort_by(|a, b| b.date.cmp(&a.date)),
        ReviewOrder::Rating => reviews.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
    }
    reviews
}
