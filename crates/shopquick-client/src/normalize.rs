//! Normalization from raw API types to [`shopquick_core`] domain types.

use chrono::{DateTime, Utc};
use shopquick_core::{Category, Product, ProductId, Review};

use crate::error::CatalogError;
use crate::types::{ApiCategory, ApiId, ApiProduct, ApiReview};

/// Normalizes a raw [`ApiProduct`] into a [`Product`].
///
/// # Errors
///
/// Returns [`CatalogError::Normalization`] if the price is negative or not
/// finite, or if a review carries a date that is not RFC 3339.
pub fn normalize_product(product: ApiProduct) -> Result<Product, CatalogError> {
    let id = match product.id {
        ApiId::Text(s) => ProductId::new(s),
        ApiId::Number(n) => ProductId::from(n),
    };

    if !product.price.is_finite() || product.price < 0.0 {
        return Err(CatalogError::Normalization {
            product_id: id.to_string(),
            reason: format!("price {} is not a non-negative number", product.price),
        });
    }

    let mut images = product.images;
    if images.is_empty() {
        if let Some(thumbnail) = product.thumbnail.filter(|t| !t.is_empty()) {
            images.push(thumbnail);
        }
    }

    let reviews = product
        .reviews
        .into_iter()
        .map(|review| normalize_review(review, &id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Product {
        id,
        title: product.title,
        price: product.price,
        category: product.category.unwrap_or_default(),
        images,
        description: product.description.filter(|d| !d.is_empty()),
        rating: product.rating,
        stock: product.stock,
        tags: product.tags,
        reviews,
    })
}

fn normalize_review(review: ApiReview, product_id: &ProductId) -> Result<Review, CatalogError> {
    let date = DateTime::parse_from_rfc3339(&review.date)
        .map_err(|e| CatalogError::Normalization {
            product_id: product_id.to_string(),
            reason: format!("review date \"{}\": {e}", review.date),
        })?
        .with_timezone(&Utc);

    Ok(Review {
        reviewer_name: review.reviewer_name,
        date,
        comment: review.comment,
        rating: review.rating,
    })
}

/// Normalizes one category listing entry.
///
/// Object entries carry both a display `name` and a `slug`; products
/// reference the slug, so that is what becomes the category name.
#[must_use]
pub fn normalize_category(category: ApiCategory) -> Category {
    match category {
        ApiCategory::Name(name) => Category::new(name),
        ApiCategory::Object { name, slug } => Category::new(slug.unwrap_or(name)),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;
