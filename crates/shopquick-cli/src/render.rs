//! Plain-text views over catalog snapshots and product details.

use std::fmt::Write as _;

use shopquick_core::{Category, Product};
use shopquick_store::{sorted_reviews, CatalogSnapshot, LoadingStatus, ProductDetail, ReviewOrder};

pub fn catalog_page(snapshot: &CatalogSnapshot) -> String {
    let mut out = String::new();
    let page = snapshot.query.page;

    let _ = writeln!(out, "Page {page}");

    if snapshot.status == LoadingStatus::Error {
        let reason = snapshot
            .last_error
            .as_ref()
            .map_or_else(|| "unknown error".to_owned(), ToString::to_string);
        let _ = writeln!(
            out,
            "Failed to load products: {reason}. Try again with `list --page {page}`."
        );
    }

    if snapshot.visible.is_empty() {
        out.push_str("No products found.\n");
    } else {
        for product in &snapshot.visible {
            out.push_str(&product_line(product));
        }
    }

    let previous = if page > 1 { "[Previous]" } else { " Previous " };
    let next = if snapshot.has_more { "[Next]" } else { " Next " };
    let _ = writeln!(out, "{previous}  Page {page}  {next}");
    out
}

fn product_line(product: &Product) -> String {
    format!(
        "{:>6}  {:<40}  R{:>9.2}  {}\n",
        product.id.as_str(),
        product.title,
        product.price,
        product.category
    )
}

pub fn product_detail(detail: &ProductDetail, order: ReviewOrder) -> String {
    let product = match detail {
        ProductDetail::Found(product) => product,
        ProductDetail::NotFound { .. } => return "Product not found\n".to_owned(),
        ProductDetail::Failed { message } => {
            return format!("Error loading product: {message}\n");
        }
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", product.title);
    let _ = writeln!(
        out,
        "{}",
        product
            .description
            .as_deref()
            .unwrap_or("No description available.")
    );
    let _ = writeln!(out, "Price: R{:.2}", product.price);
    let _ = writeln!(out, "Category: {}", product.category);
    let tags = if product.tags.is_empty() {
        "No tags".to_owned()
    } else {
        product.tags.join(", ")
    };
    let _ = writeln!(out, "Tags: {tags}");
    match product.rating {
        Some(rating) => {
            let _ = writeln!(out, "Rating: {rating}");
        }
        None => out.push_str("Rating: No rating\n"),
    }
    match product.stock {
        Some(stock) => {
            let _ = writeln!(out, "Stock: {stock}");
        }
        None => out.push_str("Stock: Unavailable\n"),
    }
    if let Some(image) = product.primary_image() {
        let _ = writeln!(out, "Image: {image} ({} total)", product.images.len());
    }

    out.push_str("\nReviews\n");
    let reviews = sorted_reviews(product, order);
    if reviews.is_empty() {
        out.push_str("No reviews available.\n");
    }
    for review in reviews {
        let _ = writeln!(
            out,
            "- {} ({}) rated {}: {}",
            review.reviewer_name,
            review.date.format("%Y-%m-%d"),
            review.rating,
            review.comment
        );
    }
    out
}

pub fn category_list(categories: Option<&[Category]>) -> String {
    match categories {
        None => "Categories unavailable.\n".to_owned(),
        Some([]) => "No categories.\n".to_owned(),
        Some(categories) => categories.iter().fold(String::new(), |mut out, c| {
            let _ = writeln!(out, "{c}");
            out
        }),
    }
}
