use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Stable product identifier as issued by the remote catalog.
///
/// The remote sends ids as either JSON strings (`"001"`) or integers; both
/// are kept as strings so leading zeros survive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<i64> for ProductId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

/// A catalog product, immutable once received from the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    /// Non-negative, finite.
    pub price: f64,
    /// Free-form category name. Not guaranteed to appear in the category list.
    pub category: String,
    /// Ordered image URLs; may be empty.
    pub images: Vec<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub stock: Option<i64>,
    pub tags: Vec<String>,
    pub reviews: Vec<Review>,
}

impl Product {
    /// First image URL, if the product has any.
    #[must_use]
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub reviewer_name: String,
    pub date: DateTime<Utc>,
    pub comment: String,
    pub rating: f64,
}

/// A category name from the remote category listing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
}

impl Category {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str) -> Product {
        Product {
            id: ProductId::new("1"),
            title: title.to_string(),
            price: 10.0,
            category: "shoes".to_string(),
            images: Vec::new(),
            description: None,
            rating: None,
            stock: None,
            tags: Vec::new(),
            reviews: Vec::new(),
        }
    }

    #[test]
    fn primary_image_is_first_url() {
        let mut p = product("Red Shoe");
        assert!(p.primary_image().is_none());
        p.images = vec!["https://a/1.jpg".into(), "https://a/2.jpg".into()];
        assert_eq!(p.primary_image(), Some("https://a/1.jpg"));
    }

    #[test]
    fn product_id_from_integer_keeps_digits() {
        assert_eq!(ProductId::from(42).as_str(), "42");
        assert_eq!(ProductId::from("007").to_string(), "007");
    }

    #[test]
    fn product_id_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new("001")).unwrap();
        assert_eq!(json, "\"001\"");
    }
}
