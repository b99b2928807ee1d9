use super::*;

fn api_product(price: f64) -> ApiProduct {
    ApiProduct {
        id: ApiId::Text("001".to_owned()),
        title: "Essence Mascara Lash Princess".to_owned(),
        price,
        category: Some("beauty".to_owned()),
        images: vec!["https://cdn.example.com/mascara/1.png".to_owned()],
        thumbnail: Some("https://cdn.example.com/mascara/thumb.png".to_owned()),
        description: Some("Volumizing mascara.".to_owned()),
        rating: Some(4.94),
        stock: Some(5),
        tags: vec!["beauty".to_owned(), "mascara".to_owned()],
        reviews: vec![ApiReview {
            reviewer_name: "John Doe".to_owned(),
            date: "2024-05-23T08:56:21.618Z".to_owned(),
            comment: "Very satisfied!".to_owned(),
            rating: 5.0,
        }],
    }
}

#[test]
fn normalizes_full_product() {
    let product = normalize_product(api_product(9.99)).unwrap();
    assert_eq!(product.id.as_str(), "001");
    assert_eq!(product.category, "beauty");
    assert_eq!(product.images.len(), 1);
    assert_eq!(product.tags, vec!["beauty", "mascara"]);
    assert_eq!(product.reviews.len(), 1);
    assert_eq!(product.reviews[0].reviewer_name, "John Doe");
    assert_eq!(
        product.reviews[0].date.to_rfc3339(),
        "2024-05-23T08:56:21.618+00:00"
    );
}

#[test]
fn numeric_id_becomes_string() {
    let mut raw = api_product(1.0);
    raw.id = ApiId::Number(42);
    let product = normalize_product(raw).unwrap();
    assert_eq!(product.id.as_str(), "42");
}

#[test]
fn zero_price_is_accepted() {
    let product = normalize_product(api_product(0.0)).unwrap();
    assert!(product.price.abs() < f64::EPSILON);
}

#[test]
fn negative_price_is_rejected() {
    let err = normalize_product(api_product(-1.0)).unwrap_err();
    assert!(
        matches!(err, CatalogError::Normalization { ref product_id, .. } if product_id == "001"),
        "expected Normalization, got: {err:?}"
    );
}

#[test]
fn nan_price_is_rejected() {
    let err = normalize_product(api_product(f64::NAN)).unwrap_err();
    assert!(err.is_decode());
}

#[test]
fn missing_category_becomes_empty_string() {
    let mut raw = api_product(5.0);
    raw.category = None;
    let product = normalize_product(raw).unwrap();
    assert_eq!(product.category, "");
}

#[test]
fn thumbnail_fills_empty_image_list() {
    let mut raw = api_product(5.0);
    raw.images.clear();
    let product = normalize_product(raw).unwrap();
    assert_eq!(
        product.images,
        vec!["https://cdn.example.com/mascara/thumb.png".to_owned()]
    );
}

#[test]
fn no_images_and_no_thumbnail_stays_empty() {
    let mut raw = api_product(5.0);
    raw.images.clear();
    raw.thumbnail = None;
    let product = normalize_product(raw).unwrap();
    assert!(product.images.is_empty());
}

#[test]
fn empty_description_is_treated_as_absent() {
    let mut raw = api_product(5.0);
    raw.description = Some(String::new());
    let product = normalize_product(raw).unwrap();
    assert!(product.description.is_none());
}

#[test]
fn invalid_review_date_is_rejected() {
    let mut raw = api_product(5.0);
    raw.reviews[0].date = "yesterday".to_owned();
    let err = normalize_product(raw).unwrap_err();
    assert!(matches!(err, CatalogError::Normalization { .. }));
}

#[test]
fn category_object_prefers_slug() {
    let category = normalize_category(ApiCategory::Object {
        name: "Home Decoration".to_owned(),
        slug: Some("home-decoration".to_owned()),
    });
    assert_eq!(category.name, "home-decoration");
}

#[test]
fn category_object_without_slug_uses_name() {
    let category = normalize_category(ApiCategory::Object {
        name: "Groceries".to_owned(),
        slug: None,
    });
    assert_eq!(category.name, "Groceries");
}

#[test]
fn category_string_is_kept() {
    assert_eq!(
        normalize_category(ApiCategory::Name("beauty".to_owned())).name,
        "beauty"
    );
}
