//! Integration tests for the product detail read path against a mocked
//! remote catalog.

use serde_json::json;
use shopquick_client::CatalogClient;
use shopquick_core::{CatalogConfig, ProductId};
use shopquick_store::{lookup_product, sorted_reviews, ProductDetail, ReviewOrder};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> CatalogClient {
    CatalogClient::new(&CatalogConfig::with_base_url(base_url))
        .expect("failed to build test CatalogClient")
}

#[tokio::test]
async fn missing_product_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/999"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = lookup_product(&client, &ProductId::new("999")).await;

    assert_eq!(
        detail,
        ProductDetail::NotFound {
            id: ProductId::new("999")
        }
    );
}

#[tokio::test]
async fn server_error_is_failed_not_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/001"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = lookup_product(&client, &ProductId::new("001")).await;

    match detail {
        ProductDetail::Failed { message } => assert!(message.contains("500"), "{message}"),
        other => panic!("expected Failed, got: {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_failed() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"unexpected": true})))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let detail = lookup_product(&client, &ProductId::new("001")).await;

    assert!(matches!(detail, ProductDetail::Failed { .. }), "{detail:?}");
}

#[tokio::test]
async fn found_product_exposes_sorted_reviews() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "001",
            "title": "Red Shoe",
            "price": 50,
            "category": "shoes",
            "reviews": [
                {"reviewerName": "Early", "date": "2024-01-01T00:00:00Z", "comment": "ok", "rating": 5},
                {"reviewerName": "Late", "date": "2024-06-01T00:00:00Z", "comment": "meh", "rating": 2}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let ProductDetail::Found(product) = lookup_product(&client, &ProductId::new("001")).await
    else {
        panic!("expected Found");
    };

    assert_eq!(product.title, "Red Shoe");
    let by_date: Vec<&str> = sorted_reviews(&product, ReviewOrder::Date)
        .into_iter()
        .map(|r| r.reviewer_name.as_str())
        .collect();
    assert_eq!(by_date, vec!["Late", "Early"]);
    let by_rating: Vec<&str> = sorted_reviews(&product, ReviewOrder::Rating)
        .into_iter()
        .map(|r| r.reviewer_name.as_str())
        .collect();
    assert_eq!(by_rating, vec!["Early", "Late"]);
}
