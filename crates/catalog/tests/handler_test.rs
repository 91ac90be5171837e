mod common;

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header::CONTENT_TYPE},
};
use catalog::{handler::AppRouter, state::AppState};
use common::{InMemoryStore, RecordingNotifier, deps};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn app(store: &Arc<InMemoryStore>, notifier: &Arc<RecordingNotifier>) -> Router {
    AppRouter::build(AppState::from_deps(deps(store, notifier)))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

#[tokio::test]
async fn v1_product_is_flat() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(app, Method::GET, "/api/v1/product?id=p1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "uuid": "p1",
            "name": "product1",
            "brand": "GFG",
            "stock": 5,
            "seller_uuid": "s1",
        })
    );
}

#[tokio::test]
async fn v2_product_links_to_v1_seller_route() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(app, Method::GET, "/api/v2/product?id=p1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["seller"],
        json!({
            "uuid": "s1",
            "_links": { "self": { "href": "http://localhost:8080/api/v1/sellers/s1" } }
        })
    );
    assert!(body.get("seller_uuid").is_none());
}

#[tokio::test]
async fn v2_list_uses_nested_shape() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(app, Method::GET, "/api/v2/products", None).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["seller"]["uuid"], "s1");
}

#[tokio::test]
async fn unknown_product_is_404_with_error_body() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(app, Method::GET, "/api/v1/product?id=missing", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Product is not found with id=missing" }));
}

#[tokio::test]
async fn missing_or_empty_id_is_400() {
    let store = InMemoryStore::seeded();
    let notifier = RecordingNotifier::new();

    let (status, body) = send(app(&store, &notifier), Method::GET, "/api/v1/product", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));

    let (status, body) =
        send(app(&store, &notifier), Method::DELETE, "/api/v1/product?id=", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "id: id is required" }));
}

#[tokio::test]
async fn negative_stock_is_rejected_before_the_service() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/product",
        Some(json!({ "name": "shoe", "brand": "GFG", "stock": -1, "seller": "s1" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "stock: Stock cannot be negative" }));
    assert!(store.inserts.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_with_unknown_seller_is_404() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/product",
        Some(json!({ "name": "shoe", "brand": "GFG", "stock": 1, "seller": "s9" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Seller is not found with id=s9" }));
}

#[tokio::test]
async fn create_returns_v1_product() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/product",
        Some(json!({ "name": "shoe", "brand": "GFG", "stock": 3, "seller": "s1" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "shoe");
    assert_eq!(body["seller_uuid"], "s1");
    assert_eq!(store.product_count(), 2);
}

#[tokio::test]
async fn update_with_new_stock_notifies_seller() {
    let store = InMemoryStore::seeded();
    let notifier = RecordingNotifier::new();
    let app = app(&store, &notifier);

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/v1/product?id=p1",
        Some(json!({ "name": "product1", "brand": "GFG", "stock": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["uuid"], "p1");
    assert_eq!(body["stock"], 7);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!((sent[0].old_stock, sent[0].new_stock), (5, 7));
    assert_eq!(sent[0].seller.uuid, "s1");
}

#[tokio::test]
async fn update_with_stock_only_body_is_accepted() {
    let store = InMemoryStore::seeded();
    let notifier = RecordingNotifier::new();
    let app = app(&store, &notifier);

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/v1/product?id=p1",
        Some(json!({ "stock": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["stock"], 7);

    let sent = notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!((sent[0].old_stock, sent[0].new_stock), (5, 7));
    assert_eq!(sent[0].seller.uuid, "s1");
}

#[tokio::test]
async fn update_with_vanished_seller_is_404_but_persisted() {
    let store = InMemoryStore::seeded();
    store.remove_seller("s1");
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/v1/product?id=p1",
        Some(json!({ "name": "product1", "brand": "GFG", "stock": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Seller is not found with id=s1" }));
    assert_eq!(store.product("p1").unwrap().stock, 7);
}

#[tokio::test]
async fn store_failure_is_500_with_generic_message() {
    let store = InMemoryStore::seeded();
    store.fail_writes();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(
        app,
        Method::PUT,
        "/api/v1/product?id=p1",
        Some(json!({ "name": "product1", "brand": "GFG", "stock": 7 })),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Fail to update product" }));
}

#[tokio::test]
async fn page_zero_surfaces_as_500() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(app, Method::GET, "/api/v1/products?page=0", None).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Fail to query product list" }));
}

#[tokio::test]
async fn delete_returns_empty_object() {
    let store = InMemoryStore::seeded();
    let app = app(&store, &RecordingNotifier::new());

    let (status, body) = send(app, Method::DELETE, "/api/v1/product?id=p1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({}));
    assert!(store.product("p1").is_none());
}

#[tokio::test]
async fn seller_routes_resolve() {
    let store = InMemoryStore::seeded();
    let notifier = RecordingNotifier::new();

    let (status, body) = send(app(&store, &notifier), Method::GET, "/api/v1/sellers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, body) =
        send(app(&store, &notifier), Method::GET, "/api/v1/sellers/s1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "s1@example.com");

    let (status, body) =
        send(app(&store, &notifier), Method::GET, "/api/v1/sellers/s404", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Seller is not found with id=s404" }));

    let (status, body) =
        send(app(&store, &notifier), Method::GET, "/api/v2/sellers/top10", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["uuid"], "s1");
}

#[tokio::test]
async fn metrics_and_openapi_are_served() {
    let store = InMemoryStore::seeded();
    let router = app(&store, &RecordingNotifier::new());

    let _ = send(router.clone(), Method::GET, "/api/v1/product?id=p1", None).await;

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/metrics")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("product_query_service_request_counter"));
    assert!(text.contains("method=\"Get\",status=\"Success\""));

    let (status, doc) = send(router, Method::GET, "/api-docs/openapi.json", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"].get("/api/v1/product").is_some());
    assert!(doc["paths"].get("/api/v2/sellers/top10").is_some());
}
