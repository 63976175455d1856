//! HTTP API integration tests
//!
//! Exercises the router end to end with axum-test over the in-memory store.

mod helpers;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use edu_platform::models::{Enrollment, GroupDetails, Lesson, ProductResponse, ProductStats, User};
use helpers::*;
use serde_json::json;

fn caller(user_id: i64) -> (HeaderName, HeaderValue) {
    (HeaderName::from_static("x-user-id"), HeaderValue::from(user_id))
}

async fn post_user(server: &TestServer, username: &str) -> User {
    let response = server
        .post("/api/v1/users")
        .json(&json!({ "username": username }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<User>()
}

async fn post_product(server: &TestServer, creator_id: i64, max_users_in_group: i32) -> ProductResponse {
    let response = server
        .post("/api/v1/products")
        .json(&json!({
            "name": "Async Rust",
            "start_datetime": "2025-03-01T10:00:00Z",
            "cost": "120.50",
            "creator_id": creator_id,
            "max_users_in_group": max_users_in_group,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<ProductResponse>()
}

async fn post_lesson(server: &TestServer, product_id: i64, name: &str) -> Lesson {
    let response = server
        .post("/api/v1/lessons")
        .json(&json!({
            "product_id": product_id,
            "name": name,
            "video_url": "https://videos.example.com/lesson",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Lesson>()
}

#[tokio::test]
async fn test_health() {
    let server = TestContext::new().server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.json::<serde_json::Value>()["status"], "ok");
}

#[tokio::test]
async fn test_create_product_applies_defaults() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;

    let response = server
        .post("/api/v1/products")
        .json(&json!({
            "name": "  Intro to Rust  ",
            "start_datetime": "2025-03-01T10:00:00Z",
            "cost": "10",
            "creator_id": author.id,
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created = response.json::<ProductResponse>();
    assert_eq!(created.product.name, "Intro to Rust");
    assert_eq!(created.product.min_users_in_group, 1);
    assert_eq!(created.product.max_users_in_group, 10);
    assert_eq!(created.lessons_count, 0);

    let fetched = server
        .get(&format!("/api/v1/products/{}", created.product.id))
        .await
        .json::<ProductResponse>();
    assert_eq!(fetched.product, created.product);
}

#[tokio::test]
async fn test_invalid_product_is_rejected() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;

    let response = server
        .post("/api/v1/products")
        .json(&json!({
            "name": "Broken",
            "start_datetime": "2025-03-01T10:00:00Z",
            "cost": "10",
            "creator_id": author.id,
            "min_users_in_group": 5,
            "max_users_in_group": 2,
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_lessons_require_access() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let outsider = post_user(&server, "outsider").await;
    let product = post_product(&server, author.id, 10).await.product;
    post_lesson(&server, product.id, "Futures").await;

    let (name, value) = caller(outsider.id);
    let response = server
        .get(&format!("/api/v1/products/{}/lessons", product.id))
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
    response.assert_json(&json!({ "error": "Access to the requested product is denied." }));
}

#[tokio::test]
async fn test_product_lessons_without_caller_header() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let product = post_product(&server, author.id, 10).await.product;

    let response = server.get(&format!("/api/v1/products/{}/lessons", product.id)).await;
    response.assert_status(StatusCode::UNAUTHORIZED);

    let response = server
        .get(&format!("/api/v1/products/{}/lessons", product.id))
        .add_header(HeaderName::from_static("x-user-id"), HeaderValue::from_static("abc"))
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_purchase_unlocks_lessons() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let buyer = post_user(&server, "buyer").await;
    let product = post_product(&server, author.id, 10).await.product;
    let lesson = post_lesson(&server, product.id, "Pinning").await;

    let response = server
        .post("/api/v1/accesses")
        .json(&json!({ "user_id": buyer.id, "product_id": product.id }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let enrollment = response.json::<Enrollment>();
    assert_eq!(enrollment.access.product_id, product.id);
    assert_eq!(enrollment.group.product_id, product.id);

    let (name, value) = caller(buyer.id);
    let lessons = server
        .get(&format!("/api/v1/products/{}/lessons", product.id))
        .add_header(name, value)
        .await
        .json::<Vec<Lesson>>();
    assert_eq!(lessons, vec![lesson]);

    let group = server
        .get(&format!("/api/v1/groups/{}", enrollment.group.id))
        .await
        .json::<GroupDetails>();
    assert_eq!(group.members, vec![buyer.id]);
}

#[tokio::test]
async fn test_purchase_of_unknown_product() {
    let server = TestContext::new().server();
    let buyer = post_user(&server, "buyer").await;

    let response = server
        .post("/api/v1/accesses")
        .json(&json!({ "user_id": buyer.id, "product_id": 77 }))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_groups_filtered_by_product() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let buyer = post_user(&server, "buyer").await;
    let first = post_product(&server, author.id, 10).await.product;
    let second = post_product(&server, author.id, 10).await.product;

    for product_id in [first.id, second.id] {
        server
            .post("/api/v1/accesses")
            .json(&json!({ "user_id": buyer.id, "product_id": product_id }))
            .await
            .assert_status(StatusCode::CREATED);
    }

    let groups = server
        .get("/api/v1/groups")
        .add_query_param("product_id", second.id)
        .await
        .json::<Vec<GroupDetails>>();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].group.product_id, second.id);
}

#[tokio::test]
async fn test_product_stats_endpoint() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let buyer = post_user(&server, "buyer").await;
    let product = post_product(&server, author.id, 4).await.product;
    post_lesson(&server, product.id, "Streams").await;

    server
        .post("/api/v1/accesses")
        .json(&json!({ "user_id": buyer.id, "product_id": product.id }))
        .await
        .assert_status(StatusCode::CREATED);

    let stats = server
        .get(&format!("/api/v1/product-stats/{}", product.id))
        .await
        .json::<ProductStats>();
    assert_eq!(stats.lessons_count, 1);
    assert_eq!(stats.students_count, 1);
    assert_eq!(stats.groups_count, 1);
    assert_eq!(stats.fill_percentage, 25.0);
    assert_eq!(stats.purchase_percentage, 50.0);

    let all = server.get("/api/v1/product-stats").await.json::<Vec<ProductStats>>();
    assert_eq!(all, vec![stats]);
}

#[tokio::test]
async fn test_update_and_delete_product() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let product = post_product(&server, author.id, 10).await.product;
    let path = format!("/api/v1/products/{}", product.id);

    let updated = server
        .patch(&path)
        .json(&json!({ "name": "Async Rust, 2nd edition", "max_users_in_group": 20 }))
        .await
        .json::<ProductResponse>();
    assert_eq!(updated.product.name, "Async Rust, 2nd edition");
    assert_eq!(updated.product.max_users_in_group, 20);
    assert_eq!(updated.product.cost, product.cost);

    server.delete(&path).await.assert_status(StatusCode::NO_CONTENT);
    server.get(&path).await.assert_status(StatusCode::NOT_FOUND);
    server.delete(&path).await.assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_invalid_partial_update_is_rejected() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let product = post_product(&server, author.id, 10).await.product;
    let path = format!("/api/v1/products/{}", product.id);

    for body in [
        json!({ "max_users_in_group": 0 }),
        json!({ "min_users_in_group": 11 }),
        json!({ "cost": "-5.00" }),
    ] {
        server.patch(&path).json(&body).await.assert_status(StatusCode::BAD_REQUEST);
    }

    let stored = server.get(&path).await.json::<ProductResponse>();
    assert_eq!(stored.product, product);
}

#[tokio::test]
async fn test_lesson_video_url_is_stored_as_given() {
    let server = TestContext::new().server();
    let author = post_user(&server, "author").await;
    let product = post_product(&server, author.id, 10).await.product;

    let response = server
        .post("/api/v1/lessons")
        .json(&json!({
            "product_id": product.id,
            "name": "Intro",
            "video_url": "https://Example.com",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let lesson = response.json::<Lesson>();
    assert_eq!(lesson.video_url, "https://Example.com");

    let stored = server.get(&format!("/api/v1/lessons/{}", lesson.id)).await.json::<Lesson>();
    assert_eq!(stored.video_url, "https://Example.com");
}

#[tokio::test]
async fn test_missing_entities_return_not_found() {
    let server = TestContext::new().server();

    for path in [
        "/api/v1/users/9",
        "/api/v1/products/9",
        "/api/v1/lessons/9",
        "/api/v1/groups/9",
        "/api/v1/product-stats/9",
    ] {
        server.get(path).await.assert_status(StatusCode::NOT_FOUND);
    }
}
