//! Catalog fixtures
//!
//! Helpers that create users, products, lessons and purchases through the
//! services, the same path the HTTP API takes.

use chrono::{TimeZone, Utc};
use edu_platform::models::{
    CreateLessonRequest, CreateProductRequest, CreateUserRequest, Enrollment, GrantAccessRequest, Lesson,
    ProductResponse, User,
};
use edu_platform::services::ServiceFactory;
use edu_platform::Result;
use rust_decimal::Decimal;

pub async fn create_user(services: &ServiceFactory, username: &str) -> User {
    services
        .user_service
        .register_user(CreateUserRequest {
            username: username.to_string(),
        })
        .await
        .expect("Failed to create user")
}

pub async fn create_users(services: &ServiceFactory, count: usize) -> Vec<User> {
    let mut users = Vec::with_capacity(count);
    for i in 0..count {
        users.push(create_user(services, &format!("student{}", i)).await);
    }
    users
}

pub fn product_request(creator_id: i64, name: &str, max_users_in_group: i32) -> CreateProductRequest {
    CreateProductRequest {
        name: name.to_string(),
        start_datetime: Utc.with_ymd_and_hms(2025, 3, 1, 10, 0, 0).unwrap(),
        cost: Decimal::new(4990, 2),
        creator_id,
        min_users_in_group: Some(1),
        max_users_in_group: Some(max_users_in_group),
    }
}

pub async fn create_product(services: &ServiceFactory, creator_id: i64, max_users_in_group: i32) -> ProductResponse {
    services
        .product_service
        .create_product(product_request(creator_id, "Rust for Beginners", max_users_in_group))
        .await
        .expect("Failed to create product")
}

pub async fn create_lesson(services: &ServiceFactory, product_id: i64, name: &str) -> Lesson {
    services
        .lesson_service
        .create_lesson(CreateLessonRequest {
            product_id,
            name: name.to_string(),
            video_url: format!("https://videos.example.com/{}", name.replace(' ', "-")),
        })
        .await
        .expect("Failed to create lesson")
}

pub async fn buy(services: &ServiceFactory, user_id: i64, product_id: i64) -> Result<Enrollment> {
    services
        .access_service
        .grant_access(GrantAccessRequest { user_id, product_id })
        .await
}
