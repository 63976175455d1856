//! Group assignment integration tests
//!
//! Drives purchases through the access service over the in-memory store and
//! checks where buyers end up.

mod helpers;

use std::collections::BTreeSet;
use assert_matches::assert_matches;
use edu_platform::models::Group;
use edu_platform::{PlatformError, SharedStore};
use helpers::*;

/// Create a group holding the given members directly through an enrollment
async fn seed_group(store: &SharedStore, product_id: i64, name: &str, members: &[i64]) -> Group {
    let mut tx = store.begin_enrollment().await.unwrap();
    let group = tx.create_group(product_id, name).await.unwrap();
    for user_id in members {
        tx.add_member(group.id, *user_id).await.unwrap();
    }
    tx.commit().await.unwrap();
    group
}

async fn member_count(store: &SharedStore, group_id: i64) -> usize {
    store.find_group(group_id).await.unwrap().unwrap().members.len()
}

#[tokio::test]
async fn test_buyer_joins_least_filled_open_group() {
    let ctx = TestContext::new();
    let users = create_users(&ctx.services, 13).await;
    let product = create_product(&ctx.services, users[0].id, 10).await.product;

    let ids: Vec<i64> = users.iter().map(|u| u.id).collect();
    let g1 = seed_group(&ctx.store, product.id, "G1", &ids[0..2]).await;
    let g2 = seed_group(&ctx.store, product.id, "G2", &ids[2..12]).await;

    let enrollment = buy(&ctx.services, ids[12], product.id).await.unwrap();

    assert_eq!(enrollment.group.id, g1.id);
    assert_eq!(member_count(&ctx.store, g1.id).await, 3);
    assert_eq!(member_count(&ctx.store, g2.id).await, 10);
}

#[tokio::test]
async fn test_first_buyer_creates_group() {
    let ctx = TestContext::new();
    let author = create_user(&ctx.services, "author").await;
    let buyer = create_user(&ctx.services, "buyer").await;
    let product = create_product(&ctx.services, author.id, 10).await.product;

    let enrollment = buy(&ctx.services, buyer.id, product.id).await.unwrap();

    assert_eq!(enrollment.group.product_id, product.id);
    assert_eq!(enrollment.group.name, format!("New group for {}", product.name));
    assert_eq!(enrollment.access.user_id, buyer.id);

    let groups = ctx.store.group_occupancy(product.id).await.unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].member_count, 1);
    let details = ctx.store.find_group(enrollment.group.id).await.unwrap().unwrap();
    assert_eq!(details.members, vec![buyer.id]);
}

#[tokio::test]
async fn test_new_group_created_when_all_full() {
    let ctx = TestContext::new();
    let users = create_users(&ctx.services, 5).await;
    let product = create_product(&ctx.services, users[0].id, 2).await.product;

    let mut group_ids = Vec::new();
    for user in &users {
        group_ids.push(buy(&ctx.services, user.id, product.id).await.unwrap().group.id);
    }

    // Seats fill two at a time before the next group opens
    assert_eq!(group_ids[0], group_ids[1]);
    assert_eq!(group_ids[2], group_ids[3]);
    assert_ne!(group_ids[1], group_ids[2]);
    assert_ne!(group_ids[3], group_ids[4]);

    let occupancy = ctx.store.group_occupancy(product.id).await.unwrap();
    let counts: Vec<i64> = occupancy.iter().map(|g| g.member_count).collect();
    assert_eq!(counts, vec![2, 2, 1]);
}

#[tokio::test]
async fn test_tie_goes_to_lowest_group_id() {
    let ctx = TestContext::new();
    let users = create_users(&ctx.services, 5).await;
    let product = create_product(&ctx.services, users[0].id, 5).await.product;

    let first = seed_group(&ctx.store, product.id, "first", &[users[0].id]).await;
    seed_group(&ctx.store, product.id, "second", &[users[1].id]).await;

    let enrollment = buy(&ctx.services, users[2].id, product.id).await.unwrap();
    assert_eq!(enrollment.group.id, first.id);
}

#[tokio::test]
async fn test_repeat_purchase_keeps_existing_group() {
    let ctx = TestContext::new();
    let author = create_user(&ctx.services, "author").await;
    let buyer = create_user(&ctx.services, "buyer").await;
    let product = create_product(&ctx.services, author.id, 3).await.product;

    let first = buy(&ctx.services, buyer.id, product.id).await.unwrap();
    let second = buy(&ctx.services, buyer.id, product.id).await.unwrap();

    assert_eq!(first.group.id, second.group.id);
    assert_ne!(first.access.id, second.access.id);
    assert_eq!(member_count(&ctx.store, first.group.id).await, 1);
    assert_eq!(ctx.store.count_students(product.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_unknown_product_is_rejected() {
    let ctx = TestContext::new();
    let buyer = create_user(&ctx.services, "buyer").await;

    let result = buy(&ctx.services, buyer.id, 404).await;
    assert_matches!(result, Err(PlatformError::ProductNotFound { product_id: 404 }));
}

#[tokio::test]
async fn test_unknown_user_leaves_no_trace() {
    let ctx = TestContext::new();
    let author = create_user(&ctx.services, "author").await;
    let product = create_product(&ctx.services, author.id, 3).await.product;

    let result = buy(&ctx.services, 999, product.id).await;
    assert_matches!(result, Err(PlatformError::UserNotFound { user_id: 999 }));

    assert!(!ctx.store.has_access(999, product.id).await.unwrap());
    assert!(ctx.store.group_occupancy(product.id).await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_purchases_respect_capacity() {
    let ctx = TestContext::new();
    let users = create_users(&ctx.services, 20).await;
    let product = create_product(&ctx.services, users[0].id, 3).await.product;

    let mut handles = Vec::new();
    for user in &users {
        let services = ctx.services.clone();
        let user_id = user.id;
        let product_id = product.id;
        handles.push(tokio::spawn(async move { buy(&services, user_id, product_id).await }));
    }

    let mut placed = BTreeSet::new();
    for handle in handles {
        let enrollment = handle.await.unwrap().unwrap();
        placed.insert(enrollment.access.user_id);
    }
    assert_eq!(placed.len(), 20);

    let occupancy = ctx.store.group_occupancy(product.id).await.unwrap();
    assert!(occupancy.iter().all(|g| g.member_count <= 3));
    assert_eq!(occupancy.iter().map(|g| g.member_count).sum::<i64>(), 20);
    assert_eq!(occupancy.len(), 7);
}
