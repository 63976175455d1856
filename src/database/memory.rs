//! In-process store
//!
//! Keeps every table in ordered maps behind one async lock. An enrollment
//! holds the write lock for its whole lifetime and works on a copy of the
//! state that replaces the original on commit.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{OwnedRwLockWriteGuard, RwLock};
use crate::database::store::{EnrollmentTx, Store};
use crate::models::*;
use crate::utils::errors::Result;

#[derive(Debug, Clone, Default)]
struct Sequences {
    users: i64,
    products: i64,
    lessons: i64,
    groups: i64,
    accesses: i64,
}

fn next(seq: &mut i64) -> i64 {
    *seq += 1;
    *seq
}

#[derive(Debug, Clone, Default)]
struct MemoryState {
    seq: Sequences,
    users: BTreeMap<i64, User>,
    products: BTreeMap<i64, Product>,
    lessons: BTreeMap<i64, Lesson>,
    groups: BTreeMap<i64, Group>,
    /// Group ID to member user IDs in join order
    members: BTreeMap<i64, Vec<i64>>,
    accesses: BTreeMap<i64, Access>,
}

impl MemoryState {
    fn occupancy(&self, product_id: i64) -> Vec<GroupOccupancy> {
        self.groups
            .values()
            .filter(|g| g.product_id == product_id)
            .map(|g| GroupOccupancy {
                group: g.clone(),
                member_count: self.members.get(&g.id).map_or(0, |m| m.len() as i64),
            })
            .collect()
    }

    fn details(&self, group: &Group) -> GroupDetails {
        GroupDetails {
            group: group.clone(),
            members: self.members.get(&group.id).cloned().unwrap_or_default(),
        }
    }
}

fn paginate<T: Clone>(items: impl Iterator<Item = T>, page: Page) -> Vec<T> {
    items
        .skip(usize::try_from(page.offset).unwrap_or(usize::MAX))
        .take(usize::try_from(page.limit).unwrap_or(usize::MAX))
        .collect()
}

/// Store that lives entirely in process memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<MemoryState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        let mut state = self.state.write().await;
        let user = User {
            id: next(&mut state.seq.users),
            username: request.username,
            created_at: Utc::now(),
        };
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_user(&self, id: i64) -> Result<Option<User>> {
        Ok(self.state.read().await.users.get(&id).cloned())
    }

    async fn count_users(&self) -> Result<i64> {
        Ok(self.state.read().await.users.len() as i64)
    }

    async fn create_product(&self, request: CreateProductRequest) -> Result<Product> {
        let mut state = self.state.write().await;
        let product = Product {
            id: next(&mut state.seq.products),
            name: request.name,
            start_datetime: request.start_datetime,
            cost: request.cost,
            creator_id: request.creator_id,
            min_users_in_group: request.min_users_in_group.unwrap_or(1),
            max_users_in_group: request.max_users_in_group.unwrap_or(10),
            created_at: Utc::now(),
        };
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    async fn find_product(&self, id: i64) -> Result<Option<Product>> {
        Ok(self.state.read().await.products.get(&id).cloned())
    }

    async fn list_products(&self, page: Page) -> Result<Vec<Product>> {
        let state = self.state.read().await;
        Ok(paginate(state.products.values().cloned(), page))
    }

    async fn update_product(&self, id: i64, request: UpdateProductRequest) -> Result<Option<Product>> {
        let mut state = self.state.write().await;
        Ok(state.products.get_mut(&id).map(|product| {
            *product = request.apply_to(product);
            product.clone()
        }))
    }

    async fn delete_product(&self, id: i64) -> Result<bool> {
        let mut state = self.state.write().await;
        if state.products.remove(&id).is_none() {
            return Ok(false);
        }

        let group_ids: Vec<i64> = state
            .groups
            .values()
            .filter(|g| g.product_id == id)
            .map(|g| g.id)
            .collect();
        for group_id in group_ids {
            state.groups.remove(&group_id);
            state.members.remove(&group_id);
        }
        state.lessons.retain(|_, lesson| lesson.product_id != id);
        state.accesses.retain(|_, access| access.product_id != id);

        Ok(true)
    }

    async fn create_lesson(&self, request: CreateLessonRequest) -> Result<Lesson> {
        let mut state = self.state.write().await;
        let lesson = Lesson {
            id: next(&mut state.seq.lessons),
            product_id: request.product_id,
            name: request.name,
            video_url: request.video_url,
            created_at: Utc::now(),
        };
        state.lessons.insert(lesson.id, lesson.clone());
        Ok(lesson)
    }

    async fn find_lesson(&self, id: i64) -> Result<Option<Lesson>> {
        Ok(self.state.read().await.lessons.get(&id).cloned())
    }

    async fn list_lessons(&self, page: Page) -> Result<Vec<Lesson>> {
        let state = self.state.read().await;
        Ok(paginate(state.lessons.values().cloned(), page))
    }

    async fn lessons_for_product(&self, product_id: i64) -> Result<Vec<Lesson>> {
        let state = self.state.read().await;
        Ok(state
            .lessons
            .values()
            .filter(|l| l.product_id == product_id)
            .cloned()
            .collect())
    }

    async fn count_lessons(&self, product_id: i64) -> Result<i64> {
        let state = self.state.read().await;
        Ok(state.lessons.values().filter(|l| l.product_id == product_id).count() as i64)
    }

    async fn find_group(&self, id: i64) -> Result<Option<GroupDetails>> {
        let state = self.state.read().await;
        Ok(state.groups.get(&id).map(|g| state.details(g)))
    }

    async fn list_groups(&self, product_id: Option<i64>, page: Page) -> Result<Vec<GroupDetails>> {
        let state = self.state.read().await;
        let groups = state
            .groups
            .values()
            .filter(|g| product_id.map_or(true, |id| g.product_id == id))
            .map(|g| state.details(g));
        Ok(paginate(groups, page))
    }

    async fn group_occupancy(&self, product_id: i64) -> Result<Vec<GroupOccupancy>> {
        Ok(self.state.read().await.occupancy(product_id))
    }

    async fn has_access(&self, user_id: i64, product_id: i64) -> Result<bool> {
        let state = self.state.read().await;
        Ok(state
            .accesses
            .values()
            .any(|a| a.user_id == user_id && a.product_id == product_id))
    }

    async fn count_students(&self, product_id: i64) -> Result<i64> {
        let state = self.state.read().await;
        let students: BTreeSet<i64> = state
            .accesses
            .values()
            .filter(|a| a.product_id == product_id)
            .map(|a| a.user_id)
            .collect();
        Ok(students.len() as i64)
    }

    async fn begin_enrollment(&self) -> Result<Box<dyn EnrollmentTx>> {
        // Copies the whole state under the write lock; fine for tests and
        // demos, not meant for production load
        let guard = self.state.clone().write_owned().await;
        let working = guard.clone();
        Ok(Box::new(MemoryEnrollment { guard, working }))
    }

    async fn health_check(&self) -> Result<()> {
        Ok(())
    }
}

/// Enrollment over the memory store; holds the write lock until dropped
struct MemoryEnrollment {
    guard: OwnedRwLockWriteGuard<MemoryState>,
    working: MemoryState,
}

#[async_trait]
impl EnrollmentTx for MemoryEnrollment {
    async fn lock_product(&mut self, product_id: i64) -> Result<Option<Product>> {
        Ok(self.working.products.get(&product_id).cloned())
    }

    async fn user_exists(&mut self, user_id: i64) -> Result<bool> {
        Ok(self.working.users.contains_key(&user_id))
    }

    async fn insert_access(&mut self, request: &GrantAccessRequest) -> Result<Access> {
        let access = Access {
            id: next(&mut self.working.seq.accesses),
            user_id: request.user_id,
            product_id: request.product_id,
            created_at: Utc::now(),
        };
        self.working.accesses.insert(access.id, access.clone());
        Ok(access)
    }

    async fn group_of_member(&mut self, product_id: i64, user_id: i64) -> Result<Option<Group>> {
        let state = &self.working;
        Ok(state
            .groups
            .values()
            .filter(|g| g.product_id == product_id)
            .find(|g| state.members.get(&g.id).is_some_and(|m| m.contains(&user_id)))
            .cloned())
    }

    async fn group_occupancy(&mut self, product_id: i64) -> Result<Vec<GroupOccupancy>> {
        Ok(self.working.occupancy(product_id))
    }

    async fn create_group(&mut self, product_id: i64, name: &str) -> Result<Group> {
        let group = Group {
            id: next(&mut self.working.seq.groups),
            product_id,
            name: name.to_string(),
            created_at: Utc::now(),
        };
        self.working.groups.insert(group.id, group.clone());
        Ok(group)
    }

    async fn add_member(&mut self, group_id: i64, user_id: i64) -> Result<()> {
        let members = self.working.members.entry(group_id).or_default();
        if !members.contains(&user_id) {
            members.push(user_id);
        }
        Ok(())
    }

    async fn commit(self: Box<Self>) -> Result<()> {
        let MemoryEnrollment { mut guard, working } = *self;
        *guard = working;
        Ok(())
    }
}
