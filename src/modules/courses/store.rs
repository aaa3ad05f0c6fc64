//! In-memory, insertion-ordered course store.
//!
//! Every mutation takes the write lock, so concurrent handlers are
//! serialized. Lookups are linear scans.

use thiserror::Error;
use tokio::sync::RwLock;

use super::models::Course;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("course {id} not found")]
    NotFound { id: String },
}

#[derive(Debug)]
struct Inner {
    courses: Vec<Course>,
    next_id: u64,
}

impl Inner {
    fn contains(&self, id: &str) -> bool {
        self.courses.iter().any(|course| course.courseid == id)
    }

    fn position(&self, id: &str) -> Result<usize, StoreError> {
        self.courses
            .iter()
            .position(|course| course.courseid == id)
            .ok_or_else(|| StoreError::NotFound { id: id.to_string() })
    }

    /// Next counter value not already taken by a seeded or client-visible id
    fn allocate_id(&mut self) -> String {
        loop {
            let candidate = self.next_id.to_string();
            self.next_id += 1;
            if !self.contains(&candidate) {
                return candidate;
            }
        }
    }
}

#[derive(Debug)]
pub struct CourseStore {
    inner: RwLock<Inner>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::with_courses(Vec::new())
    }

    /// Seed the store; records keep their ids and order
    pub fn with_courses(courses: Vec<Course>) -> Self {
        Self {
            inner: RwLock::new(Inner {
                courses,
                next_id: 1,
            }),
        }
    }

    /// Snapshot of all courses in insertion order
    pub async fn list(&self) -> Vec<Course> {
        self.inner.read().await.courses.clone()
    }

    pub async fn get(&self, id: &str) -> Result<Course, StoreError> {
        let inner = self.inner.read().await;
        let index = inner.position(id)?;
        Ok(inner.courses[index].clone())
    }

    /// Append `course` under a freshly assigned id; any client id is discarded
    pub async fn create(&self, mut course: Course) -> Course {
        let mut inner = self.inner.write().await;
        course.courseid = inner.allocate_id();
        inner.courses.push(course.clone());
        tracing::debug!(course_id = %course.courseid, "course created");
        course
    }

    /// Replace the whole record stored under `id`; the id itself is kept
    pub async fn update(&self, id: &str, mut replacement: Course) -> Result<Course, StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        replacement.courseid = id.to_string();
        inner.courses[index] = replacement.clone();
        tracing::debug!(course_id = %id, "course replaced");
        Ok(replacement)
    }

    /// Remove the record stored under `id`, keeping the order of the rest
    pub async fn delete(&self, id: &str) -> Result<Course, StoreError> {
        let mut inner = self.inner.write().await;
        let index = inner.position(id)?;
        let removed = inner.courses.remove(index);
        tracing::debug!(course_id = %id, "course deleted");
        Ok(removed)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.courses.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for CourseStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::courses::models::{demo_courses, Author};
    use std::collections::HashSet;
    use std::sync::Arc;

    fn course(name: &str) -> Course {
        Course {
            coursename: name.to_string(),
            price: 100,
            author: Some(Author {
                fullname: "ada".to_string(),
                website: "ada.dev".to_string(),
            }),
            ..Course::default()
        }
    }

    fn ids(courses: &[Course]) -> Vec<&str> {
        courses.iter().map(|c| c.courseid.as_str()).collect()
    }

    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = CourseStore::new();
        assert!(store.list().await.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn list_preserves_insertion_order() {
        let store = CourseStore::new();
        for name in ["alpha", "beta", "gamma"] {
            store.create(course(name)).await;
        }

        let names: Vec<String> = store
            .list()
            .await
            .into_iter()
            .map(|c| c.coursename)
            .collect();
        assert_eq!(names, vec!["alpha", "beta", "gamma"]);
    }

    #[tokio::test]
    async fn create_assigns_decimal_ids_and_ignores_client_id() {
        let store = CourseStore::new();
        let mut submitted = course("rust");
        submitted.courseid = "client-chosen".to_string();

        let created = store.create(submitted).await;
        assert_eq!(created.courseid, "1");
        assert!(created.courseid.parse::<u64>().is_ok());
        assert_eq!(store.get("1").await.unwrap(), created);
        assert!(store.get("client-chosen").await.is_err());
    }

    #[tokio::test]
    async fn generated_ids_skip_seeded_ones() {
        let store = CourseStore::with_courses(vec![
            Course {
                courseid: "1".to_string(),
                ..course("seed-one")
            },
            Course {
                courseid: "2".to_string(),
                ..course("seed-two")
            },
        ]);

        let created = store.create(course("fresh")).await;
        assert_eq!(created.courseid, "3");
    }

    #[tokio::test]
    async fn concurrent_creates_get_distinct_ids() {
        let store = Arc::new(CourseStore::with_courses(demo_courses()));
        let mut tasks = Vec::new();
        for i in 0..64 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                store.create(course(&format!("course-{i}"))).await.courseid
            }));
        }

        let mut seen = HashSet::new();
        for task in tasks {
            assert!(seen.insert(task.await.unwrap()));
        }
        assert_eq!(store.len().await, 66);

        let all = store.list().await;
        let unique: HashSet<&str> = ids(&all).into_iter().collect();
        assert_eq!(unique.len(), all.len());
    }

    #[tokio::test]
    async fn get_missing_is_not_found() {
        let store = CourseStore::with_courses(demo_courses());
        assert_eq!(
            store.get("99").await,
            Err(StoreError::NotFound {
                id: "99".to_string()
            })
        );
    }

    #[tokio::test]
    async fn update_replaces_everything_but_the_id() {
        let store = CourseStore::with_courses(demo_courses());
        let mut replacement = course("svelte");
        replacement.courseid = "777".to_string();

        let updated = store.update("20", replacement).await.unwrap();
        assert_eq!(updated.courseid, "20");
        assert_eq!(updated.coursename, "svelte");

        let stored = store.get("20").await.unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.price, 100);
        assert_eq!(stored.author.unwrap().fullname, "ada");
        assert!(store.get("777").await.is_err());
        assert_eq!(ids(&store.list().await), vec!["20", "30"]);
    }

    #[tokio::test]
    async fn update_missing_leaves_store_unchanged() {
        let store = CourseStore::with_courses(demo_courses());
        let before = store.list().await;

        let err = store.update("99", course("ghost")).await.unwrap_err();
        assert_eq!(err.to_string(), "course 99 not found");
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn delete_removes_one_and_keeps_order() {
        let store = CourseStore::new();
        for name in ["a", "b", "c", "d"] {
            store.create(course(name)).await;
        }

        let removed = store.delete("2").await.unwrap();
        assert_eq!(removed.coursename, "b");
        assert_eq!(ids(&store.list().await), vec!["1", "3", "4"]);
    }

    #[tokio::test]
    async fn delete_missing_leaves_size_unchanged() {
        let store = CourseStore::with_courses(demo_courses());
        assert!(store.delete("99").await.is_err());
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn deleted_id_is_not_reissued() {
        let store = CourseStore::new();
        let first = store.create(course("a")).await;
        store.delete(&first.courseid).await.unwrap();

        let second = store.create(course("b")).await;
        assert_ne!(first.courseid, second.courseid);
    }
}
