use tokio::sync::RwLock;
use uuid::Uuid;

use super::models::{Author, Course, CourseInput};

/// In-memory, insertion-ordered course collection.
///
/// All reads and writes go through a single lock, so concurrent handlers
/// observe each mutation atomically.
#[derive(Debug, Default)]
pub struct CourseStore {
    courses: RwLock<Vec<Course>>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every course in insertion order
    pub async fn list(&self) -> Vec<Course> {
        self.courses.read().await.clone()
    }

    pub async fn get(&self, id: Uuid) -> Option<Course> {
        self.courses
            .read()
            .await
            .iter()
            .find(|course| course.id == id)
            .cloned()
    }

    /// Store a validated course under a freshly generated id
    pub async fn create(&self, input: CourseInput) -> Course {
        let course = input.into_course(Uuid::new_v4());
        self.courses.write().await.push(course.clone());
        course
    }

    /// Swap the contents of an existing course, keeping its id and position.
    /// Returns `None` when no course has `id`.
    pub async fn replace(&self, id: Uuid, input: CourseInput) -> Option<Course> {
        let mut courses = self.courses.write().await;
        let slot = courses.iter_mut().find(|course| course.id == id)?;
        *slot = input.into_course(id);
        Some(slot.clone())
    }

    /// Remove the course with `id`, returning it
    pub async fn delete(&self, id: Uuid) -> Option<Course> {
        let mut courses = self.courses.write().await;
        let index = courses.iter().position(|course| course.id == id)?;
        Some(courses.remove(index))
    }

    pub async fn len(&self) -> usize {
        self.courses.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.courses.read().await.is_empty()
    }

    /// Insert the demo courses. Ids are assigned like any other create.
    pub async fn seed(&self) -> Vec<Course> {
        let mut seeded = Vec::new();
        for input in seed_courses() {
            seeded.push(self.create(input).await);
        }
        seeded
    }
}

fn seed_courses() -> Vec<CourseInput> {
    vec![
        CourseInput::new("Kotlin", 200, Some(Author::new("Aakash", "aakash.me"))),
        CourseInput::new("Golang", 300, Some(Author::new("Ali", "coursera.com"))),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn input(name: &str) -> CourseInput {
        CourseInput::new(name, 10, None)
    }

    #[tokio::test]
    async fn create_assigns_unique_ids_in_insertion_order() {
        let store = CourseStore::new();
        let a = store.create(input("a")).await;
        let b = store.create(input("b")).await;
        let c = store.create(input("c")).await;

        let ids: HashSet<_> = [a.id, b.id, c.id].into_iter().collect();
        assert_eq!(ids.len(), 3);
        assert!(!ids.contains(&Uuid::nil()));

        let names: Vec<_> = store.list().await.into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn get_finds_by_id() {
        let store = CourseStore::new();
        let created = store.create(input("rust")).await;

        assert_eq!(store.get(created.id).await, Some(created));
        assert_eq!(store.get(Uuid::new_v4()).await, None);
    }

    #[tokio::test]
    async fn replace_keeps_id_and_position() {
        let store = CourseStore::new();
        let first = store.create(input("first")).await;
        let second = store.create(input("second")).await;

        let replacement = CourseInput::new("renamed", 99, Some(Author::new("Jane", "jane.dev")));
        let replaced = store.replace(first.id, replacement).await.unwrap();

        assert_eq!(replaced.id, first.id);
        assert_eq!(replaced.name, "renamed");
        assert_eq!(replaced.price, 99);

        let listed = store.list().await;
        assert_eq!(listed, vec![replaced, second]);
    }

    #[tokio::test]
    async fn replace_unknown_id_leaves_store_untouched() {
        let store = CourseStore::new();
        store.create(input("only")).await;

        assert!(store.replace(Uuid::new_v4(), input("ghost")).await.is_none());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.list().await[0].name, "only");
    }

    #[tokio::test]
    async fn delete_removes_exactly_one() {
        let store = CourseStore::new();
        let keep = store.create(input("keep")).await;
        let gone = store.create(input("gone")).await;

        assert_eq!(store.delete(gone.id).await, Some(gone.clone()));
        assert_eq!(store.len().await, 1);
        assert!(store.get(gone.id).await.is_none());
        assert_eq!(store.get(keep.id).await, Some(keep));

        assert!(store.delete(gone.id).await.is_none());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn seed_inserts_demo_courses() {
        let store = CourseStore::new();
        assert!(store.is_empty().await);

        let seeded = store.seed().await;
        assert_eq!(seeded.len(), 2);
        assert_eq!(seeded[0].name, "Kotlin");
        assert_eq!(seeded[1].name, "Golang");
        assert_ne!(seeded[0].id, seeded[1].id);
        assert_eq!(store.list().await, seeded);
    }

    #[tokio::test]
    async fn concurrent_creates_are_not_lost() {
        let store = std::sync::Arc::new(CourseStore::new());
        let mut handles = Vec::new();
        for i in 0..64 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store.create(CourseInput::new(format!("c{}", i), i, None)).await
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.len().await, 64);
    }
}
