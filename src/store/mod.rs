use async_trait::async_trait;

use crate::{errors::StoreError, models::course::Course};

pub mod memory;
pub mod postgres;

pub use memory::MemoryCourseStore;
pub use postgres::PostgresCourseStore;

/// Persistence for whole course aggregates.
///
/// Every call works inside its own connection or transaction and gives it
/// back before returning, whether it succeeded or not.
#[async_trait]
pub trait CourseStore: Send + Sync{
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError>;

    /// All courses in storage order.
    async fn find_all(&self) -> Result<Vec<Course>, StoreError>;

    /// Courses whose id is in `ids`, in storage order. Unknown ids are skipped
    /// and repeated ids yield a single course.
    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, StoreError>;

    async fn insert(&self, course: &Course) -> Result<(), StoreError>;

    /// Overwrites the stored aggregate with `course`, owned rows included.
    /// Returns how many course rows matched `course.id`.
    async fn save(&self, course: &Course) -> Result<u64, StoreError>;

    /// Removes the course and everything it owns.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;
}
