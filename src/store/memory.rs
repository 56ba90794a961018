use std::collections::HashSet;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::{errors::StoreError, models::course::Course};

use super::CourseStore;

/// Keeps courses in insertion order. Used for local runs and tests.
#[derive(Debug, Default)]
pub struct MemoryCourseStore{
    courses: RwLock<Vec<Course>>,
}

#[async_trait]
impl CourseStore for MemoryCourseStore{
    async fn find_by_id(&self, id: &str) -> Result<Option<Course>, StoreError>{
        let courses = self.courses.read();
        Ok(courses.iter().find(|course| course.id == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Course>, StoreError>{
        Ok(self.courses.read().clone())
    }

    async fn find_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, StoreError>{
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        let courses = self.courses.read();

        Ok(courses.iter().filter(|course| wanted.contains(course.id.as_str())).cloned().collect())
    }

    async fn insert(&self, course: &Course) -> Result<(), StoreError>{
        let mut courses = self.courses.write();

        if courses.iter().any(|existing| existing.id == course.id){
            return Err(StoreError::DuplicateId(course.id.clone()));
        }

        courses.push(course.clone());
        Ok(())
    }

    async fn save(&self, course: &Course) -> Result<u64, StoreError>{
        let mut courses = self.courses.write();

        match courses.iter_mut().find(|existing| existing.id == course.id) {
            Some(existing) => {
                *existing = course.clone();
                Ok(1)
            },
            None => Ok(0),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError>{
        let mut courses = self.courses.write();
        let before = courses.len();

        courses.retain(|course| course.id != id);
        Ok(courses.len() < before)
    }
}
