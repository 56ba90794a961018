use std::sync::Arc;

use log::{debug, info, warn};

use crate::{
    errors::StoreError,
    models::course::Course,
    schema::course::{CourseCreateRequest, CourseUpdateRequest},
    store::CourseStore,
    utils::IdGenerator,
};

use super::reconciler;

/// Reads and writes course aggregates through a `CourseStore`.
///
/// A missing course is an ordinary outcome (`None` / `false`). Store failures
/// come back as they were raised.
#[derive(Clone)]
pub struct CourseService{
    store: Arc<dyn CourseStore>,
    ids: Arc<dyn IdGenerator>,
}

impl CourseService{
    pub fn new(store: Arc<dyn CourseStore>, ids: Arc<dyn IdGenerator>) -> Self{
        CourseService{store, ids}
    }

    pub async fn get_course_by_id(&self, id: &str) -> Result<Option<Course>, StoreError>{
        debug!("fetching course {}", id);
        self.store.find_by_id(id).await
    }

    pub async fn get_courses(&self) -> Result<Vec<Course>, StoreError>{
        debug!("fetching all courses");
        self.store.find_all().await
    }

    pub async fn get_courses_by_ids(&self, ids: &[String]) -> Result<Vec<Course>, StoreError>{
        debug!("fetching {} courses by id", ids.len());
        self.store.find_by_ids(ids).await
    }

    pub async fn create_course(&self, request: CourseCreateRequest) -> Result<Course, StoreError>{
        let id = request.id.clone().unwrap_or_else(|| self.ids.next_id());

        let course = reconciler::create(request, id);
        self.store.insert(&course).await?;

        info!("created course {}", course.id);
        Ok(course)
    }

    /// `None` when no course has `request.id`, either at lookup or at save time.
    pub async fn update_course(&self, request: CourseUpdateRequest) -> Result<Option<Course>, StoreError>{
        let Some(existing) = self.store.find_by_id(&request.id).await? else {
            warn!("update skipped, course {} not found", request.id);
            return Ok(None);
        };

        debug!(
            "merging update into course {} (content replaced: {}, authors replaced: {})",
            request.id,
            request.content.is_present(),
            request.authors.is_present()
        );

        let course = reconciler::merge(existing, request);

        if self.store.save(&course).await? == 0{
            warn!("course {} disappeared before it could be saved", course.id);
            return Ok(None);
        }

        info!("updated course {}", course.id);
        Ok(Some(course))
    }

    pub async fn delete_course(&self, id: &str) -> Result<bool, StoreError>{
        let deleted = self.store.delete(id).await?;

        if deleted{
            info!("deleted course {}", id);
        } else {
            warn!("delete skipped, course {} not found", id);
        }

        Ok(deleted)
    }
}
