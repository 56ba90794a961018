use std::sync::Arc;

use actix_web::{body::MessageBody, test::{self}, App, web, dev::ServiceResponse, Error};
use actix_service::Service;
use actix_http::Request;
use async_trait::async_trait;
use crate::{errors::StoreError, graphql::build_schema, handlers, models::course::Course, services::CourseService, store::{CourseStore, MemoryCourseStore}, utils::SequentialIdGenerator, GlobalState};

/// Store whose every call fails with `DuplicateId(id)`.
pub struct FailingCourseStore{
    pub id: String,
}

impl FailingCourseStore{
    fn failure(&self) -> StoreError{
        StoreError::DuplicateId(self.id.clone())
    }
}

#[async_trait]
impl CourseStore for FailingCourseStore{
    async fn find_by_id(&self, _id: &str) -> Result<Option<Course>, StoreError>{
        Err(self.failure())
    }
    async fn find_all(&self) -> Result<Vec<Course>, StoreError>{
        Err(self.failure())
    }
    async fn find_by_ids(&self, _ids: &[String]) -> Result<Vec<Course>, StoreError>{
        Err(self.failure())
    }
    async fn insert(&self, _course: &Course) -> Result<(), StoreError>{
        Err(self.failure())
    }
    async fn save(&self, _course: &Course) -> Result<u64, StoreError>{
        Err(self.failure())
    }
    async fn delete(&self, _id: &str) -> Result<bool, StoreError>{
        Err(self.failure())
    }
}

/// Service over an empty in-memory store, ids `course-1`, `course-2`, ...
pub fn memory_courses() -> CourseService{
    CourseService::new(
        Arc::new(MemoryCourseStore::default()),
        Arc::new(SequentialIdGenerator::new("course")),
    )
}

/// Service whose store fails every call with `DuplicateId("x")`.
pub fn failing_courses() -> CourseService{
    CourseService::new(
        Arc::new(FailingCourseStore{id: "x".to_string()}),
        Arc::new(SequentialIdGenerator::new("course")),
    )
}

/// App over an empty in-memory store.
pub async fn init() -> (impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>, web::Data<GlobalState>) {
    init_with(memory_courses()).await
}

pub async fn init_with(courses: CourseService) -> (impl Service<Request, Response = ServiceResponse<impl MessageBody>, Error = Error>, web::Data<GlobalState>) {

    let global_state = GlobalState{
        schema: build_schema(courses.clone()),
        courses,
    };

    let app_data = web::Data::new(global_state);

    let app = test::init_service(
        App::new()
            .service(
                web::scope("/api/v1")
                .app_data(app_data.clone())
                .configure(handlers::configure)
            )
    ).await;

    (app, app_data)
}
