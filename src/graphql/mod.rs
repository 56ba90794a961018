use async_graphql::{EmptyMutation, EmptySubscription, Schema};

use crate::services::CourseService;

pub mod query;

pub use query::CourseQuery;

pub type CourseSchema = Schema<CourseQuery, EmptyMutation, EmptySubscription>;

pub fn build_schema(courses: CourseService) -> CourseSchema{
    Schema::build(CourseQuery, EmptyMutation, EmptySubscription)
        .data(courses)
        .finish()
}
