use async_graphql::{Context, Object, Result};

use crate::{models::course::Course, services::CourseService};

pub struct CourseQuery;

#[Object]
impl CourseQuery{
    #[graphql(name = "getCourses")]
    async fn get_courses(&self, ctx: &Context<'_>) -> Result<Vec<Course>>{
        let courses = ctx.data::<CourseService>()?;
        Ok(courses.get_courses().await?)
    }

    #[graphql(name = "getCourseById")]
    async fn get_course_by_id(&self, ctx: &Context<'_>, id: String) -> Result<Option<Course>>{
        let courses = ctx.data::<CourseService>()?;
        Ok(courses.get_course_by_id(&id).await?)
    }

    #[graphql(name = "getCoursesByIds")]
    async fn get_courses_by_ids(&self, ctx: &Context<'_>, ids: Vec<String>) -> Result<Vec<Course>>{
        let courses = ctx.data::<CourseService>()?;
        Ok(courses.get_courses_by_ids(&ids).await?)
    }
}
