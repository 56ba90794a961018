use actix_web::{delete, post, put, web::{self, Json}, HttpResponse, Responder};
use log::error;

use crate::{errors::CustomError, schema::{course::{CourseCreateRequest, CourseUpdateRequest}, DeleteResponse}, GlobalState};

#[post("")]
pub async fn create_course_handler(data:web::Data<GlobalState>, request:Json<CourseCreateRequest>) -> impl Responder {

    let course_res = data.courses.create_course(request.into_inner()).await;

    match course_res {
        Ok(course) => HttpResponse::Ok().json(course),
        Err(e) => {
            error!("Error while creating a course: {}", e);
            HttpResponse::BadGateway().json(CustomError::new(e.to_string()))
        },
    }
}

#[put("")]
pub async fn update_course_handler(data:web::Data<GlobalState>, request:Json<CourseUpdateRequest>) -> impl Responder {

    let course_id = request.id.clone();
    let course_res = data.courses.update_course(request.into_inner()).await;

    match course_res {
        Ok(Some(course)) => HttpResponse::Ok().json(course),
        Ok(None) => HttpResponse::NotFound().json(CustomError::new(format!("course {} not found", course_id))),
        Err(e) => {
            error!("Error while updating course {}: {}", course_id, e);
            HttpResponse::BadGateway().json(CustomError::new(e.to_string()))
        },
    }
}

#[delete("/{course_id}")]
pub async fn delete_course_handler(data:web::Data<GlobalState>, path:web::Path<String>) -> impl Responder {

    let course_id = path.into_inner();

    match data.courses.delete_course(&course_id).await {
        Ok(deleted) => HttpResponse::Ok().json(DeleteResponse{id: course_id, deleted}),
        Err(e) => {
            error!("Error while deleting course {}: {}", course_id, e);
            HttpResponse::BadGateway().json(CustomError::new(e.to_string()))
        },
    }
}
