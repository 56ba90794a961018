pub mod course;
pub mod graphql;

use actix_web::{get, web, Responder};

#[get("/health")]
pub async fn health() -> impl Responder{
    "ok"
}

/// Everything served under `/api/v1`.
pub fn configure(cfg: &mut web::ServiceConfig){
    cfg.service(health)
        .service(graphql::graphql_handler)
        .service(graphql::graphiql_handler)
        .service(
            web::scope("/courses")
            .service(course::create_course_handler)
            .service(course::update_course_handler)
            .service(course::delete_course_handler)
        );
}
