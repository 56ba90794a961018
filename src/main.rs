use std::sync::Arc;

use actix_web::{middleware::Logger, web, App, HttpServer};
use crate::config::{AppConfig, StoreKind};
use dotenv::dotenv;
use errors::AppError;
use graphql::CourseSchema;
use log::{error, info};
use services::CourseService;
use sqlx::postgres::PgPoolOptions;
use store::{CourseStore, MemoryCourseStore, PostgresCourseStore};
use utils::UuidGenerator;

mod config;
mod errors;
mod graphql;
mod handlers;
mod models;
mod schema;
mod services;
mod store;
mod utils;
#[cfg(test)]
mod test_init_app;

struct GlobalState{
    courses: CourseService,
    schema: CourseSchema,
}

async fn open_store(config: &AppConfig) -> Result<Arc<dyn CourseStore>, AppError>{
    match config.store {
        StoreKind::Memory => {
            info!("Keeping courses in memory");
            Ok(Arc::new(MemoryCourseStore::default()))
        },
        StoreKind::Postgres => {
            let database_url = config.database_url().ok_or_else(|| {
                error!("DATABASE_URL or COURSES_DATABASE__URL must be set");
                AppError::DbConnect
            })?;

            let pool = PgPoolOptions::new()
            .max_connections(config.database.max_connections)
            .connect(&database_url)
            .await
            .map_err(|e| {
                error!("Cant connect to the DB: {}", e);
                AppError::DbConnect
            })?;

            Ok(Arc::new(PostgresCourseStore::new(pool)))
        },
    }
}

#[actix_web::main]
async fn main() -> Result<(), AppError> {

    dotenv().ok();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info,sqlx=warn")).init();

    let config = AppConfig::load()?;
    let address = config.server_address();

    let courses = CourseService::new(open_store(&config).await?, Arc::new(UuidGenerator));

    let global_state = GlobalState{
        schema: graphql::build_schema(courses.clone()),
        courses,
    };

    let app_data = web::Data::new(global_state);

    info!("The Server is running at {}", address);

    HttpServer::new(
        move||{
            App::new()
            .wrap(Logger::default())
            .service(
                web::scope("/api/v1")
                .app_data(app_data.clone())
                .configure(handlers::configure)
            )
        }
    ).bind(&address)
    .map_err(|_e|AppError::SocketBind)?
    .run()
    .await
    .map_err(|_e|AppError::ServerStart)?;

    Ok(())

}
