use actix_web::{get, post, web, HttpResponse, Responder};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use crate::GlobalState;

#[post("/graphql")]
pub async fn graphql_handler(data:web::Data<GlobalState>, request:GraphQLRequest) -> GraphQLResponse {
    data.schema.execute(request.into_inner()).await.into()
}

#[get("/graphiql")]
pub async fn graphiql_handler() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint("/api/v1/graphql").finish())
}
