use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::AcademyService;

#[utoipa::path(
    get,
    path = "/academies",
    tag = "academy",
    responses(
        (status = 200, description = "List academies")
    )
)]
pub async fn list_academies(academy_service: web::Data<AcademyService>) -> Result<HttpResponse> {
    match academy_service.list_academies().await {
        Ok(academies) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": academies.into_iter().map(AcademyResponse::from).collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/academies/{academy_id}",
    tag = "academy",
    params(("academy_id" = i64, Path, description = "Academy id")),
    responses(
        (status = 200, description = "Academy detail"),
        (status = 404, description = "Academy not found")
    )
)]
pub async fn get_academy(
    academy_service: web::Data<AcademyService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match academy_service.get_academy(path.into_inner()).await {
        Ok(academy) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": AcademyResponse::from(academy)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/academies",
    tag = "academy",
    security(("bearer_auth" = [])),
    request_body = CreateAcademyRequest,
    responses(
        (status = 201, description = "Academy created"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn create_academy(
    academy_service: web::Data<AcademyService>,
    req: HttpRequest,
    body: web::Json<CreateAcademyRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match academy_service
        .create_academy(user_id, body.into_inner())
        .await
    {
        Ok(academy) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": AcademyResponse::from(academy)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn academy_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/academies")
            .route("", web::get().to(list_academies))
            .route("", web::post().to(create_academy))
            .route("/{academy_id}", web::get().to(get_academy)),
    );
}
