use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::PassService;

#[utoipa::path(
    get,
    path = "/academies/{academy_id}/passes",
    tag = "pass",
    params(("academy_id" = i64, Path, description = "Academy id")),
    responses(
        (status = 200, description = "Active passes for the academy")
    )
)]
pub async fn list_passes(
    pass_service: web::Data<PassService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match pass_service.list_for_academy(path.into_inner()).await {
        Ok(passes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": passes.into_iter().map(PassResponse::from).collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/academies/{academy_id}/passes",
    tag = "pass",
    security(("bearer_auth" = [])),
    params(("academy_id" = i64, Path, description = "Academy id")),
    request_body = CreatePassRequest,
    responses(
        (status = 201, description = "Pass created"),
        (status = 403, description = "Not the academy owner")
    )
)]
pub async fn create_pass(
    pass_service: web::Data<PassService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreatePassRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match pass_service
        .create_pass(path.into_inner(), user_id, body.into_inner())
        .await
    {
        Ok(pass) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": PassResponse::from(pass)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/academies/{academy_id}/passes/{pass_id}",
    tag = "pass",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("pass_id" = i64, Path, description = "Pass id")
    ),
    request_body = UpdatePassRequest,
    responses(
        (status = 200, description = "Pass updated"),
        (status = 403, description = "Not the academy owner")
    )
)]
pub async fn update_pass(
    pass_service: web::Data<PassService>,
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<UpdatePassRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    let (academy_id, pass_id) = path.into_inner();

    match pass_service
        .update_pass(academy_id, pass_id, user_id, body.into_inner())
        .await
    {
        Ok(pass) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": PassResponse::from(pass)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/academies/{academy_id}/passes/{pass_id}",
    tag = "pass",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("pass_id" = i64, Path, description = "Pass id")
    ),
    responses(
        (status = 204, description = "Pass deleted"),
        (status = 403, description = "Not the academy owner")
    )
)]
pub async fn delete_pass(
    pass_service: web::Data<PassService>,
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    let (academy_id, pass_id) = path.into_inner();

    match pass_service.delete_pass(academy_id, pass_id, user_id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn pass_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/academies/{academy_id}/passes")
            .route("", web::get().to(list_passes))
            .route("", web::post().to(create_pass))
            .route("/{pass_id}", web::put().to(update_pass))
            .route("/{pass_id}", web::delete().to(delete_pass)),
    );
}
