use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::ClassScheduleService;

#[utoipa::path(
    get,
    path = "/academies/{academy_id}/class_schedules",
    tag = "class_schedule",
    params(("academy_id" = i64, Path, description = "Academy id")),
    responses(
        (status = 200, description = "Weekly schedule for the academy")
    )
)]
pub async fn list_schedules(
    schedule_service: web::Data<ClassScheduleService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match schedule_service.list_for_academy(path.into_inner()).await {
        Ok(schedules) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": schedules
                .into_iter()
                .map(ClassScheduleResponse::from)
                .collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/academies/{academy_id}/class_schedules",
    tag = "class_schedule",
    security(("bearer_auth" = [])),
    params(("academy_id" = i64, Path, description = "Academy id")),
    request_body = CreateClassScheduleRequest,
    responses(
        (status = 201, description = "Schedule created"),
        (status = 403, description = "Not the academy owner")
    )
)]
pub async fn create_schedule(
    schedule_service: web::Data<ClassScheduleService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreateClassScheduleRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match schedule_service
        .create_schedule(path.into_inner(), user_id, body.into_inner())
        .await
    {
        Ok(schedule) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": ClassScheduleResponse::from(schedule)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/academies/{academy_id}/class_schedules/{schedule_id}",
    tag = "class_schedule",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("schedule_id" = i64, Path, description = "Class schedule id")
    ),
    responses(
        (status = 204, description = "Schedule deleted"),
        (status = 403, description = "Not the academy owner")
    )
)]
pub async fn delete_schedule(
    schedule_service: web::Data<ClassScheduleService>,
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    let (_academy_id, schedule_id) = path.into_inner();

    match schedule_service.delete_schedule(schedule_id, user_id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn class_schedule_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/academies/{academy_id}/class_schedules")
            .route("", web::get().to(list_schedules))
            .route("", web::post().to(create_schedule))
            .route("/{schedule_id}", web::delete().to(delete_schedule)),
    );
}
