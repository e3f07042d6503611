use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::StudentPassService;

#[utoipa::path(
    get,
    path = "/student_passes",
    tag = "student_pass",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's entitlements, newest first")
    )
)]
pub async fn list_student_passes(
    student_pass_service: web::Data<StudentPassService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match student_pass_service.list_for_user(user_id).await {
        Ok(passes) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": passes
                .into_iter()
                .map(StudentPassResponse::from)
                .collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn student_pass_config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/student_passes").route("", web::get().to(list_student_passes)));
}
