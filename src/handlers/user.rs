use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::UserService;

#[utoipa::path(
    get,
    path = "/profile",
    tag = "user",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Current user profile"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn get_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match user_service.get_profile(user_id).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": UserResponse::from(user)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    put,
    path = "/profile",
    tag = "user",
    security(("bearer_auth" = [])),
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated"),
        (status = 401, description = "Unauthorized")
    )
)]
pub async fn update_profile(
    user_service: web::Data<UserService>,
    req: HttpRequest,
    body: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match user_service.update_profile(user_id, body.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": UserResponse::from(user)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn user_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/profile")
            .route("", web::get().to(get_profile))
            .route("", web::put().to(update_profile)),
    );
}
