use actix_web::{HttpResponse, ResponseError, Result, web};
use serde_json::json;

use crate::models::*;
use crate::services::AuthService;

#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterUserRequest,
    responses(
        (status = 201, description = "User registered"),
        (status = 400, description = "Validation failed")
    )
)]
pub async fn register(
    auth_service: web::Data<AuthService>,
    body: web::Json<RegisterUserRequest>,
) -> Result<HttpResponse> {
    match auth_service.register(body.into_inner()).await {
        Ok(user) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": UserResponse::from(user)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    auth_service: web::Data<AuthService>,
    body: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    match auth_service.login(body.into_inner()).await {
        Ok(tokens) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tokens
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/auth/refresh",
    tag = "auth",
    request_body = RefreshTokenRequest,
    responses(
        (status = 200, description = "Tokens refreshed"),
        (status = 401, description = "Invalid refresh token")
    )
)]
pub async fn refresh(
    auth_service: web::Data<AuthService>,
    body: web::Json<RefreshTokenRequest>,
) -> Result<HttpResponse> {
    match auth_service.refresh(&body.refresh_token).await {
        Ok(tokens) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": tokens
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn auth_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/register", web::post().to(register))
            .route("/login", web::post().to(login))
            .route("/refresh", web::post().to(refresh)),
    );
}
