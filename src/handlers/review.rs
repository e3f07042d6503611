use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::ReviewService;

#[utoipa::path(
    get,
    path = "/academies/{academy_id}/reviews",
    tag = "review",
    params(("academy_id" = i64, Path, description = "Academy id")),
    responses(
        (status = 200, description = "Reviews for the academy")
    )
)]
pub async fn list_reviews(
    review_service: web::Data<ReviewService>,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    match review_service.list_for_academy(path.into_inner()).await {
        Ok(reviews) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": reviews.into_iter().map(ReviewResponse::from).collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/academies/{academy_id}/reviews",
    tag = "review",
    security(("bearer_auth" = [])),
    params(("academy_id" = i64, Path, description = "Academy id")),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review created"),
        (status = 400, description = "Not attended, duplicate, or bad rating")
    )
)]
pub async fn create_review(
    review_service: web::Data<ReviewService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<CreateReviewRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match review_service
        .create_review(user_id, path.into_inner(), body.into_inner())
        .await
    {
        Ok(review) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": ReviewResponse::from(review)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    patch,
    path = "/academies/{academy_id}/reviews/{review_id}",
    tag = "review",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    request_body = UpdateReviewRequest,
    responses(
        (status = 200, description = "Review updated"),
        (status = 403, description = "Not the author")
    )
)]
pub async fn update_review(
    review_service: web::Data<ReviewService>,
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<UpdateReviewRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    let (_academy_id, review_id) = path.into_inner();

    match review_service
        .update_review(review_id, user_id, body.into_inner())
        .await
    {
        Ok(review) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": ReviewResponse::from(review)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    delete,
    path = "/academies/{academy_id}/reviews/{review_id}",
    tag = "review",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("review_id" = i64, Path, description = "Review id")
    ),
    responses(
        (status = 204, description = "Review deleted"),
        (status = 403, description = "Not the author")
    )
)]
pub async fn delete_review(
    review_service: web::Data<ReviewService>,
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    let (_academy_id, review_id) = path.into_inner();

    match review_service.delete_review(review_id, user_id).await {
        Ok(()) => Ok(HttpResponse::NoContent().finish()),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn review_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/academies/{academy_id}/reviews")
            .route("", web::get().to(list_reviews))
            .route("", web::post().to(create_review))
            .route("/{review_id}", web::patch().to(update_review))
            .route("/{review_id}", web::delete().to(delete_review)),
    );
}
