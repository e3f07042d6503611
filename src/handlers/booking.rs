use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::BookingService;

#[utoipa::path(
    post,
    path = "/academies/{academy_id}/class_schedules/{schedule_id}/bookings",
    tag = "booking",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("schedule_id" = i64, Path, description = "Class schedule id")
    ),
    responses(
        (status = 201, description = "Class booked, pass redeemed"),
        (status = 404, description = "Schedule not found for this academy"),
        (status = 422, description = "Already booked, or no usable pass")
    )
)]
pub async fn create_booking(
    booking_service: web::Data<BookingService>,
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);
    let (academy_id, schedule_id) = path.into_inner();

    match booking_service
        .create_booking_in_academy(user_id, academy_id, schedule_id)
        .await
    {
        Ok(booking) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": BookingResponse::from(booking)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/bookings",
    tag = "booking",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The user's bookings")
    )
)]
pub async fn list_bookings(
    booking_service: web::Data<BookingService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match booking_service.list_user_bookings(user_id).await {
        Ok(bookings) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": bookings
                .into_iter()
                .map(BookingResponse::from)
                .collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn booking_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/academies/{academy_id}/class_schedules/{schedule_id}/bookings")
            .route("", web::post().to(create_booking)),
    )
    .service(web::scope("/bookings").route("", web::get().to(list_bookings)));
}
