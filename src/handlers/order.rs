use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::{OrderService, PaymentService};

#[utoipa::path(
    post,
    path = "/orders",
    tag = "order",
    security(("bearer_auth" = [])),
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created awaiting approvals"),
        (status = 400, description = "Empty cart or invalid quantity"),
        (status = 404, description = "Unknown pass id")
    )
)]
pub async fn create_order(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match order_service.create_order(user_id, &body.cart_items).await {
        Ok((order, line_items)) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": OrderResponse::from_parts(order, line_items)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/orders",
    tag = "order",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "The buyer's orders, newest first")
    )
)]
pub async fn list_orders(
    order_service: web::Data<OrderService>,
    req: HttpRequest,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match order_service.list_user_orders(user_id).await {
        Ok(orders) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": orders
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/orders/{order_id}/confirmation",
    tag = "order",
    security(("bearer_auth" = [])),
    params(("order_id" = i64, Path, description = "Order id")),
    responses(
        (status = 201, description = "Order settled; payment and entitlements created"),
        (status = 422, description = "Settlement preconditions unmet"),
        (status = 404, description = "Order not found")
    )
)]
pub async fn confirm_order(
    payment_service: web::Data<PaymentService>,
    req: HttpRequest,
    path: web::Path<i64>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match payment_service
        .settle_order(path.into_inner(), user_id)
        .await
    {
        Ok(payment) => Ok(HttpResponse::Created().json(json!({
            "success": true,
            "data": PaymentResponse::from(payment)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/orders")
            .route("", web::post().to(create_order))
            .route("", web::get().to(list_orders))
            .route("/{order_id}/confirmation", web::post().to(confirm_order)),
    );
}
