use actix_web::{HttpRequest, HttpResponse, ResponseError, Result, web};
use serde_json::json;

use super::get_user_id_from_request;
use crate::models::*;
use crate::services::OrderLineItemService;

#[utoipa::path(
    patch,
    path = "/order_line_items/{line_item_id}",
    tag = "order_line_item",
    security(("bearer_auth" = [])),
    params(("line_item_id" = i64, Path, description = "Line item id")),
    request_body = UpdateLineItemStatusRequest,
    responses(
        (status = 200, description = "Line item status updated"),
        (status = 403, description = "Not the owning academy"),
        (status = 422, description = "Invalid status or transition")
    )
)]
pub async fn update_line_item_status(
    line_item_service: web::Data<OrderLineItemService>,
    req: HttpRequest,
    path: web::Path<i64>,
    body: web::Json<UpdateLineItemStatusRequest>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match line_item_service
        .update_status(path.into_inner(), &body.status, user_id)
        .await
    {
        Ok(line_item) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": OrderLineItemResponse::from(line_item)
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    get,
    path = "/academies/{academy_id}/order_line_items",
    tag = "order_line_item",
    security(("bearer_auth" = [])),
    params(
        ("academy_id" = i64, Path, description = "Academy id"),
        ("status" = Option<String>, Query, description = "Filter by status")
    ),
    responses(
        (status = 200, description = "The academy's approval inbox"),
        (status = 403, description = "Not the academy owner")
    )
)]
pub async fn list_academy_line_items(
    line_item_service: web::Data<OrderLineItemService>,
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<LineItemQuery>,
) -> Result<HttpResponse> {
    let user_id = get_user_id_from_request(&req).unwrap_or(0);

    match line_item_service
        .list_for_academy(path.into_inner(), user_id, query.status.as_deref())
        .await
    {
        Ok(line_items) => Ok(HttpResponse::Ok().json(json!({
            "success": true,
            "data": line_items
                .into_iter()
                .map(OrderLineItemResponse::from)
                .collect::<Vec<_>>()
        }))),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn order_line_item_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/order_line_items")
            .route("/{line_item_id}", web::patch().to(update_line_item_status)),
    )
    .service(
        web::scope("/academies/{academy_id}/order_line_items")
            .route("", web::get().to(list_academy_line_items)),
    );
}
