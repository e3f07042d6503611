use crate::entities::{LineItemStatus, OrderStatus, order_entity, order_line_item_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    pub pass_id: i64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub cart_items: Vec<CartItem>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderLineItemResponse {
    pub id: i64,
    pub order_id: i64,
    pub pass_id: i64,
    pub quantity: i32,
    pub price_at_purchase_cents: i64,
    pub status: LineItemStatus,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    pub status: OrderStatus,
    pub total_price_cents: i64,
    pub currency: String,
    pub created_at: Option<DateTime<Utc>>,
    pub line_items: Vec<OrderLineItemResponse>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateLineItemStatusRequest {
    /// Requested status by name, e.g. "approved" or "rejected".
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LineItemQuery {
    pub status: Option<String>,
}

impl From<order_line_item_entity::Model> for OrderLineItemResponse {
    fn from(m: order_line_item_entity::Model) -> Self {
        Self {
            id: m.id,
            order_id: m.order_id,
            pass_id: m.pass_id,
            quantity: m.quantity,
            price_at_purchase_cents: m.price_at_purchase_cents,
            status: m.status,
            created_at: m.created_at,
        }
    }
}

impl OrderResponse {
    pub fn from_parts(
        order: order_entity::Model,
        line_items: Vec<order_line_item_entity::Model>,
    ) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total_price_cents: order.total_price_cents,
            currency: order.currency,
            created_at: order.created_at,
            line_items: line_items
                .into_iter()
                .map(OrderLineItemResponse::from)
                .collect(),
        }
    }
}
