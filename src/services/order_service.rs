use crate::entities::{
    LineItemStatus, OrderStatus, order_entity, order_line_item_entity, pass_entity,
};
use crate::error::{AppError, AppResult};
use crate::models::{CartItem, OrderResponse};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;

#[derive(Clone)]
pub struct OrderService {
    pool: DatabaseConnection,
}

impl OrderService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Builds an order from a cart of pass references. The order, its line
    /// items and the computed total are committed as one unit; a partial
    /// order is never visible.
    pub async fn create_order(
        &self,
        buyer_id: i64,
        cart_items: &[CartItem],
    ) -> AppResult<(order_entity::Model, Vec<order_line_item_entity::Model>)> {
        if cart_items.is_empty() {
            return Err(AppError::InvalidInput(
                "Cart must contain at least one item".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for item in cart_items {
            if item.quantity <= 0 {
                return Err(AppError::ValidationFailed(format!(
                    "Quantity for pass {} must be greater than 0",
                    item.pass_id
                )));
            }
            if !seen.insert(item.pass_id) {
                return Err(AppError::InvalidInput(format!(
                    "Cart contains pass {} more than once",
                    item.pass_id
                )));
            }
        }

        let txn = self.pool.begin().await?;

        // Resolve every pass before writing anything; one bad id fails the
        // whole cart.
        let mut resolved = Vec::with_capacity(cart_items.len());
        for item in cart_items {
            let pass = pass_entity::Entity::find_by_id(item.pass_id)
                .one(&txn)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Pass {} not found", item.pass_id)))?;
            resolved.push((pass, item.quantity));
        }

        let now = Utc::now();
        let currency = resolved[0].0.currency.clone();

        let order = order_entity::ActiveModel {
            user_id: Set(buyer_id),
            status: Set(OrderStatus::AwaitingApprovals),
            total_price_cents: Set(0),
            currency: Set(currency),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut line_items = Vec::with_capacity(resolved.len());
        let mut total: i64 = 0;
        for (pass, quantity) in resolved {
            // Snapshot the price so later pass edits do not move the order.
            let line_item = order_line_item_entity::ActiveModel {
                order_id: Set(order.id),
                pass_id: Set(pass.id),
                quantity: Set(quantity),
                price_at_purchase_cents: Set(pass.price_cents),
                status: Set(LineItemStatus::PendingApproval),
                created_at: Set(Some(now)),
                updated_at: Set(Some(now)),
                ..Default::default()
            }
            .insert(&txn)
            .await?;

            total += i64::from(quantity) * line_item.price_at_purchase_cents;
            line_items.push(line_item);
        }

        let mut order_update = order.into_active_model();
        order_update.total_price_cents = Set(total);
        order_update.updated_at = Set(Some(Utc::now()));
        let order = order_update.update(&txn).await?;

        txn.commit().await?;

        log::info!(
            "Created order {} for user {buyer_id} with {} line items, total {} {}",
            order.id,
            line_items.len(),
            order.total_price_cents,
            order.currency
        );

        Ok((order, line_items))
    }

    pub async fn get_order(&self, order_id: i64) -> AppResult<order_entity::Model> {
        order_entity::Entity::find_by_id(order_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))
    }

    pub async fn list_user_orders(&self, user_id: i64) -> AppResult<Vec<OrderResponse>> {
        let orders = order_entity::Entity::find()
            .filter(order_entity::Column::UserId.eq(user_id))
            .order_by_desc(order_entity::Column::Id)
            .all(&self.pool)
            .await?;

        let mut responses = Vec::with_capacity(orders.len());
        for order in orders {
            let line_items = order_line_item_entity::Entity::find()
                .filter(order_line_item_entity::Column::OrderId.eq(order.id))
                .all(&self.pool)
                .await?;
            responses.push(OrderResponse::from_parts(order, line_items));
        }

        Ok(responses)
    }
}
