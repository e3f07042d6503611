use crate::entities::{
    LineItemStatus, OrderStatus, PassLimit, PassType, PaymentStatus, StudentPassStatus,
    order_entity, order_line_item_entity, pass_entity, payment_entity, student_pass_entity,
};
use crate::error::{AppError, AppResult, SettlementBlock};
use crate::utils::generate_processor_id;
use chrono::{Duration, Months, Utc};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait,
    IntoActiveModel, QueryFilter, Set, TransactionTrait,
};

#[derive(Clone)]
pub struct PaymentService {
    pool: DatabaseConnection,
}

impl PaymentService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Finalizes an order once every line item is approved: charges the mock
    /// processor, marks the order completed and activates one student pass
    /// per line item. The whole settlement is one transaction; an activation
    /// failure rolls back the payment and the status change.
    pub async fn settle_order(
        &self,
        order_id: i64,
        actor_id: i64,
    ) -> AppResult<payment_entity::Model> {
        let order = order_entity::Entity::find_by_id(order_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

        if order.user_id != actor_id {
            return Err(AppError::Forbidden);
        }

        if order.status != OrderStatus::AwaitingApprovals {
            return Err(AppError::NotReady(SettlementBlock::NotAwaitingApprovals {
                current_status: order.status.to_string(),
            }));
        }

        let line_items = order_line_item_entity::Entity::find()
            .filter(order_line_item_entity::Column::OrderId.eq(order.id))
            .all(&self.pool)
            .await?;

        if line_items.is_empty()
            || line_items
                .iter()
                .any(|li| li.status != LineItemStatus::Approved)
        {
            return Err(AppError::NotReady(SettlementBlock::LineItemsNotApproved));
        }

        let txn = self.pool.begin().await?;
        let now = Utc::now();

        let payment = payment_entity::ActiveModel {
            order_id: Set(order.id),
            status: Set(PaymentStatus::Succeeded),
            amount_cents: Set(order.total_price_cents),
            currency: Set(order.currency.clone()),
            processor: Set("mock".to_string()),
            processor_id: Set(generate_processor_id("mock_ch")),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        let mut order_update = order.into_active_model();
        order_update.status = Set(OrderStatus::Completed);
        order_update.updated_at = Set(Some(now));
        order_update.update(&txn).await?;

        for line_item in &line_items {
            activate_pass(&txn, line_item).await.map_err(|e| {
                AppError::TransactionAborted(format!(
                    "Failed to activate pass for line item {}: {e}",
                    line_item.id
                ))
            })?;
        }

        txn.commit().await?;

        log::info!(
            "Settled order {order_id}: payment {} for {} {} covering {} line items",
            payment.processor_id,
            payment.amount_cents,
            payment.currency,
            line_items.len()
        );

        Ok(payment)
    }
}

/// Converts a settled line item into a redeemable entitlement. Runs on the
/// settlement transaction so a failure here aborts the whole settlement.
async fn activate_pass<C: ConnectionTrait>(
    conn: &C,
    line_item: &order_line_item_entity::Model,
) -> AppResult<student_pass_entity::Model> {
    let pass = pass_entity::Entity::find_by_id(line_item.pass_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Pass {} not found", line_item.pass_id)))?;

    let order = order_entity::Entity::find_by_id(line_item.order_id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", line_item.order_id)))?;

    let now = Utc::now();
    let limit = match pass.pass_type {
        PassType::DayPass => PassLimit::TimeLimited(now + Duration::days(1)),
        PassType::WeekPass => PassLimit::TimeLimited(now + Duration::days(7)),
        PassType::MonthPass => PassLimit::TimeLimited(
            now.checked_add_months(Months::new(1))
                .ok_or_else(|| AppError::InternalError("Expiry date out of range".to_string()))?,
        ),
        PassType::PunchCard => {
            let credits = pass.class_credits.filter(|c| *c > 0).ok_or_else(|| {
                AppError::ValidationFailed(format!(
                    "Punch card pass {} has no class credits",
                    pass.id
                ))
            })?;
            PassLimit::CreditLimited(credits)
        }
        PassType::Single => PassLimit::CreditLimited(1),
    };

    let (expires_at, credits_remaining) = match limit {
        PassLimit::TimeLimited(at) => (Some(at), None),
        PassLimit::CreditLimited(credits) => (None, Some(credits)),
    };

    let student_pass = student_pass_entity::ActiveModel {
        user_id: Set(order.user_id),
        pass_id: Set(pass.id),
        order_line_item_id: Set(line_item.id),
        academy_id: Set(pass.academy_id),
        status: Set(StudentPassStatus::Active),
        expires_at: Set(expires_at),
        credits_remaining: Set(credits_remaining),
        created_at: Set(Some(now)),
        updated_at: Set(Some(now)),
        ..Default::default()
    }
    .insert(conn)
    .await?;

    Ok(student_pass)
}
