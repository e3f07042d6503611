use crate::entities::{
    LineItemStatus, academy_entity, order_line_item_entity, pass_entity,
};
use crate::error::{AppError, AppResult};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QueryOrder, Set,
};
use std::str::FromStr;

#[derive(Clone)]
pub struct OrderLineItemService {
    pool: DatabaseConnection,
}

impl OrderLineItemService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    /// Drives the per-line-item approval state machine. Only the academy
    /// owning the line item's pass may move it, and only out of
    /// pending_approval.
    pub async fn update_status(
        &self,
        line_item_id: i64,
        requested_status: &str,
        actor_id: i64,
    ) -> AppResult<order_line_item_entity::Model> {
        let line_item = order_line_item_entity::Entity::find_by_id(line_item_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Order line item not found".to_string()))?;

        if self.academy_owner_of(&line_item).await? != actor_id {
            return Err(AppError::Forbidden);
        }

        let new_status = LineItemStatus::from_str(requested_status).map_err(|_| {
            AppError::InvalidInput(format!("'{requested_status}' is not a valid status"))
        })?;

        if !line_item.status.allowed_next().contains(&new_status) {
            return Err(AppError::InvalidTransition {
                from: line_item.status.to_string(),
                to: new_status.to_string(),
            });
        }

        let mut update = line_item.into_active_model();
        update.status = Set(new_status);
        update.updated_at = Set(Some(Utc::now()));
        let line_item = update.update(&self.pool).await?;

        log::info!(
            "Line item {} moved to {} by user {actor_id}",
            line_item.id,
            line_item.status
        );

        Ok(line_item)
    }

    /// Resolves the line item -> pass -> academy -> owner chain.
    pub async fn academy_owner_of(
        &self,
        line_item: &order_line_item_entity::Model,
    ) -> AppResult<i64> {
        let pass = pass_entity::Entity::find_by_id(line_item.pass_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Pass not found".to_string()))?;

        let academy = academy_entity::Entity::find_by_id(pass.academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))?;

        Ok(academy.user_id)
    }

    /// The owner's approval inbox: every line item referencing one of the
    /// academy's passes, newest first.
    pub async fn list_for_academy(
        &self,
        academy_id: i64,
        actor_id: i64,
        status_filter: Option<&str>,
    ) -> AppResult<Vec<order_line_item_entity::Model>> {
        let academy = academy_entity::Entity::find_by_id(academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))?;

        if academy.user_id != actor_id {
            return Err(AppError::Forbidden);
        }

        let mut query = order_line_item_entity::Entity::find()
            .inner_join(pass_entity::Entity)
            .filter(pass_entity::Column::AcademyId.eq(academy_id));

        if let Some(status) = status_filter {
            let status = LineItemStatus::from_str(status)
                .map_err(|_| AppError::InvalidInput(format!("'{status}' is not a valid status")))?;
            query = query.filter(order_line_item_entity::Column::Status.eq(status));
        }

        let line_items = query
            .order_by_desc(order_line_item_entity::Column::Id)
            .all(&self.pool)
            .await?;

        Ok(line_items)
    }
}
