use crate::entities::{PassType, academy_entity, order_line_item_entity, pass_entity};
use crate::error::{AppError, AppResult};
use crate::models::{CreatePassRequest, UpdatePassRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, Set,
};

#[derive(Clone)]
pub struct PassService {
    pool: DatabaseConnection,
}

impl PassService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_pass(
        &self,
        academy_id: i64,
        actor_id: i64,
        req: CreatePassRequest,
    ) -> AppResult<pass_entity::Model> {
        let academy = self.authorized_academy(academy_id, actor_id).await?;

        if req.name.trim().is_empty() {
            return Err(AppError::ValidationFailed("name can't be blank".to_string()));
        }
        if req.price_cents < 0 {
            return Err(AppError::ValidationFailed(
                "price_cents must be greater than or equal to 0".to_string(),
            ));
        }
        validate_credit_rule(&req.pass_type, req.class_credits)?;

        let now = Utc::now();
        let pass = pass_entity::ActiveModel {
            academy_id: Set(academy.id),
            name: Set(req.name),
            description: Set(req.description),
            price_cents: Set(req.price_cents),
            currency: Set(req.currency.unwrap_or_else(|| "EUR".to_string())),
            pass_type: Set(req.pass_type),
            class_credits: Set(req.class_credits),
            is_active: Set(req.is_active.unwrap_or(true)),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(pass)
    }

    pub async fn update_pass(
        &self,
        academy_id: i64,
        pass_id: i64,
        actor_id: i64,
        req: UpdatePassRequest,
    ) -> AppResult<pass_entity::Model> {
        self.authorized_academy(academy_id, actor_id).await?;
        let pass = self.pass_in_academy(academy_id, pass_id).await?;

        let pass_type = req.pass_type.clone().unwrap_or_else(|| pass.pass_type.clone());
        let class_credits = match req.class_credits {
            Some(credits) => Some(credits),
            None => pass.class_credits,
        };
        // Re-check the credit rule against the fields as they will be stored.
        validate_credit_rule(&pass_type, class_credits)?;

        let mut update = pass.into_active_model();
        if let Some(name) = req.name {
            if name.trim().is_empty() {
                return Err(AppError::ValidationFailed("name can't be blank".to_string()));
            }
            update.name = Set(name);
        }
        if let Some(description) = req.description {
            update.description = Set(Some(description));
        }
        if let Some(price_cents) = req.price_cents {
            if price_cents < 0 {
                return Err(AppError::ValidationFailed(
                    "price_cents must be greater than or equal to 0".to_string(),
                ));
            }
            update.price_cents = Set(price_cents);
        }
        update.pass_type = Set(pass_type);
        update.class_credits = Set(class_credits);
        if let Some(is_active) = req.is_active {
            update.is_active = Set(is_active);
        }
        update.updated_at = Set(Some(Utc::now()));

        let pass = update.update(&self.pool).await?;
        Ok(pass)
    }

    pub async fn delete_pass(
        &self,
        academy_id: i64,
        pass_id: i64,
        actor_id: i64,
    ) -> AppResult<()> {
        self.authorized_academy(academy_id, actor_id).await?;
        let pass = self.pass_in_academy(academy_id, pass_id).await?;

        // Purchased passes are referenced by line items and entitlements;
        // they can only be taken off the catalog.
        let purchased = order_line_item_entity::Entity::find()
            .filter(order_line_item_entity::Column::PassId.eq(pass.id))
            .one(&self.pool)
            .await?
            .is_some();
        if purchased {
            return Err(AppError::ValidationFailed(
                "Pass has been purchased and cannot be deleted; deactivate it instead".to_string(),
            ));
        }

        pass.delete(&self.pool).await?;
        Ok(())
    }

    /// Catalog listing: active passes only.
    pub async fn list_for_academy(&self, academy_id: i64) -> AppResult<Vec<pass_entity::Model>> {
        let passes = pass_entity::Entity::find()
            .filter(pass_entity::Column::AcademyId.eq(academy_id))
            .filter(pass_entity::Column::IsActive.eq(true))
            .all(&self.pool)
            .await?;
        Ok(passes)
    }

    async fn authorized_academy(
        &self,
        academy_id: i64,
        actor_id: i64,
    ) -> AppResult<academy_entity::Model> {
        let academy = academy_entity::Entity::find_by_id(academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))?;

        if academy.user_id != actor_id {
            return Err(AppError::Forbidden);
        }

        Ok(academy)
    }

    async fn pass_in_academy(
        &self,
        academy_id: i64,
        pass_id: i64,
    ) -> AppResult<pass_entity::Model> {
        pass_entity::Entity::find_by_id(pass_id)
            .one(&self.pool)
            .await?
            .filter(|p| p.academy_id == academy_id)
            .ok_or_else(|| AppError::NotFound("Pass not found for this academy".to_string()))
    }
}

/// A punch card must carry a positive credit count; no other type may.
fn validate_credit_rule(pass_type: &PassType, class_credits: Option<i32>) -> AppResult<()> {
    match (pass_type, class_credits) {
        (PassType::PunchCard, Some(credits)) if credits > 0 => Ok(()),
        (PassType::PunchCard, _) => Err(AppError::ValidationFailed(
            "A punch card must have a positive number of class credits".to_string(),
        )),
        (_, Some(_)) => Err(AppError::ValidationFailed(format!(
            "class_credits is only allowed for punch cards, not {pass_type}"
        ))),
        (_, None) => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credit_rule() {
        assert!(validate_credit_rule(&PassType::PunchCard, Some(10)).is_ok());
        assert!(validate_credit_rule(&PassType::PunchCard, Some(0)).is_err());
        assert!(validate_credit_rule(&PassType::PunchCard, None).is_err());
        assert!(validate_credit_rule(&PassType::DayPass, None).is_ok());
        assert!(validate_credit_rule(&PassType::DayPass, Some(3)).is_err());
        assert!(validate_credit_rule(&PassType::Single, None).is_ok());
    }
}
