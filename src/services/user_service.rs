use crate::entities::user_entity;
use crate::error::{AppError, AppResult};
use crate::models::UpdateProfileRequest;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, IntoActiveModel, Set};

#[derive(Clone)]
pub struct UserService {
    pool: DatabaseConnection,
}

impl UserService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn get_profile(&self, user_id: i64) -> AppResult<user_entity::Model> {
        user_entity::Entity::find_by_id(user_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> AppResult<user_entity::Model> {
        let user = self.get_profile(user_id).await?;

        let mut update = user.into_active_model();
        if let Some(firstname) = req.firstname {
            if firstname.trim().is_empty() {
                return Err(AppError::ValidationFailed(
                    "firstname can't be blank".to_string(),
                ));
            }
            update.firstname = Set(firstname);
        }
        if let Some(lastname) = req.lastname {
            if lastname.trim().is_empty() {
                return Err(AppError::ValidationFailed(
                    "lastname can't be blank".to_string(),
                ));
            }
            update.lastname = Set(lastname);
        }
        if let Some(belt_rank) = req.belt_rank {
            update.belt_rank = Set(Some(belt_rank));
        }
        update.updated_at = Set(Some(Utc::now()));

        let user = update.update(&self.pool).await?;
        Ok(user)
    }
}
