use crate::entities::academy_entity;
use crate::error::{AppError, AppResult};
use crate::models::CreateAcademyRequest;
use crate::utils::validate_email;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct AcademyService {
    pool: DatabaseConnection,
}

impl AcademyService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_academy(
        &self,
        owner_id: i64,
        req: CreateAcademyRequest,
    ) -> AppResult<academy_entity::Model> {
        for (field, value) in [
            ("name", &req.name),
            ("street_address", &req.street_address),
            ("city", &req.city),
            ("country", &req.country),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::ValidationFailed(format!("{field} can't be blank")));
            }
        }
        validate_email(&req.email)?;

        let email_taken = academy_entity::Entity::find()
            .filter(academy_entity::Column::Email.eq(req.email.clone()))
            .one(&self.pool)
            .await?
            .is_some();
        if email_taken {
            return Err(AppError::ValidationFailed(
                "Email has already been taken".to_string(),
            ));
        }

        let now = Utc::now();
        let academy = academy_entity::ActiveModel {
            user_id: Set(owner_id),
            name: Set(req.name),
            email: Set(req.email),
            phone_number: Set(req.phone_number),
            website: Set(req.website),
            description: Set(req.description),
            street_address: Set(req.street_address),
            city: Set(req.city),
            state_province: Set(req.state_province),
            postal_code: Set(req.postal_code),
            country: Set(req.country),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        log::info!("Created academy {} for owner {owner_id}", academy.id);

        Ok(academy)
    }

    pub async fn get_academy(&self, academy_id: i64) -> AppResult<academy_entity::Model> {
        academy_entity::Entity::find_by_id(academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))
    }

    pub async fn list_academies(&self) -> AppResult<Vec<academy_entity::Model>> {
        let academies = academy_entity::Entity::find()
            .order_by_asc(academy_entity::Column::Name)
            .all(&self.pool)
            .await?;
        Ok(academies)
    }
}
