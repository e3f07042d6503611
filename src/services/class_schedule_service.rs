use crate::entities::{academy_entity, class_schedule_entity};
use crate::error::{AppError, AppResult};
use crate::models::CreateClassScheduleRequest;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, ModelTrait, QueryFilter, Set,
};

#[derive(Clone)]
pub struct ClassScheduleService {
    pool: DatabaseConnection,
}

impl ClassScheduleService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_schedule(
        &self,
        academy_id: i64,
        actor_id: i64,
        req: CreateClassScheduleRequest,
    ) -> AppResult<class_schedule_entity::Model> {
        let academy = academy_entity::Entity::find_by_id(academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))?;

        if academy.user_id != actor_id {
            return Err(AppError::Forbidden);
        }

        if req.title.trim().is_empty() {
            return Err(AppError::ValidationFailed("title can't be blank".to_string()));
        }
        if !(0..=6).contains(&req.day_of_week) {
            return Err(AppError::ValidationFailed(
                "day_of_week must be a valid day (0-6)".to_string(),
            ));
        }
        if req.end_time <= req.start_time {
            return Err(AppError::ValidationFailed(
                "end_time must be after start time".to_string(),
            ));
        }

        let now = Utc::now();
        let schedule = class_schedule_entity::ActiveModel {
            academy_id: Set(academy.id),
            title: Set(req.title),
            day_of_week: Set(req.day_of_week),
            start_time: Set(req.start_time),
            end_time: Set(req.end_time),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(schedule)
    }

    pub async fn list_for_academy(
        &self,
        academy_id: i64,
    ) -> AppResult<Vec<class_schedule_entity::Model>> {
        let schedules = class_schedule_entity::Entity::find()
            .filter(class_schedule_entity::Column::AcademyId.eq(academy_id))
            .all(&self.pool)
            .await?;
        Ok(schedules)
    }

    pub async fn delete_schedule(&self, schedule_id: i64, actor_id: i64) -> AppResult<()> {
        let schedule = class_schedule_entity::Entity::find_by_id(schedule_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Class schedule not found".to_string()))?;

        let academy = academy_entity::Entity::find_by_id(schedule.academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))?;

        if academy.user_id != actor_id {
            return Err(AppError::Forbidden);
        }

        schedule.delete(&self.pool).await?;
        Ok(())
    }
}
