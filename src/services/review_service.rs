use crate::entities::{
    academy_entity, booking_entity, class_schedule_entity, review_entity,
};
use crate::error::{AppError, AppResult};
use crate::models::{CreateReviewRequest, UpdateReviewRequest};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, ModelTrait,
    QueryFilter, Set,
};

#[derive(Clone)]
pub struct ReviewService {
    pool: DatabaseConnection,
}

impl ReviewService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn create_review(
        &self,
        user_id: i64,
        academy_id: i64,
        req: CreateReviewRequest,
    ) -> AppResult<review_entity::Model> {
        let academy = academy_entity::Entity::find_by_id(academy_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Academy not found".to_string()))?;

        if !self.user_has_attended(user_id, academy.id).await? {
            return Err(AppError::ValidationFailed(
                "You can only review academies you have booked a class with".to_string(),
            ));
        }

        validate_rating(req.rating)?;

        let already_reviewed = review_entity::Entity::find()
            .filter(review_entity::Column::UserId.eq(user_id))
            .filter(review_entity::Column::AcademyId.eq(academy.id))
            .one(&self.pool)
            .await?
            .is_some();
        if already_reviewed {
            return Err(AppError::ValidationFailed(
                "You have already reviewed this academy".to_string(),
            ));
        }

        let now = Utc::now();
        let review = review_entity::ActiveModel {
            user_id: Set(user_id),
            academy_id: Set(academy.id),
            rating: Set(req.rating),
            comment: Set(req.comment),
            created_at: Set(Some(now)),
            updated_at: Set(Some(now)),
            ..Default::default()
        }
        .insert(&self.pool)
        .await?;

        Ok(review)
    }

    pub async fn update_review(
        &self,
        review_id: i64,
        user_id: i64,
        req: UpdateReviewRequest,
    ) -> AppResult<review_entity::Model> {
        let review = self.authored_review(review_id, user_id).await?;

        let mut update = review.into_active_model();
        if let Some(rating) = req.rating {
            validate_rating(rating)?;
            update.rating = Set(rating);
        }
        if let Some(comment) = req.comment {
            update.comment = Set(Some(comment));
        }
        update.updated_at = Set(Some(Utc::now()));

        let review = update.update(&self.pool).await?;
        Ok(review)
    }

    pub async fn delete_review(&self, review_id: i64, user_id: i64) -> AppResult<()> {
        let review = self.authored_review(review_id, user_id).await?;
        review.delete(&self.pool).await?;
        Ok(())
    }

    pub async fn list_for_academy(&self, academy_id: i64) -> AppResult<Vec<review_entity::Model>> {
        let reviews = review_entity::Entity::find()
            .filter(review_entity::Column::AcademyId.eq(academy_id))
            .all(&self.pool)
            .await?;
        Ok(reviews)
    }

    /// Attended means having booked a class at one of the academy's
    /// schedules.
    async fn user_has_attended(&self, user_id: i64, academy_id: i64) -> AppResult<bool> {
        let attended = booking_entity::Entity::find()
            .inner_join(class_schedule_entity::Entity)
            .filter(booking_entity::Column::UserId.eq(user_id))
            .filter(class_schedule_entity::Column::AcademyId.eq(academy_id))
            .one(&self.pool)
            .await?
            .is_some();
        Ok(attended)
    }

    async fn authored_review(
        &self,
        review_id: i64,
        user_id: i64,
    ) -> AppResult<review_entity::Model> {
        let review = review_entity::Entity::find_by_id(review_id)
            .one(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Review not found".to_string()))?;

        if review.user_id != user_id {
            return Err(AppError::Forbidden);
        }

        Ok(review)
    }
}

fn validate_rating(rating: i32) -> AppResult<()> {
    if !(1..=5).contains(&rating) {
        return Err(AppError::ValidationFailed(
            "Rating must be between 1 and 5".to_string(),
        ));
    }
    Ok(())
}
