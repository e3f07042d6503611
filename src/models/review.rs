use crate::entities::review_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateReviewRequest {
    /// 1 to 5.
    pub rating: i32,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UpdateReviewRequest {
    pub rating: Option<i32>,
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ReviewResponse {
    pub id: i64,
    pub user_id: i64,
    pub academy_id: i64,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<review_entity::Model> for ReviewResponse {
    fn from(m: review_entity::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            academy_id: m.academy_id,
            rating: m.rating,
            comment: m.comment,
            created_at: m.created_at,
        }
    }
}
