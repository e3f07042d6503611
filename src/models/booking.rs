use crate::entities::booking_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct BookingResponse {
    pub id: i64,
    pub user_id: i64,
    pub class_schedule_id: i64,
    pub student_pass_id: i64,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<booking_entity::Model> for BookingResponse {
    fn from(m: booking_entity::Model) -> Self {
        Self {
            id: m.id,
            user_id: m.user_id,
            class_schedule_id: m.class_schedule_id,
            student_pass_id: m.student_pass_id,
            created_at: m.created_at,
        }
    }
}
