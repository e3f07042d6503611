use crate::entities::class_schedule_entity;
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreateClassScheduleRequest {
    pub title: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    #[schema(value_type = String, example = "18:00:00")]
    pub start_time: NaiveTime,
    #[schema(value_type = String, example = "19:30:00")]
    pub end_time: NaiveTime,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassScheduleResponse {
    pub id: i64,
    pub academy_id: i64,
    pub title: String,
    pub day_of_week: i32,
    #[schema(value_type = String)]
    pub start_time: NaiveTime,
    #[schema(value_type = String)]
    pub end_time: NaiveTime,
}

impl From<class_schedule_entity::Model> for ClassScheduleResponse {
    fn from(m: class_schedule_entity::Model) -> Self {
        Self {
            id: m.id,
            academy_id: m.academy_id,
            title: m.title,
            day_of_week: m.day_of_week,
            start_time: m.start_time,
            end_time: m.end_time,
        }
    }
}
