use crate::entities::{StudentPassStatus, student_pass_entity};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StudentPassResponse {
    pub id: i64,
    pub pass_id: i64,
    pub academy_id: i64,
    pub status: StudentPassStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub credits_remaining: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
}

impl From<student_pass_entity::Model> for StudentPassResponse {
    fn from(m: student_pass_entity::Model) -> Self {
        Self {
            id: m.id,
            pass_id: m.pass_id,
            academy_id: m.academy_id,
            status: m.status,
            expires_at: m.expires_at,
            credits_remaining: m.credits_remaining,
            created_at: m.created_at,
        }
    }
}
