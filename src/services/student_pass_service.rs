use crate::entities::student_pass_entity;
use crate::error::AppResult;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

#[derive(Clone)]
pub struct StudentPassService {
    pool: DatabaseConnection,
}

impl StudentPassService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self { pool }
    }

    pub async fn list_for_user(
        &self,
        user_id: i64,
    ) -> AppResult<Vec<student_pass_entity::Model>> {
        let passes = student_pass_entity::Entity::find()
            .filter(student_pass_entity::Column::UserId.eq(user_id))
            .order_by_desc(student_pass_entity::Column::Id)
            .all(&self.pool)
            .await?;
        Ok(passes)
    }
}
