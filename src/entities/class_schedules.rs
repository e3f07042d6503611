use chrono::{DateTime, NaiveTime, Utc};
use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "class_schedules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub academy_id: i64,
    pub title: String,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: i32,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::academies::Entity",
        from = "Column::AcademyId",
        to = "super::academies::Column::Id"
    )]
    Academies,
}

impl Related<super::academies::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Academies.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
