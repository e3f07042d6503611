use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{DeriveActiveEnum, EnumIter};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Eq, ToSchema, DeriveActiveEnum, EnumIter,
)]
#[sea_orm(rs_type = "String", db_type = "String(None)")]
#[serde(rename_all = "snake_case")]
pub enum PassType {
    /// A single class.
    #[sea_orm(string_value = "single")]
    Single,
    /// Unlimited classes for 1 day.
    #[sea_orm(string_value = "day_pass")]
    DayPass,
    /// Unlimited classes for 7 days.
    #[sea_orm(string_value = "week_pass")]
    WeekPass,
    /// Unlimited classes for 1 calendar month.
    #[sea_orm(string_value = "month_pass")]
    MonthPass,
    /// A card with a fixed number of classes.
    #[sea_orm(string_value = "punch_card")]
    PunchCard,
}

impl std::fmt::Display for PassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PassType::Single => write!(f, "single"),
            PassType::DayPass => write!(f, "day_pass"),
            PassType::WeekPass => write!(f, "week_pass"),
            PassType::MonthPass => write!(f, "month_pass"),
            PassType::PunchCard => write!(f, "punch_card"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "passes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub academy_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub price_cents: i64,
    pub currency: String,
    pub pass_type: PassType,
    pub class_credits: Option<i32>,
    pub is_active: bool,
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
