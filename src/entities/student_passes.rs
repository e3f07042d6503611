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
pub enum StudentPassStatus {
    #[sea_orm(string_value = "active")]
    Active,
    #[sea_orm(string_value = "expired")]
    Expired,
    #[sea_orm(string_value = "depleted")]
    Depleted,
}

impl std::fmt::Display for StudentPassStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StudentPassStatus::Active => write!(f, "active"),
            StudentPassStatus::Expired => write!(f, "expired"),
            StudentPassStatus::Depleted => write!(f, "depleted"),
        }
    }
}

/// The rule limiting an entitlement: it is either time-limited or
/// credit-limited, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PassLimit {
    TimeLimited(DateTime<Utc>),
    CreditLimited(i32),
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq)]
#[sea_orm(table_name = "student_passes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub pass_id: i64,
    pub order_line_item_id: i64,
    pub academy_id: i64,
    pub status: StudentPassStatus,
    pub expires_at: Option<DateTime<Utc>>,
    pub credits_remaining: Option<i32>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Model {
    /// Collapses the two nullable columns into the one limit that applies.
    /// A row with both set would violate the activation invariant; the
    /// expiry arm wins so such a row still stops being redeemable.
    pub fn limit(&self) -> Option<PassLimit> {
        match (self.expires_at, self.credits_remaining) {
            (Some(expires_at), _) => Some(PassLimit::TimeLimited(expires_at)),
            (None, Some(credits)) => Some(PassLimit::CreditLimited(credits)),
            (None, None) => None,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::passes::Entity",
        from = "Column::PassId",
        to = "super::passes::Column::Id"
    )]
    Passes,
}

impl Related<super::passes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Passes.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
